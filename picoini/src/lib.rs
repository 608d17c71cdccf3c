// SPDX-License-Identifier: Apache-2.0

//! A zero-copy INI parser for resource-constrained systems.
//!
//! The parser never allocates and never copies the input. Section names,
//! keys and string values are handed out as slices of the caller's buffer,
//! numbers and booleans are decoded to native types.
//!
//! ```
//! use picoini::{parse, Value};
//!
//! let mut seen = 0;
//! parse("[net]\nport = 8080\n", &mut |section: &str, key: &str, value: Value<'_>| {
//!     assert_eq!((section, key, value), ("net", "port", Value::Number(8080.0)));
//!     seen += 1;
//!     Ok::<(), ()>(())
//! })
//! .unwrap();
//! assert_eq!(seen, 1);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![forbid(unsafe_code)]

mod span;

mod scanner;

mod tokenizer;

mod value;
pub use value::Value;

mod grammar;

mod handler;
pub use handler::PropertyHandler;

mod parse_error;
pub use parse_error::{ParseError, PushParseError};

mod ini_parser;
pub use ini_parser::{parse, parse_bytes, IniParser};
pub use grammar::Property;
