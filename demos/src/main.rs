// SPDX-License-Identifier: Apache-2.0

//! Prints every property of an INI document with its decoded type.

use std::convert::Infallible;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use picoini::{PropertyHandler, Value};

const SAMPLE: &str = concat!(
    "[foo]\n",
    "bar = 10 # This line has spaces and a comment\n",
    "\n",
    "[cheese]    \n",
    "foo      =      \"This is a string\"\n",
    "bar=true\n",
    "bar=TrUe\n",
    "bar=TRUE\n",
    "bar=false\n",
    "bar=FaLsE\n",
    "baz=10\n",
    "baz=.3\n",
    "qux=-.75\n",
    "baz=+100.0\n",
);

#[derive(Parser, Debug)]
#[command(about = "Dump the properties of an INI file")]
struct Args {
    /// INI file to parse; the built-in sample document is used when omitted
    path: Option<PathBuf>,

    /// Only print the final status
    #[arg(short, long)]
    quiet: bool,
}

struct Printer {
    quiet: bool,
    count: usize,
}

impl<'input> PropertyHandler<'input, Infallible> for Printer {
    fn handle_property(
        &mut self,
        section: &'input str,
        key: &'input str,
        value: Value<'input>,
    ) -> Result<(), Infallible> {
        self.count += 1;
        if self.quiet {
            return Ok(());
        }
        match value {
            Value::Text(text) => println!("[{section}] {key} (string) \"{text}\""),
            Value::Number(number) => println!("[{section}] {key} (double) {number:.6}"),
            Value::Boolean(flag) => println!("[{section}] {key} (boolean) {flag}"),
        }
        Ok(())
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let source = match &args.path {
        Some(path) => match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Error: Unable to read file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => SAMPLE.as_bytes().to_vec(),
    };

    let mut printer = Printer {
        quiet: args.quiet,
        count: 0,
    };
    match picoini::parse_bytes(&source, &mut printer) {
        Ok(()) => {
            info!("parsed {} properties", printer.count);
            println!("1");
        }
        Err(e) => {
            eprintln!("{e}");
            println!("0");
            std::process::exit(1);
        }
    }
}
