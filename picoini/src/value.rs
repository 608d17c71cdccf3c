// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::scanner::matches_keyword;
use crate::tokenizer::{Token, TokenKind};
use crate::ParseError;

/// A decoded property value.
///
/// Text borrows from the input buffer; numbers and booleans are decoded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'input> {
    /// A quoted string's content, or an unquoted bare word such as `localhost`.
    Text(&'input str),
    /// A number such as `10`, `-.75` or `+100.0`.
    Number(f64),
    /// `true` or `false`, in any ASCII case.
    Boolean(bool),
}

impl<'input> Value<'input> {
    /// Decodes a classified value token.
    ///
    /// Returns `Ok(None)` for token kinds that do not carry a value.
    pub(crate) fn from_token(token: &Token<'input>) -> Result<Option<Self>, ParseError<'input>> {
        let value = match token.kind {
            TokenKind::Identifier | TokenKind::String => Value::Text(token.span.as_str()?),
            TokenKind::Number => {
                let raw = token.span.as_str()?;
                Value::Number(f64::from_str(raw).map_err(|_| ParseError::InvalidNumber)?)
            }
            TokenKind::Boolean => Value::Boolean(matches_keyword(&token.span, "true", true)),
            TokenKind::None | TokenKind::Char => return Ok(None),
        };
        Ok(Some(value))
    }

    /// The text, if this is a text value.
    pub fn as_str(&self) -> Option<&'input str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Short type label, as printed by the dump tool.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "string",
            Value::Number(_) => "double",
            Value::Boolean(_) => "boolean",
        }
    }
}

impl core::fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Number(number) => write!(f, "{number}"),
            Value::Boolean(flag) => write!(f, "{flag}"),
        }
    }
}
