// SPDX-License-Identifier: Apache-2.0

//! The three line-level productions.
//!
//! Every production copies the cursor on entry and puts it back on failure,
//! so a failed attempt never leaves input partially consumed.

use log::debug;

use crate::span::{Cursor, Span};
use crate::tokenizer::{next_token, next_token_from, Token, TokenKind};
use crate::{ParseError, Value};

/// A single `key = value` line together with the section it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Property<'input> {
    pub section: &'input str,
    pub key: &'input str,
    pub value: Value<'input>,
}

/// State threaded through the productions for one parse.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParseContext<'a> {
    pub cursor: Cursor<'a>,
    /// Name of the most recent `[section]`, if any.
    pub section: Option<Span<'a>>,
    /// 1-based line of the cursor.
    pub line: usize,
}

impl<'a> ParseContext<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            cursor: Span::new(input),
            section: None,
            line: 1,
        }
    }
}

/// `'\n'`
pub(crate) fn parse_empty_line(ctx: &mut ParseContext<'_>) -> bool {
    let restart = ctx.cursor;
    match next_token(&mut ctx.cursor) {
        Some(token) if token.is_char(b'\n') => {
            ctx.line += 1;
            true
        }
        _ => {
            ctx.cursor = restart;
            false
        }
    }
}

/// `'[' identifier ']'`
pub(crate) fn parse_section(ctx: &mut ParseContext<'_>) -> bool {
    let restart = ctx.cursor;
    match section_name(&mut ctx.cursor) {
        Some(name) => {
            debug!("line {}: section [{}]", ctx.line, name.as_str().unwrap_or_default());
            ctx.section = Some(name);
            true
        }
        None => {
            ctx.cursor = restart;
            false
        }
    }
}

fn section_name<'a>(cursor: &mut Cursor<'a>) -> Option<Span<'a>> {
    if !next_token(cursor)?.is_char(b'[') {
        return None;
    }
    let name = next_token(cursor)?;
    if name.kind != TokenKind::Identifier {
        return None;
    }
    if !next_token(cursor)?.is_char(b']') {
        return None;
    }
    Some(name.span)
}

/// `identifier '=' value`
///
/// Returns `Ok(None)` if the input here is not a property. A well-formed
/// property before any section header is an error rather than a mismatch.
pub(crate) fn parse_property<'a>(
    ctx: &mut ParseContext<'a>,
) -> Result<Option<Property<'a>>, ParseError<'a>> {
    let restart = ctx.cursor;
    let Some((key, token)) = property_tokens(&mut ctx.cursor) else {
        ctx.cursor = restart;
        return Ok(None);
    };
    let Some(section) = ctx.section else {
        ctx.cursor = restart;
        return Err(ParseError::PropertyBeforeSection {
            line: ctx.line,
            text: restart.rest_of_line().as_bytes(),
        });
    };
    let Some(value) = Value::from_token(&token)? else {
        ctx.cursor = restart;
        return Ok(None);
    };
    let property = Property {
        section: section.as_str()?,
        key: key.span.as_str()?,
        value,
    };
    debug!(
        "line {}: [{}] {} = {:?}",
        ctx.line, property.section, property.key, property.value
    );
    Ok(Some(property))
}

fn property_tokens<'a>(cursor: &mut Cursor<'a>) -> Option<(Token<'a>, Token<'a>)> {
    let key = next_token(cursor)?;
    if key.kind != TokenKind::Identifier {
        return None;
    }
    if !next_token(cursor)?.is_char(b'=') {
        return None;
    }
    let value = value_token(cursor)?;
    Some((key, value))
}

/// `number | string | boolean | identifier`
///
/// A value that does not classify as a literal straight away is re-classified
/// from the same start position, each time only trying kinds broader than the
/// last result. An identifier that never becomes a literal is a bare word.
fn value_token<'a>(cursor: &mut Cursor<'a>) -> Option<Token<'a>> {
    let start = *cursor;
    let first = next_token(cursor)?;
    let after_first = *cursor;

    let mut token = first;
    while !token.kind.is_literal() {
        let mut retry = start;
        match next_token_from(&mut retry, token.kind) {
            Some(broader) => {
                token = broader;
                *cursor = retry;
            }
            None => break,
        }
    }

    if token.kind.is_literal() {
        Some(token)
    } else if first.kind == TokenKind::Identifier {
        *cursor = after_first;
        Some(first)
    } else {
        None
    }
}
