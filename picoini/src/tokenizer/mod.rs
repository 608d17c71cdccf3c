// SPDX-License-Identifier: Apache-2.0

//! Single-token classifier.
//!
//! Each call to [`next_token`] skips blanks and a trailing comment, then tries
//! the token kinds in a fixed priority order and returns the first that
//! matches. [`next_token_from`] re-enters that order after a given kind, which
//! lets the property grammar re-classify a value at the same start position
//! as progressively broader kinds.

use log::trace;

use crate::scanner::{matches_keyword, scan, skip_comment, skip_whitespace};
use crate::span::{Cursor, Span};

/// Token classes, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Seed for a fresh classification; never produced by the tokenizer.
    None,
    Identifier,
    Number,
    String,
    Boolean,
    /// Any single byte, including `\n`. Always matches while input remains.
    Char,
}

impl TokenKind {
    /// True for kinds that decode to a literal value on their own.
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::String | TokenKind::Boolean)
    }
}

/// The kind to try after `after` has been tried, or `None` once `Char` is done.
pub fn next_kind(after: TokenKind) -> Option<TokenKind> {
    match after {
        TokenKind::None => Some(TokenKind::Identifier),
        TokenKind::Identifier => Some(TokenKind::Number),
        TokenKind::Number => Some(TokenKind::String),
        TokenKind::String => Some(TokenKind::Boolean),
        TokenKind::Boolean => Some(TokenKind::Char),
        TokenKind::Char => None,
    }
}

/// A classified span of input.
///
/// For strings the span covers the content between the quotes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub span: Span<'a>,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, span: Span<'a>) -> Self {
        Self { span, kind }
    }

    /// True if this is the single-character token `c`.
    pub fn is_char(&self, c: u8) -> bool {
        self.kind == TokenKind::Char && self.span.as_bytes() == [c]
    }
}

/// Classifies the next token, trying every kind.
pub fn next_token<'a>(cursor: &mut Cursor<'a>) -> Option<Token<'a>> {
    next_token_from(cursor, TokenKind::None)
}

/// Classifies the next token, trying only the kinds that come after `after`.
///
/// Returns `None` at end of input, or when `after` was the last kind.
/// On `None` only leading blanks and comments may have been consumed.
pub fn next_token_from<'a>(cursor: &mut Cursor<'a>, after: TokenKind) -> Option<Token<'a>> {
    skip_whitespace(cursor);
    skip_comment(cursor);
    if cursor.is_empty() {
        return None;
    }
    let mut kind = next_kind(after)?;
    loop {
        if let Some(token) = classify(cursor, kind) {
            trace!("token {:?} at {}", token.kind, token.span.start());
            return Some(token);
        }
        kind = next_kind(kind)?;
    }
}

fn classify<'a>(cursor: &mut Cursor<'a>, kind: TokenKind) -> Option<Token<'a>> {
    match kind {
        TokenKind::None => None,
        TokenKind::Identifier => scan_identifier(cursor),
        TokenKind::Number => scan_number(cursor),
        TokenKind::String => scan_string(cursor),
        TokenKind::Boolean => scan_boolean(cursor),
        TokenKind::Char => scan_char(cursor),
    }
}

fn scan_identifier<'a>(cursor: &mut Cursor<'a>) -> Option<Token<'a>> {
    if !cursor.peek()?.is_ascii_alphabetic() {
        return None;
    }
    let begin = *cursor;
    scan(cursor, Some(u8::is_ascii_alphanumeric), None);
    Some(Token::new(TokenKind::Identifier, begin.up_to(cursor)))
}

// [+-]? digit* ('.' digit*)? with at least one digit somewhere
fn scan_number<'a>(cursor: &mut Cursor<'a>) -> Option<Token<'a>> {
    let restart = *cursor;
    if !matches!(cursor.peek()?, b'+' | b'-' | b'.' | b'0'..=b'9') {
        return None;
    }
    if matches!(cursor.peek(), Some(b'+' | b'-')) {
        cursor.advance();
    }
    let mut digits = scan(cursor, Some(u8::is_ascii_digit), None);
    if cursor.peek() == Some(b'.') {
        cursor.advance();
        digits += scan(cursor, Some(u8::is_ascii_digit), None);
    }
    if digits == 0 {
        *cursor = restart;
        return None;
    }
    Some(Token::new(TokenKind::Number, restart.up_to(cursor)))
}

fn is_string_terminator(byte: &u8) -> bool {
    matches!(byte, b'"' | b'\n')
}

fn scan_string<'a>(cursor: &mut Cursor<'a>) -> Option<Token<'a>> {
    if cursor.peek()? != b'"' {
        return None;
    }
    let restart = *cursor;
    cursor.advance();
    let content = *cursor;
    scan(cursor, None, Some(is_string_terminator));
    let token = Token::new(TokenKind::String, content.up_to(cursor));
    if cursor.advance() != Some(b'"') {
        *cursor = restart;
        return None;
    }
    Some(token)
}

fn scan_boolean<'a>(cursor: &mut Cursor<'a>) -> Option<Token<'a>> {
    let restart = *cursor;
    let word = scan_identifier(cursor)?;
    if matches_keyword(&word.span, "true", true) || matches_keyword(&word.span, "false", true) {
        return Some(Token::new(TokenKind::Boolean, word.span));
    }
    *cursor = restart;
    None
}

fn scan_char<'a>(cursor: &mut Cursor<'a>) -> Option<Token<'a>> {
    let begin = *cursor;
    cursor.advance()?;
    Some(Token::new(TokenKind::Char, begin.up_to(cursor)))
}
