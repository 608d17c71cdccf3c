// SPDX-License-Identifier: Apache-2.0

//! Byte-level scanning primitives shared by the tokenizer.

use crate::span::{Cursor, Span};

/// A predicate selecting a class of bytes, e.g. `u8::is_ascii_digit`.
pub type ByteClass = fn(&u8) -> bool;

/// Whitespace that separates tokens. `\n` is a token of its own and is not included.
pub fn is_blank(byte: &u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | 0x0B | 0x0C)
}

/// Advances past blanks, returning how many bytes were skipped.
pub fn skip_whitespace(cursor: &mut Cursor<'_>) -> usize {
    scan(cursor, Some(is_blank), None)
}

/// Skips a `#` comment up to, but not including, the next `\n`.
pub fn skip_comment(cursor: &mut Cursor<'_>) -> usize {
    if cursor.peek() != Some(b'#') {
        return 0;
    }
    scan(cursor, None, Some(|b| *b == b'\n'))
}

/// Advances while each byte is in `accept` (if given) and not in `reject` (if given).
///
/// Returns the number of bytes consumed.
pub fn scan(cursor: &mut Cursor<'_>, accept: Option<ByteClass>, reject: Option<ByteClass>) -> usize {
    let mut length = 0;
    while let Some(byte) = cursor.peek() {
        let accepted = accept.map_or(true, |class| class(&byte));
        let rejected = reject.is_some_and(|class| class(&byte));
        if !accepted || rejected {
            break;
        }
        cursor.advance();
        length += 1;
    }
    length
}

/// Compares the whole span against `keyword`, optionally ignoring ASCII case.
pub fn matches_keyword(span: &Span<'_>, keyword: &str, case_insensitive: bool) -> bool {
    let text = span.as_bytes();
    if case_insensitive {
        text.eq_ignore_ascii_case(keyword.as_bytes())
    } else {
        text == keyword.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_whitespace_stops_at_newline() {
        let mut cursor = Span::new(b" \t\r \nrest");
        assert_eq!(skip_whitespace(&mut cursor), 4);
        assert_eq!(cursor.peek(), Some(b'\n'));
        // Nothing left to skip in front of a newline
        assert_eq!(skip_whitespace(&mut cursor), 0);
    }

    #[test]
    fn test_skip_whitespace_to_end() {
        let mut cursor = Span::new(b"   ");
        assert_eq!(skip_whitespace(&mut cursor), 3);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_skip_comment() {
        let mut cursor = Span::new(b"# a comment\nkey");
        assert_eq!(skip_comment(&mut cursor), 11);
        assert_eq!(cursor.peek(), Some(b'\n'));

        let mut at_eof = Span::new(b"# trailing");
        assert_eq!(skip_comment(&mut at_eof), 10);
        assert!(at_eof.is_empty());
    }

    #[test]
    fn test_skip_comment_is_noop_elsewhere() {
        let mut cursor = Span::new(b"key # not here");
        assert_eq!(skip_comment(&mut cursor), 0);
        assert_eq!(cursor.start(), 0);
    }

    #[test]
    fn test_scan_accept_and_reject() {
        let mut cursor = Span::new(b"abc123-x");
        assert_eq!(scan(&mut cursor, Some(u8::is_ascii_alphanumeric), None), 6);
        assert_eq!(cursor.peek(), Some(b'-'));

        let mut cursor = Span::new(b"free text\"tail");
        assert_eq!(scan(&mut cursor, None, Some(|b| *b == b'"')), 9);
        assert_eq!(cursor.peek(), Some(b'"'));

        // Both sets: digits, but never a 3
        let mut cursor = Span::new(b"1234");
        assert_eq!(
            scan(&mut cursor, Some(u8::is_ascii_digit), Some(|b| *b == b'3')),
            2
        );
    }

    #[test]
    fn test_matches_keyword() {
        let span = Span::new(b"TrUe");
        assert!(matches_keyword(&span, "true", true));
        assert!(!matches_keyword(&span, "true", false));
        assert!(!matches_keyword(&Span::new(b"trueish"), "true", true));
        assert!(!matches_keyword(&Span::new(b"tru"), "true", true));
    }
}
