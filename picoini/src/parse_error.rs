// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur during INI parsing.
///
/// Positional errors carry the 1-based line on which the offending construct
/// starts and the rest of that line, borrowed from the input.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError<'input> {
    /// No grammar rule matched at this position.
    Syntax { line: usize, text: &'input [u8] },
    /// A `key = value` line appeared before any `[section]` header.
    PropertyBeforeSection { line: usize, text: &'input [u8] },
    /// A number token could not be decoded.
    InvalidNumber,
    /// A string or bare-word value was not valid UTF-8.
    InvalidUtf8(core::str::Utf8Error),
}

impl ParseError<'_> {
    /// The line on which parsing stopped, for positional errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Syntax { line, .. } | ParseError::PropertyBeforeSection { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}

impl From<core::str::Utf8Error> for ParseError<'_> {
    fn from(err: core::str::Utf8Error) -> Self {
        ParseError::InvalidUtf8(err)
    }
}

// Writes as much of `text` as is valid UTF-8.
fn write_line_text(f: &mut core::fmt::Formatter<'_>, text: &[u8]) -> core::fmt::Result {
    match core::str::from_utf8(text) {
        Ok(s) => f.write_str(s),
        Err(e) => f.write_str(core::str::from_utf8(&text[..e.valid_up_to()]).unwrap_or_default()),
    }
}

impl core::fmt::Display for ParseError<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::Syntax { line, text } => {
                writeln!(f, "Syntax error on line {line}")?;
                write_line_text(f, text)
            }
            ParseError::PropertyBeforeSection { line, text } => {
                writeln!(f, "Property found before any sections on line {line}")?;
                write_line_text(f, text)
            }
            ParseError::InvalidUtf8(e) => write!(f, "Invalid UTF-8: {e}"),
            _ => write!(f, "{self:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError<'_> {}

/// Errors from [`parse`](crate::parse): either the parser or the handler failed.
#[derive(Debug, PartialEq)]
pub enum PushParseError<'input, E> {
    /// An error occurred within the parser itself.
    Parse(ParseError<'input>),
    /// An error was returned by the user's handler.
    Handler(E),
}

impl<'input, E> From<ParseError<'input>> for PushParseError<'input, E> {
    fn from(e: ParseError<'input>) -> Self {
        PushParseError::Parse(e)
    }
}

impl<E: core::fmt::Display> core::fmt::Display for PushParseError<'_, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PushParseError::Parse(e) => write!(f, "{e}"),
            PushParseError::Handler(e) => write!(f, "Handler error: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug + core::fmt::Display> std::error::Error for PushParseError<'_, E> {}
