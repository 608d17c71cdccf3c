// SPDX-License-Identifier: Apache-2.0

use log::error;

use crate::grammar::{parse_empty_line, parse_property, parse_section, ParseContext};
use crate::scanner::{skip_comment, skip_whitespace};
use crate::{ParseError, PropertyHandler, PushParseError};

use crate::grammar::Property;

/// A pull parser that yields the properties of an INI document in order.
///
/// The input is borrowed for the parser's lifetime and never copied; every
/// [`Property`] it returns borrows from it.
///
/// # Example
/// ```
/// use picoini::{IniParser, Value};
///
/// let mut parser = IniParser::new("[cheese]\nbaz=.3\n");
/// let property = parser.next_property().unwrap().unwrap();
/// assert_eq!(property.section, "cheese");
/// assert_eq!(property.value, Value::Number(0.3));
/// assert_eq!(parser.next_property(), Ok(None));
/// ```
#[derive(Debug)]
pub struct IniParser<'a> {
    ctx: ParseContext<'a>,
    finished: bool,
}

impl<'a> IniParser<'a> {
    /// Creates a new parser for the given INI text.
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    /// Creates a new parser from a byte slice.
    ///
    /// Text values that are not valid UTF-8 are reported as
    /// [`ParseError::InvalidUtf8`].
    pub fn new_from_slice(input: &'a [u8]) -> Self {
        Self {
            ctx: ParseContext::new(input),
            finished: false,
        }
    }

    /// The 1-based line the parser is currently on.
    pub fn line(&self) -> usize {
        self.ctx.line
    }

    /// Returns the next property, `Ok(None)` once the whole input has been
    /// consumed, or the error that stopped parsing.
    ///
    /// After an error every further call returns `Ok(None)`.
    pub fn next_property(&mut self) -> Result<Option<Property<'a>>, ParseError<'a>> {
        if self.finished {
            return Ok(None);
        }
        match self.advance() {
            Ok(Some(property)) => Ok(Some(property)),
            Ok(None) => {
                self.finished = true;
                Ok(None)
            }
            Err(e) => {
                self.finished = true;
                error!("{e}");
                Err(e)
            }
        }
    }

    fn advance(&mut self) -> Result<Option<Property<'a>>, ParseError<'a>> {
        let ctx = &mut self.ctx;
        while !ctx.cursor.is_empty() {
            if at_trailing_trivia(ctx) {
                break;
            }
            if parse_empty_line(ctx) || parse_section(ctx) {
                continue;
            }
            if let Some(property) = parse_property(ctx)? {
                return Ok(Some(property));
            }
            return Err(ParseError::Syntax {
                line: ctx.line,
                text: ctx.cursor.rest_of_line().as_bytes(),
            });
        }
        Ok(None)
    }
}

// A last line without `\n` may end in blanks or a comment; consume them.
fn at_trailing_trivia(ctx: &mut ParseContext<'_>) -> bool {
    let mut probe = ctx.cursor;
    skip_whitespace(&mut probe);
    skip_comment(&mut probe);
    if probe.is_empty() {
        ctx.cursor = probe;
        return true;
    }
    false
}

impl<'a> Iterator for IniParser<'a> {
    type Item = Result<Property<'a>, ParseError<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_property().transpose()
    }
}

impl core::iter::FusedIterator for IniParser<'_> {}

/// Parses `input`, handing every property to `handler` in document order.
///
/// Properties delivered before an error stay delivered. If the handler
/// returns an error, parsing stops and the error is returned as
/// [`PushParseError::Handler`].
pub fn parse<'a, H, E>(input: &'a str, handler: &mut H) -> Result<(), PushParseError<'a, E>>
where
    H: PropertyHandler<'a, E> + ?Sized,
{
    parse_bytes(input.as_bytes(), handler)
}

/// Like [`parse`], over raw bytes.
pub fn parse_bytes<'a, H, E>(input: &'a [u8], handler: &mut H) -> Result<(), PushParseError<'a, E>>
where
    H: PropertyHandler<'a, E> + ?Sized,
{
    let mut parser = IniParser::new_from_slice(input);
    while let Some(property) = parser.next_property()? {
        handler
            .handle_property(property.section, property.key, property.value)
            .map_err(PushParseError::Handler)?;
    }
    Ok(())
}
