// SPDX-License-Identifier: Apache-2.0

use core::str::Utf8Error;

/// A read-only `[start, end)` window over the caller's input buffer.
///
/// The same type serves as the parse cursor: all forward progress is made by
/// moving `start` towards `end`. Spans are `Copy`, so backtracking is just a
/// matter of keeping an old value around and assigning it back.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    buffer: &'a [u8],
    start: usize,
    end: usize,
}

/// A span used as the moving read position.
pub type Cursor<'a> = Span<'a>;

impl<'a> Span<'a> {
    /// Creates a span covering the whole buffer.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            start: 0,
            end: buffer.len(),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns the byte at the start boundary without consuming it.
    pub fn peek(&self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        self.buffer.get(self.start).copied()
    }

    /// Consumes one byte and returns it, or `None` when the span is exhausted.
    pub fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.start += 1;
        Some(byte)
    }

    /// The span between this span's start and `later`'s start.
    ///
    /// Used to capture a token after the cursor has moved past it:
    /// `let begin = *cursor; ...; let token = begin.up_to(cursor);`
    pub fn up_to(&self, later: &Span<'a>) -> Span<'a> {
        Span {
            buffer: self.buffer,
            start: self.start,
            end: later.start.clamp(self.start, self.end),
        }
    }

    /// The remainder of the current line, not including the `\n`.
    pub fn rest_of_line(&self) -> Span<'a> {
        let line_len = self
            .as_bytes()
            .iter()
            .position(|&b| b == b'\n')
            .unwrap_or(self.len());
        Span {
            buffer: self.buffer,
            start: self.start,
            end: self.start + line_len,
        }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.buffer.get(self.start..self.end).unwrap_or_default()
    }

    pub fn as_str(&self) -> Result<&'a str, Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }
}

impl core::fmt::Debug for Span<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("text", &self.as_str().unwrap_or("<non-utf8>"))
            .finish()
    }
}
