// SPDX-License-Identifier: Apache-2.0

use crate::Value;

/// Receives properties from [`parse`](crate::parse) in document order.
///
/// The handler is the caller's own state; it is borrowed mutably for the
/// duration of one parse.
///
/// # Generic Parameters
///
/// * `'input` - Lifetime of the parsed buffer; section, key and text values borrow from it
/// * `E` - The error type the handler may return to stop parsing
pub trait PropertyHandler<'input, E> {
    /// Handles one `key = value` line of `section`.
    fn handle_property(
        &mut self,
        section: &'input str,
        key: &'input str,
        value: Value<'input>,
    ) -> Result<(), E>;
}

impl<'input, E, F> PropertyHandler<'input, E> for F
where
    F: FnMut(&'input str, &'input str, Value<'input>) -> Result<(), E>,
{
    fn handle_property(
        &mut self,
        section: &'input str,
        key: &'input str,
        value: Value<'input>,
    ) -> Result<(), E> {
        self(section, key, value)
    }
}
