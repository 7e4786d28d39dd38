/*!
Diagnostics: fixed-width error rendering.

Ports `ecjp_show_error`'s behavior — dump a bounded window of source around
the failing byte with a column marker underneath — as a `Display`
adapter instead of a function that writes straight to a terminal, so
callers can render it into any `core::fmt::Write` sink (a `String`, a log
record, a fixed buffer on MCU).
*/

use core::fmt;

use crate::error::EcjpError;
use crate::limits::MAX_PRINT_COLUMNS;

/// Renders an [`EcjpError`] against the source it came from.
pub struct Diagnostic<'a> {
    source: &'a [u8],
    error: EcjpError,
}

impl<'a> Diagnostic<'a> {
    pub fn new(source: &'a [u8], error: EcjpError) -> Self {
        Diagnostic { source, error }
    }

    fn pos(&self) -> Option<usize> {
        match self.error {
            EcjpError::Syntax { pos } | EcjpError::BracketsMissing { pos } => Some(pos as usize),
            _ => None,
        }
    }
}

impl<'a> fmt::Display for Diagnostic<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.error)?;

        let pos = match self.pos() {
            Some(pos) => pos,
            None => return Ok(()),
        };

        let half = MAX_PRINT_COLUMNS / 2;
        let window_start = pos.saturating_sub(half);
        let window_end = (pos + half).min(self.source.len());
        let window = &self.source[window_start..window_end];

        for &b in window {
            let printable = if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            };
            write!(f, "{}", printable)?;
        }
        writeln!(f)?;

        for _ in 0..(pos - window_start) {
            write!(f, " ")?;
        }
        write!(f, "^")
    }
}
