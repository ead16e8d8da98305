//! Error types for the streaming pipeline.
//!
//! Every failure surfaces as a [`JsonError`] carrying the line and column of
//! the offending input. Two classes of failure exist: ordinary syntax errors
//! (invalid bytes, grammar violations, trailing data) and *incomplete input*
//! errors, raised when the stream ends while a lexeme, value, or container is
//! still open. The latter answer `true` from [`JsonError::is_incomplete`] and
//! signal that feeding more bytes could have produced a valid document.
use core::fmt;

use bstr::BStr;
use thiserror::Error;

/// An error produced while lexing or parsing a JSON stream.
#[derive(Debug)]
pub struct JsonError {
    kind: ErrorKind,
    /// Line of the offending byte (1-based).
    pub line: usize,
    /// Column of the offending byte within its line (1-based, in bytes).
    pub column: usize,
}

impl JsonError {
    pub(crate) fn new(kind: ErrorKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    pub(crate) fn io(err: std::io::Error) -> Self {
        Self {
            kind: ErrorKind::Io(err),
            line: 0,
            column: 0,
        }
    }

    /// The failure category.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns `true` if the input ended while the parser was in a
    /// non-accepting state, i.e. more bytes could have completed the
    /// document.
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        matches!(self.kind, ErrorKind::Incomplete(_))
    }
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            // I/O failures carry no meaningful input position.
            ErrorKind::Io(_) => write!(f, "{}", self.kind),
            kind => write!(f, "{kind} at line {} column {}", self.line, self.column),
        }
    }
}

impl std::error::Error for JsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// The failure categories reported by [`JsonError`].
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A byte that cannot begin or continue a lexeme at this position.
    #[error("unexpected byte {} in JSON input", fmt_byte(.0))]
    UnexpectedByte(u8),

    /// An unescaped control byte (below 0x20) inside a string literal.
    #[error("unescaped control byte {} in string literal", fmt_byte(.0))]
    UnescapedControl(u8),

    /// A backslash followed by a byte that does not introduce an escape.
    #[error("invalid escape sequence \\{}", fmt_byte(.0))]
    InvalidEscape(u8),

    /// A non-hexadecimal byte inside a `\uXXXX` escape.
    #[error("invalid hex digit {} in \\u escape", fmt_byte(.0))]
    InvalidUnicodeEscape(u8),

    /// A `\uXXXX` escape encoding half of a surrogate pair without its mate.
    #[error("unpaired surrogate \\u{0:04X} in string literal")]
    UnpairedSurrogate(u32),

    /// Raw string bytes that do not form valid UTF-8.
    #[error("invalid UTF-8 sequence {:?} in string literal", BStr::new(.0))]
    InvalidUtf8(Vec<u8>),

    /// A number literal the numeric layer refused; the lexer grammar makes
    /// this unreachable for untampered lexemes.
    #[error("malformed number literal")]
    InvalidNumber,

    /// A lexeme that violates the JSON grammar in the current parse state.
    #[error("syntax error: {0}")]
    Syntax(&'static str),

    /// Input after the first complete top-level value without
    /// `multiple_values`.
    #[error("additional data after end of document")]
    TrailingData,

    /// The input ended in a non-accepting state.
    #[error("premature end of input: {0}")]
    Incomplete(&'static str),

    /// The byte source failed; only produced by the pull and async delivery
    /// adapters.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn fmt_byte(b: &u8) -> String {
    if b.is_ascii_graphic() || *b == b' ' {
        format!("'{}'", *b as char)
    } else {
        format!("0x{b:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_render_in_message() {
        let err = JsonError::new(ErrorKind::UnexpectedByte(b'x'), 3, 7);
        assert_eq!(
            err.to_string(),
            "unexpected byte 'x' in JSON input at line 3 column 7"
        );
        assert!(!err.is_incomplete());
    }

    #[test]
    fn incomplete_is_a_json_error_subtype() {
        let err = JsonError::new(ErrorKind::Incomplete("unterminated string literal"), 1, 5);
        assert!(err.is_incomplete());
        assert!(err.to_string().starts_with("premature end of input"));
    }

    #[test]
    fn nonprintable_bytes_render_as_hex() {
        let err = JsonError::new(ErrorKind::UnescapedControl(0x09), 1, 1);
        assert!(err.to_string().contains("0x09"));
    }
}
