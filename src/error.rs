//! Error types for parsing and rendering format codes.
//!
//! Classification never fails; these errors only surface from the fallible
//! rendering entry points.

use thiserror::Error;

/// Errors that can occur when parsing a format code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unterminated string literal starting at position {position}")]
    UnterminatedString { position: usize },

    #[error("dangling escape at position {position}")]
    DanglingEscape { position: usize },

    #[error("unterminated bracket at position {position}")]
    UnterminatedBracket { position: usize },

    #[error("empty format code")]
    EmptyFormat,
}

/// Errors that can occur when rendering a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("date out of range: serial number {serial}")]
    DateOutOfRange { serial: f64 },
}
