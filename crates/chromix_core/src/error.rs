//! Color parsing error types

use thiserror::Error;

/// Malformed color text.
///
/// Returned by [`parse_hex`](crate::parse_hex) and
/// [`parse_computed_color`](crate::parse_computed_color). Callers decide
/// whether to keep their previous color or surface a validation message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Hex input did not contain exactly six digits
    #[error("expected 6 hex digits, found {found}")]
    Length { found: usize },

    /// A character outside `[0-9a-fA-F]`
    #[error("invalid hex digit {ch:?} at position {index}")]
    InvalidDigit { ch: char, index: usize },

    /// Computed-style color string in an unsupported form
    #[error("unrecognized color syntax: {0}")]
    Syntax(String),
}

/// Mix ratio outside the `[0, 100]` percent range
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("mix ratio must be between 0 and 100 percent, got {0}")]
pub struct RatioError(pub i64);

/// Result type for color parsing
pub type Result<T> = std::result::Result<T, ParseError>;
