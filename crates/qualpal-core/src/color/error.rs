//! Error type for hex color parsing.

use std::num::ParseIntError;

use thiserror::Error;

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,

    /// Invalid hexadecimal digit
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),

    /// Character that is never part of a hex color
    #[error("invalid character in hex color: {0:?}")]
    InvalidCharacter(char),
}
