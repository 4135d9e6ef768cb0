//! Error type for color string parsing

use std::fmt;

/// Error type for parsing `#rrggbb` and `rgb(r,g,b)` color strings.
///
/// Malformed strings are rejected here instead of letting garbage values
/// flow into the color math.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex string does not start with '#'
    MissingHash,
    /// Hex string does not have exactly 6 digits after the '#'
    InvalidLength,
    /// Non-hexadecimal character in a hex string
    InvalidHexDigit(char),
    /// String is not of the form `rgb(r,g,b)`
    InvalidRgbFunction,
    /// A decimal component is not an integer in 0..=255
    InvalidComponent(String),
    /// A non-transparent replacement rule without a replacement color
    MissingReplacement,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::MissingHash => {
                write!(f, "hex color must start with '#'")
            }
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 6 digits)")
            }
            ParseColorError::InvalidHexDigit(c) => {
                write!(f, "invalid hex character: {:?}", c)
            }
            ParseColorError::InvalidRgbFunction => {
                write!(f, "expected a color of the form rgb(r,g,b)")
            }
            ParseColorError::InvalidComponent(component) => {
                write!(f, "invalid rgb component {:?} (expected 0-255)", component)
            }
            ParseColorError::MissingReplacement => {
                write!(f, "replacement color is required unless the rule is transparent")
            }
        }
    }
}

impl std::error::Error for ParseColorError {}
