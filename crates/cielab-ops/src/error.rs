//! Unified error type for operation setup.
//!
//! Everything that can go wrong is caught while building an
//! [`Operation`](crate::Operation); applying a validated operation to a
//! validated buffer cannot fail.

use std::fmt;

use crate::buffer::BufferError;
use crate::color::ParseColorError;

#[derive(Debug, Clone, PartialEq)]
pub enum ProcessError {
    /// A color string in a replacement rule could not be parsed
    InvalidColorFormat(ParseColorError),
    /// Raw bytes do not match the stated dimensions
    Buffer(BufferError),
    /// A numeric parameter is negative, NaN or infinite
    InvalidParameter { name: &'static str, value: f64 },
    /// Effect name is not one of thermal, glitch, vintage
    UnknownEffect(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::InvalidColorFormat(err) => write!(f, "invalid color format: {}", err),
            ProcessError::Buffer(err) => write!(f, "invalid pixel buffer: {}", err),
            ProcessError::InvalidParameter { name, value } => {
                write!(f, "invalid {}: {} (must be a finite number >= 0)", name, value)
            }
            ProcessError::UnknownEffect(name) => {
                write!(
                    f,
                    "unknown effect '{}' (expected thermal, glitch or vintage)",
                    name
                )
            }
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::InvalidColorFormat(err) => Some(err),
            ProcessError::Buffer(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseColorError> for ProcessError {
    fn from(err: ParseColorError) -> Self {
        ProcessError::InvalidColorFormat(err)
    }
}

impl From<BufferError> for ProcessError {
    fn from(err: BufferError) -> Self {
        ProcessError::Buffer(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ProcessError::InvalidParameter {
            name: "tolerance",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid tolerance: -1 (must be a finite number >= 0)"
        );

        let err: ProcessError = ParseColorError::InvalidLength.into();
        assert_eq!(
            err.to_string(),
            "invalid color format: invalid hex color length (expected 6 digits)"
        );
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;
        let err: ProcessError = ParseColorError::MissingHash.into();
        assert!(err.source().is_some());
        assert!(ProcessError::UnknownEffect("x".into()).source().is_none());
    }
}
