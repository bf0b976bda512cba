//! Error types for conversion failures.
//!
//! Only two failure modes exist, one per input numeral system. Each carries a
//! fixed, user-facing message so callers can display it as-is.

use thiserror::Error;

/// Message shown for any decimal input that cannot be converted
pub const INVALID_DECIMAL_MESSAGE: &str = "Invalid decimal number.";

/// Message shown for any binary input that cannot be converted
pub const INVALID_BINARY_MESSAGE: &str = "Invalid binary number. Use only 0 and 1.";

/// Errors that can occur while converting user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Input in decimal mode is not an optionally signed run of decimal digits.
    #[error("{message}")]
    InvalidDecimalInput { message: String },

    /// Input in binary mode is not an optionally signed run of `0`/`1` digits.
    #[error("{message}")]
    InvalidBinaryInput { message: String },
}

impl ConversionError {
    pub fn invalid_decimal() -> Self {
        ConversionError::InvalidDecimalInput {
            message: INVALID_DECIMAL_MESSAGE.to_string(),
        }
    }

    pub fn invalid_binary() -> Self {
        ConversionError::InvalidBinaryInput {
            message: INVALID_BINARY_MESSAGE.to_string(),
        }
    }

    /// The user-facing message for this error
    pub fn message(&self) -> &str {
        match self {
            ConversionError::InvalidDecimalInput { message }
            | ConversionError::InvalidBinaryInput { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_message() {
        let err = ConversionError::invalid_binary();
        assert_eq!(err.to_string(), INVALID_BINARY_MESSAGE);
        assert_eq!(err.message(), INVALID_BINARY_MESSAGE);
    }

    #[test]
    fn test_kinds_are_distinct() {
        assert_ne!(
            ConversionError::invalid_decimal(),
            ConversionError::invalid_binary()
        );
    }
}
