//! Decimal <-> binary conversion over arbitrary-precision integers
//!
//! Every function here is pure: the result depends only on the input text,
//! the mode and the format options.

use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};

use super::error::ConversionError;
use super::format::apply_format;
use super::options::{ConversionMode, FormatOptions};
use super::sanitize::{is_binary_string, is_decimal_string, sanitize_binary, sanitize_decimal};

/// Shown in place of a result when there is nothing to convert
pub const PLACEHOLDER: &str = "—";

/// Outcome of converting one raw input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// Input was empty or whitespace-only
    Empty,
    /// Formatted result
    Value(String),
}

impl Conversion {
    /// Text to display: the value, or [`PLACEHOLDER`] when empty
    pub fn as_str(&self) -> &str {
        match self {
            Conversion::Empty => PLACEHOLDER,
            Conversion::Value(v) => v,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Conversion::Empty)
    }

    pub fn into_value(self) -> Option<String> {
        match self {
            Conversion::Empty => None,
            Conversion::Value(v) => Some(v),
        }
    }
}

impl std::fmt::Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert raw input in the given mode
///
/// Whitespace-only input yields [`Conversion::Empty`] without attempting a
/// conversion.
pub fn convert(
    raw: &str,
    mode: ConversionMode,
    options: &FormatOptions,
) -> Result<Conversion, ConversionError> {
    if raw.trim().is_empty() {
        return Ok(Conversion::Empty);
    }

    let value = match mode {
        ConversionMode::DecimalToBinary => convert_decimal_to_binary(raw, options)?,
        ConversionMode::BinaryToDecimal => convert_binary_to_decimal(raw, options)?,
    };
    Ok(Conversion::Value(value))
}

/// Convert a decimal numeral to formatted binary
///
/// Accepts an optional `0d` prefix and an optional sign. Whitespace-only
/// input returns [`PLACEHOLDER`].
///
/// # Examples
/// ```
/// use bitconv::converter::{convert_decimal_to_binary, FormatOptions};
///
/// let options = FormatOptions::new(true, false, false);
/// assert_eq!(convert_decimal_to_binary("-42", &options).unwrap(), "-0b101010");
/// ```
pub fn convert_decimal_to_binary(
    input: &str,
    options: &FormatOptions,
) -> Result<String, ConversionError> {
    if input.trim().is_empty() {
        return Ok(PLACEHOLDER.to_string());
    }

    let sanitized = sanitize_decimal(input);
    if !is_decimal_string(&sanitized) {
        return Err(ConversionError::invalid_decimal());
    }

    let n = BigInt::from_str(&sanitized).map_err(|_| ConversionError::invalid_decimal())?;
    let sign = if n.sign() == Sign::Minus { "-" } else { "" };
    let bits = n.magnitude().to_str_radix(2);

    Ok(format!("{}{}", sign, apply_format(&bits, options)))
}

/// Convert a binary numeral to decimal
///
/// Accepts an optional sign and an optional `0b` marker after a minus sign.
/// Format options only affect binary output and are ignored here.
/// Whitespace-only input returns [`PLACEHOLDER`].
pub fn convert_binary_to_decimal(
    input: &str,
    _options: &FormatOptions,
) -> Result<String, ConversionError> {
    if input.trim().is_empty() {
        return Ok(PLACEHOLDER.to_string());
    }

    let sanitized = sanitize_binary(input);
    if !is_binary_string(&sanitized) {
        return Err(ConversionError::invalid_binary());
    }

    signed_binary_to_decimal(&sanitized)
}

/// Interpret an optionally signed binary digit run as a decimal string
///
/// Spaces and underscores between digits are ignored, so grouped output such
/// as `"0010 1010"` converts back. A leading `+` is dropped and a leading `-`
/// is kept as written, which means `-0` stays `-0`.
pub fn signed_binary_to_decimal(digits: &str) -> Result<String, ConversionError> {
    let unsigned = digits.strip_prefix('+').unwrap_or(digits);
    let (negative, magnitude) = match unsigned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, unsigned),
    };

    let clean: String = magnitude
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect();
    if clean.is_empty() || !clean.chars().all(|c| c == '0' || c == '1') {
        return Err(ConversionError::invalid_binary());
    }

    let value =
        BigUint::parse_bytes(clean.as_bytes(), 2).ok_or_else(ConversionError::invalid_binary)?;
    let decimal = value.to_str_radix(10);

    Ok(if negative {
        format!("-{}", decimal)
    } else {
        decimal
    })
}
