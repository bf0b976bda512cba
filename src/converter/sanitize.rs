//! Input sanitization and validation
//!
//! Sanitization only removes optional notation markers and surrounding
//! whitespace. Whatever remains must then pass the validator for its mode.

use std::sync::LazyLock;

use regex::Regex;

static DECIMAL_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)0d").expect("decimal marker pattern is valid"));

// Only a leading minus may precede the marker; the sign is kept.
static BINARY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)(-?)0b").expect("binary marker pattern is valid"));

static DECIMAL_STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").expect("decimal pattern is valid"));

static BINARY_STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[01]+$").expect("binary pattern is valid"));

/// Trim whitespace and strip an optional `0d` prefix (case-insensitive)
pub fn sanitize_decimal(raw: &str) -> String {
    DECIMAL_MARKER.replace(raw.trim(), "").into_owned()
}

/// Trim whitespace and strip an optional `0b` marker, keeping a leading `-`
///
/// `-0b1010` becomes `-1010` and `0B11` becomes `11`.
pub fn sanitize_binary(raw: &str) -> String {
    BINARY_MARKER.replace(raw.trim(), "${1}").into_owned()
}

/// Check for an optionally signed run of decimal digits
pub fn is_decimal_string(s: &str) -> bool {
    DECIMAL_STRING.is_match(s)
}

/// Check for an optionally signed run of binary digits
pub fn is_binary_string(s: &str) -> bool {
    BINARY_STRING.is_match(s)
}
