//! Presentation transforms for binary digit strings

use super::options::FormatOptions;

/// Number of bits per group
pub const GROUP_WIDTH: usize = 4;

/// Binary marker prepended when prefixing is enabled
pub const BINARY_PREFIX: &str = "0b";

/// Strip leading zeros, keeping at least one digit
///
/// `"000"` becomes `"0"`; an empty string stays empty.
pub fn trim_leading_zeros(bits: &str) -> &str {
    let trimmed = bits.trim_start_matches('0');
    if trimmed.is_empty() && !bits.is_empty() {
        &bits[bits.len() - 1..]
    } else {
        trimmed
    }
}

/// Split bits into space-separated nibbles counted from the right
///
/// Existing whitespace is ignored and the leftmost group is zero-padded so
/// that every group is exactly [`GROUP_WIDTH`] digits wide.
pub fn group_bits(bits: &str) -> String {
    let clean: Vec<char> = bits.chars().filter(|c| !c.is_whitespace()).collect();
    let pad = (GROUP_WIDTH - clean.len() % GROUP_WIDTH) % GROUP_WIDTH;

    let padded: Vec<char> = std::iter::repeat('0')
        .take(pad)
        .chain(clean)
        .collect();

    padded
        .chunks(GROUP_WIDTH)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Apply trimming, grouping and prefixing to unsigned binary digits
pub fn apply_format(bits: &str, options: &FormatOptions) -> String {
    let mut out = if options.trim {
        trim_leading_zeros(bits).to_string()
    } else {
        bits.to_string()
    };

    if options.group {
        out = group_bits(&out);
    }

    if options.applies_prefix() {
        out.insert_str(0, BINARY_PREFIX);
    }

    out
}
