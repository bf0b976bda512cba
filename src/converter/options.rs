//! Conversion mode and presentation options

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Direction of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum ConversionMode {
    /// Decimal input, binary output
    #[default]
    #[value(name = "d2b")]
    #[serde(rename = "d2b")]
    DecimalToBinary,
    /// Binary input, decimal output
    #[value(name = "b2d")]
    #[serde(rename = "b2d")]
    BinaryToDecimal,
}

impl ConversionMode {
    /// The opposite conversion direction
    pub fn swap(self) -> Self {
        match self {
            ConversionMode::DecimalToBinary => ConversionMode::BinaryToDecimal,
            ConversionMode::BinaryToDecimal => ConversionMode::DecimalToBinary,
        }
    }

    /// Short name used on the command line and in JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionMode::DecimalToBinary => "d2b",
            ConversionMode::BinaryToDecimal => "b2d",
        }
    }

    /// Human-readable label
    pub fn title(&self) -> &'static str {
        match self {
            ConversionMode::DecimalToBinary => "Decimal → Binary",
            ConversionMode::BinaryToDecimal => "Binary → Decimal",
        }
    }

    /// Hint describing what input this mode expects
    pub fn input_hint(&self) -> &'static str {
        match self {
            ConversionMode::DecimalToBinary => "Enter a decimal number (e.g. -42)",
            ConversionMode::BinaryToDecimal => "Enter a binary number (e.g. 1101, -0b1010)",
        }
    }
}

impl std::fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Presentation transforms applied to binary output.
///
/// The flags are independent except that `prefix` has no effect while
/// `group` is enabled: a two-character marker would misalign the nibbles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Prepend the `0b` marker
    pub prefix: bool,
    /// Separate every 4 bits with a space, counted from the right
    pub group: bool,
    /// Strip leading zero bits, keeping at least one digit
    pub trim: bool,
}

impl FormatOptions {
    pub fn new(prefix: bool, group: bool, trim: bool) -> Self {
        Self {
            prefix,
            group,
            trim,
        }
    }

    /// Whether the `0b` marker ends up in the output
    pub fn applies_prefix(&self) -> bool {
        self.prefix && !self.group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_round_trips() {
        let mode = ConversionMode::DecimalToBinary;
        assert_eq!(mode.swap(), ConversionMode::BinaryToDecimal);
        assert_eq!(mode.swap().swap(), mode);
    }

    #[test]
    fn test_prefix_suppressed_by_grouping() {
        assert!(FormatOptions::new(true, false, false).applies_prefix());
        assert!(!FormatOptions::new(true, true, false).applies_prefix());
        assert!(!FormatOptions::default().applies_prefix());
    }

    #[test]
    fn test_mode_serializes_to_short_name() {
        let json = serde_json::to_string(&ConversionMode::BinaryToDecimal).unwrap();
        assert_eq!(json, "\"b2d\"");
    }
}
