//! Serializable record of a single conversion

use serde::{Deserialize, Serialize};

use crate::converter::{convert, ConversionMode, FormatOptions};

/// One converted value, as exported to JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    /// 1-based source line (batch mode only)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub line: Option<usize>,
    pub input: String,
    pub mode: ConversionMode,
    pub output: Option<String>,
    pub error: Option<String>,
}

impl ConversionRecord {
    /// Convert `input` and capture either the output or the error message
    ///
    /// Blank input is recorded with the placeholder as its output.
    pub fn from_input(input: &str, mode: ConversionMode, options: &FormatOptions) -> Self {
        let (output, error) = match convert(input, mode, options) {
            Ok(conversion) => (Some(conversion.as_str().to_string()), None),
            Err(e) => (None, Some(e.message().to_string())),
        };

        Self {
            line: None,
            input: input.to_string(),
            mode,
            output,
            error,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
