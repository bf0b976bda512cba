//! Convert values given on the command line

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::cli::clipboard::{copy_to_clipboard, CopyOutcome};
use crate::converter::{convert, ConversionMode, FormatOptions};
use crate::report::ConversionRecord;
use crate::utils::{print_copied, print_error, print_result};

/// Settings for a one-shot run
#[derive(Debug, Clone, Copy, Default)]
pub struct OneShotConfig {
    pub mode: ConversionMode,
    pub options: FormatOptions,
    pub json: bool,
    pub copy: bool,
}

/// Convert each value independently and print the results
///
/// Returns `true` when every value converted. Failures are reported per value
/// and do not stop the remaining conversions.
pub fn run_oneshot(values: &[String], config: &OneShotConfig) -> Result<bool> {
    debug!(
        mode = %config.mode,
        prefix = config.options.prefix,
        group = config.options.group,
        trim = config.options.trim,
        count = values.len(),
        "Converting values"
    );

    let mut all_ok = true;
    let mut last_output: Option<String> = None;

    for value in values {
        if config.json {
            let record = ConversionRecord::from_input(value, config.mode, &config.options);
            all_ok &= record.is_ok();
            if let Some(out) = &record.output {
                last_output = Some(out.clone());
            }
            let line =
                serde_json::to_string(&record).context("Failed to serialize conversion record")?;
            println!("{}", line);
            continue;
        }

        match convert(value, config.mode, &config.options) {
            Ok(conversion) => {
                print_result(value, conversion.as_str(), values.len() > 1);
                last_output = Some(conversion.as_str().to_string());
            }
            Err(e) => {
                all_ok = false;
                print_error(e.message());
            }
        }
    }

    if config.copy {
        if let Some(text) = last_output {
            copy_result(&text);
        }
    }

    Ok(all_ok)
}

/// Copy a result and report the outcome; a failed copy is not fatal
fn copy_result(text: &str) {
    match copy_to_clipboard(text) {
        Ok(CopyOutcome::Copied) => print_copied(),
        Ok(CopyOutcome::NothingToCopy) => debug!("Nothing to copy"),
        Err(e) => {
            warn!("Clipboard write failed: {:#}", e);
            print_error("could not copy.");
        }
    }
}
