//! Batch conversion of newline-separated values
//!
//! Values are converted in parallel on a dedicated rayon pool; results keep
//! the order of the input lines.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::cli::prompts::confirm_overwrite;
use crate::converter::{ConversionMode, FormatOptions};
use crate::report::{results_table, BatchSummary, ConversionRecord};
use crate::utils::{create_batch_progress, finish_batch_progress, print_info, print_success};

/// Settings for a batch run
#[derive(Debug, Clone, Copy)]
pub struct BatchConfig {
    pub mode: ConversionMode,
    pub options: FormatOptions,
    pub json: bool,
    pub jobs: usize,
    pub no_confirm: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            mode: ConversionMode::default(),
            options: FormatOptions::default(),
            json: false,
            jobs: 4,
            no_confirm: false,
        }
    }
}

/// Split text into `(line_number, value)` pairs, skipping blank lines
pub fn collect_values(text: &str) -> Vec<(usize, &str)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, line.trim()))
        .collect()
}

/// Convert every non-blank line of `text`
pub fn convert_lines(text: &str, config: &BatchConfig) -> Result<Vec<ConversionRecord>> {
    let values = collect_values(text);
    debug!(count = values.len(), jobs = config.jobs, "Converting batch");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()
        .context("Failed to build conversion thread pool")?;

    let pb = create_batch_progress(values.len());
    let records: Vec<ConversionRecord> = pool.install(|| {
        values
            .par_iter()
            .map(|(line, value)| {
                let record = ConversionRecord::from_input(value, config.mode, &config.options)
                    .with_line(*line);
                pb.inc(1);
                record
            })
            .collect()
    });

    let failed = records.iter().filter(|r| !r.is_ok()).count();
    finish_batch_progress(&pb, failed);

    Ok(records)
}

/// Read all input, from stdin when `input` is `-`
fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read values from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read input file: {}", input.display()))
    }
}

/// Write the JSON report, asking before replacing an existing file
///
/// Returns `false` if the user declined to overwrite.
pub fn write_report(
    records: &[ConversionRecord],
    output: &Path,
    no_confirm: bool,
) -> Result<bool> {
    if output.exists() && !no_confirm && !confirm_overwrite(output)? {
        return Ok(false);
    }

    let json =
        serde_json::to_string_pretty(records).context("Failed to serialize batch report")?;
    std::fs::write(output, json)
        .with_context(|| format!("Failed to write report: {}", output.display()))?;
    Ok(true)
}

/// Run a batch conversion and print the results
pub fn run_batch(
    input: &Path,
    output: Option<&Path>,
    config: &BatchConfig,
) -> Result<BatchSummary> {
    let text = read_input(input)?;
    let records = convert_lines(&text, config)?;
    let summary = BatchSummary::from_records(&records);
    info!(
        total = summary.total,
        failed = summary.failed,
        "Batch conversion finished"
    );

    if config.json {
        let json =
            serde_json::to_string_pretty(&records).context("Failed to serialize batch report")?;
        println!("{}", json);
    } else {
        for line in results_table(&records).to_string().lines() {
            println!("    {}", line);
        }
        summary.display();
    }

    if let Some(path) = output {
        if write_report(&records, path, config.no_confirm)? {
            if !config.json {
                print_success(&format!("Report saved to {}", path.display()));
            }
        } else if !config.json {
            print_info("Report not written");
        }
    }

    Ok(summary)
}
