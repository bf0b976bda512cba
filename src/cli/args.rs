//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::converter::{ConversionMode, FormatOptions};

/// bitconv - Convert integers of any size between decimal and binary
#[derive(Parser, Debug)]
#[command(name = "bitconv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Values to convert. Decimal accepts an optional `0d` prefix,
    /// binary an optional `0b` marker (e.g. -42, 0d7, 1101). Pass values
    /// such as -0b1010 after `--`.
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Conversion direction: "d2b" (decimal to binary) or "b2d" (binary to decimal)
    #[arg(short, long, value_enum, default_value_t = ConversionMode::DecimalToBinary, global = true)]
    pub mode: ConversionMode,

    /// Prepend the 0b marker to binary output (ignored when grouping)
    #[arg(short, long, global = true)]
    pub prefix: bool,

    /// Group binary output in nibbles of 4 bits, counted from the right
    #[arg(short, long, global = true)]
    pub group: bool,

    /// Strip leading zero bits from binary output
    #[arg(short, long, global = true)]
    pub trim: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Copy the last successful result to the clipboard (OSC 52)
    #[arg(short, long)]
    pub copy: bool,

    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert one value per line from a file or stdin
    Batch {
        /// Input file path, or "-" for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Write the JSON report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of worker threads used for conversion
        #[arg(short, long, default_value = "4", value_parser = validate_jobs)]
        jobs: usize,

        /// Overwrite an existing report without asking
        #[arg(long, default_value = "false")]
        no_confirm: bool,
    },

    /// Open the interactive converter
    Interactive {
        /// Value to start with
        #[arg(allow_negative_numbers = true)]
        initial: Option<String>,
    },
}

impl Cli {
    /// Presentation options selected by flags
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::new(self.prefix, self.group, self.trim)
    }

    /// Whether stdin is the batch source
    pub fn reads_stdin(&self) -> bool {
        matches!(&self.command, Some(Commands::Batch { input, .. }) if input.as_os_str() == "-")
    }
}

/// Upper bound for `--jobs`
pub const MAX_JOBS: usize = 256;

/// Validator for the jobs parameter
pub fn validate_jobs(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !(1..=MAX_JOBS).contains(&value) {
        Err(format!(
            "jobs must be between 1 and {}, got {}",
            MAX_JOBS, value
        ))
    } else {
        Ok(value)
    }
}
