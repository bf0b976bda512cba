//! bitconv: Decimal/Binary Conversion CLI Tool
//!
//! A command-line tool for converting integers of any size between
//! decimal and binary notation.

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use bitconv::cli::{run_batch, run_oneshot, run_session, BatchConfig, Cli, Commands, OneShotConfig};
use bitconv::utils::{init_logger, print_banner, print_info, print_settings};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let options = cli.format_options();
    debug!(mode = %cli.mode, ?options, "Parsed command line");

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::Batch {
                input,
                output,
                jobs,
                no_confirm,
            } => {
                if !cli.json {
                    print_banner(env!("CARGO_PKG_VERSION"));
                    print_settings(cli.mode, &options);
                    println!();
                }
                if cli.reads_stdin() && std::io::stdin().is_terminal() {
                    print_info("Reading values from stdin, one per line (Ctrl+D to finish)");
                }

                let config = BatchConfig {
                    mode: cli.mode,
                    options,
                    json: cli.json,
                    jobs: *jobs,
                    no_confirm: *no_confirm,
                };
                let summary = run_batch(input, output.as_deref(), &config)?;
                if summary.failed > 0 {
                    std::process::exit(1);
                }
                Ok(())
            }
            Commands::Interactive { initial } => {
                run_session(cli.mode, options, initial.as_deref())
            }
        };
    }

    if cli.values.is_empty() {
        anyhow::bail!(
            "No values given. Pass one or more values, or use `bitconv interactive` or `bitconv batch`."
        );
    }

    let config = OneShotConfig {
        mode: cli.mode,
        options,
        json: cli.json,
        copy: cli.copy,
    };
    if !run_oneshot(&cli.values, &config)? {
        std::process::exit(1);
    }

    Ok(())
}
