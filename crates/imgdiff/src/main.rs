mod cli;
mod commands;
mod config;
mod report;
mod store;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use config::ResolvedRunConfig;
use imgdiff::DiffStatistics;
use report::terminal;
use tracing_subscriber::EnvFilter;

const EXIT_FATAL: u8 = 1;
const EXIT_DIFFERENCES: u8 = 2;

/// Exit status when argument parsing stops the run. Only `--version` counts
/// as success; `--help` and usage errors are fatal, like a missing input.
fn parse_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayVersion => 0,
        _ => EXIT_FATAL,
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("imgdiff=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("imgdiff=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: cli::Cli) -> Result<DiffStatistics> {
    let overrides = cli.overrides();
    let config = ResolvedRunConfig::new(cli.left, cli.right, overrides)?;
    commands::diff(&config)
}

fn main() -> ExitCode {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_exit_code(e.kind()));
        }
    };

    init_tracing(cli.debug);

    match run(cli) {
        Ok(stats) => {
            terminal::print_summary(&stats);
            if stats.has_differences() {
                ExitCode::from(EXIT_DIFFERENCES)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            terminal::print_error(&e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}
