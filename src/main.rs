//! cats-config: check acceptance-test configuration files.
//!
//! This is the main entry point for the `cats-config` CLI. It parses arguments,
//! sets up logging, dispatches to the command handler, and handles errors with
//! proper exit codes.

use cats_config::cli::Cli;
use cats_config::{commands, exit_codes};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            match err.violations() {
                Some(violations) => eprintln!("Error: invalid configuration\n{}", violations),
                None => eprintln!("Error: {}", err),
            }

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
