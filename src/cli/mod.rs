//! CLI argument parsing for cats-config.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// cats-config: check acceptance-test configuration before a run.
///
/// Loads a JSON config file, reports every invalid or missing key at once,
/// and shows the fully defaulted result.
#[derive(Parser, Debug)]
#[command(name = "cats-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for cats-config.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a config file.
    ///
    /// Prints every violation found, or confirms the file is valid.
    Check(ConfigArgs),

    /// Print the resolved configuration as JSON.
    ///
    /// Omitted keys are shown with their defaults.
    Show(ConfigArgs),
}

/// Location of the config file.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Path to the JSON config file.
    #[arg(short, long, env = "CONFIG")]
    pub config: Option<PathBuf>,
}
