//! Command implementations for cats-config.
//!
//! Each command loads the config through a [`ConfigLoader`] and writes its
//! report to the given writer; errors propagate to `main` for exit codes.

use crate::cli::{Command, ConfigArgs};
use crate::config::ConfigLoader;
use crate::error::{ConfigError, Result};
use std::io::{self, Write};
use std::path::Path;


/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    let loader = ConfigLoader::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Check(args) => cmd_check(&loader, &args, &mut out),
        Command::Show(args) => cmd_show(&loader, &args, &mut out),
    }
}

fn config_path(args: &ConfigArgs) -> Result<&Path> {
    args.config.as_deref().ok_or(ConfigError::MissingPath)
}

/// Validate the config file and confirm it on success.
pub fn cmd_check(loader: &ConfigLoader, args: &ConfigArgs, out: &mut dyn Write) -> Result<()> {
    let path = config_path(args)?;
    loader.load(path)?;
    writeln!(out, "configuration is valid: {}", path.display())?;
    Ok(())
}

/// Print the resolved config, defaults included, as pretty JSON.
pub fn cmd_show(loader: &ConfigLoader, args: &ConfigArgs, out: &mut dyn Write) -> Result<()> {
    let path = config_path(args)?;
    let config = loader.load(path)?;
    writeln!(out, "{}", config.to_json_pretty()?)?;
    Ok(())
}
