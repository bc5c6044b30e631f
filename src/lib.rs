//! cats-config: validating, defaulting config loader for acceptance test runs.
//!
//! A test harness hands [`ConfigLoader`] a JSON document and gets back either
//! an immutable [`CatsConfig`] or one error listing every problem in the file.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{CatsConfig, ConfigDefaults, ConfigLoader};
pub use error::{ConfigError, Result};
