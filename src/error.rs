//! Error types for config loading.
//!
//! Parse-level problems stop the load immediately. Semantic problems are
//! collected into a single [`ValidationErrors`] so a user sees every issue in
//! one run.

use crate::exit_codes;
use crate::validate::ValidationErrors;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for config operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file '{path}': {source}", path = path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Not JSON, not an object, or a value of the wrong type.
    #[error("{0}")]
    MalformedInput(String),

    /// One or more fields failed validation; renders as `* <message>` lines.
    #[error("{0}")]
    ValidationFailure(ValidationErrors),

    /// No config path was given on the command line or in the environment.
    #[error("no config file given: pass --config or set CONFIG")]
    MissingPath,

    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl ConfigError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::Unreadable { .. } => exit_codes::USER_ERROR,
            ConfigError::MalformedInput(_) => exit_codes::USER_ERROR,
            ConfigError::MissingPath => exit_codes::USER_ERROR,
            ConfigError::Output(_) => exit_codes::USER_ERROR,
            ConfigError::ValidationFailure(_) => exit_codes::VALIDATION_FAILURE,
        }
    }

    /// The aggregated violations, if this is a validation failure.
    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            ConfigError::ValidationFailure(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for ConfigError {
    fn from(errors: ValidationErrors) -> Self {
        ConfigError::ValidationFailure(errors)
    }
}

/// Result type alias for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Violation;

    #[test]
    fn malformed_input_has_user_error_exit_code() {
        let err = ConfigError::MalformedInput("bad json".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_failure_has_validation_exit_code() {
        let err = ConfigError::from(ValidationErrors::from(Violation::not_null("api")));
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
        assert!(err.violations().is_some_and(|v| v.mentions("api")));
    }

    #[test]
    fn validation_failure_displays_only_the_aggregate() {
        let err = ConfigError::from(ValidationErrors::from(Violation::not_null("backend")));
        assert_eq!(err.to_string(), "* 'backend' must not be null");
    }

    #[test]
    fn unreadable_names_the_path() {
        let err = ConfigError::Unreadable {
            path: PathBuf::from("/nowhere/config.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().contains("/nowhere/config.json"));
    }
}
