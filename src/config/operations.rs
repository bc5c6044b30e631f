//! Config loading: parse, validate, aggregate, default.

use super::defaults::ConfigDefaults;
use super::model::CatsConfig;
use super::raw::RawConfig;
use crate::error::{ConfigError, Result};
use crate::validate::{HostResolver, SystemResolver, ValidationErrors, Validator};
use std::path::Path;

/// Loads config documents into [`CatsConfig`] values.
///
/// Holds no state between loads besides its defaults table and resolver.
pub struct ConfigLoader {
    defaults: ConfigDefaults,
    resolver: Box<dyn HostResolver>,
}

impl ConfigLoader {
    /// Loader with the standard defaults and the system resolver.
    pub fn new() -> Self {
        Self {
            defaults: ConfigDefaults::default(),
            resolver: Box::new(SystemResolver),
        }
    }

    pub fn with_defaults(mut self, defaults: ConfigDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_resolver(mut self, resolver: impl HostResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn defaults(&self) -> &ConfigDefaults {
        &self.defaults
    }

    /// Load config from a JSON file.
    ///
    /// # Returns
    ///
    /// * `Ok(CatsConfig)` - Every rule passed
    /// * `Err(ConfigError::Unreadable)` - The file could not be read
    /// * `Err(ConfigError::MalformedInput)` - Not a JSON object of the right shape
    /// * `Err(ConfigError::ValidationFailure)` - All violated rules, aggregated
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<CatsConfig> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading config");

        let bytes = std::fs::read(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        self.load_slice(&bytes)
    }

    pub fn load_str(&self, json: &str) -> Result<CatsConfig> {
        self.load_slice(json.as_bytes())
    }

    pub fn load_slice(&self, bytes: &[u8]) -> Result<CatsConfig> {
        let raw = RawConfig::from_slice(bytes)?;
        tracing::debug!("parsed raw config");
        self.resolve(raw)
    }

    /// Validate a parsed document and, if it passes, apply defaults.
    pub fn resolve(&self, raw: RawConfig) -> Result<CatsConfig> {
        let violations = Validator::new(self.resolver.as_ref()).validate(&raw);

        if let Err(errors) = ValidationErrors::aggregate(violations) {
            tracing::warn!(violations = errors.len(), "config validation failed");
            return Err(errors.into());
        }

        let config = self.defaults.apply(raw)?;
        tracing::info!(api = config.api_endpoint(), "config resolved");
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CatsConfig {
    /// Load config from a JSON file with the standard loader.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        ConfigLoader::new().load(path)
    }

    /// Load config from a JSON string with the standard loader.
    pub fn from_json(json: &str) -> Result<Self> {
        ConfigLoader::new().load_str(json)
    }

    /// Serialize to a JSON string that loads back to an equal config.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ConfigError::MalformedInput(format!("failed to serialize config to JSON: {}", e))
        })
    }
}
