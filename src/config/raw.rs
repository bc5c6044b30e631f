//! Raw, fully optional view of a config document.
//!
//! Every key in the JSON object maps to a [`RawField`], which keeps "key
//! omitted", "key set to null", and "key set to a value" apart. Nothing is
//! required at this stage; the validator decides what absence means.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single config value as it appeared in the input document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawField<T> {
    /// The key was not present in the document.
    #[default]
    Missing,
    /// The key was present with an explicit `null`.
    Null,
    /// The key was present with a value.
    Value(T),
}

/// Coarse state of a [`RawField`], independent of its value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Missing,
    Null,
    Present,
}

impl<T> RawField<T> {
    pub fn presence(&self) -> Presence {
        match self {
            RawField::Missing => Presence::Missing,
            RawField::Null => Presence::Null,
            RawField::Value(_) => Presence::Present,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, RawField::Missing)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RawField::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Take the supplied value, or `default` when the key was omitted or null.
    pub fn or(self, default: T) -> T {
        match self {
            RawField::Value(v) => v,
            _ => default,
        }
    }
}

impl RawField<String> {
    /// Present, but the empty string.
    pub fn is_blank(&self) -> bool {
        matches!(self, RawField::Value(s) if s.is_empty())
    }

    pub fn as_str(&self) -> Option<&str> {
        self.value().map(String::as_str)
    }
}

// Omitted keys never reach the deserializer; `#[serde(default)]` on the
// containing struct turns them into `Missing`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for RawField<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => RawField::Value(v),
            None => RawField::Null,
        })
    }
}

impl<T: Serialize> Serialize for RawField<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            RawField::Value(v) => serializer.serialize_some(v),
            _ => serializer.serialize_none(),
        }
    }
}

/// The config document with every key independently optional.
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    // =========================================================================
    // Target and credentials
    // =========================================================================
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub api: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub apps_domain: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub use_http: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub skip_ssl_validation: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub admin_user: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub admin_password: RawField<String>,

    // =========================================================================
    // Test users
    // =========================================================================
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub existing_user: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub existing_user_password: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub keep_user_at_suite_end: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub use_existing_user: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub test_password: RawField<String>,

    // =========================================================================
    // Persistent app and placement
    // =========================================================================
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub persistent_app_host: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub persistent_app_org: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub persistent_app_quota_name: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub persistent_app_space: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub isolation_segment_name: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub backend: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub artifacts_directory: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub name_prefix: RawField<String>,

    // =========================================================================
    // Timeouts
    // =========================================================================
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub default_timeout: RawField<i64>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub cf_push_timeout: RawField<i64>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub long_curl_timeout: RawField<i64>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub broker_start_timeout: RawField<i64>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub async_service_operation_timeout: RawField<i64>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub detect_timeout: RawField<i64>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub sleep_timeout: RawField<i64>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub timeout_scale: RawField<f64>,

    // =========================================================================
    // Buildpacks
    // =========================================================================
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub binary_buildpack_name: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub go_buildpack_name: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub java_buildpack_name: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub nodejs_buildpack_name: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub php_buildpack_name: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub python_buildpack_name: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub ruby_buildpack_name: RawField<String>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub staticfile_buildpack_name: RawField<String>,

    // =========================================================================
    // Suite inclusion flags
    // =========================================================================
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub include_apps: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub include_backend_compatibility: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub include_container_networking: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub include_detect: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub include_docker: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub include_internet_dependent: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub include_isolation_segments: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub include_privileged_container_support: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub include_route_services: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub include_routing: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub include_security_groups: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub include_services: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub include_ssh: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub include_sso: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub include_tasks: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub include_v3: RawField<bool>,
    #[serde(skip_serializing_if = "RawField::is_missing")]
    pub include_zipkin: RawField<bool>,
}

impl RawConfig {
    /// Parse a raw config from JSON bytes.
    ///
    /// Fails with [`ConfigError::MalformedInput`] on invalid JSON, a non-object
    /// document, or a value of the wrong type.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let document: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| ConfigError::MalformedInput(format!("failed to parse config JSON: {}", e)))?;

        // A derived struct would also accept a positional array.
        if !document.is_object() {
            return Err(ConfigError::MalformedInput(
                "config document must be a JSON object".to_string(),
            ));
        }

        serde_json::from_value(document)
            .map_err(|e| ConfigError::MalformedInput(format!("invalid config value: {}", e)))
    }

    /// Serialize back to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            ConfigError::MalformedInput(format!("failed to serialize config to JSON: {}", e))
        })
    }
}
