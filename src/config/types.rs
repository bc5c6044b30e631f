//! Configuration value types and the field registry.
//!
//! The registry lists the required keys and the timeout keys in the order the
//! validator checks them, so error output is stable across runs.

use super::raw::{Presence, RawConfig};
use serde::Serialize;
use std::time::Duration;

/// Application runtime backend targeted by the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum Backend {
    /// No preference; tests that care about the backend are skipped.
    #[default]
    #[serde(rename = "")]
    Unspecified,
    #[serde(rename = "dea")]
    Dea,
    #[serde(rename = "diego")]
    Diego,
}

impl Backend {
    /// Parse a backend from its config spelling.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "" => Some(Self::Unspecified),
            "dea" => Some(Self::Dea),
            "diego" => Some(Self::Diego),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Dea => "dea",
            Self::Diego => "diego",
        }
    }
}

/// Unit a timeout field's integer value is expressed in.
///
/// Each field has exactly one unit; an override is read in the same unit as
/// the field's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutUnit {
    Seconds,
    Minutes,
}

impl TimeoutUnit {
    pub fn duration(self, magnitude: u64) -> Duration {
        match self {
            TimeoutUnit::Seconds => Duration::from_secs(magnitude),
            TimeoutUnit::Minutes => Duration::from_secs(magnitude.saturating_mul(60)),
        }
    }
}

/// Names of the buildpacks pushed by the language-specific suites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildpackNames {
    #[serde(rename = "binary_buildpack_name")]
    pub binary: String,
    #[serde(rename = "go_buildpack_name")]
    pub go: String,
    #[serde(rename = "java_buildpack_name")]
    pub java: String,
    #[serde(rename = "nodejs_buildpack_name")]
    pub nodejs: String,
    #[serde(rename = "php_buildpack_name")]
    pub php: String,
    #[serde(rename = "python_buildpack_name")]
    pub python: String,
    #[serde(rename = "ruby_buildpack_name")]
    pub ruby: String,
    #[serde(rename = "staticfile_buildpack_name")]
    pub staticfile: String,
}

impl Default for BuildpackNames {
    fn default() -> Self {
        Self {
            binary: "binary_buildpack".to_string(),
            go: "go_buildpack".to_string(),
            java: "java_buildpack".to_string(),
            nodejs: "nodejs_buildpack".to_string(),
            php: "php_buildpack".to_string(),
            python: "python_buildpack".to_string(),
            ruby: "ruby_buildpack".to_string(),
            staticfile: "staticfile_buildpack".to_string(),
        }
    }
}

/// Which test suites a run includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuiteFlags {
    pub include_apps: bool,
    pub include_backend_compatibility: bool,
    pub include_container_networking: bool,
    pub include_detect: bool,
    pub include_docker: bool,
    pub include_internet_dependent: bool,
    pub include_isolation_segments: bool,
    pub include_privileged_container_support: bool,
    pub include_route_services: bool,
    pub include_routing: bool,
    pub include_security_groups: bool,
    pub include_services: bool,
    pub include_ssh: bool,
    pub include_sso: bool,
    pub include_tasks: bool,
    pub include_v3: bool,
    pub include_zipkin: bool,
}

impl Default for SuiteFlags {
    fn default() -> Self {
        Self {
            include_apps: true,
            include_backend_compatibility: false,
            include_container_networking: false,
            include_detect: true,
            include_docker: false,
            include_internet_dependent: false,
            include_isolation_segments: false,
            include_privileged_container_support: false,
            include_route_services: false,
            include_routing: true,
            include_security_groups: false,
            include_services: false,
            include_ssh: false,
            include_sso: false,
            include_tasks: false,
            include_v3: false,
            include_zipkin: false,
        }
    }
}

// ============================================================================
// Field registry
// ============================================================================

/// A key that must never be explicitly null.
pub struct RequiredField {
    pub name: &'static str,
    /// Whether omitting the key falls back to a default.
    pub defaulted: bool,
    presence: fn(&RawConfig) -> Presence,
}

impl RequiredField {
    pub fn presence(&self, raw: &RawConfig) -> Presence {
        (self.presence)(raw)
    }
}

fn required(
    name: &'static str,
    defaulted: bool,
    presence: fn(&RawConfig) -> Presence,
) -> RequiredField {
    RequiredField {
        name,
        defaulted,
        presence,
    }
}

/// All required keys, in check order.
///
/// `existing_user` and `existing_user_password` are intentionally absent: a
/// null there means "no existing user".
pub fn required_fields() -> Vec<RequiredField> {
    vec![
        required("api", false, |c| c.api.presence()),
        required("apps_domain", false, |c| c.apps_domain.presence()),
        required("use_http", true, |c| c.use_http.presence()),
        required("admin_password", false, |c| c.admin_password.presence()),
        required("admin_user", false, |c| c.admin_user.presence()),
        required("keep_user_at_suite_end", true, |c| c.keep_user_at_suite_end.presence()),
        required("use_existing_user", true, |c| c.use_existing_user.presence()),
        required("test_password", true, |c| c.test_password.presence()),
        required("persistent_app_host", true, |c| c.persistent_app_host.presence()),
        required("persistent_app_org", true, |c| c.persistent_app_org.presence()),
        required("persistent_app_quota_name", true, |c| c.persistent_app_quota_name.presence()),
        required("persistent_app_space", true, |c| c.persistent_app_space.presence()),
        required("isolation_segment_name", true, |c| c.isolation_segment_name.presence()),
        required("backend", true, |c| c.backend.presence()),
        required("skip_ssl_validation", false, |c| c.skip_ssl_validation.presence()),
        required("artifacts_directory", true, |c| c.artifacts_directory.presence()),
        required("async_service_operation_timeout", true, |c| {
            c.async_service_operation_timeout.presence()
        }),
        required("broker_start_timeout", true, |c| c.broker_start_timeout.presence()),
        required("cf_push_timeout", true, |c| c.cf_push_timeout.presence()),
        required("default_timeout", true, |c| c.default_timeout.presence()),
        required("detect_timeout", true, |c| c.detect_timeout.presence()),
        required("long_curl_timeout", true, |c| c.long_curl_timeout.presence()),
        required("sleep_timeout", true, |c| c.sleep_timeout.presence()),
        required("timeout_scale", true, |c| c.timeout_scale.presence()),
        required("binary_buildpack_name", true, |c| c.binary_buildpack_name.presence()),
        required("go_buildpack_name", true, |c| c.go_buildpack_name.presence()),
        required("java_buildpack_name", true, |c| c.java_buildpack_name.presence()),
        required("nodejs_buildpack_name", true, |c| c.nodejs_buildpack_name.presence()),
        required("php_buildpack_name", true, |c| c.php_buildpack_name.presence()),
        required("python_buildpack_name", true, |c| c.python_buildpack_name.presence()),
        required("ruby_buildpack_name", true, |c| c.ruby_buildpack_name.presence()),
        required("staticfile_buildpack_name", true, |c| c.staticfile_buildpack_name.presence()),
        required("include_apps", true, |c| c.include_apps.presence()),
        required("include_backend_compatibility", true, |c| {
            c.include_backend_compatibility.presence()
        }),
        required("include_container_networking", true, |c| {
            c.include_container_networking.presence()
        }),
        required("include_detect", true, |c| c.include_detect.presence()),
        required("include_docker", true, |c| c.include_docker.presence()),
        required("include_internet_dependent", true, |c| c.include_internet_dependent.presence()),
        required("include_isolation_segments", true, |c| c.include_isolation_segments.presence()),
        required("include_privileged_container_support", true, |c| {
            c.include_privileged_container_support.presence()
        }),
        required("include_route_services", true, |c| c.include_route_services.presence()),
        required("include_routing", true, |c| c.include_routing.presence()),
        required("include_security_groups", true, |c| c.include_security_groups.presence()),
        required("include_services", true, |c| c.include_services.presence()),
        required("include_ssh", true, |c| c.include_ssh.presence()),
        required("include_sso", true, |c| c.include_sso.presence()),
        required("include_tasks", true, |c| c.include_tasks.presence()),
        required("include_v3", true, |c| c.include_v3.presence()),
        required("include_zipkin", true, |c| c.include_zipkin.presence()),
        required("name_prefix", true, |c| c.name_prefix.presence()),
    ]
}

/// A timeout key and the unit its value is read in.
pub struct TimeoutField {
    pub name: &'static str,
    pub unit: TimeoutUnit,
    value: fn(&RawConfig) -> Option<i64>,
}

impl TimeoutField {
    /// The supplied value, if any.
    pub fn value(&self, raw: &RawConfig) -> Option<i64> {
        (self.value)(raw)
    }
}

/// The seven timeout keys, in check order.
pub fn timeout_fields() -> [TimeoutField; 7] {
    use TimeoutUnit::{Minutes, Seconds};

    [
        TimeoutField {
            name: "default_timeout",
            unit: Seconds,
            value: |c| c.default_timeout.value().copied(),
        },
        TimeoutField {
            name: "cf_push_timeout",
            unit: Minutes,
            value: |c| c.cf_push_timeout.value().copied(),
        },
        TimeoutField {
            name: "long_curl_timeout",
            unit: Minutes,
            value: |c| c.long_curl_timeout.value().copied(),
        },
        TimeoutField {
            name: "broker_start_timeout",
            unit: Minutes,
            value: |c| c.broker_start_timeout.value().copied(),
        },
        TimeoutField {
            name: "async_service_operation_timeout",
            unit: Minutes,
            value: |c| c.async_service_operation_timeout.value().copied(),
        },
        TimeoutField {
            name: "detect_timeout",
            unit: Minutes,
            value: |c| c.detect_timeout.value().copied(),
        },
        TimeoutField {
            name: "sleep_timeout",
            unit: Seconds,
            value: |c| c.sleep_timeout.value().copied(),
        },
    ]
}
