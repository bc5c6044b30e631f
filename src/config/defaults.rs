//! Default values and the step that applies them.
//!
//! Defaults are an explicit table rather than process-wide constants, so a
//! loader can be given a different table.

use super::model::CatsConfig;
use super::raw::{RawConfig, RawField};
use super::types::{Backend, BuildpackNames, SuiteFlags};
use crate::error::Result;
use crate::validate::rules::{backend_violation, negative_timeout_violation};
use crate::validate::{ValidationErrors, Violation};
use std::path::PathBuf;

/// Values used for keys omitted from the config document.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDefaults {
    pub use_http: bool,
    pub keep_user_at_suite_end: bool,
    pub use_existing_user: bool,
    pub existing_user: String,
    pub existing_user_password: String,
    pub test_password: String,

    pub name_prefix: String,
    pub persistent_app_host: String,
    pub persistent_app_org: String,
    pub persistent_app_quota_name: String,
    pub persistent_app_space: String,
    pub isolation_segment_name: String,
    pub backend: Backend,
    pub artifacts_directory: PathBuf,

    /// Seconds.
    pub default_timeout: u64,
    /// Minutes.
    pub cf_push_timeout: u64,
    /// Minutes.
    pub long_curl_timeout: u64,
    /// Minutes.
    pub broker_start_timeout: u64,
    /// Minutes.
    pub async_service_operation_timeout: u64,
    /// Minutes.
    pub detect_timeout: u64,
    /// Seconds.
    pub sleep_timeout: u64,
    pub timeout_scale: f64,

    pub buildpacks: BuildpackNames,
    pub suites: SuiteFlags,
}

impl ConfigDefaults {
    /// Standard defaults with persistent resource names derived from `prefix`.
    pub fn with_name_prefix(prefix: &str) -> Self {
        Self {
            use_http: false,
            keep_user_at_suite_end: false,
            use_existing_user: false,
            existing_user: String::new(),
            existing_user_password: String::new(),
            test_password: String::new(),
            name_prefix: prefix.to_string(),
            persistent_app_host: format!("{}-persistent-app", prefix),
            persistent_app_org: format!("{}-persistent-org", prefix),
            persistent_app_quota_name: format!("{}-persistent-quota", prefix),
            persistent_app_space: format!("{}-persistent-space", prefix),
            isolation_segment_name: String::new(),
            backend: Backend::Unspecified,
            artifacts_directory: PathBuf::from("..").join("results"),
            default_timeout: 30,
            cf_push_timeout: 2,
            long_curl_timeout: 2,
            broker_start_timeout: 5,
            async_service_operation_timeout: 2,
            detect_timeout: 5,
            sleep_timeout: 30,
            timeout_scale: 1.0,
            buildpacks: BuildpackNames::default(),
            suites: SuiteFlags::default(),
        }
    }

    /// Fill every unsupplied key of an already validated document.
    ///
    /// The checks here only fire if the document skipped validation; they keep
    /// the conversion total without panicking.
    pub fn apply(&self, raw: RawConfig) -> Result<CatsConfig> {
        let backend = match raw.backend {
            RawField::Value(value) => {
                Backend::from_str(&value).ok_or_else(|| reject(backend_violation(&value)))?
            }
            _ => self.backend,
        };

        let d = self;
        Ok(CatsConfig {
            api_endpoint: mandatory("api", raw.api)?,
            apps_domain: mandatory("apps_domain", raw.apps_domain)?,
            use_http: raw.use_http.or(d.use_http),
            skip_ssl_validation: mandatory("skip_ssl_validation", raw.skip_ssl_validation)?,
            admin_user: mandatory("admin_user", raw.admin_user)?,
            admin_password: mandatory("admin_password", raw.admin_password)?,

            existing_user: raw.existing_user.or(d.existing_user.clone()),
            existing_user_password: raw
                .existing_user_password
                .or(d.existing_user_password.clone()),
            should_keep_user: raw.keep_user_at_suite_end.or(d.keep_user_at_suite_end),
            use_existing_user: raw.use_existing_user.or(d.use_existing_user),
            configurable_test_password: raw.test_password.or(d.test_password.clone()),

            persistent_app_host: raw.persistent_app_host.or(d.persistent_app_host.clone()),
            persistent_app_org: raw.persistent_app_org.or(d.persistent_app_org.clone()),
            persistent_app_quota_name: raw
                .persistent_app_quota_name
                .or(d.persistent_app_quota_name.clone()),
            persistent_app_space: raw.persistent_app_space.or(d.persistent_app_space.clone()),
            isolation_segment_name: raw
                .isolation_segment_name
                .or(d.isolation_segment_name.clone()),
            backend,
            artifacts_directory: match raw.artifacts_directory {
                RawField::Value(dir) => PathBuf::from(dir),
                _ => d.artifacts_directory.clone(),
            },
            name_prefix: raw.name_prefix.or(d.name_prefix.clone()),

            default_timeout: timeout("default_timeout", raw.default_timeout, d.default_timeout)?,
            cf_push_timeout: timeout("cf_push_timeout", raw.cf_push_timeout, d.cf_push_timeout)?,
            long_curl_timeout: timeout(
                "long_curl_timeout",
                raw.long_curl_timeout,
                d.long_curl_timeout,
            )?,
            broker_start_timeout: timeout(
                "broker_start_timeout",
                raw.broker_start_timeout,
                d.broker_start_timeout,
            )?,
            async_service_operation_timeout: timeout(
                "async_service_operation_timeout",
                raw.async_service_operation_timeout,
                d.async_service_operation_timeout,
            )?,
            detect_timeout: timeout("detect_timeout", raw.detect_timeout, d.detect_timeout)?,
            sleep_timeout: timeout("sleep_timeout", raw.sleep_timeout, d.sleep_timeout)?,
            timeout_scale: raw.timeout_scale.or(d.timeout_scale),

            buildpacks: BuildpackNames {
                binary: raw.binary_buildpack_name.or(d.buildpacks.binary.clone()),
                go: raw.go_buildpack_name.or(d.buildpacks.go.clone()),
                java: raw.java_buildpack_name.or(d.buildpacks.java.clone()),
                nodejs: raw.nodejs_buildpack_name.or(d.buildpacks.nodejs.clone()),
                php: raw.php_buildpack_name.or(d.buildpacks.php.clone()),
                python: raw.python_buildpack_name.or(d.buildpacks.python.clone()),
                ruby: raw.ruby_buildpack_name.or(d.buildpacks.ruby.clone()),
                staticfile: raw
                    .staticfile_buildpack_name
                    .or(d.buildpacks.staticfile.clone()),
            },
            suites: SuiteFlags {
                include_apps: raw.include_apps.or(d.suites.include_apps),
                include_backend_compatibility: raw
                    .include_backend_compatibility
                    .or(d.suites.include_backend_compatibility),
                include_container_networking: raw
                    .include_container_networking
                    .or(d.suites.include_container_networking),
                include_detect: raw.include_detect.or(d.suites.include_detect),
                include_docker: raw.include_docker.or(d.suites.include_docker),
                include_internet_dependent: raw
                    .include_internet_dependent
                    .or(d.suites.include_internet_dependent),
                include_isolation_segments: raw
                    .include_isolation_segments
                    .or(d.suites.include_isolation_segments),
                include_privileged_container_support: raw
                    .include_privileged_container_support
                    .or(d.suites.include_privileged_container_support),
                include_route_services: raw
                    .include_route_services
                    .or(d.suites.include_route_services),
                include_routing: raw.include_routing.or(d.suites.include_routing),
                include_security_groups: raw
                    .include_security_groups
                    .or(d.suites.include_security_groups),
                include_services: raw.include_services.or(d.suites.include_services),
                include_ssh: raw.include_ssh.or(d.suites.include_ssh),
                include_sso: raw.include_sso.or(d.suites.include_sso),
                include_tasks: raw.include_tasks.or(d.suites.include_tasks),
                include_v3: raw.include_v3.or(d.suites.include_v3),
                include_zipkin: raw.include_zipkin.or(d.suites.include_zipkin),
            },
        })
    }
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self::with_name_prefix("CATS")
    }
}

fn reject(violation: Violation) -> crate::error::ConfigError {
    crate::error::ConfigError::ValidationFailure(ValidationErrors::from(violation))
}

fn mandatory<T>(field: &'static str, value: RawField<T>) -> Result<T> {
    match value {
        RawField::Value(v) => Ok(v),
        _ => Err(reject(Violation::not_null(field))),
    }
}

fn timeout(field: &'static str, value: RawField<i64>, default: u64) -> Result<u64> {
    match value {
        RawField::Value(v) => {
            u64::try_from(v).map_err(|_| reject(negative_timeout_violation(field, v)))
        }
        _ => Ok(default),
    }
}
