//! The resolved, read-only configuration handed to test suites.

use super::types::{Backend, BuildpackNames, SuiteFlags, TimeoutUnit};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A fully validated and defaulted acceptance-test configuration.
///
/// Only ever built after every validation rule has passed. There are no
/// setters; serializing it yields a document that loads back to an equal
/// value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatsConfig {
    // =========================================================================
    // Target and credentials
    // =========================================================================
    #[serde(rename = "api")]
    pub(crate) api_endpoint: String,
    pub(crate) apps_domain: String,
    pub(crate) use_http: bool,
    pub(crate) skip_ssl_validation: bool,
    pub(crate) admin_user: String,
    pub(crate) admin_password: String,

    // =========================================================================
    // Test users
    // =========================================================================
    pub(crate) existing_user: String,
    pub(crate) existing_user_password: String,
    #[serde(rename = "keep_user_at_suite_end")]
    pub(crate) should_keep_user: bool,
    pub(crate) use_existing_user: bool,
    #[serde(rename = "test_password")]
    pub(crate) configurable_test_password: String,

    // =========================================================================
    // Persistent app and placement
    // =========================================================================
    pub(crate) persistent_app_host: String,
    pub(crate) persistent_app_org: String,
    pub(crate) persistent_app_quota_name: String,
    pub(crate) persistent_app_space: String,
    pub(crate) isolation_segment_name: String,
    pub(crate) backend: Backend,
    pub(crate) artifacts_directory: PathBuf,
    pub(crate) name_prefix: String,

    // =========================================================================
    // Timeouts, as integers in each field's own unit
    // =========================================================================
    pub(crate) default_timeout: u64,
    pub(crate) cf_push_timeout: u64,
    pub(crate) long_curl_timeout: u64,
    pub(crate) broker_start_timeout: u64,
    pub(crate) async_service_operation_timeout: u64,
    pub(crate) detect_timeout: u64,
    pub(crate) sleep_timeout: u64,
    pub(crate) timeout_scale: f64,

    #[serde(flatten)]
    pub(crate) buildpacks: BuildpackNames,
    #[serde(flatten)]
    pub(crate) suites: SuiteFlags,
}

impl CatsConfig {
    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    pub fn apps_domain(&self) -> &str {
        &self.apps_domain
    }

    pub fn use_http(&self) -> bool {
        self.use_http
    }

    pub fn skip_ssl_validation(&self) -> bool {
        self.skip_ssl_validation
    }

    /// URL scheme prefix for requests against apps and the API.
    pub fn protocol(&self) -> &'static str {
        if self.use_http { "http://" } else { "https://" }
    }

    pub fn admin_user(&self) -> &str {
        &self.admin_user
    }

    pub fn admin_password(&self) -> &str {
        &self.admin_password
    }

    pub fn existing_user(&self) -> &str {
        &self.existing_user
    }

    pub fn existing_user_password(&self) -> &str {
        &self.existing_user_password
    }

    /// Whether the suite's test user survives the end of the run.
    pub fn should_keep_user(&self) -> bool {
        self.should_keep_user
    }

    pub fn use_existing_user(&self) -> bool {
        self.use_existing_user
    }

    /// Password assigned to generated test users; empty means random.
    pub fn configurable_test_password(&self) -> &str {
        &self.configurable_test_password
    }

    pub fn persistent_app_host(&self) -> &str {
        &self.persistent_app_host
    }

    pub fn persistent_app_org(&self) -> &str {
        &self.persistent_app_org
    }

    pub fn persistent_app_quota_name(&self) -> &str {
        &self.persistent_app_quota_name
    }

    pub fn persistent_app_space(&self) -> &str {
        &self.persistent_app_space
    }

    pub fn isolation_segment_name(&self) -> &str {
        &self.isolation_segment_name
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn artifacts_directory(&self) -> &Path {
        &self.artifacts_directory
    }

    pub fn name_prefix(&self) -> &str {
        &self.name_prefix
    }

    // =========================================================================
    // Timeouts
    // =========================================================================

    pub fn default_timeout(&self) -> u64 {
        self.default_timeout
    }

    pub fn cf_push_timeout(&self) -> u64 {
        self.cf_push_timeout
    }

    pub fn long_curl_timeout(&self) -> u64 {
        self.long_curl_timeout
    }

    pub fn broker_start_timeout(&self) -> u64 {
        self.broker_start_timeout
    }

    pub fn async_service_operation_timeout(&self) -> u64 {
        self.async_service_operation_timeout
    }

    pub fn detect_timeout(&self) -> u64 {
        self.detect_timeout
    }

    pub fn sleep_timeout(&self) -> u64 {
        self.sleep_timeout
    }

    pub fn timeout_scale(&self) -> f64 {
        self.timeout_scale
    }

    pub fn default_timeout_duration(&self) -> Duration {
        TimeoutUnit::Seconds.duration(self.default_timeout)
    }

    pub fn cf_push_timeout_duration(&self) -> Duration {
        TimeoutUnit::Minutes.duration(self.cf_push_timeout)
    }

    pub fn long_curl_timeout_duration(&self) -> Duration {
        TimeoutUnit::Minutes.duration(self.long_curl_timeout)
    }

    pub fn broker_start_timeout_duration(&self) -> Duration {
        TimeoutUnit::Minutes.duration(self.broker_start_timeout)
    }

    pub fn async_service_operation_timeout_duration(&self) -> Duration {
        TimeoutUnit::Minutes.duration(self.async_service_operation_timeout)
    }

    pub fn detect_timeout_duration(&self) -> Duration {
        TimeoutUnit::Minutes.duration(self.detect_timeout)
    }

    pub fn sleep_timeout_duration(&self) -> Duration {
        TimeoutUnit::Seconds.duration(self.sleep_timeout)
    }

    /// Stretch `base` by the configured timeout scale.
    ///
    /// Slow environments raise `timeout_scale` instead of every timeout.
    pub fn scaled_timeout(&self, base: Duration) -> Duration {
        Duration::try_from_secs_f64(base.as_secs_f64() * self.timeout_scale)
            .unwrap_or(Duration::MAX)
    }

    // =========================================================================
    // Buildpacks
    // =========================================================================

    pub fn buildpacks(&self) -> &BuildpackNames {
        &self.buildpacks
    }

    pub fn binary_buildpack_name(&self) -> &str {
        &self.buildpacks.binary
    }

    pub fn go_buildpack_name(&self) -> &str {
        &self.buildpacks.go
    }

    pub fn java_buildpack_name(&self) -> &str {
        &self.buildpacks.java
    }

    pub fn nodejs_buildpack_name(&self) -> &str {
        &self.buildpacks.nodejs
    }

    pub fn php_buildpack_name(&self) -> &str {
        &self.buildpacks.php
    }

    pub fn python_buildpack_name(&self) -> &str {
        &self.buildpacks.python
    }

    pub fn ruby_buildpack_name(&self) -> &str {
        &self.buildpacks.ruby
    }

    pub fn staticfile_buildpack_name(&self) -> &str {
        &self.buildpacks.staticfile
    }

    // =========================================================================
    // Suite inclusion
    // =========================================================================

    pub fn suites(&self) -> &SuiteFlags {
        &self.suites
    }

    pub fn include_apps(&self) -> bool {
        self.suites.include_apps
    }

    pub fn include_backend_compatibility(&self) -> bool {
        self.suites.include_backend_compatibility
    }

    pub fn include_container_networking(&self) -> bool {
        self.suites.include_container_networking
    }

    pub fn include_detect(&self) -> bool {
        self.suites.include_detect
    }

    pub fn include_docker(&self) -> bool {
        self.suites.include_docker
    }

    pub fn include_internet_dependent(&self) -> bool {
        self.suites.include_internet_dependent
    }

    pub fn include_isolation_segments(&self) -> bool {
        self.suites.include_isolation_segments
    }

    pub fn include_privileged_container_support(&self) -> bool {
        self.suites.include_privileged_container_support
    }

    pub fn include_route_services(&self) -> bool {
        self.suites.include_route_services
    }

    pub fn include_routing(&self) -> bool {
        self.suites.include_routing
    }

    pub fn include_security_groups(&self) -> bool {
        self.suites.include_security_groups
    }

    pub fn include_services(&self) -> bool {
        self.suites.include_services
    }

    pub fn include_ssh(&self) -> bool {
        self.suites.include_ssh
    }

    pub fn include_sso(&self) -> bool {
        self.suites.include_sso
    }

    pub fn include_tasks(&self) -> bool {
        self.suites.include_tasks
    }

    pub fn include_v3(&self) -> bool {
        self.suites.include_v3
    }

    pub fn include_zipkin(&self) -> bool {
        self.suites.include_zipkin
    }
}
