//! Tests for config loading and defaulting.

use crate::config::types::required_fields;
use crate::config::{Backend, CatsConfig, ConfigDefaults, RawConfig, RawField};
use crate::error::ConfigError;
use crate::test_support::{
    document_with, document_without, required_document, test_loader, write_config_file,
};
use serde_json::{Map, Value, json};
use std::path::PathBuf;
use std::time::Duration;

fn load(json: &str) -> Result<CatsConfig, ConfigError> {
    test_loader().load_str(json)
}

fn baseline() -> String {
    Value::Object(required_document()).to_string()
}

#[test]
fn test_defaults_with_only_required_keys() {
    let config = load(&baseline()).unwrap();

    assert_eq!(config.persistent_app_host(), "CATS-persistent-app");
    assert_eq!(config.persistent_app_org(), "CATS-persistent-org");
    assert_eq!(config.persistent_app_quota_name(), "CATS-persistent-quota");
    assert_eq!(config.persistent_app_space(), "CATS-persistent-space");
    assert_eq!(config.isolation_segment_name(), "");

    assert!(config.include_apps());
    assert!(config.include_detect());
    assert!(config.include_routing());

    assert!(!config.include_backend_compatibility());
    assert!(!config.include_container_networking());
    assert!(!config.include_docker());
    assert!(!config.include_internet_dependent());
    assert!(!config.include_isolation_segments());
    assert!(!config.include_privileged_container_support());
    assert!(!config.include_route_services());
    assert!(!config.include_security_groups());
    assert!(!config.include_services());
    assert!(!config.include_ssh());
    assert!(!config.include_sso());
    assert!(!config.include_tasks());
    assert!(!config.include_v3());
    assert!(!config.include_zipkin());

    assert_eq!(config.backend(), Backend::Unspecified);
    assert!(!config.use_existing_user());
    assert_eq!(config.existing_user(), "");
    assert_eq!(config.existing_user_password(), "");
    assert_eq!(config.configurable_test_password(), "");
    assert!(!config.should_keep_user());

    assert_eq!(config.async_service_operation_timeout_duration(), Duration::from_secs(2 * 60));
    assert_eq!(config.broker_start_timeout_duration(), Duration::from_secs(5 * 60));
    assert_eq!(config.cf_push_timeout_duration(), Duration::from_secs(2 * 60));
    assert_eq!(config.default_timeout_duration(), Duration::from_secs(30));
    assert_eq!(config.long_curl_timeout_duration(), Duration::from_secs(2 * 60));
    assert_eq!(config.detect_timeout_duration(), Duration::from_secs(5 * 60));
    assert_eq!(config.sleep_timeout_duration(), Duration::from_secs(30));

    assert_eq!(config.scaled_timeout(Duration::from_nanos(1)), Duration::from_nanos(1));

    assert_eq!(config.artifacts_directory(), PathBuf::from("..").join("results"));
    assert_eq!(config.name_prefix(), "CATS");
    assert_eq!(config.protocol(), "http://");

    assert_eq!(config.binary_buildpack_name(), "binary_buildpack");
    assert_eq!(config.go_buildpack_name(), "go_buildpack");
    assert_eq!(config.java_buildpack_name(), "java_buildpack");
    assert_eq!(config.nodejs_buildpack_name(), "nodejs_buildpack");
    assert_eq!(config.php_buildpack_name(), "php_buildpack");
    assert_eq!(config.python_buildpack_name(), "python_buildpack");
    assert_eq!(config.ruby_buildpack_name(), "ruby_buildpack");
    assert_eq!(config.staticfile_buildpack_name(), "staticfile_buildpack");
}

#[test]
fn test_required_values_are_passed_through() {
    let config = load(&baseline()).unwrap();

    assert_eq!(config.api_endpoint(), "api.bosh-lite.com");
    assert_eq!(config.apps_domain(), "cf-app.bosh-lite.com");
    assert_eq!(config.admin_user(), "admin");
    assert_eq!(config.admin_password(), "admin");
    assert!(config.skip_ssl_validation());
    assert!(config.use_http());
}

#[test]
fn test_protocol_is_https_without_use_http() {
    let config = load(&document_without("use_http")).unwrap();
    assert!(!config.use_http());
    assert_eq!(config.protocol(), "https://");

    let config = load(&document_with("use_http", json!(false))).unwrap();
    assert_eq!(config.protocol(), "https://");
}

#[test]
fn test_overridden_timeouts_keep_their_field_unit() {
    let mut doc = required_document();
    doc.insert("default_timeout".into(), json!(12));
    doc.insert("cf_push_timeout".into(), json!(34));
    doc.insert("long_curl_timeout".into(), json!(56));
    doc.insert("broker_start_timeout".into(), json!(78));
    doc.insert("async_service_operation_timeout".into(), json!(90));
    doc.insert("detect_timeout".into(), json!(100));
    doc.insert("sleep_timeout".into(), json!(101));

    let config = load(&Value::Object(doc).to_string()).unwrap();

    assert_eq!(config.default_timeout_duration(), Duration::from_secs(12));
    assert_eq!(config.cf_push_timeout_duration(), Duration::from_secs(34 * 60));
    assert_eq!(config.long_curl_timeout_duration(), Duration::from_secs(56 * 60));
    assert_eq!(config.broker_start_timeout_duration(), Duration::from_secs(78 * 60));
    assert_eq!(config.async_service_operation_timeout_duration(), Duration::from_secs(90 * 60));
    assert_eq!(config.detect_timeout_duration(), Duration::from_secs(100 * 60));
    assert_eq!(config.sleep_timeout_duration(), Duration::from_secs(101));
}

#[test]
fn test_timeout_scale_stretches_durations() {
    let config = load(&document_with("timeout_scale", json!(2.5))).unwrap();
    assert_eq!(config.timeout_scale(), 2.5);
    assert_eq!(config.scaled_timeout(Duration::from_secs(10)), Duration::from_secs(25));
}

#[test]
fn test_supplied_values_override_defaults() {
    let mut doc = required_document();
    doc.insert("name_prefix".into(), json!("SMOKE"));
    doc.insert("include_docker".into(), json!(true));
    doc.insert("include_apps".into(), json!(false));
    doc.insert("go_buildpack_name".into(), json!("go_buildpack_v2"));
    doc.insert("artifacts_directory".into(), json!("/tmp/artifacts"));
    doc.insert("isolation_segment_name".into(), json!("segment-a"));
    doc.insert("test_password".into(), json!("hunter2"));

    let config = load(&Value::Object(doc).to_string()).unwrap();

    assert_eq!(config.name_prefix(), "SMOKE");
    assert!(config.include_docker());
    assert!(!config.include_apps());
    assert_eq!(config.go_buildpack_name(), "go_buildpack_v2");
    assert_eq!(config.artifacts_directory(), PathBuf::from("/tmp/artifacts"));
    assert_eq!(config.isolation_segment_name(), "segment-a");
    assert_eq!(config.configurable_test_password(), "hunter2");
}

#[test]
fn test_name_prefix_does_not_rename_persistent_resources() {
    let config = load(&document_with("name_prefix", json!("SMOKE"))).unwrap();
    assert_eq!(config.persistent_app_host(), "CATS-persistent-app");
    assert_eq!(config.persistent_app_space(), "CATS-persistent-space");
}

#[test]
fn test_backend_values() {
    for (value, expected) in [
        ("dea", Backend::Dea),
        ("diego", Backend::Diego),
        ("", Backend::Unspecified),
    ] {
        let config = load(&document_with("backend", json!(value))).unwrap();
        assert_eq!(config.backend(), expected);
        assert_eq!(config.backend().as_str(), value);
    }
}

#[test]
fn test_invalid_backend_is_exact_single_line() {
    let err = load(&document_with("backend", json!("asdfasdf"))).unwrap_err();
    assert_eq!(
        err.to_string(),
        "* Invalid configuration: 'backend' must be 'diego', 'dea', or empty but was set to 'asdfasdf'"
    );
}

#[test]
fn test_all_values_null_reports_every_required_key() {
    let mut doc = Map::new();
    for field in required_fields() {
        doc.insert(field.name.to_string(), Value::Null);
    }
    doc.insert("existing_user".into(), Value::Null);
    doc.insert("existing_user_password".into(), Value::Null);

    let err = load(&Value::Object(doc).to_string()).unwrap_err();
    let message = err.to_string();

    for field in required_fields() {
        assert!(
            message.contains(&format!("* '{}' must not be null", field.name)),
            "missing violation for {}:\n{}",
            field.name,
            message
        );
    }
    assert!(!message.contains("'existing_user' must not be null"));
    assert!(!message.contains("'existing_user_password' must not be null"));
}

#[test]
fn test_explicit_null_on_defaulted_key_is_rejected() {
    let err = load(&document_with("default_timeout", Value::Null)).unwrap_err();
    assert_eq!(err.to_string(), "* 'default_timeout' must not be null");

    let err = load(&document_with("include_apps", Value::Null)).unwrap_err();
    assert_eq!(err.to_string(), "* 'include_apps' must not be null");
}

#[test]
fn test_omitted_key_without_default_is_rejected() {
    for key in ["api", "apps_domain", "admin_user", "admin_password", "skip_ssl_validation"] {
        let err = load(&document_without(key)).unwrap_err();
        assert_eq!(err.to_string(), format!("* '{}' must not be null", key));
    }
}

#[test]
fn test_existing_user_null_means_empty() {
    let mut doc = required_document();
    doc.insert("existing_user".into(), Value::Null);
    doc.insert("existing_user_password".into(), Value::Null);

    let config = load(&Value::Object(doc).to_string()).unwrap();
    assert_eq!(config.existing_user(), "");
    assert_eq!(config.existing_user_password(), "");
}

#[test]
fn test_existing_user_is_passed_through() {
    let mut doc = required_document();
    doc.insert("use_existing_user".into(), json!(true));
    doc.insert("existing_user".into(), json!("ci-user"));
    doc.insert("existing_user_password".into(), json!("ci-pass"));
    doc.insert("keep_user_at_suite_end".into(), json!(true));

    let config = load(&Value::Object(doc).to_string()).unwrap();
    assert!(config.use_existing_user());
    assert!(config.should_keep_user());
    assert_eq!(config.existing_user(), "ci-user");
    assert_eq!(config.existing_user_password(), "ci-pass");
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = load(&document_with("some_future_flag", json!({"nested": true}))).unwrap();
    assert_eq!(config.name_prefix(), "CATS");
}

#[test]
fn test_malformed_json_is_rejected_without_aggregation() {
    let err = load("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::MalformedInput(_)));
}

#[test]
fn test_type_mismatch_is_malformed_input() {
    let err = load(&document_with("skip_ssl_validation", json!("yes"))).unwrap_err();
    assert!(matches!(err, ConfigError::MalformedInput(_)));

    let err = load(&document_with("default_timeout", json!(1.5))).unwrap_err();
    assert!(matches!(err, ConfigError::MalformedInput(_)));
}

#[test]
fn test_non_object_document_is_malformed_input() {
    for doc in ["[]", "[\"api.bosh-lite.com\"]", "42", "null"] {
        let err = load(doc).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedInput(_)), "accepted {}", doc);
    }
}

#[test]
fn test_raw_config_distinguishes_missing_null_and_blank() {
    let raw = RawConfig::from_slice(br#"{"api": null, "admin_user": ""}"#).unwrap();

    assert_eq!(raw.api, RawField::Null);
    assert!(raw.admin_user.is_blank());
    assert_eq!(raw.admin_password, RawField::Missing);
    assert!(!raw.admin_password.is_blank());
}

#[test]
fn test_raw_config_serializes_only_supplied_keys() {
    let raw = RawConfig {
        api: RawField::Value("api.example.com".to_string()),
        backend: RawField::Null,
        ..RawConfig::default()
    };

    let value: Value = serde_json::from_str(&raw.to_json().unwrap()).unwrap();
    assert_eq!(value, json!({"api": "api.example.com", "backend": null}));
}

#[test]
fn test_resolved_config_round_trips() {
    let config = load(&baseline()).unwrap();
    let json = config.to_json_pretty().unwrap();
    let reloaded = load(&json).unwrap();

    assert_eq!(config, reloaded);
}

#[test]
fn test_round_trip_preserves_overrides() {
    let mut doc = required_document();
    doc.insert("backend".into(), json!("diego"));
    doc.insert("cf_push_timeout".into(), json!(7));
    doc.insert("timeout_scale".into(), json!(1.5));
    doc.insert("include_ssh".into(), json!(true));

    let config = load(&Value::Object(doc).to_string()).unwrap();
    let reloaded = load(&config.to_json_pretty().unwrap()).unwrap();

    assert_eq!(config, reloaded);
    assert_eq!(reloaded.backend(), Backend::Diego);
    assert_eq!(reloaded.cf_push_timeout(), 7);
}

#[test]
fn test_custom_defaults_table() {
    let mut defaults = ConfigDefaults::with_name_prefix("SMOKE");
    defaults.default_timeout = 5;
    defaults.suites.include_ssh = true;

    let loader = test_loader().with_defaults(defaults);
    assert_eq!(loader.defaults().persistent_app_host, "SMOKE-persistent-app");
    assert_eq!(loader.defaults().default_timeout, 5);

    let config = loader.load_str(&baseline()).unwrap();

    assert_eq!(config.name_prefix(), "SMOKE");
    assert_eq!(config.persistent_app_org(), "SMOKE-persistent-org");
    assert_eq!(config.default_timeout_duration(), Duration::from_secs(5));
    assert!(config.include_ssh());
}

#[test]
fn test_defaults_apply_refuses_unvalidated_document() {
    let err = ConfigDefaults::default()
        .apply(RawConfig::default())
        .unwrap_err();
    assert!(err.violations().is_some_and(|v| v.mentions("api")));
}

#[test]
fn test_load_from_file() {
    let file = write_config_file(&baseline());
    let config = test_loader().load(file.path()).unwrap();
    assert_eq!(config.api_endpoint(), "api.bosh-lite.com");
}

#[test]
fn test_load_missing_file_is_unreadable() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = test_loader()
        .load(dir.path().join("nope.json"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Unreadable { .. }));
}
