//! Field rules and the validator that runs them.
//!
//! Every rule sees the whole raw document and reports zero or more
//! violations. The validator runs all of them in registration order and never
//! stops early, so one pass surfaces every problem in the file.

use super::endpoint::{ApiEndpointRule, AppsDomainRule};
use super::resolver::HostResolver;
use super::violation::{ValidationResult, Violation};
use crate::config::types::{RequiredField, TimeoutField, required_fields, timeout_fields};
use crate::config::{Backend, Presence, RawConfig, RawField};

/// A single independent check over the raw document.
pub trait Rule {
    fn check(&self, raw: &RawConfig) -> Vec<Violation>;
}

/// Rejects a required key that is null, or omitted without a default.
pub struct NotNullRule {
    field: RequiredField,
}

impl NotNullRule {
    pub fn new(field: RequiredField) -> Self {
        Self { field }
    }
}

impl Rule for NotNullRule {
    fn check(&self, raw: &RawConfig) -> Vec<Violation> {
        let missing = match self.field.presence(raw) {
            Presence::Null => true,
            Presence::Missing => !self.field.defaulted,
            Presence::Present => false,
        };

        if missing {
            vec![Violation::not_null(self.field.name)]
        } else {
            Vec::new()
        }
    }
}

/// Rejects a string key that is present but empty.
pub struct NotBlankRule {
    field: &'static str,
    value: fn(&RawConfig) -> &RawField<String>,
}

impl NotBlankRule {
    pub fn new(field: &'static str, value: fn(&RawConfig) -> &RawField<String>) -> Self {
        Self { field, value }
    }
}

impl Rule for NotBlankRule {
    fn check(&self, raw: &RawConfig) -> Vec<Violation> {
        if (self.value)(raw).is_blank() {
            vec![Violation::invalid(
                self.field,
                format_args!("'{}' must be provided", self.field),
            )]
        } else {
            Vec::new()
        }
    }
}

pub(crate) fn backend_violation(value: &str) -> Violation {
    Violation::invalid(
        "backend",
        format_args!(
            "'backend' must be 'diego', 'dea', or empty but was set to '{}'",
            value
        ),
    )
}

/// `backend` must be one of `""`, `"dea"`, `"diego"`.
pub struct BackendRule;

impl Rule for BackendRule {
    fn check(&self, raw: &RawConfig) -> Vec<Violation> {
        match raw.backend.as_str() {
            Some(value) if Backend::from_str(value).is_none() => vec![backend_violation(value)],
            _ => Vec::new(),
        }
    }
}

pub(crate) fn negative_timeout_violation(field: &'static str, value: i64) -> Violation {
    Violation::invalid(
        field,
        format_args!(
            "'{}' must not be negative but was set to '{}'",
            field, value
        ),
    )
}

/// Timeouts are counts of seconds or minutes and cannot be negative.
pub struct TimeoutRule {
    field: TimeoutField,
}

impl TimeoutRule {
    pub fn new(field: TimeoutField) -> Self {
        Self { field }
    }
}

impl Rule for TimeoutRule {
    fn check(&self, raw: &RawConfig) -> Vec<Violation> {
        match self.field.value(raw) {
            Some(value) if value < 0 => vec![negative_timeout_violation(self.field.name, value)],
            _ => Vec::new(),
        }
    }
}

/// `timeout_scale` multiplies durations, so it must be a positive number.
pub struct TimeoutScaleRule;

impl Rule for TimeoutScaleRule {
    fn check(&self, raw: &RawConfig) -> Vec<Violation> {
        match raw.timeout_scale.value() {
            Some(&scale) if !(scale.is_finite() && scale > 0.0) => vec![Violation::invalid(
                "timeout_scale",
                format_args!(
                    "'timeout_scale' must be greater than zero but was set to '{}'",
                    scale
                ),
            )],
            _ => Vec::new(),
        }
    }
}

/// With `use_existing_user` on, the credentials of that user must be given.
pub struct ExistingUserRule;

impl Rule for ExistingUserRule {
    fn check(&self, raw: &RawConfig) -> Vec<Violation> {
        if raw.use_existing_user.value() != Some(&true) {
            return Vec::new();
        }

        let mut violations = Vec::new();
        for (field, value) in [
            ("existing_user", &raw.existing_user),
            ("existing_user_password", &raw.existing_user_password),
        ] {
            if value.as_str().is_none_or(str::is_empty) {
                violations.push(Violation::invalid(
                    field,
                    format_args!(
                        "'{}' must be provided when 'use_existing_user' is true",
                        field
                    ),
                ));
            }
        }
        violations
    }
}

/// Ordered collection of rules.
pub struct Validator<'a> {
    rules: Vec<Box<dyn Rule + 'a>>,
}

impl<'a> Validator<'a> {
    /// An empty validator; rules run in the order they are added.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The standard rule set.
    pub fn new(resolver: &'a dyn HostResolver) -> Self {
        let mut validator = Self::empty();

        for field in required_fields() {
            validator.register(NotNullRule::new(field));
        }

        validator.register(ApiEndpointRule::new(resolver));
        validator.register(AppsDomainRule::new(resolver));
        validator.register(NotBlankRule::new("admin_user", |c| &c.admin_user));
        validator.register(NotBlankRule::new("admin_password", |c| &c.admin_password));
        validator.register(BackendRule);

        for field in timeout_fields() {
            validator.register(TimeoutRule::new(field));
        }
        validator.register(TimeoutScaleRule);
        validator.register(ExistingUserRule);

        validator
    }

    pub fn register(&mut self, rule: impl Rule + 'a) -> &mut Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule and collect all violations.
    pub fn validate(&self, raw: &RawConfig) -> ValidationResult {
        self.rules.iter().flat_map(|rule| rule.check(raw)).collect()
    }
}
