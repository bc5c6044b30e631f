//! Violations and their aggregation into a single error.

use std::fmt;

/// One failed rule: which key, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// `'<field>' must not be null`
    pub fn not_null(field: &'static str) -> Self {
        Self::new(field, format!("'{}' must not be null", field))
    }

    /// A message in the `Invalid configuration: ...` family.
    pub fn invalid(field: &'static str, detail: impl fmt::Display) -> Self {
        Self::new(field, format!("Invalid configuration: {}", detail))
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Violations in rule-registration order. Empty means valid.
pub type ValidationResult = Vec<Violation>;

/// Every violation from one validation pass, rendered as `* <message>` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    /// Turn a validation result into `Ok(())` or one aggregate error.
    pub fn aggregate(result: ValidationResult) -> Result<(), ValidationErrors> {
        if result.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { violations: result })
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether any violation concerns `field`.
    pub fn mentions(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl From<Violation> for ValidationErrors {
    fn from(violation: Violation) -> Self {
        ValidationErrors {
            violations: vec![violation],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "* {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
