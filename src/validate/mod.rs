//! Validation rules for config documents.
//!
//! - Not-null and not-blank checks on required keys
//! - URL shape and DNS resolvability for `api` and `apps_domain`
//! - Enumeration, timeout and cross-field checks
//!
//! Rules never short-circuit; all violations from one pass are aggregated
//! into a single [`ValidationErrors`].

pub mod endpoint;
pub mod resolver;
pub mod rules;
pub mod violation;


pub use endpoint::{ApiEndpointRule, AppsDomainRule, parse_host};
pub use resolver::{HostResolver, SystemResolver};
pub use rules::{Rule, Validator};
pub use violation::{ValidationErrors, ValidationResult, Violation};
