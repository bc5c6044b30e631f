//! Configuration model for acceptance test runs.
//!
//! A JSON document is parsed into a [`RawConfig`] where every key may be
//! omitted or null, checked by the rules in [`crate::validate`], and then
//! completed from a [`ConfigDefaults`] table into an immutable [`CatsConfig`].

mod defaults;
mod model;
mod operations;
pub mod raw;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use defaults::ConfigDefaults;
pub use model::CatsConfig;
pub use operations::ConfigLoader;
pub use raw::{Presence, RawConfig, RawField};
pub use types::{Backend, BuildpackNames, SuiteFlags, TimeoutUnit};
