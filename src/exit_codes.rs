//! Exit code constants for the cats-config CLI.
//!
//! - 0: Success
//! - 1: User error (no path, unreadable or malformed file)
//! - 2: Validation failure (one or more config rules failed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: no config path, unreadable file, or malformed JSON.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the document parsed but broke one or more rules.
pub const VALIDATION_FAILURE: i32 = 2;
