//! Stable exit codes for the walkthrough binaries.

/// Command or script finished normally.
pub const OK: i32 = 0;
/// Invalid input, config, or catalog, or any other error.
pub const INVALID: i32 = 1;
/// A scripted run was rejected by the step gate (prerequisites incomplete).
pub const BLOCKED: i32 = 2;
