//! Stable exit codes for the `opdispatch` CLI.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed, e.g. an unknown operation or condition name.
pub const INVALID: i32 = 1;
