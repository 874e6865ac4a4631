//! Stable exit codes for `netadmit` commands.

/// Command succeeded; for `check`, no causes were reported.
pub const OK: i32 = 0;
/// Command failed: unreadable or undecodable input, bad config, or other errors.
pub const INVALID: i32 = 1;
/// `netadmit check` reported at least one validation cause.
pub const REJECTED: i32 = 2;
