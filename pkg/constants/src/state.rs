//! In-memory store constants.

/// How many change-log entries the store keeps before dropping the oldest.
pub const DEFAULT_CHANGE_LOG_CAPACITY: usize = 256;
