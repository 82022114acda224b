//! Quota usage constants.

/// Usage at or above this percentage is shown as a warning.
pub const WARNING_THRESHOLD_PERCENT: f64 = 70.0;

/// Usage at or above this percentage is shown as danger.
pub const DANGER_THRESHOLD_PERCENT: f64 = 90.0;

/// Pod ceiling given to a newly created cluster.
pub const DEFAULT_MAX_PODS: f64 = 110.0;
