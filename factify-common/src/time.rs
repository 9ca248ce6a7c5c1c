//! Timestamp utilities

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Elapsed wall-clock time as fractional seconds
pub fn duration_secs(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64()
}

/// Whole seconds between `since` and now, never negative
pub fn seconds_since(since: DateTime<Utc>) -> u64 {
    Utc::now()
        .signed_duration_since(since)
        .num_seconds()
        .max(0) as u64
}
