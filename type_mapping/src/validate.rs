//! Validation utilities for timestamps
//!
//! A `Timestamp` is valid when it falls between 0001-01-01T00:00:00Z and
//! 9999-12-31T23:59:59.999999999Z with a normalized nanosecond part.

use crate::wrappers::Timestamp;

/// Seconds of 0001-01-01T00:00:00Z relative to the Unix epoch
pub const MIN_VALID_SECONDS: i64 = -62_135_596_800;

/// Seconds of 9999-12-31T23:59:59Z relative to the Unix epoch
pub const MAX_VALID_SECONDS: i64 = 253_402_300_799;

pub const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// Check if a timestamp is within the representable range
pub fn is_valid_timestamp(ts: &Timestamp) -> bool {
    (MIN_VALID_SECONDS..=MAX_VALID_SECONDS).contains(&ts.seconds)
        && (0..NANOS_PER_SECOND).contains(&ts.nanos)
}
