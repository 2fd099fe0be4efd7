//! Timestamp conversions with the default configuration
//!
//! The Unix epoch counts as "not set": it encodes to `None`, and a decoded
//! epoch comes back as `None`. Use [`WrapConverter`] for other rules.

use chrono::{DateTime, TimeZone, Utc};
use type_mapping::Timestamp;

use crate::core::WrapConverter;
use crate::errors::ProtoWrapError;

/// Encode an optional point in time
pub fn timestamp<Tz: TimeZone>(v: Option<&DateTime<Tz>>) -> Option<Timestamp> {
    WrapConverter::DEFAULT.timestamp(v)
}

/// Decode an optional timestamp, collapsing invalid and zero values to `None`
pub fn time(v: Option<&Timestamp>) -> Option<DateTime<Utc>> {
    WrapConverter::DEFAULT.time(v)
}

/// Decode an optional timestamp, keeping out-of-range values as an error
pub fn try_time(v: Option<&Timestamp>) -> Result<Option<DateTime<Utc>>, ProtoWrapError> {
    WrapConverter::DEFAULT.try_time(v)
}
