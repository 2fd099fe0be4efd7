//! Core protowrap functionality
//!
//! This module contains `WrapConverter`, which applies a `ConversionConfig`
//! to the timestamp conversions. Scalar conversions need no configuration
//! and live in [`crate::scalar`].

use chrono::{DateTime, TimeZone, Utc};
use config::{ConversionConfig, TimestampConfig, ZeroInstant};
use type_mapping::{is_valid_timestamp, Timestamp, NANOS_PER_SECOND};

use crate::errors::ProtoWrapError;
use crate::{debug_log, trace_log};

/// Timestamp converter bound to a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapConverter {
    config: ConversionConfig,
}

impl Default for WrapConverter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl WrapConverter {
    /// Unix epoch is the zero instant and collapses to absence
    pub const DEFAULT: WrapConverter = WrapConverter::new(ConversionConfig::new(
        TimestampConfig::new(true, ZeroInstant::UnixEpoch),
    ));

    pub const fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Build a converter from `PROTOWRAP_CONFIG` / `./protowrap.toml`
    pub fn from_env() -> Result<Self, ProtoWrapError> {
        Ok(Self::new(ConversionConfig::load()?))
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Encode a point in time. Absent and zero instants both encode to `None`.
    pub fn timestamp<Tz: TimeZone>(&self, v: Option<&DateTime<Tz>>) -> Option<Timestamp> {
        let v = v?;

        let subsec = v.timestamp_subsec_nanos();
        // chrono reports a leap second as nanos >= 1s; fold it into the next second
        let seconds = v.timestamp() + i64::from(subsec / NANOS_PER_SECOND as u32);
        let nanos = (subsec % NANOS_PER_SECOND as u32) as i32;

        if self.config.timestamp.is_zero(seconds, nanos) {
            trace_log!(seconds, "zero instant encoded as absent timestamp");
            return None;
        }

        Some(Timestamp { seconds, nanos })
    }

    /// Decode a timestamp. Absent, out-of-range and zero timestamps all decode to `None`.
    pub fn time(&self, v: Option<&Timestamp>) -> Option<DateTime<Utc>> {
        self.try_time(v).ok().flatten()
    }

    /// Decode a timestamp, reporting out-of-range values as an error instead of
    /// collapsing them. Absent and zero timestamps still decode to `Ok(None)`.
    pub fn try_time(&self, v: Option<&Timestamp>) -> Result<Option<DateTime<Utc>>, ProtoWrapError> {
        let Some(ts) = v else {
            return Ok(None);
        };

        let invalid = || ProtoWrapError::InvalidTimestamp {
            seconds: ts.seconds,
            nanos: ts.nanos,
        };

        if !is_valid_timestamp(ts) {
            debug_log!(
                seconds = ts.seconds,
                nanos = ts.nanos,
                "timestamp outside valid range"
            );
            return Err(invalid());
        }

        if self.config.timestamp.is_zero(ts.seconds, ts.nanos) {
            trace_log!(seconds = ts.seconds, "zero timestamp decoded as absent");
            return Ok(None);
        }

        // Range was checked above, so nanos is non-negative and chrono accepts the value
        let time = DateTime::from_timestamp(ts.seconds, ts.nanos as u32).ok_or_else(invalid)?;
        Ok(Some(time))
    }
}
