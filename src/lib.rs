//! # protowrap
//!
//! Conversions between optional Rust values and the protobuf well-known
//! nullable messages (`google.protobuf.Int32Value`, ..., `google.protobuf.Timestamp`).
//!
//! `None` on the Rust side and an unset message field are the same thing,
//! and every conversion maps one onto the other. The zero instant is treated
//! as unset for timestamps.
//!
//! ## Quick Start
//!
//! ```rust
//! use protowrap::prelude::*;
//!
//! let count = int32_value(Some(42u16));
//! assert_eq!(count, Some(Int32Value { value: 42 }));
//! assert_eq!(from_int32_value::<u64>(count.as_ref()), Some(42));
//!
//! let name = string_value(None::<String>);
//! assert_eq!(from_string_value(name.as_ref()), None);
//!
//! let created = protowrap::chrono::DateTime::from_timestamp(1_700_000_000, 0);
//! let ts = timestamp(created.as_ref());
//! assert_eq!(time(ts.as_ref()), created);
//!
//! assert_eq!(ints::<i64, i32>(Some(&[1, 2][..])), Some(vec![1, 2]));
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;
pub mod scalar;
pub mod sequence;
pub mod timestamp;

// Re-export the main public types for convenience
pub use crate::core::WrapConverter;
pub use errors::ProtoWrapError;
pub use scalar::{
    bool_value, bytes_value, double_value, float_value, from_bool_value, from_bytes_value,
    from_double_value, from_float_value, from_int32_value, from_int64_value, from_string_value,
    from_uint32_value, from_uint64_value, int32_value, int64_value, string_value, uint32_value,
    uint64_value,
};
pub use sequence::ints;
pub use timestamp::{time, timestamp, try_time};

// Re-export centralized config
pub use config::{ConfigError, ConversionConfig, TimestampConfig, ZeroInstant};

// Re-export the schema container types
pub use type_mapping::{
    BoolValue, BytesValue, DoubleValue, Float, FloatValue, Int32Value, Int64Value, Integer,
    StringValue, Timestamp, UInt32Value, UInt64Value,
};

// Re-export internal crates and external dependencies used in the public API
pub use config;
pub use type_mapping;
pub use chrono;
pub use prost;
