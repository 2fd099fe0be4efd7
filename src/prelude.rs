//! Convenience re-exports for common protowrap usage
//!
//! # Example
//!
//! ```rust
//! use protowrap::prelude::*;
//!
//! assert_eq!(bool_value(Some(true)), Some(BoolValue { value: true }));
//! ```

pub use crate::core::WrapConverter;
pub use crate::errors::ProtoWrapError;
pub use crate::scalar::*;
pub use crate::sequence::ints;
pub use crate::timestamp::{time, timestamp, try_time};

// Re-export centralized config
pub use config::{ConversionConfig, TimestampConfig, ZeroInstant};

// Schema container types and cast traits
pub use type_mapping::{
    BoolValue, BytesValue, DoubleValue, Float, FloatValue, Int32Value, Int64Value, Integer,
    StringValue, Timestamp, UInt32Value, UInt64Value, WrapperKind,
};

pub use prost::{Message, Name};
