//! Schema container types for protowrap
//! This crate provides the protobuf wrapper messages, numeric cast traits and
//! timestamp validity rules used across the protowrap workspace

pub mod numeric;
pub mod schema;
pub mod validate;
pub mod wrappers;

// Re-export commonly used items
pub use numeric::{Float, Integer};
pub use schema::{is_optional_type, rust_type_to_wrapper_kind, WrapperKind};
pub use validate::{
    is_valid_timestamp, MAX_VALID_SECONDS, MIN_VALID_SECONDS, NANOS_PER_SECOND,
};
pub use wrappers::{
    BoolValue, BytesValue, DoubleValue, FloatValue, Int32Value, Int64Value, StringValue,
    Timestamp, UInt32Value, UInt64Value,
};
