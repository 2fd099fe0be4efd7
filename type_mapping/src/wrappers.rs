//! Wrapper message definitions
//!
//! Nullable containers for protobuf primitives. Every struct carries a single
//! `value` field at tag 1 and encodes exactly like its counterpart in
//! `google/protobuf/wrappers.proto`.

use prost::Name;

pub use prost_types::Timestamp;

const WELL_KNOWN_PACKAGE: &str = "google.protobuf";

/// Wrapper message for `int32`
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Int32Value {
    #[prost(int32, tag = "1")]
    pub value: i32,
}

/// Wrapper message for `int64`
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Int64Value {
    #[prost(int64, tag = "1")]
    pub value: i64,
}

/// Wrapper message for `uint32`
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct UInt32Value {
    #[prost(uint32, tag = "1")]
    pub value: u32,
}

/// Wrapper message for `uint64`
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct UInt64Value {
    #[prost(uint64, tag = "1")]
    pub value: u64,
}

/// Wrapper message for `float`
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct FloatValue {
    #[prost(float, tag = "1")]
    pub value: f32,
}

/// Wrapper message for `double`
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct DoubleValue {
    #[prost(double, tag = "1")]
    pub value: f64,
}

/// Wrapper message for `bool`
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct BoolValue {
    #[prost(bool, tag = "1")]
    pub value: bool,
}

/// Wrapper message for `string`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StringValue {
    #[prost(string, tag = "1")]
    pub value: String,
}

/// Wrapper message for `bytes`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BytesValue {
    #[prost(bytes = "vec", tag = "1")]
    pub value: Vec<u8>,
}

macro_rules! impl_well_known_name {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Name for $ty {
                const NAME: &'static str = stringify!($ty);
                const PACKAGE: &'static str = WELL_KNOWN_PACKAGE;
            }
        )*
    };
}

impl_well_known_name!(
    Int32Value,
    Int64Value,
    UInt32Value,
    UInt64Value,
    FloatValue,
    DoubleValue,
    BoolValue,
    StringValue,
    BytesValue,
);

impl From<i32> for Int32Value {
    fn from(value: i32) -> Self {
        Int32Value { value }
    }
}

impl From<i64> for Int64Value {
    fn from(value: i64) -> Self {
        Int64Value { value }
    }
}

impl From<u32> for UInt32Value {
    fn from(value: u32) -> Self {
        UInt32Value { value }
    }
}

impl From<u64> for UInt64Value {
    fn from(value: u64) -> Self {
        UInt64Value { value }
    }
}

impl From<f32> for FloatValue {
    fn from(value: f32) -> Self {
        FloatValue { value }
    }
}

impl From<f64> for DoubleValue {
    fn from(value: f64) -> Self {
        DoubleValue { value }
    }
}

impl From<bool> for BoolValue {
    fn from(value: bool) -> Self {
        BoolValue { value }
    }
}

impl From<String> for StringValue {
    fn from(value: String) -> Self {
        StringValue { value }
    }
}

impl From<&str> for StringValue {
    fn from(value: &str) -> Self {
        StringValue {
            value: value.to_string(),
        }
    }
}

impl From<Vec<u8>> for BytesValue {
    fn from(value: Vec<u8>) -> Self {
        BytesValue { value }
    }
}
