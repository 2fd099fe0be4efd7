//! Scalar wrapper conversions
//!
//! Encoders take an optional native value and build the matching wrapper
//! message; decoders read the wrapper back into the caller's requested type.
//! `None` maps to `None` in both directions. Numeric values are cast with
//! `as` semantics, so out-of-range integers truncate and floats round.

use type_mapping::{
    BoolValue, BytesValue, DoubleValue, Float, FloatValue, Int32Value, Int64Value, Integer,
    StringValue, UInt32Value, UInt64Value,
};

/// Any integer into `Int32Value`
pub fn int32_value<T: Integer>(v: Option<T>) -> Option<Int32Value> {
    v.map(|v| Int32Value { value: v.cast() })
}

/// Any integer into `Int64Value`
pub fn int64_value<T: Integer>(v: Option<T>) -> Option<Int64Value> {
    v.map(|v| Int64Value { value: v.cast() })
}

/// Any integer into `UInt32Value`
pub fn uint32_value<T: Integer>(v: Option<T>) -> Option<UInt32Value> {
    v.map(|v| UInt32Value { value: v.cast() })
}

/// Any integer into `UInt64Value`
pub fn uint64_value<T: Integer>(v: Option<T>) -> Option<UInt64Value> {
    v.map(|v| UInt64Value { value: v.cast() })
}

/// `Int32Value` into any integer
pub fn from_int32_value<T: Integer>(v: Option<&Int32Value>) -> Option<T> {
    v.map(|w| w.value.cast())
}

/// `Int64Value` into any integer
pub fn from_int64_value<T: Integer>(v: Option<&Int64Value>) -> Option<T> {
    v.map(|w| w.value.cast())
}

/// `UInt32Value` into any integer
pub fn from_uint32_value<T: Integer>(v: Option<&UInt32Value>) -> Option<T> {
    v.map(|w| w.value.cast())
}

/// `UInt64Value` into any integer
pub fn from_uint64_value<T: Integer>(v: Option<&UInt64Value>) -> Option<T> {
    v.map(|w| w.value.cast())
}

/// Any float into `FloatValue`
pub fn float_value<T: Float>(v: Option<T>) -> Option<FloatValue> {
    v.map(|v| FloatValue { value: v.to_f32() })
}

/// Any float into `DoubleValue`
pub fn double_value<T: Float>(v: Option<T>) -> Option<DoubleValue> {
    v.map(|v| DoubleValue { value: v.to_f64() })
}

/// `FloatValue` into any float
pub fn from_float_value<T: Float>(v: Option<&FloatValue>) -> Option<T> {
    v.map(|w| T::from_f64(f64::from(w.value)))
}

/// `DoubleValue` into any float
pub fn from_double_value<T: Float>(v: Option<&DoubleValue>) -> Option<T> {
    v.map(|w| T::from_f64(w.value))
}

pub fn string_value<S: Into<String>>(v: Option<S>) -> Option<StringValue> {
    v.map(|v| StringValue { value: v.into() })
}

pub fn from_string_value(v: Option<&StringValue>) -> Option<String> {
    v.map(|w| w.value.clone())
}

pub fn bool_value(v: Option<bool>) -> Option<BoolValue> {
    v.map(|value| BoolValue { value })
}

pub fn from_bool_value(v: Option<&BoolValue>) -> Option<bool> {
    v.map(|w| w.value)
}

pub fn bytes_value<B: Into<Vec<u8>>>(v: Option<B>) -> Option<BytesValue> {
    v.map(|v| BytesValue { value: v.into() })
}

pub fn from_bytes_value(v: Option<&BytesValue>) -> Option<Vec<u8>> {
    v.map(|w| w.value.clone())
}
