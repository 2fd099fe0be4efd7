//! Schema type mapping utilities
//!
//! This module maps Rust field types onto the protobuf well-known
//! message that represents them when the field may be unset.

use serde::{Deserialize, Serialize};

/// Well-known nullable message kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WrapperKind {
    Int32,
    Int64,
    UInt32,
    UInt64,
    Float,
    Double,
    Bool,
    String,
    Bytes,
    Timestamp,
}

impl WrapperKind {
    /// Fully-qualified protobuf message name
    pub fn full_name(&self) -> &'static str {
        match self {
            WrapperKind::Int32 => "google.protobuf.Int32Value",
            WrapperKind::Int64 => "google.protobuf.Int64Value",
            WrapperKind::UInt32 => "google.protobuf.UInt32Value",
            WrapperKind::UInt64 => "google.protobuf.UInt64Value",
            WrapperKind::Float => "google.protobuf.FloatValue",
            WrapperKind::Double => "google.protobuf.DoubleValue",
            WrapperKind::Bool => "google.protobuf.BoolValue",
            WrapperKind::String => "google.protobuf.StringValue",
            WrapperKind::Bytes => "google.protobuf.BytesValue",
            WrapperKind::Timestamp => "google.protobuf.Timestamp",
        }
    }

    /// Proto file that declares the message
    pub fn proto_file(&self) -> &'static str {
        match self {
            WrapperKind::Timestamp => "google/protobuf/timestamp.proto",
            _ => "google/protobuf/wrappers.proto",
        }
    }
}

/// Map an optional Rust field type to the wrapper message used in a schema.
/// Returns `None` for non-optional or unsupported types.
pub fn rust_type_to_wrapper_kind(rust_type: &str) -> Option<WrapperKind> {
    let normalized: String = rust_type.split_whitespace().collect();
    if !is_optional_type(&normalized) {
        return None;
    }
    let inner = normalized
        .strip_prefix("Option<")
        .and_then(|rest| rest.strip_suffix('>'))?;

    let kind = match inner {
        "i8" | "i16" | "i32" => WrapperKind::Int32,
        "i64" | "isize" => WrapperKind::Int64,
        "u8" | "u16" | "u32" => WrapperKind::UInt32,
        "u64" | "usize" => WrapperKind::UInt64,
        "f32" => WrapperKind::Float,
        "f64" => WrapperKind::Double,
        "bool" => WrapperKind::Bool,
        "String" | "&str" => WrapperKind::String,
        "Vec<u8>" | "bytes::Bytes" | "Bytes" => WrapperKind::Bytes,
        "chrono::DateTime<chrono::Utc>" | "DateTime<Utc>" => WrapperKind::Timestamp,
        _ => return None,
    };
    Some(kind)
}

/// Whether a Rust type string is `Option<..>`, ignoring whitespace
pub fn is_optional_type(rust_type: &str) -> bool {
    let trimmed = rust_type.trim_start();
    trimmed
        .strip_prefix("Option")
        .is_some_and(|rest| rest.trim_start().starts_with('<'))
}
