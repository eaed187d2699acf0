//! Rendering of the protobuf well-known types.
//!
//! prost-build does not generate structs for these: it maps them to
//! `prost-types` or, for the `*Value` wrappers, straight to the wrapped Rust
//! primitive. None of them implement `serde::Serialize`, so generated code
//! calls these helpers instead, producing the protobuf JSON form:
//!
//! | Type | Rendering |
//! |------|-----------|
//! | `Timestamp` | RFC 3339 string in UTC, `Z` suffix, 0/3/6/9 fractional digits |
//! | `Duration` | decimal seconds with an `s` suffix (`"1.500s"`) |
//! | `Empty` | `{}` |
//! | `Struct`, `Value`, `ListValue` | the JSON they describe |
//! | `FieldMask` | comma-separated paths in lowerCamelCase |
//! | `Any` | `{"@type": <type URL>}`; the packed payload is never rendered |
//!
//! Wrappers need no helper of their own: generated code renders the wrapped
//! primitive like any other scalar.

use chrono::{DateTime, SecondsFormat};
use heck::ToLowerCamelCase;
use prost_types::{value::Kind, Any, Duration, FieldMask, ListValue, Struct, Timestamp};
use serde_json::{Map, Value};

use crate::value::f64_value;

/// Renders a `Timestamp`, or `null` when it lies outside the range RFC 3339 can express.
pub fn timestamp_value(timestamp: &Timestamp) -> Value {
    let Ok(nanos) = u32::try_from(timestamp.nanos) else {
        return Value::Null;
    };
    DateTime::from_timestamp(timestamp.seconds, nanos).map_or(Value::Null, |datetime| {
        Value::String(datetime.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    })
}

pub fn duration_value(duration: &Duration) -> Value {
    Value::String(duration.to_string())
}

/// Renders `google.protobuf.Empty`, which prost maps to `()`.
pub fn empty_value(_: &()) -> Value {
    Value::Object(Map::new())
}

pub fn struct_value(value: &Struct) -> Value {
    Value::Object(
        value
            .fields
            .iter()
            .map(|(key, value)| (key.clone(), dynamic_value(value)))
            .collect(),
    )
}

/// Renders `google.protobuf.Value`; an unset kind renders `null`.
pub fn dynamic_value(value: &prost_types::Value) -> Value {
    match &value.kind {
        None | Some(Kind::NullValue(_)) => Value::Null,
        Some(Kind::NumberValue(number)) => f64_value(*number),
        Some(Kind::StringValue(text)) => Value::String(text.clone()),
        Some(Kind::BoolValue(flag)) => Value::Bool(*flag),
        Some(Kind::StructValue(nested)) => struct_value(nested),
        Some(Kind::ListValue(list)) => list_value(list),
    }
}

pub fn list_value(list: &ListValue) -> Value {
    Value::Array(list.values.iter().map(dynamic_value).collect())
}

pub fn field_mask_value(mask: &FieldMask) -> Value {
    let paths: Vec<String> = mask
        .paths
        .iter()
        .map(|path| {
            path.split('.')
                .map(ToLowerCamelCase::to_lower_camel_case)
                .collect::<Vec<_>>()
                .join(".")
        })
        .collect();
    Value::String(paths.join(","))
}

/// Renders an `Any` by its type URL alone. The payload is opaque here and may
/// hold sensitive fields, so it is never decoded.
pub fn any_value(any: &Any) -> Value {
    let mut object = Map::new();
    object.insert("@type".into(), Value::String(any.type_url.clone()));
    Value::Object(object)
}
