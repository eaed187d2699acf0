//! Conversions from field values to JSON values.
//!
//! Generated code calls these for unredacted fields so that every message
//! renders the same way:
//!
//! | Field type | Rendering |
//! |------------|-----------|
//! | string | JSON string |
//! | bytes | standard base64 with padding |
//! | integers, enums | JSON number |
//! | float, double | shortest decimal; integral values without a fraction; NaN and infinities as `null` |
//! | map | object keyed by the textual key, sorted |
//! | message without redacted fields | its `serde::Serialize` form |

use std::{collections::BTreeMap, fmt::Display};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use serde_json::{Map, Number, Value};

// Largest magnitude below which every integral f64 converts to i64 exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

pub fn string_value(value: &str) -> Value {
    Value::String(value.to_owned())
}

pub fn bytes_value<B: AsRef<[u8]> + ?Sized>(value: &B) -> Value {
    Value::String(STANDARD.encode(value.as_ref()))
}

/// Renders a `double`. `30.0` renders as `30`, `-999.99` as `-999.99`.
#[allow(clippy::cast_possible_truncation)]
pub fn f64_value(value: f64) -> Value {
    if !value.is_finite() {
        return Value::Null;
    }
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        return Value::from(value as i64);
    }
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

/// Renders a `float` through its shortest decimal form, so `0.1f32` renders as
/// `0.1` rather than its widened `f64` value.
pub fn f32_value(value: f32) -> Value {
    if !value.is_finite() {
        return Value::Null;
    }
    value
        .to_string()
        .parse::<f64>()
        .map_or(Value::Null, f64_value)
}

/// Renders a message that needs no redaction.
///
/// Falls back to `null` if the value cannot be represented as JSON.
pub fn plain_value<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Builds an object from map entries, keyed by each key's textual form and
/// sorted by that text.
pub fn map_value<K, I>(entries: I) -> Value
where
    K: Display,
    I: IntoIterator<Item = (K, Value)>,
{
    let sorted: BTreeMap<String, Value> = entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();
    Value::Object(sorted.into_iter().collect::<Map<String, Value>>())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn bytes_render_as_padded_base64() {
        assert_eq!(bytes_value(b"hi".as_slice()), Value::from("aGk="));
        assert_eq!(bytes_value(&Vec::<u8>::new()), Value::from(""));
    }

    #[test]
    fn integral_doubles_render_without_fraction() {
        assert_eq!(f64_value(30.0).to_string(), "30");
        assert_eq!(f64_value(-0.0).to_string(), "0");
        assert_eq!(f64_value(-999.99).to_string(), "-999.99");
        assert_eq!(f64_value(1e300).to_string(), "1e+300");
    }

    #[test]
    fn floats_use_shortest_representation() {
        assert_eq!(f32_value(0.1).to_string(), "0.1");
        assert_eq!(f32_value(-1.5).to_string(), "-1.5");
        assert_eq!(f32_value(2.0).to_string(), "2");
    }

    #[test]
    fn non_finite_floats_render_null() {
        assert_eq!(f64_value(f64::NAN), Value::Null);
        assert_eq!(f64_value(f64::INFINITY), Value::Null);
        assert_eq!(f32_value(f32::NEG_INFINITY), Value::Null);
    }

    #[test]
    fn map_keys_are_sorted_as_text() {
        let entries: HashMap<i64, i64> = [(10, 1), (2, 2), (-1, 3)].into_iter().collect();
        let value = map_value(entries.iter().map(|(key, value)| (key, Value::from(*value))));
        assert_eq!(value.to_string(), r#"{"-1":3,"10":1,"2":2}"#);

        let flags = map_value([(true, Value::Null), (false, Value::Null)]);
        assert_eq!(flags.to_string(), r#"{"false":null,"true":null}"#);
    }

    #[test]
    fn plain_values_use_serde() {
        #[derive(Serialize)]
        struct Plain {
            name: &'static str,
            count: u32,
        }
        assert_eq!(
            plain_value(&Plain { name: "n", count: 2 }).to_string(),
            r#"{"name":"n","count":2}"#
        );
    }
}
