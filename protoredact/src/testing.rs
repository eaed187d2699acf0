//! Test support for asserting what a `slog::Value` emits.
//!
//! Enabled by the `testing` feature. [`capture`] serializes a value the way a
//! drain would and hands back what reached the serializer, so tests can check
//! that a logged message arrives redacted.

use std::{collections::HashMap, fmt::Arguments};

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum CapturedValue {
    Str(String),
    // Nested serde values are captured as their JSON form.
    Serde(Value),
}

/// A `slog::Serializer` that records every emitted key.
#[derive(Debug, Default)]
pub struct CapturingSerializer {
    captured: HashMap<String, CapturedValue>,
}

impl CapturingSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&CapturedValue> {
        self.captured.get(key)
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .insert(key.into(), CapturedValue::Str(val.to_string()));
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(val.as_serde()).unwrap_or(Value::Null);
        self.captured.insert(key.into(), CapturedValue::Serde(json));
        Ok(())
    }
}

/// Serializes `value` under `key` and returns what the serializer captured.
///
/// # Panics
///
/// Panics if the value fails to serialize.
pub fn capture<V: slog::Value + ?Sized>(value: &V, key: &'static str) -> Option<CapturedValue> {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    let mut serializer = CapturingSerializer::new();
    value
        .serialize(&record, key, &mut serializer)
        .expect("value should serialize");
    serializer.get(key).cloned()
}
