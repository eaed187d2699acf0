//! Adapters for emitting redacted messages through `slog`.
//!
//! [`RedactedJson`] is a `slog::Value` that carries the output of
//! [`Redact::redacted_value`] and emits it as structured JSON via `slog`'s
//! nested-value support. Drains that do not understand nested values see the
//! compact JSON text through [`fmt::Display`].
//!
//! `protoredact-gen` can emit a `slog::Value` impl for every generated message
//! (the `slog_crate` option) that goes through this module, so a message can be
//! logged directly:
//!
//! ```ignore
//! info!(logger, "login"; "user" => &user);
//! ```
//!
//! The unredacted message is never serialized.

use std::fmt;

use serde_json::Value;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{redact::EMPTY_OBJECT, Redact};

/// A `slog::Value` holding an already redacted message.
#[derive(Clone, Debug, PartialEq)]
pub struct RedactedJson {
    value: Value,
}

impl RedactedJson {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }
}

impl SlogValue for RedactedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl fmt::Display for RedactedJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.value) {
            Ok(text) => f.write_str(&text),
            Err(_) => f.write_str(EMPTY_OBJECT),
        }
    }
}

/// Converts a message into a `slog::Value` that logs its redacted form.
///
/// ## Example
/// ```ignore
/// use protoredact::slog::IntoRedactedJson;
///
/// info!(logger, "event"; "account" => account.redacted_json());
/// ```
pub trait IntoRedactedJson: Redact {
    fn redacted_json(&self) -> RedactedJson {
        RedactedJson::new(self.redacted_value())
    }
}

impl<T: Redact + ?Sized> IntoRedactedJson for T {}
