//! The redaction capability.

use serde_json::{Map, Value};

/// Rendering of an absent message.
pub const EMPTY_OBJECT: &str = "{}";

/// Produces a redacted view of a message.
///
/// Implementations are generated; fields are visited in declaration order and
/// every field annotated with `redact: true` is replaced by its mask.
pub trait Redact {
    /// Builds the redacted value tree.
    fn redacted_value(&self) -> Value;

    /// Renders the redacted value as a single-line JSON document.
    ///
    /// Rendering never fails: if serialization errors, the result is `{}`.
    fn redact(&self) -> String {
        serde_json::to_string(&self.redacted_value()).unwrap_or_else(|_| EMPTY_OBJECT.to_string())
    }
}

/// An absent message renders as an empty object.
impl<T: Redact> Redact for Option<T> {
    fn redacted_value(&self) -> Value {
        match self {
            Some(inner) => inner.redacted_value(),
            None => Value::Object(Map::new()),
        }
    }
}

// prost boxes recursive message fields.
impl<T: Redact + ?Sized> Redact for Box<T> {
    fn redacted_value(&self) -> Value {
        (**self).redacted_value()
    }
}

impl<T: Redact + ?Sized> Redact for &T {
    fn redacted_value(&self) -> Value {
        (**self).redacted_value()
    }
}
