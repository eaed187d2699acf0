//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - `redacted_json()` carries the redacted value, never the original
//! - The `slog::Value` implementation emits nested JSON through `emit_serde`
//! - `Display` renders the compact document

#![cfg(feature = "testing")]

use protoredact::{
    slog::IntoRedactedJson,
    testing::{capture, CapturedValue},
    Map, Redact, Value,
};
use serde_json::json;

struct Credentials {
    username: String,
    password: String,
    retries: u32,
}

impl Redact for Credentials {
    fn redacted_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("username".into(), protoredact::string_value(&self.username));
        object.insert("password".into(), Value::from("[HIDDEN]"));
        object.insert("retries".into(), Value::from(self.retries));
        Value::Object(object)
    }
}

fn credentials() -> Credentials {
    Credentials {
        username: "alice".into(),
        password: "hunter2".into(),
        retries: 3,
    }
}

#[test]
fn redacted_json_is_emitted_as_nested_value() {
    let redacted = credentials().redacted_json();

    if let Some(CapturedValue::Serde(json)) = capture(&redacted, "credentials") {
        assert_eq!(
            json,
            json!({"username": "alice", "password": "[HIDDEN]", "retries": 3})
        );
    } else {
        panic!("Expected Serde value for 'credentials' key");
    }
}

#[test]
fn original_secret_never_reaches_the_serializer() {
    let source = credentials();
    let redacted = source.redacted_json();

    let captured = format!("{:?}", capture(&redacted, "credentials"));
    assert!(!captured.contains(&source.password));
}

#[test]
fn display_renders_compact_document() {
    let redacted = credentials().redacted_json();
    assert_eq!(
        redacted.to_string(),
        r#"{"username":"alice","password":"[HIDDEN]","retries":3}"#
    );
    assert_eq!(redacted.as_value()["password"], "[HIDDEN]");
}

#[test]
fn absent_message_logs_empty_object() {
    let redacted = None::<Credentials>.redacted_json();

    assert_eq!(
        capture(&redacted, "credentials"),
        Some(CapturedValue::Serde(json!({})))
    );
}
