//! Hand-written `Redact` impls shaped like generated code.

use std::collections::HashMap;

use protoredact::{Map, Redact, Value};
use serde::Serialize;

#[derive(Serialize)]
struct Note {
    text: String,
}

// `street` is always masked, so it is never read.
#[allow(dead_code)]
struct Address {
    street: String,
    city: String,
}

impl Redact for Address {
    fn redacted_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("street".into(), Value::from("*"));
        object.insert("city".into(), protoredact::string_value(&self.city));
        Value::Object(object)
    }
}

struct Profile {
    avatar: Vec<u8>,
    score: f32,
    labels: HashMap<String, i64>,
    addresses: Vec<Address>,
    home: Option<Box<Address>>,
    note: Option<Note>,
}

impl Redact for Profile {
    fn redacted_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("avatar".into(), protoredact::bytes_value(&self.avatar));
        object.insert("score".into(), protoredact::f32_value(self.score));
        object.insert(
            "labels".into(),
            protoredact::map_value(self.labels.iter().map(|(key, value)| (key, Value::from(*value)))),
        );
        object.insert(
            "addresses".into(),
            Value::Array(self.addresses.iter().map(|value| Redact::redacted_value(value)).collect()),
        );
        object.insert(
            "home".into(),
            match &self.home {
                Some(value) => Redact::redacted_value(value),
                None => Value::Null,
            },
        );
        object.insert(
            "note".into(),
            match &self.note {
                Some(value) => protoredact::plain_value(value),
                None => Value::Null,
            },
        );
        Value::Object(object)
    }
}

fn profile() -> Profile {
    Profile {
        avatar: vec![0xde, 0xad, 0xbe, 0xef],
        score: 0.1,
        labels: [("zeta".to_string(), 1), ("alpha".to_string(), 2)].into_iter().collect(),
        addresses: vec![Address {
            street: "1 Main St".into(),
            city: "Springfield".into(),
        }],
        home: Some(Box::new(Address {
            street: "2 Elm St".into(),
            city: "Shelbyville".into(),
        })),
        note: Some(Note { text: "hello".into() }),
    }
}

#[test]
fn renders_every_value_kind() {
    assert_eq!(
        profile().redact(),
        concat!(
            r#"{"avatar":"3q2+7w==","score":0.1,"labels":{"alpha":2,"zeta":1},"#,
            r#""addresses":[{"street":"*","city":"Springfield"}],"#,
            r#""home":{"street":"*","city":"Shelbyville"},"note":{"text":"hello"}}"#
        )
    );
}

#[test]
fn unset_messages_render_null() {
    let mut profile = profile();
    profile.home = None;
    profile.note = None;
    let value = profile.redacted_value();
    assert_eq!(value["home"], Value::Null);
    assert_eq!(value["note"], Value::Null);
}

#[test]
fn repeated_rendering_is_byte_identical() {
    let mut profile = profile();
    profile.labels.extend((0..32).map(|n| (format!("key{n}"), n)));
    let first = profile.redact();
    for _ in 0..8 {
        assert_eq!(profile.redact(), first);
    }
}

#[test]
fn absent_message_renders_empty_object() {
    let absent: Option<Profile> = None;
    assert_eq!(absent.redact(), "{}");
}
