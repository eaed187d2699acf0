//! Generated redaction for flat and nested messages.

use protoredact::Redact;
use protoredact_tests::acme::user::v1::{Account, Address, Status, User};

fn john() -> User {
    User {
        name: "John Doe".into(),
        email: "john@x.com".into(),
        password: "secret123".into(),
        age: 30,
    }
}

#[test]
fn user_fields_are_masked_in_declaration_order() {
    assert_eq!(
        john().redact(),
        r#"{"name":"John Doe","email":"*","password":"[HIDDEN]","age":30}"#
    );
}

#[test]
fn default_user_still_masks() {
    assert_eq!(
        User::default().redact(),
        r#"{"name":"","email":"*","password":"[HIDDEN]","age":0}"#
    );
}

#[test]
fn account_redacts_nested_user_independently() {
    let account = Account {
        id: "acc-1".into(),
        secret_key: "sk_live_123".into(),
        user: Some(john()),
        addresses: vec![Address {
            street: "1 Main St".into(),
            city: "Springfield".into(),
        }],
        status: Status::Active as i32,
    };
    assert_eq!(
        account.redact(),
        concat!(
            r#"{"id":"acc-1","secretKey":"*","#,
            r#""user":{"name":"John Doe","email":"*","password":"[HIDDEN]","age":30},"#,
            r#""addresses":[{"street":"*","city":"Springfield"}],"status":1}"#
        )
    );
}

#[test]
fn unset_nested_message_renders_null() {
    let account = Account {
        id: "acc-2".into(),
        ..Account::default()
    };
    assert_eq!(
        account.redact(),
        r#"{"id":"acc-2","secretKey":"*","user":null,"addresses":[],"status":0}"#
    );
}

#[test]
fn absent_message_renders_empty_object() {
    let missing: Option<User> = None;
    assert_eq!(missing.redact(), "{}");
    assert_eq!(Some(john()).redact(), john().redact());
}

#[test]
fn repeated_calls_are_byte_identical() {
    let user = john();
    let first = user.redact();
    assert_eq!(user.redact(), first);
    assert_eq!(user.redacted_value(), user.redacted_value());
}

#[test]
fn secrets_never_appear_in_output() {
    let output = Account {
        secret_key: "sk_live_123".into(),
        user: Some(john()),
        ..Account::default()
    }
    .redact();
    for secret in ["sk_live_123", "john@x.com", "secret123"] {
        assert!(!output.contains(secret), "{secret} leaked into {output}");
    }
}
