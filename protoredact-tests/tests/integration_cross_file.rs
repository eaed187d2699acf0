//! Redaction requirements that cross file and package boundaries.

use std::collections::HashMap;

use protoredact::Redact;
use protoredact_tests::acme::{
    app::v1::{Container, DataList, DataMap, Deep},
    shared::v1::SensitiveData,
};

fn data(label: &str) -> SensitiveData {
    SensitiveData {
        token: format!("token-{label}"),
        label: label.into(),
    }
}

fn container() -> Container {
    Container {
        name: "c".into(),
        data: Some(data("l")),
    }
}

#[test]
fn singular_reference_masks_imported_message() {
    assert_eq!(
        container().redact(),
        r#"{"name":"c","data":{"token":"*","label":"l"}}"#
    );
}

#[test]
fn repeated_reference_masks_each_element() {
    let list = DataList {
        items: vec![data("a"), data("b")],
    };
    assert_eq!(
        list.redact(),
        r#"{"items":[{"token":"*","label":"a"},{"token":"*","label":"b"}]}"#
    );
}

#[test]
fn map_reference_masks_each_value() {
    let map = DataMap {
        entries: HashMap::from([("b".into(), data("b")), ("a".into(), data("a"))]),
    };
    assert_eq!(
        map.redact(),
        r#"{"entries":{"a":{"token":"*","label":"a"},"b":{"token":"*","label":"b"}}}"#
    );
}

#[test]
fn transitive_reference_masks_through_intermediate_message() {
    let deep = Deep {
        container: Some(container()),
        note: "n".into(),
    };
    assert_eq!(
        deep.redact(),
        r#"{"container":{"name":"c","data":{"token":"*","label":"l"}},"note":"n"}"#
    );
}
