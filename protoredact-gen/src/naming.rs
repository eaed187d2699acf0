//! Rust and JSON naming of protobuf declarations.
//!
//! Generated impls sit next to prost's output, so identifiers must be derived
//! exactly the way prost derives them: `heck` casing (snake_case for fields and
//! modules, UpperCamelCase for types and oneof variants) followed by keyword
//! escaping.

use heck::{ToSnakeCase, ToUpperCamelCase};
use proc_macro2::Ident;
use quote::format_ident;

const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let",
    "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return",
    "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
    "virtual", "where", "while", "yield",
];

// Keywords that cannot be raw identifiers.
const SUFFIXED_KEYWORDS: &[&str] = &["self", "super", "extern", "crate"];

/// Identifier of a struct field or module, escaped the way prost escapes it.
pub(crate) fn snake_ident(name: &str) -> Ident {
    let snake = name.to_snake_case();
    if SUFFIXED_KEYWORDS.contains(&snake.as_str()) {
        format_ident!("{}_", snake)
    } else if RAW_KEYWORDS.contains(&snake.as_str()) {
        format_ident!("r#{}", snake)
    } else {
        format_ident!("{}", snake)
    }
}

/// Identifier of a struct, enum or oneof variant.
pub(crate) fn camel_ident(name: &str) -> Ident {
    let camel = name.to_upper_camel_case();
    if camel == "Self" {
        format_ident!("Self_")
    } else {
        format_ident!("{}", camel)
    }
}

/// JSON name protoc assigns to a field: underscores dropped, the following
/// character upper-cased.
pub(crate) fn json_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut capitalize_next = false;
    for ch in name.chars() {
        if ch == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            out.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
