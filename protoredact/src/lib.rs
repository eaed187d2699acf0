//! Runtime support for protobuf redaction.
//!
//! `protoredact-gen` generates a [`Redact`] implementation for every protobuf
//! message that carries redacted fields, directly or through a nested message.
//! Calling [`Redact::redact`] renders the message as a single-line JSON object
//! with every sensitive field replaced by its mask:
//!
//! ```
//! use protoredact::{Map, Redact, Value};
//!
//! struct User {
//!     name: String,
//!     email: String,
//! }
//!
//! // What `protoc-gen-rust-redact` emits for
//! // `string email = 2 [(protoredact.v1.rules) = { redact: true }];`
//! impl Redact for User {
//!     fn redacted_value(&self) -> Value {
//!         let mut object = Map::new();
//!         object.insert("name".into(), protoredact::string_value(&self.name));
//!         object.insert("email".into(), Value::from("*"));
//!         Value::Object(object)
//!     }
//! }
//!
//! let user = User { name: "John Doe".into(), email: "john@x.com".into() };
//! assert_eq!(user.redact(), r#"{"name":"John Doe","email":"*"}"#);
//! assert_eq!(None::<User>.redact(), "{}");
//! ```
//!
//! What this crate does:
//! - defines the [`Redact`] trait generated code implements
//! - provides the value helpers generated code calls (`string_value`,
//!   `bytes_value`, `f64_value`, `map_value`, ...)
//! - renders the well-known types prost maps to `prost-types` (`Timestamp`,
//!   `Duration`, `Struct`, ...) in their protobuf JSON form
//! - provides a `slog` integration behind the `slog` feature, and a capturing
//!   `slog::Serializer` for tests behind `testing`
//!
//! What it does not do:
//! - decide which fields are sensitive (that is fixed at generation time)
//! - perform I/O or logging

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

mod redact;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "testing")]
pub mod testing;
mod value;
mod well_known;

pub use redact::{Redact, EMPTY_OBJECT};
pub use value::{bytes_value, f32_value, f64_value, map_value, plain_value, string_value};
pub use well_known::{
    any_value, duration_value, dynamic_value, empty_value, field_mask_value, list_value,
    struct_value, timestamp_value,
};

// Generated code names these through the runtime crate path.
#[doc(hidden)]
pub use serde_json::{Map, Value};

/// Includes the redaction code generated for a `.proto` file by a build script.
///
/// The argument is the proto path without its extension; place the call in the
/// module that holds prost's output for the same package.
///
/// ```ignore
/// pub mod user {
///     include!(concat!(env!("OUT_DIR"), "/acme.user.rs"));
///     protoredact::include_redact!("acme/user");
/// }
/// ```
#[macro_export]
macro_rules! include_redact {
    ($path:literal) => {
        include!(concat!(env!("OUT_DIR"), "/", $path, ".redact.rs"));
    };
}
