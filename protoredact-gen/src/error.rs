//! Generator errors.
//!
//! Every variant is fatal to the run: the generator emits either the complete
//! output for a compilation unit or nothing.

use thiserror::Error;

/// Errors produced while loading a compilation unit or generating code.
#[derive(Error, Debug)]
pub enum Error {
    /// A field references a type that no file of the compilation unit declares.
    #[error("field `{field}` references `{type_name}`, which is not part of the compilation unit")]
    UnresolvedType { field: String, type_name: String },

    /// Two declarations share the same fully-qualified name.
    #[error("type `{0}` is declared more than once in the compilation unit")]
    DuplicateType(String),

    /// The field's type number is not a `FieldDescriptorProto.Type`.
    #[error("field `{field}` has unsupported type number {type_number}")]
    UnsupportedFieldType { field: String, type_number: i32 },

    /// A map-entry message lacks its `key` or `value` field.
    #[error("map entry `{0}` must declare a key (1) and a value (2) field")]
    MalformedMapEntry(String),

    /// A field's `oneof_index` points past the message's oneof declarations.
    #[error("field `{field}` belongs to oneof #{index}, which its message does not declare")]
    UnknownOneof { field: String, index: usize },

    /// A descriptor is missing a field the generator cannot do without.
    #[error("descriptor is missing `{0}`")]
    MissingDescriptorField(&'static str),

    /// A mask override was declared where it cannot apply (`strict_masks` only).
    #[error("field `{field}` declares `{key}`, which does not apply to {category} fields")]
    MaskOverride {
        field: String,
        key: &'static str,
        category: String,
    },

    /// A generator parameter could not be parsed.
    #[error("invalid generator parameter `{key}`: {reason}")]
    InvalidParameter { key: String, reason: String },

    #[error("failed to decode descriptors: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
