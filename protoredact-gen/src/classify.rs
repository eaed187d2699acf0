//! Field classification and mask resolution.
//!
//! Every field maps to exactly one [`TypeCategory`]; cardinality (singular,
//! repeated, map) is layered on top. A field with `redact = true` gets a fully
//! resolved [`Mask`]:
//!
//! | Category | Override key | Default |
//! |----------|--------------|---------|
//! | string | `string_mask` | `"*"` |
//! | bytes | `bytes_mask` | `""` |
//! | all integer widths | `int_mask` (narrowed to the field width) | `0` |
//! | float, double | `double_mask` (narrowed for `float`) | `0` |
//! | bool | `bool_mask` | `false` |
//! | enum | `enum_mask` | `0` |
//! | message | none | `null` |
//! | repeated | none | `[]` |
//! | map | none | `{}` |
//!
//! Overrides that do not apply to the field are ignored, or rejected with
//! [`Error::MaskOverride`] when `strict_masks` is enabled.

use std::fmt;

use crate::{
    descriptor::{redact_rules, Type},
    error::{Error, Result},
    schema::{Cardinality, FieldSpec, MessageId},
};

/// Mask used for redacted string fields without a `string_mask`.
pub const DEFAULT_STRING_MASK: &str = "*";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntWidth {
    I32,
    I64,
    U32,
    U64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    F32,
    F64,
}

/// Leaf value categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Bytes,
    Int(IntWidth),
    Float(FloatWidth),
    Bool,
    /// Enums are carried as their raw `i32` discriminant.
    Enum,
}

impl ScalarKind {
    /// Maps a wire type to its scalar category; `None` for message and group.
    pub fn from_type(ty: Type) -> Option<Self> {
        Some(match ty {
            Type::String => Self::String,
            Type::Bytes => Self::Bytes,
            Type::Int32 | Type::Sint32 | Type::Sfixed32 => Self::Int(IntWidth::I32),
            Type::Int64 | Type::Sint64 | Type::Sfixed64 => Self::Int(IntWidth::I64),
            Type::Uint32 | Type::Fixed32 => Self::Int(IntWidth::U32),
            Type::Uint64 | Type::Fixed64 => Self::Int(IntWidth::U64),
            Type::Float => Self::Float(FloatWidth::F32),
            Type::Double => Self::Float(FloatWidth::F64),
            Type::Bool => Self::Bool,
            Type::Enum => Self::Enum,
            Type::Message | Type::Group => return None,
        })
    }

    fn default_mask(self) -> Mask {
        match self {
            Self::String => Mask::Text(DEFAULT_STRING_MASK.to_string()),
            Self::Bytes => Mask::Text(String::new()),
            Self::Int(width) => width.narrow(0),
            Self::Float(width) => width.narrow(0.0),
            Self::Bool => Mask::Bool(false),
            Self::Enum => Mask::Enum(0),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Int(_) => "integer",
            Self::Float(_) => "floating-point",
            Self::Bool => "bool",
            Self::Enum => "enum",
        }
    }
}

impl IntWidth {
    /// Narrows the shared 64-bit override to this width (two's complement).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn narrow(self, value: i64) -> Mask {
        match self {
            Self::I32 => Mask::Signed(i64::from(value as i32)),
            Self::I64 => Mask::Signed(value),
            Self::U32 => Mask::Unsigned(u64::from(value as u32)),
            Self::U64 => Mask::Unsigned(value as u64),
        }
    }
}

impl FloatWidth {
    #[allow(clippy::cast_possible_truncation)]
    pub fn narrow(self, value: f64) -> Mask {
        match self {
            Self::F32 => Mask::Float32(value as f32),
            Self::F64 => Mask::Float64(value),
        }
    }
}

/// Element or map-value type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueType {
    Scalar(ScalarKind),
    Message(MessageId),
}

impl ValueType {
    pub fn target(&self) -> Option<&MessageId> {
        match self {
            Self::Message(id) => Some(id),
            Self::Scalar(_) => None,
        }
    }
}

/// Well-known types prost-build maps to `prost-types` or to a Rust primitive
/// instead of generating a struct. Fields of these types are rendered by
/// dedicated runtime helpers rather than through `Redact` or `serde`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WellKnown {
    Timestamp,
    Duration,
    Empty,
    Struct,
    Value,
    ListValue,
    FieldMask,
    Any,
    /// A `google.protobuf.*Value` wrapper, held as the wrapped primitive.
    Wrapper(ScalarKind),
}

impl WellKnown {
    pub fn from_id(id: &MessageId) -> Option<Self> {
        let name = id.as_str().strip_prefix("google.protobuf.")?;
        Some(match name {
            "Timestamp" => Self::Timestamp,
            "Duration" => Self::Duration,
            "Empty" => Self::Empty,
            "Struct" => Self::Struct,
            "Value" => Self::Value,
            "ListValue" => Self::ListValue,
            "FieldMask" => Self::FieldMask,
            "Any" => Self::Any,
            "DoubleValue" => Self::Wrapper(ScalarKind::Float(FloatWidth::F64)),
            "FloatValue" => Self::Wrapper(ScalarKind::Float(FloatWidth::F32)),
            "Int64Value" => Self::Wrapper(ScalarKind::Int(IntWidth::I64)),
            "UInt64Value" => Self::Wrapper(ScalarKind::Int(IntWidth::U64)),
            "Int32Value" => Self::Wrapper(ScalarKind::Int(IntWidth::I32)),
            "UInt32Value" => Self::Wrapper(ScalarKind::Int(IntWidth::U32)),
            "BoolValue" => Self::Wrapper(ScalarKind::Bool),
            "StringValue" => Self::Wrapper(ScalarKind::String),
            "BytesValue" => Self::Wrapper(ScalarKind::Bytes),
            _ => return None,
        })
    }
}

/// The single category of a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeCategory {
    Scalar(ScalarKind),
    Message(MessageId),
    Map { key: ScalarKind, value: ValueType },
}

impl TypeCategory {
    /// The message type this field points at, through a map value if needed.
    pub fn target(&self) -> Option<&MessageId> {
        match self {
            Self::Message(id) => Some(id),
            Self::Map { value, .. } => value.target(),
            Self::Scalar(_) => None,
        }
    }

    /// Type of a single element: the field itself, a repeated element, or a map value.
    pub fn element(&self) -> ValueType {
        match self {
            Self::Scalar(kind) => ValueType::Scalar(*kind),
            Self::Message(id) => ValueType::Message(id.clone()),
            Self::Map { value, .. } => value.clone(),
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => f.write_str(kind.name()),
            Self::Message(_) => f.write_str("message"),
            Self::Map { .. } => f.write_str("map"),
        }
    }
}

/// A resolved mask value, already narrowed to the field's width.
#[derive(Clone, Debug, PartialEq)]
pub enum Mask {
    /// String and bytes masks; bytes masks are emitted as plain strings.
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float32(f32),
    Float64(f64),
    Bool(bool),
    Enum(i32),
    /// Redacted singular message.
    Null,
    /// Redacted repeated field.
    EmptyList,
    /// Redacted map field.
    EmptyMap,
}

/// Resolves the mask of `field`, or `None` when the field is not redacted.
pub fn resolve_mask(field: &FieldSpec, strict: bool) -> Result<Option<Mask>> {
    let Some(rules) = field.rules.as_ref().filter(|rules| rules.redact) else {
        return Ok(None);
    };
    let declared = rules.mask.as_ref();

    let composite = match (field.cardinality, &field.category) {
        (Cardinality::Repeated, _) => Some((Mask::EmptyList, "repeated")),
        (Cardinality::Map, _) | (_, TypeCategory::Map { .. }) => Some((Mask::EmptyMap, "map")),
        (Cardinality::Singular, TypeCategory::Message(_)) => Some((Mask::Null, "message")),
        (Cardinality::Singular, TypeCategory::Scalar(_)) => None,
    };
    if let Some((mask, category)) = composite {
        if let Some(declared) = declared {
            ignore_override(field, declared, category, strict)?;
        }
        return Ok(Some(mask));
    }

    let TypeCategory::Scalar(kind) = field.category else {
        return Ok(Some(Mask::Null));
    };
    let mask = match (kind, declared) {
        (_, None) => kind.default_mask(),
        (ScalarKind::String, Some(redact_rules::Mask::StringMask(text)))
        | (ScalarKind::Bytes, Some(redact_rules::Mask::BytesMask(text))) => {
            Mask::Text(text.clone())
        }
        (ScalarKind::Int(width), Some(redact_rules::Mask::IntMask(value))) => width.narrow(*value),
        (ScalarKind::Float(width), Some(redact_rules::Mask::DoubleMask(value))) => {
            width.narrow(*value)
        }
        (ScalarKind::Bool, Some(redact_rules::Mask::BoolMask(value))) => Mask::Bool(*value),
        (ScalarKind::Enum, Some(redact_rules::Mask::EnumMask(value))) => Mask::Enum(*value),
        (_, Some(declared)) => {
            ignore_override(field, declared, kind.name(), strict)?;
            kind.default_mask()
        }
    };
    Ok(Some(mask))
}

fn ignore_override(
    field: &FieldSpec,
    declared: &redact_rules::Mask,
    category: &str,
    strict: bool,
) -> Result<()> {
    if strict {
        return Err(Error::MaskOverride {
            field: field.full_name.clone(),
            key: declared.key(),
            category: category.to_string(),
        });
    }
    tracing::debug!(
        field = %field.full_name,
        key = declared.key(),
        category,
        "ignoring mask override that does not apply to the field"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        descriptor::{redact_rules::Mask as Declared, RedactRules},
        schema::Presence,
    };

    fn field(category: TypeCategory, cardinality: Cardinality, mask: Option<Declared>) -> FieldSpec {
        FieldSpec {
            name: "f".to_string(),
            full_name: "test.Msg.f".to_string(),
            json_name: "f".to_string(),
            category,
            cardinality,
            presence: Presence::Implicit,
            oneof: None,
            rules: Some(RedactRules { redact: true, mask }),
        }
    }

    fn scalar(kind: ScalarKind, mask: Option<Declared>) -> FieldSpec {
        field(TypeCategory::Scalar(kind), Cardinality::Singular, mask)
    }

    #[test]
    fn every_integer_type_shares_one_category_per_width() {
        for ty in [Type::Int32, Type::Sint32, Type::Sfixed32] {
            assert_eq!(ScalarKind::from_type(ty), Some(ScalarKind::Int(IntWidth::I32)));
        }
        for ty in [Type::Uint64, Type::Fixed64] {
            assert_eq!(ScalarKind::from_type(ty), Some(ScalarKind::Int(IntWidth::U64)));
        }
        assert_eq!(ScalarKind::from_type(Type::Message), None);
        assert_eq!(ScalarKind::from_type(Type::Group), None);
    }

    #[test]
    fn well_known_types_are_recognized_by_full_name() {
        let known = |name: &str| WellKnown::from_id(&MessageId::new(name));
        assert_eq!(known(".google.protobuf.Timestamp"), Some(WellKnown::Timestamp));
        assert_eq!(known("google.protobuf.Duration"), Some(WellKnown::Duration));
        assert_eq!(
            known("google.protobuf.UInt32Value"),
            Some(WellKnown::Wrapper(ScalarKind::Int(IntWidth::U32)))
        );
        assert_eq!(
            known("google.protobuf.BytesValue"),
            Some(WellKnown::Wrapper(ScalarKind::Bytes))
        );
        assert_eq!(known("acme.Timestamp"), None);
        assert_eq!(known("google.protobuf.FileDescriptorProto"), None);
    }

    #[test]
    fn defaults_apply_without_override() {
        let cases = [
            (ScalarKind::String, Mask::Text("*".to_string())),
            (ScalarKind::Bytes, Mask::Text(String::new())),
            (ScalarKind::Int(IntWidth::I32), Mask::Signed(0)),
            (ScalarKind::Int(IntWidth::U64), Mask::Unsigned(0)),
            (ScalarKind::Float(FloatWidth::F64), Mask::Float64(0.0)),
            (ScalarKind::Bool, Mask::Bool(false)),
            (ScalarKind::Enum, Mask::Enum(0)),
        ];
        for (kind, expected) in cases {
            assert_eq!(resolve_mask(&scalar(kind, None), false).unwrap(), Some(expected));
        }
    }

    #[test]
    fn int_override_is_narrowed_to_field_width() {
        let narrowed = |width| {
            resolve_mask(&scalar(ScalarKind::Int(width), Some(Declared::IntMask(-1))), false)
                .unwrap()
        };
        assert_eq!(narrowed(IntWidth::I32), Some(Mask::Signed(-1)));
        assert_eq!(narrowed(IntWidth::U32), Some(Mask::Unsigned(u64::from(u32::MAX))));
        assert_eq!(narrowed(IntWidth::U64), Some(Mask::Unsigned(u64::MAX)));

        let wide = scalar(
            ScalarKind::Int(IntWidth::I32),
            Some(Declared::IntMask(i64::from(i32::MAX) + 1)),
        );
        assert_eq!(resolve_mask(&wide, false).unwrap(), Some(Mask::Signed(i64::from(i32::MIN))));
    }

    #[test]
    fn double_override_is_narrowed_for_float_fields() {
        let float = scalar(
            ScalarKind::Float(FloatWidth::F32),
            Some(Declared::DoubleMask(-1.5)),
        );
        assert_eq!(resolve_mask(&float, false).unwrap(), Some(Mask::Float32(-1.5)));
    }

    #[test]
    fn typed_overrides_are_used() {
        let string = scalar(ScalarKind::String, Some(Declared::StringMask("[HIDDEN]".into())));
        assert_eq!(
            resolve_mask(&string, false).unwrap(),
            Some(Mask::Text("[HIDDEN]".to_string()))
        );
        let bytes = scalar(ScalarKind::Bytes, Some(Declared::BytesMask("[BINARY]".into())));
        assert_eq!(
            resolve_mask(&bytes, false).unwrap(),
            Some(Mask::Text("[BINARY]".to_string()))
        );
        let boolean = scalar(ScalarKind::Bool, Some(Declared::BoolMask(true)));
        assert_eq!(resolve_mask(&boolean, false).unwrap(), Some(Mask::Bool(true)));
        let status = scalar(ScalarKind::Enum, Some(Declared::EnumMask(99)));
        assert_eq!(resolve_mask(&status, false).unwrap(), Some(Mask::Enum(99)));
    }

    #[test]
    fn composite_fields_ignore_overrides() {
        let message = field(
            TypeCategory::Message(MessageId::new("test.User")),
            Cardinality::Singular,
            Some(Declared::StringMask("x".into())),
        );
        assert_eq!(resolve_mask(&message, false).unwrap(), Some(Mask::Null));

        let repeated = field(
            TypeCategory::Scalar(ScalarKind::String),
            Cardinality::Repeated,
            Some(Declared::StringMask("x".into())),
        );
        assert_eq!(resolve_mask(&repeated, false).unwrap(), Some(Mask::EmptyList));

        let map = field(
            TypeCategory::Map {
                key: ScalarKind::String,
                value: ValueType::Scalar(ScalarKind::String),
            },
            Cardinality::Map,
            None,
        );
        assert_eq!(resolve_mask(&map, false).unwrap(), Some(Mask::EmptyMap));
    }

    #[test]
    fn mismatched_override_falls_back_to_default() {
        let string = scalar(ScalarKind::String, Some(Declared::IntMask(7)));
        assert_eq!(
            resolve_mask(&string, false).unwrap(),
            Some(Mask::Text("*".to_string()))
        );
    }

    #[test]
    fn strict_mode_rejects_inapplicable_overrides() {
        let message = field(
            TypeCategory::Message(MessageId::new("test.User")),
            Cardinality::Singular,
            Some(Declared::StringMask("x".into())),
        );
        let err = resolve_mask(&message, true).unwrap_err();
        assert!(err.to_string().contains("string_mask"));
        assert!(err.to_string().contains("message"));

        let string = scalar(ScalarKind::String, Some(Declared::EnumMask(1)));
        assert!(matches!(
            resolve_mask(&string, true),
            Err(Error::MaskOverride { key: "enum_mask", .. })
        ));
    }

    #[test]
    fn unredacted_fields_have_no_mask() {
        let mut plain = scalar(ScalarKind::String, None);
        plain.rules = None;
        assert_eq!(resolve_mask(&plain, true).unwrap(), None);

        let mut disabled = scalar(ScalarKind::String, Some(Declared::StringMask("x".into())));
        disabled.rules.as_mut().unwrap().redact = false;
        assert_eq!(resolve_mask(&disabled, true).unwrap(), None);
    }
}
