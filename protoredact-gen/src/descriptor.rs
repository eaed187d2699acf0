//! Wire-level descriptor messages.
//!
//! These mirror the subset of `google/protobuf/descriptor.proto` and
//! `google/protobuf/compiler/plugin.proto` the generator reads, with one
//! difference from `prost-types`: `FieldOptions` declares the redaction
//! extension (field 50000) as a regular field, so prost decodes the masking
//! annotation instead of discarding it as an unknown field.
//!
//! Field numbers must stay in sync with the upstream `.proto` files.

/// `CodeGeneratorResponse.Feature.FEATURE_PROTO3_OPTIONAL`.
pub const FEATURE_PROTO3_OPTIONAL: u64 = 1;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CodeGeneratorRequest {
    #[prost(string, repeated, tag = "1")]
    pub file_to_generate: Vec<String>,
    #[prost(string, optional, tag = "2")]
    pub parameter: Option<String>,
    #[prost(message, repeated, tag = "15")]
    pub proto_file: Vec<FileDescriptorProto>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CodeGeneratorResponse {
    #[prost(string, optional, tag = "1")]
    pub error: Option<String>,
    #[prost(uint64, optional, tag = "2")]
    pub supported_features: Option<u64>,
    #[prost(message, repeated, tag = "15")]
    pub file: Vec<GeneratedFile>,
}

/// `CodeGeneratorResponse.File`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GeneratedFile {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub insertion_point: Option<String>,
    #[prost(string, optional, tag = "15")]
    pub content: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileDescriptorSet {
    #[prost(message, repeated, tag = "1")]
    pub file: Vec<FileDescriptorProto>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub package: Option<String>,
    #[prost(string, repeated, tag = "3")]
    pub dependency: Vec<String>,
    #[prost(message, repeated, tag = "4")]
    pub message_type: Vec<DescriptorProto>,
    #[prost(message, repeated, tag = "5")]
    pub enum_type: Vec<EnumDescriptorProto>,
    #[prost(string, optional, tag = "12")]
    pub syntax: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    pub field: Vec<FieldDescriptorProto>,
    #[prost(message, repeated, tag = "3")]
    pub nested_type: Vec<DescriptorProto>,
    #[prost(message, repeated, tag = "4")]
    pub enum_type: Vec<EnumDescriptorProto>,
    #[prost(message, optional, tag = "7")]
    pub options: Option<MessageOptions>,
    #[prost(message, repeated, tag = "8")]
    pub oneof_decl: Vec<OneofDescriptorProto>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MessageOptions {
    #[prost(bool, optional, tag = "7")]
    pub map_entry: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(int32, optional, tag = "3")]
    pub number: Option<i32>,
    #[prost(int32, optional, tag = "4")]
    pub label: Option<i32>,
    #[prost(int32, optional, tag = "5")]
    pub r#type: Option<i32>,
    #[prost(string, optional, tag = "6")]
    pub type_name: Option<String>,
    #[prost(message, optional, tag = "8")]
    pub options: Option<FieldOptions>,
    #[prost(int32, optional, tag = "9")]
    pub oneof_index: Option<i32>,
    #[prost(string, optional, tag = "10")]
    pub json_name: Option<String>,
    #[prost(bool, optional, tag = "17")]
    pub proto3_optional: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldOptions {
    #[prost(message, optional, tag = "50000")]
    pub redact: Option<RedactRules>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OneofDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnumDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
}

/// `protoredact.v1.RedactRules`, the masking annotation on a field.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RedactRules {
    #[prost(bool, tag = "1")]
    pub redact: bool,
    #[prost(oneof = "redact_rules::Mask", tags = "2, 3, 4, 5, 6, 7")]
    pub mask: Option<redact_rules::Mask>,
}

pub mod redact_rules {
    /// Type-specific mask override. At most one may be declared.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Mask {
        #[prost(string, tag = "2")]
        StringMask(String),
        #[prost(int64, tag = "3")]
        IntMask(i64),
        #[prost(double, tag = "4")]
        DoubleMask(f64),
        #[prost(bool, tag = "5")]
        BoolMask(bool),
        #[prost(string, tag = "6")]
        BytesMask(String),
        #[prost(int32, tag = "7")]
        EnumMask(i32),
    }

    impl Mask {
        /// Annotation key of the override, as written in `.proto` sources.
        pub fn key(&self) -> &'static str {
            match self {
                Self::StringMask(_) => "string_mask",
                Self::IntMask(_) => "int_mask",
                Self::DoubleMask(_) => "double_mask",
                Self::BoolMask(_) => "bool_mask",
                Self::BytesMask(_) => "bytes_mask",
                Self::EnumMask(_) => "enum_mask",
            }
        }
    }
}

/// `FieldDescriptorProto.Type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Double = 1,
    Float = 2,
    Int64 = 3,
    Uint64 = 4,
    Int32 = 5,
    Fixed64 = 6,
    Fixed32 = 7,
    Bool = 8,
    String = 9,
    Group = 10,
    Message = 11,
    Bytes = 12,
    Uint32 = 13,
    Enum = 14,
    Sfixed32 = 15,
    Sfixed64 = 16,
    Sint32 = 17,
    Sint64 = 18,
}

impl Type {
    pub fn from_i32(value: i32) -> Option<Self> {
        Some(match value {
            1 => Self::Double,
            2 => Self::Float,
            3 => Self::Int64,
            4 => Self::Uint64,
            5 => Self::Int32,
            6 => Self::Fixed64,
            7 => Self::Fixed32,
            8 => Self::Bool,
            9 => Self::String,
            10 => Self::Group,
            11 => Self::Message,
            12 => Self::Bytes,
            13 => Self::Uint32,
            14 => Self::Enum,
            15 => Self::Sfixed32,
            16 => Self::Sfixed64,
            17 => Self::Sint32,
            18 => Self::Sint64,
            _ => return None,
        })
    }
}

/// `FieldDescriptorProto.Label`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Optional = 1,
    Required = 2,
    Repeated = 3,
}

impl Label {
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Optional),
            2 => Some(Self::Required),
            3 => Some(Self::Repeated),
            _ => None,
        }
    }
}

// Constructors used by build scripts and tests that assemble descriptors by hand.

impl FileDescriptorProto {
    #[must_use]
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        let package = package.into();
        Self {
            name: Some(name.into()),
            package: (!package.is_empty()).then_some(package),
            syntax: Some("proto3".to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_syntax(mut self, syntax: impl Into<String>) -> Self {
        self.syntax = Some(syntax.into());
        self
    }

    #[must_use]
    pub fn with_dependency(mut self, dependency: impl Into<String>) -> Self {
        self.dependency.push(dependency.into());
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: DescriptorProto) -> Self {
        self.message_type.push(message);
        self
    }

    #[must_use]
    pub fn with_enum(mut self, name: impl Into<String>) -> Self {
        self.enum_type.push(EnumDescriptorProto {
            name: Some(name.into()),
        });
        self
    }
}

impl DescriptorProto {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Builds the synthetic entry message protoc declares for a `map<K, V>` field.
    #[must_use]
    pub fn map_entry(
        name: impl Into<String>,
        key: FieldDescriptorProto,
        value: FieldDescriptorProto,
    ) -> Self {
        let mut entry = Self::new(name)
            .with_field(key.renumbered("key", 1))
            .with_field(value.renumbered("value", 2));
        entry.options = Some(MessageOptions {
            map_entry: Some(true),
        });
        entry
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptorProto) -> Self {
        self.field.push(field);
        self
    }

    #[must_use]
    pub fn with_nested(mut self, nested: DescriptorProto) -> Self {
        self.nested_type.push(nested);
        self
    }

    #[must_use]
    pub fn with_enum(mut self, name: impl Into<String>) -> Self {
        self.enum_type.push(EnumDescriptorProto {
            name: Some(name.into()),
        });
        self
    }

    #[must_use]
    pub fn with_oneof(mut self, name: impl Into<String>) -> Self {
        self.oneof_decl.push(OneofDescriptorProto {
            name: Some(name.into()),
        });
        self
    }

    pub fn is_map_entry(&self) -> bool {
        self.options
            .as_ref()
            .and_then(|options| options.map_entry)
            .unwrap_or(false)
    }
}

impl FieldDescriptorProto {
    /// A singular scalar field. `ty` must not be `Message`, `Group` or `Enum`.
    #[must_use]
    pub fn scalar(name: impl Into<String>, number: i32, ty: Type) -> Self {
        Self {
            name: Some(name.into()),
            number: Some(number),
            label: Some(Label::Optional as i32),
            r#type: Some(ty as i32),
            ..Self::default()
        }
    }

    /// A singular message field; `type_name` is fully qualified (`.pkg.Msg`).
    #[must_use]
    pub fn message(name: impl Into<String>, number: i32, type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            ..Self::scalar(name, number, Type::Message)
        }
    }

    /// A singular enum field; `type_name` is fully qualified (`.pkg.Enum`).
    #[must_use]
    pub fn enumeration(
        name: impl Into<String>,
        number: i32,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            type_name: Some(type_name.into()),
            ..Self::scalar(name, number, Type::Enum)
        }
    }

    /// A `map<K, V>` field pointing at its synthetic entry message.
    #[must_use]
    pub fn map(name: impl Into<String>, number: i32, entry_type_name: impl Into<String>) -> Self {
        Self::message(name, number, entry_type_name).repeated()
    }

    #[must_use]
    pub fn repeated(mut self) -> Self {
        self.label = Some(Label::Repeated as i32);
        self
    }

    /// Marks a proto3 `optional` field (explicit presence).
    #[must_use]
    pub fn with_proto3_optional(mut self) -> Self {
        self.proto3_optional = Some(true);
        self
    }

    #[must_use]
    pub fn in_oneof(mut self, index: i32) -> Self {
        self.oneof_index = Some(index);
        self
    }

    #[must_use]
    pub fn with_json_name(mut self, json_name: impl Into<String>) -> Self {
        self.json_name = Some(json_name.into());
        self
    }

    /// Sets `redact = true` without a mask override.
    #[must_use]
    pub fn redacted(self) -> Self {
        self.with_rules(RedactRules {
            redact: true,
            mask: None,
        })
    }

    /// Sets `redact = true` with the given mask override.
    #[must_use]
    pub fn redacted_with(self, mask: redact_rules::Mask) -> Self {
        self.with_rules(RedactRules {
            redact: true,
            mask: Some(mask),
        })
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RedactRules) -> Self {
        self.options = Some(FieldOptions {
            redact: Some(rules),
        });
        self
    }

    pub fn rules(&self) -> Option<&RedactRules> {
        self.options.as_ref().and_then(|options| options.redact.as_ref())
    }

    fn renumbered(mut self, name: &str, number: i32) -> Self {
        self.name = Some(name.to_string());
        self.number = Some(number);
        self
    }
}
