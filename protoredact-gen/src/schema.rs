//! Read-only view of a compilation unit.
//!
//! [`CompilationUnit`] indexes every message of every file protoc loaded, not
//! only the files requested for output, and resolves message and enum
//! references across file boundaries. Map-entry messages are folded into the map
//! fields that use them.

use std::{
    collections::{BTreeMap, HashMap, HashSet},
    fmt,
};

use proc_macro2::TokenStream;
use quote::quote;

use crate::{
    classify::{ScalarKind, TypeCategory, ValueType},
    descriptor::{DescriptorProto, FieldDescriptorProto, FileDescriptorProto, Label, RedactRules, Type},
    error::{Error, Result},
    naming::{camel_ident, json_name, snake_ident},
};

/// Fully-qualified protobuf name of a message, without the leading dot.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        match full_name.strip_prefix('.') {
            Some(stripped) => Self(stripped.to_string()),
            None => Self(full_name),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cardinality {
    Singular,
    Repeated,
    Map,
}

/// Whether prost wraps a singular scalar in `Option`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Implicit,
    /// proto3 `optional`, or a proto2 optional scalar.
    Explicit,
}

#[derive(Clone, Debug)]
pub struct FieldSpec {
    pub name: String,
    /// `package.Message.field`, used in diagnostics.
    pub full_name: String,
    /// Output key of the field.
    pub json_name: String,
    pub category: TypeCategory,
    pub cardinality: Cardinality,
    pub presence: Presence,
    /// Index into [`MessageType::oneofs`].
    pub oneof: Option<usize>,
    pub rules: Option<RedactRules>,
}

impl FieldSpec {
    pub fn redact(&self) -> bool {
        self.rules.as_ref().is_some_and(|rules| rules.redact)
    }

    pub fn target(&self) -> Option<&MessageId> {
        self.category.target()
    }
}

#[derive(Clone, Debug)]
pub struct OneofGroup {
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct MessageType {
    pub id: MessageId,
    /// Name of the defining `.proto` file.
    pub file: String,
    /// Message names from the outermost declaration down to this one.
    pub path: Vec<String>,
    pub fields: Vec<FieldSpec>,
    pub nested: Vec<MessageId>,
    pub oneofs: Vec<OneofGroup>,
}

impl MessageType {
    /// Path prost gives the struct, relative to the package module
    /// (`Outer.Inner` becomes `outer::Inner`).
    pub fn rust_path(&self) -> TokenStream {
        let (last, parents) = self
            .path
            .split_last()
            .map_or((String::new(), &[][..]), |(last, parents)| (last.clone(), parents));
        let modules = parents.iter().map(|parent| snake_ident(parent));
        let ident = camel_ident(&last);
        quote! { #(#modules::)* #ident }
    }

    /// Path of the enum prost generates for `oneof`.
    pub fn oneof_path(&self, oneof: &OneofGroup) -> TokenStream {
        let modules = self.path.iter().map(|segment| snake_ident(segment));
        let ident = camel_ident(&oneof.name);
        quote! { #(#modules::)* #ident }
    }
}

#[derive(Clone, Debug)]
pub struct SchemaFile {
    pub name: String,
    pub package: String,
    /// Whether output was requested for this file.
    pub generate: bool,
    /// Messages declared in the file, outer before nested, in declaration order.
    pub messages: Vec<MessageId>,
}

/// Every file and message loaded for one generation run.
#[derive(Clone, Debug, Default)]
pub struct CompilationUnit {
    files: Vec<SchemaFile>,
    messages: BTreeMap<MessageId, MessageType>,
}

impl CompilationUnit {
    /// Builds the unit from all loaded files; `files_to_generate` selects output.
    pub fn from_files(files: &[FileDescriptorProto], files_to_generate: &[String]) -> Result<Self> {
        let index = Index::build(files)?;
        let mut unit = Self::default();

        for file in files {
            let name = file.name.clone().unwrap_or_default();
            let package = file.package.clone().unwrap_or_default();
            let proto3 = file.syntax.as_deref() == Some("proto3");
            let mut schema_file = SchemaFile {
                generate: files_to_generate.contains(&name),
                name,
                package: package.clone(),
                messages: Vec::new(),
            };

            let mut pending: Vec<(Vec<String>, &DescriptorProto)> = file
                .message_type
                .iter()
                .rev()
                .map(|message| (vec![message.name.clone().unwrap_or_default()], message))
                .collect();
            while let Some((path, descriptor)) = pending.pop() {
                if descriptor.is_map_entry() {
                    continue;
                }
                let message = index.message_type(&schema_file, &package, path.clone(), descriptor, proto3)?;
                for nested in descriptor.nested_type.iter().rev() {
                    let mut nested_path = path.clone();
                    nested_path.push(nested.name.clone().unwrap_or_default());
                    pending.push((nested_path, nested));
                }
                schema_file.messages.push(message.id.clone());
                unit.messages.insert(message.id.clone(), message);
            }
            unit.files.push(schema_file);
        }

        tracing::debug!(
            files = unit.files.len(),
            messages = unit.messages.len(),
            "loaded compilation unit"
        );
        Ok(unit)
    }

    pub fn files(&self) -> &[SchemaFile] {
        &self.files
    }

    pub fn messages(&self) -> impl Iterator<Item = &MessageType> {
        self.messages.values()
    }

    pub fn message(&self, id: &MessageId) -> Option<&MessageType> {
        self.messages.get(id)
    }
}

fn qualify(package: &str, path: &[String]) -> String {
    let joined = path.join(".");
    if package.is_empty() {
        joined
    } else {
        format!("{package}.{joined}")
    }
}

/// Every declared type of the unit, by fully-qualified name.
struct Index<'a> {
    messages: HashMap<String, &'a DescriptorProto>,
    enums: HashSet<String>,
}

impl<'a> Index<'a> {
    fn build(files: &'a [FileDescriptorProto]) -> Result<Self> {
        let mut index = Index {
            messages: HashMap::new(),
            enums: HashSet::new(),
        };
        for file in files {
            let package = file.package.as_deref().unwrap_or_default();
            for enumeration in &file.enum_type {
                let name = enumeration.name.clone().unwrap_or_default();
                index.add_enum(qualify(package, &[name]))?;
            }
            for message in &file.message_type {
                index.add_message(package, vec![message.name.clone().unwrap_or_default()], message)?;
            }
        }
        Ok(index)
    }

    fn add_enum(&mut self, full_name: String) -> Result<()> {
        if self.messages.contains_key(&full_name) || !self.enums.insert(full_name.clone()) {
            return Err(Error::DuplicateType(full_name));
        }
        Ok(())
    }

    fn add_message(&mut self, package: &str, path: Vec<String>, message: &'a DescriptorProto) -> Result<()> {
        let full_name = qualify(package, &path);
        if self.enums.contains(&full_name) || self.messages.insert(full_name.clone(), message).is_some() {
            return Err(Error::DuplicateType(full_name));
        }
        for enumeration in &message.enum_type {
            let mut enum_path = path.clone();
            enum_path.push(enumeration.name.clone().unwrap_or_default());
            self.add_enum(qualify(package, &enum_path))?;
        }
        for nested in &message.nested_type {
            let mut nested_path = path.clone();
            nested_path.push(nested.name.clone().unwrap_or_default());
            self.add_message(package, nested_path, nested)?;
        }
        Ok(())
    }

    fn message_type(
        &self,
        file: &SchemaFile,
        package: &str,
        path: Vec<String>,
        descriptor: &DescriptorProto,
        proto3: bool,
    ) -> Result<MessageType> {
        let id = MessageId::new(qualify(package, &path));
        let oneofs = descriptor
            .oneof_decl
            .iter()
            .map(|oneof| OneofGroup {
                name: oneof.name.clone().unwrap_or_default(),
            })
            .collect();
        let fields = descriptor
            .field
            .iter()
            .map(|field| self.field_spec(&id, field, proto3))
            .collect::<Result<Vec<FieldSpec>>>()?;
        if let Some(field) = fields
            .iter()
            .find(|field| field.oneof.is_some_and(|index| index >= descriptor.oneof_decl.len()))
        {
            return Err(Error::UnknownOneof {
                field: field.full_name.clone(),
                index: field.oneof.unwrap_or_default(),
            });
        }
        let nested = descriptor
            .nested_type
            .iter()
            .filter(|nested| !nested.is_map_entry())
            .map(|nested| MessageId::new(format!("{id}.{}", nested.name.as_deref().unwrap_or_default())))
            .collect();

        Ok(MessageType {
            id,
            file: file.name.clone(),
            path,
            fields,
            nested,
            oneofs,
        })
    }

    fn field_spec(&self, owner: &MessageId, field: &FieldDescriptorProto, proto3: bool) -> Result<FieldSpec> {
        let name = field.name.clone().ok_or(Error::MissingDescriptorField("FieldDescriptorProto.name"))?;
        let full_name = format!("{owner}.{name}");
        let ty = field_type(&full_name, field)?;
        let label = field.label.and_then(Label::from_i32).unwrap_or(Label::Optional);
        let synthetic = field.proto3_optional.unwrap_or(false);

        let (category, mut cardinality) = match ty {
            Type::Message | Type::Group => {
                let target = self.resolve_message(&full_name, field)?;
                match self.messages.get(target.as_str()) {
                    Some(entry) if entry.is_map_entry() && label == Label::Repeated => {
                        (self.map_category(&full_name, target.as_str(), entry)?, Cardinality::Map)
                    }
                    _ => (TypeCategory::Message(target), Cardinality::Singular),
                }
            }
            Type::Enum => {
                self.resolve_enum(&full_name, field)?;
                (TypeCategory::Scalar(ScalarKind::Enum), Cardinality::Singular)
            }
            scalar => {
                let kind = ScalarKind::from_type(scalar).ok_or_else(|| Error::UnsupportedFieldType {
                    field: full_name.clone(),
                    type_number: scalar as i32,
                })?;
                (TypeCategory::Scalar(kind), Cardinality::Singular)
            }
        };
        if cardinality == Cardinality::Singular && label == Label::Repeated {
            cardinality = Cardinality::Repeated;
        }

        let scalar_singular =
            cardinality == Cardinality::Singular && matches!(category, TypeCategory::Scalar(_));
        let presence = if scalar_singular && (synthetic || (!proto3 && label == Label::Optional)) {
            Presence::Explicit
        } else {
            Presence::Implicit
        };
        let oneof = if synthetic {
            None
        } else {
            field.oneof_index.and_then(|index| usize::try_from(index).ok())
        };

        Ok(FieldSpec {
            json_name: field.json_name.clone().unwrap_or_else(|| json_name(&name)),
            name,
            full_name,
            category,
            cardinality,
            presence,
            oneof,
            rules: field.rules().cloned(),
        })
    }

    fn map_category(&self, field: &str, entry_name: &str, entry: &DescriptorProto) -> Result<TypeCategory> {
        let malformed = || Error::MalformedMapEntry(entry_name.to_string());
        let key = entry.field.iter().find(|f| f.number == Some(1)).ok_or_else(malformed)?;
        let value = entry.field.iter().find(|f| f.number == Some(2)).ok_or_else(malformed)?;

        let key = ScalarKind::from_type(field_type(field, key)?).ok_or_else(malformed)?;
        let value = match field_type(field, value)? {
            Type::Message | Type::Group => ValueType::Message(self.resolve_message(field, value)?),
            Type::Enum => {
                self.resolve_enum(field, value)?;
                ValueType::Scalar(ScalarKind::Enum)
            }
            scalar => ValueType::Scalar(ScalarKind::from_type(scalar).ok_or_else(malformed)?),
        };
        Ok(TypeCategory::Map { key, value })
    }

    fn resolve_message(&self, field: &str, descriptor: &FieldDescriptorProto) -> Result<MessageId> {
        let type_name = descriptor.type_name.as_deref().unwrap_or_default();
        let id = MessageId::new(type_name);
        if self.messages.contains_key(id.as_str()) {
            Ok(id)
        } else {
            Err(Error::UnresolvedType {
                field: field.to_string(),
                type_name: type_name.to_string(),
            })
        }
    }

    fn resolve_enum(&self, field: &str, descriptor: &FieldDescriptorProto) -> Result<()> {
        let type_name = descriptor.type_name.as_deref().unwrap_or_default();
        if self.enums.contains(type_name.trim_start_matches('.')) {
            Ok(())
        } else {
            Err(Error::UnresolvedType {
                field: field.to_string(),
                type_name: type_name.to_string(),
            })
        }
    }
}

fn field_type(full_name: &str, field: &FieldDescriptorProto) -> Result<Type> {
    let number = field.r#type.unwrap_or_default();
    Type::from_i32(number).ok_or_else(|| Error::UnsupportedFieldType {
        field: full_name.to_string(),
        type_number: number,
    })
}
