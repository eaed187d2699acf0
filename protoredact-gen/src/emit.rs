//! Redaction emitter.
//!
//! Generates one `Redact` implementation per required message. The generated
//! `redacted_value` builds a JSON object whose keys are the fields' output names
//! in declaration order:
//!
//! | Field shape | `redact = true` | `redact = false` |
//! |-------------|-----------------|------------------|
//! | scalar | resolved mask | the value (bytes as base64, enums as numbers) |
//! | explicit-presence scalar | resolved mask | the value, or `null` when unset |
//! | message | `null` | `null` when unset, otherwise recursive if required, else plain |
//! | well-known type | `null` | `null` when unset, otherwise its protobuf JSON form |
//! | repeated | `[]` | array of elements |
//! | map | `{}` | object keyed by the textual key, sorted |
//! | oneof member | as its shape | as its shape; nothing when the oneof is unset |
//!
//! Whether a message-valued field recurses through `Redact` or falls back to its
//! plain `serde::Serialize` form is decided here, by looking the target up in the
//! [`RequirementSet`]. `google.protobuf` types prost maps to `prost-types` or to
//! primitives are recognized first and rendered through the runtime's
//! well-known-type helpers; wrappers render as the value they wrap.

use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};
use syn::Path;

use crate::{
    classify::{resolve_mask, FloatWidth, Mask, ScalarKind, ValueType, WellKnown},
    error::{Error, Result},
    naming::{camel_ident, snake_ident},
    options::GeneratorOptions,
    propagate::RequirementSet,
    schema::{Cardinality, FieldSpec, MessageType, Presence},
};

struct EmitContext<'a> {
    runtime: &'a Path,
    required: &'a RequirementSet,
    strict: bool,
}

/// How generated code reaches a value: a place (`self.age`) or a reference
/// bound by a pattern (`value`).
#[derive(Clone, Copy)]
enum Access<'a> {
    Place(&'a TokenStream),
    Ref(&'a Ident),
}

impl Access<'_> {
    fn by_ref(self) -> TokenStream {
        match self {
            Self::Place(place) => quote! { &#place },
            Self::Ref(ident) => quote! { #ident },
        }
    }

    fn by_value(self) -> TokenStream {
        match self {
            Self::Place(place) => quote! { #place },
            Self::Ref(ident) => quote! { *#ident },
        }
    }
}

/// Emits the `Redact` impl (and the `slog::Value` impl when configured) for `message`.
pub fn emit_message(
    message: &MessageType,
    required: &RequirementSet,
    options: &GeneratorOptions,
) -> Result<TokenStream> {
    let ctx = EmitContext {
        runtime: &options.runtime_crate,
        required,
        strict: options.strict_masks,
    };
    let rt = ctx.runtime;
    let ty = message.rust_path();

    let mut inserts = Vec::new();
    let mut emitted_oneofs = Vec::new();
    for field in &message.fields {
        match field.oneof {
            Some(index) if !emitted_oneofs.contains(&index) => {
                emitted_oneofs.push(index);
                inserts.push(emit_oneof(&ctx, message, index)?);
            }
            Some(_) => {}
            None => {
                let key = &field.json_name;
                let value = emit_field(&ctx, field)?;
                inserts.push(quote! { object.insert(#key.into(), #value); });
            }
        }
    }

    let binding = if inserts.is_empty() {
        quote! { object }
    } else {
        quote! { mut object }
    };

    let slog_impl = options
        .slog_crate
        .as_ref()
        .map(|slog| emit_slog_value(rt, slog, &ty))
        .unwrap_or_default();

    tracing::trace!(message = %message.id, fields = message.fields.len(), "emitted redaction impl");
    Ok(quote! {
        impl #rt::Redact for #ty {
            fn redacted_value(&self) -> #rt::Value {
                let #binding = #rt::Map::new();
                #(#inserts)*
                #rt::Value::Object(object)
            }
        }

        #slog_impl
    })
}

fn emit_field(ctx: &EmitContext<'_>, field: &FieldSpec) -> Result<TokenStream> {
    if let Some(mask) = resolve_mask(field, ctx.strict)? {
        return Ok(emit_mask(ctx.runtime, &mask));
    }

    let rt = ctx.runtime;
    let place = {
        let ident = snake_ident(&field.name);
        quote! { self.#ident }
    };
    let value = format_ident!("value");

    Ok(match field.cardinality {
        Cardinality::Repeated => {
            let element = emit_element(ctx, &field.category.element(), Access::Ref(&value));
            quote! { #rt::Value::Array(#place.iter().map(|#value| #element).collect()) }
        }
        Cardinality::Map => {
            let element = emit_element(ctx, &field.category.element(), Access::Ref(&value));
            quote! { #rt::map_value(#place.iter().map(|(key, #value)| (key, #element))) }
        }
        Cardinality::Singular => match field.category.element() {
            ValueType::Message(_) => {
                let element = emit_element(ctx, &field.category.element(), Access::Ref(&value));
                quote! {
                    match &#place {
                        ::core::option::Option::Some(#value) => #element,
                        ::core::option::Option::None => #rt::Value::Null,
                    }
                }
            }
            scalar if field.presence == Presence::Explicit => {
                let element = emit_element(ctx, &scalar, Access::Ref(&value));
                quote! {
                    match &#place {
                        ::core::option::Option::Some(#value) => #element,
                        ::core::option::Option::None => #rt::Value::Null,
                    }
                }
            }
            scalar => emit_element(ctx, &scalar, Access::Place(&place)),
        },
    })
}

/// Emits a `match` over the oneof at `index`, inserting the key of the set member.
fn emit_oneof(ctx: &EmitContext<'_>, message: &MessageType, index: usize) -> Result<TokenStream> {
    let members = || message.fields.iter().filter(move |field| field.oneof == Some(index));
    let oneof = message.oneofs.get(index).ok_or_else(|| Error::UnknownOneof {
        field: members().next().map_or_else(|| message.id.to_string(), |field| field.full_name.clone()),
        index,
    })?;
    let enum_path = message.oneof_path(oneof);
    let place = snake_ident(&oneof.name);
    let value = format_ident!("value");

    let mut arms = Vec::new();
    for field in members() {
        let variant = camel_ident(&field.name);
        let key = &field.json_name;
        let (binding, rendered) = match resolve_mask(field, ctx.strict)? {
            Some(mask) => (quote! { _ }, emit_mask(ctx.runtime, &mask)),
            None => (
                quote! { #value },
                emit_element(ctx, &field.category.element(), Access::Ref(&value)),
            ),
        };
        arms.push(quote! {
            ::core::option::Option::Some(#enum_path::#variant(#binding)) => {
                object.insert(#key.into(), #rendered);
            }
        });
    }

    Ok(quote! {
        match &self.#place {
            #(#arms)*
            ::core::option::Option::None => {}
        }
    })
}

/// Renders one unredacted value: a singular field, a repeated element, or a map value.
fn emit_element(ctx: &EmitContext<'_>, ty: &ValueType, access: Access<'_>) -> TokenStream {
    let rt = ctx.runtime;
    match ty {
        ValueType::Message(target) => {
            if let Some(known) = WellKnown::from_id(target) {
                return emit_well_known(ctx, known, access);
            }
            let value = access.by_ref();
            if ctx.required.requires(target) {
                quote! { #rt::Redact::redacted_value(#value) }
            } else {
                quote! { #rt::plain_value(#value) }
            }
        }
        ValueType::Scalar(kind) => match kind {
            ScalarKind::String => {
                let value = access.by_ref();
                quote! { #rt::string_value(#value) }
            }
            ScalarKind::Bytes => {
                let value = access.by_ref();
                quote! { #rt::bytes_value(#value) }
            }
            ScalarKind::Int(_) | ScalarKind::Enum => {
                let value = access.by_value();
                quote! { #rt::Value::from(#value) }
            }
            ScalarKind::Float(FloatWidth::F32) => {
                let value = access.by_value();
                quote! { #rt::f32_value(#value) }
            }
            ScalarKind::Float(FloatWidth::F64) => {
                let value = access.by_value();
                quote! { #rt::f64_value(#value) }
            }
            ScalarKind::Bool => {
                let value = access.by_value();
                quote! { #rt::Value::Bool(#value) }
            }
        },
    }
}

fn emit_well_known(ctx: &EmitContext<'_>, known: WellKnown, access: Access<'_>) -> TokenStream {
    let rt = ctx.runtime;
    let helper = match known {
        WellKnown::Wrapper(kind) => return emit_element(ctx, &ValueType::Scalar(kind), access),
        WellKnown::Timestamp => format_ident!("timestamp_value"),
        WellKnown::Duration => format_ident!("duration_value"),
        WellKnown::Empty => format_ident!("empty_value"),
        WellKnown::Struct => format_ident!("struct_value"),
        WellKnown::Value => format_ident!("dynamic_value"),
        WellKnown::ListValue => format_ident!("list_value"),
        WellKnown::FieldMask => format_ident!("field_mask_value"),
        WellKnown::Any => format_ident!("any_value"),
    };
    let value = access.by_ref();
    quote! { #rt::#helper(#value) }
}

fn emit_mask(rt: &Path, mask: &Mask) -> TokenStream {
    match mask {
        Mask::Text(text) => quote! { #rt::Value::from(#text) },
        Mask::Signed(value) => {
            let literal = Literal::i64_suffixed(*value);
            quote! { #rt::Value::from(#literal) }
        }
        Mask::Unsigned(value) => {
            let literal = Literal::u64_suffixed(*value);
            quote! { #rt::Value::from(#literal) }
        }
        Mask::Enum(value) => {
            let literal = Literal::i32_suffixed(*value);
            quote! { #rt::Value::from(#literal) }
        }
        // Literals cannot encode NaN or infinities, and JSON has no form for them.
        Mask::Float32(value) if value.is_finite() => {
            let literal = Literal::f32_suffixed(*value);
            quote! { #rt::f32_value(#literal) }
        }
        Mask::Float64(value) if value.is_finite() => {
            let literal = Literal::f64_suffixed(*value);
            quote! { #rt::f64_value(#literal) }
        }
        Mask::Float32(_) | Mask::Float64(_) | Mask::Null => quote! { #rt::Value::Null },
        Mask::Bool(value) => quote! { #rt::Value::Bool(#value) },
        Mask::EmptyList => quote! { #rt::Value::Array(::std::vec::Vec::new()) },
        Mask::EmptyMap => quote! { #rt::Value::Object(#rt::Map::new()) },
    }
}

fn emit_slog_value(rt: &Path, slog: &Path, ty: &TokenStream) -> TokenStream {
    quote! {
        impl #slog::Value for #ty {
            fn serialize(
                &self,
                record: &#slog::Record<'_>,
                key: #slog::Key,
                serializer: &mut dyn #slog::Serializer,
            ) -> #slog::Result {
                let redacted = #rt::slog::IntoRedactedJson::redacted_json(self);
                #slog::Value::serialize(&redacted, record, key, serializer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        descriptor::{
            redact_rules::Mask as Declared, DescriptorProto as Message, FieldDescriptorProto as Field,
            FileDescriptorProto as File, Type,
        },
        error::Error,
        schema::{CompilationUnit, MessageId},
    };

    fn options() -> GeneratorOptions {
        GeneratorOptions {
            runtime_crate: syn::parse_quote!(::protoredact),
            slog_crate: None,
            strict_masks: false,
        }
    }

    fn emit(file: File, name: &str, options: &GeneratorOptions) -> Result<String> {
        emit_with(&[file], name, options)
    }

    fn emit_with(files: &[File], name: &str, options: &GeneratorOptions) -> Result<String> {
        let unit = CompilationUnit::from_files(files, &[]).unwrap();
        let required = RequirementSet::compute(&unit);
        let message = unit.message(&MessageId::new(name)).unwrap();
        emit_message(message, &required, options).map(|tokens| tokens.to_string())
    }

    fn user_file() -> File {
        File::new("user.proto", "acme").with_message(
            Message::new("User")
                .with_field(Field::scalar("name", 1, Type::String))
                .with_field(Field::scalar("email", 2, Type::String).redacted_with(Declared::StringMask("*".into())))
                .with_field(
                    Field::scalar("password", 3, Type::String)
                        .redacted_with(Declared::StringMask("[HIDDEN]".into())),
                )
                .with_field(Field::scalar("age", 4, Type::Int32)),
        )
    }

    #[test]
    fn user_impl_has_expected_shape() {
        let generated = emit(user_file(), "acme.User", &options()).unwrap();
        let expected = quote! {
            impl ::protoredact::Redact for User {
                fn redacted_value(&self) -> ::protoredact::Value {
                    let mut object = ::protoredact::Map::new();
                    object.insert("name".into(), ::protoredact::string_value(&self.name));
                    object.insert("email".into(), ::protoredact::Value::from("*"));
                    object.insert("password".into(), ::protoredact::Value::from("[HIDDEN]"));
                    object.insert("age".into(), ::protoredact::Value::from(self.age));
                    ::protoredact::Value::Object(object)
                }
            }
        };
        assert_eq!(generated, expected.to_string());
    }

    #[test]
    fn integer_masks_are_narrowed_literals() {
        let file = File::new("m.proto", "m").with_message(
            Message::new("Masks")
                .with_field(Field::scalar("small", 1, Type::Uint32).redacted_with(Declared::IntMask(-1)))
                .with_field(Field::scalar("signed", 2, Type::Sint64).redacted_with(Declared::IntMask(-7)))
                .with_field(Field::scalar("ratio", 3, Type::Float).redacted_with(Declared::DoubleMask(-1.5)))
                .with_field(Field::scalar("flag", 4, Type::Bool).redacted()),
        );
        let generated = emit(file, "m.Masks", &options()).unwrap();
        assert!(generated.contains("4294967295u64"));
        assert!(generated.contains("- 7i64") || generated.contains("-7i64"));
        assert!(generated.contains("f32_value"));
        assert!(generated.contains("Value :: Bool (false)"));
    }

    #[test]
    fn non_finite_float_masks_render_null() {
        let file = File::new("m.proto", "m").with_message(
            Message::new("Odd").with_field(
                Field::scalar("ratio", 1, Type::Double).redacted_with(Declared::DoubleMask(f64::NAN)),
            ),
        );
        let generated = emit(file, "m.Odd", &options()).unwrap();
        assert!(generated.contains("\"ratio\" . into () , :: protoredact :: Value :: Null"));
    }

    #[test]
    fn message_fields_recurse_only_into_required_types() {
        let file = user_file().with_message(
            Message::new("Account")
                .with_field(Field::message("user", 1, ".acme.User"))
                .with_field(Field::message("note", 2, ".acme.Note"))
                .with_field(Field::message("friends", 3, ".acme.User").repeated()),
        )
        .with_message(Message::new("Note").with_field(Field::scalar("text", 1, Type::String)));
        let generated = emit(file, "acme.Account", &options()).unwrap();
        assert!(generated.contains(
            "match & self . user { :: core :: option :: Option :: Some (value) => :: protoredact :: Redact :: redacted_value (value)"
        ));
        assert!(generated.contains(":: protoredact :: plain_value (value)"));
        assert!(generated.contains(
            ":: protoredact :: Value :: Array (self . friends . iter () . map (| value | :: protoredact :: Redact :: redacted_value (value)) . collect ())"
        ));
    }

    #[test]
    fn maps_use_sorted_helper_and_composites_use_empty_masks() {
        let file = File::new("m.proto", "m").with_message(
            Message::new("Bag")
                .with_field(Field::map("labels", 1, ".m.Bag.LabelsEntry"))
                .with_field(Field::map("hidden", 2, ".m.Bag.HiddenEntry").redacted())
                .with_field(Field::scalar("tags", 3, Type::String).repeated().redacted())
                .with_nested(Message::map_entry(
                    "LabelsEntry",
                    Field::scalar("key", 1, Type::Int64),
                    Field::scalar("value", 2, Type::Double),
                ))
                .with_nested(Message::map_entry(
                    "HiddenEntry",
                    Field::scalar("key", 1, Type::String),
                    Field::scalar("value", 2, Type::String),
                )),
        );
        let generated = emit(file, "m.Bag", &options()).unwrap();
        assert!(generated.contains(
            ":: protoredact :: map_value (self . labels . iter () . map (| (key , value) | (key , :: protoredact :: f64_value (* value))))"
        ));
        assert!(generated.contains("\"hidden\" . into () , :: protoredact :: Value :: Object (:: protoredact :: Map :: new ())"));
        assert!(generated.contains("\"tags\" . into () , :: protoredact :: Value :: Array (:: std :: vec :: Vec :: new ())"));
    }

    #[test]
    fn oneof_is_matched_once_with_module_path() {
        let file = File::new("o.proto", "o").with_message(
            Message::new("Login")
                .with_field(Field::scalar("user", 1, Type::String))
                .with_field(Field::scalar("api_key", 2, Type::String).in_oneof(0).redacted())
                .with_field(Field::scalar("token", 3, Type::Bytes).in_oneof(0))
                .with_oneof("credential"),
        );
        let generated = emit(file, "o.Login", &options()).unwrap();
        assert_eq!(generated.matches("match & self . credential").count(), 1);
        assert!(generated.contains("login :: Credential :: ApiKey (_)"));
        assert!(generated.contains("\"apiKey\" . into () , :: protoredact :: Value :: from (\"*\")"));
        assert!(generated.contains("login :: Credential :: Token (value)"));
        assert!(generated.contains(":: protoredact :: bytes_value (value)"));
    }

    #[test]
    fn explicit_presence_renders_null_when_unset() {
        let file = File::new("p.proto", "p").with_message(
            Message::new("Profile").with_field(Field::scalar("nickname", 1, Type::String).with_proto3_optional().redacted())
                .with_field(Field::scalar("age", 2, Type::Int32).with_proto3_optional()),
        );
        let generated = emit(file, "p.Profile", &options()).unwrap();
        assert!(generated.contains(
            "match & self . age { :: core :: option :: Option :: Some (value) => :: protoredact :: Value :: from (* value) , :: core :: option :: Option :: None => :: protoredact :: Value :: Null , }"
        ));
    }

    #[test]
    fn empty_message_binds_immutable_map() {
        let file = File::new("e.proto", "e").with_message(Message::new("Empty"));
        let generated = emit(file, "e.Empty", &options()).unwrap();
        assert!(generated.contains("let object = :: protoredact :: Map :: new ()"));
    }

    #[test]
    fn slog_impl_is_emitted_when_configured() {
        let options = GeneratorOptions {
            slog_crate: Some(syn::parse_quote!(::slog)),
            ..options()
        };
        let generated = emit(user_file(), "acme.User", &options).unwrap();
        assert!(generated.contains("impl :: slog :: Value for User"));
        assert!(generated.contains(":: protoredact :: slog :: IntoRedactedJson :: redacted_json (self)"));
    }

    #[test]
    fn strict_masks_fail_emission() {
        let file = File::new("s.proto", "s").with_message(
            Message::new("Strict").with_field(
                Field::scalar("tags", 1, Type::String)
                    .repeated()
                    .redacted_with(Declared::StringMask("x".into())),
            ),
        );
        let options = GeneratorOptions {
            strict_masks: true,
            ..options()
        };
        assert!(matches!(emit(file, "s.Strict", &options), Err(Error::MaskOverride { .. })));
    }

    #[test]
    fn nested_message_uses_module_path() {
        let file = File::new("n.proto", "n").with_message(
            Message::new("Outer").with_nested(
                Message::new("Inner").with_field(Field::scalar("secret", 1, Type::String).redacted()),
            ),
        );
        let generated = emit(file, "n.Outer.Inner", &options()).unwrap();
        assert!(generated.starts_with("impl :: protoredact :: Redact for outer :: Inner"));
    }

    fn well_known_file() -> File {
        File::new("google/protobuf/well_known.proto", "google.protobuf")
            .with_message(
                Message::new("Timestamp")
                    .with_field(Field::scalar("seconds", 1, Type::Int64))
                    .with_field(Field::scalar("nanos", 2, Type::Int32)),
            )
            .with_message(Message::new("StringValue").with_field(Field::scalar("value", 1, Type::String)))
            .with_message(Message::new("Int64Value").with_field(Field::scalar("value", 1, Type::Int64)))
            .with_message(Message::new("Empty"))
    }

    #[test]
    fn well_known_types_use_runtime_helpers() {
        let file = File::new("w.proto", "w").with_dependency("google/protobuf/well_known.proto").with_message(
            Message::new("Audit")
                .with_field(Field::message("at", 1, ".google.protobuf.Timestamp"))
                .with_field(Field::message("history", 2, ".google.protobuf.Timestamp").repeated())
                .with_field(Field::message("note", 3, ".google.protobuf.StringValue"))
                .with_field(Field::message("count", 4, ".google.protobuf.Int64Value"))
                .with_field(Field::message("ack", 5, ".google.protobuf.Empty"))
                .with_field(Field::message("secret", 6, ".google.protobuf.StringValue").redacted()),
        );
        let generated = emit_with(&[well_known_file(), file], "w.Audit", &options()).unwrap();
        assert!(generated.contains(
            "match & self . at { :: core :: option :: Option :: Some (value) => :: protoredact :: timestamp_value (value)"
        ));
        assert!(generated.contains("self . history . iter () . map (| value | :: protoredact :: timestamp_value (value))"));
        assert!(generated.contains(
            "match & self . note { :: core :: option :: Option :: Some (value) => :: protoredact :: string_value (value)"
        ));
        assert!(generated.contains(":: protoredact :: Value :: from (* value)"));
        assert!(generated.contains(":: protoredact :: empty_value (value)"));
        assert!(generated.contains("\"secret\" . into () , :: protoredact :: Value :: Null"));
        assert!(!generated.contains("plain_value"));
    }

    #[test]
    fn undeclared_oneof_is_an_error() {
        let file = File::new("o.proto", "o").with_message(
            Message::new("Login")
                .with_field(Field::scalar("token", 1, Type::String).in_oneof(0))
                .with_oneof("credential"),
        );
        let unit = CompilationUnit::from_files(&[file], &[]).unwrap();
        let mut login = unit.message(&MessageId::new("o.Login")).unwrap().clone();
        login.oneofs.clear();
        let required = RequirementSet::compute(&unit);
        assert!(matches!(
            emit_message(&login, &required, &options()),
            Err(Error::UnknownOneof { ref field, index: 0 }) if field == "o.Login.token"
        ));
    }
}
