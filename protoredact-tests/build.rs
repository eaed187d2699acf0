//! Generates redaction impls for the test schema.
//!
//! The descriptors are assembled the way protoc would emit them for the
//! equivalent `.proto` sources, so the tests run without a protoc installation.

use protoredact_gen::descriptor::{
    redact_rules::Mask, DescriptorProto as Message, FieldDescriptorProto as Field,
    FileDescriptorProto as File, Type,
};

fn main() -> Result<(), protoredact_gen::Error> {
    println!("cargo:rerun-if-changed=build.rs");
    protoredact_gen::Builder::new()
        .files(well_known())
        .files([user(), scalars(), collections(), shared(), app(), types(), legacy()])
        .slog_crate("auto")?
        .generate()?;
    Ok(())
}

/// The `google/protobuf` files protoc loads alongside any schema importing them.
fn well_known() -> Vec<File> {
    let wrapper = |name: &str, ty: Type| Message::new(name).with_field(Field::scalar("value", 1, ty));
    let seconds_nanos = |name: &str| {
        Message::new(name)
            .with_field(Field::scalar("seconds", 1, Type::Int64))
            .with_field(Field::scalar("nanos", 2, Type::Int32))
    };

    let value = Message::new("Value")
        .with_field(Field::enumeration("null_value", 1, ".google.protobuf.NullValue").in_oneof(0))
        .with_field(Field::scalar("number_value", 2, Type::Double).in_oneof(0))
        .with_field(Field::scalar("string_value", 3, Type::String).in_oneof(0))
        .with_field(Field::scalar("bool_value", 4, Type::Bool).in_oneof(0))
        .with_field(Field::message("struct_value", 5, ".google.protobuf.Struct").in_oneof(0))
        .with_field(Field::message("list_value", 6, ".google.protobuf.ListValue").in_oneof(0))
        .with_oneof("kind");

    vec![
        File::new("google/protobuf/timestamp.proto", "google.protobuf").with_message(seconds_nanos("Timestamp")),
        File::new("google/protobuf/duration.proto", "google.protobuf").with_message(seconds_nanos("Duration")),
        File::new("google/protobuf/empty.proto", "google.protobuf").with_message(Message::new("Empty")),
        File::new("google/protobuf/wrappers.proto", "google.protobuf")
            .with_message(wrapper("DoubleValue", Type::Double))
            .with_message(wrapper("FloatValue", Type::Float))
            .with_message(wrapper("Int64Value", Type::Int64))
            .with_message(wrapper("UInt64Value", Type::Uint64))
            .with_message(wrapper("Int32Value", Type::Int32))
            .with_message(wrapper("UInt32Value", Type::Uint32))
            .with_message(wrapper("BoolValue", Type::Bool))
            .with_message(wrapper("StringValue", Type::String))
            .with_message(wrapper("BytesValue", Type::Bytes)),
        File::new("google/protobuf/struct.proto", "google.protobuf")
            .with_enum("NullValue")
            .with_message(
                Message::new("Struct")
                    .with_field(Field::map("fields", 1, ".google.protobuf.Struct.FieldsEntry"))
                    .with_nested(Message::map_entry(
                        "FieldsEntry",
                        Field::scalar("key", 1, Type::String),
                        Field::message("value", 2, ".google.protobuf.Value"),
                    )),
            )
            .with_message(value)
            .with_message(
                Message::new("ListValue")
                    .with_field(Field::message("values", 1, ".google.protobuf.Value").repeated()),
            ),
        File::new("google/protobuf/field_mask.proto", "google.protobuf")
            .with_message(Message::new("FieldMask").with_field(Field::scalar("paths", 1, Type::String).repeated())),
        File::new("google/protobuf/any.proto", "google.protobuf").with_message(
            Message::new("Any")
                .with_field(Field::scalar("type_url", 1, Type::String))
                .with_field(Field::scalar("value", 2, Type::Bytes)),
        ),
    ]
}

fn user() -> File {
    File::new("acme/user/v1/user.proto", "acme.user.v1")
        .with_enum("Status")
        .with_message(
            Message::new("User")
                .with_field(Field::scalar("name", 1, Type::String))
                .with_field(Field::scalar("email", 2, Type::String).redacted_with(Mask::StringMask("*".into())))
                .with_field(
                    Field::scalar("password", 3, Type::String)
                        .redacted_with(Mask::StringMask("[HIDDEN]".into())),
                )
                .with_field(Field::scalar("age", 4, Type::Int32)),
        )
        .with_message(
            Message::new("Address")
                .with_field(Field::scalar("street", 1, Type::String).redacted())
                .with_field(Field::scalar("city", 2, Type::String)),
        )
        .with_message(
            Message::new("Account")
                .with_field(Field::scalar("id", 1, Type::String))
                .with_field(Field::scalar("secret_key", 2, Type::String).redacted())
                .with_field(Field::message("user", 3, ".acme.user.v1.User"))
                .with_field(Field::message("addresses", 4, ".acme.user.v1.Address").repeated())
                .with_field(Field::enumeration("status", 5, ".acme.user.v1.Status")),
        )
        .with_message(
            Message::new("MessageWithNoRedact")
                .with_field(Field::scalar("name", 1, Type::String))
                .with_field(Field::scalar("count", 2, Type::Int32)),
        )
}

const SCALARS: [(&str, Type); 16] = [
    ("string_val", Type::String),
    ("bytes_val", Type::Bytes),
    ("int32_val", Type::Int32),
    ("int64_val", Type::Int64),
    ("uint32_val", Type::Uint32),
    ("uint64_val", Type::Uint64),
    ("sint32_val", Type::Sint32),
    ("sint64_val", Type::Sint64),
    ("fixed32_val", Type::Fixed32),
    ("fixed64_val", Type::Fixed64),
    ("sfixed32_val", Type::Sfixed32),
    ("sfixed64_val", Type::Sfixed64),
    ("float_val", Type::Float),
    ("double_val", Type::Double),
    ("bool_val", Type::Bool),
    ("level", Type::Enum),
];

fn scalars() -> File {
    let scalar = |name: &str, number: i32, ty: Type| match ty {
        Type::Enum => Field::enumeration(name, number, ".acme.scalars.v1.Level"),
        ty => Field::scalar(name, number, ty),
    };

    let mut all_redacted = Message::new("AllRedacted");
    for (number, (name, ty)) in (1..).zip(SCALARS) {
        all_redacted = all_redacted.with_field(scalar(name, number, ty).redacted());
    }

    let custom_masks = Message::new("CustomMasks")
        .with_field(Field::scalar("string_val", 1, Type::String).redacted_with(Mask::StringMask("[REDACTED]".into())))
        .with_field(Field::scalar("bytes_val", 2, Type::Bytes).redacted_with(Mask::BytesMask("[BINARY]".into())))
        .with_field(Field::scalar("int32_val", 3, Type::Int32).redacted_with(Mask::IntMask(-1)))
        .with_field(Field::scalar("int64_val", 4, Type::Int64).redacted_with(Mask::IntMask(-9_999_999_999)))
        .with_field(Field::scalar("uint32_val", 5, Type::Uint32).redacted_with(Mask::IntMask(9999)))
        .with_field(Field::scalar("uint32_wrapped", 6, Type::Uint32).redacted_with(Mask::IntMask(-1)))
        .with_field(Field::scalar("uint64_wrapped", 7, Type::Fixed64).redacted_with(Mask::IntMask(-1)))
        .with_field(Field::scalar("float_val", 8, Type::Float).redacted_with(Mask::DoubleMask(-1.5)))
        .with_field(Field::scalar("double_val", 9, Type::Double).redacted_with(Mask::DoubleMask(-999.99)))
        .with_field(Field::scalar("bool_val", 10, Type::Bool).redacted_with(Mask::BoolMask(true)))
        .with_field(
            Field::enumeration("level", 11, ".acme.scalars.v1.Level").redacted_with(Mask::EnumMask(99)),
        )
        .with_field(Field::scalar("mismatched", 12, Type::String).redacted_with(Mask::IntMask(7)));

    let plain_values = Message::new("PlainValues")
        .with_field(Field::scalar("secret", 1, Type::String).redacted())
        .with_field(Field::scalar("bytes_val", 2, Type::Bytes))
        .with_field(Field::scalar("int64_val", 3, Type::Int64))
        .with_field(Field::scalar("uint64_val", 4, Type::Uint64))
        .with_field(Field::scalar("float_val", 5, Type::Float))
        .with_field(Field::scalar("double_val", 6, Type::Double))
        .with_field(Field::scalar("bool_val", 7, Type::Bool))
        .with_field(Field::enumeration("level", 8, ".acme.scalars.v1.Level"))
        .with_field(Field::scalar("nickname", 9, Type::String).with_proto3_optional().in_oneof(0))
        .with_field(
            Field::scalar("hidden_nickname", 10, Type::String)
                .with_proto3_optional()
                .in_oneof(1)
                .redacted(),
        )
        .with_oneof("_nickname")
        .with_oneof("_hidden_nickname");

    File::new("acme/scalars/v1/scalars.proto", "acme.scalars.v1")
        .with_enum("Level")
        .with_message(all_redacted)
        .with_message(custom_masks)
        .with_message(plain_values)
}

fn collections() -> File {
    let item = Message::new("Item")
        .with_field(Field::scalar("id", 1, Type::String))
        .with_field(Field::scalar("secret", 2, Type::String).redacted())
        .with_field(Field::scalar("type", 3, Type::String));

    let collections = Message::new("Collections")
        .with_field(Field::scalar("tags", 1, Type::String).repeated())
        .with_field(Field::scalar("hidden_tags", 2, Type::String).repeated().redacted())
        .with_field(Field::message("items", 3, ".acme.collections.v1.Item").repeated())
        .with_field(Field::map("labels", 4, ".acme.collections.v1.Collections.LabelsEntry"))
        .with_field(Field::map("hidden_labels", 5, ".acme.collections.v1.Collections.HiddenLabelsEntry").redacted())
        .with_field(Field::map("by_id", 6, ".acme.collections.v1.Collections.ByIdEntry"))
        .with_field(Field::map("scores", 7, ".acme.collections.v1.Collections.ScoresEntry"))
        .with_field(
            Field::message("hidden_items", 8, ".acme.collections.v1.Item")
                .repeated()
                .redacted(),
        )
        .with_nested(Message::map_entry(
            "LabelsEntry",
            Field::scalar("key", 1, Type::String),
            Field::scalar("value", 2, Type::String),
        ))
        .with_nested(Message::map_entry(
            "HiddenLabelsEntry",
            Field::scalar("key", 1, Type::String),
            Field::scalar("value", 2, Type::String),
        ))
        .with_nested(Message::map_entry(
            "ByIdEntry",
            Field::scalar("key", 1, Type::Int32),
            Field::message("value", 2, ".acme.collections.v1.Item"),
        ))
        .with_nested(Message::map_entry(
            "ScoresEntry",
            Field::scalar("key", 1, Type::Int64),
            Field::scalar("value", 2, Type::Double),
        ));

    let login = Message::new("Login")
        .with_field(Field::scalar("user", 1, Type::String))
        .with_field(Field::scalar("api_key", 2, Type::String).in_oneof(0).redacted())
        .with_field(Field::message("item", 3, ".acme.collections.v1.Item").in_oneof(0))
        .with_field(Field::scalar("token", 4, Type::Bytes).in_oneof(0))
        .with_oneof("credential");

    let event = Message::new("Event")
        .with_field(Field::scalar("name", 1, Type::String))
        .with_field(Field::message("occurred_at", 2, ".google.protobuf.Timestamp"))
        .with_field(Field::scalar("secret", 3, Type::String).redacted())
        .with_field(Field::message("hidden_at", 4, ".google.protobuf.Timestamp").redacted());

    let tree = Message::new("Tree")
        .with_field(Field::scalar("label", 1, Type::String))
        .with_field(Field::scalar("secret", 2, Type::String).redacted())
        .with_field(Field::message("children", 3, ".acme.collections.v1.Tree").repeated());

    let ping = Message::new("Ping")
        .with_field(Field::message("pong", 1, ".acme.collections.v1.Pong"))
        .with_field(Field::scalar("secret", 2, Type::String).redacted());
    let pong = Message::new("Pong")
        .with_field(Field::message("ping", 1, ".acme.collections.v1.Ping"))
        .with_field(Field::scalar("name", 2, Type::String));

    let extras = Message::new("Extras")
        .with_field(Field::scalar("blobs", 1, Type::Bytes).repeated())
        .with_field(Field::enumeration("priorities", 2, ".acme.collections.v1.Priority").repeated())
        .with_field(Field::scalar("ratios", 3, Type::Float).repeated())
        .with_field(Field::map("priority_by_name", 4, ".acme.collections.v1.Extras.PriorityByNameEntry"))
        .with_field(Field::map("by_flag", 5, ".acme.collections.v1.Extras.ByFlagEntry"))
        .with_field(Field::scalar("secret", 6, Type::String).redacted())
        .with_nested(Message::map_entry(
            "PriorityByNameEntry",
            Field::scalar("key", 1, Type::String),
            Field::enumeration("value", 2, ".acme.collections.v1.Priority"),
        ))
        .with_nested(Message::map_entry(
            "ByFlagEntry",
            Field::scalar("key", 1, Type::Bool),
            Field::scalar("value", 2, Type::String),
        ));

    // Team holds the only annotated field; Member needs redaction solely through Team.
    let team = Message::new("Team")
        .with_field(Field::scalar("name", 1, Type::String))
        .with_field(Field::scalar("secret", 2, Type::String).redacted())
        .with_field(Field::message("members", 3, ".acme.collections.v1.Member").repeated());
    let member = Message::new("Member")
        .with_field(Field::scalar("name", 1, Type::String))
        .with_field(Field::message("teams", 2, ".acme.collections.v1.Team").repeated());

    let outer = Message::new("Outer")
        .with_field(Field::scalar("note", 1, Type::String))
        .with_field(Field::message("inner", 2, ".acme.collections.v1.Outer.Inner"))
        .with_nested(Message::new("Inner").with_field(Field::scalar("secret", 1, Type::String).redacted()));

    File::new("acme/collections/v1/collections.proto", "acme.collections.v1")
        .with_dependency("google/protobuf/timestamp.proto")
        .with_enum("Priority")
        .with_message(item)
        .with_message(collections)
        .with_message(login)
        .with_message(event)
        .with_message(tree)
        .with_message(ping)
        .with_message(pong)
        .with_message(outer)
        .with_message(extras)
        .with_message(team)
        .with_message(member)
}

fn shared() -> File {
    File::new("acme/shared/v1/shared.proto", "acme.shared.v1").with_message(
        Message::new("SensitiveData")
            .with_field(Field::scalar("token", 1, Type::String).redacted())
            .with_field(Field::scalar("label", 2, Type::String)),
    )
}

fn app() -> File {
    File::new("acme/app/v1/app.proto", "acme.app.v1")
        .with_dependency("acme/shared/v1/shared.proto")
        .with_message(
            Message::new("Container")
                .with_field(Field::scalar("name", 1, Type::String))
                .with_field(Field::message("data", 2, ".acme.shared.v1.SensitiveData")),
        )
        .with_message(
            Message::new("DataList")
                .with_field(Field::message("items", 1, ".acme.shared.v1.SensitiveData").repeated()),
        )
        .with_message(
            Message::new("DataMap")
                .with_field(Field::map("entries", 1, ".acme.app.v1.DataMap.EntriesEntry"))
                .with_nested(Message::map_entry(
                    "EntriesEntry",
                    Field::scalar("key", 1, Type::String),
                    Field::message("value", 2, ".acme.shared.v1.SensitiveData"),
                )),
        )
        .with_message(
            Message::new("Deep")
                .with_field(Field::message("container", 1, ".acme.app.v1.Container"))
                .with_field(Field::scalar("note", 2, Type::String)),
        )
        .with_message(Message::new("Unrelated").with_field(Field::scalar("name", 1, Type::String)))
}

fn types() -> File {
    let schedule = Message::new("Schedule")
        .with_field(Field::scalar("name", 1, Type::String))
        .with_field(Field::message("starts_at", 2, ".google.protobuf.Timestamp"))
        .with_field(Field::message("timeout", 3, ".google.protobuf.Duration"))
        .with_field(Field::message("secret_window", 4, ".google.protobuf.Duration").redacted())
        .with_field(Field::message("history", 5, ".google.protobuf.Timestamp").repeated())
        .with_field(Field::map("deadlines", 6, ".acme.types.v1.Schedule.DeadlinesEntry"))
        .with_nested(Message::map_entry(
            "DeadlinesEntry",
            Field::scalar("key", 1, Type::String),
            Field::message("value", 2, ".google.protobuf.Timestamp"),
        ));

    let wrappers = Message::new("Wrappers")
        .with_field(Field::message("string_val", 1, ".google.protobuf.StringValue"))
        .with_field(Field::message("int64_val", 2, ".google.protobuf.Int64Value"))
        .with_field(Field::message("uint32_val", 3, ".google.protobuf.UInt32Value"))
        .with_field(Field::message("bool_val", 4, ".google.protobuf.BoolValue"))
        .with_field(Field::message("bytes_val", 5, ".google.protobuf.BytesValue"))
        .with_field(Field::message("double_val", 6, ".google.protobuf.DoubleValue"))
        .with_field(Field::message("secret_string", 7, ".google.protobuf.StringValue").redacted())
        .with_field(Field::message("secret_int", 8, ".google.protobuf.Int64Value").redacted())
        .with_field(Field::message("aliases", 9, ".google.protobuf.StringValue").repeated());

    let envelope = Message::new("Envelope")
        .with_field(Field::message("attributes", 1, ".google.protobuf.Struct"))
        .with_field(Field::message("value", 2, ".google.protobuf.Value"))
        .with_field(Field::message("items", 3, ".google.protobuf.ListValue"))
        .with_field(Field::message("update_mask", 4, ".google.protobuf.FieldMask"))
        .with_field(Field::message("payload", 5, ".google.protobuf.Any"))
        .with_field(Field::message("ack", 6, ".google.protobuf.Empty"))
        .with_field(Field::scalar("secret", 7, Type::String).redacted())
        .with_field(Field::message("sent_at", 8, ".google.protobuf.Timestamp").in_oneof(0))
        .with_field(Field::message("note", 9, ".google.protobuf.StringValue").in_oneof(0))
        .with_oneof("stamp");

    File::new("acme/types/v1/types.proto", "acme.types.v1")
        .with_dependency("google/protobuf/any.proto")
        .with_dependency("google/protobuf/duration.proto")
        .with_dependency("google/protobuf/empty.proto")
        .with_dependency("google/protobuf/field_mask.proto")
        .with_dependency("google/protobuf/struct.proto")
        .with_dependency("google/protobuf/timestamp.proto")
        .with_dependency("google/protobuf/wrappers.proto")
        .with_message(schedule)
        .with_message(wrappers)
        .with_message(envelope)
}

// syntax = "proto2"; every `optional` scalar has explicit presence.
fn legacy() -> File {
    File::new("acme/legacy/v1/legacy.proto", "acme.legacy.v1")
        .with_syntax("proto2")
        .with_enum("Tier")
        .with_message(
            Message::new("Record")
                .with_field(Field::scalar("note", 1, Type::String))
                .with_field(Field::scalar("count", 2, Type::Int32))
                .with_field(Field::scalar("ratio", 3, Type::Double))
                .with_field(Field::scalar("flag", 4, Type::Bool))
                .with_field(Field::enumeration("tier", 5, ".acme.legacy.v1.Tier"))
                .with_field(Field::scalar("pin", 6, Type::String).redacted())
                .with_field(Field::scalar("tags", 7, Type::String).repeated()),
        )
}
