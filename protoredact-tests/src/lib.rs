//! Message types for the end-to-end tests.
//!
//! The structs below are written the way prost-build emits them for the schema
//! assembled in `build.rs`; the generated redaction code is included next to
//! them, one `include_redact!` per `.proto` file. Well-known types come from
//! `prost-types`, or are the wrapped primitive for the `*Value` wrappers.

pub mod acme {
    pub mod user {
        pub mod v1 {
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct User {
                #[prost(string, tag = "1")]
                pub name: String,
                #[prost(string, tag = "2")]
                pub email: String,
                #[prost(string, tag = "3")]
                pub password: String,
                #[prost(int32, tag = "4")]
                pub age: i32,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Address {
                #[prost(string, tag = "1")]
                pub street: String,
                #[prost(string, tag = "2")]
                pub city: String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Account {
                #[prost(string, tag = "1")]
                pub id: String,
                #[prost(string, tag = "2")]
                pub secret_key: String,
                #[prost(message, optional, tag = "3")]
                pub user: Option<User>,
                #[prost(message, repeated, tag = "4")]
                pub addresses: Vec<Address>,
                #[prost(enumeration = "Status", tag = "5")]
                pub status: i32,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct MessageWithNoRedact {
                #[prost(string, tag = "1")]
                pub name: String,
                #[prost(int32, tag = "2")]
                pub count: i32,
            }

            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
            #[repr(i32)]
            pub enum Status {
                Unspecified = 0,
                Active = 1,
                Suspended = 2,
            }

            protoredact::include_redact!("acme/user/v1/user");
        }
    }

    pub mod scalars {
        pub mod v1 {
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct AllRedacted {
                #[prost(string, tag = "1")]
                pub string_val: String,
                #[prost(bytes = "vec", tag = "2")]
                pub bytes_val: Vec<u8>,
                #[prost(int32, tag = "3")]
                pub int32_val: i32,
                #[prost(int64, tag = "4")]
                pub int64_val: i64,
                #[prost(uint32, tag = "5")]
                pub uint32_val: u32,
                #[prost(uint64, tag = "6")]
                pub uint64_val: u64,
                #[prost(sint32, tag = "7")]
                pub sint32_val: i32,
                #[prost(sint64, tag = "8")]
                pub sint64_val: i64,
                #[prost(fixed32, tag = "9")]
                pub fixed32_val: u32,
                #[prost(fixed64, tag = "10")]
                pub fixed64_val: u64,
                #[prost(sfixed32, tag = "11")]
                pub sfixed32_val: i32,
                #[prost(sfixed64, tag = "12")]
                pub sfixed64_val: i64,
                #[prost(float, tag = "13")]
                pub float_val: f32,
                #[prost(double, tag = "14")]
                pub double_val: f64,
                #[prost(bool, tag = "15")]
                pub bool_val: bool,
                #[prost(enumeration = "Level", tag = "16")]
                pub level: i32,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct CustomMasks {
                #[prost(string, tag = "1")]
                pub string_val: String,
                #[prost(bytes = "vec", tag = "2")]
                pub bytes_val: Vec<u8>,
                #[prost(int32, tag = "3")]
                pub int32_val: i32,
                #[prost(int64, tag = "4")]
                pub int64_val: i64,
                #[prost(uint32, tag = "5")]
                pub uint32_val: u32,
                #[prost(uint32, tag = "6")]
                pub uint32_wrapped: u32,
                #[prost(fixed64, tag = "7")]
                pub uint64_wrapped: u64,
                #[prost(float, tag = "8")]
                pub float_val: f32,
                #[prost(double, tag = "9")]
                pub double_val: f64,
                #[prost(bool, tag = "10")]
                pub bool_val: bool,
                #[prost(enumeration = "Level", tag = "11")]
                pub level: i32,
                #[prost(string, tag = "12")]
                pub mismatched: String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct PlainValues {
                #[prost(string, tag = "1")]
                pub secret: String,
                #[prost(bytes = "vec", tag = "2")]
                pub bytes_val: Vec<u8>,
                #[prost(int64, tag = "3")]
                pub int64_val: i64,
                #[prost(uint64, tag = "4")]
                pub uint64_val: u64,
                #[prost(float, tag = "5")]
                pub float_val: f32,
                #[prost(double, tag = "6")]
                pub double_val: f64,
                #[prost(bool, tag = "7")]
                pub bool_val: bool,
                #[prost(enumeration = "Level", tag = "8")]
                pub level: i32,
                #[prost(string, optional, tag = "9")]
                pub nickname: Option<String>,
                #[prost(string, optional, tag = "10")]
                pub hidden_nickname: Option<String>,
            }

            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
            #[repr(i32)]
            pub enum Level {
                Unspecified = 0,
                Low = 1,
                High = 2,
            }

            protoredact::include_redact!("acme/scalars/v1/scalars");
        }
    }

    pub mod collections {
        pub mod v1 {
            use std::collections::HashMap;

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Item {
                #[prost(string, tag = "1")]
                pub id: String,
                #[prost(string, tag = "2")]
                pub secret: String,
                #[prost(string, tag = "3")]
                pub r#type: String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Collections {
                #[prost(string, repeated, tag = "1")]
                pub tags: Vec<String>,
                #[prost(string, repeated, tag = "2")]
                pub hidden_tags: Vec<String>,
                #[prost(message, repeated, tag = "3")]
                pub items: Vec<Item>,
                #[prost(map = "string, string", tag = "4")]
                pub labels: HashMap<String, String>,
                #[prost(map = "string, string", tag = "5")]
                pub hidden_labels: HashMap<String, String>,
                #[prost(map = "int32, message", tag = "6")]
                pub by_id: HashMap<i32, Item>,
                #[prost(map = "int64, double", tag = "7")]
                pub scores: HashMap<i64, f64>,
                #[prost(message, repeated, tag = "8")]
                pub hidden_items: Vec<Item>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Login {
                #[prost(string, tag = "1")]
                pub user: String,
                #[prost(oneof = "login::Credential", tags = "2, 3, 4")]
                pub credential: Option<login::Credential>,
            }

            pub mod login {
                #[derive(Clone, PartialEq, ::prost::Oneof)]
                pub enum Credential {
                    #[prost(string, tag = "2")]
                    ApiKey(String),
                    #[prost(message, tag = "3")]
                    Item(super::Item),
                    #[prost(bytes, tag = "4")]
                    Token(Vec<u8>),
                }
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Event {
                #[prost(string, tag = "1")]
                pub name: String,
                #[prost(message, optional, tag = "2")]
                pub occurred_at: Option<::prost_types::Timestamp>,
                #[prost(string, tag = "3")]
                pub secret: String,
                #[prost(message, optional, tag = "4")]
                pub hidden_at: Option<::prost_types::Timestamp>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Tree {
                #[prost(string, tag = "1")]
                pub label: String,
                #[prost(string, tag = "2")]
                pub secret: String,
                #[prost(message, repeated, tag = "3")]
                pub children: Vec<Tree>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Ping {
                #[prost(message, optional, boxed, tag = "1")]
                pub pong: Option<Box<Pong>>,
                #[prost(string, tag = "2")]
                pub secret: String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Pong {
                #[prost(message, optional, boxed, tag = "1")]
                pub ping: Option<Box<Ping>>,
                #[prost(string, tag = "2")]
                pub name: String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Outer {
                #[prost(string, tag = "1")]
                pub note: String,
                #[prost(message, optional, tag = "2")]
                pub inner: Option<outer::Inner>,
            }

            pub mod outer {
                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct Inner {
                    #[prost(string, tag = "1")]
                    pub secret: String,
                }
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Extras {
                #[prost(bytes = "vec", repeated, tag = "1")]
                pub blobs: Vec<Vec<u8>>,
                #[prost(enumeration = "Priority", repeated, tag = "2")]
                pub priorities: Vec<i32>,
                #[prost(float, repeated, tag = "3")]
                pub ratios: Vec<f32>,
                #[prost(map = "string, enumeration(Priority)", tag = "4")]
                pub priority_by_name: HashMap<String, i32>,
                #[prost(map = "bool, string", tag = "5")]
                pub by_flag: HashMap<bool, String>,
                #[prost(string, tag = "6")]
                pub secret: String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Team {
                #[prost(string, tag = "1")]
                pub name: String,
                #[prost(string, tag = "2")]
                pub secret: String,
                #[prost(message, repeated, tag = "3")]
                pub members: Vec<Member>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Member {
                #[prost(string, tag = "1")]
                pub name: String,
                #[prost(message, repeated, tag = "2")]
                pub teams: Vec<Team>,
            }

            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
            #[repr(i32)]
            pub enum Priority {
                Unspecified = 0,
                Low = 1,
                Urgent = 2,
            }

            protoredact::include_redact!("acme/collections/v1/collections");
        }
    }

    pub mod shared {
        pub mod v1 {
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct SensitiveData {
                #[prost(string, tag = "1")]
                pub token: String,
                #[prost(string, tag = "2")]
                pub label: String,
            }

            protoredact::include_redact!("acme/shared/v1/shared");
        }
    }

    pub mod app {
        pub mod v1 {
            use std::collections::HashMap;

            use crate::acme::shared::v1::SensitiveData;

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Container {
                #[prost(string, tag = "1")]
                pub name: String,
                #[prost(message, optional, tag = "2")]
                pub data: Option<SensitiveData>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct DataList {
                #[prost(message, repeated, tag = "1")]
                pub items: Vec<SensitiveData>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct DataMap {
                #[prost(map = "string, message", tag = "1")]
                pub entries: HashMap<String, SensitiveData>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Deep {
                #[prost(message, optional, tag = "1")]
                pub container: Option<Container>,
                #[prost(string, tag = "2")]
                pub note: String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Unrelated {
                #[prost(string, tag = "1")]
                pub name: String,
            }

            protoredact::include_redact!("acme/app/v1/app");
        }
    }

    pub mod types {
        pub mod v1 {
            use std::collections::HashMap;

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Schedule {
                #[prost(string, tag = "1")]
                pub name: String,
                #[prost(message, optional, tag = "2")]
                pub starts_at: Option<::prost_types::Timestamp>,
                #[prost(message, optional, tag = "3")]
                pub timeout: Option<::prost_types::Duration>,
                #[prost(message, optional, tag = "4")]
                pub secret_window: Option<::prost_types::Duration>,
                #[prost(message, repeated, tag = "5")]
                pub history: Vec<::prost_types::Timestamp>,
                #[prost(map = "string, message", tag = "6")]
                pub deadlines: HashMap<String, ::prost_types::Timestamp>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Wrappers {
                #[prost(message, optional, tag = "1")]
                pub string_val: Option<String>,
                #[prost(message, optional, tag = "2")]
                pub int64_val: Option<i64>,
                #[prost(message, optional, tag = "3")]
                pub uint32_val: Option<u32>,
                #[prost(message, optional, tag = "4")]
                pub bool_val: Option<bool>,
                #[prost(message, optional, tag = "5")]
                pub bytes_val: Option<Vec<u8>>,
                #[prost(message, optional, tag = "6")]
                pub double_val: Option<f64>,
                #[prost(message, optional, tag = "7")]
                pub secret_string: Option<String>,
                #[prost(message, optional, tag = "8")]
                pub secret_int: Option<i64>,
                #[prost(message, repeated, tag = "9")]
                pub aliases: Vec<String>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Envelope {
                #[prost(message, optional, tag = "1")]
                pub attributes: Option<::prost_types::Struct>,
                #[prost(message, optional, tag = "2")]
                pub value: Option<::prost_types::Value>,
                #[prost(message, optional, tag = "3")]
                pub items: Option<::prost_types::ListValue>,
                #[prost(message, optional, tag = "4")]
                pub update_mask: Option<::prost_types::FieldMask>,
                #[prost(message, optional, tag = "5")]
                pub payload: Option<::prost_types::Any>,
                #[prost(message, optional, tag = "6")]
                pub ack: Option<()>,
                #[prost(string, tag = "7")]
                pub secret: String,
                #[prost(oneof = "envelope::Stamp", tags = "8, 9")]
                pub stamp: Option<envelope::Stamp>,
            }

            pub mod envelope {
                #[derive(Clone, PartialEq, ::prost::Oneof)]
                pub enum Stamp {
                    #[prost(message, tag = "8")]
                    SentAt(::prost_types::Timestamp),
                    #[prost(message, tag = "9")]
                    Note(String),
                }
            }

            protoredact::include_redact!("acme/types/v1/types");
        }
    }

    pub mod legacy {
        pub mod v1 {
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Record {
                #[prost(string, optional, tag = "1")]
                pub note: Option<String>,
                #[prost(int32, optional, tag = "2")]
                pub count: Option<i32>,
                #[prost(double, optional, tag = "3")]
                pub ratio: Option<f64>,
                #[prost(bool, optional, tag = "4")]
                pub flag: Option<bool>,
                #[prost(enumeration = "Tier", optional, tag = "5")]
                pub tier: Option<i32>,
                #[prost(string, optional, tag = "6")]
                pub pin: Option<String>,
                #[prost(string, repeated, tag = "7")]
                pub tags: Vec<String>,
            }

            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
            #[repr(i32)]
            pub enum Tier {
                Basic = 0,
                Gold = 1,
            }

            protoredact::include_redact!("acme/legacy/v1/legacy");
        }
    }
}
