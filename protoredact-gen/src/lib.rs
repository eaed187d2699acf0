//! Code generator for `protoredact`.
//!
//! This crate reads compiled protobuf descriptors and generates
//! `protoredact::Redact` implementations for every message that needs one. It:
//! - reads the `(protoredact.v1.rules)` field option (extension number 50000)
//! - computes, across every file of the compilation unit, which messages must
//!   redact (their own annotated fields, or a field reaching such a message)
//! - emits recursive masking code that sits next to prost's generated structs
//!
//! It does **not** parse `.proto` sources. Descriptors come from protoc, either
//! through the `protoc-gen-rust-redact` plugin binary or through [`Builder`] in a
//! build script.
//!
//! # Build scripts
//!
//! ```no_run
//! # fn main() -> Result<(), protoredact_gen::Error> {
//! let descriptors = std::fs::read("descriptors.bin")?;
//! protoredact_gen::Builder::new()
//!     .descriptor_set(&descriptors)?
//!     .generate()?;
//! # Ok(())
//! # }
//! ```
//!
//! Each `a/b/c.proto` with at least one redacting message yields `a/b/c.redact.rs`
//! under `OUT_DIR`, to be included in the module holding prost's output for that
//! package (see `protoredact::include_redact!`).

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
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
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

use std::path::{Path, PathBuf};

use prost::Message;

pub mod assemble;
pub mod classify;
pub mod descriptor;
mod emit;
mod error;
mod naming;
pub mod options;
pub mod propagate;
pub mod schema;

pub use assemble::{generate, generate_files, output_name, OutputFile};
pub use emit::emit_message;
pub use error::{Error, Result};
pub use options::GeneratorOptions;
pub use propagate::RequirementSet;
pub use schema::{CompilationUnit, MessageId};

/// Generates redaction code from a build script.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    files: Vec<descriptor::FileDescriptorProto>,
    files_to_generate: Option<Vec<String>>,
    out_dir: Option<PathBuf>,
    options: GeneratorOptions,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the files of an encoded `FileDescriptorSet`, such as the one
    /// `protoc --descriptor_set_out --include_imports` writes.
    pub fn descriptor_set(mut self, bytes: &[u8]) -> Result<Self> {
        let set = descriptor::FileDescriptorSet::decode(bytes)?;
        self.files.extend(set.file);
        Ok(self)
    }

    /// Adds already decoded descriptors.
    #[must_use]
    pub fn files(mut self, files: impl IntoIterator<Item = descriptor::FileDescriptorProto>) -> Self {
        self.files.extend(files);
        self
    }

    /// Restricts output to the named `.proto` files. Every added file still takes
    /// part in requirement propagation. Without this, output is generated for all files.
    #[must_use]
    pub fn generate_only<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files_to_generate = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Output directory; defaults to `OUT_DIR`.
    #[must_use]
    pub fn out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(out_dir.into());
        self
    }

    /// Path of the runtime crate in generated code (`my_redact`, `crate::redact`).
    pub fn runtime_crate(mut self, path: &str) -> Result<Self> {
        self.options.set("runtime_crate", Some(path))?;
        Ok(self)
    }

    /// Emits `slog::Value` impls using the given path to `slog`, or `auto`.
    pub fn slog_crate(mut self, path: &str) -> Result<Self> {
        self.options.set("slog_crate", Some(path))?;
        Ok(self)
    }

    #[must_use]
    pub fn strict_masks(mut self, strict: bool) -> Self {
        self.options.strict_masks = strict;
        self
    }

    /// Generates the files in memory.
    pub fn generate_files(&self) -> Result<Vec<OutputFile>> {
        let files_to_generate = self.files_to_generate.clone().unwrap_or_else(|| {
            self.files
                .iter()
                .filter_map(|file| file.name.clone())
                .collect()
        });
        generate_files(&self.files, &files_to_generate, &self.options)
    }

    /// Generates and writes the files, returning the written paths.
    pub fn generate(&self) -> Result<Vec<PathBuf>> {
        let out_dir = match &self.out_dir {
            Some(out_dir) => out_dir.clone(),
            None => std::env::var_os("OUT_DIR")
                .map(PathBuf::from)
                .ok_or_else(|| Error::InvalidParameter {
                    key: "out_dir".to_string(),
                    reason: "OUT_DIR is not set; call `out_dir` outside build scripts".to_string(),
                })?,
        };

        let mut written = Vec::new();
        for output in self.generate_files()? {
            let path = out_dir.join(&output.name);
            write_if_changed(&path, &output.content)?;
            written.push(path);
        }
        Ok(written)
    }
}

// Leaves unchanged files untouched so their mtime does not trigger rebuilds.
fn write_if_changed(path: &Path, content: &str) -> Result<()> {
    if std::fs::read_to_string(path).is_ok_and(|existing| existing == content) {
        tracing::debug!(path = %path.display(), "generated file is up to date");
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
