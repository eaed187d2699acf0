//! protoc plugin entry point.
//!
//! Reads a `CodeGeneratorRequest` from stdin and writes the
//! `CodeGeneratorResponse` to stdout. Logs go to stderr; set `RUST_LOG` to
//! see them.

use std::io::{Read, Write};

use anyhow::Context;
use clap::Parser;
use prost::Message;
use tracing_subscriber::EnvFilter;

use protoredact_gen::descriptor::CodeGeneratorRequest;

/// Generates `protoredact::Redact` impls for protobuf messages.
///
/// Invoked by protoc: `protoc --rust-redact_out=OUT_DIR --rust-redact_opt=strict_masks`.
#[derive(Parser, Debug)]
#[command(name = "protoc-gen-rust-redact", version, about, long_about = None)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut input = Vec::new();
    std::io::stdin()
        .read_to_end(&mut input)
        .context("failed to read the code generator request from stdin")?;
    let request = CodeGeneratorRequest::decode(input.as_slice())
        .context("failed to decode the code generator request")?;
    tracing::debug!(
        files = request.proto_file.len(),
        requested = request.file_to_generate.len(),
        "received code generator request"
    );

    let response = protoredact_gen::generate(request);

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&response.encode_to_vec())
        .context("failed to write the code generator response")?;
    stdout.flush()?;
    Ok(())
}
