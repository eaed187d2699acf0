//! Output assembly.
//!
//! Groups emitted impls per source file. Only files requested for output
//! produce anything, and only when they declare at least one required message:
//! `a/b/c.proto` becomes `a/b/c.redact.rs`, meant to be `include!`d next to the
//! prost output of the same package.

use crate::{
    descriptor::{CodeGeneratorRequest, CodeGeneratorResponse, FileDescriptorProto, GeneratedFile, FEATURE_PROTO3_OPTIONAL},
    emit::emit_message,
    error::Result,
    options::GeneratorOptions,
    propagate::RequirementSet,
    schema::CompilationUnit,
};

/// Suffix replacing `.proto` in output file names.
pub const OUTPUT_SUFFIX: &str = ".redact.rs";

/// One generated Rust source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFile {
    /// Path relative to the output root.
    pub name: String,
    pub content: String,
}

/// Output file name for a `.proto` source path.
pub fn output_name(proto_file: &str) -> String {
    let stem = proto_file.strip_suffix(".proto").unwrap_or(proto_file);
    format!("{stem}{OUTPUT_SUFFIX}")
}

/// Runs the whole pipeline over a set of descriptors.
pub fn generate_files(
    files: &[FileDescriptorProto],
    files_to_generate: &[String],
    options: &GeneratorOptions,
) -> Result<Vec<OutputFile>> {
    let unit = CompilationUnit::from_files(files, files_to_generate)?;
    let required = RequirementSet::compute(&unit);

    let mut outputs = Vec::new();
    for file in unit.files().iter().filter(|file| file.generate) {
        let mut impls = Vec::new();
        for id in file.messages.iter().filter(|id| required.requires(id)) {
            let Some(message) = unit.message(id) else {
                continue;
            };
            impls.push(emit_message(message, &required, options)?.to_string());
        }
        if impls.is_empty() {
            tracing::debug!(file = %file.name, "no message requires redaction");
            continue;
        }

        tracing::info!(file = %file.name, package = %file.package, impls = impls.len(), "generated redaction impls");
        outputs.push(OutputFile {
            name: output_name(&file.name),
            content: render(&file.name, &impls),
        });
    }
    Ok(outputs)
}

fn render(source: &str, impls: &[String]) -> String {
    let mut content = format!(
        "// @generated by protoc-gen-rust-redact {}. DO NOT EDIT.\n// source: {source}\n",
        env!("CARGO_PKG_VERSION")
    );
    for body in impls {
        content.push('\n');
        content.push_str(body);
        content.push('\n');
    }
    content
}

/// Answers a plugin request.
///
/// A failure anywhere yields a response that carries only the error message,
/// so protoc never writes partial output.
pub fn generate(request: CodeGeneratorRequest) -> CodeGeneratorResponse {
    let result = GeneratorOptions::from_parameter(request.parameter.as_deref()).and_then(|options| {
        generate_files(&request.proto_file, &request.file_to_generate, &options)
    });

    let mut response = CodeGeneratorResponse {
        supported_features: Some(FEATURE_PROTO3_OPTIONAL),
        ..CodeGeneratorResponse::default()
    };
    match result {
        Ok(outputs) => {
            response.file = outputs
                .into_iter()
                .map(|output| GeneratedFile {
                    name: Some(output.name),
                    insertion_point: None,
                    content: Some(output.content),
                })
                .collect();
        }
        Err(err) => {
            tracing::error!(error = %err, "redaction code generation failed");
            response.error = Some(err.to_string());
        }
    }
    response
}
