//! Generator options.
//!
//! Options arrive either through the protoc parameter string
//! (`--rust-redact_opt=runtime_crate=my_redact,strict_masks`) or through
//! [`crate::Builder`]. Recognized keys:
//!
//! | Key | Value | Default |
//! |-----|-------|---------|
//! | `runtime_crate` | Rust path of the `protoredact` crate | detected, see [`runtime_crate`] |
//! | `slog_crate` | Rust path of `slog`, or `auto` | no `slog::Value` impls |
//! | `strict_masks` | `true` / `false` (bare key means `true`) | `false` |

use proc_macro_crate::{crate_name, FoundCrate};
use quote::format_ident;
use syn::Path;

use crate::error::{Error, Result};

/// Environment variable naming the runtime crate path when it cannot be detected.
pub const RUNTIME_CRATE_ENV: &str = "PROTOREDACT_RUNTIME_CRATE";

/// Environment variable naming the slog crate path for `slog_crate=auto`.
pub const SLOG_CRATE_ENV: &str = "PROTOREDACT_SLOG_CRATE";

#[derive(Clone, Debug)]
pub struct GeneratorOptions {
    /// Path generated code uses to reach the runtime crate.
    pub runtime_crate: Path,
    /// When set, a `slog::Value` impl is emitted next to every `Redact` impl.
    pub slog_crate: Option<Path>,
    /// Reject mask overrides that do not apply to their field instead of ignoring them.
    pub strict_masks: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            runtime_crate: runtime_crate(),
            slog_crate: None,
            strict_masks: false,
        }
    }
}

impl GeneratorOptions {
    /// Parses a comma-separated `key=value` parameter string on top of the defaults.
    pub fn from_parameter(parameter: Option<&str>) -> Result<Self> {
        let mut options = Self::default();
        let Some(parameter) = parameter else {
            return Ok(options);
        };
        for pair in parameter.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value.trim())),
                None => (pair, None),
            };
            options.set(key, value)?;
        }
        Ok(options)
    }

    /// Applies a single option.
    pub fn set(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        match key {
            "runtime_crate" => {
                self.runtime_crate = parse_path(key, required(key, value)?)?;
            }
            "slog_crate" => {
                self.slog_crate = Some(match required(key, value)? {
                    "auto" => slog_crate()?,
                    path => parse_path(key, path)?,
                });
            }
            "strict_masks" => {
                self.strict_masks = match value {
                    None | Some("true") => true,
                    Some("false") => false,
                    Some(other) => {
                        return Err(Error::InvalidParameter {
                            key: key.to_string(),
                            reason: format!("expected `true` or `false`, got `{other}`"),
                        })
                    }
                };
            }
            _ => {
                return Err(Error::InvalidParameter {
                    key: key.to_string(),
                    reason: "unknown option".to_string(),
                })
            }
        }
        tracing::debug!(key, value = ?value, "applied generator option");
        Ok(())
    }
}

fn required<'a>(key: &str, value: Option<&'a str>) -> Result<&'a str> {
    value.filter(|value| !value.is_empty()).ok_or_else(|| Error::InvalidParameter {
        key: key.to_string(),
        reason: "a value is required".to_string(),
    })
}

fn parse_path(key: &str, value: &str) -> Result<Path> {
    syn::parse_str::<Path>(value).map_err(|_| Error::InvalidParameter {
        key: key.to_string(),
        reason: format!("`{value}` is not a valid Rust path"),
    })
}

fn found_crate_path(found: FoundCrate) -> Path {
    match found {
        FoundCrate::Itself => syn::parse_quote!(crate),
        FoundCrate::Name(name) => {
            let ident = format_ident!("{}", name);
            syn::parse_quote!(::#ident)
        }
    }
}

/// Returns the path generated code uses for the runtime crate.
///
/// Inside a build script this handles crate renaming
/// (`my_redact = { package = "protoredact", ... }`) by reading the manifest of
/// the package being built. Otherwise `PROTOREDACT_RUNTIME_CRATE` is consulted,
/// then `::protoredact` is assumed.
pub fn runtime_crate() -> Path {
    if let Ok(found) = crate_name("protoredact") {
        return found_crate_path(found);
    }
    std::env::var(RUNTIME_CRATE_ENV)
        .ok()
        .and_then(|value| syn::parse_str::<Path>(&value).ok())
        .unwrap_or_else(|| syn::parse_quote!(::protoredact))
}

/// Resolves `slog_crate=auto`: a direct `slog` dependency first, then
/// `PROTOREDACT_SLOG_CRATE` (a path like `my_log::slog`).
fn slog_crate() -> Result<Path> {
    if let Ok(found) = crate_name("slog") {
        return Ok(found_crate_path(found));
    }
    let value = std::env::var(SLOG_CRATE_ENV).map_err(|_| Error::InvalidParameter {
        key: "slog_crate".to_string(),
        reason: format!(
            "no direct `slog` dependency was found. Set {SLOG_CRATE_ENV} to a path \
(e.g., `my_log::slog`) or pass the path explicitly."
        ),
    })?;
    parse_path(SLOG_CRATE_ENV, &value)
}
