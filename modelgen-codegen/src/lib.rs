//! # Modelgen Codegen
//!
//! Rust code generation from schema-derived input models.
//!
//! This crate provides:
//! - Struct, enum and tuple struct rendering with serde attributes
//! - Synthetic types for inline objects and tuple arrays, emitted before
//!   the models that use them
//! - Configurable naming conventions and rendering presets
//! - `Cargo.toml` and `src/lib.rs` generation for a ready-to-build package

pub mod error;
pub mod file;
pub mod generator;
pub mod keywords;
pub mod naming;
pub mod options;
pub mod output;
pub mod preset;
pub mod rust;

#[cfg(test)]
mod testing;

pub use error::CodegenError;
pub use file::RustFileGenerator;
pub use generator::RustGenerator;
pub use keywords::{RESERVED_RUST_KEYWORDS, is_reserved_rust_keyword};
pub use naming::{NamingContext, NamingConvention, RustNamingConvention};
pub use options::{PackageFeature, PackageOptions, RustOptions};
pub use output::{OutputModel, RenderOutput};
pub use preset::{EnumPreset, PackagePreset, RustPreset, StructPreset, TuplePreset};

/// Generates complete Rust models from an input model registry in JSON.
///
/// # Arguments
/// * `json` - Registry object keyed by model identifier
/// * `options` - Generation options
///
/// # Returns
/// One output per renderable model, in input order.
///
/// # Errors
/// Returns `CodegenError` if the input model cannot be parsed.
pub fn generate_from_json(json: &str, options: RustOptions) -> Result<Vec<OutputModel>, CodegenError> {
    let input = modelgen_schema::parse_input_model(json)?;
    Ok(RustGenerator::new(options).generate_complete_models(&input))
}

/// Generates complete Rust models from an input model registry file.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing the file fails.
pub fn generate_from_file(
    path: &std::path::Path,
    options: RustOptions,
) -> Result<Vec<OutputModel>, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json, options)
}
