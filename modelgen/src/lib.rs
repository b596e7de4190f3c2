//! # Modelgen
//!
//! Generate serde-ready Rust models from schema-derived input models.
//!
//! An input model is a registry of JSON Schema shaped nodes keyed by
//! identifier, as produced by a JSON Schema, AsyncAPI or OpenAPI
//! normalization step. Modelgen turns each entry into a Rust struct or
//! enum, synthesizing named types for inline objects and tuple arrays.
//!
//! ## Features
//!
//! - **Structs and enums** - serde attributes keep the original property names
//! - **Recursive models** - object and tuple fields are boxed
//! - **Synthetic types** - inline objects and tuples become named types
//!   emitted before their users
//! - **Customizable** - naming conventions and rendering presets
//! - **Package output** - `Cargo.toml` and `src/lib.rs` for the generated crate
//!
//! ## Quick Start
//!
//! ```ignore
//! use modelgen::prelude::*;
//!
//! let input = parse_input_model(json)?;
//! let generator = RustFileGenerator::new(RustOptions::default().with_initializer(true));
//! generator.generate_to_files(&input, "generated")?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Input model types, loading and case conversion
//! - [`codegen`] - Rust rendering, naming, presets and file output

pub mod prelude;

/// Input model types and loading.
pub mod schema {
    pub use modelgen_schema::*;
}

/// Rust code generation.
pub mod codegen {
    pub use modelgen_codegen::*;
}
