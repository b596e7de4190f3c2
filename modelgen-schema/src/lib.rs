//! # modelgen Schema
//!
//! Language-neutral model of schema-derived types.
//!
//! This crate provides:
//! - Model node definitions mirroring JSON-Schema keywords
//! - The immutable input model registry used for `$ref` resolution
//! - Loading of registries and single documents from JSON
//! - Case conversion helpers shared by code generators

pub mod error;
pub mod input;
pub mod model;
pub mod naming;

pub use error::ParseError;
pub use input::{InputModel, parse_document, parse_input_model};
pub use model::{AdditionalProperties, Items, ModelKind, ModelNode, SchemaType};
pub use naming::{replace_special_characters, to_pascal_case, to_snake_case};
