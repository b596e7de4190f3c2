//! Convenient re-exports for common usage.
//!
//! ```ignore
//! use modelgen::prelude::*;
//! ```

pub use modelgen_schema::{
    AdditionalProperties, InputModel, Items, ModelKind, ModelNode, ParseError, SchemaType,
    parse_document, parse_input_model,
};

pub use modelgen_codegen::{
    CodegenError, EnumPreset, NamingContext, NamingConvention, OutputModel, PackageFeature,
    PackageOptions, PackagePreset, RustFileGenerator, RustGenerator, RustNamingConvention,
    RustOptions, RustPreset, StructPreset, TuplePreset, generate_from_file, generate_from_json,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_end_to_end() {
        let input = parse_input_model(
            r#"{ "Pet": { "type": "object", "properties": { "name": { "type": "string" } } } }"#,
        )
        .expect("Failed to parse");
        let models = RustGenerator::new(RustOptions::default()).generate_complete_models(&input);
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].model_name, "Pet");
    }
}
