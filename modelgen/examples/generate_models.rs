//! Example generating a Rust package from an input model.
//!
//! Run with: `cargo run --example generate_models -- [output_dir]`
//!
//! Set `RUST_LOG=debug` to see every file as it is written.

use modelgen::prelude::*;
use std::path::PathBuf;

const INPUT: &str = r#"{
    "Person": {
        "type": "object",
        "description": "Someone who owns pets.",
        "properties": {
            "name": { "type": "string" },
            "age": { "type": "integer" },
            "favoriteColor": { "$ref": "Color" },
            "pets": { "type": "array", "items": { "$ref": "Pet" } },
            "address": {
                "type": "object",
                "properties": {
                    "streetName": { "type": "string" },
                    "coordinates": {
                        "type": "array",
                        "items": [{ "type": "number" }, { "type": "number" }]
                    }
                },
                "required": ["streetName"]
            }
        },
        "required": ["name", "pets"],
        "additionalProperties": { "type": "string" }
    },
    "Pet": {
        "type": "object",
        "properties": {
            "kind": { "$ref": "Kind" },
            "owner": { "$ref": "Person" }
        },
        "required": ["kind"]
    },
    "Color": { "type": "string", "enum": ["red", "green", "blue"], "default": "green" },
    "Kind": { "enum": ["dog", 1, true] }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("modelgen-example"));

    let input = parse_input_model(INPUT)?;
    tracing::info!("Loaded {} input models", input.len());

    let options = RustOptions::default()
        .with_initializer(true)
        .with_defaults(true)
        .with_package(PackageOptions {
            name: "pet-models".to_string(),
            ..PackageOptions::default()
        });

    let models = RustFileGenerator::new(options).generate_to_files(&input, &output_dir)?;

    println!("Generated {} models into {}", models.len(), output_dir.display());
    for model in &models {
        println!("  - {} ({})", model.model_name, model.file_name);
    }
    if let Some(person) = models.iter().find(|m| m.model_name == "Person") {
        println!();
        println!("{}", person.result);
    }

    Ok(())
}
