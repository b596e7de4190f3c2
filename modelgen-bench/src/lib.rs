//! # Modelgen Bench
//!
//! Input model fixtures for benchmarking code generation.

use serde_json::{Map, Value, json};

/// Builds a registry of `count` object models.
///
/// Every model has scalar fields, a reference to the previous model, a tuple
/// field and an inline object, so each render exercises every branch of the
/// type mapping. Every tenth entry is a string enum instead.
#[must_use]
pub fn input_model_json(count: usize) -> String {
    let mut models = Map::with_capacity(count);
    for i in 0..count {
        let id = format!("Model{i}");
        let model = if i % 10 == 9 {
            json!({
                "$id": id,
                "type": "string",
                "enum": ["alpha", "beta", "gamma", "delta"]
            })
        } else {
            let previous = if i == 0 { id.clone() } else { format!("Model{}", i - 1) };
            json!({
                "$id": id,
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "count": { "type": "integer" },
                    "ratio": { "type": "number" },
                    "enabled": { "type": "boolean" },
                    "previous": { "$ref": previous },
                    "tags": { "type": "array", "items": { "type": "string" } },
                    "point": { "type": "array", "items": [{ "type": "number" }, { "type": "number" }] },
                    "details": {
                        "type": "object",
                        "properties": {
                            "note": { "type": "string" },
                            "pair": { "type": "array", "items": [{ "type": "string" }, { "type": "integer" }] }
                        }
                    }
                },
                "required": ["name", "count"],
                "additionalProperties": { "type": "string" }
            })
        };
        models.insert(format!("Model{i}"), model);
    }
    Value::Object(models).to_string()
}
