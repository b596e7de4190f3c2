//! Model node definitions.
//!
//! A [`ModelNode`] is one schema-derived type description as produced by the
//! normalization pipeline. Nodes refer to each other through `$ref`, so the
//! model as a whole is a graph owned by an
//! [`InputModel`](crate::input::InputModel) rather than a tree.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One schema-derived type description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelNode {
    /// Identifier (`$id`).
    #[serde(rename = "$id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Reference target (`$ref`).
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Declared type or type list.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    /// Declared properties, in source order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, ModelNode>>,
    /// Array item schema(s).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,
    /// Schema for properties not listed in `properties`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties>,
    /// Schemas for properties matching a name pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_properties: Option<IndexMap<String, ModelNode>>,
    /// Literal values, possibly of mixed runtime type.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    /// Names of required properties.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Keywords from the source document without a dedicated field.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ModelNode {
    /// Creates a node that only references another model by identifier.
    #[must_use]
    pub fn reference_to(id: impl Into<String>) -> Self {
        Self {
            reference: Some(id.into()),
            ..Self::default()
        }
    }

    /// Returns the coarse kind of this node.
    #[must_use]
    pub fn kind(&self) -> ModelKind {
        match self.concrete_type() {
            Some("object") => return ModelKind::Object,
            Some("array") => return ModelKind::Array,
            _ => {}
        }

        if self.enum_values.as_ref().is_some_and(|v| !v.is_empty()) {
            return ModelKind::Enum;
        }

        match &self.schema_type {
            Some(t) if t.concrete_types().count() > 1 => ModelKind::Union,
            None if self.properties.is_some() => ModelKind::Object,
            _ => ModelKind::Primitive,
        }
    }

    /// Returns the single concrete (non-`null`) type, if there is exactly one.
    #[must_use]
    pub fn concrete_type(&self) -> Option<&str> {
        let schema_type = self.schema_type.as_ref()?;
        let mut types = schema_type.concrete_types();
        let first = types.next()?;
        if types.next().is_some() {
            return None;
        }
        Some(first)
    }

    /// Returns true if `name` is listed in `required`.
    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Returns true if a property with this name is declared.
    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.properties
            .as_ref()
            .is_some_and(|props| props.contains_key(name))
    }

    /// Returns true if `items` is a heterogeneous sequence.
    #[must_use]
    pub fn is_tuple(&self) -> bool {
        matches!(self.items, Some(Items::Tuple(_)))
    }

    /// Returns true if `items` is a single uniform schema.
    #[must_use]
    pub fn is_vec(&self) -> bool {
        matches!(self.items, Some(Items::Single(_)))
    }
}

/// Declared type of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    /// A single type name.
    Single(String),
    /// A list of type names.
    Multiple(Vec<String>),
}

impl SchemaType {
    /// Iterates over every declared type name.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Self::Single(t) => std::slice::from_ref(t),
            Self::Multiple(ts) => ts,
        };
        slice.iter().map(String::as_str)
    }

    /// Iterates over declared type names other than `null`.
    pub fn concrete_types(&self) -> impl Iterator<Item = &str> {
        self.types().filter(|t| *t != "null")
    }

    /// Returns true if every declared type is the same.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        let mut types = self.types();
        match types.next() {
            Some(first) => types.all(|t| t == first),
            None => true,
        }
    }
}

/// Array item schema(s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Items {
    /// Fixed-size heterogeneous sequence.
    Tuple(Vec<ModelNode>),
    /// Uniform element schema.
    Single(Box<ModelNode>),
}

/// Value of `additionalProperties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `true` allows any value, `false` forbids extra properties.
    Allowed(bool),
    /// Extra properties must match this schema.
    Schema(Box<ModelNode>),
}

/// Coarse category of a [`ModelNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Record with named properties.
    Object,
    /// Uniform or tuple array.
    Array,
    /// Closed set of literal values.
    Enum,
    /// Several concrete types at once.
    Union,
    /// Scalar or unknown shape.
    Primitive,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: Value) -> ModelNode {
        serde_json::from_value(value).expect("Failed to parse node")
    }

    #[test]
    fn test_deserialize_keywords() {
        let model = node(json!({
            "$id": "_address",
            "type": "object",
            "properties": {
                "streetName": { "type": "string" },
                "coords": { "type": "array", "items": [{ "type": "number" }, { "type": "number" }] }
            },
            "required": ["streetName"],
            "additionalProperties": false,
            "format": "custom"
        }));

        assert_eq!(model.id.as_deref(), Some("_address"));
        assert_eq!(model.kind(), ModelKind::Object);
        assert!(model.is_required("streetName"));
        assert!(!model.is_required("coords"));
        assert_eq!(
            model.additional_properties,
            Some(AdditionalProperties::Allowed(false))
        );
        assert_eq!(model.extra.get("format"), Some(&json!("custom")));

        let props = model.properties.as_ref().expect("properties");
        let keys: Vec<&str> = props.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["streetName", "coords"]);
        assert!(props["coords"].is_tuple());
    }

    #[test]
    fn test_items_single_vs_tuple() {
        let vec_node = node(json!({ "type": "array", "items": { "type": "string" } }));
        assert!(vec_node.is_vec());
        assert!(!vec_node.is_tuple());

        let tuple_node = node(json!({ "type": "array", "items": [{ "type": "string" }] }));
        assert!(tuple_node.is_tuple());
    }

    #[test]
    fn test_additional_properties_schema() {
        let model = node(json!({ "type": "object", "additionalProperties": { "type": "string" } }));
        match model.additional_properties {
            Some(AdditionalProperties::Schema(ref inner)) => {
                assert_eq!(inner.concrete_type(), Some("string"));
            }
            ref other => panic!("unexpected additionalProperties: {other:?}"),
        }
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(node(json!({ "type": "array" })).kind(), ModelKind::Array);
        assert_eq!(
            node(json!({ "type": "string", "enum": ["a", "b"] })).kind(),
            ModelKind::Enum
        );
        assert_eq!(
            node(json!({ "type": ["string", "number"] })).kind(),
            ModelKind::Union
        );
        assert_eq!(node(json!({ "type": "string" })).kind(), ModelKind::Primitive);
        assert_eq!(
            node(json!({ "properties": { "a": { "type": "string" } } })).kind(),
            ModelKind::Object
        );
        assert_eq!(
            node(json!({ "type": ["object", "null"] })).kind(),
            ModelKind::Object
        );
    }

    #[test]
    fn test_concrete_type_ignores_null() {
        let model = node(json!({ "type": ["string", "null"] }));
        assert_eq!(model.concrete_type(), Some("string"));

        let union = node(json!({ "type": ["string", "integer"] }));
        assert_eq!(union.concrete_type(), None);
    }

    #[test]
    fn test_schema_type_uniform() {
        assert!(SchemaType::Single("string".into()).is_uniform());
        assert!(SchemaType::Multiple(vec!["string".into(), "string".into()]).is_uniform());
        assert!(!SchemaType::Multiple(vec!["string".into(), "number".into()]).is_uniform());
    }

    #[test]
    fn test_reference_to() {
        let model = ModelNode::reference_to("Person");
        assert_eq!(model.reference.as_deref(), Some("Person"));
        assert!(model.id.is_none());
        assert_eq!(model.kind(), ModelKind::Primitive);
    }
}
