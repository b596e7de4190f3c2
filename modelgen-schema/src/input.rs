//! Input model registry.
//!
//! The registry is the complete set of models discovered for one document,
//! keyed by identifier. It is built once and then only read: every render
//! call receives it whole for `$ref` resolution.

use crate::error::ParseError;
use crate::model::{AdditionalProperties, Items, ModelNode};
use indexmap::IndexMap;
use serde_json::Value;

/// Immutable mapping from identifier to [`ModelNode`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputModel {
    models: IndexMap<String, ModelNode>,
}

impl InputModel {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from models that each carry an identifier.
    ///
    /// # Errors
    /// Returns `ParseError` if a model has no `$id` or an identifier repeats.
    pub fn from_models<I>(models: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = ModelNode>,
    {
        let mut registry = IndexMap::new();
        for (index, model) in models.into_iter().enumerate() {
            let id = model
                .id
                .clone()
                .ok_or_else(|| ParseError::missing_id(format!("models[{index}]")))?;
            if registry.contains_key(&id) {
                return Err(ParseError::duplicate(id));
            }
            registry.insert(id, model);
        }
        Ok(Self { models: registry })
    }

    /// Builds a registry from a single root document.
    ///
    /// The root and every nested node carrying its own `$id` become registry
    /// entries; the nested occurrences are replaced by `$ref` nodes pointing
    /// at them. Nodes without `$id` stay inline as anonymous shapes.
    ///
    /// # Errors
    /// Returns `ParseError` if the root has no `$id`.
    pub fn from_document(root: ModelNode) -> Result<Self, ParseError> {
        let id = root.id.clone().ok_or_else(|| ParseError::missing_id("#"))?;
        let mut registry = IndexMap::new();
        hoist(root, id, &mut registry);
        Ok(Self { models: registry })
    }

    /// Looks up a model by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ModelNode> {
        self.models.get(id)
    }

    /// Resolves the `$ref` of `node`, if it has one and the target exists.
    #[must_use]
    pub fn resolve_ref(&self, node: &ModelNode) -> Option<&ModelNode> {
        node.reference.as_deref().and_then(|r| self.get(r))
    }

    /// Returns true if a model with this identifier exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.models.contains_key(id)
    }

    /// Iterates over `(identifier, model)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelNode)> {
        self.models.iter().map(|(id, model)| (id.as_str(), model))
    }

    /// Iterates over models in insertion order.
    pub fn models(&self) -> impl Iterator<Item = &ModelNode> {
        self.models.values()
    }

    /// Iterates over identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Returns the number of models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns true if the registry holds no models.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Parses a registry object (`{ "<id>": <model>, ... }`).
///
/// A model without `$id` takes its key as identifier.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed, the top level is not an
/// object, or two entries declare the same identifier.
pub fn parse_input_model(json: &str) -> Result<InputModel, ParseError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Object(entries) = value else {
        return Err(ParseError::invalid_structure(
            "input model must be a JSON object keyed by model identifier",
        ));
    };

    let mut models = Vec::with_capacity(entries.len());
    for (key, entry) in entries {
        let mut model: ModelNode = serde_json::from_value(entry)?;
        if model.id.is_none() {
            model.id = Some(key);
        }
        models.push(model);
    }
    InputModel::from_models(models)
}

/// Parses a single root document and hoists nested identified models.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or the root has no `$id`.
pub fn parse_document(json: &str) -> Result<InputModel, ParseError> {
    let root: ModelNode = serde_json::from_str(json)?;
    InputModel::from_document(root)
}

fn hoist(mut node: ModelNode, id: String, registry: &mut IndexMap<String, ModelNode>) {
    // Reserve the slot first so parents precede their children and
    // self-references resolve to a `$ref`.
    registry.insert(id.clone(), ModelNode::default());
    hoist_children(&mut node, registry);
    registry.insert(id, node);
}

fn hoist_children(node: &mut ModelNode, registry: &mut IndexMap<String, ModelNode>) {
    if let Some(props) = node.properties.as_mut() {
        for child in props.values_mut() {
            hoist_child(child, registry);
        }
    }

    match node.items.as_mut() {
        Some(Items::Single(item)) => hoist_child(item, registry),
        Some(Items::Tuple(items)) => {
            for item in items {
                hoist_child(item, registry);
            }
        }
        None => {}
    }

    if let Some(AdditionalProperties::Schema(child)) = node.additional_properties.as_mut() {
        hoist_child(child, registry);
    }

    if let Some(patterns) = node.pattern_properties.as_mut() {
        for child in patterns.values_mut() {
            hoist_child(child, registry);
        }
    }
}

fn hoist_child(child: &mut ModelNode, registry: &mut IndexMap<String, ModelNode>) {
    let Some(id) = child.id.clone() else {
        hoist_children(child, registry);
        return;
    };

    let owned = std::mem::replace(child, ModelNode::reference_to(id.clone()));
    if !registry.contains_key(&id) {
        tracing::debug!("Hoisting nested model '{}' into registry", id);
        hoist(owned, id, registry);
    }
}
