//! Schema shape to Rust type mapping.

use crate::keywords::{unstable_field_warning, unstable_polymorphic_warning};
use crate::naming::NamingContext;
use crate::options::RustOptions;
use crate::output::{Dependencies, DependencyKind, RustDependency};
use modelgen_schema::{InputModel, Items, ModelKind, ModelNode};

/// Type used wherever a shape cannot be expressed statically.
pub const DYNAMIC_VALUE: &str = "serde_json::Value";

/// Map type used for additional and pattern properties.
pub const MAP_TYPE: &str = "std::collections::HashMap";

/// Structural category of a field, used to pick its Rust type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldShape {
    /// `$ref` to a registry model.
    Reference,
    /// `string`.
    String,
    /// `integer` or `int32`.
    Integer,
    /// `int64` or `long`.
    Long,
    /// `number`.
    Number,
    /// `boolean`.
    Boolean,
    /// `array`.
    Array,
    /// `object`.
    Object,
    /// Value schema of an additional or pattern properties map.
    AdditionalProperty,
    /// Several concrete types at once.
    Union,
    /// Anything else.
    Unknown,
}

impl FieldShape {
    /// Classifies a field schema.
    ///
    /// Never returns [`FieldShape::AdditionalProperty`]; callers pass that
    /// shape explicitly for map values.
    #[must_use]
    pub fn of(node: &ModelNode) -> Self {
        if node.reference.is_some() {
            return Self::Reference;
        }
        if node.kind() == ModelKind::Union {
            return Self::Union;
        }
        match node.concrete_type() {
            Some(t) => Self::from_type_name(t),
            None if node.properties.is_some() => Self::Object,
            None => Self::Unknown,
        }
    }

    /// Classifies a schema type name.
    #[must_use]
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "string" => Self::String,
            "integer" | "int32" => Self::Integer,
            "int64" | "long" => Self::Long,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "array" => Self::Array,
            "object" => Self::Object,
            _ => Self::Unknown,
        }
    }

    /// Rust type for scalar shapes.
    #[must_use]
    pub fn scalar_type(self) -> Option<&'static str> {
        match self {
            Self::String => Some("String"),
            Self::Integer => Some("i32"),
            Self::Long => Some("i64"),
            Self::Number => Some("f64"),
            Self::Boolean => Some("bool"),
            _ => None,
        }
    }
}

/// Maps field schemas to Rust type expressions for one owning model.
///
/// The mapper is stateless: discovered dependencies go into a caller-owned
/// [`Dependencies`] accumulator.
#[derive(Clone)]
pub struct TypeMapper<'a> {
    options: &'a RustOptions,
    input: &'a InputModel,
    model: &'a ModelNode,
    owner_name: String,
}

impl<'a> TypeMapper<'a> {
    /// Creates a mapper for fields of `model`.
    #[must_use]
    pub fn new(options: &'a RustOptions, input: &'a InputModel, model: &'a ModelNode) -> Self {
        let mut mapper = Self {
            options,
            input,
            model,
            owner_name: String::new(),
        };
        mapper.owner_name = mapper.name_type(model.id.as_deref());
        mapper
    }

    /// Sets the rendered name of the owning type.
    #[must_use]
    pub fn with_owner_name(mut self, owner_name: impl Into<String>) -> Self {
        self.owner_name = owner_name.into();
        self
    }

    /// Rendered name of the owning type.
    #[must_use]
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// Generator options.
    #[must_use]
    pub fn options(&self) -> &'a RustOptions {
        self.options
    }

    /// Input registry.
    #[must_use]
    pub fn input(&self) -> &'a InputModel {
        self.input
    }

    /// Owning model.
    #[must_use]
    pub fn model(&self) -> &'a ModelNode {
        self.model
    }

    fn context(&self, model: &'a ModelNode, field: Option<&'a ModelNode>) -> NamingContext<'a> {
        NamingContext::new(model, self.input, self.options.reserved_keyword).with_field(field)
    }

    /// Type name in the context of the owning model.
    #[must_use]
    pub fn name_type(&self, name: Option<&str>) -> String {
        self.name_type_in(name, self.model)
    }

    /// Type name in the context of `model`.
    #[must_use]
    pub fn name_type_in(&self, name: Option<&str>, model: &'a ModelNode) -> String {
        self.options
            .naming
            .type_name(name, &self.context(model, None))
    }

    /// Field name.
    #[must_use]
    pub fn name_field(&self, name: Option<&str>, field: Option<&'a ModelNode>) -> String {
        self.options
            .naming
            .field_name(name, &self.context(self.model, field))
    }

    /// Module name.
    #[must_use]
    pub fn name_module(&self, name: Option<&str>) -> String {
        self.options
            .naming
            .module_name(name, &self.context(self.model, None))
    }

    /// Enum variant name for a literal.
    #[must_use]
    pub fn name_enum_member(&self, name: Option<&str>) -> String {
        self.options
            .naming
            .enum_member(name, &self.context(self.model, None))
    }

    /// Name of the additional properties value type.
    #[must_use]
    pub fn name_additional_property_type(&self) -> String {
        self.options
            .naming
            .additional_property_type(&self.context(self.model, None))
    }

    /// Name of the tuple struct synthesized for `original_field_name`.
    #[must_use]
    pub fn name_tuple_type(&self, original_field_name: &str) -> String {
        format!(
            "{}{}",
            self.owner_name,
            self.name_type(Some(original_field_name))
        )
    }

    /// Name of the struct synthesized for an inline object field.
    ///
    /// The field name alone is used unless the owner is itself synthetic, or
    /// the plain name is already taken by the owner or by a registry model.
    /// Those cases get the owner's name as a prefix, like tuple types.
    #[must_use]
    pub fn name_struct_type(&self, original_field_name: &str) -> String {
        let plain = self.name_type(Some(original_field_name));
        if plain.is_empty() {
            return plain;
        }
        let nested = self.model.id.is_none();
        if nested || plain == self.owner_name || self.names_registry_model(&plain) {
            return format!("{}{plain}", self.owner_name);
        }
        plain
    }

    fn names_registry_model(&self, name: &str) -> bool {
        self.input
            .models()
            .any(|model| self.name_type_in(model.id.as_deref(), model) == name)
    }

    /// Returns true if the owning model lists the field as required, either
    /// by its original name or by its converted name.
    #[must_use]
    pub fn is_field_required(&self, original_field_name: &str) -> bool {
        self.model.is_required(original_field_name)
            || self
                .model
                .required
                .iter()
                .any(|r| self.name_field(Some(r), None) == original_field_name)
    }

    /// Rust type for a field, wrapped in `Option` unless required.
    pub fn render_field_type(
        &self,
        node: &'a ModelNode,
        original_field_name: &str,
        required: bool,
        deps: &mut Dependencies<'a>,
    ) -> String {
        let rust_type = self.map_type(FieldShape::of(node), node, original_field_name, deps);
        if required {
            rust_type
        } else {
            format!("Option<{rust_type}>")
        }
    }

    /// Rust type for `node` classified as `shape`.
    pub fn map_type(
        &self,
        shape: FieldShape,
        node: &'a ModelNode,
        original_field_name: &str,
        deps: &mut Dependencies<'a>,
    ) -> String {
        if let Some(scalar) = shape.scalar_type() {
            return scalar.to_string();
        }
        match shape {
            FieldShape::Reference => self.reference_type(node, original_field_name, deps),
            FieldShape::Array => self.array_type(node, original_field_name, deps),
            FieldShape::Object => self.object_type(node, original_field_name, deps),
            FieldShape::AdditionalProperty => {
                self.additional_property_type(node, original_field_name, deps)
            }
            FieldShape::Union => {
                tracing::warn!("{}", unstable_polymorphic_warning(original_field_name));
                DYNAMIC_VALUE.to_string()
            }
            _ => {
                tracing::warn!("{}", unstable_field_warning(original_field_name));
                DYNAMIC_VALUE.to_string()
            }
        }
    }

    /// Registry models that render to nothing (scalars and arrays) are
    /// inlined as their mapped type; everything else is referenced by name.
    fn reference_type(
        &self,
        node: &'a ModelNode,
        original_field_name: &str,
        deps: &mut Dependencies<'a>,
    ) -> String {
        let reference = node.reference.as_deref().unwrap_or_default();
        let Some(mut target) = self.input.get(reference) else {
            tracing::debug!("Reference '{}' is not in the input model", reference);
            let name = self.name_type(Some(reference));
            deps.add_name(name.clone());
            return format!("Box<crate::{name}>");
        };
        for _ in 0..self.input.len() {
            match target.reference.as_deref().and_then(|r| self.input.get(r)) {
                Some(next) => target = next,
                None => break,
            }
        }

        if target.reference.is_none()
            && matches!(target.kind(), ModelKind::Primitive | ModelKind::Array)
        {
            return self.map_type(FieldShape::of(target), target, original_field_name, deps);
        }
        let name = self.name_type_in(target.id.as_deref().or(Some(reference)), target);
        deps.add_name(name.clone());
        format!("Box<crate::{name}>")
    }

    fn array_type(
        &self,
        node: &'a ModelNode,
        original_field_name: &str,
        deps: &mut Dependencies<'a>,
    ) -> String {
        match &node.items {
            Some(Items::Single(item)) => {
                let inner = self.render_field_type(item, original_field_name, true, deps);
                format!("Vec<{inner}>")
            }
            Some(Items::Tuple(_)) => {
                let type_name = self.name_tuple_type(original_field_name);
                deps.add_module_dependency(RustDependency {
                    kind: DependencyKind::Tuple,
                    original_field_name: original_field_name.to_string(),
                    type_name: type_name.clone(),
                    field: node,
                    parent: self.model,
                    parent_name: self.owner_name.clone(),
                });
                deps.add_name(type_name.clone());
                format!("Box<{type_name}>")
            }
            None => {
                tracing::warn!("{}", unstable_field_warning(original_field_name));
                DYNAMIC_VALUE.to_string()
            }
        }
    }

    fn object_type(
        &self,
        node: &'a ModelNode,
        original_field_name: &str,
        deps: &mut Dependencies<'a>,
    ) -> String {
        if let Some(id) = node.id.as_deref().filter(|id| self.input.contains(id)) {
            let name = self.name_type_in(Some(id), node);
            deps.add_name(name.clone());
            return format!("Box<crate::{name}>");
        }

        let type_name = self.name_struct_type(original_field_name);
        if type_name.is_empty() {
            tracing::warn!("{}", unstable_field_warning(original_field_name));
            return DYNAMIC_VALUE.to_string();
        }
        deps.add_module_dependency(RustDependency {
            kind: DependencyKind::Struct,
            original_field_name: original_field_name.to_string(),
            type_name: type_name.clone(),
            field: node,
            parent: self.model,
            parent_name: self.owner_name.clone(),
        });
        deps.add_name(type_name.clone());
        format!("Box<crate::{type_name}>")
    }

    fn additional_property_type(
        &self,
        node: &'a ModelNode,
        original_field_name: &str,
        deps: &mut Dependencies<'a>,
    ) -> String {
        let value_type = match FieldShape::of(node) {
            FieldShape::Unknown if is_any(node) => DYNAMIC_VALUE.to_string(),
            shape @ (FieldShape::Union | FieldShape::Unknown) => {
                if shape == FieldShape::Union {
                    tracing::warn!("{}", unstable_polymorphic_warning(original_field_name));
                } else {
                    tracing::warn!("{}", unstable_field_warning(original_field_name));
                }
                DYNAMIC_VALUE.to_string()
            }
            shape => self.map_type(shape, node, original_field_name, deps),
        };
        format!("{MAP_TYPE}<String, {value_type}>")
    }
}

/// True for a schema that places no constraint on the value.
fn is_any(node: &ModelNode) -> bool {
    node.schema_type.is_none()
        && node.reference.is_none()
        && node.properties.is_none()
        && node.items.is_none()
        && node.enum_values.is_none()
}
