//! Enum rendering for literal sets and type unions.

use crate::naming::is_identifier_start;
use crate::options::RustOptions;
use crate::output::{Dependencies, RenderOutput};
use crate::preset::{EnumMember, RenderedVariant, VariantArgs};
use crate::rust::types::{DYNAMIC_VALUE, FieldShape, MAP_TYPE, TypeMapper};
use crate::rust::{TAGGED_ENUM_DERIVE, UNIT_ENUM_DERIVE, indent, push_doc_lines};
use modelgen_schema::{InputModel, ModelNode, SchemaType, to_pascal_case};
use serde_json::Value;
use std::collections::HashSet;

/// Renders an enum model.
///
/// Literals that all share one scalar type become unit variants renamed to
/// the literal. Anything else becomes a tagged enum whose variants are keyed
/// by position and carry the literal's type as payload.
pub struct EnumRenderer<'a> {
    mapper: TypeMapper<'a>,
    name: String,
}

impl<'a> EnumRenderer<'a> {
    /// Creates a renderer for `model`, named after its identifier.
    #[must_use]
    pub fn new(options: &'a RustOptions, input: &'a InputModel, model: &'a ModelNode) -> Self {
        let mapper = TypeMapper::new(options, input, model);
        let name = mapper.owner_name().to_string();
        Self { mapper, name }
    }

    /// Emitted type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Model being rendered.
    #[must_use]
    pub fn model(&self) -> &'a ModelNode {
        self.mapper.model()
    }

    /// Type mapper for this model.
    #[must_use]
    pub fn mapper(&self) -> &TypeMapper<'a> {
        &self.mapper
    }

    /// Members in declaration order: literals if any, otherwise the
    /// concrete types of the union.
    #[must_use]
    pub fn members(&self) -> Vec<EnumMember<'a>> {
        let model = self.model();
        match &model.enum_values {
            Some(values) if !values.is_empty() => values.iter().map(EnumMember::Literal).collect(),
            _ => model
                .schema_type
                .iter()
                .flat_map(|t| t.concrete_types())
                .map(EnumMember::Type)
                .collect(),
        }
    }

    /// True when every literal is a string, every literal a number, or
    /// every literal a boolean.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        let Some(values) = self.model().enum_values.as_ref().filter(|v| !v.is_empty()) else {
            return false;
        };
        let first = scalar_kind(&values[0]);
        first.is_some() && values.iter().all(|v| scalar_kind(v) == first)
    }

    /// Renders the enum and, if enabled, its `Default` impl.
    #[must_use]
    pub fn render(&self) -> RenderOutput<'a> {
        let options = self.mapper.options();
        let preset = &options.presets.enums;
        let uniform = self.is_uniform();

        let mut variants: Vec<RenderedVariant> = self
            .members()
            .into_iter()
            .enumerate()
            .map(|(index, member)| {
                preset.variant(
                    self,
                    &VariantArgs {
                        index,
                        member,
                        uniform,
                    },
                )
            })
            .collect();
        dedup_variant_names(&mut variants);

        let derive = if variants.iter().all(|v| v.payload.is_none()) {
            UNIT_ENUM_DERIVE
        } else {
            TAGGED_ENUM_DERIVE
        };

        let mut output = String::new();
        output.push_str(&format!(
            "/// {} enum of type: {}\n",
            self.name,
            self.type_description()
        ));
        push_doc_lines(&mut output, self.model().description.as_deref());
        output.push_str(derive);
        output.push('\n');
        output.push_str(&format!("pub enum {} {{\n", self.name));
        for variant in &variants {
            for attribute in &variant.attributes {
                output.push_str(&indent(attribute, 1));
                output.push('\n');
            }
            output.push_str(&format!("    {},\n", variant.declaration()));
        }
        output.push('}');

        let additional = preset.additional_content(self);
        if !additional.is_empty() {
            output.push_str("\n\n");
            output.push_str(&additional);
        }

        if options.render_defaults {
            let default = variants
                .iter()
                .find(|v| v.is_default)
                .or_else(|| variants.first());
            if let Some(variant) = default {
                output.push_str("\n\n");
                output.push_str(&self.render_default_implementation(variant));
            }
        }

        let file_name = format!("src/{}.rs", self.mapper.name_module(Some(&self.name)));
        RenderOutput::new(output, self.name.clone(), file_name, Dependencies::new())
    }

    fn render_default_implementation(&self, variant: &RenderedVariant) -> String {
        format!(
            "impl Default for {} {{\n    fn default() -> Self {{\n        {}\n    }}\n}}",
            self.name,
            variant.constructor()
        )
    }

    /// Type named in the enum's doc comment.
    #[must_use]
    pub fn type_description(&self) -> String {
        match &self.model().schema_type {
            Some(SchemaType::Single(t)) => FieldShape::from_type_name(t)
                .scalar_type()
                .map_or_else(|| t.clone(), str::to_string),
            Some(SchemaType::Multiple(types)) => format!("[{}]", types.join(",")),
            None => DYNAMIC_VALUE.to_string(),
        }
    }

    /// Default variant for a member.
    #[must_use]
    pub fn default_variant(&self, args: &VariantArgs<'_>) -> RenderedVariant {
        match args.member {
            EnumMember::Literal(value) if args.uniform => self.unit_variant(value),
            EnumMember::Literal(value) => self.literal_payload_variant(args.index, value),
            EnumMember::Type(type_name) => type_payload_variant(args.index, type_name),
        }
    }

    fn unit_variant(&self, value: &Value) -> RenderedVariant {
        let literal = literal_text(value);
        let name = if self.model().concrete_type() == Some("string") {
            self.valid_variant_name(to_pascal_case(&literal), &literal)
        } else {
            self.mapper.name_enum_member(Some(&literal))
        };
        RenderedVariant {
            attributes: vec![format!("#[serde(rename = {literal:?})]")],
            name,
            payload: None,
            default_value: None,
            is_default: self.is_default_literal(value),
        }
    }

    fn literal_payload_variant(&self, index: usize, value: &Value) -> RenderedVariant {
        let (name, payload, default_value) = match value {
            Value::String(s) => (
                self.valid_variant_name(to_pascal_case(s), s),
                Some("String".to_string()),
                Some(format!("String::from({s:?})")),
            ),
            Value::Number(n) => (
                "F64".to_string(),
                Some("f64".to_string()),
                n.as_f64().map(|f| format!("{f:?}")),
            ),
            Value::Bool(b) => ("Bool".to_string(), Some("bool".to_string()), Some(b.to_string())),
            Value::Object(_) => (
                "HashMap".to_string(),
                Some(format!("{MAP_TYPE}<String, {DYNAMIC_VALUE}>")),
                Some(format!("{MAP_TYPE}::new()")),
            ),
            Value::Array(_) => (
                "Array".to_string(),
                Some(format!("Vec<{DYNAMIC_VALUE}>")),
                Some("Vec::new()".to_string()),
            ),
            Value::Null => ("Null".to_string(), None, None),
        };
        RenderedVariant {
            attributes: vec![format!("#[serde(rename = \"{index}\")]")],
            name,
            payload,
            default_value,
            is_default: self.is_default_literal(value),
        }
    }

    /// Uses `candidate` unless it is not a usable identifier, in which case
    /// the literal goes through the enum member naming instead.
    fn valid_variant_name(&self, candidate: String, literal: &str) -> String {
        let unusable = !is_identifier_start(&candidate)
            || (self.mapper.options().reserved_keyword)(&candidate);
        if unusable {
            self.mapper.name_enum_member(Some(literal))
        } else {
            candidate
        }
    }

    fn is_default_literal(&self, value: &Value) -> bool {
        self.model().default.as_ref() == Some(value)
    }
}

fn type_payload_variant(index: usize, type_name: &str) -> RenderedVariant {
    let shape = FieldShape::from_type_name(type_name);
    let (name, payload) = match (shape, shape.scalar_type()) {
        (_, Some(scalar)) => (to_pascal_case(scalar), scalar.to_string()),
        (FieldShape::Object, _) => (
            "HashMap".to_string(),
            format!("{MAP_TYPE}<String, {DYNAMIC_VALUE}>"),
        ),
        (FieldShape::Array, _) => ("Array".to_string(), format!("Vec<{DYNAMIC_VALUE}>")),
        _ => (to_pascal_case(type_name), DYNAMIC_VALUE.to_string()),
    };
    RenderedVariant {
        attributes: vec![format!("#[serde(rename = \"{index}\")]")],
        name,
        payload: Some(payload),
        default_value: None,
        is_default: false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScalarKind {
    String,
    Number,
    Bool,
}

fn scalar_kind(value: &Value) -> Option<ScalarKind> {
    match value {
        Value::String(_) => Some(ScalarKind::String),
        Value::Number(_) => Some(ScalarKind::Number),
        Value::Bool(_) => Some(ScalarKind::Bool),
        _ => None,
    }
}

fn literal_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Appends the member position to any variant name seen before.
fn dedup_variant_names(variants: &mut [RenderedVariant]) {
    let mut seen = HashSet::new();
    for (index, variant) in variants.iter_mut().enumerate() {
        if !seen.insert(variant.name.clone()) {
            variant.name = format!("{}{index}", variant.name);
            seen.insert(variant.name.clone());
        }
    }
}
