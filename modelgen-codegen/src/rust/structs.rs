//! Struct rendering for object models.

use crate::naming::unique_property_name;
use crate::options::RustOptions;
use crate::output::{Dependencies, RenderOutput};
use crate::preset::{FieldArgs, FieldKind};
use crate::rust::types::{FieldShape, TypeMapper};
use crate::rust::{STRUCT_DERIVE, indent, push_doc_lines};
use modelgen_schema::{AdditionalProperties, InputModel, ModelNode};
use std::sync::LazyLock;

/// Value schema of `additionalProperties: true`.
static ANY_VALUE: LazyLock<ModelNode> = LazyLock::new(ModelNode::default);

/// One rendered struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
    /// Field name before any naming convention.
    pub original_name: String,
    /// Field identifier.
    pub name: String,
    /// Field type.
    pub rust_type: String,
    /// Attribute line above the field.
    pub field_macro: String,
    /// Whether the field is required.
    pub required: bool,
}

impl RenderedField {
    fn declaration(&self) -> String {
        let mut out = String::new();
        if !self.field_macro.is_empty() {
            out.push_str(&self.field_macro);
            out.push('\n');
        }
        out.push_str(&format!("pub {}: {},", self.name, self.rust_type));
        out
    }
}

/// Renders an object model as a serde struct.
pub struct StructRenderer<'a> {
    mapper: TypeMapper<'a>,
    name: String,
}

impl<'a> StructRenderer<'a> {
    /// Creates a renderer for `model`, named after its identifier.
    #[must_use]
    pub fn new(options: &'a RustOptions, input: &'a InputModel, model: &'a ModelNode) -> Self {
        let mapper = TypeMapper::new(options, input, model);
        let name = mapper.owner_name().to_string();
        Self { mapper, name }
    }

    /// Overrides the emitted type name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self.mapper = self.mapper.with_owner_name(self.name.clone());
        self
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

    /// Renders the struct and, if enabled, its constructor.
    #[must_use]
    pub fn render(&self) -> RenderOutput<'a> {
        let mut deps = Dependencies::new();
        let fields = self.render_fields(&mut deps);
        let preset = &self.mapper.options().presets.structs;

        let mut body: Vec<String> = fields.iter().map(RenderedField::declaration).collect();
        let additional = preset.additional_content(self);
        if !additional.is_empty() {
            body.push(additional);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "/// {} represents a {} model.\n",
            self.name, self.name
        ));
        push_doc_lines(&mut output, self.model().description.as_deref());
        output.push_str(STRUCT_DERIVE);
        output.push('\n');
        output.push_str(&format!("pub struct {} {{\n", self.name));
        for content in &body {
            output.push_str(&indent(content, 1));
            output.push('\n');
        }
        output.push('}');

        if self.mapper.options().render_initializer {
            output.push_str("\n\n");
            output.push_str(&self.render_new_implementation(&fields));
        }

        let file_name = format!("src/{}.rs", self.mapper.name_module(Some(&self.name)));
        RenderOutput::new(output, self.name.clone(), file_name, deps)
    }

    /// Renders every field: declared properties first, then the additional
    /// properties map, then one map per property pattern.
    pub fn render_fields(&self, deps: &mut Dependencies<'a>) -> Vec<RenderedField> {
        let model = self.model();
        let mut fields = Vec::new();

        if let Some(properties) = &model.properties {
            for (name, field) in properties {
                let args = FieldArgs {
                    field_name: name.clone(),
                    field,
                    kind: FieldKind::Property,
                    required: self.mapper.is_field_required(name),
                };
                fields.push(self.render_field(&args, deps));
            }
        }

        let additional: Option<&'a ModelNode> = match &model.additional_properties {
            Some(AdditionalProperties::Schema(schema)) => Some(schema.as_ref()),
            Some(AdditionalProperties::Allowed(true)) => Some(&*ANY_VALUE),
            Some(AdditionalProperties::Allowed(false)) | None => None,
        };
        if let Some(field) = additional {
            let args = FieldArgs {
                field_name: unique_property_name(model, "additionalProperties"),
                field,
                kind: FieldKind::AdditionalProperties,
                required: false,
            };
            fields.push(self.render_field(&args, deps));
        }

        if let Some(patterns) = &model.pattern_properties {
            for (pattern, field) in patterns {
                let args = FieldArgs {
                    field_name: unique_property_name(model, &format!("{pattern}PatternProperties")),
                    field,
                    kind: FieldKind::PatternProperties,
                    required: false,
                };
                fields.push(self.render_field(&args, deps));
            }
        }

        fields
    }

    fn render_field(&self, args: &FieldArgs<'a>, deps: &mut Dependencies<'a>) -> RenderedField {
        let preset = &self.mapper.options().presets.structs;
        RenderedField {
            original_name: args.field_name.clone(),
            name: preset.field_name(self, args),
            rust_type: preset.field_type(self, args, deps),
            field_macro: preset.field_macro(self, args),
            required: args.required,
        }
    }

    /// Field identifier under the configured naming convention.
    #[must_use]
    pub fn default_field_name(&self, args: &FieldArgs<'_>) -> String {
        self.mapper.name_field(Some(&args.field_name), None)
    }

    /// Field type under the default mapping.
    pub fn default_field_type(&self, args: &FieldArgs<'a>, deps: &mut Dependencies<'a>) -> String {
        match args.kind {
            FieldKind::Property => {
                self.mapper
                    .render_field_type(args.field, &args.field_name, args.required, deps)
            }
            FieldKind::AdditionalProperties | FieldKind::PatternProperties => {
                let value_name = match args.kind {
                    FieldKind::AdditionalProperties => {
                        let name = self.mapper.name_additional_property_type();
                        if name.is_empty() {
                            args.field_name.clone()
                        } else {
                            name
                        }
                    }
                    _ => args.field_name.clone(),
                };
                let map = self.mapper.map_type(
                    FieldShape::AdditionalProperty,
                    args.field,
                    &value_name,
                    deps,
                );
                format!("Option<{map}>")
            }
        }
    }

    /// serde attribute preserving the original property name.
    #[must_use]
    pub fn default_field_macro(&self, args: &FieldArgs<'_>) -> String {
        if args.required {
            format!("#[serde(rename = {:?})]", args.field_name)
        } else {
            format!(
                "#[serde(rename = {:?}, skip_serializing_if = \"Option::is_none\")]",
                args.field_name
            )
        }
    }

    /// Renders `impl Name { pub fn new(...) -> Name }` taking every required
    /// field, unboxed.
    #[must_use]
    pub fn render_new_implementation(&self, fields: &[RenderedField]) -> String {
        let params: Vec<String> = fields
            .iter()
            .filter(|f| f.required)
            .map(|f| format!("{}: {}", f.name, unboxed(&f.rust_type).unwrap_or(&f.rust_type)))
            .collect();

        let mut out = String::new();
        out.push_str(&format!("impl {} {{\n", self.name));
        out.push_str(&format!(
            "    pub fn new({}) -> {} {{\n",
            params.join(", "),
            self.name
        ));
        out.push_str(&format!("        {} {{\n", self.name));
        for field in fields {
            let init = if !field.required {
                format!("{}: None,", field.name)
            } else if unboxed(&field.rust_type).is_some() {
                format!("{0}: Box::new({0}),", field.name)
            } else {
                format!("{},", field.name)
            };
            out.push_str(&format!("            {init}\n"));
        }
        out.push_str("        }\n");
        out.push_str("    }\n");
        out.push('}');
        out
    }
}

/// Inner type of `Box<T>`.
fn unboxed(rust_type: &str) -> Option<&str> {
    rust_type.strip_prefix("Box<")?.strip_suffix('>')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::DependencyKind;
    use crate::preset::{RustPreset, StructPreset};
    use serde_json::json;

    fn node(value: serde_json::Value) -> ModelNode {
        serde_json::from_value(value).expect("Failed to parse node")
    }

    fn address() -> ModelNode {
        node(json!({
            "$id": "_address",
            "type": "object",
            "properties": {
                "street_name": { "type": "string" },
                "city": { "type": "string", "description": "City description" },
                "house_number": { "type": "number" },
                "marriage": { "type": "boolean", "description": "Status if marriage live in given house" },
                "members": { "type": ["string", "number", "boolean"] },
                "tuple_type": {
                    "type": "array",
                    "items": [{ "type": "string" }, { "type": "number" }]
                },
                "array_type": {
                    "type": "array",
                    "items": { "type": "string" }
                }
            },
            "required": ["street_name", "city", "house_number", "array_type"]
        }))
    }

    #[test]
    fn test_render_struct() {
        let options = RustOptions::default();
        let input = InputModel::new();
        let model = address();
        let output = StructRenderer::new(&options, &input, &model).render();

        let expected = r#"/// Address represents a Address model.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "street_name")]
    pub street_name: String,
    #[serde(rename = "city")]
    pub city: String,
    #[serde(rename = "house_number")]
    pub house_number: f64,
    #[serde(rename = "marriage", skip_serializing_if = "Option::is_none")]
    pub marriage: Option<bool>,
    #[serde(rename = "members", skip_serializing_if = "Option::is_none")]
    pub members: Option<serde_json::Value>,
    #[serde(rename = "tuple_type", skip_serializing_if = "Option::is_none")]
    pub tuple_type: Option<Box<AddressTupleType>>,
    #[serde(rename = "array_type")]
    pub array_type: Vec<String>,
}"#;
        assert_eq!(output.result, expected);
        assert_eq!(output.rendered_name, "Address");
        assert_eq!(output.file_name, "src/address.rs");
        assert_eq!(output.dependencies, vec!["AddressTupleType".to_string()]);
        assert_eq!(output.module_dependencies.len(), 1);
        assert_eq!(output.module_dependencies[0].kind, DependencyKind::Tuple);
        assert_eq!(output.module_dependencies[0].type_name, "AddressTupleType");
    }

    #[test]
    fn test_render_struct_renames_camel_case() {
        let options = RustOptions::default();
        let input = InputModel::new();
        let model = node(json!({
            "$id": "Address",
            "type": "object",
            "properties": { "streetName": { "type": "string" } },
            "required": ["streetName"]
        }));
        let output = StructRenderer::new(&options, &input, &model).render();

        assert!(output.result.contains("#[serde(rename = \"streetName\")]\n    pub street_name: String,"));
    }

    #[test]
    fn test_render_struct_reserved_field() {
        let options = RustOptions::default();
        let input = InputModel::new();
        let model = node(json!({
            "$id": "Address",
            "type": "object",
            "properties": { "union": { "type": "string" } }
        }));
        let output = StructRenderer::new(&options, &input, &model).render();

        assert!(output.result.contains("pub reserved_union: Option<String>,"));
        assert!(output.result.contains("#[serde(rename = \"union\""));
    }

    #[test]
    fn test_render_struct_reserved_name() {
        let options = RustOptions::default();
        let input = InputModel::new();
        let model = node(json!({ "$id": "self", "type": "object", "properties": {} }));
        let output = StructRenderer::new(&options, &input, &model).render();

        assert_eq!(output.rendered_name, "ReservedSelf");
        assert!(output.result.contains("pub struct ReservedSelf {\n}"));
        assert_eq!(output.file_name, "src/reserved_self.rs");
    }

    #[test]
    fn test_render_struct_additional_and_pattern_properties() {
        let options = RustOptions::default();
        let input = InputModel::new();
        let model = node(json!({
            "$id": "Address",
            "type": "object",
            "properties": { "city": { "type": "string" } },
            "additionalProperties": { "type": "string" },
            "patternProperties": { "^S(.?*)test&": { "type": "string" } }
        }));
        let output = StructRenderer::new(&options, &input, &model).render();

        assert!(output.result.contains(
            "    #[serde(rename = \"additionalProperties\", skip_serializing_if = \"Option::is_none\")]\n    pub additional_properties: Option<std::collections::HashMap<String, String>>,"
        ));
        assert!(output.result.contains(
            "pub s_test_pattern_properties: Option<std::collections::HashMap<String, String>>,"
        ));
    }

    #[test]
    fn test_render_struct_additional_properties_flags() {
        let options = RustOptions::default();
        let input = InputModel::new();

        let open = node(json!({ "$id": "Open", "type": "object", "additionalProperties": true }));
        let output = StructRenderer::new(&options, &input, &open).render();
        assert!(output.result.contains(
            "pub additional_properties: Option<std::collections::HashMap<String, serde_json::Value>>,"
        ));

        let closed = node(json!({ "$id": "Closed", "type": "object", "additionalProperties": false }));
        let output = StructRenderer::new(&options, &input, &closed).render();
        assert!(!output.result.contains("additional_properties"));
    }

    #[test]
    fn test_render_struct_reference_field() {
        let options = RustOptions::default();
        let input = InputModel::from_models(vec![node(json!({
            "$id": "Person",
            "type": "object",
            "properties": {}
        }))])
        .expect("Failed to build input");
        let model = node(json!({
            "$id": "Team",
            "type": "object",
            "properties": {
                "lead": { "$ref": "Person" },
                "members": { "type": "array", "items": { "$ref": "Person" } }
            },
            "required": ["lead"]
        }));
        let output = StructRenderer::new(&options, &input, &model).render();

        assert!(output.result.contains("pub lead: Box<crate::Person>,"));
        assert!(output.result.contains("pub members: Option<Vec<Box<crate::Person>>>,"));
        assert_eq!(output.dependencies, vec!["Person".to_string()]);
        assert!(output.module_dependencies.is_empty());
    }

    #[test]
    fn test_render_struct_with_initializer() {
        let options = RustOptions::default().with_initializer(true);
        let input = InputModel::from_models(vec![node(json!({ "$id": "Person", "type": "object" }))])
            .expect("Failed to build input");
        let model = node(json!({
            "$id": "Team",
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "lead": { "$ref": "Person" },
                "motto": { "type": "string" }
            },
            "required": ["name", "lead"]
        }));
        let output = StructRenderer::new(&options, &input, &model).render();

        let expected = r#"impl Team {
    pub fn new(name: String, lead: crate::Person) -> Team {
        Team {
            name,
            lead: Box::new(lead),
            motto: None,
        }
    }
}"#;
        assert!(output.result.ends_with(expected), "got:\n{}", output.result);
    }

    #[test]
    fn test_render_struct_description() {
        let options = RustOptions::default();
        let input = InputModel::new();
        let model = node(json!({
            "$id": "Pet",
            "type": "object",
            "description": "A pet.\nLives indoors.",
            "properties": {}
        }));
        let output = StructRenderer::new(&options, &input, &model).render();

        assert!(output.result.starts_with(
            "/// Pet represents a Pet model.\n///\n/// A pet.\n/// Lives indoors.\n#[derive("
        ));
    }

    struct UppercaseMacro;

    impl StructPreset for UppercaseMacro {
        fn field_macro(&self, _renderer: &StructRenderer<'_>, args: &FieldArgs<'_>) -> String {
            format!("#[serde(rename = \"{}\")]", args.field_name.to_uppercase())
        }

        fn additional_content(&self, renderer: &StructRenderer<'_>) -> String {
            format!("// end of {}", renderer.name())
        }
    }

    #[test]
    fn test_render_struct_with_preset() {
        let options = RustOptions::default()
            .with_presets(RustPreset::default().with_struct_preset(UppercaseMacro));
        let input = InputModel::new();
        let model = node(json!({
            "$id": "Pet",
            "type": "object",
            "properties": { "name": { "type": "string" } }
        }));
        let output = StructRenderer::new(&options, &input, &model).render();

        assert!(output.result.contains("    #[serde(rename = \"NAME\")]\n    pub name: Option<String>,"));
        assert!(output.result.contains("    // end of Pet\n}"));
    }

    #[test]
    fn test_additional_properties_rename_avoids_declared_property() {
        let options = RustOptions::default();
        let input = InputModel::new();
        let model = node(json!({
            "$id": "Bag",
            "type": "object",
            "properties": { "additionalProperties": { "type": "string" } },
            "additionalProperties": { "type": "string" }
        }));
        let output = StructRenderer::new(&options, &input, &model).render();

        assert!(output.result.contains(
            "    #[serde(rename = \"additionalProperties\", skip_serializing_if = \"Option::is_none\")]\n    pub additional_properties: Option<String>,\n"
        ));
        assert!(output.result.contains(
            "    #[serde(rename = \"reserved_additionalProperties\", skip_serializing_if = \"Option::is_none\")]\n    pub reserved_additional_properties: Option<std::collections::HashMap<String, String>>,\n"
        ));
    }
}
