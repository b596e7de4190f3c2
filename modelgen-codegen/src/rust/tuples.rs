//! Tuple struct rendering for fixed heterogeneous arrays.

use crate::options::RustOptions;
use crate::output::{Dependencies, RenderOutput, RustDependency};
use crate::preset::TupleArgs;
use crate::rust::STRUCT_DERIVE;
use crate::rust::types::TypeMapper;
use modelgen_schema::{InputModel, Items};

/// Renders the named tuple struct behind an array field with tuple items.
pub struct TupleRenderer<'a> {
    mapper: TypeMapper<'a>,
}

impl<'a> TupleRenderer<'a> {
    /// Creates a renderer for tuples owned by `dependency.parent`.
    #[must_use]
    pub fn new(
        options: &'a RustOptions,
        input: &'a InputModel,
        dependency: &RustDependency<'a>,
    ) -> Self {
        Self {
            mapper: TypeMapper::new(options, input, dependency.parent)
                .with_owner_name(dependency.parent_name.clone()),
        }
    }

    /// Type mapper for the owning model.
    #[must_use]
    pub fn mapper(&self) -> &TypeMapper<'a> {
        &self.mapper
    }

    /// Renders the tuple struct described by `dependency`.
    #[must_use]
    pub fn render(&self, dependency: &RustDependency<'a>) -> RenderOutput<'a> {
        let args = TupleArgs {
            type_name: dependency.type_name.clone(),
            original_field_name: dependency.original_field_name.clone(),
            field: dependency.field,
            parent: dependency.parent,
            parent_name: dependency.parent_name.clone(),
        };
        let mut deps = Dependencies::new();
        let result = self
            .mapper
            .options()
            .presets
            .tuples
            .tuple(self, &args, &mut deps);
        let file_name = format!("src/{}.rs", self.mapper.name_module(Some(&args.type_name)));
        RenderOutput::new(result, args.type_name, file_name, deps)
    }

    /// `pub struct Name(pub A, pub B);` with a doc line naming the owner.
    pub fn default_tuple(&self, args: &TupleArgs<'a>, deps: &mut Dependencies<'a>) -> String {
        let slots: Vec<String> = self
            .render_slot_types(args, deps)
            .into_iter()
            .map(|t| format!("pub {t}"))
            .collect();
        format!(
            "/// {} represents field {} from {} model.\n{}\npub struct {}({});",
            args.type_name,
            args.original_field_name,
            args.parent.id.as_deref().unwrap_or(&args.parent_name),
            STRUCT_DERIVE,
            args.type_name,
            slots.join(", ")
        )
    }

    /// Rust type of every tuple slot, in order. Every slot is required.
    pub fn render_slot_types(
        &self,
        args: &TupleArgs<'a>,
        deps: &mut Dependencies<'a>,
    ) -> Vec<String> {
        let Some(Items::Tuple(items)) = &args.field.items else {
            return Vec::new();
        };
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let slot = format!("{}_{index}", args.original_field_name);
                self.mapper.render_field_type(item, &slot, true, deps)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::DependencyKind;
    use modelgen_schema::ModelNode;
    use serde_json::json;

    fn node(value: serde_json::Value) -> ModelNode {
        serde_json::from_value(value).expect("Failed to parse node")
    }

    #[test]
    fn test_render_tuple() {
        let options = RustOptions::default();
        let input = InputModel::new();
        let parent = node(json!({ "$id": "Address", "type": "object" }));
        let field = node(json!({
            "type": "array",
            "items": [{ "type": "string" }, { "type": "number" }]
        }));
        let dependency = RustDependency {
            kind: DependencyKind::Tuple,
            original_field_name: "tuple_type".to_string(),
            type_name: "AddressTupleType".to_string(),
            field: &field,
            parent: &parent,
            parent_name: "Address".to_string(),
        };
        let output = TupleRenderer::new(&options, &input, &dependency).render(&dependency);

        let expected = r#"/// AddressTupleType represents field tuple_type from Address model.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct AddressTupleType(pub String, pub f64);"#;
        assert_eq!(output.result, expected);
        assert_eq!(output.rendered_name, "AddressTupleType");
        assert_eq!(output.file_name, "src/address_tuple_type.rs");
    }

    #[test]
    fn test_render_tuple_with_nested_shapes() {
        let options = RustOptions::default();
        let input = InputModel::from_models(vec![node(json!({ "$id": "Person", "type": "object" }))])
            .expect("Failed to build input");
        let parent = node(json!({ "$id": "Pair", "type": "object" }));
        let field = node(json!({
            "type": "array",
            "items": [
                { "$ref": "Person" },
                { "type": "object", "properties": { "x": { "type": "number" } } },
                { "type": "array", "items": [{ "type": "boolean" }] }
            ]
        }));
        let dependency = RustDependency {
            kind: DependencyKind::Tuple,
            original_field_name: "values".to_string(),
            type_name: "PairValues".to_string(),
            field: &field,
            parent: &parent,
            parent_name: "Pair".to_string(),
        };
        let output = TupleRenderer::new(&options, &input, &dependency).render(&dependency);

        assert!(output.result.ends_with(
            "pub struct PairValues(pub Box<crate::Person>, pub Box<crate::Values1>, pub Box<PairValues2>);"
        ));
        assert_eq!(output.dependencies, vec!["Person", "Values1", "PairValues2"]);
        let kinds: Vec<DependencyKind> =
            output.module_dependencies.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![DependencyKind::Struct, DependencyKind::Tuple]);
    }
}
