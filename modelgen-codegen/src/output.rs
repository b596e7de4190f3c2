//! Render results and dependency bookkeeping.

use modelgen_schema::ModelNode;

/// Kind of synthetic type a renderer asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    /// Named tuple struct for a fixed heterogeneous array.
    Tuple,
    /// Struct for an inline object without its own identifier.
    Struct,
}

/// A synthetic type that must be emitted alongside the model that needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct RustDependency<'a> {
    /// What to synthesize.
    pub kind: DependencyKind,
    /// Field name in the owning model, before any naming convention.
    pub original_field_name: String,
    /// Name the synthetic type will be emitted under.
    pub type_name: String,
    /// Shape of the field.
    pub field: &'a ModelNode,
    /// Model that owns the field.
    pub parent: &'a ModelNode,
    /// Rendered name of the owning type.
    pub parent_name: String,
}

/// Accumulator for the dependencies of one render call.
///
/// Synthetic dependencies are recorded once per `(kind, field)` pair and
/// named dependencies once per name; both keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct Dependencies<'a> {
    module: Vec<RustDependency<'a>>,
    names: Vec<String>,
}

impl<'a> Dependencies<'a> {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a synthetic dependency. Returns false if one of the same kind
    /// for the same field was already recorded.
    pub fn add_module_dependency(&mut self, dependency: RustDependency<'a>) -> bool {
        let exists = self.module.iter().any(|d| {
            d.kind == dependency.kind && d.original_field_name == dependency.original_field_name
        });
        if exists {
            return false;
        }
        self.module.push(dependency);
        true
    }

    /// Records a named dependency.
    pub fn add_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !name.is_empty() && !self.names.contains(&name) {
            self.names.push(name);
        }
    }

    /// Synthetic dependencies recorded so far.
    #[must_use]
    pub fn module_dependencies(&self) -> &[RustDependency<'a>] {
        &self.module
    }

    /// Names of every type the rendered code refers to.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Splits the accumulator into synthetic dependencies and names.
    #[must_use]
    pub fn into_parts(self) -> (Vec<RustDependency<'a>>, Vec<String>) {
        (self.module, self.names)
    }
}

/// Result of rendering a single model or synthetic dependency.
#[derive(Debug, Clone, Default)]
pub struct RenderOutput<'a> {
    /// Rendered source text, without a trailing newline.
    pub result: String,
    /// Name of the rendered type. Empty when nothing was rendered.
    pub rendered_name: String,
    /// Suggested relative file name.
    pub file_name: String,
    /// Names of the types the rendered code refers to.
    pub dependencies: Vec<String>,
    /// Synthetic types the rendered code needs.
    pub module_dependencies: Vec<RustDependency<'a>>,
}

impl<'a> RenderOutput<'a> {
    /// Creates an output from rendered text and its dependencies.
    #[must_use]
    pub fn new(
        result: String,
        rendered_name: String,
        file_name: String,
        dependencies: Dependencies<'a>,
    ) -> Self {
        let (module_dependencies, dependencies) = dependencies.into_parts();
        Self {
            result,
            rendered_name,
            file_name,
            dependencies,
            module_dependencies,
        }
    }

    /// Output for a model the generator cannot render.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if nothing was rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rendered_name.is_empty()
    }

    /// Drops the borrowed dependency descriptors.
    #[must_use]
    pub fn into_output_model(self) -> OutputModel {
        OutputModel {
            result: self.result,
            model_name: self.rendered_name,
            file_name: self.file_name,
            dependencies: self.dependencies,
        }
    }
}

/// Final, owned result for one output file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputModel {
    /// File contents, without a trailing newline.
    pub result: String,
    /// Name of the primary type. Empty when nothing was rendered.
    pub model_name: String,
    /// Relative path of the file, e.g. `src/address.rs`.
    pub file_name: String,
    /// Names of the types the primary type refers to.
    pub dependencies: Vec<String>,
}

impl OutputModel {
    /// Returns true if nothing was rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.model_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_dependencies_dedup_by_kind_and_field() {
        let field = ModelNode::default();
        let parent = ModelNode::default();
        let mut deps = Dependencies::new();

        let tuple = RustDependency {
            kind: DependencyKind::Tuple,
            original_field_name: "tuple_type".to_string(),
            type_name: "AddressTupleType".to_string(),
            field: &field,
            parent: &parent,
            parent_name: "Address".to_string(),
        };
        assert!(deps.add_module_dependency(tuple.clone()));
        assert!(!deps.add_module_dependency(tuple.clone()));
        assert!(deps.add_module_dependency(RustDependency {
            kind: DependencyKind::Struct,
            ..tuple
        }));
        assert_eq!(deps.module_dependencies().len(), 2);
    }

    #[test]
    fn test_names_dedup_and_skip_empty() {
        let mut deps = Dependencies::new();
        deps.add_name("Person");
        deps.add_name("Color");
        deps.add_name("Person");
        deps.add_name("");
        assert_eq!(deps.names(), ["Person", "Color"]);
    }

    #[test]
    fn test_render_output_into_output_model() {
        let mut deps = Dependencies::new();
        deps.add_name("Other");
        let output = RenderOutput::new(
            "pub struct A {}".to_string(),
            "A".to_string(),
            "src/a.rs".to_string(),
            deps,
        );
        assert!(!output.is_empty());

        let model = output.into_output_model();
        assert_eq!(model.model_name, "A");
        assert_eq!(model.file_name, "src/a.rs");
        assert_eq!(model.dependencies, vec!["Other".to_string()]);
        assert!(RenderOutput::empty().into_output_model().is_empty());
    }
}
