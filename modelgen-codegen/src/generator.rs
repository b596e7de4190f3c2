//! Main code generator.
//!
//! [`RustGenerator`] dispatches each model to the renderer for its kind and
//! assembles complete models: the model's own definition preceded by every
//! synthetic type it needs, transitively.

use crate::keywords::unstable_polymorphic_warning;
use crate::options::RustOptions;
use crate::output::{DependencyKind, OutputModel, RenderOutput, RustDependency};
use crate::rust::{EnumRenderer, PackageRenderer, StructRenderer, TupleRenderer};
use modelgen_schema::{InputModel, ModelKind, ModelNode};
use rayon::prelude::*;
use std::collections::HashMap;

/// Relative path of the generated manifest.
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Relative path of the generated crate root.
pub const LIB_FILE: &str = "src/lib.rs";

/// Rust code generator.
#[derive(Debug, Clone, Default)]
pub struct RustGenerator {
    options: RustOptions,
}

impl RustGenerator {
    /// Creates a generator with the given options.
    #[must_use]
    pub fn new(options: RustOptions) -> Self {
        Self { options }
    }

    /// Generator options.
    #[must_use]
    pub fn options(&self) -> &RustOptions {
        &self.options
    }

    /// Returns true if `name` is a reserved keyword for this generator.
    #[must_use]
    pub fn is_reserved_keyword(&self, name: &str) -> bool {
        (self.options.reserved_keyword)(name)
    }

    /// Renders one model by kind. Objects become structs, enums and type
    /// unions become enums, and anything else renders to an empty output.
    #[must_use]
    pub fn render<'a>(&'a self, model: &'a ModelNode, input: &'a InputModel) -> RenderOutput<'a> {
        match model.kind() {
            ModelKind::Object => self.render_struct(model, input),
            ModelKind::Enum => self.render_enum(model, input),
            ModelKind::Union => {
                tracing::warn!(
                    "{}",
                    unstable_polymorphic_warning(model.id.as_deref().unwrap_or_default())
                );
                self.render_enum(model, input)
            }
            kind => {
                tracing::warn!(
                    "Rust generator does not render {:?} model '{}'",
                    kind,
                    model.id.as_deref().unwrap_or_default()
                );
                RenderOutput::empty()
            }
        }
    }

    /// Renders an object model as a struct.
    #[must_use]
    pub fn render_struct<'a>(
        &'a self,
        model: &'a ModelNode,
        input: &'a InputModel,
    ) -> RenderOutput<'a> {
        StructRenderer::new(&self.options, input, model).render()
    }

    /// Renders an enum or union model as an enum.
    #[must_use]
    pub fn render_enum<'a>(
        &'a self,
        model: &'a ModelNode,
        input: &'a InputModel,
    ) -> RenderOutput<'a> {
        EnumRenderer::new(&self.options, input, model).render()
    }

    /// Renders the tuple struct for a tuple dependency.
    #[must_use]
    pub fn render_tuple<'a>(
        &'a self,
        dependency: &RustDependency<'a>,
        input: &'a InputModel,
    ) -> RenderOutput<'a> {
        TupleRenderer::new(&self.options, input, dependency).render(dependency)
    }

    /// Renders the struct for an inline object dependency.
    #[must_use]
    pub fn render_anonymous_struct<'a>(
        &'a self,
        dependency: &RustDependency<'a>,
        input: &'a InputModel,
    ) -> RenderOutput<'a> {
        StructRenderer::new(&self.options, input, dependency.field)
            .with_name(dependency.type_name.clone())
            .render()
    }

    /// Renders `dependencies` and everything they need, depth-first, so that
    /// each type lands in `rendered` after the types it depends on.
    ///
    /// `seen` maps every type name already emitted to the node it was
    /// rendered from. A name claimed again by the same node is skipped. A
    /// name claimed by a different node is skipped with a warning, since
    /// only one definition can exist.
    pub fn render_dependencies<'a>(
        &'a self,
        dependencies: &[RustDependency<'a>],
        input: &'a InputModel,
        rendered: &mut Vec<RenderOutput<'a>>,
        seen: &mut HashMap<String, &'a ModelNode>,
    ) {
        for dependency in dependencies {
            if let Some(owner) = seen.get(&dependency.type_name) {
                if !std::ptr::eq(*owner, dependency.field) {
                    tracing::warn!(
                        "Type {} for field {} of {} is already defined by another schema; \
                         the field will use the existing definition",
                        dependency.type_name,
                        dependency.original_field_name,
                        dependency.parent_name
                    );
                }
                continue;
            }
            seen.insert(dependency.type_name.clone(), dependency.field);
            let output = match dependency.kind {
                DependencyKind::Tuple => self.render_tuple(dependency, input),
                DependencyKind::Struct => self.render_anonymous_struct(dependency, input),
            };
            self.render_dependencies(&output.module_dependencies, input, rendered, seen);
            rendered.push(output);
        }
    }

    /// Renders a model together with its synthetic dependencies.
    ///
    /// The result concatenates dependency definitions, deepest first,
    /// followed by the model's own definition.
    #[must_use]
    pub fn render_complete_model<'a>(
        &'a self,
        model: &'a ModelNode,
        input: &'a InputModel,
    ) -> RenderOutput<'a> {
        let output = self.render(model, input);
        if output.is_empty() || output.module_dependencies.is_empty() {
            return output;
        }

        let mut seen = HashMap::from([(output.rendered_name.clone(), model)]);
        let mut rendered = Vec::new();
        self.render_dependencies(&output.module_dependencies, input, &mut rendered, &mut seen);

        let mut blocks: Vec<String> = rendered.into_iter().map(|o| o.result).collect();
        blocks.push(output.result);
        RenderOutput {
            result: blocks.join("\n\n"),
            ..output
        }
    }

    /// Renders every model in the input, without dependencies.
    ///
    /// Models that cannot be rendered are dropped.
    #[must_use]
    pub fn generate(&self, input: &InputModel) -> Vec<OutputModel> {
        let models: Vec<&ModelNode> = input.models().collect();
        models
            .par_iter()
            .map(|model| self.render(model, input).into_output_model())
            .filter(|output| !output.is_empty())
            .collect()
    }

    /// Renders every model in the input as a complete model, in input order.
    ///
    /// Models are rendered in parallel; each render only reads the shared
    /// input. Models that cannot be rendered are dropped.
    #[must_use]
    pub fn generate_complete_models(&self, input: &InputModel) -> Vec<OutputModel> {
        let models: Vec<&ModelNode> = input.models().collect();
        let outputs: Vec<OutputModel> = models
            .par_iter()
            .map(|model| self.render_complete_model(model, input).into_output_model())
            .filter(|output| !output.is_empty())
            .collect();
        tracing::info!(
            "Generated {} Rust models from {} input models",
            outputs.len(),
            input.len()
        );
        outputs
    }

    /// Renders `Cargo.toml`.
    #[must_use]
    pub fn render_manifest(&self) -> OutputModel {
        OutputModel {
            result: PackageRenderer::new(&self.options).render_manifest(),
            model_name: MANIFEST_FILE.to_string(),
            file_name: MANIFEST_FILE.to_string(),
            dependencies: Vec::new(),
        }
    }

    /// Renders `src/lib.rs` declaring one module per model.
    #[must_use]
    pub fn render_lib(&self, models: &[OutputModel]) -> OutputModel {
        let names: Vec<String> = models
            .iter()
            .filter(|m| !m.is_empty())
            .map(|m| m.model_name.clone())
            .collect();
        OutputModel {
            result: PackageRenderer::new(&self.options).render_lib(&names),
            model_name: LIB_FILE.to_string(),
            file_name: LIB_FILE.to_string(),
            dependencies: Vec::new(),
        }
    }
}
