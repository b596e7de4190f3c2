//! Rendering hooks.
//!
//! Presets let callers replace individual pieces of the emitted text without
//! re-implementing a renderer. Every hook has a default that delegates back
//! to the renderer, so an implementation only overrides what it changes:
//!
//! ```ignore
//! struct DocumentedStructs;
//!
//! impl StructPreset for DocumentedStructs {
//!     fn additional_content(&self, renderer: &StructRenderer<'_>) -> String {
//!         format!("// generated for {}", renderer.name())
//!     }
//! }
//!
//! let options = RustOptions::new()
//!     .with_presets(RustPreset::default().with_struct_preset(DocumentedStructs));
//! ```

use crate::options::PackageOptions;
use crate::output::Dependencies;
use crate::rust::{EnumRenderer, PackageRenderer, StructRenderer, TupleRenderer};
use modelgen_schema::ModelNode;
use serde_json::Value;
use std::sync::Arc;

/// Where a struct field comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Declared property.
    Property,
    /// Catch-all map for undeclared properties.
    AdditionalProperties,
    /// Map for properties matching a name pattern.
    PatternProperties,
}

/// Arguments passed to struct field hooks.
#[derive(Debug, Clone)]
pub struct FieldArgs<'a> {
    /// Field name before any naming convention.
    pub field_name: String,
    /// Field schema.
    pub field: &'a ModelNode,
    /// Where the field comes from.
    pub kind: FieldKind,
    /// Whether the field is required.
    pub required: bool,
}

/// Arguments passed to the tuple hook.
#[derive(Debug, Clone)]
pub struct TupleArgs<'a> {
    /// Name the tuple struct is emitted under.
    pub type_name: String,
    /// Field name in the owning model, before any naming convention.
    pub original_field_name: String,
    /// Array schema with tuple items.
    pub field: &'a ModelNode,
    /// Model that owns the field.
    pub parent: &'a ModelNode,
    /// Rendered name of the owning type.
    pub parent_name: String,
}

/// Source of one enum variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnumMember<'a> {
    /// A literal from `enum`.
    Literal(&'a Value),
    /// One type of a type union.
    Type(&'a str),
}

/// Arguments passed to the variant hook.
#[derive(Debug, Clone, Copy)]
pub struct VariantArgs<'a> {
    /// Position of the member.
    pub index: usize,
    /// The member itself.
    pub member: EnumMember<'a>,
    /// True when every literal shares one scalar type.
    pub uniform: bool,
}

/// One rendered enum variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedVariant {
    /// Attribute lines emitted above the variant.
    pub attributes: Vec<String>,
    /// Variant identifier.
    pub name: String,
    /// Payload type, if any.
    pub payload: Option<String>,
    /// Expression constructing the payload in a `Default` impl.
    pub default_value: Option<String>,
    /// True when this variant matches the declared default.
    pub is_default: bool,
}

impl RenderedVariant {
    /// Variant declaration, e.g. `Texas(String)`.
    #[must_use]
    pub fn declaration(&self) -> String {
        match &self.payload {
            Some(payload) => format!("{}({payload})", self.name),
            None => self.name.clone(),
        }
    }

    /// Expression constructing this variant, e.g. `Self::F64(1.0)`.
    #[must_use]
    pub fn constructor(&self) -> String {
        match (&self.payload, &self.default_value) {
            (Some(_), Some(value)) => format!("Self::{}({value})", self.name),
            (Some(_), None) => format!("Self::{}(Default::default())", self.name),
            (None, _) => format!("Self::{}", self.name),
        }
    }
}

/// Hooks for struct rendering.
pub trait StructPreset: Send + Sync {
    /// Field identifier.
    fn field_name(&self, renderer: &StructRenderer<'_>, args: &FieldArgs<'_>) -> String {
        renderer.default_field_name(args)
    }

    /// Field type. Synthetic and named dependencies go into `deps`.
    fn field_type<'a>(
        &self,
        renderer: &StructRenderer<'a>,
        args: &FieldArgs<'a>,
        deps: &mut Dependencies<'a>,
    ) -> String {
        renderer.default_field_type(args, deps)
    }

    /// Attribute line above the field.
    fn field_macro(&self, renderer: &StructRenderer<'_>, args: &FieldArgs<'_>) -> String {
        renderer.default_field_macro(args)
    }

    /// Extra lines appended to the struct body.
    fn additional_content(&self, _renderer: &StructRenderer<'_>) -> String {
        String::new()
    }
}

/// Hooks for tuple struct rendering.
pub trait TuplePreset: Send + Sync {
    /// Complete tuple struct definition.
    fn tuple<'a>(
        &self,
        renderer: &TupleRenderer<'a>,
        args: &TupleArgs<'a>,
        deps: &mut Dependencies<'a>,
    ) -> String {
        renderer.default_tuple(args, deps)
    }
}

/// Hooks for enum rendering.
pub trait EnumPreset: Send + Sync {
    /// One variant.
    fn variant(&self, renderer: &EnumRenderer<'_>, args: &VariantArgs<'_>) -> RenderedVariant {
        renderer.default_variant(args)
    }

    /// Extra lines appended after the enum definition.
    fn additional_content(&self, _renderer: &EnumRenderer<'_>) -> String {
        String::new()
    }
}

/// Hooks for the supporting package files.
pub trait PackagePreset: Send + Sync {
    /// `Cargo.toml` contents.
    fn manifest(&self, renderer: &PackageRenderer<'_>, package: &PackageOptions) -> String {
        renderer.default_manifest(package)
    }

    /// `src/lib.rs` contents for the given model names.
    fn lib(&self, renderer: &PackageRenderer<'_>, model_names: &[String]) -> String {
        renderer.default_lib(model_names)
    }
}

/// Preset that keeps every default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPreset;

impl StructPreset for DefaultPreset {}
impl TuplePreset for DefaultPreset {}
impl EnumPreset for DefaultPreset {}
impl PackagePreset for DefaultPreset {}

/// The full set of rendering hooks.
#[derive(Clone)]
pub struct RustPreset {
    /// Struct hooks.
    pub structs: Arc<dyn StructPreset>,
    /// Tuple hooks.
    pub tuples: Arc<dyn TuplePreset>,
    /// Enum hooks.
    pub enums: Arc<dyn EnumPreset>,
    /// Package hooks.
    pub package: Arc<dyn PackagePreset>,
}

impl Default for RustPreset {
    fn default() -> Self {
        Self {
            structs: Arc::new(DefaultPreset),
            tuples: Arc::new(DefaultPreset),
            enums: Arc::new(DefaultPreset),
            package: Arc::new(DefaultPreset),
        }
    }
}

impl RustPreset {
    /// Replaces the struct hooks.
    #[must_use]
    pub fn with_struct_preset(mut self, preset: impl StructPreset + 'static) -> Self {
        self.structs = Arc::new(preset);
        self
    }

    /// Replaces the tuple hooks.
    #[must_use]
    pub fn with_tuple_preset(mut self, preset: impl TuplePreset + 'static) -> Self {
        self.tuples = Arc::new(preset);
        self
    }

    /// Replaces the enum hooks.
    #[must_use]
    pub fn with_enum_preset(mut self, preset: impl EnumPreset + 'static) -> Self {
        self.enums = Arc::new(preset);
        self
    }

    /// Replaces the package hooks.
    #[must_use]
    pub fn with_package_preset(mut self, preset: impl PackagePreset + 'static) -> Self {
        self.package = Arc::new(preset);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_declaration_and_constructor() {
        let unit = RenderedVariant {
            attributes: vec![],
            name: "Texas".to_string(),
            payload: None,
            default_value: None,
            is_default: false,
        };
        assert_eq!(unit.declaration(), "Texas");
        assert_eq!(unit.constructor(), "Self::Texas");

        let number = RenderedVariant {
            name: "F64".to_string(),
            payload: Some("f64".to_string()),
            default_value: Some("1.0".to_string()),
            ..unit.clone()
        };
        assert_eq!(number.declaration(), "F64(f64)");
        assert_eq!(number.constructor(), "Self::F64(1.0)");

        let opaque = RenderedVariant {
            default_value: None,
            ..number
        };
        assert_eq!(opaque.constructor(), "Self::F64(Default::default())");
    }
}
