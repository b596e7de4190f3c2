//! Naming conventions for generated identifiers.
//!
//! Every identifier the generator emits passes through a [`NamingConvention`].
//! The default methods apply Rust casing rules and steer clear of reserved
//! keywords; implementors override only the methods they care about.

use modelgen_schema::{InputModel, ModelNode, replace_special_characters, to_pascal_case, to_snake_case};

/// Prefix applied to names that collide with a reserved keyword or property.
pub const RESERVED_PREFIX: &str = "reserved_";

/// Context available to a naming convention.
#[derive(Clone, Copy)]
pub struct NamingContext<'a> {
    /// Model that owns the name being produced.
    pub model: &'a ModelNode,
    /// Full input registry.
    pub input: &'a InputModel,
    /// Field being named, when naming a property.
    pub field: Option<&'a ModelNode>,
    /// Reserved keyword predicate in effect.
    pub reserved_keyword: fn(&str) -> bool,
}

impl<'a> NamingContext<'a> {
    /// Creates a context for naming within `model`.
    #[must_use]
    pub fn new(
        model: &'a ModelNode,
        input: &'a InputModel,
        reserved_keyword: fn(&str) -> bool,
    ) -> Self {
        Self {
            model,
            input,
            field: None,
            reserved_keyword,
        }
    }

    /// Returns the same context focused on `field`.
    #[must_use]
    pub fn with_field(mut self, field: Option<&'a ModelNode>) -> Self {
        self.field = field;
        self
    }

    /// Returns true if `name` is reserved.
    #[must_use]
    pub fn is_reserved(&self, name: &str) -> bool {
        (self.reserved_keyword)(name)
    }
}

/// Naming rules for types, fields, modules and enum variants.
///
/// All methods are total: a missing name produces an empty string and never
/// fails.
pub trait NamingConvention: Send + Sync {
    /// Names a struct, enum or tuple type.
    fn type_name(&self, name: Option<&str>, ctx: &NamingContext<'_>) -> String {
        rust_type_name(name, ctx)
    }

    /// Names a struct field.
    fn field_name(&self, name: Option<&str>, ctx: &NamingContext<'_>) -> String {
        rust_field_name(name, ctx)
    }

    /// Names a module (and therefore its file).
    fn module_name(&self, name: Option<&str>, ctx: &NamingContext<'_>) -> String {
        rust_module_name(name, ctx)
    }

    /// Names an enum variant derived from a literal.
    fn enum_member(&self, name: Option<&str>, ctx: &NamingContext<'_>) -> String {
        rust_enum_member(name, ctx)
    }

    /// Names the value type of a model's additional properties map.
    fn additional_property_type(&self, ctx: &NamingContext<'_>) -> String {
        rust_additional_property_type(ctx)
    }
}

/// Default Rust naming convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustNamingConvention;

impl NamingConvention for RustNamingConvention {}

/// PascalCase type name, escaped with `reserved_` when it is a keyword or
/// not a valid identifier.
#[must_use]
pub fn rust_type_name(name: Option<&str>, ctx: &NamingContext<'_>) -> String {
    identifier(name, to_pascal_case, ctx)
}

/// snake_case field name, escaped with `reserved_` when it is a keyword or
/// not a valid identifier.
#[must_use]
pub fn rust_field_name(name: Option<&str>, ctx: &NamingContext<'_>) -> String {
    identifier(name, to_snake_case, ctx)
}

/// snake_case module name, escaped with `reserved_` when it is a keyword or
/// not a valid identifier.
#[must_use]
pub fn rust_module_name(name: Option<&str>, ctx: &NamingContext<'_>) -> String {
    identifier(name, to_snake_case, ctx)
}

/// Converts `name` with `convert` into something usable as an identifier.
///
/// A name made only of punctuation (`$`) is spelled out instead of
/// collapsing to nothing. A result that is empty, starts with a digit or is
/// reserved gets the `reserved_` prefix.
fn identifier(
    name: Option<&str>,
    convert: fn(&str) -> String,
    ctx: &NamingContext<'_>,
) -> String {
    let Some(name) = name.filter(|n| !n.is_empty()) else {
        return String::new();
    };
    let mut formatted = convert(name);
    if formatted.is_empty() {
        formatted = convert(&replace_special_characters(name));
    }
    if !is_identifier_start(&formatted) || ctx.is_reserved(&formatted) {
        return convert(&format!("{RESERVED_PREFIX}{formatted}"));
    }
    formatted
}

/// Returns true if `name` is non-empty and starts with a letter or `_`.
#[must_use]
pub fn is_identifier_start(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_alphabetic() || c == '_')
}

/// Variant name for an enum literal.
///
/// Punctuation is spelled out first so that `-1` and `1` stay distinct, then
/// the owning model's identifier (or `EnumMember`) is prefixed.
#[must_use]
pub fn rust_enum_member(name: Option<&str>, ctx: &NamingContext<'_>) -> String {
    let value = to_pascal_case(&replace_special_characters(name.unwrap_or_default()));
    let prefix = ctx.model.id.as_deref().unwrap_or("EnumMember");
    let formatted = to_pascal_case(&format!("{prefix}_{value}"));
    if is_identifier_start(&formatted) {
        return formatted;
    }
    to_pascal_case(&format!("{RESERVED_PREFIX}{formatted}"))
}

/// Name for the value type of the additional properties map, or empty if
/// the model has no identifier.
#[must_use]
pub fn rust_additional_property_type(ctx: &NamingContext<'_>) -> String {
    let Some(id) = ctx.model.id.as_deref() else {
        return String::new();
    };
    let property = to_pascal_case(&unique_property_name(ctx.model, "additionalProperties"));
    identifier(Some(&format!("{id}{property}")), to_pascal_case, ctx)
}

/// Returns `base`, prefixed with `reserved_` until it no longer collides with
/// a declared property of `model`.
#[must_use]
pub fn unique_property_name(model: &ModelNode, base: &str) -> String {
    let mut name = base.to_string();
    while model.has_property(&name) {
        name = format!("{RESERVED_PREFIX}{name}");
    }
    name
}
