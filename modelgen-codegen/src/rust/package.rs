//! Supporting files for a generated package.

use crate::naming::NamingContext;
use crate::options::{PackageFeature, PackageOptions, RustOptions};
use modelgen_schema::{InputModel, ModelNode};

/// Renders `Cargo.toml` and `src/lib.rs` for a set of generated models.
pub struct PackageRenderer<'a> {
    options: &'a RustOptions,
    model: ModelNode,
    input: InputModel,
}

impl<'a> PackageRenderer<'a> {
    /// Creates a package renderer.
    #[must_use]
    pub fn new(options: &'a RustOptions) -> Self {
        Self {
            options,
            model: ModelNode::default(),
            input: InputModel::new(),
        }
    }

    /// Generator options.
    #[must_use]
    pub fn options(&self) -> &'a RustOptions {
        self.options
    }

    /// Renders the manifest through the package preset.
    #[must_use]
    pub fn render_manifest(&self) -> String {
        self.options.presets.package.manifest(self, &self.options.package)
    }

    /// Renders the crate root through the package preset.
    #[must_use]
    pub fn render_lib(&self, model_names: &[String]) -> String {
        self.options.presets.package.lib(self, model_names)
    }

    /// Module name for a model name.
    #[must_use]
    pub fn module_name(&self, model_name: &str) -> String {
        let ctx = NamingContext::new(&self.model, &self.input, self.options.reserved_keyword);
        self.options.naming.module_name(Some(model_name), &ctx)
    }

    /// Default `Cargo.toml`.
    #[must_use]
    pub fn default_manifest(&self, package: &PackageOptions) -> String {
        let jwt = package.has_feature(PackageFeature::Jwt);
        let authors: Vec<String> = package.authors.iter().map(|a| toml_string(a)).collect();

        let mut out = String::new();
        out.push_str("[package]\n");
        out.push_str(&format!("name = {}\n", toml_string(&package.name)));
        out.push_str(&format!("version = {}\n", toml_string(&package.version)));
        out.push_str(&format!("authors = [{}]\n", authors.join(", ")));
        if let Some(homepage) = &package.homepage {
            out.push_str(&format!("homepage = {}\n", toml_string(homepage)));
        }
        if let Some(repository) = &package.repository {
            out.push_str(&format!("repository = {}\n", toml_string(repository)));
        }
        out.push_str(&format!("license = {}\n", toml_string(&package.license)));
        out.push_str(&format!("description = {}\n", toml_string(&package.description)));
        out.push_str(&format!("edition = {}\n", toml_string(&package.edition)));
        out.push('\n');

        out.push_str("[dependencies]\n");
        out.push_str("serde = { version = \"1\", features = [\"derive\"] }\n");
        out.push_str("serde_json = \"1\"\n");
        if jwt {
            out.push_str("jsonwebtoken = { version = \"7\", optional = true }\n");
        }
        out.push('\n');

        out.push_str("[features]\n");
        if jwt {
            out.push_str("default = [\"jwt\"]\n");
            out.push_str("jwt = [\"dep:jsonwebtoken\"]");
        } else {
            out.push_str("default = []");
        }
        out
    }

    /// Default `src/lib.rs`: one public module per model, re-exported.
    #[must_use]
    pub fn default_lib(&self, model_names: &[String]) -> String {
        let mut blocks = vec!["#[macro_use]\nextern crate serde;\nextern crate serde_json;".to_string()];
        for name in model_names {
            let module = self.module_name(name);
            blocks.push(format!("pub mod {module};\npub use self::{module}::*;"));
        }
        blocks.join("\n\n")
    }
}

/// Quotes `value` as a TOML basic string.
fn toml_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
