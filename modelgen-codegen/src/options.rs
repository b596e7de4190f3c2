//! Generator configuration.

use crate::keywords::is_reserved_rust_keyword;
use crate::naming::{NamingConvention, RustNamingConvention};
use crate::preset::RustPreset;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Optional capabilities of the generated package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageFeature {
    /// Pulls in `jsonwebtoken` behind a `jwt` cargo feature.
    Jwt,
}

/// Metadata for the generated package manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageOptions {
    /// Package name.
    pub name: String,
    /// Package version.
    pub version: String,
    /// Package authors.
    pub authors: Vec<String>,
    /// Homepage URL.
    pub homepage: Option<String>,
    /// Repository URL.
    pub repository: Option<String>,
    /// SPDX license expression.
    pub license: String,
    /// One-line description.
    pub description: String,
    /// Rust edition of the generated package.
    pub edition: String,
    /// Enabled package features.
    pub features: Vec<PackageFeature>,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            name: "generated-models".to_string(),
            version: "0.1.0".to_string(),
            authors: vec!["modelgen".to_string()],
            homepage: None,
            repository: None,
            license: "Apache-2.0".to_string(),
            description: "Rust models generated by modelgen".to_string(),
            edition: "2021".to_string(),
            features: Vec::new(),
        }
    }
}

impl PackageOptions {
    /// Returns true if `feature` is enabled.
    #[must_use]
    pub fn has_feature(&self, feature: PackageFeature) -> bool {
        self.features.contains(&feature)
    }
}

/// Options controlling Rust generation.
#[derive(Clone)]
pub struct RustOptions {
    /// Naming convention for every emitted identifier.
    pub naming: Arc<dyn NamingConvention>,
    /// Reserved keyword predicate.
    pub reserved_keyword: fn(&str) -> bool,
    /// Rendering hooks.
    pub presets: RustPreset,
    /// Emit a `new` constructor for every struct.
    pub render_initializer: bool,
    /// Emit a `Default` impl for every enum.
    pub render_defaults: bool,
    /// Emit `Cargo.toml` and `src/lib.rs` when writing files.
    pub render_supporting_files: bool,
    /// Manifest metadata.
    pub package: PackageOptions,
}

impl Default for RustOptions {
    fn default() -> Self {
        Self {
            naming: Arc::new(RustNamingConvention),
            reserved_keyword: is_reserved_rust_keyword,
            presets: RustPreset::default(),
            render_initializer: false,
            render_defaults: false,
            render_supporting_files: true,
            package: PackageOptions::default(),
        }
    }
}

impl fmt::Debug for RustOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RustOptions")
            .field("render_initializer", &self.render_initializer)
            .field("render_defaults", &self.render_defaults)
            .field("render_supporting_files", &self.render_supporting_files)
            .field("package", &self.package)
            .finish_non_exhaustive()
    }
}

impl RustOptions {
    /// Creates options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the naming convention.
    #[must_use]
    pub fn with_naming(mut self, naming: impl NamingConvention + 'static) -> Self {
        self.naming = Arc::new(naming);
        self
    }

    /// Sets the reserved keyword predicate.
    #[must_use]
    pub fn with_reserved_keyword(mut self, reserved_keyword: fn(&str) -> bool) -> Self {
        self.reserved_keyword = reserved_keyword;
        self
    }

    /// Sets the rendering hooks.
    #[must_use]
    pub fn with_presets(mut self, presets: RustPreset) -> Self {
        self.presets = presets;
        self
    }

    /// Enables or disables struct constructors.
    #[must_use]
    pub fn with_initializer(mut self, enabled: bool) -> Self {
        self.render_initializer = enabled;
        self
    }

    /// Enables or disables enum `Default` impls.
    #[must_use]
    pub fn with_defaults(mut self, enabled: bool) -> Self {
        self.render_defaults = enabled;
        self
    }

    /// Enables or disables `Cargo.toml` and `src/lib.rs` output.
    #[must_use]
    pub fn with_supporting_files(mut self, enabled: bool) -> Self {
        self.render_supporting_files = enabled;
        self
    }

    /// Sets manifest metadata.
    #[must_use]
    pub fn with_package(mut self, package: PackageOptions) -> Self {
        self.package = package;
        self
    }
}
