//! Writing generated models to disk.

use crate::error::CodegenError;
use crate::generator::RustGenerator;
use crate::options::RustOptions;
use crate::output::OutputModel;
use modelgen_schema::InputModel;
use std::fs;
use std::path::Path;

/// Generates complete models and writes them as a Rust package.
#[derive(Debug, Clone, Default)]
pub struct RustFileGenerator {
    generator: RustGenerator,
}

impl RustFileGenerator {
    /// Creates a file generator with the given options.
    #[must_use]
    pub fn new(options: RustOptions) -> Self {
        Self {
            generator: RustGenerator::new(options),
        }
    }

    /// Underlying generator.
    #[must_use]
    pub fn generator(&self) -> &RustGenerator {
        &self.generator
    }

    /// Generates every complete model and writes it under `output_dir`,
    /// followed by `Cargo.toml` and `src/lib.rs` when supporting files are
    /// enabled.
    ///
    /// # Errors
    /// Returns `CodegenError::Write` for the first file that cannot be
    /// written; files written before it are left in place.
    pub fn generate_to_files(
        &self,
        input: &InputModel,
        output_dir: impl AsRef<Path>,
    ) -> Result<Vec<OutputModel>, CodegenError> {
        let output_dir = output_dir.as_ref();
        let models = self.generator.generate_complete_models(input);
        let written = self.write_models(&models, output_dir)?;

        if self.generator.options().render_supporting_files {
            self.generate_support_files(&written, output_dir)?;
        }

        tracing::info!(
            "Wrote {} models to {}",
            written.len(),
            output_dir.display()
        );
        Ok(written)
    }

    /// Writes each rendered model to `output_dir/<file_name>`.
    ///
    /// Models with an empty name are skipped.
    ///
    /// # Errors
    /// Returns `CodegenError::Write` for the first file that cannot be
    /// written.
    pub fn write_models(
        &self,
        models: &[OutputModel],
        output_dir: &Path,
    ) -> Result<Vec<OutputModel>, CodegenError> {
        let mut written = Vec::with_capacity(models.len());
        for model in models {
            if model.is_empty() {
                tracing::debug!("Skipping unrendered model");
                continue;
            }
            write_file(&output_dir.join(&model.file_name), &model.result)?;
            written.push(model.clone());
        }
        Ok(written)
    }

    /// Writes `Cargo.toml` and `src/lib.rs` for `models`.
    ///
    /// # Errors
    /// Returns `CodegenError::Write` if either file cannot be written.
    pub fn generate_support_files(
        &self,
        models: &[OutputModel],
        output_dir: &Path,
    ) -> Result<(), CodegenError> {
        let manifest = self.generator.render_manifest();
        write_file(&output_dir.join(&manifest.file_name), &manifest.result)?;

        let lib = self.generator.render_lib(models);
        write_file(&output_dir.join(&lib.file_name), &lib.result)?;
        Ok(())
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), CodegenError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| CodegenError::write(path, source))?;
    }
    let mut content = content.to_string();
    if !content.ends_with('\n') {
        content.push('\n');
    }
    fs::write(path, content).map_err(|source| CodegenError::write(path, source))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
