//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
///
/// Rendering itself never fails; unsupported shapes degrade to
/// `serde_json::Value` with a warning. Errors come from loading the input
/// model and from writing files.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Input model parsing error.
    #[error("input model parse error: {0}")]
    Parse(#[from] modelgen_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing a generated file failed.
    #[error("failed to write '{}': {}", .path.display(), .source)]
    Write {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

impl CodegenError {
    /// Creates a write error for `path`.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_write_error_display_and_source() {
        let err = CodegenError::write(
            "out/src/person.rs",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to write 'out/src/person.rs': denied");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_parse_error_conversion() {
        let parse = modelgen_schema::parse_input_model("[]").expect_err("array must be rejected");
        let err = CodegenError::from(parse);
        assert!(matches!(err, CodegenError::Parse(_)));
    }
}
