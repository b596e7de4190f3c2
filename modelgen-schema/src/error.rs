//! Error types for input model loading.

use thiserror::Error;

/// Error type for input model parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input structure.
    #[error("invalid input model structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// Model without an identifier where one is required.
    #[error("model at '{location}' has no $id")]
    MissingIdentifier {
        /// Where the model was found.
        location: String,
    },

    /// Duplicate definition.
    #[error("duplicate model definition: '{name}'")]
    DuplicateDefinition {
        /// Identifier of the duplicate.
        name: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }

    /// Creates a missing identifier error.
    pub fn missing_id(location: impl Into<String>) -> Self {
        Self::MissingIdentifier {
            location: location.into(),
        }
    }

    /// Creates a duplicate definition error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateDefinition { name: name.into() }
    }
}
