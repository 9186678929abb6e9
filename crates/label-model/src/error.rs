use thiserror::Error;

use crate::vocabulary::MetadataField;

/// Errors raised while building model configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// A metadata category lists an empty (or all-whitespace) token.
    #[error("metadata category '{field}' contains an empty token")]
    EmptyToken { field: MetadataField },

    /// The same metadata field is configured twice.
    #[error("metadata category '{field}' is declared more than once")]
    DuplicateCategory { field: MetadataField },

    /// Vocabulary JSON could not be parsed.
    #[error("invalid vocabulary JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
