//! Error types for parser construction.

use label_model::MetadataField;
use thiserror::Error;

/// Errors raised while building a parser. Parsing itself never fails.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A vocabulary token produced a pattern the regex engine rejected.
    #[error("failed to compile {field} token '{token}': {source}")]
    TokenPattern {
        field: MetadataField,
        token: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for parser construction.
pub type Result<T> = std::result::Result<T, ParseError>;
