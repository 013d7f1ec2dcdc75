//! Error types for the model layer.

use thiserror::Error;

/// Result type for parsing structured field values.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors from parsing layout or rule values.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The raw field value is empty or whitespace — nothing to parse.
    #[error("empty field value")]
    EmptyValue,

    /// The raw field value is not a well-formed document.
    #[error("malformed field value: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from the repository collaborator.
#[derive(Debug, Error)]
pub enum RepoError {
    /// The addressed node does not exist in the given locale.
    #[error("node not found: {0}")]
    NotFound(String),

    /// A scoped field write could not be committed.
    #[error("field write failed: {0}")]
    WriteFailed(String),
}
