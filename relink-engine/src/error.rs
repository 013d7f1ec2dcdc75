//! Error types for the remapping engine.
//!
//! Only two failure kinds ever cross an internal boundary: a malformed
//! layout value and a failed scoped commit. Resolution misses (node,
//! version or locale not found) are `Option`s absorbed where they occur —
//! "nothing to do", not an error. Parse failures are absorbed as empty
//! extraction results; write failures are caught and logged at the
//! per-field boundary. No error ever escapes the public remap entry
//! points — absence of modification is the only externally visible sign of
//! failure, besides the logs.

use thiserror::Error;

/// Result type for engine internals.
pub type EngineResult<T> = Result<T, EngineError>;

/// Failure kinds inside the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A layout or rule field value is malformed — no datasources.
    #[error("layout parse failed: {0}")]
    Parse(#[from] relink_model::ModelError),

    /// A scoped field commit failed.
    #[error("field write failed: {0}")]
    Write(#[from] relink_model::RepoError),
}
