//! Error types for rendering
//!
//! Markdown, HTML, and plain-text rendering are infallible string assembly;
//! only JSON serialization can fail. Format names are validated separately.

use thiserror::Error;

/// Result type alias for render operations
pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    /// JSON document could not be serialized
    #[error("Failed to serialize JSON output: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A format name that is not one of `markdown`, `html`, `text`, `json`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown output format: '{0}'")]
pub struct UnknownFormat(pub String);
