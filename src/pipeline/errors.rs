//! Error types for agent runs

use thiserror::Error;

/// Result type alias for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Not an absolute http(s) URL
    #[error("Invalid URL: '{0}'")]
    InvalidUrl(String),

    /// Page source could not deliver markup
    #[error("Failed to fetch page: {0}")]
    Fetch(String),

    /// Readable text too short to be worth generating from
    #[error("Extracted content too short: {length} chars (minimum {minimum})")]
    ContentTooShort { length: usize, minimum: usize },

    /// Prompt formatting failed (e.g. unknown template)
    #[error("Failed to build prompts: {0}")]
    Prompt(String),

    /// Text generation failed
    #[error("Text generation failed: {0}")]
    Generation(String),
}
