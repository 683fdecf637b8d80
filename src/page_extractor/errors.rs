//! Error types for extraction
//!
//! Individual extractors never fail; only conditions that prevent the whole
//! extraction from running surface here.

use thiserror::Error;

/// Result type alias for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// Markup exceeds the configured size limit
    #[error("HTML input too large: {size} bytes (limit {limit} bytes)")]
    InputTooLarge { size: usize, limit: usize },
}
