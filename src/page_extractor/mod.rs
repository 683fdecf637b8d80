//! HTML content extraction.
//!
//! This module turns raw markup into an [`ExtractionRecord`]: non-content
//! elements are filtered out, then title, description, keywords, links,
//! images, and body text are pulled through ordered selector chains, and a
//! bounded summary is generated from the body.

// Sub-modules
pub mod document;
pub mod element_filter;
pub mod errors;
pub mod extractors;
pub mod main_content;
pub mod page_data;
pub mod schema;
pub mod summary;

// Re-exports for public API
pub use document::{QueryNode, Queryable, ScraperDocument};
pub use element_filter::remove_unwanted_elements;
pub use errors::{ExtractError, ExtractResult};
pub use page_data::{ContentProcessor, extract, readable_text};
pub use schema::{ExtractionRecord, ImageRecord, LinkRecord};
pub use summary::{SentenceTerminators, generate_summary};
