//! Shared configuration constants for distill
//!
//! This module contains default values and limits used throughout the
//! codebase to ensure consistency and avoid magic numbers.

/// Minimum length a block's text must reach to count as body content: 10 chars
///
/// Filters out short fragments such as button labels, bylines, and
/// breadcrumb separators that survive element filtering.
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 10;

/// Maximum length of extracted body text: 50 000 chars
///
/// Longer bodies are cut at this boundary and suffixed with [`ELLIPSIS`].
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 50_000;

/// Maximum length of a generated summary: 200 chars
pub const DEFAULT_SUMMARY_MAX_LENGTH: usize = 200;

/// Maximum number of keywords kept from meta tags
pub const DEFAULT_MAX_KEYWORDS: usize = 10;

/// Maximum number of links collected per document
pub const DEFAULT_MAX_LINKS: usize = 50;

/// Maximum number of images collected per document
pub const DEFAULT_MAX_IMAGES: usize = 20;

/// Maximum length of link text and image alt text: 100 chars
pub const DEFAULT_MAX_LABEL_CHARS: usize = 100;

/// Maximum HTML input size accepted by the extractor (10 MB)
///
/// - Wikipedia largest articles: ~2-3 MB
/// - Typical documentation: 1-2 MB
/// - Blog posts: 100-500 KB
pub const DEFAULT_MAX_HTML_SIZE: usize = 10 * 1024 * 1024;

/// Minimum readable-text length the agent accepts before prompting: 50 chars
pub const DEFAULT_MIN_READABLE_CHARS: usize = 50;

/// Number of URLs processed at once by batch runs
pub const DEFAULT_BATCH_CONCURRENCY: usize = 4;

/// Marker appended to truncated body text
pub const ELLIPSIS: &str = "...";

/// Marker appended after each sentence accepted into a summary
pub const SUMMARY_SENTENCE_END: char = '。';

/// Body text length a content container must exceed to win the selector chain
pub const MAIN_CONTENT_ACCEPT_CHARS: usize = 100;

/// Text shorter than this is returned unchanged by the summary generator
pub const SUMMARY_MIN_INPUT_CHARS: usize = 50;
