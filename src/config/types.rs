//! Core configuration types for content extraction and agent runs
//!
//! `ExtractConfig` bounds every size-limited field of an extraction record;
//! `AgentConfig` controls the fetch → generate → render glue.

use serde::{Deserialize, Serialize};

use crate::content_formatter::OutputFormat;
use crate::page_extractor::summary::SentenceTerminators;
use crate::utils::{
    DEFAULT_BATCH_CONCURRENCY, DEFAULT_MAX_HTML_SIZE, DEFAULT_MAX_IMAGES, DEFAULT_MAX_KEYWORDS,
    DEFAULT_MAX_LABEL_CHARS, DEFAULT_MAX_LINKS, DEFAULT_MAX_TEXT_LENGTH,
    DEFAULT_MIN_READABLE_CHARS, DEFAULT_MIN_TEXT_LENGTH, DEFAULT_SUMMARY_MAX_LENGTH,
};

/// Limits applied while extracting an `ExtractionRecord`.
///
/// **INVARIANT:** `min_text_length <= max_text_length` and every cap is
/// non-zero when built through [`ExtractConfigBuilder`](super::ExtractConfigBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Shortest block text (chars) kept as body content
    pub(crate) min_text_length: usize,
    /// Longest body text (chars) before ellipsis truncation
    pub(crate) max_text_length: usize,
    pub(crate) summary_max_length: usize,
    pub(crate) max_keywords: usize,
    pub(crate) max_links: usize,
    pub(crate) max_images: usize,
    /// Longest link text / image alt text (chars)
    pub(crate) max_label_chars: usize,
    /// Largest markup (bytes) accepted before extraction gives up
    pub(crate) max_html_size: usize,
    pub(crate) sentence_terminators: SentenceTerminators,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            summary_max_length: DEFAULT_SUMMARY_MAX_LENGTH,
            max_keywords: DEFAULT_MAX_KEYWORDS,
            max_links: DEFAULT_MAX_LINKS,
            max_images: DEFAULT_MAX_IMAGES,
            max_label_chars: DEFAULT_MAX_LABEL_CHARS,
            max_html_size: DEFAULT_MAX_HTML_SIZE,
            sentence_terminators: SentenceTerminators::default(),
        }
    }
}

/// Settings for [`ContentAgent`](crate::pipeline::ContentAgent) runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Readable text shorter than this (trimmed, chars) aborts the run
    pub min_readable_chars: usize,
    /// URLs in flight at once during batch runs
    pub concurrency: usize,
    pub format: OutputFormat,
    pub extract: ExtractConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            min_readable_chars: DEFAULT_MIN_READABLE_CHARS,
            concurrency: DEFAULT_BATCH_CONCURRENCY,
            format: OutputFormat::default(),
            extract: ExtractConfig::default(),
        }
    }
}
