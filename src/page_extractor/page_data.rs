//! Extraction orchestration.
//!
//! `ContentProcessor` runs the element filter, every field extractor, and the
//! summary generator over one document and assembles an [`ExtractionRecord`].

use super::document::ScraperDocument;
use super::errors::{ExtractError, ExtractResult};
use super::extractors::{
    extract_description, extract_images, extract_keywords, extract_links, extract_title,
};
use super::main_content::extract_main_content;
use super::schema::ExtractionRecord;
use super::summary::generate_summary;
use crate::config::ExtractConfig;
use crate::utils::safe_truncate_chars;

/// Stateless extractor bound to one configuration. Cheap to clone and safe to
/// share across threads.
#[derive(Debug, Clone, Default)]
pub struct ContentProcessor {
    config: ExtractConfig,
}

impl ContentProcessor {
    #[must_use]
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extract a record, surfacing conditions that stop extraction outright.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InputTooLarge`] when `markup` exceeds
    /// `max_html_size`.
    pub fn try_extract(
        &self,
        markup: &str,
        base_url: Option<&str>,
    ) -> ExtractResult<ExtractionRecord> {
        if markup.len() > self.config.max_html_size() {
            return Err(ExtractError::InputTooLarge {
                size: markup.len(),
                limit: self.config.max_html_size(),
            });
        }

        let doc = ScraperDocument::parse_filtered(markup);

        let title = extract_title(&doc);
        let description = extract_description(&doc);
        let keywords = extract_keywords(&doc, self.config.max_keywords());
        let links = extract_links(&doc, base_url, &self.config);
        let images = extract_images(&doc, base_url, &self.config);
        let main_content = extract_main_content(&doc, &self.config);
        let summary = generate_summary(
            &main_content,
            self.config.summary_max_length(),
            self.config.sentence_terminators(),
        );

        tracing::info!(
            title = safe_truncate_chars(&title, 50),
            content_chars = main_content.chars().count(),
            links = links.len(),
            images = images.len(),
            "Content extraction complete"
        );

        Ok(ExtractionRecord {
            title,
            description,
            keywords,
            main_content,
            summary,
            links,
            images,
        })
    }

    /// Extract a record; any top-level failure yields the all-empty record.
    ///
    /// Markup longer than `max_html_size` bytes (10 MiB by default) counts as
    /// such a failure, so a valid but oversized page also comes back empty.
    /// Use [`try_extract`](Self::try_extract) to tell the two apart.
    #[must_use]
    pub fn extract(&self, markup: &str, base_url: Option<&str>) -> ExtractionRecord {
        self.try_extract(markup, base_url).unwrap_or_else(|e| {
            tracing::error!(error = %e, "HTML processing failed");
            ExtractionRecord::default()
        })
    }

    /// Title, description, and body flattened into prompt-ready text.
    #[must_use]
    pub fn readable_text(&self, markup: &str, base_url: Option<&str>) -> String {
        self.extract(markup, base_url).readable_text()
    }
}

/// [`ContentProcessor::extract`] with default limits.
///
/// Markup over the default 10 MiB `max_html_size` yields the all-empty record.
#[must_use]
pub fn extract(markup: &str, base_url: Option<&str>) -> ExtractionRecord {
    ContentProcessor::default().extract(markup, base_url)
}

/// [`ContentProcessor::readable_text`] with default limits.
#[must_use]
pub fn readable_text(markup: &str, base_url: Option<&str>) -> String {
    ContentProcessor::default().readable_text(markup, base_url)
}
