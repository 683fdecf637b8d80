//! Fluent builder for `ExtractConfig`
//!
//! Every setter is optional; `build()` validates the combination so an
//! `ExtractConfig` in hand always satisfies its invariants.

use anyhow::{Result, bail};

use super::types::ExtractConfig;
use crate::page_extractor::summary::SentenceTerminators;

#[derive(Debug, Clone, Default)]
pub struct ExtractConfigBuilder {
    config: ExtractConfig,
}

impl ExtractConfig {
    /// Create a builder seeded with the default limits
    #[must_use]
    pub fn builder() -> ExtractConfigBuilder {
        ExtractConfigBuilder::default()
    }
}

impl ExtractConfigBuilder {
    #[must_use]
    pub fn min_text_length(mut self, chars: usize) -> Self {
        self.config.min_text_length = chars;
        self
    }

    #[must_use]
    pub fn max_text_length(mut self, chars: usize) -> Self {
        self.config.max_text_length = chars;
        self
    }

    #[must_use]
    pub fn summary_max_length(mut self, chars: usize) -> Self {
        self.config.summary_max_length = chars;
        self
    }

    #[must_use]
    pub fn max_keywords(mut self, count: usize) -> Self {
        self.config.max_keywords = count;
        self
    }

    #[must_use]
    pub fn max_links(mut self, count: usize) -> Self {
        self.config.max_links = count;
        self
    }

    #[must_use]
    pub fn max_images(mut self, count: usize) -> Self {
        self.config.max_images = count;
        self
    }

    #[must_use]
    pub fn max_label_chars(mut self, chars: usize) -> Self {
        self.config.max_label_chars = chars;
        self
    }

    #[must_use]
    pub fn max_html_size(mut self, bytes: usize) -> Self {
        self.config.max_html_size = bytes;
        self
    }

    #[must_use]
    pub fn sentence_terminators(mut self, terminators: SentenceTerminators) -> Self {
        self.config.sentence_terminators = terminators;
        self
    }

    /// Validate and produce the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is zero or `min_text_length` exceeds
    /// `max_text_length`.
    pub fn build(self) -> Result<ExtractConfig> {
        let c = self.config;
        if c.max_text_length == 0 {
            bail!("max_text_length must be greater than zero");
        }
        if c.min_text_length > c.max_text_length {
            bail!(
                "min_text_length ({}) exceeds max_text_length ({})",
                c.min_text_length,
                c.max_text_length
            );
        }
        for (name, value) in [
            ("summary_max_length", c.summary_max_length),
            ("max_keywords", c.max_keywords),
            ("max_links", c.max_links),
            ("max_images", c.max_images),
            ("max_label_chars", c.max_label_chars),
            ("max_html_size", c.max_html_size),
        ] {
            if value == 0 {
                bail!("{name} must be greater than zero");
            }
        }
        if c.sentence_terminators.is_empty() {
            bail!("sentence_terminators must contain at least one character");
        }
        Ok(c)
    }
}
