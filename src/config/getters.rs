//! Getter methods for `ExtractConfig`

use super::types::ExtractConfig;
use crate::page_extractor::summary::SentenceTerminators;

impl ExtractConfig {
    #[must_use]
    pub fn min_text_length(&self) -> usize {
        self.min_text_length
    }

    #[must_use]
    pub fn max_text_length(&self) -> usize {
        self.max_text_length
    }

    #[must_use]
    pub fn summary_max_length(&self) -> usize {
        self.summary_max_length
    }

    #[must_use]
    pub fn max_keywords(&self) -> usize {
        self.max_keywords
    }

    #[must_use]
    pub fn max_links(&self) -> usize {
        self.max_links
    }

    #[must_use]
    pub fn max_images(&self) -> usize {
        self.max_images
    }

    #[must_use]
    pub fn max_label_chars(&self) -> usize {
        self.max_label_chars
    }

    #[must_use]
    pub fn max_html_size(&self) -> usize {
        self.max_html_size
    }

    #[must_use]
    pub fn sentence_terminators(&self) -> &SentenceTerminators {
        &self.sentence_terminators
    }
}
