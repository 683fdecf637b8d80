use serde::{Deserialize, Serialize};

/// A hyperlink found in the filtered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Resolved against the base location unless already absolute or a fragment
    pub url: String,
    pub text: String,
}

/// An image found in the filtered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Resolved against the base location unless already absolute or `data:`
    pub url: String,
    pub alt: String,
}

/// Structured content pulled out of one HTML document.
///
/// Built once per extraction call. `Default` is the all-empty record returned
/// when extraction cannot run at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    pub title: String,
    pub description: String,
    /// Comma-joined keyword list
    pub keywords: String,
    /// Cleaned body text, ellipsis-truncated past the configured maximum
    pub main_content: String,
    pub summary: String,
    pub links: Vec<LinkRecord>,
    pub images: Vec<ImageRecord>,
}

impl ExtractionRecord {
    /// True when every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.keywords.is_empty()
            && self.main_content.is_empty()
            && self.summary.is_empty()
            && self.links.is_empty()
            && self.images.is_empty()
    }

    /// Flattened, human-oriented view: title, description, and body, each
    /// labelled and separated by a blank line. Empty parts are omitted.
    #[must_use]
    pub fn readable_text(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(3);
        if !self.title.is_empty() {
            parts.push(format!("Title: {}", self.title));
        }
        if !self.description.is_empty() {
            parts.push(format!("Description: {}", self.description));
        }
        if !self.main_content.is_empty() {
            parts.push(format!("Content:\n{}", self.main_content));
        }
        parts.join("\n\n")
    }
}
