//! JSON document rendering.

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::errors::RenderResult;
use super::metadata::RenderMetadata;
use crate::utils::{char_len, line_count, word_count};

/// Content statistics recomputed at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStatistics {
    pub character_count: usize,
    pub word_count: usize,
    pub line_count: usize,
}

impl ContentStatistics {
    #[must_use]
    pub fn of(content: &str) -> Self {
        Self {
            character_count: char_len(content),
            word_count: word_count(content),
            line_count: line_count(content),
        }
    }
}

/// Shape of a rendered JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonDocument {
    pub content: String,
    /// RFC 3339, local offset
    pub timestamp: String,
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RenderMetadata>,
    pub statistics: ContentStatistics,
}

/// Render `content` as a pretty-printed (2-space) JSON object.
///
/// The `statistics` block is always recomputed from `content`, so it can
/// disagree with counts carried in `metadata`. Non-ASCII text is written
/// as-is.
pub fn render_json(content: &str, metadata: Option<&RenderMetadata>) -> RenderResult<String> {
    let document = JsonDocument {
        content: content.to_string(),
        timestamp: Local::now().to_rfc3339(),
        format: "json".to_string(),
        metadata: metadata.filter(|m| !m.is_empty()).cloned(),
        statistics: ContentStatistics::of(content),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use serde_json::Value;

    #[test]
    fn test_document_shape() {
        let out = render_json("两个 words\nline two", None).expect("render");
        let value: Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(value["content"], "两个 words\nline two");
        assert_eq!(value["format"], "json");
        assert!(value.get("metadata").is_none());
        assert_eq!(value["statistics"]["character_count"], 17);
        assert_eq!(value["statistics"]["word_count"], 4);
        assert_eq!(value["statistics"]["line_count"], 2);
        let stamp = value["timestamp"].as_str().expect("timestamp string");
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
        // Non-ASCII is not \u-escaped
        assert!(out.contains("两个"));
        assert!(out.starts_with("{\n  \"content\""));
    }

    #[test]
    fn test_metadata_embedded_but_statistics_recomputed() {
        let meta = RenderMetadata::new().with("word_count", 999).with("model", "m1");
        let out = render_json("three little words", Some(&meta)).expect("render");
        let doc: JsonDocument = serde_json::from_str(&out).expect("round trip");
        assert_eq!(doc.metadata.as_ref(), Some(&meta));
        assert_eq!(doc.statistics.word_count, 3);
    }

    #[test]
    fn test_empty_metadata_omitted() {
        let out = render_json("x", Some(&RenderMetadata::new())).expect("render");
        let value: Value = serde_json::from_str(&out).expect("valid json");
        assert!(value.get("metadata").is_none());
    }
}
