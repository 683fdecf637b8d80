//! Render metadata: content statistics plus caller-supplied fields.

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::{char_len, line_count, word_count};

pub const KEY_TIMESTAMP: &str = "timestamp";
pub const KEY_CHAR_COUNT: &str = "char_count";
pub const KEY_WORD_COUNT: &str = "word_count";
pub const KEY_LINE_COUNT: &str = "line_count";
pub const KEY_SOURCE_URL: &str = "source_url";
pub const KEY_TEMPLATE: &str = "template";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Key → scalar mapping attached to a render call.
///
/// Serializes as a plain JSON object. Keys are kept in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderMetadata(Map<String, Value>);

impl RenderMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Merge `other` in; its fields win on key collisions.
    pub fn merge(&mut self, other: RenderMetadata) {
        self.0.extend(other.0);
    }

    /// Display form of `key`, or `None` when the field is missing or falsy
    /// (null, `false`, zero, empty string/array/object).
    ///
    /// Strings are shown verbatim; other values use their JSON form.
    #[must_use]
    pub fn display_value(&self, key: &str) -> Option<String> {
        let value = self.get(key).filter(|v| is_truthy(v))?;
        Some(match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// True when either statistics field is present, regardless of value.
    #[must_use]
    pub fn has_statistics(&self) -> bool {
        self.contains_key(KEY_WORD_COUNT) || self.contains_key(KEY_CHAR_COUNT)
    }
}

impl From<Map<String, Value>> for RenderMetadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for RenderMetadata {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for RenderMetadata {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Statistics and provenance for a piece of generated text.
///
/// The timestamp is captured at call time. `extra` is merged last and may
/// overwrite any computed field.
#[must_use]
pub fn assemble_metadata(
    text: &str,
    source_url: Option<&str>,
    template: Option<&str>,
    extra: Option<RenderMetadata>,
) -> RenderMetadata {
    let mut metadata = RenderMetadata::new()
        .with(KEY_TIMESTAMP, Local::now().format(TIMESTAMP_FORMAT).to_string())
        .with(KEY_CHAR_COUNT, char_len(text))
        .with(KEY_WORD_COUNT, word_count(text))
        .with(KEY_LINE_COUNT, line_count(text));

    if let Some(url) = source_url.filter(|u| !u.is_empty()) {
        metadata.insert(KEY_SOURCE_URL, url);
    }
    if let Some(name) = template.filter(|t| !t.is_empty()) {
        metadata.insert(KEY_TEMPLATE, name);
    }
    if let Some(extra) = extra {
        metadata.merge(extra);
    }

    metadata
}
