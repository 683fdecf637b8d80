//! Markdown document rendering.

use super::markdown_converter::normalize_markdown;
use super::metadata::{
    KEY_CHAR_COUNT, KEY_SOURCE_URL, KEY_TEMPLATE, KEY_TIMESTAMP, KEY_WORD_COUNT, RenderMetadata,
};

const RULE: &str = "---";

/// Render `content` as a Markdown document.
///
/// Non-empty metadata adds a `---` fenced header with source, generation
/// time and template. A statistics footer follows when the metadata carries
/// `word_count` or `char_count`, even if their values are falsy; only the
/// lines for truthy values are printed.
#[must_use]
pub fn render_markdown(content: &str, metadata: Option<&RenderMetadata>) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(meta) = metadata.filter(|m| !m.is_empty()) {
        lines.push(RULE.to_string());
        if let Some(source) = meta.display_value(KEY_SOURCE_URL) {
            lines.push(format!("**Source**: {source}"));
        }
        if let Some(timestamp) = meta.display_value(KEY_TIMESTAMP) {
            lines.push(format!("**Generated**: {timestamp}"));
        }
        if let Some(template) = meta.display_value(KEY_TEMPLATE) {
            lines.push(format!("**Template**: {template}"));
        }
        lines.push(format!("{RULE}\n"));
    }

    lines.push(normalize_markdown(content));

    if let Some(meta) = metadata.filter(|m| m.has_statistics()) {
        lines.push(format!("\n{RULE}"));
        lines.push("**Statistics**".to_string());
        if let Some(words) = meta.display_value(KEY_WORD_COUNT) {
            lines.push(format!("- Words: {words}"));
        }
        if let Some(chars) = meta.display_value(KEY_CHAR_COUNT) {
            lines.push(format!("- Characters: {chars}"));
        }
    }

    lines.join("\n")
}
