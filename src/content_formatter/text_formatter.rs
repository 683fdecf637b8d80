//! Plain-text report rendering.

use super::markdown_converter::strip_markdown;
use super::metadata::{
    KEY_CHAR_COUNT, KEY_SOURCE_URL, KEY_TEMPLATE, KEY_TIMESTAMP, KEY_WORD_COUNT, RenderMetadata,
};

pub const BANNER: &str = "Web Content Digest";

const HEAVY_RULE_WIDTH: usize = 80;
const LIGHT_RULE_WIDTH: usize = 50;

/// Render `content` as a plain-text report with Markdown markup removed.
#[must_use]
pub fn render_text(content: &str, metadata: Option<&RenderMetadata>) -> String {
    let heavy_rule = "=".repeat(HEAVY_RULE_WIDTH);
    let light_rule = "-".repeat(LIGHT_RULE_WIDTH);
    let mut lines: Vec<String> = vec![heavy_rule.clone(), BANNER.to_string(), heavy_rule.clone()];

    if let Some(meta) = metadata.filter(|m| !m.is_empty()) {
        lines.push(String::new());
        lines.push("[Overview]".to_string());
        if let Some(source) = meta.display_value(KEY_SOURCE_URL) {
            lines.push(format!("Source: {source}"));
        }
        if let Some(timestamp) = meta.display_value(KEY_TIMESTAMP) {
            lines.push(format!("Generated: {timestamp}"));
        }
        if let Some(template) = meta.display_value(KEY_TEMPLATE) {
            lines.push(format!("Template: {template}"));
        }
    }

    lines.push(String::new());
    lines.push("[Content]".to_string());
    lines.push(light_rule.clone());
    lines.push(strip_markdown(content));

    if let Some(meta) = metadata.filter(|m| m.has_statistics()) {
        lines.push(String::new());
        lines.push(light_rule);
        lines.push("[Statistics]".to_string());
        if let Some(words) = meta.display_value(KEY_WORD_COUNT) {
            lines.push(format!("Words: {words}"));
        }
        if let Some(chars) = meta.display_value(KEY_CHAR_COUNT) {
            lines.push(format!("Characters: {chars}"));
        }
    }

    lines.push(heavy_rule);
    lines.join("\n")
}
