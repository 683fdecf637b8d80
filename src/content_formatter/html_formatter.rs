//! Standalone HTML page rendering.

use html_escape::{encode_quoted_attribute, encode_text};

use super::markdown_converter::markdown_to_html;
use super::metadata::{
    KEY_CHAR_COUNT, KEY_SOURCE_URL, KEY_TEMPLATE, KEY_TIMESTAMP, KEY_WORD_COUNT, RenderMetadata,
};

pub const PAGE_TITLE: &str = "Web Content Digest";

/// Fixed stylesheet embedded in every rendered page.
pub const PAGE_STYLES: &str = r"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            background-color: #f5f5f5;
        }

        .metadata {
            background: #e3f2fd;
            border-left: 4px solid #2196f3;
            padding: 15px;
            margin-bottom: 20px;
            border-radius: 4px;
        }

        .metadata h3 {
            margin-top: 0;
            color: #1976d2;
        }

        .content {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }

        .content h1, .content h2, .content h3 {
            color: #333;
            border-bottom: 2px solid #eee;
            padding-bottom: 10px;
        }

        .content p {
            margin-bottom: 15px;
            text-align: justify;
        }

        .stats {
            background: #f1f8e9;
            border-left: 4px solid #8bc34a;
            padding: 15px;
            border-radius: 4px;
        }

        .stats h3 {
            margin-top: 0;
            color: #689f38;
        }

        .stat-item {
            display: inline-block;
            background: #dcedc8;
            padding: 5px 10px;
            border-radius: 15px;
            margin-right: 10px;
            font-size: 14px;
        }

        a {
            color: #1976d2;
            text-decoration: none;
        }

        a:hover {
            text-decoration: underline;
        }
        ";

/// Render `content` (Markdown) as a complete HTML page.
///
/// Metadata values are escaped before they are embedded; the source URL is
/// shown as a link opening in a new tab.
#[must_use]
pub fn render_html(content: &str, metadata: Option<&RenderMetadata>) -> String {
    let mut parts: Vec<String> = vec![
        "<!DOCTYPE html>".to_string(),
        r#"<html lang="en">"#.to_string(),
        "<head>".to_string(),
        r#"    <meta charset="UTF-8">"#.to_string(),
        r#"    <meta name="viewport" content="width=device-width, initial-scale=1.0">"#.to_string(),
        format!("    <title>{PAGE_TITLE}</title>"),
        "    <style>".to_string(),
        PAGE_STYLES.to_string(),
        "    </style>".to_string(),
        "</head>".to_string(),
        "<body>".to_string(),
    ];

    if let Some(meta) = metadata.filter(|m| !m.is_empty()) {
        parts.push(r#"    <div class="metadata">"#.to_string());
        parts.push("        <h3>📋 Overview</h3>".to_string());
        if let Some(source) = meta.display_value(KEY_SOURCE_URL) {
            parts.push(format!(
                r#"        <p><strong>Source:</strong> <a href="{}" target="_blank">{}</a></p>"#,
                encode_quoted_attribute(&source),
                encode_text(&source),
            ));
        }
        if let Some(timestamp) = meta.display_value(KEY_TIMESTAMP) {
            parts.push(format!(
                "        <p><strong>Generated:</strong> {}</p>",
                encode_text(&timestamp)
            ));
        }
        if let Some(template) = meta.display_value(KEY_TEMPLATE) {
            parts.push(format!(
                "        <p><strong>Template:</strong> {}</p>",
                encode_text(&template)
            ));
        }
        parts.push("    </div>".to_string());
    }

    parts.push(r#"    <div class="content">"#.to_string());
    parts.push(format!("        {}", markdown_to_html(content)));
    parts.push("    </div>".to_string());

    if let Some(meta) = metadata.filter(|m| m.has_statistics()) {
        parts.push(r#"    <div class="stats">"#.to_string());
        parts.push("        <h3>📊 Statistics</h3>".to_string());
        if let Some(words) = meta.display_value(KEY_WORD_COUNT) {
            parts.push(format!(
                r#"        <span class="stat-item">Words: {}</span>"#,
                encode_text(&words)
            ));
        }
        if let Some(chars) = meta.display_value(KEY_CHAR_COUNT) {
            parts.push(format!(
                r#"        <span class="stat-item">Characters: {}</span>"#,
                encode_text(&chars)
            ));
        }
        parts.push("    </div>".to_string());
    }

    parts.push("</body>".to_string());
    parts.push("</html>".to_string());

    parts.join("\n")
}
