//! Rendering scenarios across all output formats

use kodegen_tools_distill::content_formatter::markdown_converter::strip_markdown;
use kodegen_tools_distill::content_formatter::{
    JsonDocument, OutputFormat, RenderMetadata, assemble_metadata, format_with_template, render,
    render_named, try_render,
};

mod common;

const GENERATED: &str = "# Weekly Digest\n\n**Rust 2.0** ships *soon*🚀\n\n\n\nRead the [announcement](https://blog.example/rust).";

#[test]
fn test_plain_text_strips_markup() {
    let out = render("# Title\n**Bold** and *it* [link](http://x)", OutputFormat::Text, None);
    let content_block = out
        .split(&"-".repeat(50))
        .nth(1)
        .expect("content section present");
    assert!(content_block.starts_with("\nTitle\nBold and it link\n"));
    assert!(!out.contains("**"));
    assert!(!out.contains("http://x"));
}

#[test]
fn test_strip_markdown_scenario() {
    assert_eq!(
        strip_markdown("**bold** and *italic* and [a link](http://x)"),
        "bold and italic and a link"
    );
}

#[test]
fn test_markdown_document_with_assembled_metadata() {
    common::init_tracing();
    let meta = assemble_metadata(
        GENERATED,
        Some("https://blog.example/rust"),
        Some("digest"),
        None,
    );
    let out = render(GENERATED, OutputFormat::Markdown, Some(&meta));
    let timestamp = meta.display_value("timestamp").expect("timestamp");

    common::assert_markdown_eq(
        &out,
        &format!(
            "---
            **Source**: https://blog.example/rust
            **Generated**: {timestamp}
            **Template**: digest
            ---
            # Weekly Digest
            **Rust 2.0** ships *soon* 🚀
            Read the [announcement](https://blog.example/rust).
            ---
            **Statistics**
            - Words: {words}
            - Characters: {chars}",
            words = GENERATED.split_whitespace().count(),
            chars = GENERATED.chars().count(),
        ),
    );
    assert!(!out.contains("\n\n\n"));
}

#[test]
fn test_html_document() {
    let meta = RenderMetadata::new()
        .with("source_url", "https://blog.example/rust")
        .with("word_count", 12);
    let out = render(GENERATED, OutputFormat::Html, Some(&meta));
    assert!(out.contains("<h1>Weekly Digest</h1>"));
    assert!(out.contains("<p><strong>Rust 2.0</strong> ships <em>soon</em>🚀</p>"));
    assert!(out.contains(r#"href="https://blog.example/rust""#));
    assert!(out.contains("Words: 12"));
    assert!(!out.contains("Characters:"));
}

#[test]
fn test_json_round_trip() {
    let meta = RenderMetadata::new()
        .with("source_url", "https://blog.example/rust")
        .with("model", "demo-model");
    let out = try_render(GENERATED, OutputFormat::Json, Some(&meta)).expect("json renders");
    let doc: JsonDocument = serde_json::from_str(&out).expect("parses back");

    assert_eq!(doc.content, GENERATED);
    assert_eq!(doc.format, "json");
    assert_eq!(doc.metadata, Some(meta));
    assert_eq!(doc.statistics.character_count, GENERATED.chars().count());
    assert_eq!(doc.statistics.word_count, GENERATED.split_whitespace().count());
    assert_eq!(doc.statistics.line_count, GENERATED.split('\n').count());
}

#[test]
fn test_format_names() {
    for (name, format) in [
        ("markdown", OutputFormat::Markdown),
        ("Html", OutputFormat::Html),
        ("TEXT", OutputFormat::Text),
    ] {
        assert_eq!(render_named(GENERATED, name, None), render(GENERATED, format, None));
    }
    assert_eq!(
        render_named(GENERATED, "docx", None),
        render(GENERATED, OutputFormat::Markdown, None)
    );
}

#[test]
fn test_format_with_template_in_every_format() {
    for format in OutputFormat::ALL {
        let out =
            format_with_template(GENERATED, "digest", Some("https://blog.example/rust"), format);
        assert!(out.contains("digest"), "{format} output lacks template name");
        assert!(out.contains("https://blog.example/rust"), "{format} output lacks source");
    }
}
