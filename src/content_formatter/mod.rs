//! Rendering of generated text into Markdown, HTML, plain-text, or JSON
//! artifacts, plus the metadata that accompanies them.
//!
//! [`try_render`] surfaces failures; [`render`] and [`render_named`] are the
//! fail-open entry points used by the pipeline.

pub mod errors;
pub mod html_formatter;
pub mod json_formatter;
pub mod markdown_converter;
pub mod markdown_formatter;
pub mod metadata;
pub mod output_format;
pub mod text_formatter;

pub use errors::{RenderError, RenderResult, UnknownFormat};
pub use html_formatter::render_html;
pub use json_formatter::{ContentStatistics, JsonDocument, render_json};
pub use markdown_formatter::render_markdown;
pub use metadata::{RenderMetadata, assemble_metadata};
pub use output_format::OutputFormat;
pub use text_formatter::render_text;

/// Render `content` in `format`.
///
/// # Errors
/// Returns [`RenderError::Serialization`] if the JSON document cannot be
/// serialized. The other formats never fail.
pub fn try_render(
    content: &str,
    format: OutputFormat,
    metadata: Option<&RenderMetadata>,
) -> RenderResult<String> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(content, metadata)),
        OutputFormat::Html => Ok(render_html(content, metadata)),
        OutputFormat::Text => Ok(render_text(content, metadata)),
        OutputFormat::Json => render_json(content, metadata),
    }
}

/// Render `content` in `format`, returning `content` unchanged on failure.
#[must_use]
pub fn render(content: &str, format: OutputFormat, metadata: Option<&RenderMetadata>) -> String {
    fail_open(content, format, try_render(content, format, metadata))
}

/// The rendered artifact, or `content` itself when rendering failed.
fn fail_open(content: &str, format: OutputFormat, rendered: RenderResult<String>) -> String {
    match rendered {
        Ok(rendered) => rendered,
        Err(e) => {
            tracing::error!(%format, error = %e, "Rendering failed, returning raw content");
            content.to_string()
        }
    }
}

/// Render by format name. Unknown names fall back to Markdown.
#[must_use]
pub fn render_named(content: &str, format_name: &str, metadata: Option<&RenderMetadata>) -> String {
    let format = format_name.parse().unwrap_or_else(|e: UnknownFormat| {
        tracing::warn!(error = %e, "Falling back to markdown");
        OutputFormat::Markdown
    });
    render(content, format, metadata)
}

/// Assemble metadata for `content` (source, template, statistics) and
/// render it in one step.
#[must_use]
pub fn format_with_template(
    content: &str,
    template: &str,
    source_url: Option<&str>,
    format: OutputFormat,
) -> String {
    let metadata = assemble_metadata(content, source_url, Some(template), None);
    render(content, format, Some(&metadata))
}
