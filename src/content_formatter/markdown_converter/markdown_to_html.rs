//! Minimal Markdown to HTML conversion for the HTML renderer.

use regex::Regex;
use std::sync::LazyLock;

static H1: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^# (.*?)$").expect("H1: hardcoded regex is valid")
});

static H2: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^## (.*?)$").expect("H2: hardcoded regex is valid")
});

static H3: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^### (.*?)$").expect("H3: hardcoded regex is valid")
});

static BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(.*?)\*\*").expect("BOLD: hardcoded regex is valid")
});

static ITALIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*(.*?)\*").expect("ITALIC: hardcoded regex is valid")
});

static HEADING_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<[hH][1-6]>").expect("HEADING_START: hardcoded regex is valid")
});

/// Convert `markdown` to an HTML fragment.
///
/// The input is HTML-escaped first, so markup in generated text is shown
/// literally. Then `#`/`##`/`###` lines become `<h1>`..`<h3>`, `**x**`
/// becomes `<strong>` and `*x*` becomes `<em>`. Blank-line separated blocks
/// that are not headings are wrapped in `<p>` with inner newlines turned
/// into `<br>`. Blocks are joined with `\n`.
///
/// A heading directly followed by text on the next line stays a single block
/// and is not wrapped.
///
/// ```
/// # use kodegen_tools_distill::content_formatter::markdown_converter::markdown_to_html;
/// assert_eq!(
///     markdown_to_html("# Title\n\nSome **bold** text"),
///     "<h1>Title</h1>\n<p>Some <strong>bold</strong> text</p>"
/// );
/// ```
#[must_use]
pub fn markdown_to_html(markdown: &str) -> String {
    let escaped = html_escape::encode_quoted_attribute(markdown);
    let html = H1.replace_all(&escaped, "<h1>${1}</h1>");
    let html = H2.replace_all(&html, "<h2>${1}</h2>");
    let html = H3.replace_all(&html, "<h3>${1}</h3>");
    let html = BOLD.replace_all(&html, "<strong>${1}</strong>");
    let html = ITALIC.replace_all(&html, "<em>${1}</em>");

    html.split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| {
            if HEADING_START.is_match(block) {
                block.to_string()
            } else {
                format!("<p>{}</p>", block.replace('\n', "<br>"))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
