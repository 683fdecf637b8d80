//! Remove Markdown markup, keeping the readable text.

use regex::Regex;
use std::sync::LazyLock;

static HEADING_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#{1,6}\s+").expect("HEADING_MARKER: hardcoded regex is valid")
});

static BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(.*?)\*\*").expect("BOLD: hardcoded regex is valid")
});

static ITALIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*(.*?)\*").expect("ITALIC: hardcoded regex is valid")
});

static INLINE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("INLINE_LINK: hardcoded regex is valid")
});

/// Strip heading markers, bold and italic markers, and inline links
/// (`[text](url)` becomes `text`).
///
/// Everything else, including list bullets and blank lines, is kept.
#[must_use]
pub fn strip_markdown(markdown: &str) -> String {
    let text = HEADING_MARKER.replace_all(markdown, "");
    let text = BOLD.replace_all(&text, "${1}");
    let text = ITALIC.replace_all(&text, "${1}");
    INLINE_LINK.replace_all(&text, "${1}").into_owned()
}
