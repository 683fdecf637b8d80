//! Markdown body cleanup before it is embedded in a Markdown document.

use regex::Regex;
use std::sync::LazyLock;

/// Emoji that get a separating space when glued to preceding text.
pub const SPACED_EMOJI: &str = "🎉🔥💡📝🎯✨👍💪🚀🌟⭐";

/// Three or more newlines collapse to one blank line.
static EXCESS_BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("EXCESS_BLANK_LINES: hardcoded regex is valid")
});

/// Non-whitespace immediately followed by one of [`SPACED_EMOJI`].
static GLUED_EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(\S)([{SPACED_EMOJI}])"))
        .expect("GLUED_EMOJI: hardcoded regex is valid")
});

/// Collapse runs of blank lines, space out glued emoji, and trim.
///
/// Matches do not overlap, so in `a🎉🔥` only the first emoji is spaced.
///
/// ```
/// # use kodegen_tools_distill::content_formatter::markdown_converter::normalize_markdown;
/// assert_eq!(normalize_markdown("Done🎉\n\n\n\nNext"), "Done 🎉\n\nNext");
/// ```
#[must_use]
pub fn normalize_markdown(markdown: &str) -> String {
    let collapsed = EXCESS_BLANK_LINES.replace_all(markdown, "\n\n");
    let spaced = GLUED_EMOJI.replace_all(&collapsed, "${1} ${2}");
    spaced.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_runs_collapse() {
        assert_eq!(normalize_markdown("a\n\n\n\n\nb\n\nc"), "a\n\nb\n\nc");
    }

    #[test]
    fn test_emoji_spacing() {
        assert_eq!(normalize_markdown("Ship it🚀"), "Ship it 🚀");
        assert_eq!(normalize_markdown("Already 🚀"), "Already 🚀");
        assert_eq!(normalize_markdown("🌟 at start"), "🌟 at start");
        // Emoji outside the set are left alone
        assert_eq!(normalize_markdown("Cool😀"), "Cool😀");
    }

    #[test]
    fn test_trims_outer_whitespace() {
        assert_eq!(normalize_markdown("\n\n  # Title\n\n"), "# Title");
    }
}
