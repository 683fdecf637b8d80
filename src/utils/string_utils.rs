//! UTF-8-safe string cleaning and truncation utilities
//!
//! All lengths in this crate are counted in characters (Unicode scalar
//! values), never bytes, so slicing must respect char boundaries.

use regex::Regex;
use std::sync::LazyLock;

/// C0 controls (except tab/newline/carriage return) plus DEL and C1 controls.
static CONTROL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F-\x9F]")
        .expect("BUG: hardcoded control character pattern is invalid")
});

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// # Examples
/// ```
/// # use kodegen_tools_distill::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("🎉🎊🎈", 2), "🎉🎊");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// Number of characters in `s`.
#[inline]
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Collapse every whitespace run to a single space, trim the ends, and drop
/// control characters.
///
/// # Examples
/// ```
/// # use kodegen_tools_distill::utils::string_utils::clean_text;
/// assert_eq!(clean_text("  Hello \n\t  world  "), "Hello world");
/// assert_eq!(clean_text("bell\u{7}ed"), "belled");
/// assert_eq!(clean_text(""), "");
/// ```
#[must_use]
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    CONTROL_CHARS.replace_all(&collapsed, "").into_owned()
}

/// Truncate to `max_chars` characters, appending `marker` only when
/// something was cut.
///
/// # Examples
/// ```
/// # use kodegen_tools_distill::utils::string_utils::truncate_with_marker;
/// assert_eq!(truncate_with_marker("abcdef", 3, "..."), "abc...");
/// assert_eq!(truncate_with_marker("abc", 3, "..."), "abc");
/// ```
#[must_use]
pub fn truncate_with_marker(text: &str, max_chars: usize, marker: &str) -> String {
    let head = safe_truncate_chars(text, max_chars);
    if head.len() == text.len() {
        return text.to_string();
    }
    let mut out = String::with_capacity(head.len() + marker.len());
    out.push_str(head);
    out.push_str(marker);
    out
}

/// Count of whitespace-separated tokens.
#[inline]
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count of `\n`-separated segments; the empty string is one line.
#[inline]
#[must_use]
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_strips_c1_controls() {
        assert_eq!(clean_text("a\u{85}b\u{9F}c"), "abc");
    }

    #[test]
    fn test_clean_text_keeps_unicode() {
        assert_eq!(clean_text("  网页   内容 "), "网页 内容");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_with_marker("网页内容整理", 2, "..."), "网页...");
    }

    #[test]
    fn test_counts() {
        assert_eq!(word_count("one two\nthree"), 3);
        assert_eq!(line_count("one two\nthree"), 2);
        assert_eq!(line_count(""), 1);
        assert_eq!(word_count(""), 0);
    }
}
