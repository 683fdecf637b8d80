//! Field extractors for title, description, keywords, links, and images.
//!
//! Each extractor is a pure function of a (filtered) [`Queryable`] document.
//! Selector chains are ordered data: the first candidate that passes the
//! field's length check wins. Extractors share no state, and a selector the
//! document cannot interpret simply contributes no candidates.

use super::document::{QueryNode, Queryable};
use super::schema::{ImageRecord, LinkRecord};
use crate::config::ExtractConfig;
use crate::utils::url_utils::{IMAGE_PASSTHROUGH_PREFIXES, LINK_PASSTHROUGH_PREFIXES};
use crate::utils::{char_len, clean_text, resolve_reference, safe_truncate_chars};

/// Title candidates in priority order.
pub const TITLE_SELECTORS: &[&str] = &[
    "h1",
    "title",
    r#"meta[property="og:title"]"#,
    r#"meta[name="title"]"#,
];

/// Description candidates in priority order.
pub const DESCRIPTION_SELECTORS: &[&str] = &[
    r#"meta[name="description"]"#,
    r#"meta[property="og:description"]"#,
    r#"meta[name="summary"]"#,
];

/// Keyword sources, all of which contribute.
pub const KEYWORD_SELECTORS: &[&str] = &[
    r#"meta[name="keywords"]"#,
    r#"meta[property="article:tag"]"#,
];

pub const LINK_SELECTOR: &str = "a[href]";
pub const IMAGE_SELECTOR: &str = "img[src]";

/// A title must be longer than this many chars.
const TITLE_MIN_EXCLUSIVE: usize = 3;
/// A description must be longer than this many chars.
const DESCRIPTION_MIN_EXCLUSIVE: usize = 10;

/// `content` attribute for `<meta>`, visible text for anything else.
fn candidate_text<N: QueryNode>(node: &N) -> String {
    if node.tag_name() == "meta" {
        node.attr("content").unwrap_or_default().trim().to_string()
    } else {
        node.text_content()
    }
}

/// First selector's first match whose cleaned text is longer than
/// `min_exclusive` chars.
fn first_accepted<D: Queryable + ?Sized>(
    doc: &D,
    selectors: &[&str],
    min_exclusive: usize,
) -> String {
    for selector in selectors {
        let Some(node) = doc.select_first(selector) else {
            continue;
        };
        let cleaned = clean_text(&candidate_text(&node));
        if char_len(&cleaned) > min_exclusive {
            tracing::debug!(selector, "Accepted candidate");
            return cleaned;
        }
    }
    String::new()
}

/// Page title: first `<h1>`, `<title>`, `og:title`, `title` meta.
#[must_use]
pub fn extract_title<D: Queryable + ?Sized>(doc: &D) -> String {
    first_accepted(doc, TITLE_SELECTORS, TITLE_MIN_EXCLUSIVE)
}

/// Page description from `description`, `og:description`, `summary` metas.
#[must_use]
pub fn extract_description<D: Queryable + ?Sized>(doc: &D) -> String {
    first_accepted(doc, DESCRIPTION_SELECTORS, DESCRIPTION_MIN_EXCLUSIVE)
}

/// Comma-separated keywords from every keyword source, capped at
/// `max_keywords` and joined with `", "`.
#[must_use]
pub fn extract_keywords<D: Queryable + ?Sized>(doc: &D, max_keywords: usize) -> String {
    KEYWORD_SELECTORS
        .iter()
        .flat_map(|selector| doc.select(selector))
        .filter_map(|node| node.attr("content").map(|c| c.trim().to_string()))
        .flat_map(|content| {
            content
                .split(',')
                .map(clean_text)
                .filter(|kw| !kw.is_empty())
                .collect::<Vec<_>>()
        })
        .take(max_keywords)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Anchors with a non-empty reference and visible text, in document order.
#[must_use]
pub fn extract_links<D: Queryable + ?Sized>(
    doc: &D,
    base_url: Option<&str>,
    config: &ExtractConfig,
) -> Vec<LinkRecord> {
    let mut links = Vec::new();
    for anchor in doc.select(LINK_SELECTOR) {
        if links.len() >= config.max_links() {
            break;
        }
        let href = anchor.attr("href").unwrap_or_default().trim();
        let text = clean_text(&anchor.text_content());
        if href.is_empty() || text.is_empty() {
            continue;
        }
        links.push(LinkRecord {
            url: resolve_reference(href, base_url, LINK_PASSTHROUGH_PREFIXES),
            text: safe_truncate_chars(&text, config.max_label_chars()).to_string(),
        });
    }
    links
}

/// Images with a non-empty source, in document order.
#[must_use]
pub fn extract_images<D: Queryable + ?Sized>(
    doc: &D,
    base_url: Option<&str>,
    config: &ExtractConfig,
) -> Vec<ImageRecord> {
    let mut images = Vec::new();
    for img in doc.select(IMAGE_SELECTOR) {
        if images.len() >= config.max_images() {
            break;
        }
        let src = img.attr("src").unwrap_or_default().trim();
        if src.is_empty() {
            continue;
        }
        let alt = clean_text(img.attr("alt").unwrap_or_default());
        images.push(ImageRecord {
            url: resolve_reference(src, base_url, IMAGE_PASSTHROUGH_PREFIXES),
            alt: safe_truncate_chars(&alt, config.max_label_chars()).to_string(),
        });
    }
    images
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_extractor::document::fake::{FakeDocument, FakeNode};

    #[test]
    fn test_title_prefers_h1() {
        let doc = FakeDocument::default()
            .with("h1", vec![FakeNode::new("h1", "Visible")])
            .with("title", vec![FakeNode::new("title", "Hidden")]);
        assert_eq!(extract_title(&doc), "Visible");
    }

    #[test]
    fn test_title_skips_short_candidates() {
        let doc = FakeDocument::default()
            .with("h1", vec![FakeNode::new("h1", "Hi")])
            .with(
                r#"meta[property="og:title"]"#,
                vec![FakeNode::meta("  Open Graph   Title ")],
            );
        assert_eq!(extract_title(&doc), "Open Graph Title");
    }

    #[test]
    fn test_title_only_first_match_per_selector() {
        // A short first <h1> is not rescued by a longer second <h1>
        let doc = FakeDocument::default().with(
            "h1",
            vec![FakeNode::new("h1", "Yo"), FakeNode::new("h1", "Long enough")],
        );
        assert_eq!(extract_title(&doc), "");
    }

    #[test]
    fn test_title_empty_document() {
        assert_eq!(extract_title(&FakeDocument::default()), "");
    }

    #[test]
    fn test_description_requires_more_than_ten_chars() {
        let doc = FakeDocument::default()
            .with(r#"meta[name="description"]"#, vec![FakeNode::meta("Too short")])
            .with(
                r#"meta[name="summary"]"#,
                vec![FakeNode::meta("A sufficiently long summary")],
            );
        assert_eq!(extract_description(&doc), "A sufficiently long summary");
    }

    #[test]
    fn test_keywords_merge_and_cap() {
        let doc = FakeDocument::default()
            .with(
                r#"meta[name="keywords"]"#,
                vec![FakeNode::meta("a, b, c, d, e, f, g, h")],
            )
            .with(
                r#"meta[property="article:tag"]"#,
                vec![FakeNode::meta("i"), FakeNode::meta("j, k, l")],
            );
        assert_eq!(extract_keywords(&doc, 10), "a, b, c, d, e, f, g, h, i, j");
    }

    #[test]
    fn test_keywords_drop_empty_pieces() {
        let doc = FakeDocument::default()
            .with(r#"meta[name="keywords"]"#, vec![FakeNode::meta("rust,, ,async ")]);
        assert_eq!(extract_keywords(&doc, 10), "rust, async");
    }

    #[test]
    fn test_links_resolve_and_filter() {
        let doc = FakeDocument::default().with(
            LINK_SELECTOR,
            vec![
                FakeNode::new("a", "Relative").with_attr("href", "b.html"),
                FakeNode::new("a", "").with_attr("href", "empty-text.html"),
                FakeNode::new("a", "Absolute").with_attr("href", "https://other.com/x"),
                FakeNode::new("a", "Fragment").with_attr("href", "#section"),
                FakeNode::new("a", "Blank").with_attr("href", "   "),
            ],
        );
        let links = extract_links(&doc, Some("https://example.com/a/"), &ExtractConfig::default());
        let urls: Vec<_> = links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["https://example.com/a/b.html", "https://other.com/x", "#section"]
        );
        assert_eq!(links[0].text, "Relative");
    }

    #[test]
    fn test_links_cap_and_text_truncation() {
        let long_text = "x".repeat(150);
        let anchors = (0..80)
            .map(|i| FakeNode::new("a", &long_text).with_attr("href", &format!("/p/{i}")))
            .collect();
        let doc = FakeDocument::default().with(LINK_SELECTOR, anchors);
        let links = extract_links(&doc, None, &ExtractConfig::default());
        assert_eq!(links.len(), 50);
        assert!(links.iter().all(|l| l.text.chars().count() == 100));
        assert_eq!(links[0].url, "/p/0");
    }

    #[test]
    fn test_images_keep_data_uris() {
        let doc = FakeDocument::default().with(
            IMAGE_SELECTOR,
            vec![
                FakeNode::new("img", "").with_attr("src", "img/logo.png").with_attr("alt", "Logo"),
                FakeNode::new("img", "").with_attr("src", "data:image/gif;base64,R0lG"),
                FakeNode::new("img", "").with_attr("src", ""),
            ],
        );
        let images = extract_images(
            &doc,
            Some("https://example.com/docs/"),
            &ExtractConfig::default(),
        );
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].url, "https://example.com/docs/img/logo.png");
        assert_eq!(images[0].alt, "Logo");
        assert_eq!(images[1].url, "data:image/gif;base64,R0lG");
        assert_eq!(images[1].alt, "");
    }

    #[test]
    fn test_images_cap() {
        let imgs = (0..30)
            .map(|i| FakeNode::new("img", "").with_attr("src", &format!("{i}.png")))
            .collect();
        let doc = FakeDocument::default().with(IMAGE_SELECTOR, imgs);
        assert_eq!(extract_images(&doc, None, &ExtractConfig::default()).len(), 20);
    }
}
