//! Main body text extraction.
//!
//! Looks for semantic content containers in priority order (`<main>`,
//! `<article>`, `role="main"`, common content class/id conventions). The
//! first container whose block-level text runs past 100 chars wins; if none
//! does, the whole `<body>` is used instead. The result is cleaned and
//! truncated to the configured maximum with an ellipsis.

use super::document::{QueryNode, Queryable};
use crate::config::ExtractConfig;
use crate::utils::{ELLIPSIS, MAIN_CONTENT_ACCEPT_CHARS, char_len, clean_text, truncate_with_marker};

/// Content containers in priority order.
pub const CONTENT_SELECTORS: &[&str] = &[
    "main",
    "article",
    r#"[role="main"]"#,
    ".content",
    ".main-content",
    ".article-content",
    ".post-content",
    ".entry-content",
    "#content",
    "#main-content",
];

pub const BODY_SELECTOR: &str = "body";

/// Block-level descendants whose text is collected paragraph by paragraph.
pub const BLOCK_TAGS: &[&str] = &["p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li"];

/// Text of `elements`, one line per block-level descendant.
///
/// Blocks shorter than `min_text_length` chars are dropped. An element with no
/// block-level descendants contributes its own text instead. Nested blocks
/// are each visited, so a `<div>` wrapping a `<p>` yields both texts.
#[must_use]
pub fn extract_text_from_elements<N: QueryNode>(elements: &[N], min_text_length: usize) -> String {
    let mut texts: Vec<String> = Vec::new();

    for element in elements {
        let blocks = element.descendants_with_tags(BLOCK_TAGS);
        if blocks.is_empty() {
            let text = element.text_content();
            if !text.is_empty() {
                texts.push(text);
            }
            continue;
        }
        texts.extend(
            blocks
                .iter()
                .map(QueryNode::text_content)
                .filter(|text| !text.is_empty() && char_len(text) >= min_text_length),
        );
    }

    texts.join("\n")
}

/// Main body text of a (filtered) document.
///
/// Never fails: a document with no usable containers and no `<body>` yields
/// an empty string.
#[must_use]
pub fn extract_main_content<D: Queryable + ?Sized>(doc: &D, config: &ExtractConfig) -> String {
    let mut main_content = String::new();

    for selector in CONTENT_SELECTORS {
        let elements = doc.select(selector);
        if elements.is_empty() {
            continue;
        }
        main_content = extract_text_from_elements(&elements, config.min_text_length());
        if char_len(&main_content) > MAIN_CONTENT_ACCEPT_CHARS {
            tracing::debug!(selector, "Using content container");
            break;
        }
    }

    if char_len(&main_content) < MAIN_CONTENT_ACCEPT_CHARS {
        let body = doc.select(BODY_SELECTOR);
        if !body.is_empty() {
            tracing::debug!("Falling back to <body> for main content");
            main_content = extract_text_from_elements(&body[..1], config.min_text_length());
        }
    }

    let cleaned = clean_text(&main_content);
    truncate_with_marker(&cleaned, config.max_text_length(), ELLIPSIS)
}
