//! Query capability over a parsed document.
//!
//! Field extractors only ever ask two things of a document: "which elements
//! match this selector?" and, per element, its tag, attributes, text, and
//! block-level descendants. [`Queryable`] and [`QueryNode`] capture exactly
//! that, so selector chains stay plain data and extractors can run against an
//! in-memory fake as easily as against a `scraper` tree.

use scraper::{ElementRef, Html, Selector};

use super::element_filter::remove_unwanted_elements;

/// A single element as seen by the field extractors.
pub trait QueryNode: Sized {
    /// Lowercase tag name, e.g. `"meta"`
    fn tag_name(&self) -> &str;

    fn attr(&self, name: &str) -> Option<&str>;

    /// Descendant text runs concatenated as-is, then trimmed. Inner
    /// whitespace is left for `clean_text` to collapse.
    fn text_content(&self) -> String;

    /// Strict descendants whose tag is one of `tags`, in document order.
    fn descendants_with_tags(&self, tags: &[&str]) -> Vec<Self>;
}

/// A document that can answer CSS selector queries.
pub trait Queryable {
    type Node<'a>: QueryNode
    where
        Self: 'a;

    /// All elements matching `selector`, in document order. A selector the
    /// implementation cannot interpret matches nothing.
    fn select(&self, selector: &str) -> Vec<Self::Node<'_>>;

    fn select_first(&self, selector: &str) -> Option<Self::Node<'_>> {
        self.select(selector).into_iter().next()
    }
}

impl<'a> QueryNode for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn text_content(&self) -> String {
        let joined: String = ElementRef::text(self).collect();
        joined.trim().to_string()
    }

    fn descendants_with_tags(&self, tags: &[&str]) -> Vec<Self> {
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|el| tags.contains(&el.value().name()))
            .collect()
    }
}

/// `scraper`-backed document.
pub struct ScraperDocument {
    html: Html,
}

impl ScraperDocument {
    /// Parse markup leniently; malformed input still yields a tree.
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Parse markup and strip non-content elements in one step.
    #[must_use]
    pub fn parse_filtered(markup: &str) -> Self {
        let mut doc = Self::parse(markup);
        remove_unwanted_elements(&mut doc.html);
        doc
    }

    #[must_use]
    pub fn html(&self) -> &Html {
        &self.html
    }

    pub fn html_mut(&mut self) -> &mut Html {
        &mut self.html
    }
}

impl Queryable for ScraperDocument {
    type Node<'a> = ElementRef<'a>;

    fn select(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(selector) {
            Ok(parsed) => self.html.select(&parsed).collect(),
            Err(e) => {
                tracing::warn!(selector, error = ?e, "Skipping unparseable selector");
                Vec::new()
            }
        }
    }
}

/// In-memory document for driving extractors without a parser.
#[cfg(test)]
pub(crate) mod fake {
    use super::{QueryNode, Queryable};
    use std::collections::HashMap;

    #[derive(Debug, Clone, Default)]
    pub(crate) struct FakeNode {
        pub tag: String,
        pub attrs: Vec<(String, String)>,
        pub text: String,
        pub children: Vec<FakeNode>,
    }

    impl FakeNode {
        pub(crate) fn new(tag: &str, text: &str) -> Self {
            Self {
                tag: tag.to_string(),
                text: text.to_string(),
                ..Default::default()
            }
        }

        pub(crate) fn meta(content: &str) -> Self {
            Self::new("meta", "").with_attr("content", content)
        }

        pub(crate) fn with_attr(mut self, name: &str, value: &str) -> Self {
            self.attrs.push((name.to_string(), value.to_string()));
            self
        }

        pub(crate) fn with_child(mut self, child: FakeNode) -> Self {
            self.children.push(child);
            self
        }

        fn raw_text(&self) -> String {
            let mut text = self.text.clone();
            for child in &self.children {
                text.push_str(&child.raw_text());
            }
            text
        }

        fn collect<'a>(&'a self, tags: &[&str], out: &mut Vec<&'a FakeNode>) {
            for child in &self.children {
                if tags.contains(&child.tag.as_str()) {
                    out.push(child);
                }
                child.collect(tags, out);
            }
        }
    }

    impl<'a> QueryNode for &'a FakeNode {
        fn tag_name(&self) -> &str {
            &self.tag
        }

        fn attr(&self, name: &str) -> Option<&str> {
            self.attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        }

        fn text_content(&self) -> String {
            (*self).raw_text().trim().to_string()
        }

        fn descendants_with_tags(&self, tags: &[&str]) -> Vec<Self> {
            let mut out = Vec::new();
            (*self).collect(tags, &mut out);
            out
        }
    }

    /// Answers each selector string with a canned node list.
    #[derive(Debug, Default)]
    pub(crate) struct FakeDocument {
        pub matches: HashMap<String, Vec<FakeNode>>,
    }

    impl FakeDocument {
        pub(crate) fn with(mut self, selector: &str, nodes: Vec<FakeNode>) -> Self {
            self.matches.insert(selector.to_string(), nodes);
            self
        }
    }

    impl Queryable for FakeDocument {
        type Node<'a> = &'a FakeNode;

        fn select(&self, selector: &str) -> Vec<&FakeNode> {
            self.matches
                .get(selector)
                .map(|nodes| nodes.iter().collect())
                .unwrap_or_default()
        }
    }
}
