//! Non-content element removal.
//!
//! Strips scripts, navigation, ads, sidebars, comment widgets and similar
//! chrome from a parsed tree before any field extraction runs. Removal is
//! permanent: matched subtrees are detached, so no downstream extractor can
//! see them.

use ego_tree::NodeId;
use scraper::node::Element;
use scraper::{ElementRef, Html};

/// Tags removed wherever they appear.
///
/// Besides the standard chrome tags this covers custom tags some sites use
/// for ad slots, sidebars, menus and comment threads.
pub const REMOVE_TAGS: &[&str] = &[
    "script",
    "style",
    "nav",
    "header",
    "footer",
    "aside",
    "advertisement",
    "ads",
    "sidebar",
    "menu",
    "comment",
];

/// Keywords matched as case-insensitive substrings of the space-joined class
/// list, so `"ad"` also hits `"shadow"` and `"loaded"`.
pub const REMOVE_CLASS_KEYWORDS: &[&str] = &[
    "nav",
    "menu",
    "sidebar",
    "footer",
    "header",
    "ad",
    "ads",
    "advertisement",
    "comment",
    "share",
    "social",
    "related",
    "recommend",
    "popup",
    "modal",
];

/// Whether an element is page chrome rather than content.
#[must_use]
pub fn is_unwanted(element: &Element) -> bool {
    if REMOVE_TAGS.contains(&element.name()) {
        return true;
    }

    let mut classes = element.classes().peekable();
    if classes.peek().is_none() {
        return false;
    }
    let joined = classes.collect::<Vec<_>>().join(" ").to_lowercase();
    REMOVE_CLASS_KEYWORDS
        .iter()
        .any(|keyword| joined.contains(keyword))
}

/// Detach every unwanted element (and its subtree) from `document`.
///
/// Only nodes still attached to the tree are visited, so a second pass over
/// the same document matches nothing.
pub fn remove_unwanted_elements(document: &mut Html) {
    let doomed: Vec<NodeId> = document
        .tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| is_unwanted(el.value()))
        .map(|el| el.id())
        .collect();

    if doomed.is_empty() {
        return;
    }

    for id in &doomed {
        if let Some(mut node) = document.tree.get_mut(*id) {
            node.detach();
        }
    }

    tracing::debug!(removed = doomed.len(), "Removed non-content elements");
}
