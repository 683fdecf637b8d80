//! Lightweight Markdown transforms used by the renderers.
//!
//! These handle the small dialect generated text actually uses (ATX
//! headings, `**bold**`, `*italic*`, `[links](..)`, blank-line paragraphs).
//! They are line and regex based, not a CommonMark implementation.

pub mod markdown_normalization;
pub mod markdown_stripping;
pub mod markdown_to_html;

pub use markdown_normalization::normalize_markdown;
pub use markdown_stripping::strip_markdown;
pub use markdown_to_html::markdown_to_html;
