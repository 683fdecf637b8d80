//! URL reference resolution utilities.
//!
//! Relative `href`/`src` references are joined onto the document's base
//! location. References that are already absolute, or that the caller marks
//! as opaque (fragments, `data:` URIs), pass through untouched.

use url::Url;

/// Prefixes that mark a link reference as already resolved.
pub const LINK_PASSTHROUGH_PREFIXES: &[&str] = &["http://", "https://", "#"];

/// Prefixes that mark an image reference as already resolved.
pub const IMAGE_PASSTHROUGH_PREFIXES: &[&str] = &["http://", "https://", "data:"];

/// Resolve `reference` against `base`, unless it starts with one of
/// `passthrough` or there is no usable base.
///
/// An unparseable base or a failed join leaves the reference unchanged.
///
/// # Examples
/// ```
/// # use kodegen_tools_distill::utils::url_utils::{resolve_reference, LINK_PASSTHROUGH_PREFIXES};
/// let base = Some("https://example.com/a/");
/// assert_eq!(
///     resolve_reference("b.html", base, LINK_PASSTHROUGH_PREFIXES),
///     "https://example.com/a/b.html"
/// );
/// assert_eq!(
///     resolve_reference("https://other.com/x", base, LINK_PASSTHROUGH_PREFIXES),
///     "https://other.com/x"
/// );
/// assert_eq!(resolve_reference("#top", base, LINK_PASSTHROUGH_PREFIXES), "#top");
/// ```
#[must_use]
pub fn resolve_reference(reference: &str, base: Option<&str>, passthrough: &[&str]) -> String {
    let Some(base) = base.filter(|b| !b.is_empty()) else {
        return reference.to_string();
    };
    if passthrough.iter().any(|p| reference.starts_with(p)) {
        return reference.to_string();
    }

    match Url::parse(base).and_then(|base_url| base_url.join(reference)) {
        Ok(joined) => joined.to_string(),
        Err(e) => {
            tracing::debug!(reference, base, error = %e, "Leaving reference unresolved");
            reference.to_string()
        }
    }
}

/// Check if a URL is a valid http(s) URL
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
