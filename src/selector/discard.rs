//! Noise Container Detection
//!
//! A noise container is a structurally plausible content element that is
//! actually page chrome: navigation, footers, cookie banners, modals.

use crate::dom;
use dom_query::Selection;

/// Tags that are always chrome.
pub const NOISE_CONTAINER_TAGS: &[&str] = &["nav", "footer", "header", "form"];

/// Substrings of the (lower-cased) class attribute that mark chrome.
pub const NOISE_CLASS_NEEDLES: &[&str] = &[
    "footer",
    "header",
    "nav",
    "breadcrumb",
    "breadcrumbs",
    "menu",
    "sidebar",
    "subscribe",
    "newsletter",
    "cookie",
    "consent",
    "modal",
];

/// Whether an element is a noise container.
///
/// Class matching is a plain substring test, so `site-navigation` and
/// `navbar` both count.
///
/// # Example
///
/// ```rust
/// use jd_extract::{dom, selector};
///
/// let doc = dom::parse(r#"<main class="cookie-wrapper"></main><main id="x"></main>"#);
/// assert!(selector::is_noise_container(&doc.select("main.cookie-wrapper")));
/// assert!(!selector::is_noise_container(&doc.select("#x")));
/// ```
#[must_use]
pub fn is_noise_container(sel: &Selection) -> bool {
    if dom::tag_name(sel).is_some_and(|tag| NOISE_CONTAINER_TAGS.contains(&tag.as_str())) {
        return true;
    }

    let class = dom::class_name(sel).unwrap_or_default().to_lowercase();
    if class.is_empty() {
        return false;
    }

    NOISE_CLASS_NEEDLES.iter().any(|needle| class.contains(needle))
}
