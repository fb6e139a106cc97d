//! HTML Noise and Visibility Filtering
//!
//! Removes non-content elements and anything the page hides from readers.
//! Removal detaches the element and its whole subtree, so no later stage
//! can see it. This stage never fails.

use crate::dom::{self, Document, Selection};

/// Tags removed with their subtrees before anything else looks at the tree.
pub const NOISE_TAGS: &[&str] = &[
    "script", "style", "noscript", "template", "svg", "iframe", "canvas",
    "form", "fieldset", "legend",
    "input", "select", "textarea", "button", "label",
    "meta", "link", "base",
];

/// Class tokens used for visually hidden content.
pub const HIDDEN_CLASSES: &[&str] = &["sr-only", "visually-hidden", "screen-reader-text", "hidden"];

/// Inline style declarations that hide an element (compared without whitespace).
pub const HIDDEN_STYLES: &[&str] = &["display:none", "visibility:hidden", "opacity:0"];

/// Run both filters over a document.
pub fn clean_document(doc: &Document) {
    remove_noise(doc);
    remove_hidden_elements(doc);
}

/// Remove every element whose tag is in [`NOISE_TAGS`].
///
/// # Example
///
/// ```rust
/// use jd_extract::{dom, html_processing};
///
/// let doc = dom::parse("<body><p>Keep</p><script>drop()</script><form><label>Name</label></form></body>");
/// html_processing::remove_noise(&doc);
/// assert_eq!(doc.select("body").text().trim(), "Keep");
/// ```
pub fn remove_noise(doc: &Document) {
    let selector = NOISE_TAGS.join(", ");
    dom::remove(&doc.select(&selector));
}

/// Remove every element the page marks as hidden.
///
/// See [`is_hidden`] for the exact rules.
pub fn remove_hidden_elements(doc: &Document) {
    let candidates = doc.select("[hidden], [aria-hidden], [class], [style]");
    let mut removed = 0usize;

    for node in candidates.nodes() {
        let sel = Selection::from(*node);
        if is_hidden(&sel) {
            dom::remove(&sel);
            removed += 1;
        }
    }

    tracing::trace!(removed, "removed hidden elements");
}

/// Whether an element is hidden from readers.
///
/// An element is hidden when it:
/// - carries the boolean `hidden` attribute,
/// - has `aria-hidden="true"`,
/// - has a class token in [`HIDDEN_CLASSES`],
/// - or has an inline style containing one of [`HIDDEN_STYLES`].
#[must_use]
pub fn is_hidden(sel: &Selection) -> bool {
    if dom::has_attribute(sel, "hidden") {
        return true;
    }

    if dom::get_attribute(sel, "aria-hidden").is_some_and(|v| v.trim().eq_ignore_ascii_case("true")) {
        return true;
    }

    if dom::class_tokens(sel)
        .iter()
        .any(|token| HIDDEN_CLASSES.contains(&token.as_str()))
    {
        return true;
    }

    dom::get_attribute(sel, "style").is_some_and(|style| is_hidden_style(&style))
}

/// Whether an inline style value hides its element.
///
/// Case-insensitive and whitespace-insensitive substring match, so
/// `opacity: 0.5` counts as hidden too.
///
/// ```rust
/// use jd_extract::html_processing::is_hidden_style;
///
/// assert!(is_hidden_style("color: red; DISPLAY : None"));
/// assert!(is_hidden_style("opacity: 0"));
/// assert!(is_hidden_style("opacity: 0.5"));
/// assert!(!is_hidden_style("opacity: 1"));
/// assert!(!is_hidden_style("display: block"));
/// ```
#[must_use]
pub fn is_hidden_style(style: &str) -> bool {
    let compact: String = style
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    HIDDEN_STYLES.iter().any(|needle| compact.contains(needle))
}
