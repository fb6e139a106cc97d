//! Selector Infrastructure
//!
//! Rules are plain predicates over a `Selection`. Content-root rules are
//! tried in priority order; the noise-container rule vetoes chrome wrappers.

use dom_query::Selection;

pub mod content;
pub mod discard;

pub use content::locate_content_root;
pub use discard::is_noise_container;

/// A selector rule that tests if a selection matches certain criteria
pub type Rule = fn(&Selection) -> bool;

/// Query for first element matching the rule
///
/// Iterates through all descendants in document order and returns the first
/// element for which the rule returns true.
///
/// # Example
///
/// ```rust
/// use jd_extract::{dom, selector};
///
/// let doc = dom::parse(r#"<div><p class="content">text</p></div>"#);
/// let root = doc.select("div");
///
/// fn has_content_class(sel: &dom::Selection) -> bool {
///     dom::class_tokens(sel).iter().any(|c| c == "content")
/// }
///
/// let result = selector::query(&root, has_content_class);
/// assert!(result.is_some());
/// ```
#[must_use]
pub fn query<'a>(root: &Selection<'a>, rule: Rule) -> Option<Selection<'a>> {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .find(|sel| rule(sel))
}
