//! Content Root Location
//!
//! Finds the subtree most likely to hold the job description. Structural
//! rules are tried in priority order; the first element each rule matches is
//! accepted unless it is a noise container. When no rule yields a root, the
//! longest non-noise `article`/`section`/`div` wins if it is long enough,
//! otherwise `<body>`.

use dom_query::{Document, Selection};

use crate::dom;
use crate::selector::discard::is_noise_container;
use crate::selector::{query, Rule};
use crate::Options;

/// Content root rules in priority order
pub static CONTENT_ROOT_RULES: &[Rule] = &[
    is_main_element,
    has_main_role,
    has_job_description_id,
    has_job_description_class,
    is_article_element,
];

/// Rule 1: `<main>`
#[must_use]
pub fn is_main_element(sel: &Selection) -> bool {
    dom::tag_name(sel).as_deref() == Some("main")
}

/// Rule 2: `role="main"`
#[must_use]
pub fn has_main_role(sel: &Selection) -> bool {
    dom::get_attribute(sel, "role").as_deref() == Some("main")
}

/// Rule 3: `id="jobDescription"` or `id="job-description"`
#[must_use]
pub fn has_job_description_id(sel: &Selection) -> bool {
    matches!(
        dom::get_attribute(sel, "id").as_deref(),
        Some("jobDescription" | "job-description")
    )
}

/// Rule 4: class token `job-description`
#[must_use]
pub fn has_job_description_class(sel: &Selection) -> bool {
    dom::class_tokens(sel).iter().any(|token| token == "job-description")
}

/// Rule 5: `<article>`
#[must_use]
pub fn is_article_element(sel: &Selection) -> bool {
    dom::tag_name(sel).as_deref() == Some("article")
}

/// Locate the content root of a (filtered) document.
///
/// Returns `None` only when the document has no `<body>`.
///
/// # Example
///
/// ```rust
/// use jd_extract::{dom, selector, Options};
///
/// let doc = dom::parse("<body><nav>Menu</nav><main><p>Role</p></main></body>");
/// let root = selector::locate_content_root(&doc, &Options::default());
/// assert_eq!(root.and_then(|r| dom::tag_name(&r)).as_deref(), Some("main"));
/// ```
#[must_use]
pub fn locate_content_root<'a>(doc: &'a Document, options: &Options) -> Option<Selection<'a>> {
    let html = doc.select("html");

    for (index, rule) in CONTENT_ROOT_RULES.iter().enumerate() {
        if let Some(sel) = query(&html, *rule) {
            if !is_noise_container(&sel) {
                tracing::debug!(rule = index + 1, "content root matched structural rule");
                return Some(sel);
            }
        }
    }

    if let Some((sel, len)) = densest_container(doc) {
        if len >= options.min_density_len {
            tracing::debug!(text_len = len, "content root chosen by density scan");
            return Some(sel);
        }
    }

    let body = doc.select("body");
    if body.exists() {
        tracing::debug!("content root falls back to <body>");
        Some(body)
    } else {
        None
    }
}

/// The non-noise `article`/`section`/`div` with the most text.
///
/// Ties keep the first in document order. Returns the container and its
/// trimmed text length in characters.
#[must_use]
pub fn densest_container(doc: &Document) -> Option<(Selection<'_>, usize)> {
    let lengths = dom::text_lengths(doc);
    let mut best: Option<(Selection<'_>, usize)> = None;

    for node in doc.select("article, section, div").nodes() {
        let sel = Selection::from(*node);
        if is_noise_container(&sel) {
            continue;
        }

        let len = lengths.get(&node.id).copied().unwrap_or(0);
        if len > best.as_ref().map_or(0, |(_, best_len)| *best_len) {
            best = Some((sel, len));
        }
    }

    best
}
