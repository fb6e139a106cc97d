//! Extraction pipeline.
//!
//! Orchestrates the strategies over one response body:
//!
//! 1. generic-redirect check on the request/effective URL pair
//! 2. charset resolution and transcoding
//! 3. for HTML: cleaned-DOM rendering, JSON-LD description, and (when the
//!    cleaned rendering is thin) the plain-text fallback over the same
//!    filtered tree
//! 4. for anything else: the plain-text fallback alone
//! 5. scoring and selection
//!
//! Everything here is synchronous and deterministic. The DOM and all rendered
//! strings live only for the duration of one call.

use crate::dom::{self, Document};
use crate::encoding;
use crate::error::{Error, Result};
use crate::html_processing;
use crate::markdown;
use crate::metadata::json_ld;
use crate::result::{CandidateOrigin, ExtractionCandidate, ExtractionReport};
use crate::scoring;
use crate::selector;
use crate::url_utils;
use crate::Options;

use super::fallback;

/// Run every applicable strategy and report all scored candidates.
///
/// `original_url` and `effective_url` may be empty when the caller has no
/// URL context (for example a body read from disk); the URL checks are then
/// skipped.
///
/// # Errors
///
/// - [`Error::ManualInputRequired`] when `original_url` is given and is not http(s)
/// - [`Error::GenericRedirectDetected`] when the redirect heuristic trips
/// - [`Error::EmptyDescription`] when every candidate is blank
pub fn extract_report(
    body: &[u8],
    content_type: &str,
    original_url: &str,
    effective_url: &str,
    options: &Options,
) -> Result<ExtractionReport> {
    if !original_url.is_empty() {
        url_utils::require_fetchable(original_url)?;
        url_utils::check_redirect(original_url, effective_url)?;
    }

    let text = encoding::transcode_to_utf8(body, content_type);

    let candidates = if options.is_html(content_type) {
        html_candidates(&text, options)
    } else {
        vec![ExtractionCandidate::new(
            fallback::plain_text(&text),
            CandidateOrigin::PlainTextFallback,
        )]
    };

    let scored = scoring::score_all(candidates, &options.weights);
    let Some(best) = scoring::choose_best(&scored) else {
        tracing::debug!(content_type, "no non-empty candidate");
        return Err(Error::EmptyDescription);
    };

    let markdown = best.candidate.text.clone();
    let origin = best.candidate.origin;

    tracing::debug!(
        ?origin,
        score = best.score,
        candidates = scored.len(),
        "selected description"
    );

    Ok(ExtractionReport {
        markdown,
        origin,
        candidates: scored,
    })
}

/// Candidates for an HTML body, in tie-break priority order.
fn html_candidates(html: &str, options: &Options) -> Vec<ExtractionCandidate> {
    let mut candidates = Vec::with_capacity(3);

    let doc = cleaned_document(html);
    let cleaned = render_content_root(&doc, options);
    let cleaned_len = cleaned.chars().count();
    tracing::trace!(cleaned_len, "cleaned-DOM candidate");
    candidates.push(ExtractionCandidate::new(cleaned, CandidateOrigin::CleanedDom));

    if let Some(structured) = json_ld::extract_job_description(html, options) {
        tracing::trace!(len = structured.len(), "structured-data candidate");
        candidates.push(ExtractionCandidate::new(structured, CandidateOrigin::StructuredData));
    }

    if cleaned_len < options.min_cleaned_len {
        tracing::debug!(cleaned_len, "cleaned-DOM output is thin, adding plain-text fallback");
        candidates.push(ExtractionCandidate::new(
            fallback::plain_text_from_document(&doc),
            CandidateOrigin::PlainTextFallback,
        ));
    }

    candidates
}

/// The cleaned-DOM strategy on its own.
///
/// Parses the document, removes noise and hidden elements, locates the
/// content root, and renders it. Returns an empty string when the document
/// has no usable root.
///
/// # Example
///
/// ```rust
/// use jd_extract::{extractor::clean_html, Options};
///
/// let html = r#"<body><nav>Home</nav><main><h2>Role</h2><p>Build <b>things</b>.</p></main></body>"#;
/// assert_eq!(clean_html(html, &Options::default()), "## Role\n\nBuild **things**.");
/// ```
#[must_use]
pub fn clean_html(html: &str, options: &Options) -> String {
    render_content_root(&cleaned_document(html), options)
}

/// Parse and strip noise and hidden elements.
fn cleaned_document(html: &str) -> Document {
    let doc = dom::parse(html);
    html_processing::clean_document(&doc);
    doc
}

fn render_content_root(doc: &Document, options: &Options) -> String {
    selector::locate_content_root(doc, options)
        .map(|root| markdown::render_subtree(&root, options))
        .unwrap_or_default()
}
