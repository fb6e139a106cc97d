//! # jd-extract
//!
//! Job description extraction and HTML to Markdown conversion.
//!
//! Given a raw HTTP response body fetched from a job board, this library
//! isolates the posting itself and renders it as clean Markdown, dropping
//! navigation chrome, forms, scripts, hidden elements, and other boilerplate.
//!
//! ## Quick Start
//!
//! ```rust
//! use jd_extract::extract;
//!
//! let html = br#"<html><body>
//!   <nav>Jobs | Teams | Login</nav>
//!   <main>
//!     <h2>Senior Engineer</h2>
//!     <p>Join our mission <span style="display:none">secret</span> to build.</p>
//!     <ul><li>Lead projects</li><li>Coach teammates</li></ul>
//!   </main>
//! </body></html>"#;
//!
//! let markdown = extract(html, "text/html; charset=utf-8", "https://jobs.example/42", "https://jobs.example/42")?;
//! assert_eq!(
//!     markdown,
//!     "## Senior Engineer\n\nJoin our mission to build.\n\n- Lead projects\n- Coach teammates"
//! );
//! # Ok::<(), jd_extract::Error>(())
//! ```
//!
//! ## Strategies
//!
//! - **Cleaned DOM**: noise and hidden elements removed, a content root
//!   located by structural selectors or text density, rendered block by block
//! - **Structured data**: `JobPosting.description` from `application/ld+json`
//! - **Plain-text fallback**: text of the filtered tree, stylesheet and JSON lines dropped
//!
//! Every strategy yields a candidate; the one with the highest structural
//! score wins.

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Noise and visibility filtering.
pub mod html_processing;

/// Content root selection rules.
pub mod selector;

/// Block and inline Markdown rendering.
pub mod markdown;

/// Structured data (JSON-LD) extraction.
pub mod metadata;

/// Extraction strategies and the pipeline.
pub mod extractor;

/// Candidate scoring.
pub mod scoring;

/// URL validation and redirect detection.
pub mod url_utils;

/// Fetch boundary: page source trait and fetch-and-extract.
pub mod fetch;

// Public API - re-exports
pub use error::{BoxError, Error, Result};
pub use fetch::{fetch_and_extract, fetch_and_extract_report, FetchedPage, PageSource};
pub use options::{Options, DEFAULT_MAX_DEPTH, DEFAULT_MIN_CLEANED_LEN, DEFAULT_MIN_DENSITY_LEN};
pub use result::{CandidateOrigin, ExtractionCandidate, ExtractionReport, ScoredCandidate};
pub use scoring::ScoreWeights;

/// Extracts the job description from a response body using default options.
///
/// # Arguments
///
/// * `body` - Raw response bytes
/// * `content_type` - Declared `Content-Type` header value (may be empty)
/// * `original_url` - The URL that was requested (may be empty to skip URL checks)
/// * `effective_url` - The URL after redirects (may be empty)
///
/// # Errors
///
/// See [`extract_with_options`].
pub fn extract(body: &[u8], content_type: &str, original_url: &str, effective_url: &str) -> Result<String> {
    extract_with_options(body, content_type, original_url, effective_url, &Options::default())
}

/// Extracts the job description with custom options.
///
/// # Errors
///
/// - [`Error::ManualInputRequired`] when `original_url` is given and is not http(s)
/// - [`Error::GenericRedirectDetected`] when the redirect dropped the query string
/// - [`Error::EmptyDescription`] when nothing usable was found
///
/// # Example
///
/// ```rust
/// use jd_extract::{extract_with_options, Options};
///
/// let options = Options {
///     min_cleaned_len: 0,
///     ..Options::default()
/// };
/// let md = extract_with_options(b"Plain text posting", "text/plain", "", "", &options)?;
/// assert_eq!(md, "Plain text posting");
/// # Ok::<(), jd_extract::Error>(())
/// ```
pub fn extract_with_options(
    body: &[u8],
    content_type: &str,
    original_url: &str,
    effective_url: &str,
    options: &Options,
) -> Result<String> {
    extract_report(body, content_type, original_url, effective_url, options).map(|report| report.markdown)
}

/// Extracts the job description and reports every scored candidate.
///
/// # Errors
///
/// See [`extract_with_options`].
pub fn extract_report(
    body: &[u8],
    content_type: &str,
    original_url: &str,
    effective_url: &str,
    options: &Options,
) -> Result<ExtractionReport> {
    extractor::extract_report(body, content_type, original_url, effective_url, options)
}
