//! Fetch boundary.
//!
//! The HTTP client itself lives outside this crate. A [`PageSource`] hands
//! back the body, the declared content-type, and the effective URL after
//! redirects; [`fetch_and_extract`] wraps it with the scheme check, error
//! mapping, and the extraction pipeline.

use crate::error::{BoxError, Error, Result};
use crate::extractor;
use crate::result::ExtractionReport;
use crate::url_utils;
use crate::Options;

/// Headers a fetch client should send so job boards treat it like a browser.
pub const DEFAULT_REQUEST_HEADERS: &[(&str, &str)] = &[
    (
        "User-Agent",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    ),
    ("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    ("Accept-Language", "en-US,en;q=0.9"),
];

/// A fetched response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchedPage {
    /// Raw body bytes.
    pub body: Vec<u8>,
    /// Declared `Content-Type` header value (may be empty).
    pub content_type: String,
    /// URL after following redirects.
    pub effective_url: String,
}

/// Something that can fetch a URL.
///
/// Implemented for any `Fn(&str) -> Result<FetchedPage, BoxError>`, so tests
/// and simple callers can pass a closure.
pub trait PageSource {
    /// Fetch `url`, following redirects.
    ///
    /// # Errors
    ///
    /// Any transport or HTTP-status failure.
    fn fetch(&self, url: &str) -> std::result::Result<FetchedPage, BoxError>;
}

impl<F> PageSource for F
where
    F: Fn(&str) -> std::result::Result<FetchedPage, BoxError>,
{
    fn fetch(&self, url: &str) -> std::result::Result<FetchedPage, BoxError> {
        self(url)
    }
}

/// Fetch a URL and extract its job description as Markdown.
///
/// # Errors
///
/// - [`Error::ManualInputRequired`] for non-http(s) URLs (the source is never called)
/// - [`Error::FetchFailed`] when the source fails
/// - any error of [`extractor::extract_report`]
///
/// # Example
///
/// ```rust
/// use jd_extract::fetch::{fetch_and_extract, FetchedPage};
/// use jd_extract::{BoxError, Options};
///
/// let source = |url: &str| -> Result<FetchedPage, BoxError> {
///     Ok(FetchedPage {
///         body: b"<main><h2>Engineer</h2></main>".to_vec(),
///         content_type: "text/html".into(),
///         effective_url: url.into(),
///     })
/// };
///
/// let md = fetch_and_extract(&source, "https://jobs.example/1", &Options::default())?;
/// assert_eq!(md, "## Engineer");
/// # Ok::<(), jd_extract::Error>(())
/// ```
pub fn fetch_and_extract<S>(source: &S, url: &str, options: &Options) -> Result<String>
where
    S: PageSource + ?Sized,
{
    fetch_and_extract_report(source, url, options).map(|report| report.markdown)
}

/// Like [`fetch_and_extract`], returning every scored candidate.
///
/// # Errors
///
/// See [`fetch_and_extract`].
pub fn fetch_and_extract_report<S>(source: &S, url: &str, options: &Options) -> Result<ExtractionReport>
where
    S: PageSource + ?Sized,
{
    url_utils::require_fetchable(url)?;

    let page = source.fetch(url).map_err(|err| {
        tracing::warn!(url, error = %err, "fetch failed");
        Error::FetchFailed(err)
    })?;

    tracing::debug!(
        url,
        effective_url = %page.effective_url,
        content_type = %page.content_type,
        bytes = page.body.len(),
        "fetched page"
    );

    extractor::extract_report(&page.body, &page.content_type, url, &page.effective_url, options)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn page(body: &str, content_type: &str, effective_url: &str) -> FetchedPage {
        FetchedPage {
            body: body.as_bytes().to_vec(),
            content_type: content_type.to_string(),
            effective_url: effective_url.to_string(),
        }
    }

    #[test]
    fn non_http_url_never_reaches_the_source() {
        let calls = Cell::new(0);
        let source = |_: &str| -> std::result::Result<FetchedPage, BoxError> {
            calls.set(calls.get() + 1);
            Ok(FetchedPage::default())
        };

        let err = fetch_and_extract(&source, "javascript:alert(1)", &Options::default()).unwrap_err();
        assert!(matches!(err, Error::ManualInputRequired { .. }));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn source_errors_become_fetch_failed() {
        let source = |_: &str| -> std::result::Result<FetchedPage, BoxError> { Err("connection reset".into()) };

        let err = fetch_and_extract(&source, "https://jobs.example/1", &Options::default()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to retrieve job description: connection reset");
    }

    #[test]
    fn redirect_is_checked_against_effective_url() {
        let source = |_: &str| -> std::result::Result<FetchedPage, BoxError> {
            Ok(page("<main><p>Careers home</p></main>", "text/html", "https://board.example/careers"))
        };

        let err = fetch_and_extract(&source, "https://board.example/job?id=123", &Options::default()).unwrap_err();
        assert!(matches!(err, Error::GenericRedirectDetected));
    }

    #[test]
    fn report_lists_candidates() {
        let source = |url: &str| -> std::result::Result<FetchedPage, BoxError> {
            Ok(page("<main><h2>Engineer</h2><p>Remote</p></main>", "text/html; charset=utf-8", url))
        };

        let report = fetch_and_extract_report(&source, "https://jobs.example/1?id=9", &Options::default()).unwrap();
        assert_eq!(report.markdown, "## Engineer\n\nRemote");
        assert!(!report.candidates.is_empty());
    }

    #[test]
    fn default_headers_look_like_a_browser() {
        let ua = DEFAULT_REQUEST_HEADERS
            .iter()
            .find(|(name, _)| *name == "User-Agent")
            .map(|(_, value)| *value)
            .unwrap();
        assert!(ua.starts_with("Mozilla/5.0"));
    }
}
