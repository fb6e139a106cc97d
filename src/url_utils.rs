//! URL Utility Functions
//!
//! Scheme validation and the "redirected to a generic page" heuristic.
//! Some job boards drop the query string (which carries the posting id)
//! when the request has no browser session, and land on a listing page.

use url::Url;

use crate::error::{Error, Result};

/// The parts of a URL the redirect heuristic compares.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedUrl {
    /// Lower-cased scheme.
    pub scheme: String,
    /// Host, if any.
    pub host: Option<String>,
    /// Path (always starts with `/` for http(s) URLs).
    pub path: String,
    /// Query string without the leading `?`; `None` when absent.
    pub query: Option<String>,
}

impl ParsedUrl {
    /// Parse an absolute URL. Returns `None` for relative or malformed input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let url = Url::parse(s.trim()).ok()?;

        Some(Self {
            scheme: url.scheme().to_string(),
            host: url.host_str().map(str::to_string),
            path: url.path().to_string(),
            query: url.query().map(str::to_string),
        })
    }

    /// Whether there is a non-empty query string.
    #[must_use]
    pub fn has_query(&self) -> bool {
        self.query.as_deref().is_some_and(|q| !q.is_empty())
    }
}

/// Whether a URL can be fetched automatically (http or https).
///
/// Case-insensitive prefix check, matching what callers see in the UI.
///
/// ```rust
/// use jd_extract::url_utils::is_fetchable_url;
///
/// assert!(is_fetchable_url("HTTPS://jobs.example/1"));
/// assert!(!is_fetchable_url("file:///etc/passwd"));
/// assert!(!is_fetchable_url(""));
/// ```
#[must_use]
pub fn is_fetchable_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Fail with [`Error::ManualInputRequired`] unless the URL is http(s).
///
/// # Errors
///
/// Returns [`Error::ManualInputRequired`] carrying the rejected URL.
pub fn require_fetchable(url: &str) -> Result<()> {
    if is_fetchable_url(url) {
        Ok(())
    } else {
        tracing::debug!(url, "non-http(s) url requires manual input");
        Err(Error::ManualInputRequired { url: url.to_string() })
    }
}

/// Whether the effective URL looks like a query-stripping redirect.
///
/// Trips when the request URL carried a non-empty query and the effective
/// URL carries none. Path and host are not compared, so both
/// `/job?id=1 -> /job` and `/job?id=1 -> /careers` trip. Unparsable URLs
/// never trip.
///
/// ```rust
/// use jd_extract::url_utils::is_generic_redirect;
///
/// assert!(is_generic_redirect("https://board.example/job?id=123", "https://board.example/careers"));
/// assert!(!is_generic_redirect("https://board.example/job?id=123", "https://board.example/job?id=123"));
/// assert!(!is_generic_redirect("https://board.example/job", "https://board.example/careers"));
/// ```
#[must_use]
pub fn is_generic_redirect(original: &str, effective: &str) -> bool {
    let (Some(original), Some(effective)) = (ParsedUrl::parse(original), ParsedUrl::parse(effective)) else {
        return false;
    };

    original.has_query() && !effective.has_query()
}

/// Fail with [`Error::GenericRedirectDetected`] when [`is_generic_redirect`] trips.
///
/// An empty effective URL means "no redirect information" and passes.
///
/// # Errors
///
/// Returns [`Error::GenericRedirectDetected`].
pub fn check_redirect(original: &str, effective: &str) -> Result<()> {
    if effective.trim().is_empty() || !is_generic_redirect(original, effective) {
        return Ok(());
    }

    tracing::warn!(original, effective, "query string dropped by redirect");
    Err(Error::GenericRedirectDetected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsed_url_parts() {
        let parsed = ParsedUrl::parse("HTTPS://Board.Example/Job/View?id=1&x=2").unwrap();
        assert_eq!(parsed.scheme, "https");
        assert_eq!(parsed.host.as_deref(), Some("board.example"));
        assert_eq!(parsed.path, "/Job/View");
        assert_eq!(parsed.query.as_deref(), Some("id=1&x=2"));
        assert!(ParsedUrl::parse("/relative/path").is_none());
    }

    #[test]
    fn empty_query_counts_as_absent() {
        let parsed = ParsedUrl::parse("https://a.example/job?").unwrap();
        assert!(!parsed.has_query());
        assert!(!is_generic_redirect("https://a.example/job?", "https://a.example/job"));
        assert!(is_generic_redirect("https://a.example/job?id=1", "https://a.example/job?"));
    }

    #[test]
    fn same_path_redirect_trips() {
        assert!(is_generic_redirect("https://a.example/job?id=1", "https://a.example/job"));
    }

    #[test]
    fn changed_query_does_not_trip() {
        assert!(!is_generic_redirect("https://a.example/job?id=1", "https://a.example/job?id=1&lang=en"));
    }

    #[test]
    fn unparsable_urls_do_not_trip() {
        assert!(!is_generic_redirect("not a url?x=1", "https://a.example/"));
        assert!(!is_generic_redirect("https://a.example/?x=1", "::::"));
    }

    #[test]
    fn check_redirect_errors() {
        assert!(check_redirect("https://a.example/job?id=1", "").is_ok());
        assert!(matches!(
            check_redirect("https://a.example/job?id=1", "https://a.example/careers"),
            Err(Error::GenericRedirectDetected)
        ));
    }

    #[test]
    fn require_fetchable_carries_url() {
        match require_fetchable("ftp://files.example/job.txt") {
            Err(Error::ManualInputRequired { url }) => assert_eq!(url, "ftp://files.example/job.txt"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(require_fetchable("http://a.example").is_ok());
    }
}
