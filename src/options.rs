//! Configuration options for job description extraction.
//!
//! The `Options` struct holds the thresholds and weights the heuristics use.
//! Defaults are tuned against observed job boards; they are a starting point,
//! not a guarantee.

use crate::scoring::ScoreWeights;

/// Default minimum length (characters) of the cleaned-DOM candidate before
/// the plain-text fallback is also computed.
pub const DEFAULT_MIN_CLEANED_LEN: usize = 200;

/// Default minimum flattened text length for the density scan to accept a container.
pub const DEFAULT_MIN_DENSITY_LEN: usize = 200;

/// Default hard cap on element nesting depth during rendering.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration options for extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use jd_extract::Options;
///
/// let options = Options {
///     min_cleaned_len: 500,
///     ..Options::default()
/// };
/// assert_eq!(options.max_depth, 256);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Cleaned-DOM candidates shorter than this (in characters) trigger the
    /// plain-text fallback candidate.
    ///
    /// Default: `200`
    pub min_cleaned_len: usize,

    /// The density scan only accepts its best container when the container's
    /// flattened text is at least this long; otherwise `<body>` is used.
    ///
    /// Default: `200`
    pub min_density_len: usize,

    /// Maximum element nesting depth the renderer descends into.
    ///
    /// Anything deeper is dropped as noise.
    ///
    /// Default: `256`
    pub max_depth: usize,

    /// Candidate scoring weights.
    pub weights: ScoreWeights,

    /// Content-type substrings (lower-case) that select the HTML pipeline.
    ///
    /// Default: `["text/html", "application/xhtml+xml"]`
    pub html_content_types: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_cleaned_len: DEFAULT_MIN_CLEANED_LEN,
            min_density_len: DEFAULT_MIN_DENSITY_LEN,
            max_depth: DEFAULT_MAX_DEPTH,
            weights: ScoreWeights::default(),
            html_content_types: vec!["text/html".to_string(), "application/xhtml+xml".to_string()],
        }
    }
}

impl Options {
    /// Whether a declared content-type selects the HTML pipeline.
    ///
    /// ```rust
    /// use jd_extract::Options;
    ///
    /// let options = Options::default();
    /// assert!(options.is_html("text/html; charset=UTF-8"));
    /// assert!(options.is_html("TEXT/HTML"));
    /// assert!(!options.is_html("text/plain"));
    /// ```
    #[must_use]
    pub fn is_html(&self, content_type: &str) -> bool {
        let content_type = content_type.to_ascii_lowercase();
        self.html_content_types
            .iter()
            .any(|html| content_type.contains(html.as_str()))
    }
}
