//! Result types for extraction output.
//!
//! A candidate is one full extraction attempt's Markdown. Candidates are
//! created once per strategy, never mutated, and compared only by score.

use serde::Serialize;

/// Which strategy produced a candidate.
///
/// Declaration order is the tie-break priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateOrigin {
    /// Noise-filtered DOM, content root, block/inline rendering.
    CleanedDom,
    /// `JobPosting.description` from an `application/ld+json` block.
    StructuredData,
    /// Line-filtered plain text.
    PlainTextFallback,
}

/// One extraction attempt's Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionCandidate {
    /// Markdown text.
    pub text: String,
    /// Strategy that produced it.
    pub origin: CandidateOrigin,
}

impl ExtractionCandidate {
    /// Create a candidate.
    #[must_use]
    pub fn new(text: impl Into<String>, origin: CandidateOrigin) -> Self {
        Self {
            text: text.into(),
            origin,
        }
    }
}

/// A candidate together with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    /// The (trimmed) candidate.
    #[serde(flatten)]
    pub candidate: ExtractionCandidate,
    /// Value of [`crate::scoring::score`].
    pub score: f64,
}

/// Full outcome of a successful extraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionReport {
    /// The winning Markdown. Never empty.
    pub markdown: String,
    /// Strategy that produced `markdown`.
    pub origin: CandidateOrigin,
    /// Every non-empty candidate that was scored, in priority order.
    pub candidates: Vec<ScoredCandidate>,
}
