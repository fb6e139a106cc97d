//! Candidate scoring.
//!
//! Ranks competing extractions of the same page. The score rewards longer
//! Markdown with more structure (lists, headings, links) so that a short,
//! well-structured list can beat a long run of unstructured prose.

use crate::result::{ExtractionCandidate, ScoredCandidate};

/// Weight per newline.
pub const NEWLINE_WEIGHT: f64 = 1.5;

/// Weight per `"- "` or `"* "` occurrence.
pub const LIST_MARKER_WEIGHT: f64 = 20.0;

/// Weight per `#` occurrence.
pub const HEADING_MARKER_WEIGHT: f64 = 10.0;

/// Weight per `[` occurrence.
pub const LINK_MARKER_WEIGHT: f64 = 5.0;

/// Weights of the scoring function. Length always counts `1.0` per character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Weight per newline.
    pub newline: f64,
    /// Weight per list marker.
    pub list_marker: f64,
    /// Weight per heading marker.
    pub heading_marker: f64,
    /// Weight per link marker.
    pub link_marker: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            newline: NEWLINE_WEIGHT,
            list_marker: LIST_MARKER_WEIGHT,
            heading_marker: HEADING_MARKER_WEIGHT,
            link_marker: LINK_MARKER_WEIGHT,
        }
    }
}

/// Score a Markdown candidate.
///
/// `chars + w.newline*newlines + w.list_marker*("- " + "* ") + w.heading_marker*'#' + w.link_marker*'['`
///
/// # Examples
///
/// ```
/// use jd_extract::scoring::{score, ScoreWeights};
///
/// let weights = ScoreWeights::default();
/// assert_eq!(score("abc", &weights), 3.0);
/// // 3 chars + 1 list marker
/// assert_eq!(score("- a", &weights), 23.0);
/// ```
#[must_use]
pub fn score(text: &str, weights: &ScoreWeights) -> f64 {
    let length = text.chars().count() as f64;
    let newlines = text.matches('\n').count() as f64;
    let list_markers = (text.matches("- ").count() + text.matches("* ").count()) as f64;
    let heading_markers = text.matches('#').count() as f64;
    let link_markers = text.matches('[').count() as f64;

    length
        + newlines * weights.newline
        + list_markers * weights.list_marker
        + heading_markers * weights.heading_marker
        + link_markers * weights.link_marker
}

/// Score every non-empty candidate, keeping pool order.
///
/// Candidate text is trimmed before scoring; whitespace-only candidates are dropped.
#[must_use]
pub fn score_all(candidates: Vec<ExtractionCandidate>, weights: &ScoreWeights) -> Vec<ScoredCandidate> {
    candidates
        .into_iter()
        .filter_map(|candidate| {
            let text = candidate.text.trim();
            if text.is_empty() {
                return None;
            }
            let value = score(text, weights);
            Some(ScoredCandidate {
                candidate: ExtractionCandidate::new(text, candidate.origin),
                score: value,
            })
        })
        .collect()
}

/// Pick the strictly highest score; ties keep the earliest candidate.
#[must_use]
pub fn choose_best(scored: &[ScoredCandidate]) -> Option<&ScoredCandidate> {
    let mut best: Option<&ScoredCandidate> = None;
    for candidate in scored {
        match best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::CandidateOrigin;

    fn candidate(text: &str, origin: CandidateOrigin) -> ExtractionCandidate {
        ExtractionCandidate::new(text, origin)
    }

    #[test]
    fn score_counts_characters_not_bytes() {
        let weights = ScoreWeights::default();
        assert_eq!(score("été", &weights), 3.0);
    }

    #[test]
    fn score_applies_every_weight() {
        let weights = ScoreWeights::default();
        // 10 chars, 1 newline, 1 "- ", 2 '#', 1 '['
        let text = "## a\n- [b]";
        assert_eq!(text.chars().count(), 10);
        let expected = 10.0 + 1.5 + 20.0 + 20.0 + 5.0;
        assert!((score(text, &weights) - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn structured_list_beats_longer_prose() {
        let weights = ScoreWeights::default();
        let list = "- Lead projects\n- Coach teammates\n- Ship code";
        let prose = "x".repeat(100);
        assert!(score(list, &weights) > score(&prose, &weights));
    }

    #[test]
    fn score_all_drops_blank_candidates() {
        let scored = score_all(
            vec![
                candidate("   \n ", CandidateOrigin::CleanedDom),
                candidate("  text  ", CandidateOrigin::StructuredData),
            ],
            &ScoreWeights::default(),
        );
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].candidate.text, "text");
        assert_eq!(scored[0].candidate.origin, CandidateOrigin::StructuredData);
    }

    #[test]
    fn ties_keep_first_candidate() {
        let scored = score_all(
            vec![
                candidate("abcd", CandidateOrigin::CleanedDom),
                candidate("wxyz", CandidateOrigin::StructuredData),
            ],
            &ScoreWeights::default(),
        );
        let best = choose_best(&scored).map(|s| s.candidate.origin);
        assert_eq!(best, Some(CandidateOrigin::CleanedDom));
    }

    #[test]
    fn choose_best_on_empty_pool() {
        assert!(choose_best(&[]).is_none());
    }
}
