//! JSON-LD JobPosting Parsing
//!
//! Scans the raw HTML for `application/ld+json` script blocks, decodes each
//! payload, and searches it for the first Schema.org `JobPosting` with a
//! non-empty `description`. The description is an HTML fragment and goes
//! through the same Markdown renderer as the visible page.

use serde_json::{Map, Value};

use crate::markdown;
use crate::patterns::JSON_LD_SCRIPT;
use crate::Options;

/// Schema.org type (lower-cased) whose description is wanted.
const JOB_POSTING_TYPE: &str = "jobposting";

/// Extract the JobPosting description of a page as Markdown.
///
/// Blocks are visited in document order; a block that is not valid JSON is
/// skipped. Returns the first non-empty rendering.
///
/// # Example
///
/// ```rust
/// use jd_extract::{metadata, Options};
///
/// let html = r#"<script type="application/ld+json">
///   {"@context": "https://schema.org", "@type": "JobPosting",
///    "description": "&lt;p&gt;Build &lt;b&gt;things&lt;/b&gt;&lt;/p&gt;"}
/// </script>"#;
/// let md = metadata::extract_job_description(html, &Options::default());
/// assert_eq!(md.as_deref(), Some("Build **things**"));
/// ```
#[must_use]
pub fn extract_job_description(html: &str, options: &Options) -> Option<String> {
    for (index, payload) in json_ld_payloads(html).into_iter().enumerate() {
        let Some(value) = parse_payload(&payload) else {
            tracing::debug!(block = index, "skipping unparseable JSON-LD block");
            continue;
        };

        let Some(description) = find_job_posting_description(&value) else {
            continue;
        };

        let fragment = description.replace('\u{a0}', " ");
        let rendered = markdown::render_fragment(&fragment, options);
        if !rendered.is_empty() {
            tracing::debug!(block = index, len = rendered.len(), "JobPosting description found");
            return Some(rendered);
        }
    }

    None
}

/// Trimmed, non-empty bodies of every `application/ld+json` script, in document order.
#[must_use]
pub fn json_ld_payloads(html: &str) -> Vec<String> {
    JSON_LD_SCRIPT
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|body| body.as_str().trim().to_string())
        .filter(|body| !body.is_empty())
        .collect()
}

/// Entity-decode and parse a payload strictly.
///
/// Pages that escape quotes inside JSON strings break once decoded; the raw
/// payload is tried as well in that case.
fn parse_payload(payload: &str) -> Option<Value> {
    let decoded = html_escape::decode_html_entities(payload);

    match serde_json::from_str::<Value>(decoded.trim()) {
        Ok(value) => Some(value),
        Err(_) if decoded != payload => serde_json::from_str(payload).ok(),
        Err(_) => None,
    }
}

/// Depth-first search for the first JobPosting with a non-empty description.
///
/// Objects are checked before their members; members and array items are
/// visited in document order. The description is returned trimmed.
///
/// ```rust
/// use jd_extract::metadata::find_job_posting_description;
/// use serde_json::json;
///
/// let graph = json!({"@graph": [
///     {"@type": "Organization", "name": "Acme"},
///     {"@type": ["Thing", "JOBPOSTING"], "description": " <p>Role</p> "}
/// ]});
/// assert_eq!(find_job_posting_description(&graph), Some("<p>Role</p>"));
/// ```
#[must_use]
pub fn find_job_posting_description(value: &Value) -> Option<&str> {
    match value {
        Value::Object(map) => {
            if is_job_posting(map) {
                if let Some(Value::String(description)) = map.get("description") {
                    let description = description.trim();
                    if !description.is_empty() {
                        return Some(description);
                    }
                }
            }
            map.values().find_map(find_job_posting_description)
        }
        Value::Array(items) => items.iter().find_map(find_job_posting_description),
        _ => None,
    }
}

/// Whether `@type` names a JobPosting, as a string or within an array.
fn is_job_posting(map: &Map<String, Value>) -> bool {
    match map.get("@type") {
        Some(Value::String(kind)) => kind.eq_ignore_ascii_case(JOB_POSTING_TYPE),
        Some(Value::Array(kinds)) => kinds
            .iter()
            .filter_map(Value::as_str)
            .any(|kind| kind.eq_ignore_ascii_case(JOB_POSTING_TYPE)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_matching_is_case_insensitive() {
        let value = json!({"@type": "jobPosting", "description": "Role"});
        assert_eq!(find_job_posting_description(&value), Some("Role"));
    }

    #[test]
    fn mixed_type_arrays() {
        let value = json!({"@type": [1, null, "JobPosting"], "description": "Role"});
        assert_eq!(find_job_posting_description(&value), Some("Role"));
    }

    #[test]
    fn empty_description_keeps_searching() {
        let value = json!([
            {"@type": "JobPosting", "description": "   "},
            {"@type": "JobPosting", "description": 42},
            {"@type": "JobPosting", "description": "Second"}
        ]);
        assert_eq!(find_job_posting_description(&value), Some("Second"));
    }

    #[test]
    fn other_types_are_ignored() {
        let value = json!({"@type": "Article", "description": "News"});
        assert_eq!(find_job_posting_description(&value), None);
    }

    #[test]
    fn nested_posting_is_found() {
        let value = json!({"@type": "WebPage", "mainEntity": {"@type": "JobPosting", "description": "Inner"}});
        assert_eq!(find_job_posting_description(&value), Some("Inner"));
    }

    #[test]
    fn invalid_blocks_are_skipped() {
        let html = r#"
            <script type="application/ld+json">{not json</script>
            <script type="application/ld+json">{"@type":"JobPosting","description":"<p>Valid</p>"}</script>
        "#;
        assert_eq!(
            extract_job_description(html, &Options::default()).as_deref(),
            Some("Valid")
        );
    }

    #[test]
    fn first_block_in_document_order_wins() {
        let html = r#"
            <script type="application/ld+json">{"@type":"JobPosting","description":"First"}</script>
            <script type='application/ld+json'>{"@type":"JobPosting","description":"Second"}</script>
        "#;
        assert_eq!(
            extract_job_description(html, &Options::default()).as_deref(),
            Some("First")
        );
    }

    #[test]
    fn escaped_quotes_fall_back_to_raw_payload() {
        let html = r#"<script type="application/ld+json">{"@type":"JobPosting","description":"Say &quot;hi&quot;"}</script>"#;
        assert_eq!(
            extract_job_description(html, &Options::default()).as_deref(),
            Some("Say \"hi\"")
        );
    }

    #[test]
    fn non_breaking_spaces_become_spaces() {
        let html = "<script type=\"application/ld+json\">{\"@type\":\"JobPosting\",\"description\":\"<p>A\u{a0}\u{a0}B</p>\"}</script>";
        assert_eq!(
            extract_job_description(html, &Options::default()).as_deref(),
            Some("A B")
        );
    }

    #[test]
    fn no_json_ld_blocks() {
        assert!(extract_job_description("<p>Nothing here</p>", &Options::default()).is_none());
        assert!(json_ld_payloads(r#"<script type="application/ld+json">  </script>"#).is_empty());
    }
}
