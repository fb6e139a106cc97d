//! Plain-Text Fallback
//!
//! A line-oriented noise filter for bodies that are not HTML, or whose markup
//! is too thin for the DOM path. It drops stylesheet and JSON lines, including
//! multi-line rule and object blocks tracked by brace depth. This is a
//! heuristic, not a CSS or JSON parser.
//!
//! For HTML the input is the text of the filtered tree, so hidden elements
//! and form controls never reach it.

use dom_query::Document;

use crate::markdown::collapse_whitespace;
use crate::patterns::{CARRIAGE_RETURNS, CSS_BLOCK_START, CSS_DECLARATION, JSON_KEY_LINE, MULTIPLE_NEWLINES};

/// Which kind of multi-line block is being skipped, and how deep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    Outside,
    Css(usize),
    Json(usize),
}

/// Build the fallback candidate from an already filtered document.
///
/// Takes the flattened text of `<body>`, so markup is gone but anything that
/// survived noise filtering (including stray stylesheet or JSON text) reaches
/// the line filter.
///
/// ```rust
/// use jd_extract::{dom, html_processing};
/// use jd_extract::extractor::fallback::plain_text_from_document;
///
/// let doc = dom::parse("<body><div>\n.card {\n  color: red;\n}\n</div><p>Senior   Engineer</p><label>Name</label></body>");
/// html_processing::clean_document(&doc);
/// assert_eq!(plain_text_from_document(&doc), "Senior Engineer");
/// ```
#[must_use]
pub fn plain_text_from_document(doc: &Document) -> String {
    plain_text(&doc.select("body").text())
}

/// Build the fallback candidate from a non-HTML body.
#[must_use]
pub fn plain_text(body: &str) -> String {
    sanitize_extracted_text(&collapse_whitespace(body))
}

/// Drop stylesheet- and JSON-looking lines, collapse blank runs, trim.
///
/// Kept lines are emitted unchanged and in their original order.
#[must_use]
pub fn sanitize_extracted_text(text: &str) -> String {
    let text = CARRIAGE_RETURNS.replace_all(text, "\n");
    let mut kept: Vec<&str> = Vec::new();
    let mut state = BlockState::Outside;

    for line in text.split('\n') {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            if kept.last().is_some_and(|last| !last.is_empty()) {
                kept.push("");
            }
            continue;
        }

        state = match state {
            BlockState::Css(depth) => {
                let depth = depth_after(depth, css_balance(trimmed));
                if depth == 0 { BlockState::Outside } else { BlockState::Css(depth) }
            }
            BlockState::Json(depth) => {
                let depth = depth_after(depth, json_balance(trimmed));
                if depth == 0 { BlockState::Outside } else { BlockState::Json(depth) }
            }
            BlockState::Outside if starts_css_block(trimmed) => {
                let depth = depth_after(0, css_balance(trimmed));
                if depth == 0 { BlockState::Outside } else { BlockState::Css(depth) }
            }
            BlockState::Outside if starts_json_block(trimmed) => {
                let depth = depth_after(0, json_balance(trimmed));
                if depth == 0 { BlockState::Outside } else { BlockState::Json(depth) }
            }
            BlockState::Outside => {
                if !looks_like_json_line(trimmed) && !looks_like_css_line(trimmed) {
                    kept.push(line);
                }
                continue;
            }
        };
    }

    let joined = kept.join("\n");
    MULTIPLE_NEWLINES.replace_all(&joined, "\n\n").trim().to_string()
}

/// New depth after a line with the given balance, floored at zero.
fn depth_after(depth: usize, balance: isize) -> usize {
    depth.saturating_add_signed(balance)
}

/// Opening minus closing braces.
fn css_balance(line: &str) -> isize {
    count(line, &['{']) - count(line, &['}'])
}

/// Opening minus closing braces and brackets.
fn json_balance(line: &str) -> isize {
    count(line, &['{', '[']) - count(line, &['}', ']'])
}

fn count(line: &str, chars: &[char]) -> isize {
    line.chars()
        .filter(|c| chars.contains(c))
        .count()
        .try_into()
        .unwrap_or(isize::MAX)
}

/// `selector {` on its own line.
fn starts_css_block(line: &str) -> bool {
    line.contains('{') && CSS_BLOCK_START.is_match(line)
}

/// A bare `{`/`[`, or an object opened but not closed on this line.
fn starts_json_block(line: &str) -> bool {
    line == "{" || line == "[" || (line.starts_with('{') && !line.contains('}'))
}

fn looks_like_json_line(line: &str) -> bool {
    line.starts_with("\"@context\"") || line.starts_with("\"@type\"") || JSON_KEY_LINE.is_match(line)
}

fn looks_like_css_line(line: &str) -> bool {
    if line.contains('{') || line.contains('}') {
        return true;
    }

    line.contains(':') && line.contains(';') && CSS_DECLARATION.is_match(line)
}
