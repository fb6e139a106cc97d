//! Compiled regex patterns for text normalization and noise filtering.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Whitespace Normalization
// =============================================================================

/// Any line terminator other than `\n`.
pub static CARRIAGE_RETURNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r").expect("CARRIAGE_RETURNS regex"));

/// Runs of spaces and tabs.
pub static HORIZONTAL_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("HORIZONTAL_WHITESPACE regex"));

/// Spaces hugging a newline.
pub static SPACES_AROUND_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *\n *").expect("SPACES_AROUND_NEWLINE regex"));

/// Three or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex"));

// =============================================================================
// Structured Data
// =============================================================================

/// `<script type="application/ld+json">` blocks; group 1 is the body.
pub static JSON_LD_SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script[^>]*type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script\s*>"#)
        .expect("JSON_LD_SCRIPT regex")
});

// =============================================================================
// Plain-Text Noise Lines
// =============================================================================

/// A selector line that opens a CSS rule: `body {`, `.card > p {`, `#id {`.
pub static CSS_BLOCK_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.#@:\[*][^{]{0,200}\{\s*$").expect("CSS_BLOCK_START regex")
});

/// A single CSS declaration: `color: red;`.
pub static CSS_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w-]+\s*:\s*[^;]+;$").expect("CSS_DECLARATION regex"));

/// A quoted JSON key line: `"title": ...`.
pub static JSON_KEY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"\w[^"]*"\s*:"#).expect("JSON_KEY_LINE regex"));
