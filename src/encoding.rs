//! Character encoding detection and transcoding.
//!
//! Response bodies arrive as raw bytes. The charset is taken from the
//! `Content-Type` header when declared, then from HTML meta tags, and
//! finally guessed: valid UTF-8 stays UTF-8, anything else is read as
//! Windows-1252 (the WHATWG superset of ISO-8859-1).

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Match the `charset` parameter of a `Content-Type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// Resolve the character encoding of a response body.
///
/// Order:
/// 1. `charset=` parameter of the declared content-type
/// 2. `<meta charset="...">` or `<meta http-equiv="Content-Type" ...>` in the first 1024 bytes
/// 3. UTF-8 when the bytes are valid UTF-8
/// 4. Windows-1252
///
/// # Examples
///
/// ```
/// use jd_extract::encoding::detect_encoding;
///
/// assert_eq!(detect_encoding(b"plain", "text/plain; charset=ISO-8859-1").name(), "windows-1252");
/// assert_eq!(detect_encoding(b"caf\xC3\xA9", "text/plain").name(), "UTF-8");
/// assert_eq!(detect_encoding(b"caf\xE9", "text/plain").name(), "windows-1252");
/// ```
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: &str) -> &'static Encoding {
    if let Some(encoding) = header_charset(content_type).and_then(|c| Encoding::for_label(c.as_bytes())) {
        return encoding;
    }

    if let Some(encoding) = meta_encoding(body) {
        return encoding;
    }

    if std::str::from_utf8(body).is_ok() {
        UTF_8
    } else {
        WINDOWS_1252
    }
}

/// Encoding declared by HTML meta tags in the first 1024 bytes, if any.
fn meta_encoding(body: &[u8]) -> Option<&'static Encoding> {
    let head = &body[..body.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    extract_charset(&head_str)
        .and_then(|charset| Encoding::for_label(charset.as_bytes()))
        .or_else(|| {
            extract_content_type_charset(&head_str)
                .and_then(|charset| Encoding::for_label(charset.as_bytes()))
        })
}

/// Extract charset from a `Content-Type` header value.
fn header_charset(content_type: &str) -> Option<String> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract charset from `<meta charset="...">` tag.
fn extract_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract charset from `<meta http-equiv="Content-Type" content="...; charset=...">` tag.
fn extract_content_type_charset(html: &str) -> Option<String> {
    CONTENT_TYPE_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode a body to a UTF-8 string.
///
/// Never fails: undecodable sequences become U+FFFD. A leading BOM
/// overrides the detected encoding.
///
/// # Examples
///
/// ```
/// use jd_extract::encoding::transcode_to_utf8;
///
/// let text = transcode_to_utf8(b"<p>Caf\xE9</p>", "text/html; charset=windows-1252");
/// assert_eq!(text, "<p>Café</p>");
/// ```
#[must_use]
pub fn transcode_to_utf8(body: &[u8], content_type: &str) -> String {
    let encoding = detect_encoding(body, content_type);
    let (decoded, used, had_errors) = encoding.decode(body);

    if had_errors {
        tracing::debug!(encoding = used.name(), "body contained undecodable sequences");
    }

    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_charset_wins_over_meta() {
        let html = br#"<html><head><meta charset="utf-8"></head><body>Test</body></html>"#;
        let encoding = detect_encoding(html, "text/html; charset=windows-1252");
        assert_eq!(encoding.name(), "windows-1252");
    }

    #[test]
    fn detect_iso88591_from_meta_charset() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head><body>Test</body></html>"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG
        assert_eq!(detect_encoding(html, "text/html").name(), "windows-1252");
    }

    #[test]
    fn detect_charset_from_http_equiv() {
        let html = br#"<html><head><meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1"></head><body>Test</body></html>"#;
        assert_eq!(detect_encoding(html, "").name(), "windows-1252");
    }

    #[test]
    fn unknown_header_label_falls_through() {
        let html = b"<html><body>Test</body></html>";
        assert_eq!(detect_encoding(html, "text/html; charset=bogus-charset"), UTF_8);
    }

    #[test]
    fn invalid_utf8_without_declaration_is_windows1252() {
        let body = b"Caf\xE9 \x93quoted\x94";
        assert_eq!(detect_encoding(body, "text/plain"), WINDOWS_1252);
        let text = transcode_to_utf8(body, "text/plain");
        assert_eq!(text, "Café \u{201C}quoted\u{201D}");
    }

    #[test]
    fn declared_utf8_with_bad_bytes_is_lossy() {
        let body = b"Test \xFF\xFE Invalid";
        let text = transcode_to_utf8(body, "text/plain; charset=utf-8");
        assert!(text.contains("Test"));
        assert!(text.contains('\u{FFFD}'));
        assert!(text.contains("Invalid"));
    }

    #[test]
    fn extract_charset_case_insensitive() {
        let html = "<HTML><HEAD><META CHARSET=\"UTF-8\"></HEAD></HTML>";
        assert_eq!(extract_charset(html), Some("UTF-8".to_string()));
    }

    #[test]
    fn extract_charset_without_quotes() {
        assert_eq!(extract_charset("<meta charset=utf-8>"), Some("utf-8".to_string()));
    }

    #[test]
    fn header_charset_quoted() {
        assert_eq!(
            header_charset(r#"text/html; charset="Shift_JIS""#),
            Some("Shift_JIS".to_string())
        );
        assert_eq!(header_charset("text/html"), None);
    }
}
