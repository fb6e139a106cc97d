//! Inline Markdown rendering and whitespace normalization.

use dom_query::NodeRef;

use crate::dom::{self, NodeKind};
use crate::patterns::{CARRIAGE_RETURNS, HORIZONTAL_WHITESPACE, MULTIPLE_NEWLINES, SPACES_AROUND_NEWLINE};

use super::{InlineKind, RenderContext};

/// Normalize line endings to `\n` and collapse runs of spaces/tabs to one space.
///
/// This is the treatment every text node gets.
///
/// ```rust
/// use jd_extract::markdown::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("a \t  b\r\nc"), "a b\nc");
/// ```
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    let normalized = CARRIAGE_RETURNS.replace_all(text, "\n");
    HORIZONTAL_WHITESPACE.replace_all(&normalized, " ").into_owned()
}

/// Normalize assembled inline content.
///
/// Collapses spaces/tabs, removes spaces around newlines, collapses three or
/// more newlines to two, then trims. Idempotent.
///
/// ```rust
/// use jd_extract::markdown::normalize_inline;
///
/// let once = normalize_inline("  Join   our \n\n\n\n mission ");
/// assert_eq!(once, "Join our\n\nmission");
/// assert_eq!(normalize_inline(&once), once);
/// ```
#[must_use]
pub fn normalize_inline(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    let tight = SPACES_AROUND_NEWLINE.replace_all(&collapsed, "\n");
    MULTIPLE_NEWLINES.replace_all(&tight, "\n\n").trim().to_string()
}

/// Render every child of `node` inline and normalize the result.
#[must_use]
pub fn render_inline_children(node: &NodeRef, ctx: RenderContext) -> String {
    render_inline_nodes(&dom::child_nodes(node), ctx)
}

/// Render a run of sibling nodes inline and normalize the result.
#[must_use]
pub fn render_inline_nodes(nodes: &[NodeRef], ctx: RenderContext) -> String {
    let mut joined = String::new();
    for node in nodes {
        joined.push_str(&render_inline(node, ctx));
    }
    normalize_inline(&joined)
}

/// Render one node inline.
#[must_use]
pub fn render_inline(node: &NodeRef, ctx: RenderContext) -> String {
    match dom::classify(node) {
        NodeKind::Text(text) => collapse_whitespace(&text),
        NodeKind::Element(tag) => {
            let Some(ctx) = ctx.descend() else {
                return String::new();
            };
            match InlineKind::from_tag(&tag) {
                InlineKind::Strong => wrap("**", node, ctx),
                InlineKind::Emphasis => wrap("_", node, ctx),
                InlineKind::Code => wrap("`", node, ctx),
                InlineKind::Anchor => render_anchor(node, ctx),
                InlineKind::LineBreak => "\n".to_string(),
                InlineKind::Transparent => render_inline_children(node, ctx),
            }
        }
        NodeKind::Other => String::new(),
    }
}

fn wrap(marker: &str, node: &NodeRef, ctx: RenderContext) -> String {
    let content = render_inline_children(node, ctx);
    if content.is_empty() {
        return String::new();
    }
    format!("{marker}{content}{marker}")
}

/// `[text](href)`; text falls back to the href, a blank href drops the link.
fn render_anchor(node: &NodeRef, ctx: RenderContext) -> String {
    let content = render_inline_children(node, ctx);
    let href = dom::node_attribute(node, "href").unwrap_or_default();
    let href = href.trim();

    if href.is_empty() {
        return content;
    }

    let text = if content.is_empty() { href } else { content.as_str() };
    format!("[{text}]({href})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::render_fragment;
    use crate::Options;

    fn md(html: &str) -> String {
        render_fragment(html, &Options::default())
    }

    #[test]
    fn emphasis_markers() {
        assert_eq!(
            md("<p><strong>Bold</strong> <b>b</b> <em>em</em> <i>i</i> <code>x()</code></p>"),
            "**Bold** **b** _em_ _i_ `x()`"
        );
    }

    #[test]
    fn empty_wrappers_vanish() {
        assert_eq!(md("<p>a<strong> </strong>b</p>"), "ab");
    }

    #[test]
    fn anchors() {
        assert_eq!(
            md(r#"<p>See <a href=" https://x.example/about ">About</a>.</p>"#),
            "See [About](https://x.example/about)."
        );
        assert_eq!(
            md(r#"<p><a href="https://x.example"></a></p>"#),
            "[https://x.example](https://x.example)"
        );
        assert_eq!(md(r#"<p><a href="  ">Plain</a> <a>Bare</a></p>"#), "Plain Bare");
    }

    #[test]
    fn line_breaks_become_newlines() {
        assert_eq!(md("<p>Line one <br> Line two<br><br><br><br>End</p>"), "Line one\nLine two\n\nEnd");
    }

    #[test]
    fn transparent_inline_tags() {
        assert_eq!(
            md("<p>H<sub>2</sub>O is <u>wet</u> <small>and</small> <span>clear</span><sup>1</sup></p>"),
            "H2O is wet and clear1"
        );
    }

    #[test]
    fn no_markdown_escaping() {
        assert_eq!(md("<p>5 * 3 = 15 and a_b [x]</p>"), "5 * 3 = 15 and a_b [x]");
    }

    #[test]
    fn collapse_keeps_newlines() {
        assert_eq!(collapse_whitespace("a\r\rb"), "a\n\nb");
    }

    #[test]
    fn normalize_inline_is_idempotent() {
        let samples = [
            "",
            "   ",
            "a\t\tb",
            " x \n \n \n \n y ",
            "\u{a0} \nX",
            "one\r\ntwo \r\n\r\n\r\n three",
        ];
        for sample in samples {
            let once = normalize_inline(sample);
            assert_eq!(normalize_inline(&once), once, "sample {sample:?}");
        }
    }
}
