//! HTML to Markdown rendering.
//!
//! Block rendering (headings, paragraphs, lists, tables, quotes, code) lives
//! in [`block`]; span rendering (emphasis, code, links, breaks) in [`inline`].
//! Dispatch goes through [`BlockKind`] and [`InlineKind`], so every tag the
//! renderer understands is one enum arm.
//!
//! No escaping of Markdown metacharacters is performed: text is emitted as
//! the page wrote it.

pub mod block;
pub mod inline;

use dom_query::Selection;

use crate::dom;
use crate::patterns::MULTIPLE_NEWLINES;
use crate::Options;

pub use block::{render_block, render_block_children};
pub use inline::{collapse_whitespace, normalize_inline, render_inline, render_inline_children};

/// Block-level interpretation of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `h1`..`h6` with its level.
    Heading(usize),
    /// `p`
    Paragraph,
    /// `ul` / `ol`
    List {
        /// `true` for `ol`.
        ordered: bool,
    },
    /// `blockquote`
    Blockquote,
    /// `pre`
    Preformatted,
    /// `table`
    Table,
    /// `hr`
    Rule,
    /// `br` (handled inline; contributes no block)
    LineBreak,
    /// Anything else: a transparent container.
    Container,
}

impl BlockKind {
    /// Interpret a lower-cased tag name.
    ///
    /// ```rust
    /// use jd_extract::markdown::BlockKind;
    ///
    /// assert_eq!(BlockKind::from_tag("h3"), BlockKind::Heading(3));
    /// assert_eq!(BlockKind::from_tag("ol"), BlockKind::List { ordered: true });
    /// assert_eq!(BlockKind::from_tag("section"), BlockKind::Container);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = tag[1..].parse::<usize>().unwrap_or(1);
                Self::Heading(level.clamp(1, 6))
            }
            "p" => Self::Paragraph,
            "ul" => Self::List { ordered: false },
            "ol" => Self::List { ordered: true },
            "blockquote" => Self::Blockquote,
            "pre" => Self::Preformatted,
            "table" => Self::Table,
            "hr" => Self::Rule,
            "br" => Self::LineBreak,
            _ => Self::Container,
        }
    }
}

/// Inline interpretation of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    /// `strong` / `b` → `**text**`
    Strong,
    /// `em` / `i` → `_text_`
    Emphasis,
    /// `code` → `` `text` ``
    Code,
    /// `a` → `[text](href)`
    Anchor,
    /// `br` → newline
    LineBreak,
    /// `span`, `u`, `small`, `sup`, `sub` and unknown tags: children only.
    Transparent,
}

impl InlineKind {
    /// Interpret a lower-cased tag name.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "strong" | "b" => Self::Strong,
            "em" | "i" => Self::Emphasis,
            "code" => Self::Code,
            "a" => Self::Anchor,
            "br" => Self::LineBreak,
            _ => Self::Transparent,
        }
    }
}

/// Per-call rendering state.
///
/// Copied into every recursive call, so siblings never observe each other's
/// list position. `list_depth` only grows when entering a nested list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Nesting depth of the list being rendered (0 = top level).
    pub list_depth: usize,
    /// 1-based position of the current item in its ordered list; 0 outside one.
    pub item_index: usize,
    /// Element nesting depth below the render root.
    pub depth: usize,
    /// Deepest element depth that is still rendered.
    pub max_depth: usize,
}

impl RenderContext {
    /// Fresh context at the render root.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self {
            list_depth: 0,
            item_index: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Context for a child element, or `None` past the depth cap.
    #[must_use]
    pub fn descend(self) -> Option<Self> {
        if self.depth >= self.max_depth {
            return None;
        }
        Some(Self {
            depth: self.depth + 1,
            ..self
        })
    }

    /// Context for a list nested inside the current item.
    #[must_use]
    pub fn nested_list(self) -> Self {
        Self {
            list_depth: self.list_depth + 1,
            item_index: 0,
            ..self
        }
    }

    /// Context for the `index`-th item of a list.
    #[must_use]
    pub fn with_item(self, index: usize) -> Self {
        Self {
            item_index: index,
            ..self
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(crate::options::DEFAULT_MAX_DEPTH)
    }
}

/// Render the block children of a subtree as finished Markdown.
#[must_use]
pub fn render_subtree(root: &Selection, options: &Options) -> String {
    let Some(node) = root.nodes().first() else {
        return String::new();
    };

    finalize(&render_block_children(node, RenderContext::new(options.max_depth)))
}

/// Render an HTML fragment as Markdown.
///
/// The fragment is parsed under a synthetic `<body>`; nothing is filtered.
///
/// # Example
///
/// ```rust
/// use jd_extract::{markdown, Options};
///
/// let md = markdown::render_fragment("<h2>Role</h2><ul><li>Ship</li><li>Learn</li></ul>", &Options::default());
/// assert_eq!(md, "## Role\n\n- Ship\n- Learn");
/// ```
#[must_use]
pub fn render_fragment(html: &str, options: &Options) -> String {
    let doc = dom::parse_fragment(html);
    render_subtree(&doc.select("body"), options)
}

/// Collapse runs of blank lines to one and trim.
#[must_use]
pub fn finalize(markdown: &str) -> String {
    MULTIPLE_NEWLINES.replace_all(markdown, "\n\n").trim().to_string()
}
