//! Block-level Markdown rendering.
//!
//! Each qualifying child of a container becomes one trimmed block; blocks are
//! joined with a blank line.

use dom_query::{NodeRef, Selection};

use crate::dom::{self, NodeKind};

use super::inline::{collapse_whitespace, render_inline_children, render_inline_nodes};
use super::{BlockKind, RenderContext};

/// Tags whose items nest inside a list item.
const LIST_TAGS: &[&str] = &["ul", "ol"];

/// Render every child of `node` as a block and join them with blank lines.
#[must_use]
pub fn render_block_children(node: &NodeRef, ctx: RenderContext) -> String {
    let mut blocks: Vec<String> = Vec::new();

    for child in dom::child_nodes(node) {
        let Some(block) = render_block(&child, ctx) else {
            continue;
        };
        let trimmed = block.trim();
        if !trimmed.is_empty() {
            blocks.push(trimmed.to_string());
        }
    }

    blocks.join("\n\n")
}

/// Render one node as a block, or `None` when it contributes nothing.
#[must_use]
pub fn render_block(node: &NodeRef, ctx: RenderContext) -> Option<String> {
    match dom::classify(node) {
        NodeKind::Text(text) => {
            let text = collapse_whitespace(&text);
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        NodeKind::Element(tag) => {
            let ctx = ctx.descend()?;
            match BlockKind::from_tag(&tag) {
                BlockKind::Heading(level) => render_heading(node, level, ctx),
                BlockKind::Paragraph => non_empty(render_inline_children(node, ctx)),
                BlockKind::List { ordered } => render_list(node, ordered, ctx),
                BlockKind::Blockquote => render_blockquote(node, ctx),
                BlockKind::Preformatted => render_preformatted(node),
                BlockKind::Table => render_table(node, ctx),
                BlockKind::Rule => Some("---".to_string()),
                BlockKind::LineBreak => None,
                BlockKind::Container => render_container(node, ctx),
            }
        }
        NodeKind::Other => None,
    }
}

fn non_empty(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}

fn render_heading(node: &NodeRef, level: usize, ctx: RenderContext) -> Option<String> {
    let content = render_inline_children(node, ctx);
    if content.is_empty() {
        return None;
    }
    Some(format!("{} {content}", "#".repeat(level.clamp(1, 6))))
}

/// Render the direct `li` children of a `ul`/`ol`.
///
/// The ordinal counts items of this list only and restarts for every list.
fn render_list(node: &NodeRef, ordered: bool, ctx: RenderContext) -> Option<String> {
    let items: Vec<String> = dom::child_elements(node, &["li"])
        .iter()
        .enumerate()
        .filter_map(|(position, item)| {
            let index = if ordered { position + 1 } else { 0 };
            let item_ctx = ctx.descend()?.with_item(index);
            let rendered = render_list_item(item, ordered, item_ctx);
            (!rendered.is_empty()).then_some(rendered)
        })
        .collect();

    non_empty(items.join("\n"))
}

/// One item line, followed by any directly nested lists one level deeper.
///
/// Nested lists are excluded from the item's own inline text.
fn render_list_item(item: &NodeRef, ordered: bool, ctx: RenderContext) -> String {
    let marker = if ordered {
        format!("{}.", ctx.item_index)
    } else {
        "-".to_string()
    };
    let indent = "  ".repeat(ctx.list_depth);

    let inline_children: Vec<NodeRef> = dom::child_nodes(item)
        .into_iter()
        .filter(|child| !dom::node_tag(child).is_some_and(|tag| LIST_TAGS.contains(&tag.as_str())))
        .collect();
    let content = render_inline_nodes(&inline_children, ctx);

    let mut lines = vec![if content.is_empty() {
        format!("{indent}{marker}")
    } else {
        format!("{indent}{marker} {content}")
    }];

    for nested in dom::child_elements(item, LIST_TAGS) {
        let Some(nested_ctx) = ctx.descend() else {
            continue;
        };
        let nested_ordered = dom::node_tag(&nested).as_deref() == Some("ol");
        if let Some(rendered) = render_list(&nested, nested_ordered, nested_ctx.nested_list()) {
            lines.push(rendered);
        }
    }

    lines.join("\n")
}

fn render_blockquote(node: &NodeRef, ctx: RenderContext) -> Option<String> {
    let content = render_block_children(node, ctx);
    if content.is_empty() {
        return None;
    }

    let quoted: Vec<String> = content
        .lines()
        .map(|line| format!("> {}", line.trim_start()))
        .collect();
    Some(quoted.join("\n"))
}

/// Direct text children only, verbatim, in an unlabelled fence.
fn render_preformatted(node: &NodeRef) -> Option<String> {
    let text: String = dom::child_nodes(node)
        .iter()
        .filter(|child| child.is_text())
        .map(|child| child.text().to_string())
        .collect();

    if text.is_empty() {
        return None;
    }

    Some(format!("```\n{}\n```", text.trim_end_matches('\n')))
}

/// Pipe table from every `tr` in the table; `th`/`td` cells render inline.
///
/// A `---` separator row follows the first row.
fn render_table(node: &NodeRef, ctx: RenderContext) -> Option<String> {
    let table = Selection::from(*node);
    let mut rows: Vec<String> = Vec::new();
    let mut columns = 0usize;

    for row in table.select("tr").nodes() {
        let Some(row_ctx) = ctx.descend() else {
            continue;
        };
        let cells: Vec<String> = dom::child_elements(row, &["th", "td"])
            .iter()
            .map(|cell| {
                row_ctx
                    .descend()
                    .map(|cell_ctx| render_inline_children(cell, cell_ctx))
                    .unwrap_or_default()
            })
            .collect();

        if cells.is_empty() {
            continue;
        }
        if rows.is_empty() {
            columns = cells.len();
        }
        rows.push(format!("| {} |", cells.join(" | ")));
    }

    if rows.is_empty() {
        return None;
    }

    if columns > 0 {
        let separator = format!("| {} |", vec!["---"; columns].join(" | "));
        rows.insert(1, separator);
    }

    Some(rows.join("\n"))
}

/// Unknown elements are transparent: their children render as blocks.
fn render_container(node: &NodeRef, ctx: RenderContext) -> Option<String> {
    if dom::child_nodes(node).is_empty() {
        return non_empty(render_inline_children(node, ctx));
    }
    non_empty(render_block_children(node, ctx))
}
