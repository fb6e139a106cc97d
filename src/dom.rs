//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate. The parsed document is an arena
//! of nodes addressed by id; removing a node detaches its whole subtree, so
//! later stages simply never reach it.
//!
//! Parsing is html5ever-based and never fails: unclosed tags, stray entities
//! and invalid nesting are repaired the way browsers repair them.

use std::collections::HashMap;

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

/// What a node is, as far as rendering cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Literal text.
    Text(StrTendril),
    /// Element with its lower-cased tag name.
    Element(String),
    /// Comments, doctypes, processing instructions.
    Other,
}

/// Classify a node.
#[must_use]
pub fn classify(node: &NodeRef) -> NodeKind {
    if node.is_text() {
        NodeKind::Text(node.text())
    } else if node.is_element() {
        node.node_name()
            .map_or(NodeKind::Other, |name| NodeKind::Element(name.to_ascii_lowercase()))
    } else {
        NodeKind::Other
    }
}

// === Attribute Operations ===

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute of a single node
#[inline]
#[must_use]
pub fn node_attribute(node: &NodeRef, name: &str) -> Option<String> {
    get_attribute(&Selection::from(*node), name)
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Whitespace-separated class tokens of an element.
#[must_use]
pub fn class_tokens(sel: &Selection) -> Vec<String> {
    class_name(sel)
        .map(|class| class.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Tag name of a node if it is an element.
#[must_use]
pub fn node_tag(node: &NodeRef) -> Option<String> {
    if node.is_element() {
        node.node_name().map(|t| t.to_ascii_lowercase())
    } else {
        None
    }
}

// === Text Content ===

/// Character counts of a run of text, enough to trim it after joining.
#[derive(Debug, Clone, Copy, Default)]
struct TextSpan {
    chars: usize,
    leading_ws: usize,
    trailing_ws: usize,
}

impl TextSpan {
    fn of(text: &str) -> Self {
        let chars = text.chars().count();
        let leading_ws = text.chars().take_while(|c| c.is_whitespace()).count();
        let trailing_ws = if leading_ws == chars {
            chars
        } else {
            text.chars().rev().take_while(|c| c.is_whitespace()).count()
        };
        Self {
            chars,
            leading_ws,
            trailing_ws,
        }
    }

    fn is_blank(self) -> bool {
        self.leading_ws == self.chars
    }

    fn then(self, next: Self) -> Self {
        Self {
            chars: self.chars + next.chars,
            leading_ws: if self.is_blank() {
                self.chars + next.leading_ws
            } else {
                self.leading_ws
            },
            trailing_ws: if next.is_blank() {
                next.chars + self.trailing_ws
            } else {
                next.trailing_ws
            },
        }
    }

    fn trimmed_len(self) -> usize {
        if self.is_blank() {
            0
        } else {
            self.chars - self.leading_ws - self.trailing_ws
        }
    }
}

/// Trimmed text length, in characters, of every node under the document root.
///
/// Equivalent to `sel.text().trim().chars().count()` per node, computed in a
/// single pass so nested containers are not re-walked.
///
/// ```rust
/// use jd_extract::dom;
///
/// let doc = dom::parse("<div id=\"a\"> x <div id=\"b\">yz </div></div>");
/// let lengths = dom::text_lengths(&doc);
/// let len_of = |id: &str| doc.select(&format!("#{id}")).nodes().first().map(|n| lengths[&n.id]);
/// assert_eq!(len_of("a"), Some(4));
/// assert_eq!(len_of("b"), Some(2));
/// ```
#[must_use]
pub fn text_lengths(doc: &Document) -> HashMap<NodeId, usize> {
    let nodes: Vec<NodeRef> = doc.root().descendants_it().collect();
    let mut spans: HashMap<NodeId, TextSpan> = HashMap::with_capacity(nodes.len());

    // Pre-order reversed: children are summarized before their parent.
    for node in nodes.iter().rev() {
        let span = if node.is_text() {
            TextSpan::of(&node.text())
        } else {
            node.children_it(false)
                .map(|child| spans.get(&child.id).copied().unwrap_or_default())
                .fold(TextSpan::default(), TextSpan::then)
        };
        spans.insert(node.id, span);
    }

    spans.into_iter().map(|(id, span)| (id, span.trimmed_len())).collect()
}

// === Tree Navigation ===

/// Direct child nodes, text nodes included, in document order.
#[inline]
#[must_use]
pub fn child_nodes<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().collect()
}

/// Direct child elements with the given tag.
#[must_use]
pub fn child_elements<'a>(node: &NodeRef<'a>, tags: &[&str]) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(|child| node_tag(child).is_some_and(|tag| tags.contains(&tag.as_str())))
        .collect()
}

// === Tree Manipulation ===

/// Remove elements (with their subtrees) from the tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Parse an HTML fragment under a synthetic `<html><body>` root.
#[must_use]
pub fn parse_fragment(fragment: &str) -> Document {
    Document::from(format!("<html><body>{fragment}</body></html>"))
}
