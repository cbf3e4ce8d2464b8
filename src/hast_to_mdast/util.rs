// Shared utilities for the hast_to_mdast module.

use markup5ever_rcdom::{Handle, NodeData};

use crate::mdast::{self, Node};

/// Remove leading and trailing Break nodes and whitespace-only Text nodes.
pub(crate) fn drop_surrounding_breaks(mut nodes: Vec<Node>) -> Vec<Node> {
    fn is_droppable_edge(n: &Node) -> bool {
        matches!(n, Node::Break(_)) || matches!(n, Node::Text(t) if t.value.trim().is_empty())
    }

    // Find the first non-droppable node.
    let start = nodes
        .iter()
        .position(|n| !is_droppable_edge(n))
        .unwrap_or(nodes.len());
    if start > 0 {
        nodes.drain(..start);
    }

    // Find the last non-droppable node.
    while nodes.last().is_some_and(is_droppable_edge) {
        nodes.pop();
    }

    nodes
}

/// Check if a list of nodes contains only whitespace-only text.
pub(crate) fn is_whitespace_only(nodes: &[Node]) -> bool {
    nodes.iter().all(|n| match n {
        Node::Text(t) => t.value.trim().is_empty(),
        _ => false,
    })
}

/// Flatten block content into phrasing, for places that only hold inline
/// content (headings, table cells). Blocks are separated by a space.
pub(crate) fn to_phrasing(nodes: Vec<Node>) -> Vec<Node> {
    let mut result = Vec::new();
    for mut node in nodes {
        if node.is_phrasing() {
            result.push(node);
            continue;
        }
        let inner = if let Node::Code(code) = &node {
            vec![Node::text(code.value.clone())]
        } else {
            to_phrasing(node.children_mut().map(std::mem::take).unwrap_or_default())
        };
        if inner.is_empty() {
            continue;
        }
        if !result.is_empty() {
            result.push(Node::text(" "));
        }
        result.extend(inner);
    }
    result
}

/// Text content of an element, iteratively. `<br>` counts as a newline.
pub(crate) fn text_content(handle: &Handle) -> String {
    let mut text = String::new();
    let mut stack = vec![handle.clone()];
    while let Some(node) = stack.pop() {
        match node.data {
            NodeData::Text { ref contents } => text.push_str(&contents.borrow()),
            NodeData::Element { ref name, .. } if name.local.as_ref() == "br" => text.push('\n'),
            NodeData::Element { .. } | NodeData::Document => {
                for child in node.children.borrow().iter().rev() {
                    stack.push(child.clone());
                }
            }
            _ => {}
        }
    }
    text
}

/// Collapse newline runs (and the whitespace after them) in an attribute
/// value to a single newline.
pub(crate) fn clean_attribute(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\n' {
            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
        }
        result.push(c);
    }
    result
}

/// Wrap a phrasing run into a paragraph unless it is empty.
pub(crate) fn paragraph(run: Vec<Node>) -> Option<Node> {
    let run = drop_surrounding_breaks(run);
    if run.is_empty() || is_whitespace_only(&run) {
        None
    } else {
        Some(Node::Paragraph(mdast::Paragraph { children: run }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_surrounding_breaks() {
        let nodes = vec![
            Node::Break(mdast::Break),
            Node::text(" "),
            Node::text("kept"),
            Node::Break(mdast::Break),
        ];
        assert_eq!(drop_surrounding_breaks(nodes), vec![Node::text("kept")]);
    }

    #[test]
    fn test_to_phrasing_separates_blocks() {
        let nodes = vec![
            Node::Paragraph(mdast::Paragraph {
                children: vec![Node::text("one")],
            }),
            Node::Paragraph(mdast::Paragraph {
                children: vec![Node::text("two")],
            }),
        ];
        assert_eq!(
            to_phrasing(nodes),
            vec![Node::text("one"), Node::text(" "), Node::text("two")]
        );
    }

    #[test]
    fn test_clean_attribute() {
        assert_eq!(clean_attribute("a\n\n   b\n c"), "a\nb\nc");
        assert_eq!(clean_attribute("plain"), "plain");
    }

    #[test]
    fn test_paragraph_skips_whitespace_runs() {
        assert!(paragraph(vec![Node::text("  "), Node::Break(mdast::Break)]).is_none());
        assert!(paragraph(vec![Node::text("x")]).is_some());
    }
}
