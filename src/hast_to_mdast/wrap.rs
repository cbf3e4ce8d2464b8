// Implicit paragraph detection and block-in-inline resolution.
//
// When a flow container has mixed phrasing + block children, phrasing runs
// are wrapped in implicit Paragraph nodes. Straddling elements (links and
// deletes containing block content) are split around the blocks.

use super::util::{is_whitespace_only, paragraph};
use crate::mdast::{self, Node};

/// Wrap mixed content: phrasing runs become paragraphs, block content passes
/// through. Whitespace-only runs are dropped.
pub(crate) fn wrap(nodes: Vec<Node>) -> Vec<Node> {
    let nodes = flatten(nodes);
    let mut result = Vec::new();
    let mut phrasing_run: Vec<Node> = Vec::new();

    for node in nodes {
        if node.is_phrasing() {
            phrasing_run.push(node);
        } else {
            let run = std::mem::take(&mut phrasing_run);
            result.extend(paragraph(run));
            result.push(node);
        }
    }

    // Flush trailing phrasing run.
    result.extend(paragraph(phrasing_run));
    result
}

/// Check whether any node in the list is non-phrasing (i.e., needs wrapping).
pub(crate) fn wrap_needed(nodes: &[Node]) -> bool {
    nodes.iter().any(|node| {
        if !node.is_phrasing() {
            return true;
        }
        node.children().is_some_and(wrap_needed)
    })
}

/// Flatten straddling elements: links and deletes containing block content
/// get split so the inline wrapper distributes around each block child.
fn flatten(nodes: Vec<Node>) -> Vec<Node> {
    let mut result = Vec::new();
    for node in nodes {
        let straddles = matches!(node, Node::Link(_) | Node::Delete(_))
            && node.children().is_some_and(wrap_needed);
        if straddles {
            result.append(&mut split_straddling(node));
        } else {
            result.push(node);
        }
    }
    result
}

/// Split a straddling node (Link or Delete containing block content) into
/// multiple nodes where the inline wrapper distributes around blocks.
fn split_straddling(mut node: Node) -> Vec<Node> {
    let Some(children) = node.children_mut().map(std::mem::take) else {
        return vec![node];
    };

    let mut result: Vec<Node> = Vec::new();
    let mut phrasing_run: Vec<Node> = Vec::new();

    for child in flatten(children) {
        if child.is_phrasing() {
            phrasing_run.push(child);
        } else {
            let run = std::mem::take(&mut phrasing_run);
            // Only emit the wrapper if the phrasing run has non-whitespace content.
            if !run.is_empty() && !is_whitespace_only(&run) {
                result.push(clone_with_children(&node, run));
            }
            result.push(wrap_parent_inside_child(&node, child));
        }
    }

    if !phrasing_run.is_empty() && !is_whitespace_only(&phrasing_run) {
        result.push(clone_with_children(&node, phrasing_run));
    }

    result
}

/// Create a new node of the same type as `parent` with the given children.
fn clone_with_children(parent: &Node, children: Vec<Node>) -> Node {
    match parent {
        Node::Link(l) => Node::Link(mdast::Link {
            url: l.url.clone(),
            title: l.title.clone(),
            children,
        }),
        Node::Delete(_) => Node::Delete(mdast::Delete { children }),
        _ => Node::Paragraph(mdast::Paragraph { children }),
    }
}

/// Place `parent` (without its original children) as a wrapper around the
/// content of `child`.
fn wrap_parent_inside_child(parent: &Node, mut child: Node) -> Node {
    let holds_phrasing = matches!(child, Node::Heading(_) | Node::Paragraph(_));
    let holds_flow = matches!(child, Node::Blockquote(_) | Node::ListItem(_));
    if !holds_phrasing && !holds_flow {
        return child;
    }

    if let Some(children) = child.children_mut() {
        let inner = std::mem::take(children);
        if holds_flow {
            *children = wrap(vec![clone_with_children(parent, inner)]);
        } else if !inner.is_empty() {
            children.push(clone_with_children(parent, inner));
        }
    }
    child
}
