// Block-level container serialization.
//
// Serializes block children separated by blank lines. Children that render
// to nothing (an image without a source, an empty emphasis) leave no gap.

use super::State;
use crate::mdast::Node;

/// Serialize a list of block-level (flow) children with blank lines between them.
/// Used for root and blockquote.
pub(crate) fn container_flow(state: &mut State, children: &[Node]) -> String {
    let mut result = String::new();

    for child in children {
        let content = super::handlers::handle(state, child);
        if content.is_empty() {
            continue;
        }
        if !result.is_empty() {
            result.push_str("\n\n");
        }
        result.push_str(&content);
    }

    result
}

/// Serialize the block children of a list item.
///
/// A nested list follows the preceding content on the next line; anything
/// else is separated by a blank line.
pub(crate) fn container_flow_item(state: &mut State, children: &[Node]) -> String {
    let mut result = String::new();

    for child in children {
        let content = super::handlers::handle(state, child);
        if content.is_empty() {
            continue;
        }
        if !result.is_empty() {
            if matches!(child, Node::List(_)) {
                result.push('\n');
            } else {
                result.push_str("\n\n");
            }
        }
        result.push_str(&content);
    }

    result
}
