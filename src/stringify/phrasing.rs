// Inline container serialization.
//
// Serializes inline children flush together.

use super::State;
use crate::mdast::Node;

/// Serialize a list of inline (phrasing) children.
pub(crate) fn container_phrasing(state: &mut State, children: &[Node]) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(children.len());

    for child in children {
        parts.push(super::handlers::handle(state, child));
    }

    // A hard break owns the line ending: drop spaces before it and at the
    // start of the next line.
    for (i, child) in children.iter().enumerate() {
        if !matches!(child, Node::Break(_)) {
            continue;
        }
        if i > 0 && !matches!(children[i - 1], Node::Break(_)) {
            let prev = parts[i - 1].trim_end_matches(' ').len();
            parts[i - 1].truncate(prev);
        }
        if i + 1 < parts.len() && !matches!(children[i + 1], Node::Break(_)) {
            let next = parts[i + 1].trim_start_matches(' ').to_string();
            parts[i + 1] = next;
        }
    }

    parts.concat()
}
