// Whitespace normalization.
//
// Two stages. While the HTML tree is walked, `Collapse` turns runs of ASCII
// whitespace into single spaces and drops a space that would follow another
// space, a line break or a block boundary. Afterwards,
// `post_process_whitespace` merges adjacent text nodes and trims the edges
// of headings, paragraphs and table cells, which the walk cannot do because
// it only ever sees the text that comes next.

use crate::mdast::Node;

/// Document-order whitespace collapsing state.
#[derive(Debug, Default)]
pub(crate) struct Collapse {
    /// Whether a text node has been emitted since the last boundary.
    has_prev_text: bool,
    /// Whether that text ended with a space.
    prev_ends_with_space: bool,
    /// Set after void elements: a leading space is significant there.
    keep_leading_ws: bool,
}

impl Collapse {
    /// Collapse a text node's whitespace given what came before it.
    pub(crate) fn text(&mut self, raw: &str) -> String {
        let mut text = collapse(raw);
        if (!self.has_prev_text || self.prev_ends_with_space)
            && !self.keep_leading_ws
            && text.starts_with(' ')
        {
            text.remove(0);
        }
        if !text.is_empty() {
            self.has_prev_text = true;
            self.prev_ends_with_space = text.ends_with(' ');
        }
        text
    }

    /// Entering or leaving a block element, or a `<br>`.
    pub(crate) fn block_boundary(&mut self) {
        self.has_prev_text = false;
        self.prev_ends_with_space = false;
        self.keep_leading_ws = false;
    }

    /// Entering a void element such as `<img>`.
    pub(crate) fn void_boundary(&mut self) {
        self.has_prev_text = false;
        self.prev_ends_with_space = false;
        self.keep_leading_ws = true;
    }

    /// Entering an inline element.
    pub(crate) fn inline_element(&mut self) {
        if self.has_prev_text {
            self.keep_leading_ws = false;
        }
    }
}

/// Replace every run of ASCII whitespace with a single space.
fn collapse(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut in_run = false;
    for c in raw.chars() {
        if matches!(c, ' ' | '\t' | '\n' | '\r') {
            if !in_run {
                result.push(' ');
            }
            in_run = true;
        } else {
            result.push(c);
            in_run = false;
        }
    }
    result
}

/// Run whitespace post-processing on an MDAST tree.
pub(crate) fn post_process_whitespace(node: &mut Node) {
    // Recursively process children first.
    if let Some(children) = node.children_mut() {
        for child in children.iter_mut() {
            post_process_whitespace(child);
        }

        merge_adjacent_text(children);
        children.retain(|child| !is_empty_text(child));
    }

    let should_trim = matches!(
        node,
        Node::Heading(_) | Node::Paragraph(_) | Node::TableCell(_)
    );
    if should_trim {
        if let Some(children) = node.children_mut() {
            trim_start(children);
            trim_end(children);
            children.retain(|child| !is_empty_text(child));
        }
    }
}

/// Merge adjacent Text nodes into a single node.
fn merge_adjacent_text(children: &mut Vec<Node>) {
    let mut i = 0;
    while i + 1 < children.len() {
        if is_text(&children[i]) && is_text(&children[i + 1]) {
            if let Node::Text(next) = children.remove(i + 1) {
                if let Node::Text(ref mut current) = children[i] {
                    current.value.push_str(&next.value);
                }
            }
        } else {
            i += 1;
        }
    }
}

/// Trim leading spaces from the first text, descending into inline wrappers.
fn trim_start(children: &mut [Node]) {
    match children.first_mut() {
        Some(Node::Text(first)) => {
            first.value = first.value.trim_start_matches(' ').to_string();
        }
        Some(node @ (Node::Emphasis(_) | Node::Strong(_) | Node::Delete(_) | Node::Link(_))) => {
            if let Some(inner) = node.children_mut() {
                trim_start(inner);
            }
        }
        _ => {}
    }
}

/// Trim trailing spaces from the last text, descending into inline wrappers.
fn trim_end(children: &mut [Node]) {
    match children.last_mut() {
        Some(Node::Text(last)) => {
            last.value = last.value.trim_end_matches(' ').to_string();
        }
        Some(node @ (Node::Emphasis(_) | Node::Strong(_) | Node::Delete(_) | Node::Link(_))) => {
            if let Some(inner) = node.children_mut() {
                trim_end(inner);
            }
        }
        _ => {}
    }
}

fn is_text(node: &Node) -> bool {
    matches!(node, Node::Text(_))
}

fn is_empty_text(node: &Node) -> bool {
    matches!(node, Node::Text(t) if t.value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdast;

    #[test]
    fn test_collapse_runs() {
        assert_eq!(collapse("a \n\t b"), "a b");
        assert_eq!(collapse("\n\nx\n"), " x ");
    }

    #[test]
    fn test_leading_space_dropped_at_block_start() {
        let mut ws = Collapse::default();
        ws.block_boundary();
        assert_eq!(ws.text("  hello  "), "hello ");
        // Previous text ended with a space.
        assert_eq!(ws.text(" world"), "world");
    }

    #[test]
    fn test_leading_space_kept_after_void() {
        let mut ws = Collapse::default();
        ws.void_boundary();
        assert_eq!(ws.text(" caption"), " caption");
    }

    #[test]
    fn test_leading_space_kept_between_words() {
        let mut ws = Collapse::default();
        assert_eq!(ws.text("one"), "one");
        ws.inline_element();
        assert_eq!(ws.text(" two"), " two");
    }

    #[test]
    fn test_trim_descends_into_wrappers() {
        let mut node = Node::Paragraph(mdast::Paragraph {
            children: vec![
                Node::text("a "),
                Node::Emphasis(mdast::Emphasis {
                    children: vec![Node::text("b ")],
                }),
            ],
        });
        post_process_whitespace(&mut node);
        let Node::Paragraph(p) = node else {
            unreachable!()
        };
        assert_eq!(
            p.children,
            vec![
                Node::text("a "),
                Node::Emphasis(mdast::Emphasis {
                    children: vec![Node::text("b")],
                }),
            ]
        );
    }

    #[test]
    fn test_merge_adjacent_text() {
        let mut node = Node::Paragraph(mdast::Paragraph {
            children: vec![Node::text("a"), Node::text("b"), Node::text("")],
        });
        post_process_whitespace(&mut node);
        assert_eq!(node.children().unwrap(), &[Node::text("ab")]);
    }
}
