// MDAST → Markdown string serializer.
//
// Walks an MDAST tree and emits a Markdown string. All formatting choices
// (heading style, list markers, delimiters, link style, ...) live here and
// come from `Options`.

pub(crate) mod escape;
pub(crate) mod flow;
pub(crate) mod handlers;
pub(crate) mod phrasing;

use crate::mdast::Node;
use crate::Options;

/// Serializer state threaded through all handlers.
pub(crate) struct State<'a> {
    pub options: &'a Options,
    /// Whether the next text to be emitted is at the start of a block.
    /// Used to apply line-start escaping (e.g. `# ` → `\# `).
    pub at_break: bool,
    /// Whether we're serializing table cell content (pipes are escaped).
    pub in_table_cell: bool,
    /// Link reference definitions collected for referenced link style,
    /// appended after the document.
    pub references: Vec<String>,
}

impl<'a> State<'a> {
    pub fn new(options: &'a Options) -> Self {
        Self {
            options,
            at_break: false,
            in_table_cell: false,
            references: Vec::new(),
        }
    }
}

/// Serialize an MDAST tree to a Markdown string.
///
/// Leading newlines and trailing whitespace are trimmed; the result has no
/// trailing newline.
pub(crate) fn stringify(node: &Node, options: &Options) -> String {
    let mut state = State::new(options);
    let mut output = handlers::handle(&mut state, node);

    if !state.references.is_empty() {
        output.push_str("\n\n");
        output.push_str(&state.references.join("\n"));
    }

    output
        .trim_start_matches(['\n', '\r', '\t'])
        .trim_end()
        .to_string()
}
