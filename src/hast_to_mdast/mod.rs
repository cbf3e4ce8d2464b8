// HTML tree → MDAST transform
//
// Parses HTML via html5ever and walks the resulting tree, dispatching each
// element to a handler that produces MDAST nodes. Whitespace is collapsed
// during the walk (see `whitespace::Collapse`) so handlers only ever see
// normalized text.

pub(crate) mod handlers;
pub(crate) mod util;
pub(crate) mod whitespace;
pub(crate) mod wrap;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use url::Url;

use crate::mdast;

/// Elements nested deeper than this are flattened to their text content.
pub(crate) const MAX_DEPTH: usize = 256;

/// Transformation state threaded through all handlers.
pub(crate) struct State {
    /// Base URL from the first valid `<base href>` in the document.
    pub frozen_base_url: Option<Url>,
    /// Whether we're currently inside a table (nested tables → text).
    pub in_table: bool,
    /// Current element nesting depth.
    pub depth: usize,
    /// Whitespace collapsing state, in document order.
    pub whitespace: whitespace::Collapse,
}

impl State {
    fn new() -> Self {
        Self {
            frozen_base_url: None,
            in_table: false,
            depth: 0,
            whitespace: whitespace::Collapse::default(),
        }
    }

    /// Resolve a URL against the frozen base URL.
    pub fn resolve(&self, raw: &str) -> String {
        if let Some(base) = &self.frozen_base_url {
            if let Ok(resolved) = base.join(raw) {
                return resolved.to_string();
            }
        }
        raw.to_string()
    }
}

/// Parse an HTML string and transform it into an MDAST tree.
pub(crate) fn transform(html: &str) -> mdast::Node {
    let dom = parse_html(html);
    let mut state = State::new();
    state.frozen_base_url = find_base_url(&dom.document);

    let children = handlers::all(&mut state, &dom.document);
    let mut root = mdast::Node::Root(mdast::Root {
        children: wrap::wrap(children),
    });
    whitespace::post_process_whitespace(&mut root);
    root
}

/// Parse an HTML string into an html5ever RcDom.
fn parse_html(html: &str) -> RcDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };
    parse_document(RcDom::default(), opts)
        .from_utf8()
        .one(html.as_bytes())
}

/// Find the first `<base>` element with an absolute `href`.
///
/// Only the first `<base>` counts, even when its href does not parse.
fn find_base_url(document: &Handle) -> Option<Url> {
    let mut stack = vec![document.clone()];
    while let Some(handle) = stack.pop() {
        if let NodeData::Element { ref name, .. } = handle.data {
            if name.local.as_ref() == "base" {
                if let Some(href) = handlers::get_attr(&handle, "href") {
                    return Url::parse(&href).ok();
                }
            }
        }
        for child in handle.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }
    None
}
