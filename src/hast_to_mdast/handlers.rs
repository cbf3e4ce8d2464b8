// Element handlers: one function per HTML element (or element group).
//
// Each handler takes an html5ever node and returns zero or more MDAST nodes.
// Handlers only produce tree nodes; no string formatting happens here.

use html5ever::serialize::{serialize, SerializeOpts};
use markup5ever::serialize::TraversalScope;
use markup5ever_rcdom::{Handle, NodeData, SerializableHandle};

use super::util::{clean_attribute, text_content, to_phrasing};
use super::wrap::wrap;
use super::{State, MAX_DEPTH};
use crate::mdast::{self, AlignKind, Node};

/// HTML has no colspan above this.
const MAX_COLSPAN: u32 = 1000;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Convert all children of an HTML node to MDAST nodes.
pub(crate) fn all(state: &mut State, handle: &Handle) -> Vec<Node> {
    let children = handle.children.borrow();
    let mut result = Vec::new();
    for child in children.iter() {
        let mut nodes = one(state, child);
        result.append(&mut nodes);
    }
    result
}

/// Convert a single HTML node to MDAST node(s).
pub(crate) fn one(state: &mut State, handle: &Handle) -> Vec<Node> {
    match &handle.data {
        NodeData::Text { ref contents } => {
            let text = state.whitespace.text(&contents.borrow());
            if text.is_empty() {
                vec![]
            } else {
                vec![Node::text(text)]
            }
        }
        NodeData::Element { ref name, .. } => {
            let tag = name.local.as_ref();
            if state.depth >= MAX_DEPTH {
                let text = state.whitespace.text(&text_content(handle));
                return if text.is_empty() {
                    vec![]
                } else {
                    vec![Node::text(text)]
                };
            }

            let block = is_block(tag);
            if block {
                state.whitespace.block_boundary();
            } else if is_void(tag) {
                state.whitespace.void_boundary();
            } else {
                state.whitespace.inline_element();
            }

            state.depth += 1;
            let nodes = dispatch_element(state, handle, tag);
            state.depth -= 1;

            if block {
                state.whitespace.block_boundary();
            }
            nodes
        }
        NodeData::Document => all(state, handle),
        // Comments, doctypes and processing instructions produce nothing.
        _ => vec![],
    }
}

/// Route an element to its handler based on tag name.
fn dispatch_element(state: &mut State, handle: &Handle, tag: &str) -> Vec<Node> {
    trace!(tag, depth = state.depth, "transforming element");

    match tag {
        // Ignore: not rendered, or metadata.
        "applet" | "area" | "base" | "basefont" | "bgsound" | "caption" | "col"
        | "colgroup" | "command" | "content" | "datalist" | "dialog" | "element"
        | "embed" | "frame" | "frameset" | "head" | "iframe" | "input" | "isindex"
        | "keygen" | "link" | "math" | "menuitem" | "meta" | "nextid" | "noembed"
        | "noframes" | "noscript" | "optgroup" | "option" | "param" | "script" | "select"
        | "shadow" | "source" | "spacer" | "style" | "svg" | "template" | "textarea"
        | "title" | "track" | "wbr" => vec![],

        // Flow wrappers: children wrapped as flow content.
        "address" | "article" | "aside" | "body" | "center" | "dd" | "details"
        | "div" | "dl" | "dt" | "fieldset" | "figcaption" | "figure" | "footer"
        | "form" | "header" | "hgroup" | "html" | "legend" | "main" | "multicol"
        | "nav" | "p" | "section" | "summary" => {
            let children = all(state, handle);
            wrap(children)
        }

        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => heading(state, handle, tag),
        "blockquote" => {
            let children = all(state, handle);
            vec![Node::Blockquote(mdast::Blockquote {
                children: wrap(children),
            })]
        }
        "ul" | "dir" | "menu" => list(state, handle, false),
        "ol" => list(state, handle, true),
        "li" => list_item(state, handle),
        "pre" | "listing" | "plaintext" | "xmp" => code_block(handle),
        "hr" => vec![Node::ThematicBreak(mdast::ThematicBreak)],
        "table" => table(state, handle),
        "br" => vec![Node::Break(mdast::Break)],

        // Phrasing
        "em" | "i" => {
            let children = all(state, handle);
            vec![Node::Emphasis(mdast::Emphasis { children })]
        }
        "strong" | "b" => {
            let children = all(state, handle);
            vec![Node::Strong(mdast::Strong { children })]
        }
        "del" | "s" | "strike" => {
            let children = all(state, handle);
            vec![Node::Delete(mdast::Delete { children })]
        }
        "code" | "kbd" | "samp" | "tt" => inline_code(state, handle),
        "a" => link(state, handle),
        "img" | "image" => image(state, handle),

        // Everything else (span, abbr, sup, unknown elements, ...) is
        // transparent.
        _ => all(state, handle),
    }
}

/// Elements that start and end a block for whitespace purposes.
fn is_block(tag: &str) -> bool {
    matches!(
        tag,
        "address" | "article" | "aside" | "audio" | "blockquote" | "body" | "br"
            | "canvas" | "center" | "dd" | "details" | "dir" | "div" | "dl" | "dt"
            | "fieldset" | "figcaption" | "figure" | "footer" | "form" | "frameset"
            | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "header" | "hgroup" | "hr"
            | "html" | "isindex" | "li" | "listing" | "main" | "menu" | "nav"
            | "noframes" | "noscript" | "ol" | "output" | "p" | "plaintext" | "pre"
            | "section" | "summary" | "table" | "tbody" | "td" | "tfoot" | "th"
            | "thead" | "tr" | "ul" | "xmp"
    )
}

/// Void elements: whitespace after them is significant.
fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "col" | "command" | "embed" | "img" | "image" | "input"
            | "keygen" | "link" | "meta" | "param" | "source" | "track" | "wbr"
    )
}

// ---------------------------------------------------------------------------
// Flow handlers
// ---------------------------------------------------------------------------

fn heading(state: &mut State, handle: &Handle, tag: &str) -> Vec<Node> {
    let depth = tag[1..].parse::<u8>().unwrap_or(1);
    let children = to_phrasing(all(state, handle));
    vec![Node::Heading(mdast::Heading { depth, children })]
}

fn list(state: &mut State, handle: &Handle, ordered: bool) -> Vec<Node> {
    let start = if ordered {
        get_attr(handle, "start").and_then(|s| s.trim().parse::<u32>().ok())
    } else {
        None
    };

    let mut items = Vec::new();
    for child in handle.children.borrow().iter() {
        for node in one(state, child) {
            match node {
                Node::ListItem(_) => items.push(node),
                Node::Text(ref t) if t.value.trim().is_empty() => {}
                // Stray content directly inside the list gets its own item.
                other => items.push(Node::ListItem(mdast::ListItem {
                    checked: None,
                    children: wrap(vec![other]),
                })),
            }
        }
    }

    vec![Node::List(mdast::List {
        ordered,
        start,
        children: items,
    })]
}

fn list_item(state: &mut State, handle: &Handle) -> Vec<Node> {
    let checked = task_checkbox(handle);
    let children = all(state, handle);
    vec![Node::ListItem(mdast::ListItem {
        checked,
        children: wrap(children),
    })]
}

/// GFM task list: a checkbox directly inside the list item.
fn task_checkbox(handle: &Handle) -> Option<bool> {
    handle
        .children
        .borrow()
        .iter()
        .find(|child| {
            tag_name(child).as_deref() == Some("input")
                && get_attr(child, "type").is_some_and(|t| t.eq_ignore_ascii_case("checkbox"))
        })
        .map(|input| get_attr(input, "checked").is_some())
}

fn code_block(handle: &Handle) -> Vec<Node> {
    let mut value = text_content(handle);
    if value.ends_with('\n') {
        value.pop();
    }

    let lang = handle
        .children
        .borrow()
        .iter()
        .find(|child| tag_name(child).as_deref() == Some("code"))
        .and_then(|code| get_attr(code, "class"))
        .and_then(|class| {
            class
                .split_whitespace()
                .find_map(|name| name.strip_prefix("language-"))
                .filter(|lang| !lang.is_empty())
                .map(str::to_string)
        });

    vec![Node::Code(mdast::Code { value, lang })]
}

// ---------------------------------------------------------------------------
// Table (GFM)
// ---------------------------------------------------------------------------

fn table(state: &mut State, handle: &Handle) -> Vec<Node> {
    if state.in_table {
        let text = state.whitespace.text(&text_content(handle));
        return if text.is_empty() {
            vec![]
        } else {
            vec![Node::text(text)]
        };
    }

    let rows = collect_rows(handle);
    let Some((first_row, first_section)) = rows.first() else {
        return vec![];
    };

    if !is_heading_row(first_row, first_section) {
        // No heading row: GFM cannot express the table, keep it as HTML.
        return vec![Node::Html(mdast::Html {
            value: outer_html(handle),
        })];
    }

    state.in_table = true;
    let mut align = Vec::new();
    let mut children = Vec::new();
    for (index, (row, _)) in rows.iter().enumerate() {
        let mut cells = Vec::new();
        for cell in row.children.borrow().iter() {
            if !matches!(tag_name(cell).as_deref(), Some("td") | Some("th")) {
                continue;
            }
            let colspan = get_attr(cell, "colspan")
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|&n| n > 1)
                .map(|n| n.min(MAX_COLSPAN));
            if index == 0 {
                align.push(get_attr(cell, "align").and_then(|v| AlignKind::from_attr(&v)));
                for _ in 1..colspan.unwrap_or(1) {
                    align.push(None);
                }
            }

            state.whitespace.block_boundary();
            let content = to_phrasing(all(state, cell));
            state.whitespace.block_boundary();
            cells.push(Node::TableCell(mdast::TableCell {
                children: content,
                colspan,
            }));
        }
        children.push(Node::TableRow(mdast::TableRow { children: cells }));
    }
    state.in_table = false;

    vec![Node::Table(mdast::Table { align, children })]
}

/// Collect `<tr>` elements in order, each with the tag of its parent
/// (`table`, `thead`, `tbody` or `tfoot`).
fn collect_rows(table: &Handle) -> Vec<(Handle, String)> {
    let mut rows = Vec::new();
    for child in table.children.borrow().iter() {
        match tag_name(child).as_deref() {
            Some("tr") => rows.push((child.clone(), "table".to_string())),
            Some(section @ ("thead" | "tbody" | "tfoot")) => {
                for row in child.children.borrow().iter() {
                    if tag_name(row).as_deref() == Some("tr") {
                        rows.push((row.clone(), section.to_string()));
                    }
                }
            }
            _ => {}
        }
    }
    rows
}

/// A row in `<thead>`, or a first row made only of `<th>` cells.
fn is_heading_row(row: &Handle, section: &str) -> bool {
    if section == "thead" {
        return true;
    }
    if section == "tfoot" {
        return false;
    }
    let children = row.children.borrow();
    let mut cells = children
        .iter()
        .filter(|child| !is_whitespace_text(child))
        .peekable();
    cells.peek().is_some() && cells.all(|cell| tag_name(cell).as_deref() == Some("th"))
}

/// Serialize an element (including itself) back to HTML.
fn outer_html(handle: &Handle) -> String {
    let mut bytes = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    let node = SerializableHandle::from(handle.clone());
    match serialize(&mut bytes, &node, opts) {
        Ok(()) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => text_content(handle),
    }
}

// ---------------------------------------------------------------------------
// Phrasing handlers
// ---------------------------------------------------------------------------

fn inline_code(state: &mut State, handle: &Handle) -> Vec<Node> {
    let value = state.whitespace.text(&text_content(handle));
    if value.is_empty() {
        return vec![];
    }
    vec![Node::InlineCode(mdast::InlineCode { value })]
}

fn link(state: &mut State, handle: &Handle) -> Vec<Node> {
    let children = all(state, handle);
    match get_attr(handle, "href").filter(|href| !href.is_empty()) {
        Some(href) => vec![Node::Link(mdast::Link {
            url: state.resolve(&href),
            title: title_attr(handle),
            children,
        })],
        // An anchor without a destination is just its content.
        None => children,
    }
}

fn image(state: &mut State, handle: &Handle) -> Vec<Node> {
    let Some(src) = get_attr(handle, "src").filter(|src| !src.is_empty()) else {
        return vec![];
    };
    vec![Node::Image(mdast::Image {
        url: state.resolve(&src),
        title: title_attr(handle),
        alt: get_attr(handle, "alt")
            .map(|alt| clean_attribute(&alt))
            .unwrap_or_default(),
    })]
}

fn title_attr(handle: &Handle) -> Option<String> {
    get_attr(handle, "title")
        .map(|title| clean_attribute(&title))
        .filter(|title| !title.is_empty())
}

// ---------------------------------------------------------------------------
// Attribute helpers
// ---------------------------------------------------------------------------

/// Get the value of an attribute on an element node.
pub(crate) fn get_attr(handle: &Handle, name: &str) -> Option<String> {
    if let NodeData::Element { ref attrs, .. } = handle.data {
        for attr in attrs.borrow().iter() {
            if attr.name.local.as_ref() == name {
                return Some(attr.value.to_string());
            }
        }
    }
    None
}

/// Get the tag name of an element node.
pub(crate) fn tag_name(handle: &Handle) -> Option<String> {
    if let NodeData::Element { ref name, .. } = handle.data {
        Some(name.local.as_ref().to_string())
    } else {
        None
    }
}

fn is_whitespace_text(handle: &Handle) -> bool {
    match handle.data {
        NodeData::Text { ref contents } => contents.borrow().trim().is_empty(),
        _ => false,
    }
}
