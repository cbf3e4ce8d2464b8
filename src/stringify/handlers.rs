// Node type handlers for MDAST → Markdown serialization.
//
// One handler per MDAST node type. Each takes a State and Node, returns a String.

use super::State;
use crate::mdast::{self, AlignKind, Node};
use crate::{CodeBlockStyle, HeadingStyle, LinkReferenceStyle, LinkStyle};

/// Dispatch to the appropriate handler for a node.
pub(crate) fn handle(state: &mut State, node: &Node) -> String {
    match node {
        Node::Root(n) => super::flow::container_flow(state, &n.children),
        Node::Paragraph(n) => handle_paragraph(state, n),
        Node::Heading(n) => handle_heading(state, n),
        Node::ThematicBreak(_) => state.options.hr.clone(),
        Node::Blockquote(n) => handle_blockquote(state, n),
        Node::List(n) => handle_list(state, n),
        Node::ListItem(n) => {
            let prefix = bullet_prefix(state);
            render_item(state, n, &prefix)
        }
        Node::Code(n) => handle_code(state, n),
        Node::Html(n) => n.value.clone(),
        Node::Text(n) => handle_text(state, n),
        Node::Emphasis(n) => {
            let delimiter = state.options.em_delimiter.as_str();
            delimited(state, &n.children, delimiter)
        }
        Node::Strong(n) => {
            let delimiter = state.options.strong_delimiter.as_str();
            delimited(state, &n.children, delimiter)
        }
        Node::Delete(n) => delimited(state, &n.children, "~"),
        Node::InlineCode(n) => handle_inline_code(n),
        Node::Break(_) => format!("{}\n", state.options.br),
        Node::Link(n) => handle_link(state, n),
        Node::Image(n) => handle_image(n),
        Node::Table(n) => handle_table(state, n),
        Node::TableRow(_) | Node::TableCell(_) => {
            // Handled by the table handler directly.
            String::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Flow (block) handlers
// ---------------------------------------------------------------------------

fn handle_paragraph(state: &mut State, node: &mdast::Paragraph) -> String {
    state.at_break = true;
    let content = super::phrasing::container_phrasing(state, &node.children);
    state.at_break = false;
    content
}

fn handle_heading(state: &mut State, node: &mdast::Heading) -> String {
    state.at_break = true;
    let content = super::phrasing::container_phrasing(state, &node.children);
    state.at_break = false;
    if content.is_empty() {
        return String::new();
    }

    let use_setext =
        node.depth <= 2 && matches!(state.options.heading_style, HeadingStyle::Setext);
    if use_setext {
        let marker = if node.depth == 1 { "=" } else { "-" };
        let width = content.lines().last().map_or(0, |line| line.chars().count());
        return format!("{}\n{}", content, marker.repeat(width.max(1)));
    }

    // ATX headings cannot span lines.
    let content = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} {}", "#".repeat(node.depth as usize), content)
}

fn handle_blockquote(state: &mut State, node: &mdast::Blockquote) -> String {
    let content = super::flow::container_flow(state, &node.children);
    content
        .lines()
        .map(|line| {
            if line.is_empty() {
                ">".to_string()
            } else {
                format!("> {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn handle_list(state: &mut State, node: &mdast::List) -> String {
    let start = node.start.unwrap_or(1);
    let mut items = Vec::with_capacity(node.children.len());

    for (i, child) in node.children.iter().enumerate() {
        let Node::ListItem(item) = child else {
            continue;
        };
        let prefix = if node.ordered {
            format!("{}.  ", start.saturating_add(i as u32))
        } else {
            bullet_prefix(state)
        };
        items.push(render_item(state, item, &prefix));
    }

    items.join("\n")
}

fn bullet_prefix(state: &State) -> String {
    format!("{}   ", state.options.bullet_list_marker.as_str())
}

/// Render one list item: prefix on the first line, four-space indent after.
fn render_item(state: &mut State, node: &mdast::ListItem, prefix: &str) -> String {
    let mut content = super::flow::container_flow_item(state, &node.children);

    if let Some(checked) = node.checked {
        let checkbox = if checked { "[x]" } else { "[ ]" };
        content = if content.is_empty() {
            checkbox.to_string()
        } else {
            format!("{} {}", checkbox, content)
        };
    }

    if content.is_empty() {
        return prefix.trim_end().to_string();
    }

    let mut lines = content.lines();
    let mut item = format!("{}{}", prefix, lines.next().unwrap_or_default());
    for line in lines {
        item.push('\n');
        if !line.is_empty() {
            item.push_str("    ");
            item.push_str(line);
        }
    }
    item
}

fn handle_code(state: &mut State, node: &mdast::Code) -> String {
    match state.options.code_block_style {
        CodeBlockStyle::Indented => {
            if node.value.is_empty() {
                return String::new();
            }
            node.value
                .split('\n')
                .map(|line| format!("    {}", line))
                .collect::<Vec<_>>()
                .join("\n")
        }
        CodeBlockStyle::Fenced => {
            let marker = state.options.fence.marker();
            // The fence must be longer than any run of its character that
            // starts a line of the content.
            let longest = node
                .value
                .lines()
                .map(|line| line.chars().take_while(|&c| c == marker).count())
                .filter(|&run| run >= 3)
                .max()
                .unwrap_or(0);
            let fence: String = std::iter::repeat(marker).take((longest + 1).max(3)).collect();
            let lang = node.lang.as_deref().unwrap_or("");
            format!("{}{}\n{}\n{}", fence, lang, node.value, fence)
        }
    }
}

// ---------------------------------------------------------------------------
// Phrasing (inline) handlers
// ---------------------------------------------------------------------------

fn handle_text(state: &mut State, node: &mdast::Text) -> String {
    let escaped = super::escape::escape_phrasing(&node.value, state.in_table_cell);
    if state.at_break {
        state.at_break = false;
        super::escape::escape_at_break_start(escaped)
    } else {
        escaped
    }
}

/// Emphasis, strong and strikethrough: whitespace at the edges of the
/// content moves outside the delimiters, and empty content renders nothing.
fn delimited(state: &mut State, children: &[Node], delimiter: &str) -> String {
    let content = super::phrasing::container_phrasing(state, children);
    let (leading, trimmed, trailing) = split_flanking(&content);
    if trimmed.is_empty() {
        return if content.is_empty() { String::new() } else { " ".to_string() };
    }
    format!("{leading}{delimiter}{trimmed}{delimiter}{trailing}")
}

/// Split content into (leading space, trimmed content, trailing space).
fn split_flanking(content: &str) -> (&'static str, &str, &'static str) {
    let trimmed = content.trim_matches(' ');
    let leading = if content.starts_with(' ') { " " } else { "" };
    let trailing = if content.ends_with(' ') && !trimmed.is_empty() { " " } else { "" };
    (leading, trimmed, trailing)
}

fn handle_inline_code(node: &mdast::InlineCode) -> String {
    let value = node.value.replace("\r\n", " ").replace(['\r', '\n'], " ");
    if value.is_empty() {
        return String::new();
    }

    let padded = value.starts_with('`')
        || value.ends_with('`')
        || (value.len() > 1
            && value.starts_with(' ')
            && value.ends_with(' ')
            && !value.trim().is_empty());
    let space = if padded { " " } else { "" };

    let ticks = "`".repeat(shortest_free_backtick_run(&value));
    format!("{ticks}{space}{value}{space}{ticks}")
}

fn handle_link(state: &mut State, node: &mdast::Link) -> String {
    let content = super::phrasing::container_phrasing(state, &node.children);
    let (leading, content, trailing) = split_flanking(&content);

    let title = node
        .title
        .as_ref()
        .map(|title| format!(" \"{}\"", title.replace('"', "\\\"")))
        .unwrap_or_default();

    let link = match state.options.link_style {
        LinkStyle::Inlined => {
            let url = node.url.replace('(', "\\(").replace(')', "\\)");
            format!("[{}]({}{})", content, url, title)
        }
        LinkStyle::Referenced => {
            let (link, label) = match state.options.link_reference_style {
                LinkReferenceStyle::Full => {
                    let id = (state.references.len() + 1).to_string();
                    (format!("[{}][{}]", content, id), id)
                }
                LinkReferenceStyle::Collapsed => (format!("[{}][]", content), content.to_string()),
                LinkReferenceStyle::Shortcut => (format!("[{}]", content), content.to_string()),
            };
            state
                .references
                .push(format!("[{}]: {}{}", label, node.url, title));
            link
        }
    };

    format!("{leading}{link}{trailing}")
}

fn handle_image(node: &mdast::Image) -> String {
    match &node.title {
        Some(title) => format!("![{}]({} \"{}\")", node.alt, node.url, title),
        None => format!("![{}]({})", node.alt, node.url),
    }
}

// ---------------------------------------------------------------------------
// Table (GFM)
// ---------------------------------------------------------------------------

fn handle_table(state: &mut State, node: &mdast::Table) -> String {
    let mut lines = Vec::with_capacity(node.children.len() + 1);

    for (index, row) in node.children.iter().enumerate() {
        let Node::TableRow(row) = row else {
            continue;
        };
        let cells = render_cells(state, row);
        lines.push(format_row(&cells));

        if index == 0 {
            let separator: Vec<String> = node
                .align
                .iter()
                .map(|align| separator_cell(*align).to_string())
                .collect();
            lines.push(format_row(&separator));
        }
    }

    lines.join("\n")
}

/// Render the cells of a row, one column per entry (colspan expanded).
fn render_cells(state: &mut State, row: &mdast::TableRow) -> Vec<String> {
    let mut cells = Vec::with_capacity(row.children.len());
    state.in_table_cell = true;
    for cell in &row.children {
        let Node::TableCell(cell) = cell else {
            continue;
        };
        let content = super::phrasing::container_phrasing(state, &cell.children);
        // Cells are single-line.
        let content = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        cells.push(content);
        for _ in 1..cell.colspan.unwrap_or(1) {
            cells.push(String::new());
        }
    }
    state.in_table_cell = false;
    cells
}

fn format_row(cells: &[String]) -> String {
    let mut row = String::from("|");
    for cell in cells {
        row.push(' ');
        row.push_str(cell);
        row.push_str(" |");
    }
    row
}

fn separator_cell(align: Option<AlignKind>) -> &'static str {
    match align {
        Some(AlignKind::Left) => ":--",
        Some(AlignKind::Right) => "--:",
        Some(AlignKind::Center) => ":-:",
        None => "---",
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Length of the shortest backtick run that does not occur in `s`.
fn shortest_free_backtick_run(s: &str) -> usize {
    let mut runs = Vec::new();
    let mut current = 0;
    for c in s.chars() {
        if c == '`' {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    if current > 0 {
        runs.push(current);
    }

    let mut length = 1;
    while runs.contains(&length) {
        length += 1;
    }
    length
}
