// MDAST node types, based on https://github.com/syntax-tree/mdast
//
// The subset of the Markdown abstract syntax tree that the HTML transform
// produces. Parent nodes own their children; leaf nodes hold their value.
// Reference links are not tree nodes: the serializer decides between inline
// and reference form from the link style option.

/// Alignment of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignKind {
    Left,
    Right,
    Center,
}

impl AlignKind {
    /// Parse an HTML `align` attribute value (case-insensitive).
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Some(AlignKind::Left),
            "right" => Some(AlignKind::Right),
            "center" => Some(AlignKind::Center),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Node structs
// ---------------------------------------------------------------------------

/// Document root.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Root {
    pub children: Vec<Node>,
}

/// Block quote (`> ...`).
#[derive(Debug, Clone, PartialEq)]
pub struct Blockquote {
    pub children: Vec<Node>,
}

/// Preformatted code block, written indented or fenced.
#[derive(Debug, Clone, PartialEq)]
pub struct Code {
    pub value: String,
    /// Language from a `language-*` class, used by fenced output.
    pub lang: Option<String>,
}

/// Heading, depth 1–6.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub depth: u8,
    pub children: Vec<Node>,
}

/// Raw HTML kept verbatim (tables without a heading row).
#[derive(Debug, Clone, PartialEq)]
pub struct Html {
    pub value: String,
}

/// Ordered or unordered list.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub ordered: bool,
    /// First number of an ordered list (`start` attribute).
    pub start: Option<u32>,
    pub children: Vec<Node>,
}

/// Item inside a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    /// Task list state from a leading checkbox (GFM).
    pub checked: Option<bool>,
    pub children: Vec<Node>,
}

/// Thematic break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThematicBreak;

/// Paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub children: Vec<Node>,
}

/// Plain text, already whitespace-collapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub value: String,
}

/// Emphasis.
#[derive(Debug, Clone, PartialEq)]
pub struct Emphasis {
    pub children: Vec<Node>,
}

/// Strong emphasis.
#[derive(Debug, Clone, PartialEq)]
pub struct Strong {
    pub children: Vec<Node>,
}

/// Inline code.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineCode {
    pub value: String,
}

/// Hard line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Break;

/// Hyperlink.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub url: String,
    pub title: Option<String>,
    pub children: Vec<Node>,
}

/// Image.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub url: String,
    pub title: Option<String>,
    pub alt: String,
}

// GFM extensions ---------------------------------------------------------

/// Strikethrough.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub children: Vec<Node>,
}

/// GFM table. The first row is the heading row.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub align: Vec<Option<AlignKind>>,
    pub children: Vec<Node>, // TableRow
}

/// Row in a GFM table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub children: Vec<Node>, // TableCell
}

/// Cell in a GFM table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub children: Vec<Node>,
    /// Column span from the HTML `colspan` attribute; extra columns are
    /// written as empty cells.
    pub colspan: Option<u32>,
}

// ---------------------------------------------------------------------------
// Node enum
// ---------------------------------------------------------------------------

/// A node in the Markdown abstract syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Document
    Root(Root),

    // Flow (block) content
    Blockquote(Blockquote),
    Code(Code),
    Heading(Heading),
    Html(Html),
    List(List),
    ListItem(ListItem),
    ThematicBreak(ThematicBreak),
    Paragraph(Paragraph),

    // Phrasing (inline) content
    Break(Break),
    Delete(Delete),
    Emphasis(Emphasis),
    Image(Image),
    InlineCode(InlineCode),
    Link(Link),
    Strong(Strong),
    Text(Text),

    // Table (GFM)
    Table(Table),
    TableRow(TableRow),
    TableCell(TableCell),
}

impl Node {
    /// Shorthand for a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
        })
    }

    /// Returns a reference to this node's children, if it has any.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(n) => Some(&n.children),
            Node::Blockquote(n) => Some(&n.children),
            Node::Heading(n) => Some(&n.children),
            Node::List(n) => Some(&n.children),
            Node::ListItem(n) => Some(&n.children),
            Node::Paragraph(n) => Some(&n.children),
            Node::Emphasis(n) => Some(&n.children),
            Node::Strong(n) => Some(&n.children),
            Node::Delete(n) => Some(&n.children),
            Node::Link(n) => Some(&n.children),
            Node::Table(n) => Some(&n.children),
            Node::TableRow(n) => Some(&n.children),
            Node::TableCell(n) => Some(&n.children),
            _ => None,
        }
    }

    /// Returns a mutable reference to this node's children, if it has any.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root(n) => Some(&mut n.children),
            Node::Blockquote(n) => Some(&mut n.children),
            Node::Heading(n) => Some(&mut n.children),
            Node::List(n) => Some(&mut n.children),
            Node::ListItem(n) => Some(&mut n.children),
            Node::Paragraph(n) => Some(&mut n.children),
            Node::Emphasis(n) => Some(&mut n.children),
            Node::Strong(n) => Some(&mut n.children),
            Node::Delete(n) => Some(&mut n.children),
            Node::Link(n) => Some(&mut n.children),
            Node::Table(n) => Some(&mut n.children),
            Node::TableRow(n) => Some(&mut n.children),
            Node::TableCell(n) => Some(&mut n.children),
            _ => None,
        }
    }

    /// Whether this node is phrasing (inline) content.
    ///
    /// `Html` is flow content: the only raw HTML the transform keeps is a
    /// whole table.
    pub fn is_phrasing(&self) -> bool {
        matches!(
            self,
            Node::Break(_)
                | Node::Delete(_)
                | Node::Emphasis(_)
                | Node::Image(_)
                | Node::InlineCode(_)
                | Node::Link(_)
                | Node::Strong(_)
                | Node::Text(_)
        )
    }

    /// Whether this node is flow (block) content.
    pub fn is_flow(&self) -> bool {
        matches!(
            self,
            Node::Blockquote(_)
                | Node::Code(_)
                | Node::Heading(_)
                | Node::Html(_)
                | Node::List(_)
                | Node::ThematicBreak(_)
                | Node::Paragraph(_)
                | Node::Table(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_phrasing() {
        let node = Node::text("hello");
        assert!(node.is_phrasing());
        assert!(!node.is_flow());
    }

    #[test]
    fn test_paragraph_is_flow() {
        let node = Node::Paragraph(Paragraph {
            children: vec![Node::text("hello")],
        });
        assert!(node.is_flow());
        assert!(!node.is_phrasing());
    }

    #[test]
    fn test_kept_table_html_is_flow() {
        let node = Node::Html(Html {
            value: "<table><tbody><tr><td>a</td></tr></tbody></table>".into(),
        });
        assert!(!node.is_phrasing());
        assert!(node.is_flow());
    }

    #[test]
    fn test_children_access() {
        let mut node = Node::Delete(Delete {
            children: vec![Node::text("gone")],
        });
        assert_eq!(node.children().unwrap().len(), 1);
        node.children_mut().unwrap().push(Node::Break(Break));
        assert_eq!(node.children().unwrap().len(), 2);
    }

    #[test]
    fn test_leaf_has_no_children() {
        assert!(Node::text("hello").children().is_none());
        assert!(Node::ThematicBreak(ThematicBreak).children().is_none());
    }

    #[test]
    fn test_align_from_attr() {
        assert_eq!(AlignKind::from_attr("Center"), Some(AlignKind::Center));
        assert_eq!(AlignKind::from_attr(" right "), Some(AlignKind::Right));
        assert_eq!(AlignKind::from_attr("justify"), None);
    }
}
