// markdownify — HTML to Markdown conversion with a command-line front end.
//
// Architecture:
//   argument → input::resolve → HTML string → html5ever parse → HTML tree
//            → hast_to_mdast → MDAST → stringify → Markdown
//
// Output conventions follow turndown with its GFM plugin (setext headings,
// `*   ` bullets, indented code, `~` strikethrough, pipe tables).

// Logging macros that compile to nothing without the `tracing` feature.
macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    }};
}

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    }};
}

mod error;
mod hast_to_mdast;
pub mod input;
mod invocation;
pub mod mdast;
mod options;
mod stringify;

pub use error::{InputError, ParseChoiceError};
pub use invocation::{run, Invocation};
pub use options::{
    BulletListMarker, CodeBlockStyle, EmDelimiter, Fence, HeadingStyle, LinkReferenceStyle,
    LinkStyle, StrongDelimiter, StyleOptions, ThematicBreak,
};

/// Conversion options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Heading style for h1 and h2. Default: setext.
    pub heading_style: HeadingStyle,
    /// Thematic break text. Default: `"* * *"`.
    pub hr: String,
    /// Unordered list marker. Default: `*`.
    pub bullet_list_marker: BulletListMarker,
    pub code_block_style: CodeBlockStyle,
    /// Default: `_`.
    pub em_delimiter: EmDelimiter,
    pub fence: Fence,
    /// Default: `**`.
    pub strong_delimiter: StrongDelimiter,
    pub link_style: LinkStyle,
    pub link_reference_style: LinkReferenceStyle,
    /// Text written before the newline of a hard break. Default: two spaces.
    pub br: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            heading_style: HeadingStyle::default(),
            hr: "* * *".to_string(),
            bullet_list_marker: BulletListMarker::default(),
            code_block_style: CodeBlockStyle::default(),
            em_delimiter: EmDelimiter::default(),
            fence: Fence::default(),
            strong_delimiter: StrongDelimiter::default(),
            link_style: LinkStyle::default(),
            link_reference_style: LinkReferenceStyle::default(),
            br: "  ".to_string(),
        }
    }
}

impl Options {
    /// Create a new Options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading style.
    pub fn with_heading_style(mut self, style: HeadingStyle) -> Self {
        self.heading_style = style;
        self
    }

    /// Set the thematic break text.
    pub fn with_hr(mut self, hr: impl Into<String>) -> Self {
        self.hr = hr.into();
        self
    }

    /// Set the unordered list marker.
    pub fn with_bullet_list_marker(mut self, marker: BulletListMarker) -> Self {
        self.bullet_list_marker = marker;
        self
    }

    /// Set whether code blocks are indented or fenced.
    pub fn with_code_block_style(mut self, style: CodeBlockStyle) -> Self {
        self.code_block_style = style;
        self
    }

    /// Set the emphasis delimiter.
    pub fn with_em_delimiter(mut self, delimiter: EmDelimiter) -> Self {
        self.em_delimiter = delimiter;
        self
    }

    /// Set the fence used for fenced code blocks.
    pub fn with_fence(mut self, fence: Fence) -> Self {
        self.fence = fence;
        self
    }

    /// Set the strong delimiter.
    pub fn with_strong_delimiter(mut self, delimiter: StrongDelimiter) -> Self {
        self.strong_delimiter = delimiter;
        self
    }

    /// Set whether links are inlined or referenced.
    pub fn with_link_style(mut self, style: LinkStyle) -> Self {
        self.link_style = style;
        self
    }

    /// Set the reference form for referenced links.
    pub fn with_link_reference_style(mut self, style: LinkReferenceStyle) -> Self {
        self.link_reference_style = style;
        self
    }

    /// Set the text written before a hard break's newline.
    pub fn with_br(mut self, br: impl Into<String>) -> Self {
        self.br = br.into();
        self
    }
}

impl From<StyleOptions> for Options {
    fn from(style: StyleOptions) -> Self {
        let defaults = Options::default();
        Self {
            heading_style: style.heading_style.unwrap_or(defaults.heading_style),
            hr: style.hr.map_or(defaults.hr, |hr| hr.as_str().to_string()),
            bullet_list_marker: style
                .bullet_list_marker
                .unwrap_or(defaults.bullet_list_marker),
            code_block_style: style.code_block_style.unwrap_or(defaults.code_block_style),
            em_delimiter: style.em_delimiter.unwrap_or(defaults.em_delimiter),
            fence: style.fence.unwrap_or(defaults.fence),
            strong_delimiter: style.strong_delimiter.unwrap_or(defaults.strong_delimiter),
            link_style: style.link_style.unwrap_or(defaults.link_style),
            link_reference_style: style
                .link_reference_style
                .unwrap_or(defaults.link_reference_style),
            br: defaults.br,
        }
    }
}

/// Convert an HTML string to Markdown using default options.
///
/// # Examples
///
/// ```
/// let md = markdownify::convert("<h1>Hello</h1><p>World</p>");
/// assert_eq!(md, "Hello\n=====\n\nWorld");
/// ```
pub fn convert(html: &str) -> String {
    convert_with(html, &Options::default())
}

/// Convert an HTML string to Markdown with custom options.
///
/// # Examples
///
/// ```
/// use markdownify::{convert_with, HeadingStyle, Options};
///
/// let options = Options::new().with_heading_style(HeadingStyle::Atx);
/// assert_eq!(convert_with("<h1>Hello</h1>", &options), "# Hello");
/// ```
pub fn convert_with(html: &str, options: &Options) -> String {
    let mdast = html_to_mdast(html);
    let markdown = mdast_to_string(&mdast, options);
    debug!(
        html_bytes = html.len(),
        markdown_bytes = markdown.len(),
        "converted document"
    );
    markdown
}

/// Parse HTML and transform it into an MDAST tree.
pub fn html_to_mdast(html: &str) -> mdast::Node {
    hast_to_mdast::transform(html)
}

/// Serialize an MDAST tree to a Markdown string.
pub fn mdast_to_string(node: &mdast::Node, options: &Options) -> String {
    stringify::stringify(node, options)
}
