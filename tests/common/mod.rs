// Shared test helpers for markdownify.

use std::fs;
use std::path::Path;

use markdownify::{Options, StyleOptions};
use serde::Deserialize;

/// A fixture's input HTML, expected Markdown and conversion options.
pub struct Fixture {
    pub html: String,
    pub expected_md: String,
    pub options: Options,
}

/// Style keys accepted in `index.json`, spelled like the command-line flags.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct FixtureStyle {
    heading_style: Option<String>,
    hr: Option<String>,
    bullet_list_marker: Option<String>,
    code_block_style: Option<String>,
    em_delimiter: Option<String>,
    fence: Option<String>,
    strong_delimiter: Option<String>,
    link_style: Option<String>,
    link_reference_style: Option<String>,
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.map(|v| v.parse().unwrap_or_else(|e| panic!("bad fixture option: {e}")))
}

impl From<FixtureStyle> for StyleOptions {
    fn from(style: FixtureStyle) -> Self {
        StyleOptions {
            heading_style: parse(style.heading_style),
            hr: parse(style.hr),
            bullet_list_marker: parse(style.bullet_list_marker),
            code_block_style: parse(style.code_block_style),
            em_delimiter: parse(style.em_delimiter),
            fence: parse(style.fence),
            strong_delimiter: parse(style.strong_delimiter),
            link_style: parse(style.link_style),
            link_reference_style: parse(style.link_reference_style),
        }
    }
}

/// Load a test fixture.
///
/// Fixture directories contain `index.html`, `index.md`, and optionally
/// `index.json` with style options. The expected Markdown is compared
/// without the file's trailing newline.
pub fn load_fixture(name: &str) -> Fixture {
    let base = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-fixtures")
        .join(name);
    let html = fs::read_to_string(base.join("index.html"))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.html", name));
    let md = fs::read_to_string(base.join("index.md"))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.md", name));

    let style = match fs::read_to_string(base.join("index.json")) {
        Ok(json) => serde_json::from_str::<FixtureStyle>(&json)
            .unwrap_or_else(|e| panic!("Invalid fixture options {}/index.json: {e}", name)),
        Err(_) => FixtureStyle::default(),
    };

    Fixture {
        html,
        expected_md: md.trim_end_matches('\n').to_string(),
        options: Options::from(StyleOptions::from(style)),
    }
}
