// Regression tests — every bug found becomes a test case here.
// Never delete a test from this file.

use pretty_assertions::assert_eq;

/// Link text containing `]` must be escaped to prevent premature bracket
/// close in the `[text](url)` syntax.
#[test]
fn link_text_with_bracket() {
    let md = markdownify::convert(r#"<a href="http://example.com">foo]bar</a>"#);
    assert_eq!(md, "[foo\\]bar](http://example.com)");
}

/// A closing paren in a link destination must not end the destination early.
#[test]
fn link_href_with_parens() {
    let md = markdownify::convert(r#"<a href="https://en.wikipedia.org/wiki/Rust_(language)">Rust</a>"#);
    assert_eq!(md, "[Rust](https://en.wikipedia.org/wiki/Rust_\\(language\\))");
}

/// A single tilde should NOT be escaped (it's not strikethrough syntax alone).
#[test]
fn single_tilde_not_escaped() {
    let md = markdownify::convert("<p>~/.bashrc</p>");
    assert_eq!(md, "~/.bashrc");
}

/// Pipe characters in table cells must be escaped to prevent breaking table structure.
#[test]
fn pipe_in_table_cell_escaped() {
    let md =
        markdownify::convert("<table><tr><th>Header</th></tr><tr><td>a|b</td></tr></table>");
    assert_eq!(md, "| Header |\n| --- |\n| a\\|b |");
}

/// Pipe escaping should not apply outside of tables.
#[test]
fn pipe_not_escaped_outside_table() {
    let md = markdownify::convert("<p>a|b</p>");
    assert_eq!(md, "a|b");
}

/// A hard break inside a table cell must not split the row.
#[test]
fn break_in_table_cell_stays_on_one_line() {
    let md = markdownify::convert(
        "<table><thead><tr><th>H</th></tr></thead><tbody><tr><td>one<br>two</td></tr></tbody></table>",
    );
    assert_eq!(md, "| H |\n| --- |\n| one two |");
}

/// A colspan keeps later cells in their columns.
#[test]
fn colspan_pads_row() {
    let md = markdownify::convert(
        "<table><tr><th>A</th><th>B</th><th>C</th></tr><tr><td colspan=\"2\">wide</td><td>c</td></tr></table>",
    );
    assert_eq!(md, "| A | B | C |\n| --- | --- | --- |\n| wide |  | c |");
}

/// Text that looks like a list item at the start of a paragraph is escaped.
#[test]
fn leading_dash_escaped() {
    assert_eq!(markdownify::convert("<p>- not a list</p>"), "\\- not a list");
    assert_eq!(markdownify::convert("<p>a - b</p>"), "a - b");
}

/// Whitespace between inline elements is kept once.
#[test]
fn space_between_inline_elements() {
    let md = markdownify::convert("<p><em>a</em> <strong>b</strong></p>");
    assert_eq!(md, "_a_ **b**");
}

/// Script and style content never reaches the output.
#[test]
fn script_and_style_dropped() {
    let md = markdownify::convert(
        "<style>p { color: red }</style><p>visible</p><script>alert(1)</script>",
    );
    assert_eq!(md, "visible");
}

/// Deeply nested HTML should not cause a stack overflow.
#[test]
fn deep_nesting_no_stack_overflow() {
    // 3000 nested divs — well beyond the depth limit. Must not panic.
    let html = "<div>".repeat(3000) + "deep text" + &"</div>".repeat(3000);
    let md = markdownify::convert(&html);
    assert_eq!(md, "deep text");

    // Text at shallow depth (within limit) must still be converted.
    let shallow = "<div>".repeat(100) + "shallow text" + &"</div>".repeat(100);
    assert_eq!(markdownify::convert(&shallow), "shallow text");
}
