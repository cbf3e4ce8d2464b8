// Fixture tests: input/output pairs under `test-fixtures/`.
//
// Each fixture directory contains:
//   index.html — HTML input
//   index.md   — expected Markdown output
//   index.json — optional style options, keyed like the command-line flags
//
// These tests run the full pipeline: HTML string → MDAST → Markdown string.

mod common;

use pretty_assertions::assert_eq;

fn fixture_test(name: &str) {
    let f = common::load_fixture(name);
    let result = markdownify::convert_with(&f.html, &f.options);
    assert_eq!(result, f.expected_md, "fixture: {}", name);
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

#[test]
fn fixture_heading_setext() { fixture_test("heading-setext"); }

#[test]
fn fixture_heading_atx() { fixture_test("heading-atx"); }

#[test]
fn fixture_blockquote() { fixture_test("blockquote"); }

#[test]
fn fixture_hr() { fixture_test("hr"); }

#[test]
fn fixture_hr_dashes() { fixture_test("hr-dashes"); }

#[test]
fn fixture_code_indented() { fixture_test("code-indented"); }

#[test]
fn fixture_code_fenced() { fixture_test("code-fenced"); }

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

#[test]
fn fixture_list() { fixture_test("list"); }

#[test]
fn fixture_list_dash() { fixture_test("list-dash"); }

#[test]
fn fixture_task_list() { fixture_test("task-list"); }

// ---------------------------------------------------------------------------
// Phrasing
// ---------------------------------------------------------------------------

#[test]
fn fixture_emphasis() { fixture_test("emphasis"); }

#[test]
fn fixture_emphasis_delimiters() { fixture_test("emphasis-delimiters"); }

#[test]
fn fixture_br() { fixture_test("br"); }

#[test]
fn fixture_escape() { fixture_test("escape"); }

#[test]
fn fixture_link_inlined() { fixture_test("link-inlined"); }

#[test]
fn fixture_link_referenced() { fixture_test("link-referenced"); }

#[test]
fn fixture_base() { fixture_test("base"); }

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

#[test]
fn fixture_table() { fixture_test("table"); }

#[test]
fn fixture_table_without_heading() { fixture_test("table-without-heading"); }
