// Markdown escaping for text content.
//
// Characters that open inline syntax are escaped everywhere. Characters that
// only mean something at the start of a line (list markers, headings,
// blockquotes, setext underlines, fences) are escaped only when the text
// starts a block.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Line-start patterns and their escaped replacement.
static LINE_START: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"^-", r"\-"),
        (r"^\+ ", r"\+ "),
        (r"^(=+)", r"\${1}"),
        (r"^(#{1,6}) ", r"\${1} "),
        (r"^~~~", r"\~~~"),
        (r"^>", r"\>"),
        (r"^(\d+)\. ", r"${1}\. "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// Escape inline syntax characters: `\`, `*`, `` ` ``, `[`, `]`, `_`, and
/// `|` inside table cells.
pub(crate) fn escape_phrasing(text: &str, in_table_cell: bool) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        let special = matches!(c, '\\' | '*' | '`' | '[' | ']' | '_') || (in_table_cell && c == '|');
        if special {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

/// Escape a character sequence that would start block syntax.
pub(crate) fn escape_at_break_start(text: String) -> String {
    for (pattern, replacement) in LINE_START.iter() {
        if let Cow::Owned(escaped) = pattern.replace(&text, *replacement) {
            return escaped;
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_phrasing() {
        assert_eq!(escape_phrasing("a*b_c", false), r"a\*b\_c");
        assert_eq!(escape_phrasing(r"[x] \ `y`", false), r"\[x\] \\ \`y\`");
        assert_eq!(escape_phrasing("plain text.", false), "plain text.");
    }

    #[test]
    fn test_pipe_only_escaped_in_cells() {
        assert_eq!(escape_phrasing("a|b", false), "a|b");
        assert_eq!(escape_phrasing("a|b", true), r"a\|b");
    }

    #[test]
    fn test_escape_at_break_start() {
        let cases = [
            ("- item", r"\- item"),
            ("+ item", r"\+ item"),
            ("+1", "+1"),
            ("=== rule", r"\=== rule"),
            ("## Title", r"\## Title"),
            ("#hashtag", "#hashtag"),
            ("~~~ fence", r"\~~~ fence"),
            ("> quote", r"\> quote"),
            ("1984. A year", r"1984\. A year"),
            ("1984 was a year", "1984 was a year"),
            ("a - b", "a - b"),
        ];
        for (input, expected) in cases {
            assert_eq!(escape_at_break_start(input.to_string()), expected, "input: {input}");
        }
    }
}
