// Benchmarks for HTML to Markdown conversion.

use criterion::{criterion_group, criterion_main, Criterion};
use markdownify::{convert, convert_with, CodeBlockStyle, LinkStyle, Options};

fn bench_simple(c: &mut Criterion) {
    let html = "<h1>Hello</h1><p>This is a <strong>simple</strong> document.</p>";
    c.bench_function("simple_document", |b| {
        b.iter(|| convert(html));
    });
}

fn bench_article(c: &mut Criterion) {
    let section = "<h2>Section</h2>\
        <p>Some <em>emphasis</em>, a <a href=\"https://example.com\">link</a> and <code>code</code>.</p>\
        <ul><li>One</li><li>Two<ul><li>Nested</li></ul></li></ul>\
        <pre><code class=\"language-rust\">fn main() {}\n</code></pre>\
        <table><thead><tr><th>A</th><th>B</th></tr></thead><tbody><tr><td>1</td><td>2</td></tr></tbody></table>";
    let html = section.repeat(50);
    let options = Options::new()
        .with_code_block_style(CodeBlockStyle::Fenced)
        .with_link_style(LinkStyle::Referenced);
    c.bench_function("article_document", |b| {
        b.iter(|| convert_with(&html, &options));
    });
}

criterion_group!(benches, bench_simple, bench_article);
criterion_main!(benches);
