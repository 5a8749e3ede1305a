//! Benchmarks for the extraction pipeline.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use colorsift::{ColorToken, FormatOptions, MatchPolicy, Stylesheet, ToCss, extract, format_css};

const THEME_CSS: &str = include_str!("../tests/fixtures/theme.css");

/// The fixture repeated enough times to resemble a real site stylesheet.
fn large_stylesheet() -> String {
    (0..200)
        .map(|i| THEME_CSS.replace(".button", &format!(".button-{i}")))
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let css = large_stylesheet();
    c.bench_function("parse_stylesheet", |b| {
        b.iter(|| Stylesheet::parse(black_box(&css)));
    });
}

fn bench_extract(c: &mut Criterion) {
    let sheet = Stylesheet::parse(&large_stylesheet());
    let color = ColorToken::parse("cc0000").unwrap();

    c.bench_function("extract_exact", |b| {
        b.iter(|| extract(black_box(&sheet), &color, MatchPolicy::Exact));
    });
    c.bench_function("extract_substring", |b| {
        b.iter(|| extract(black_box(&sheet), &color, MatchPolicy::Substring));
    });
}

fn bench_format(c: &mut Criterion) {
    let sheet = Stylesheet::parse(&large_stylesheet());
    let color = ColorToken::parse("cc0000").unwrap();
    let raw = extract(&sheet, &color, MatchPolicy::Exact).to_css_string();
    let options = FormatOptions::default();

    c.bench_function("format_css", |b| {
        b.iter(|| format_css(black_box(&raw), &options));
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_extract,
    bench_format,
);

criterion_main!(benches);
