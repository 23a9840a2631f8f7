//! Benchmarks for parsing, canonicalization, and the rule enumerators.
//!
//! These establish a baseline for the recursive operations: parse of a
//! deeply nested graph, the erasure enumerator sweep over a wide sheet, and
//! a deiteration on a graph with many duplicated atoms.

use alphagraph::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Builds `([[ ... [[x]] ... ]])` with `depth` nested double cuts.
fn deep_double_cuts(depth: usize) -> String {
    let mut text = String::from("x");
    for _ in 0..depth {
        text = format!("[[{}]]", text);
    }
    format!("({})", text)
}

/// Builds a sheet with `width` cuts of three atoms each plus `width` atoms.
fn wide_sheet(width: usize) -> String {
    let mut items = Vec::with_capacity(2 * width);
    for i in 0..width {
        items.push(format!("[a{}, b{}, c{}]", i, i, i));
        items.push(format!("a{}", i));
    }
    format!("({})", items.join(", "))
}

/// Measures parse + canonicalize on 64 nested double cuts.
fn bench_parse_deep(c: &mut Criterion) {
    let text = deep_double_cuts(64);
    c.bench_function("parse_deep_64_double_cuts", |b| {
        b.iter(|| Graph::parse(black_box(&text)).unwrap());
    });
}

/// Measures the erasure enumerator over a 128-cut sheet.
fn bench_possible_erasures_wide(c: &mut Criterion) {
    let g = Graph::parse(&wide_sheet(128)).unwrap();
    c.bench_function("possible_erasures_wide_128", |b| {
        b.iter(|| black_box(&g).possible_erasures(1));
    });
}

/// Measures the double-cut enumerator on the deep nest.
fn bench_possible_double_cuts_deep(c: &mut Criterion) {
    let g = Graph::parse(&deep_double_cuts(64)).unwrap();
    c.bench_function("possible_double_cuts_deep_64", |b| {
        b.iter(|| black_box(&g).possible_double_cuts());
    });
}

/// Measures deiteration of an atom duplicated across 64 cuts.
fn bench_deiterate_duplicates(c: &mut Criterion) {
    let mut items = vec![String::from("dup")];
    for i in 0..64 {
        items.push(format!("[dup, u{}]", i));
    }
    let g = Graph::parse(&format!("({})", items.join(", "))).unwrap();
    let sites = g.possible_deiterations();
    let site = sites[0].clone();
    c.bench_function("deiterate_64_duplicates", |b| {
        b.iter(|| black_box(&g).deiterate(black_box(&site)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_parse_deep,
    bench_possible_erasures_wide,
    bench_possible_double_cuts_deep,
    bench_deiterate_duplicates
);
criterion_main!(benches);
