//! Performance benchmarks for the normalization pipeline.
//!
//! These benchmarks measure:
//! - Single-line processing for each input shape
//! - Whole-document normalization at different sizes

use contact_normalizer::{normalize_str, Config, Normalizer};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const LINES: [&str; 4] = [
    "Ria Tillotson, aqua marine, 97671, 196 910 5548",
    "Tillotson, Ria, aqua marine, (196)9105548, 97671",
    "Chandler, Kerri, (623)-668-9293, pink, 123123121",
    "asdfawefawea,awefawfawfwef,awefawefawfaw,afwefawfawfaw",
];

/// Build a document of `count` lines cycling through the sample shapes.
fn document(count: usize) -> String {
    LINES.iter().cycle().take(count).fold(String::new(), |mut doc, line| {
        doc.push_str(line);
        doc.push('\n');
        doc
    })
}

/// Benchmark one line through every stage.
fn bench_process_line(c: &mut Criterion) {
    let normalizer = Normalizer::default();
    let mut group = c.benchmark_group("process_line");

    for (index, line) in LINES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::from_parameter(index), line, |b, line| {
            b.iter(|| normalizer.process_line(1, black_box(line)));
        });
    }

    group.finish();
}

/// Benchmark whole documents including aggregation and sorting.
fn bench_normalize_document(c: &mut Criterion) {
    let config = Config::default();
    let mut group = c.benchmark_group("normalize_document");

    for size in [100, 1_000, 10_000] {
        let input = document(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| normalize_str(black_box(input), &config));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_process_line, bench_normalize_document);
criterion_main!(benches);
