//! Search and counting benchmarks
//!
//! Compares the lazy and rayon-parallel typo search, and the sequential and
//! parallel composite counts.
//!
//! ## 実行方法
//!
//! ```powershell
//! cargo bench --bench search_bench
//! ```

use std::time::Duration;

use aoc_scratch::app::composite_count::count_composites_sequential;
use aoc_scratch::constants::{
    MARKER_CHAR, STRIDE_END, STRIDE_START, STRIDE_STEP, TYPO_TARGET, TYPO_TEMPLATE,
};
use aoc_scratch::{StrideRange, count_composites, count_lines, search, search_parallel};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(5))
}

fn bench_typo_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("typo_search");

    group.bench_function("lazy", |b| {
        b.iter(|| search(black_box(TYPO_TEMPLATE), TYPO_TARGET).count())
    });

    group.bench_function("parallel", |b| {
        b.iter(|| search_parallel(black_box(TYPO_TEMPLATE), TYPO_TARGET))
    });

    group.finish();
}

fn bench_composites(c: &mut Criterion) {
    let mut group = c.benchmark_group("composites");
    let range = StrideRange::new(STRIDE_START, STRIDE_END, STRIDE_STEP).unwrap();

    group.bench_function("sequential", |b| {
        b.iter(|| count_composites_sequential(black_box(&range)))
    });

    group.bench_function("parallel", |b| {
        b.iter(|| count_composites(black_box(&range)))
    });

    group.finish();
}

fn bench_char_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("char_count");
    let row = "#.#####################.#####".repeat(5);
    let lines: Vec<String> = (0..141).map(|_| row.clone()).collect();

    group.bench_function("grid_141_rows", |b| {
        b.iter(|| count_lines(black_box(&lines), MARKER_CHAR))
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets = bench_typo_search, bench_composites, bench_char_count
}
criterion_main!(benches);
