// Copyright 2026 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `declutter_lanes`.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use declutter_lanes::{assign_lanes, clusters};
use declutter_separate::Span;

/// Overlap depth cycles between one and `depth`, so lanes keep freeing up
/// and refilling as the sweep moves along the row.
fn banded_row(len: usize, depth: usize) -> Vec<Span<f64>> {
    (0..len)
        .map(|index| {
            let band = (index / depth) as f64 * 40.0;
            Span::new(band + (index % depth) as f64, 20.0)
        })
        .collect()
}

fn bench_lanes(c: &mut Criterion) {
    let mut group = c.benchmark_group("lanes");
    for len in [64_usize, 1_024, 16_384] {
        let shallow = banded_row(len, 2);
        let deep = banded_row(len, 16);

        group.bench_with_input(BenchmarkId::new("assign/depth2", len), &shallow, |b, row| {
            b.iter(|| assign_lanes(black_box(row)));
        });

        group.bench_with_input(BenchmarkId::new("assign/depth16", len), &deep, |b, row| {
            b.iter(|| assign_lanes(black_box(row)));
        });

        group.bench_with_input(BenchmarkId::new("clusters", len), &deep, |b, row| {
            b.iter(|| clusters(black_box(row)).count());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lanes);
criterion_main!(benches);
