// Copyright 2026 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `declutter_separate`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use declutter_separate::{Span, separate};

/// Every span collides with its neighbors: the worst case, one giant run.
fn dense_row(len: usize) -> Vec<Span<f64>> {
    (0..len)
        .map(|index| Span::new(index as f64 * 2.0, 10.0))
        .collect()
}

/// Roughly half the spans collide in pairs; runs stay short.
fn paired_row(len: usize) -> Vec<Span<f64>> {
    (0..len)
        .map(|index| {
            let base = (index / 2) as f64 * 30.0;
            Span::new(base + (index % 2) as f64 * 4.0, 10.0)
        })
        .collect()
}

/// No span collides with any other: the sweep degenerates to a scan.
fn sparse_row(len: usize) -> Vec<Span<f64>> {
    (0..len)
        .map(|index| Span::new(index as f64 * 15.0, 10.0))
        .collect()
}

fn bench_separate(c: &mut Criterion) {
    let mut group = c.benchmark_group("separate");
    for len in [64_usize, 1_024, 16_384] {
        let bounds = 0.0..len as f64 * 20.0;

        group.bench_with_input(BenchmarkId::new("dense", len), &len, |b, &len| {
            b.iter_batched(
                || dense_row(len),
                |mut row| {
                    separate(black_box(&mut row), bounds.clone());
                    row
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("paired", len), &len, |b, &len| {
            b.iter_batched(
                || paired_row(len),
                |mut row| {
                    separate(black_box(&mut row), bounds.clone());
                    row
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("sparse", len), &len, |b, &len| {
            b.iter_batched(
                || sparse_row(len),
                |mut row| {
                    separate(black_box(&mut row), bounds.clone());
                    row
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_separate);
criterion_main!(benches);
