//! Criterion micro-benchmarks for row-list operations and compaction.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use vec2d_bench::{recorded_ops, replay, uniform_grid};

/// Compact a store fragmented by relocating every other row.
fn bench_compact_fragmented(c: &mut Criterion) {
    c.bench_function("vec2d_compact_fragmented_1k", |b| {
        b.iter_batched(
            || {
                let mut grid = uniform_grid(1_000, 16);
                for r in (0..1_000).step_by(2) {
                    grid.row_mut(r).unwrap().reserve(32);
                }
                grid
            },
            |mut grid| {
                grid.compact();
                grid
            },
            BatchSize::LargeInput,
        );
    });
}

/// Insert copies of a block of rows near the front.
fn bench_insert_rows_copy(c: &mut Criterion) {
    c.bench_function("vec2d_insert_rows_copy_100", |b| {
        b.iter_batched(
            || uniform_grid(1_000, 16),
            |mut grid| {
                grid.insert_rows_copy(1, 500..600).unwrap();
                grid
            },
            BatchSize::LargeInput,
        );
    });
}

/// Replay a mixed, recorded operation stream.
fn bench_mixed_stream(c: &mut Criterion) {
    let ops = recorded_ops(42, 2_000);
    c.bench_function("vec2d_mixed_stream_2k", |b| {
        b.iter(|| black_box(replay(&ops).element_count()));
    });
}

criterion_group!(
    benches,
    bench_compact_fragmented,
    bench_insert_rows_copy,
    bench_mixed_stream
);
criterion_main!(benches);
