//! Measures one write pass and one read pass of each grid representation with the
//! statistical harness, complementing the fixed-repetition runs of the binary.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::time::Instant;

use criterion::{Criterion, criterion_group, criterion_main};
use grid_layout_bench::{
    DenseGrid, FlatManualGrid, FlatViewGrid, Grid, GridKind, NestedGrid, RandomCells,
    WriteOrder, read_pass, write_pass,
};

const WIDTH: usize = 500;
const HEIGHT: usize = 500;
const FILL_PROBABILITY: f64 = 0.5;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    bench_kind(c, GridKind::Nested, NestedGrid::new(WIDTH, HEIGHT));
    bench_kind(c, GridKind::FlatView, FlatViewGrid::new(WIDTH, HEIGHT));
    bench_kind(c, GridKind::FlatManual, FlatManualGrid::new(WIDTH, HEIGHT));
    bench_kind(c, GridKind::Dense, DenseGrid::new(WIDTH, HEIGHT));
}

fn bench_kind<G: Grid>(c: &mut Criterion, kind: GridKind, mut grid: G) {
    let mut group = c.benchmark_group(kind.name());
    let mut source = RandomCells::seeded(0, FILL_PROBABILITY);

    group.bench_function("write", |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                write_pass(&mut grid, WriteOrder::RowMajor, &mut source);
            }

            start.elapsed()
        });
    });

    group.bench_function("read", |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                black_box(read_pass(black_box(&grid)));
            }

            start.elapsed()
        });
    });

    group.finish();
}
