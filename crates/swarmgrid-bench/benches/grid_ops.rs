//! Criterion micro-benchmarks for grid construction, growth and status access.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use swarmgrid_bench::{reference_profile, sample_coords, stress_profile};
use swarmgrid_core::{GridCoord, StatusField};
use swarmgrid_grid::Grid;
use swarmgrid_test_utils::fixtures::small_grid;

fn bench_construct(c: &mut Criterion) {
    c.bench_function("grid_new_150", |b| {
        b.iter(|| black_box(Grid::new(reference_profile()).unwrap()));
    });
    c.bench_function("grid_new_256", |b| {
        b.iter(|| black_box(Grid::new(stress_profile()).unwrap()));
    });
}

fn bench_growth(c: &mut Criterion) {
    c.bench_function("grow_4_to_corners", |b| {
        b.iter_batched(
            || small_grid(4, 1024),
            |mut grid| {
                grid.check_bounds(GridCoord::new(-60, -60));
                grid.check_bounds(GridCoord::new(60, 60));
                black_box(grid.size())
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_status(c: &mut Criterion) {
    let mut grid = Grid::new(reference_profile()).unwrap();
    let samples = sample_coords(4096, 70, 7);
    let field = StatusField::bit(0, 0);

    c.bench_function("get_field_4k", |b| {
        b.iter(|| {
            for &p in &samples {
                black_box(grid.get_field(p, field).unwrap());
            }
        });
    });
    c.bench_function("set_field_4k", |b| {
        b.iter(|| {
            for (i, &p) in samples.iter().enumerate() {
                black_box(grid.set_field(p, field, (i & 1) as u8).unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_construct, bench_growth, bench_status);
criterion_main!(benches);
