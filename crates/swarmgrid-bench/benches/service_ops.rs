//! Criterion benchmarks for request round trips through the grid server.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use swarmgrid_bench::{bench_registry, sample_coords, service_profile};
use swarmgrid_service::GridServer;

fn bench_round_trip(c: &mut Criterion) {
    let server = GridServer::spawn(service_profile(), bench_registry().unwrap()).unwrap();
    let client = server.client();
    let samples = sample_coords(1024, 70, 3);

    c.bench_function("server_get_1k", |b| {
        b.iter(|| {
            for p in &samples {
                black_box(client.get("visited", p.x, p.y).unwrap());
            }
        });
    });
    c.bench_function("server_set_1k", |b| {
        b.iter(|| {
            for p in &samples {
                black_box(client.set("mark_visited", p.x, p.y, 1).unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_round_trip);
criterion_main!(benches);
