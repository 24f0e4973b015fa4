//! Benchmark the bulk cloud evaluation path

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tinsel_engine::cloud::{build_cloud, evaluate_point, evaluate_positions};

fn bench_cloud_eval(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let data = build_cloud(8000, &mut rng);

    c.bench_function("evaluate_point", |b| {
        let point = &data.points[0];
        b.iter(|| evaluate_point(&data.noise, black_box(point), black_box(0.5), black_box(1.0)))
    });

    c.bench_function("evaluate_positions_8k", |b| {
        let mut out = Vec::new();
        b.iter(|| {
            evaluate_positions(&data, black_box(0.5), black_box(1.0), &mut out);
            black_box(out.len())
        })
    });
}

criterion_group!(benches, bench_cloud_eval);
criterion_main!(benches);
