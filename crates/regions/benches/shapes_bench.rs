//! Criterion benchmarks for region queries on the drag path.
//! Focus sizes: polygon vertex counts n in {8, 64, 512}.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use regions::prelude::*;

fn query_points(count: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Coordinate::new(rng.gen(), rng.gen()))
        .collect()
}

fn bench_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("free_polygon");
    let pts = query_points(256, 43);
    for &n in &[8usize, 64, 512] {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(n),
            ..RadialCfg::default()
        };
        let poly = draw_polygon_radial(cfg, ReplayToken::new(7, n as u64));

        group.bench_with_input(BenchmarkId::new("contains_warm", n), &n, |b, _| {
            b.iter(|| pts.iter().filter(|p| poly.contains(**p)).count())
        });

        // Every iteration replaces the ring, so the cache is rebuilt once per batch.
        group.bench_with_input(BenchmarkId::new("replace_then_query", n), &n, |b, _| {
            b.iter_batched(
                || (poly.clone(), poly.vertices()),
                |(mut p, vs)| {
                    p.set_vertices(vs);
                    (p.area(), p.contains(Coordinate::new(0.5, 0.5)))
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_ellipse(c: &mut Criterion) {
    let mut group = c.benchmark_group("ellipse");
    for &r in &[0.01f64, 0.1, 0.5] {
        let e = Ellipse::circle(Coordinate::new(0.5, 0.5), r);
        group.bench_with_input(BenchmarkId::new("tessellate", r), &r, |b, _| {
            b.iter(|| e.vertices())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polygon, bench_ellipse);
criterion_main!(benches);
