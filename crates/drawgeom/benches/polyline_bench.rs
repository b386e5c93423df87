//! Criterion benchmarks for arc-length polylines.
//! Random walks with {10, 100, 1k, 10k} segments: build, find, location, extract.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use drawgeom::polyline::PolyLine2;
use drawgeom::sample::{draw_random_walk, ReplayToken, WalkCfg};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn walk(segments: usize) -> PolyLine2 {
    let cfg = WalkCfg {
        segments,
        ..WalkCfg::default()
    };
    draw_random_walk(cfg, ReplayToken { seed: 5, index: segments as u64 }).unwrap()
}

fn bench_polyline(c: &mut Criterion) {
    let mut group = c.benchmark_group("polyline");
    for &n in &[10usize, 100, 1_000, 10_000] {
        let line = walk(n);
        let len = line.length();

        group.bench_with_input(BenchmarkId::new("build", n), &line, |b, line| {
            b.iter_batched(
                || line.points().to_vec(),
                |pts| {
                    let _l = PolyLine2::new(pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("location", n), &line, |b, line| {
            let mut rng = StdRng::seed_from_u64(11);
            b.iter(|| {
                let s = rng.gen::<f64>() * len;
                let _r = line.location(s).unwrap();
            })
        });

        group.bench_with_input(BenchmarkId::new("find", n), &line, |b, line| {
            let mut rng = StdRng::seed_from_u64(12);
            b.iter(|| {
                let s = rng.gen::<f64>() * len;
                let _i = line.find(s).unwrap();
            })
        });

        group.bench_with_input(BenchmarkId::new("extract_middle_half", n), &line, |b, line| {
            b.iter(|| {
                let _sub = line.extract(0.25 * len, 0.75 * len).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polyline);
criterion_main!(benches);
