//! Criterion benchmarks for polygon boolean operations.
//! Focus sizes: vertices per operand in {4, 16, 64, 128}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use discreta::complex::Point2;
use discreta::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use discreta::geom2::{apply, BoolOp, Polygon};

fn operands(n: usize, seed: u64) -> (Polygon, Polygon) {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        radial_jitter: 0.4,
        ..RadialCfg::default()
    };
    let a = draw_polygon_radial(cfg, ReplayToken { seed, index: 0 }).expect("star polygon");
    let shifted = RadialCfg {
        center: Point2::new(0.5, 0.2),
        ..cfg
    };
    let b = draw_polygon_radial(shifted, ReplayToken { seed, index: 1 }).expect("star polygon");
    (a, b)
}

fn bench_clip(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip");
    for &n in &[4usize, 16, 64, 128] {
        for op in [BoolOp::Union, BoolOp::Intersection, BoolOp::SymmetricDifference] {
            group.bench_with_input(BenchmarkId::new(op.to_string(), n), &n, |b, &n| {
                b.iter_batched(
                    || operands(n, 43),
                    |(pa, pb)| {
                        let _set = apply(&pa, &pb, op);
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_clip);
criterion_main!(benches);
