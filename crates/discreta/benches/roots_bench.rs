//! Criterion benchmarks for the Durand–Kerner root solver.
//! Focus degrees: n in {2, 5, 10, 20, 40}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p discreta

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use discreta::complex::c64;
use discreta::roots::{solve_with, Polynomial, SolveCfg};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_polynomial(n: usize, seed: u64) -> Polynomial {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut coeffs = vec![c64(1.0, 0.0)];
    for _ in 0..n {
        coeffs.push(c64(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)));
    }
    Polynomial::new(coeffs).expect("finite coefficients")
}

fn bench_roots(c: &mut Criterion) {
    let mut group = c.benchmark_group("roots");
    for &n in &[2usize, 5, 10, 20, 40] {
        group.bench_with_input(BenchmarkId::new("solve_with", n), &n, |b, &n| {
            b.iter_batched(
                || random_polynomial(n, 41),
                |p| {
                    let _report = solve_with(&p, SolveCfg::default()).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_roots);
criterion_main!(benches);
