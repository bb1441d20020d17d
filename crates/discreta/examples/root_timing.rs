//! Root solver timing probe across degrees.
//!
//! Prints, per degree, the wall time, pass count and final correction of
//! `solve_with` on a seeded random monic polynomial, and the worst residual
//! |p(z)| over the returned roots.

use std::time::Instant;

use discreta::complex::c64;
use discreta::roots::{solve_with, Polynomial, SolveCfg};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in [3usize, 8, 16, 32, 64] {
        let mut coeffs = vec![c64(1.0, 0.0)];
        coeffs.extend((0..n).map(|_| c64(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))));
        let poly = Polynomial::new(coeffs).expect("finite coefficients");
        let cfg = SolveCfg {
            max_iter: 1000,
            ..SolveCfg::default()
        };
        let start = Instant::now();
        let report = solve_with(&poly, cfg).expect("monic polynomial");
        let ms = start.elapsed().as_secs_f64() * 1e3;
        let worst = report
            .roots
            .iter()
            .map(|z| poly.eval(*z).norm())
            .fold(0.0_f64, f64::max);
        println!(
            "degree {n:>3}: {ms:>8.3} ms, passes={:>4}, converged={}, correction={:.2e}, max|p(z)|={worst:.2e}",
            report.iterations, report.converged, report.max_correction
        );
    }
}
