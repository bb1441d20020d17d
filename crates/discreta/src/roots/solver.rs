//! Durand–Kerner iteration with early stop on small corrections.

use std::f64::consts::TAU;

use crate::complex::Complex;
use crate::error::Result;

use super::types::{Polynomial, SolveCfg};

/// Roots plus convergence diagnostics.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RootReport {
    /// One candidate per degree, in no guaranteed order. Multiple roots show up
    /// as nearly coincident candidates.
    pub roots: Vec<Complex>,
    /// Passes actually performed.
    pub iterations: u32,
    /// Whether the last pass's largest correction fell below `tol`.
    pub converged: bool,
    /// Largest correction modulus of the last pass (`inf` if no pass ran).
    pub max_correction: f64,
}

/// Find all roots of `poly` with the given iteration budget and tolerance.
///
/// Degree 0 yields no roots. Fails only on a numerically zero leading
/// coefficient.
pub fn solve(poly: &Polynomial, max_iter: u32, tol: f64) -> Result<Vec<Complex>> {
    let cfg = SolveCfg {
        max_iter,
        tol,
        ..SolveCfg::default()
    };
    Ok(solve_with(poly, cfg)?.roots)
}

/// Find all roots of `poly` and report how the iteration ended.
pub fn solve_with(poly: &Polynomial, cfg: SolveCfg) -> Result<RootReport> {
    let n = poly.degree();
    if n == 0 {
        return Ok(RootReport {
            roots: Vec::new(),
            iterations: 0,
            converged: true,
            max_correction: 0.0,
        });
    }
    let monic = poly.monic_eps(cfg.zero_eps)?;

    let mut z = initial_guesses(n, cfg.start_shift, cfg.start_phase);
    let mut next = z.clone();
    let mut iterations = 0u32;
    let mut max_correction = f64::INFINITY;
    let mut converged = false;

    while iterations < cfg.max_iter {
        iterations += 1;
        let pass = correction_pass(&monic, &z, &mut next);
        if pass.stalled {
            tracing::debug!(iteration = iterations, "pass left candidates without a correction");
        }
        std::mem::swap(&mut z, &mut next);
        max_correction = pass.max_correction;
        if !pass.stalled && pass.max_correction < cfg.tol {
            converged = true;
            break;
        }
    }

    if !converged {
        tracing::debug!(
            degree = n,
            iterations,
            max_correction,
            "root iteration stopped before reaching tolerance"
        );
    }
    Ok(RootReport {
        roots: z,
        iterations,
        converged,
        max_correction,
    })
}

/// Outcome of one simultaneous correction pass.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Pass {
    max_correction: f64,
    /// Some candidate got no correction (coincident with another candidate,
    /// or a non-finite step); such a pass never counts as converged.
    stalled: bool,
}

/// Jacobi update: every `next[i]` is computed from the unchanged `z`.
fn correction_pass(monic: &Polynomial, z: &[Complex], next: &mut [Complex]) -> Pass {
    let mut pass = Pass {
        max_correction: 0.0,
        stalled: false,
    };
    for (i, &zi) in z.iter().enumerate() {
        next[i] = zi;
        let den = z
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(Complex::new(1.0, 0.0), |acc, (_, &zj)| acc * (zi - zj));
        if den.norm_sqr() == 0.0 {
            pass.stalled = true;
            continue;
        }
        let step = monic.eval(zi) / den;
        if !(step.re.is_finite() && step.im.is_finite()) {
            pass.stalled = true;
            continue;
        }
        next[i] = zi - step;
        pass.max_correction = pass.max_correction.max(step.norm());
    }
    pass
}

/// n-th roots of unity, rotated by `phase` and shifted by `shift` on the real axis.
fn initial_guesses(n: usize, shift: f64, phase: f64) -> Vec<Complex> {
    (0..n)
        .map(|k| {
            let theta = phase + TAU * (k as f64) / (n as f64);
            Complex::new(theta.cos() + shift, theta.sin())
        })
        .collect()
}
