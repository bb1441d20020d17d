//! Complex polynomial roots (Durand–Kerner / Weierstrass simultaneous iteration).
//!
//! Purpose
//! - Find all `n` complex roots of a degree-`n` polynomial at once, for the
//!   polynomial and complex-plane visualizers.
//! - Always return a best estimate: non-convergence within `max_iter` passes is
//!   reported (`RootReport::converged`) but never an error.
//!
//! Conventions
//! - Coefficients are highest degree first (`[1, 0, -1]` is `x² − 1`).
//! - Monic normalization divides by the full complex leading coefficient.
//! - Updates are simultaneous (Jacobi style): every correction in a pass is
//!   computed from the previous pass's candidates.
//!
//! Code cross-refs: `complex::Complex`, `types::{Polynomial, SolveCfg}`

mod solver;
mod types;

pub use solver::{solve, solve_with, RootReport};
pub use types::{Polynomial, SolveCfg};

#[cfg(test)]
mod tests;
