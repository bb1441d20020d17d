//! Polynomial value type and solver tolerances.
//!
//! - `SolveCfg`: iteration budget and tolerances for the root solver.
//! - `Polynomial`: validated, highest-degree-first complex coefficient list.

use crate::complex::{is_finite, is_zero_eps, Complex};
use crate::error::{Error, Result};

/// Root solver configuration (iteration budget and tolerances).
#[derive(Clone, Copy, Debug)]
pub struct SolveCfg {
    /// Maximum number of simultaneous correction passes.
    pub max_iter: u32,
    /// Stop once the largest correction of a pass has modulus below this.
    pub tol: f64,
    /// Leading coefficients with both parts within this fraction of the
    /// largest coefficient modulus are treated as zero.
    pub zero_eps: f64,
    /// Real-axis shift applied to every starting point.
    pub start_shift: f64,
    /// Rotation (radians) of the starting roots of unity; breaks the
    /// conjugate symmetry of real-coefficient inputs.
    pub start_phase: f64,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            max_iter: 200,
            tol: 1e-8,
            zero_eps: 1e-14,
            start_shift: 0.4,
            start_phase: 0.25,
        }
    }
}

/// Complex polynomial, coefficients highest degree first.
///
/// Invariants:
/// - At least one coefficient (degree = len − 1).
/// - Every coefficient is finite.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Complex>", into = "Vec<Complex>")
)]
pub struct Polynomial {
    coeffs: Vec<Complex>,
}

impl Polynomial {
    /// Validate and wrap a coefficient list.
    pub fn new(coeffs: Vec<Complex>) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(Error::EmptyPolynomial);
        }
        if let Some(index) = coeffs.iter().position(|c| !is_finite(*c)) {
            return Err(Error::NonFiniteCoefficient { index });
        }
        Ok(Self { coeffs })
    }

    /// Real coefficients, highest degree first.
    pub fn from_real(coeffs: &[f64]) -> Result<Self> {
        Self::new(coeffs.iter().map(|&c| Complex::new(c, 0.0)).collect())
    }

    /// Monic polynomial `∏ (x − r_k)`; the constant `1` for no roots.
    pub fn from_roots(roots: &[Complex]) -> Result<Self> {
        let mut coeffs = vec![Complex::new(1.0, 0.0)];
        for &r in roots {
            let prev = coeffs.clone();
            coeffs.push(Complex::new(0.0, 0.0));
            for k in 1..coeffs.len() {
                coeffs[k] -= r * prev[k - 1];
            }
        }
        Self::new(coeffs)
    }

    #[inline]
    pub fn coeffs(&self) -> &[Complex] {
        &self.coeffs
    }

    /// Nominal degree (`len − 1`), regardless of leading-coefficient size.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    #[inline]
    pub fn leading(&self) -> Complex {
        self.coeffs[0]
    }

    /// Horner evaluation at `z`.
    pub fn eval(&self, z: Complex) -> Complex {
        self.coeffs
            .iter()
            .fold(Complex::new(0.0, 0.0), |acc, &c| acc * z + c)
    }

    /// Divide every coefficient by the leading one (default zero tolerance).
    pub fn monic(&self) -> Result<Self> {
        self.monic_eps(SolveCfg::default().zero_eps)
    }

    /// Divide every coefficient by the leading one.
    ///
    /// Fails with `DegenerateLeadingCoefficient` when both parts of the leading
    /// coefficient are within `zero_eps` times the largest coefficient modulus
    /// of zero.
    pub fn monic_eps(&self, zero_eps: f64) -> Result<Self> {
        let lead = self.leading();
        let scale = self.coeffs.iter().map(|c| c.norm()).fold(0.0, f64::max);
        if is_zero_eps(lead, zero_eps * scale) {
            return Err(Error::DegenerateLeadingCoefficient {
                re: lead.re,
                im: lead.im,
            });
        }
        let coeffs: Vec<Complex> = self.coeffs.iter().map(|&c| c / lead).collect();
        Self::new(coeffs)
    }
}

impl TryFrom<Vec<Complex>> for Polynomial {
    type Error = Error;

    fn try_from(coeffs: Vec<Complex>) -> Result<Self> {
        Self::new(coeffs)
    }
}

impl From<Polynomial> for Vec<Complex> {
    fn from(p: Polynomial) -> Self {
        p.coeffs
    }
}
