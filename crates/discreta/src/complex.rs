//! Complex values and the plane points they are plotted as.
//!
//! `Complex` is nalgebra's re-export of `num_complex::Complex<f64>`; it already
//! provides add/sub/mul/div, `norm` (modulus), `norm_sqr` and `arg`. This module
//! only adds the conversions and tolerance predicates the solvers need.
//!
//! Code cross-refs: `roots::{Polynomial, solve}`, `geom2::Polygon`

use nalgebra::Vector2;

/// Complex number with `f64` parts.
pub type Complex = nalgebra::Complex<f64>;

/// Plane coordinate `{x, y}`; the same 2-vector shape used for polygon vertices.
pub type Point2 = Vector2<f64>;

/// Shorthand constructor.
#[inline]
pub fn c64(re: f64, im: f64) -> Complex {
    Complex::new(re, im)
}

/// Plot position of `z` in the complex plane (`x = re`, `y = im`).
#[inline]
pub fn to_point(z: Complex) -> Point2 {
    Point2::new(z.re, z.im)
}

/// Inverse of [`to_point`].
#[inline]
pub fn from_point(p: Point2) -> Complex {
    Complex::new(p.x, p.y)
}

/// Both parts within `eps` of zero.
#[inline]
pub fn is_zero_eps(z: Complex, eps: f64) -> bool {
    z.re.abs() <= eps && z.im.abs() <= eps
}

/// Modulus of the difference is at most `eps`.
#[inline]
pub fn approx_eq(a: Complex, b: Complex, eps: f64) -> bool {
    (a - b).norm() <= eps
}

#[inline]
pub(crate) fn is_finite(z: Complex) -> bool {
    z.re.is_finite() && z.im.is_finite()
}
