//! Random simple polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for simple polygons used by the
//!   clipping property tests and benches. The generator is parameterizable,
//!   reproducible, and returns a validated `Polygon`.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and keep the angular order. The result is star-shaped with
//!   respect to `center`, hence simple, and counter-clockwise.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::complex::Point2;

use super::types::Polygon;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with
    /// `u∈[-radial_jitter, radial_jitter]`. Values near 1 give spiky, non-convex shapes.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
    /// Star center; every vertex is visible from it.
    pub center: Point2,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
            center: Point2::zeros(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random star-shaped polygon around `cfg.center`.
///
/// `None` only for non-finite configuration values.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let vertices: Vec<Point2> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            cfg.center + Point2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    Polygon::new(vertices).ok()
}

/// Area centroid of a polygon (either orientation). `None` for zero area.
pub fn centroid(poly: &Polygon) -> Option<Point2> {
    let verts = poly.vertices();
    let mut a: f64 = 0.0;
    let mut cx: f64 = 0.0;
    let mut cy: f64 = 0.0;
    for i in 0..verts.len() {
        let p = verts[i];
        let q = verts[(i + 1) % verts.len()];
        let cross = p.x * q.y - q.x * p.y;
        a += cross;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    a *= 0.5;
    if a.abs() < 1e-18 {
        return None;
    }
    Some(Point2::new(cx / (6.0 * a), cy / (6.0 * a)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(10),
            angle_jitter_frac: 0.2,
            radial_jitter: 0.1,
            ..RadialCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_polygon_radial(cfg, tok).expect("poly");
        let p2 = draw_polygon_radial(cfg, tok).expect("poly");
        assert_eq!(p1, p2);
        assert_eq!(p1.len(), 10);
        let p3 = draw_polygon_radial(cfg, ReplayToken { seed: 42, index: 8 }).expect("poly");
        assert_ne!(p1, p3);
    }

    #[test]
    fn star_polygons_are_ccw_and_contain_center() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 5, max: 20 },
            radial_jitter: 0.6,
            center: Point2::new(3.0, -2.0),
            ..RadialCfg::default()
        };
        for index in 0..20 {
            let p = draw_polygon_radial(cfg, ReplayToken { seed: 1, index }).unwrap();
            assert!(p.is_ccw());
            assert!(p.contains(cfg.center));
        }
    }

    #[test]
    fn centroid_of_square() {
        let sq = Polygon::from_xy(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]).unwrap();
        let c = centroid(&sq).unwrap();
        assert!((c - Point2::new(2.0, 2.0)).norm() < 1e-12);
        assert!(centroid(&sq.reversed()).is_some());
    }
}
