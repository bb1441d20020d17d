//! Planar polygon set algebra.
//!
//! Purpose
//! - Union, intersection, difference and symmetric difference of the regions
//!   bounded by two simple polygons, each result a `PolygonSet` of rings.
//! - Geometry is `f64` throughout with one explicit tolerance (`ClipCfg::eps`).
//!
//! Conventions
//! - Inputs may be given in either orientation and may be non-convex.
//!   Self-intersecting inputs are read under the even-odd rule.
//! - Outputs: filled rings counter-clockwise, holes clockwise. The region's
//!   area is the sum of signed ring areas (`PolygonSet::area`).
//! - Rings no wider than `eps` on average (`2·area / perimeter`) are dropped,
//!   so a result may be the empty set.
//!
//! Code cross-refs: `apply`, `apply_with`, `Polygon`, `PolygonSet`, `BoolOp`, `ClipCfg`

mod clip;
pub mod rand;
mod types;
mod util;

pub use clip::{apply, apply_with};
pub use types::{BoolOp, ClipCfg, Polygon, PolygonSet};
pub use util::{point_in_ring, signed_area};
