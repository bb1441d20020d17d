//! Curated API surface.
//!
//! One flat namespace for front ends (the `discreta` CLI, widget glue). The
//! names here are the ones callers are expected to depend on; module paths
//! behind them may change.

// Shared value types and errors
pub use crate::complex::{approx_eq, c64, from_point, to_point, Complex, Point2};
pub use crate::error::{Error, Result};
// Polynomial roots
pub use crate::roots::{solve, solve_with, Polynomial, RootReport, SolveCfg};
// Relations
pub use crate::relation::{
    analyze, equivalence_closure, reflexive_closure, symmetric_closure, transitive_closure,
    Element, RelationPairSet, RelationReport,
};
// Partial orders
pub use crate::order::{hasse_covers, layer, RankAssignment};
// Polygon set algebra
pub use crate::geom2::{
    apply, apply_with, point_in_ring, signed_area, BoolOp, ClipCfg, Polygon, PolygonSet,
};
// Random polygons
pub use crate::geom2::rand::{
    centroid as polygon_centroid, draw_polygon_radial, RadialCfg, ReplayToken as PolygonReplay,
    VertexCount,
};
