//! Discrete structures and numerical algebra for visualization widgets.
//!
//! Components (each a family of pure functions, no shared state):
//! - `roots`: all complex roots of a polynomial (Durand–Kerner).
//! - `relation`: property flags and equivalence classes of a binary relation.
//! - `order`: longest-path ranks for Hasse-style layouts of a partial order.
//! - `geom2`: boolean operations on polygons.
//!
//! Inputs are validated once at the boundary (`Polynomial::new`,
//! `Polygon::new`); degenerate-but-valid input degrades to a best-effort
//! answer instead of an error.
//!
//! API Policy
//! - `discreta::api` and the crate-root re-exports are the supported surface.
//!   Module internals may move between releases.

pub mod api;
pub mod complex;
pub mod error;
pub mod geom2;
pub mod order;
pub mod relation;
pub mod roots;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use complex::{Complex, Point2};
pub use error::{Error, Result};
pub use geom2::{apply, BoolOp, ClipCfg, Polygon, PolygonSet};
pub use order::{hasse_covers, layer, RankAssignment};
pub use relation::{analyze, RelationPairSet, RelationReport};
pub use roots::{solve, solve_with, Polynomial, RootReport, SolveCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::complex::{c64, Complex, Point2};
    pub use crate::error::{Error, Result};
    pub use crate::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{apply, apply_with, BoolOp, ClipCfg, Polygon, PolygonSet};
    pub use crate::order::{hasse_covers, layer, RankAssignment};
    pub use crate::relation::{analyze, Element, RelationPairSet, RelationReport};
    pub use crate::roots::{solve, solve_with, Polynomial, RootReport, SolveCfg};
}
