//! Error types for discreta.
//!
//! Every fallible operation returns [`Result`]. Degenerate-but-meaningful input
//! (empty relations, disjoint polygons, non-converging root iterations) is not
//! an error; only inputs for which no defined answer exists are rejected.

use thiserror::Error;

/// Result type alias using discreta's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in discreta operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Leading coefficient is numerically zero, so the degree is ill-defined.
    #[error("leading coefficient {re}+{im}i is numerically zero; polynomial degree is ill-defined")]
    DegenerateLeadingCoefficient {
        /// Real part of the offending coefficient.
        re: f64,
        /// Imaginary part of the offending coefficient.
        im: f64,
    },

    /// A polynomial needs at least one coefficient.
    #[error("polynomial has no coefficients")]
    EmptyPolynomial,

    /// A coefficient is NaN or infinite.
    #[error("coefficient at index {index} is not finite")]
    NonFiniteCoefficient {
        /// Position in the highest-degree-first coefficient list.
        index: usize,
    },

    /// The precedes relation contains a cycle, so no rank assignment exists.
    #[error("relation is not acyclic; elements left on a cycle: {remaining:?}")]
    CycleDetected {
        /// Elements the topological sweep could not consume.
        remaining: Vec<String>,
    },

    /// Malformed polygon input (fewer than 3 vertices, non-finite coordinates).
    #[error("invalid polygon: {reason}")]
    InvalidPolygon {
        /// Human-readable description of the defect.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid_polygon(reason: impl Into<String>) -> Self {
        Error::InvalidPolygon {
            reason: reason.into(),
        }
    }
}
