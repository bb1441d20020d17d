//! Basic 2D types and tolerances used by the polygon set algebra.
//!
//! - `ClipCfg`: the coincidence tolerance for points and segments.
//! - `Polygon`: validated, implicitly closed vertex ring.
//! - `BoolOp`: the four region combinations.
//! - `PolygonSet`: zero or more result rings (holes are clockwise).
//!
//! Code cross-refs: `clip::{apply, apply_with}`, `util::{signed_area, point_in_ring}`

use std::fmt;
use std::str::FromStr;

use crate::complex::Point2;
use crate::error::{Error, Result};

use super::util::{point_in_ring, signed_area};

/// Clipping configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct ClipCfg {
    /// Points closer than this (plane units) are the same point; rings whose
    /// mean width (`2·area / perimeter`) is at most this are dropped.
    pub eps: f64,
}

impl Default for ClipCfg {
    fn default() -> Self {
        Self { eps: 1e-9 }
    }
}

/// Closed polygon: at least 3 finite vertices, last connects back to first.
///
/// Orientation is free on input; `clip` normalizes it. A vertex list that
/// repeats its first vertex at the end has the repetition dropped.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Point2>", into = "Vec<Point2>"))]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    pub fn new(mut vertices: Vec<Point2>) -> Result<Self> {
        if let Some(k) = vertices
            .iter()
            .position(|v| !(v.x.is_finite() && v.y.is_finite()))
        {
            return Err(Error::invalid_polygon(format!(
                "vertex {k} has a non-finite coordinate"
            )));
        }
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        if vertices.len() < 3 {
            return Err(Error::invalid_polygon(format!(
                "need at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        Ok(Self { vertices })
    }

    /// Convenience constructor from `(x, y)` tuples.
    pub fn from_xy(points: &[(f64, f64)]) -> Result<Self> {
        Self::new(points.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Never true for a validated polygon.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Shoelace area; positive for counter-clockwise rings.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Even-odd membership (ray casting).
    #[inline]
    pub fn contains(&self, p: Point2) -> bool {
        point_in_ring(p, &self.vertices)
    }

    /// Same ring, opposite orientation.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// Wrap an already cleaned ring produced by the clipper.
    pub(crate) fn from_ring(vertices: Vec<Point2>) -> Option<Self> {
        (vertices.len() >= 3).then_some(Self { vertices })
    }
}

impl TryFrom<Vec<Point2>> for Polygon {
    type Error = Error;

    fn try_from(vertices: Vec<Point2>) -> Result<Self> {
        Self::new(vertices)
    }
}

impl From<Polygon> for Vec<Point2> {
    fn from(p: Polygon) -> Self {
        p.vertices
    }
}

/// Boolean combination of two regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoolOp {
    Union,
    Intersection,
    /// In the first region but not the second.
    Difference,
    /// In exactly one of the two regions.
    SymmetricDifference,
}

impl FromStr for BoolOp {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "union" | "or" => Ok(BoolOp::Union),
            "intersection" | "and" => Ok(BoolOp::Intersection),
            "difference" | "minus" => Ok(BoolOp::Difference),
            "symmetric_difference" | "symmetric-difference" | "xor" => {
                Ok(BoolOp::SymmetricDifference)
            }
            other => Err(format!("unknown boolean operation '{other}'")),
        }
    }
}

impl fmt::Display for BoolOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BoolOp::Union => "union",
            BoolOp::Intersection => "intersection",
            BoolOp::Difference => "difference",
            BoolOp::SymmetricDifference => "symmetric_difference",
        };
        f.write_str(s)
    }
}

/// Result of a boolean operation.
///
/// Counter-clockwise rings bound filled area, clockwise rings bound holes, so
/// the region's area is the sum of signed ring areas.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PolygonSet {
    polygons: Vec<Polygon>,
}

impl PolygonSet {
    pub(crate) fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Enclosed area (filled rings minus holes).
    pub fn area(&self) -> f64 {
        self.polygons.iter().map(Polygon::signed_area).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    pub fn into_vec(self) -> Vec<Polygon> {
        self.polygons
    }
}

impl IntoIterator for PolygonSet {
    type Item = Polygon;
    type IntoIter = std::vec::IntoIter<Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.into_iter()
    }
}

impl<'a> IntoIterator for &'a PolygonSet {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}
