//! Boolean operations on polygon regions by edge splitting and classification.
//!
//! Pipeline
//! 1. Normalize each input into a `Region`: cleaned rings with the region on
//!    the left (outer rings counter-clockwise, holes clockwise). Non-simple
//!    inputs are resolved under the even-odd rule before any collapse check,
//!    since their net signed area can be zero.
//! 2. Split every edge of each region at every point where it meets the other
//!    region's boundary (crossings, touches, collinear overlap endpoints).
//! 3. Classify each piece against the other region: inside, outside, or on
//!    the shared boundary with the same/opposite direction.
//! 4. Keep the pieces the operation needs and walk them into closed rings,
//!    taking the leftmost turn wherever several pieces leave one point.
//!
//! Tie-breaks
//! - A boundary touch is not a crossing: the pieces on both sides classify the
//!   same way, so the touch leaves no trace in the result.
//! - A shared boundary piece is emitted once (from the first operand).
//! - Walks that cannot be closed are dropped (logged at debug level).
//!
//! Code cross-refs: `types::{Polygon, PolygonSet, BoolOp, ClipCfg}`,
//! `util::{meet_points, clean_ring, tidy_ring, point_in_ring}`

use std::f64::consts::TAU;

use crate::complex::Point2;

use super::types::{BoolOp, ClipCfg, Polygon, PolygonSet};
use super::util::{
    clean_ring, cross2, dist_point_line, dist_point_segment, is_collapsed, meet_points, near,
    param_on, point_in_ring, signed_area, tidy_ring, Seg,
};

/// Combine the regions bounded by `a` and `b` (default tolerance).
pub fn apply(a: &Polygon, b: &Polygon, op: BoolOp) -> PolygonSet {
    apply_with(a, b, op, ClipCfg::default())
}

/// Combine the regions bounded by `a` and `b`.
///
/// Never fails: degenerate geometry resolves to possibly fewer (or zero) rings.
pub fn apply_with(a: &Polygon, b: &Polygon, op: BoolOp, cfg: ClipCfg) -> PolygonSet {
    let ra = Region::from_polygon(a, cfg.eps);
    let rb = Region::from_polygon(b, cfg.eps);
    let rings = match op {
        BoolOp::Union => combine(&ra, &rb, Merge::Union, cfg.eps),
        BoolOp::Intersection => combine(&ra, &rb, Merge::Intersection, cfg.eps),
        BoolOp::Difference => combine(&ra, &rb, Merge::Difference, cfg.eps),
        BoolOp::SymmetricDifference => {
            let mut rings = combine(&ra, &rb, Merge::Difference, cfg.eps);
            rings.extend(combine(&rb, &ra, Merge::Difference, cfg.eps));
            rings
        }
    };
    PolygonSet::new(rings.into_iter().filter_map(Polygon::from_ring).collect())
}

/// Consistently oriented rings; the region lies to the left of every edge.
#[derive(Clone, Debug, Default)]
struct Region {
    rings: Vec<Vec<Point2>>,
}

impl Region {
    fn from_polygon(poly: &Polygon, eps: f64) -> Self {
        let mut ring = clean_ring(poly.vertices(), eps);
        if ring.len() >= 3 && !is_simple(&ring, eps) {
            return Self::resolve_even_odd(&ring, eps);
        }
        if is_collapsed(&ring, eps) {
            tracing::debug!(vertices = poly.len(), "polygon collapses to an empty region");
            return Self::default();
        }
        if signed_area(&ring) < 0.0 {
            ring.reverse();
        }
        Self { rings: vec![ring] }
    }

    /// Split a self-intersecting ring at its own crossings and keep every piece
    /// that separates even-odd inside (left) from outside (right), reversing
    /// pieces that face the other way.
    fn resolve_even_odd(ring: &[Point2], eps: f64) -> Self {
        let edges = ring_edges(ring);
        let pieces = split_self(&edges, eps);
        let mut kept = Vec::with_capacity(pieces.len());
        for s in pieces {
            let len = s.len();
            let d = s.dir() / len;
            let normal = Point2::new(-d.y, d.x);
            let delta = (len * 1e-4).max(eps * 10.0).min(len * 0.25);
            let m = s.midpoint();
            let left = point_in_ring(m + normal * delta, ring);
            let right = point_in_ring(m - normal * delta, ring);
            match (left, right) {
                (true, false) => kept.push(s),
                (false, true) => kept.push(s.reversed()),
                _ => {}
            }
        }
        tracing::debug!(
            vertices = ring.len(),
            pieces = kept.len(),
            "resolved self-intersecting polygon"
        );
        Self {
            rings: assemble(kept, eps),
        }
    }

    fn edges(&self) -> Vec<Seg> {
        self.rings.iter().flat_map(|r| ring_edges(r)).collect()
    }

    fn contains(&self, p: Point2) -> bool {
        self.rings
            .iter()
            .filter(|r| point_in_ring(p, r))
            .count()
            % 2
            == 1
    }
}

/// Two-operand combinations; symmetric difference is two differences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Merge {
    Union,
    Intersection,
    Difference,
}

/// Where a boundary piece of one region lies relative to the other region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Inside,
    Outside,
    SharedSame,
    SharedOpposite,
}

/// Union, intersection, or difference of two regions as raw rings.
fn combine(a: &Region, b: &Region, op: Merge, eps: f64) -> Vec<Vec<Point2>> {
    let (pieces_a, pieces_b) = split_pair(&a.edges(), &b.edges(), eps);
    let mut selected: Vec<Seg> = Vec::new();
    for &s in &pieces_a {
        let side = classify(s, b, &pieces_b, eps);
        let keep = match op {
            Merge::Union => matches!(side, Side::Outside | Side::SharedSame),
            Merge::Intersection => matches!(side, Side::Inside | Side::SharedSame),
            Merge::Difference => matches!(side, Side::Outside | Side::SharedOpposite),
        };
        if keep {
            selected.push(s);
        }
    }
    for &s in &pieces_b {
        let side = classify(s, a, &pieces_a, eps);
        match (op, side) {
            (Merge::Union, Side::Outside) | (Merge::Intersection, Side::Inside) => {
                selected.push(s)
            }
            (Merge::Difference, Side::Inside) => selected.push(s.reversed()),
            _ => {}
        }
    }
    assemble(selected, eps)
}

fn classify(s: Seg, other: &Region, other_pieces: &[Seg], eps: f64) -> Side {
    let m = s.midpoint();
    for t in other_pieces {
        if dist_point_segment(m, *t) <= eps
            && dist_point_line(s.p, *t) <= eps
            && dist_point_line(s.q, *t) <= eps
        {
            return if s.dir().dot(&t.dir()) > 0.0 {
                Side::SharedSame
            } else {
                Side::SharedOpposite
            };
        }
    }
    if other.contains(m) {
        Side::Inside
    } else {
        Side::Outside
    }
}

fn ring_edges(ring: &[Point2]) -> Vec<Seg> {
    let n = ring.len();
    (0..n).map(|i| Seg::new(ring[i], ring[(i + 1) % n])).collect()
}

/// Split `e` at the cut points strictly inside it, in order along `e`.
fn cut_edge(e: Seg, mut cuts: Vec<Point2>, eps: f64, out: &mut Vec<Seg>) {
    let len = e.len();
    if len <= eps {
        return;
    }
    let te = eps / len;
    cuts.retain(|&c| {
        let t = param_on(c, e);
        t > te && t < 1.0 - te
    });
    cuts.sort_by(|x, y| param_on(*x, e).total_cmp(&param_on(*y, e)));
    let mut prev = e.p;
    for c in cuts {
        if near(prev, c, eps) {
            continue;
        }
        out.push(Seg::new(prev, c));
        prev = c;
    }
    out.push(Seg::new(prev, e.q));
}

/// Split both edge lists at every point where they meet each other.
fn split_pair(a: &[Seg], b: &[Seg], eps: f64) -> (Vec<Seg>, Vec<Seg>) {
    let mut cuts_a: Vec<Vec<Point2>> = vec![Vec::new(); a.len()];
    let mut cuts_b: Vec<Vec<Point2>> = vec![Vec::new(); b.len()];
    let mut found = Vec::new();
    for (i, &ea) in a.iter().enumerate() {
        for (j, &eb) in b.iter().enumerate() {
            found.clear();
            meet_points(ea, eb, eps, &mut found);
            cuts_a[i].extend_from_slice(&found);
            cuts_b[j].extend_from_slice(&found);
        }
    }
    let mut out_a = Vec::with_capacity(a.len());
    for (e, cuts) in a.iter().zip(cuts_a) {
        cut_edge(*e, cuts, eps, &mut out_a);
    }
    let mut out_b = Vec::with_capacity(b.len());
    for (e, cuts) in b.iter().zip(cuts_b) {
        cut_edge(*e, cuts, eps, &mut out_b);
    }
    (out_a, out_b)
}

/// Split one edge list at its own crossings.
fn split_self(edges: &[Seg], eps: f64) -> Vec<Seg> {
    let mut cuts: Vec<Vec<Point2>> = vec![Vec::new(); edges.len()];
    let mut found = Vec::new();
    for i in 0..edges.len() {
        for j in (i + 1)..edges.len() {
            found.clear();
            meet_points(edges[i], edges[j], eps, &mut found);
            cuts[i].extend_from_slice(&found);
            cuts[j].extend_from_slice(&found);
        }
    }
    let mut out = Vec::with_capacity(edges.len());
    for (e, c) in edges.iter().zip(cuts) {
        cut_edge(*e, c, eps, &mut out);
    }
    out
}

/// No two non-adjacent edges meet and no two adjacent edges overlap.
fn is_simple(ring: &[Point2], eps: f64) -> bool {
    let edges = ring_edges(ring);
    let n = edges.len();
    let mut found = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            found.clear();
            meet_points(edges[i], edges[j], eps, &mut found);
            let shared = if adjacent { 1 } else { 0 };
            if found.len() > shared {
                return false;
            }
        }
    }
    true
}

/// Walk directed pieces into closed rings, taking the leftmost turn at
/// branching points. Rings are cleaned; degenerate ones are dropped.
fn assemble(pieces: Vec<Seg>, eps: f64) -> Vec<Vec<Point2>> {
    let mut used = vec![false; pieces.len()];
    let mut rings = Vec::new();
    let mut open = 0usize;
    for start in 0..pieces.len() {
        if used[start] {
            continue;
        }
        used[start] = true;
        let origin = pieces[start].p;
        let mut ring = vec![origin];
        let mut cur = start;
        let mut closed = false;
        for _ in 0..pieces.len() {
            let head = pieces[cur].q;
            if near(head, origin, eps) {
                closed = true;
                break;
            }
            ring.push(head);
            match next_piece(&pieces, &used, head, pieces[cur].dir(), eps) {
                Some(k) => {
                    used[k] = true;
                    cur = k;
                }
                None => break,
            }
        }
        if !closed {
            open += 1;
            continue;
        }
        if let Some(clean) = tidy_ring(&ring, eps) {
            rings.push(clean);
        }
    }
    if open > 0 {
        tracing::debug!(open, "dropped boundary walks that did not close");
    }
    rings
}

/// Unused piece leaving `at` with the largest counter-clockwise angle from the
/// reversed incoming direction; lowest index on ties.
fn next_piece(
    pieces: &[Seg],
    used: &[bool],
    at: Point2,
    incoming: Point2,
    eps: f64,
) -> Option<usize> {
    let back = -incoming;
    let mut best: Option<(usize, f64)> = None;
    for (k, s) in pieces.iter().enumerate() {
        if used[k] || !near(s.p, at, eps) {
            continue;
        }
        let d = s.dir();
        let mut angle = cross2(back, d).atan2(back.dot(&d));
        if angle < 0.0 {
            angle += TAU;
        }
        if best.map_or(true, |(_, a)| angle > a) {
            best = Some((k, angle));
        }
    }
    best.map(|(k, _)| k)
}
