use crate::complex::Point2;

/// Directed segment `p → q`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Seg {
    pub p: Point2,
    pub q: Point2,
}

impl Seg {
    #[inline]
    pub fn new(p: Point2, q: Point2) -> Self {
        Self { p, q }
    }

    #[inline]
    pub fn dir(&self) -> Point2 {
        self.q - self.p
    }

    #[inline]
    pub fn len(&self) -> f64 {
        self.dir().norm()
    }

    #[inline]
    pub fn midpoint(&self) -> Point2 {
        (self.p + self.q) * 0.5
    }

    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.q, self.p)
    }
}

/// z-component of `a × b`.
#[inline]
pub(crate) fn cross2(a: Point2, b: Point2) -> f64 {
    a.x * b.y - a.y * b.x
}

#[inline]
pub(crate) fn near(a: Point2, b: Point2, eps: f64) -> bool {
    (a - b).norm() <= eps
}

/// Shoelace formula; positive for counter-clockwise vertex order.
pub fn signed_area(ring: &[Point2]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| cross2(ring[i], ring[(i + 1) % n]))
        .sum();
    0.5 * twice
}

/// Even-odd ray casting: cast a ray to the right and count edge crossings.
///
/// Half-open on `y` so a ray through a vertex is counted once.
pub fn point_in_ring(p: Point2, ring: &[Point2]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (ring[i], ring[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Distance from `p` to the closed segment `s`.
pub(crate) fn dist_point_segment(p: Point2, s: Seg) -> f64 {
    let d = s.dir();
    let l2 = d.norm_squared();
    if l2 == 0.0 {
        return (p - s.p).norm();
    }
    let t = ((p - s.p).dot(&d) / l2).clamp(0.0, 1.0);
    (p - (s.p + d * t)).norm()
}

/// Distance from `p` to the infinite line through `s` (endpoint distance if `s` is a point).
pub(crate) fn dist_point_line(p: Point2, s: Seg) -> f64 {
    let d = s.dir();
    let l = d.norm();
    if l == 0.0 {
        return (p - s.p).norm();
    }
    cross2(d, p - s.p).abs() / l
}

/// Parameter of the projection of `p` onto `s` (0 at `s.p`, 1 at `s.q`).
#[inline]
pub(crate) fn param_on(p: Point2, s: Seg) -> f64 {
    let d = s.dir();
    let l2 = d.norm_squared();
    if l2 == 0.0 {
        0.0
    } else {
        (p - s.p).dot(&d) / l2
    }
}

/// Points where segments `e` and `f` meet, appended to `out`.
///
/// Crossing and touching segments give one point; collinear overlaps give the
/// endpoints of either segment that lie on the other. Points within `eps` of
/// an endpoint snap to that endpoint so both polygons cut at identical
/// coordinates.
pub(crate) fn meet_points(e: Seg, f: Seg, eps: f64, out: &mut Vec<Point2>) {
    let d = e.dir();
    let g = f.dir();
    let (ld, lg) = (d.norm(), g.norm());
    if ld <= eps || lg <= eps {
        return;
    }
    let denom = cross2(d, g);
    if denom.abs() <= eps * ld * lg {
        if dist_point_line(f.p, e) > eps || dist_point_line(f.q, e) > eps {
            return;
        }
        for p in [f.p, f.q] {
            if dist_point_segment(p, e) <= eps {
                out.push(p);
            }
        }
        for p in [e.p, e.q] {
            if dist_point_segment(p, f) <= eps {
                out.push(p);
            }
        }
        return;
    }
    let w = f.p - e.p;
    let t = cross2(w, g) / denom;
    let u = cross2(w, d) / denom;
    let (te, ue) = (eps / ld, eps / lg);
    if t < -te || t > 1.0 + te || u < -ue || u > 1.0 + ue {
        return;
    }
    let p = if u.abs() <= ue {
        f.p
    } else if (1.0 - u).abs() <= ue {
        f.q
    } else if t.abs() <= te {
        e.p
    } else if (1.0 - t).abs() <= te {
        e.q
    } else {
        e.p + d * t
    };
    out.push(p);
}

/// Drop near-duplicate and collinear vertices (cyclically) until stable.
///
/// May leave fewer than 3 vertices. Crossing rings keep their shape, so a
/// bowtie survives with its four corners.
pub(crate) fn clean_ring(ring: &[Point2], eps: f64) -> Vec<Point2> {
    let mut pts: Vec<Point2> = Vec::with_capacity(ring.len());
    for &p in ring {
        if pts.last().map_or(true, |&l| !near(l, p, eps)) {
            pts.push(p);
        }
    }
    while pts.len() > 1 && near(pts[0], pts[pts.len() - 1], eps) {
        pts.pop();
    }
    while pts.len() >= 3 {
        let n = pts.len();
        let drop = (0..n).find(|&i| {
            let prev = pts[(i + n - 1) % n];
            let cur = pts[i];
            let next = pts[(i + 1) % n];
            let (a, b) = (cur - prev, next - cur);
            near(prev, cur, eps) || cross2(a, b).abs() <= eps * a.norm().max(b.norm())
        });
        match drop {
            Some(i) => {
                pts.remove(i);
            }
            None => break,
        }
    }
    pts
}

/// Sum of edge lengths, closing edge included.
pub(crate) fn perimeter(ring: &[Point2]) -> f64 {
    let n = ring.len();
    (0..n).map(|i| (ring[(i + 1) % n] - ring[i]).norm()).sum()
}

/// Fewer than 3 vertices, or no wider than `eps` on average.
///
/// Mean width is `2·area / perimeter`, a length, so the test scales with the
/// ring: a square of side `s` collapses only once `s <= 2·eps`.
pub(crate) fn is_collapsed(ring: &[Point2], eps: f64) -> bool {
    ring.len() < 3 || 2.0 * signed_area(ring).abs() <= eps * perimeter(ring)
}

/// `clean_ring`, then `None` if what remains is collapsed.
///
/// Only for rings known not to cross themselves: a bowtie has zero net area
/// and would be rejected here.
pub(crate) fn tidy_ring(ring: &[Point2], eps: f64) -> Option<Vec<Point2>> {
    let pts = clean_ring(ring, eps);
    (!is_collapsed(&pts, eps)).then_some(pts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn shoelace_sign_follows_orientation() {
        let sq = [p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)];
        assert!((signed_area(&sq) - 4.0).abs() < 1e-12);
        let mut cw = sq;
        cw.reverse();
        assert!((signed_area(&cw) + 4.0).abs() < 1e-12);
    }

    #[test]
    fn ray_casting_inside_outside() {
        let tri = [p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)];
        assert!(point_in_ring(p(1.0, 1.0), &tri));
        assert!(!point_in_ring(p(3.0, 3.0), &tri));
        assert!(!point_in_ring(p(-1.0, 0.0), &tri));
    }

    #[test]
    fn crossing_touching_and_overlapping_segments() {
        let eps = 1e-9;
        let mut out = Vec::new();
        meet_points(
            Seg::new(p(0.0, 0.0), p(2.0, 2.0)),
            Seg::new(p(0.0, 2.0), p(2.0, 0.0)),
            eps,
            &mut out,
        );
        assert_eq!(out.len(), 1);
        assert!(near(out[0], p(1.0, 1.0), 1e-12));

        // T-junction snaps to the touching endpoint exactly.
        out.clear();
        meet_points(
            Seg::new(p(0.0, 0.0), p(4.0, 0.0)),
            Seg::new(p(1.0, 0.0), p(1.0, 3.0)),
            eps,
            &mut out,
        );
        assert_eq!(out, vec![p(1.0, 0.0)]);

        // Collinear overlap reports the inner endpoints of both.
        out.clear();
        meet_points(
            Seg::new(p(0.0, 0.0), p(3.0, 0.0)),
            Seg::new(p(2.0, 0.0), p(5.0, 0.0)),
            eps,
            &mut out,
        );
        assert!(out.contains(&p(2.0, 0.0)) && out.contains(&p(3.0, 0.0)));

        // Parallel, apart.
        out.clear();
        meet_points(
            Seg::new(p(0.0, 0.0), p(3.0, 0.0)),
            Seg::new(p(0.0, 1.0), p(3.0, 1.0)),
            eps,
            &mut out,
        );
        assert!(out.is_empty());
    }

    #[test]
    fn tidy_removes_duplicates_collinear_and_closing_vertex() {
        let ring = [
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 2.0),
            p(0.0, 2.0),
            p(0.0, 0.0),
        ];
        let out = tidy_ring(&ring, 1e-9).unwrap();
        assert_eq!(out, vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]);
        assert!(tidy_ring(&[p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)], 1e-9).is_none());
    }

    #[test]
    fn collapse_is_judged_by_width_not_area() {
        let eps = 1e-9;
        let tiny = 2e-5;
        let sq = [p(0.0, 0.0), p(tiny, 0.0), p(tiny, tiny), p(0.0, tiny)];
        assert!(signed_area(&sq) < eps);
        assert_eq!(tidy_ring(&sq, eps).unwrap().len(), 4);

        // 10 long, 1e-10 tall: big area against eps, but thinner than eps.
        let sliver = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 1e-10), p(0.0, 1e-10)];
        assert!(is_collapsed(&sliver, eps));
        assert!(!is_collapsed(&sliver, 1e-12));
    }

    #[test]
    fn cleaning_keeps_crossing_rings() {
        let bowtie = [p(0.0, 0.0), p(2.0, 2.0), p(2.0, 0.0), p(0.0, 2.0), p(0.0, 0.0)];
        let out = clean_ring(&bowtie, 1e-9);
        assert_eq!(out.len(), 4);
        assert!(signed_area(&out).abs() < 1e-12);
        assert!(tidy_ring(&bowtie, 1e-9).is_none());
    }
}
