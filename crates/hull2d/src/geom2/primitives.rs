use std::cmp::Ordering;

use super::types::{HullCfg, Orientation, Point};

/// Classify the turn `p → q → r` by the sign of the cross product `(q − p) × (r − p)`.
///
/// The triple is collinear when `|cross| <= eps · L²`, with `L` the longest side
/// of the triangle: the height over that side is at most `eps · L`. The test
/// only looks at the triangle, so every rotation of the triple gets the same
/// answer, at every coordinate scale. Coincident points are collinear.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point, cfg: HullCfg) -> Orientation {
    // Evaluate from the lowest point so all rotations share one float expression.
    let (a, b, c) = if cmp_yx(&p, &q).is_le() && cmp_yx(&p, &r).is_le() {
        (p, q, r)
    } else if cmp_yx(&q, &r).is_le() {
        (q, r, p)
    } else {
        (r, p, q)
    };
    let u = b - a;
    let v = c - a;
    let cross = u.perp(&v);
    let longest_sq = u
        .norm_squared()
        .max(v.norm_squared())
        .max((c - b).norm_squared());
    if cross.abs() <= cfg.eps_collinear * longest_sq {
        Orientation::Collinear
    } else if cross > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// Signed angle of `p − origin`, in (−π, π]. `-0.0` offsets count as `+0.0`.
#[inline]
pub fn polar_angle(origin: Point, p: Point) -> f64 {
    (p.y - origin.y + 0.0).atan2(p.x - origin.x + 0.0)
}

/// Squared Euclidean distance (comparison only, no square root).
#[inline]
pub fn distance_squared(a: Point, b: Point) -> f64 {
    (a - b).norm_squared()
}

/// Polar order around `pivot`: smaller angle first, equal angles by increasing distance.
///
/// Total on finite input (`f64::total_cmp`). Near-collinear points whose angles
/// differ only by rounding are merged later by the run reduction in Graham scan,
/// not here.
#[inline]
pub fn polar_order(pivot: Point, a: Point, b: Point) -> Ordering {
    polar_angle(pivot, a)
        .total_cmp(&polar_angle(pivot, b))
        .then_with(|| distance_squared(pivot, a).total_cmp(&distance_squared(pivot, b)))
}

/// `a` and `b` lie on the same ray out of `origin`: the triangle is collinear
/// under `orientation` and both points sit on the same side of `origin`.
#[inline]
pub fn same_ray(origin: Point, a: Point, b: Point, cfg: HullCfg) -> bool {
    orientation(origin, a, b, cfg) == Orientation::Collinear
        && (a - origin).dot(&(b - origin)) > 0.0
}

/// Order by y, then x. `-0.0` and `0.0` compare equal, as in `Point` equality.
#[inline]
pub fn cmp_yx(a: &Point, b: &Point) -> Ordering {
    (a.y + 0.0)
        .total_cmp(&(b.y + 0.0))
        .then_with(|| (a.x + 0.0).total_cmp(&(b.x + 0.0)))
}

/// Lowest point, ties broken by lowest x. First occurrence wins; `None` when empty.
pub fn select_pivot(points: &[Point]) -> Option<Point> {
    points.iter().min_by(|a, b| cmp_yx(a, b)).copied()
}
