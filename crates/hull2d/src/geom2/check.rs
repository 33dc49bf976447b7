//! Hull validity checks used by tests and by `compare` in the CLI.
//!
//! None of these are needed to build a hull; they certify one.

use super::primitives::orientation;
use super::types::{HullCfg, Point};

/// Every consecutive triple turns strictly left and the boundary winds exactly once.
///
/// Rejects repeated adjacent vertices and collinear triples (both classify as
/// collinear), and star-shaped polygons that turn left everywhere but wind
/// twice. Fewer than 3 vertices is never convex.
pub fn is_strictly_convex_ccw(hull: &[Point], cfg: HullCfg) -> bool {
    let n = hull.len();
    if n < 3 {
        return false;
    }
    let mut turning = 0.0;
    for i in 0..n {
        let p = hull[i];
        let q = hull[(i + 1) % n];
        let r = hull[(i + 2) % n];
        if !orientation(p, q, r, cfg).is_ccw() {
            return false;
        }
        let a = q - p;
        let b = r - q;
        turning += a.perp(&b).atan2(a.dot(&b));
    }
    (turning - std::f64::consts::TAU).abs() < 1e-6
}

/// All `points` lie inside or on the boundary of the CCW polygon `hull`.
///
/// `tol` is relative: a point may sit right of an edge by at most
/// `tol · |edge| · |point − edge start|`.
pub fn encloses_all(hull: &[Point], points: &[Point], tol: f64) -> bool {
    if hull.len() < 3 {
        return points.is_empty();
    }
    let n = hull.len();
    points.iter().all(|&p| {
        (0..n).all(|i| {
            let a = hull[i];
            let b = hull[(i + 1) % n];
            let e = b - a;
            let d = p - a;
            e.perp(&d) >= -tol * e.norm() * d.norm()
        })
    })
}

/// Every hull vertex is an exact member of `points`.
pub fn vertices_in_input(hull: &[Point], points: &[Point]) -> bool {
    hull.iter().all(|v| points.contains(v))
}

/// Same vertex cycle, possibly starting at a different vertex.
pub fn same_polygon(a: &[Point], b: &[Point]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    let Some(offset) = b.iter().position(|p| *p == a[0]) else {
        return false;
    };
    let n = a.len();
    (0..n).all(|i| a[i] == b[(i + offset) % n])
}
