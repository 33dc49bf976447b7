//! Graham scan: polar sort around the pivot, then a single stack sweep.
//!
//! Steps
//! - Prepare input (drop non-finite points and duplicates), select the pivot.
//! - Stable sort by `polar_order` around the pivot.
//! - Collapse each run of points on one ray out of the pivot to its farthest point.
//! - Seed the stack with the first three survivors; pop on every non-left turn.
//! - Drop vertices that are flat under the configured tolerance.
//!
//! The sweep uses exact sign tests. The tolerance is applied once, to the
//! finished ring, by `drop_flat_vertices`; Jarvis march ends the same way.
//! Fewer than three survivors means the input is (nearly) collinear; the
//! result is then the empty hull.

use tracing::debug;

use crate::geom2::{
    distance_squared, drop_flat_vertices, orientation, polar_order, prepare_points, same_ray,
    select_pivot, HullCfg, Point,
};

const SWEEP: HullCfg = HullCfg::exact();

/// Graham scan with default tolerances.
pub fn graham_scan(points: &[Point]) -> Vec<Point> {
    graham_scan_with(points, HullCfg::default())
}

/// Convex hull, counter-clockwise from the pivot. Empty for degenerate input.
pub fn graham_scan_with(points: &[Point], cfg: HullCfg) -> Vec<Point> {
    if points.len() < 3 {
        return Vec::new();
    }
    let mut pts = prepare_points(points);
    let Some(pivot) = select_pivot(&pts) else {
        return Vec::new();
    };
    // `sort_by` is stable: equal keys keep input order.
    pts.sort_by(|a, b| polar_order(pivot, *a, *b));
    let reduced = reduce_collinear_runs(pivot, &pts);
    if reduced.len() < 3 {
        debug!(
            input = points.len(),
            survivors = reduced.len(),
            "graham: collinear input, empty hull"
        );
        return Vec::new();
    }

    let mut stack: Vec<Point> = Vec::with_capacity(reduced.len());
    stack.extend_from_slice(&reduced[..3]);
    for &p in &reduced[3..] {
        while stack.len() > 1 && !turns_left(&stack, p) {
            stack.pop();
        }
        stack.push(p);
    }
    drop_flat_vertices(&mut stack, cfg);

    if stack.is_empty() {
        debug!(input = points.len(), "graham: flat input, empty hull");
    }
    stack
}

/// Pivot followed by the farthest point of every same-ray run, in sorted order.
///
/// Run membership is tested against the first point of the run.
fn reduce_collinear_runs(pivot: Point, sorted: &[Point]) -> Vec<Point> {
    let mut out = Vec::with_capacity(sorted.len());
    out.push(pivot);
    // (first point of the run, farthest point so far)
    let mut run: Option<(Point, Point)> = None;
    for &p in sorted.iter().filter(|p| **p != pivot) {
        match run {
            Some((anchor, far)) if same_ray(pivot, anchor, p, SWEEP) => {
                if distance_squared(pivot, p) > distance_squared(pivot, far) {
                    run = Some((anchor, p));
                }
            }
            _ => {
                if let Some((_, far)) = run {
                    out.push(far);
                }
                run = Some((p, p));
            }
        }
    }
    if let Some((_, far)) = run {
        out.push(far);
    }
    out
}

#[inline]
fn turns_left(stack: &[Point], p: Point) -> bool {
    let n = stack.len();
    orientation(stack[n - 2], stack[n - 1], p, SWEEP).is_ccw()
}
