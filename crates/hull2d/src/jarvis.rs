//! Jarvis march (gift wrapping) in two monotone chains.
//!
//! - Upper chain: from the pivot, climb the right side of the hull. Only points
//!   at or above the current vertex qualify; pick the smallest polar angle.
//! - Lower chain: from the top, descend the left side back to the pivot. Only
//!   points at or below the current vertex qualify; horizontal-left counts as −π.
//!
//! Ties on one ray go to the farther point, so points strictly inside an edge
//! never become vertices. Candidates must also turn strictly left off the
//! previous edge; this gives monotone progress.
//!
//! The wrap uses exact sign tests; `drop_flat_vertices` applies the tolerance
//! to the finished ring, exactly as Graham scan does.
//!
//! Termination
//! - Visited vertices are tracked per input index (O(1) membership).
//! - Each step visits a new point, and the step count is capped at the number
//!   of prepared points.

use std::f64::consts::PI;

use tracing::{debug, warn};

use crate::geom2::{
    distance_squared, drop_flat_vertices, orientation, polar_angle, prepare_points, same_ray,
    select_pivot, HullCfg, Point,
};

const SWEEP: HullCfg = HullCfg::exact();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Chain {
    Upper,
    Lower,
}

impl Chain {
    #[inline]
    fn admits(self, current: Point, p: Point) -> bool {
        match self {
            Chain::Upper => p.y >= current.y,
            Chain::Lower => p.y <= current.y,
        }
    }

    /// Polar angle from `current`, unwrapped so that it grows monotonically
    /// counter-clockwise over this chain's half-plane.
    #[inline]
    fn sweep_angle(self, current: Point, p: Point) -> f64 {
        let angle = polar_angle(current, p);
        match self {
            Chain::Upper => angle,
            Chain::Lower if angle >= PI => -PI,
            Chain::Lower => angle,
        }
    }
}

/// Wrapping state for one invocation. The pivot lives here, not in a global.
struct Wrap<'a> {
    pts: &'a [Point],
    visited: Vec<bool>,
    hull: Vec<Point>,
    pivot: usize,
    current: usize,
    steps: usize,
}

impl<'a> Wrap<'a> {
    fn new(pts: &'a [Point], pivot: usize) -> Self {
        let mut visited = vec![false; pts.len()];
        visited[pivot] = true;
        Self {
            pts,
            visited,
            hull: vec![pts[pivot]],
            pivot,
            current: pivot,
            steps: 0,
        }
    }

    fn exhausted(&self) -> bool {
        if self.steps < self.pts.len() {
            return false;
        }
        warn!(
            steps = self.steps,
            hull = self.hull.len(),
            "jarvis: step cap reached, stopping wrap"
        );
        true
    }

    fn advance(&mut self, next: usize) {
        self.steps += 1;
        self.visited[next] = true;
        self.hull.push(self.pts[next]);
        self.current = next;
    }

    /// Last three hull vertices turn strictly left.
    fn last_turn_is_left(&self) -> bool {
        let n = self.hull.len();
        orientation(self.hull[n - 3], self.hull[n - 2], self.hull[n - 1], SWEEP).is_ccw()
    }

    /// Index of the next vertex on `chain`, or `None` when no point qualifies.
    fn next_vertex(&self, chain: Chain) -> Option<usize> {
        let cur = self.pts[self.current];
        let prev = (self.hull.len() >= 2).then(|| self.hull[self.hull.len() - 2]);
        let mut best: Option<(usize, f64)> = None;
        for (i, &p) in self.pts.iter().enumerate() {
            if i == self.current {
                continue;
            }
            // The pivot stays eligible on the way down: reaching it closes the hull.
            if self.visited[i] && !(chain == Chain::Lower && i == self.pivot) {
                continue;
            }
            if !chain.admits(cur, p) {
                continue;
            }
            if let Some(prev) = prev {
                if !orientation(prev, cur, p, SWEEP).is_ccw() {
                    continue;
                }
            }
            let angle = chain.sweep_angle(cur, p);
            best = match best {
                None => Some((i, angle)),
                Some((j, best_angle)) => {
                    let q = self.pts[j];
                    let replace = if same_ray(cur, q, p, SWEEP) {
                        distance_squared(cur, p) > distance_squared(cur, q)
                    } else {
                        angle < best_angle
                    };
                    if replace {
                        Some((i, angle))
                    } else {
                        best
                    }
                }
            };
        }
        best.map(|(i, _)| i)
    }
}

/// Jarvis march with default tolerances.
pub fn jarvis_march(points: &[Point]) -> Vec<Point> {
    jarvis_march_with(points, HullCfg::default())
}

/// Convex hull, counter-clockwise from the pivot. Empty for degenerate input.
pub fn jarvis_march_with(points: &[Point], cfg: HullCfg) -> Vec<Point> {
    if points.len() < 3 {
        return Vec::new();
    }
    let pts = prepare_points(points);
    let Some(pivot) = select_pivot(&pts) else {
        return Vec::new();
    };
    let Some(pivot_idx) = pts.iter().position(|p| *p == pivot) else {
        return Vec::new();
    };
    let mut wrap = Wrap::new(&pts, pivot_idx);

    while wrap.hull.len() < 3 || wrap.last_turn_is_left() {
        if wrap.exhausted() {
            break;
        }
        match wrap.next_vertex(Chain::Upper) {
            Some(next) => wrap.advance(next),
            None => break,
        }
    }

    loop {
        if wrap.exhausted() {
            break;
        }
        match wrap.next_vertex(Chain::Lower) {
            Some(next) if next != wrap.pivot => wrap.advance(next),
            _ => break,
        }
    }

    let wrapped = wrap.hull.len();
    let mut hull = wrap.hull;
    drop_flat_vertices(&mut hull, cfg);
    if hull.is_empty() {
        debug!(
            input = points.len(),
            vertices = wrapped,
            "jarvis: collinear input, empty hull"
        );
    }
    hull
}
