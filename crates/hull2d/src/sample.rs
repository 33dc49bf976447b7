//! Deterministic point clouds for tests, benches and timing runs.
//!
//! - `circle_points`: evenly spaced samples on a circle (every point is extreme).
//! - `random_grid_points`: seeded uniform integer coordinates in a box.
//! - `square_with_interior`: a fixed 10×10 square plus a random interior cloud
//!   (hull size 4 regardless of n).
//!
//! Determinism: every sampler seeds its own `StdRng` from the caller's seed.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::Point;

/// Corners of the square used by `square_with_interior`, counter-clockwise from the origin.
pub const SQUARE_CORNERS: [[f64; 2]; 4] = [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]];

/// `n` points at angles `2πk/n` on a circle of `radius` centred at the origin.
pub fn circle_points(radius: f64, n: usize) -> Vec<Point> {
    let step = std::f64::consts::TAU / (n.max(1) as f64);
    (0..n)
        .map(|k| {
            let th = (k as f64) * step;
            Vector2::new(radius * th.cos(), radius * th.sin())
        })
        .collect()
}

/// `n` points with integer coordinates uniform in `[0, max_x] × [0, max_y]`.
pub fn random_grid_points(n: usize, seed: u64, max_x: u32, max_y: u32) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let x = rng.gen_range(0..=max_x);
            let y = rng.gen_range(0..=max_y);
            Vector2::new(f64::from(x), f64::from(y))
        })
        .collect()
}

/// `n` random points in `[0, 9]²` followed by the four `SQUARE_CORNERS`.
pub fn square_with_interior(n: usize, seed: u64) -> Vec<Point> {
    let mut pts = random_grid_points(n, seed, 9, 9);
    pts.extend(SQUARE_CORNERS.iter().map(|&[x, y]| Vector2::new(x, y)));
    pts
}
