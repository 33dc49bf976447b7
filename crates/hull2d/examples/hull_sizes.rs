//! Print hull sizes from both builders for the sampler families.
//!
//! Usage:
//!   cargo run -p hull2d --example hull_sizes -- random
//!   cargo run -p hull2d --example hull_sizes -- circle
//!   cargo run -p hull2d --example hull_sizes -- square
//!
//! Each line: sample index, input size, Graham/Jarvis hull sizes, agreement.

use hull2d::geom2::check::same_polygon;
use hull2d::sample::{circle_points, random_grid_points, square_with_interior};
use hull2d::{Algorithm, HullCfg, Point};

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "random".to_string());
    let samples: Vec<Vec<Point>> = match mode.as_str() {
        "random" => (1..=5).map(|i| random_grid_points(100 * i, i as u64, 100, 100)).collect(),
        "circle" => (1..=5).map(|i| circle_points(100.0, 20 * i)).collect(),
        "square" => (1..=5).map(|i| square_with_interior(50 * i, i as u64)).collect(),
        _ => {
            eprintln!("usage: hull_sizes [random|circle|square]");
            return;
        }
    };
    let cfg = HullCfg::default();
    for (i, pts) in samples.iter().enumerate() {
        let g = Algorithm::Graham.build(pts, cfg);
        let j = Algorithm::Jarvis.build(pts, cfg);
        println!(
            "{mode} sample {i}: n={}, graham h={}, jarvis h={}, agree={}",
            pts.len(),
            g.len(),
            j.len(),
            same_polygon(&g, &j)
        );
    }
}
