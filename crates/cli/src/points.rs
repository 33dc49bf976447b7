//! Point files in, hull listings out.
//!
//! Input: whitespace-separated numbers read as consecutive `x y` pairs; line
//! breaks carry no meaning beyond error messages.
//! Output: the vertex count, then one `x y` line per vertex with two decimals.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use hull2d::{point, Point};

/// Read and parse a point file.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading points from {}", path.display()))?;
    parse_points(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Parse whitespace-separated `x y` pairs.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut coords: Vec<f64> = Vec::new();
    let mut last_line = 0;
    for (lineno, line) in text.lines().enumerate() {
        for tok in line.split_whitespace() {
            let v: f64 = tok
                .parse()
                .with_context(|| format!("line {}: invalid number `{tok}`", lineno + 1))?;
            coords.push(v);
            last_line = lineno + 1;
        }
    }
    if coords.len() % 2 != 0 {
        bail!(
            "odd number of coordinates ({}); last value on line {last_line} has no partner",
            coords.len()
        );
    }
    Ok(coords.chunks_exact(2).map(|c| point(c[0], c[1])).collect())
}

/// Vertex count followed by `x y` lines at two decimals.
pub fn format_hull(hull: &[Point]) -> String {
    let mut out = String::with_capacity(16 * (hull.len() + 1));
    let _ = writeln!(out, "{}", hull.len());
    for p in hull {
        let _ = writeln!(out, "{:.2} {:.2}", p.x, p.y);
    }
    out
}
