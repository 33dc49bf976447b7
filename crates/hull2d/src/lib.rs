//! Planar convex hulls: Graham scan and Jarvis march side by side.
//!
//! Layout
//! - `geom2`: point type, tolerances, orientation/angle primitives, hull checks.
//! - `graham`: sort-and-sweep builder, O(n log n).
//! - `jarvis`: gift-wrapping builder, O(n·h).
//! - `sample`: deterministic point clouds for tests, benches and timing runs.
//!
//! Conventions
//! - Hulls are returned counter-clockwise, starting at the pivot
//!   (lowest y, then lowest x). A pivot within tolerance of the edge between
//!   its neighbours is dropped; the hull then starts at its lowest vertex.
//! - Both builders sweep with exact sign tests and apply the collinearity
//!   tolerance in one shared pass, `geom2::drop_flat_vertices`.
//! - Fewer than 3 usable points, or a fully collinear set, gives an empty hull.
//!   Degenerate input is never an error.

pub mod geom2;
pub mod graham;
pub mod jarvis;
pub mod sample;

use std::fmt;
use std::str::FromStr;

pub use geom2::{point, HullCfg, Orientation, Point};
pub use graham::graham_scan;
pub use jarvis::jarvis_march;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::check::{encloses_all, is_strictly_convex_ccw, same_polygon};
    pub use crate::geom2::{
        distance_squared, orientation, polar_angle, polar_order, select_pivot, HullCfg,
        Orientation, Point,
    };
    pub use crate::graham::{graham_scan, graham_scan_with};
    pub use crate::jarvis::{jarvis_march, jarvis_march_with};
    pub use crate::Algorithm;
}

/// Hull construction algorithm selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Graham,
    Jarvis,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Jarvis, Algorithm::Graham];

    /// Build the hull of `points` with this algorithm.
    pub fn build(self, points: &[Point], cfg: HullCfg) -> Vec<Point> {
        match self {
            Algorithm::Graham => graham::graham_scan_with(points, cfg),
            Algorithm::Jarvis => jarvis::jarvis_march_with(points, cfg),
        }
    }

    /// Display name used in reports ("Graham" / "Jarvis").
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Graham => "Graham",
            Algorithm::Jarvis => "Jarvis",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "graham" | "g" => Ok(Algorithm::Graham),
            "jarvis" | "j" => Ok(Algorithm::Jarvis),
            other => Err(format!("unknown algorithm `{other}` (expected graham|jarvis)")),
        }
    }
}
