//! Basic 2D types and tolerances.
//!
//! - `Point`: plain `Vector2<f64>`; equality is exact on both coordinates.
//! - `Orientation`: turn classification of an ordered point triple.
//! - `HullCfg`: centralizes the collinearity tolerance.

use nalgebra::Vector2;

/// A point in the plane. Exact-coordinate equality via `PartialEq`.
pub type Point = Vector2<f64>;

/// Shorthand constructor for callers that do not import nalgebra.
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Vector2::new(x, y)
}

/// Turn direction of the ordered triple `(p, q, r)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    #[inline]
    pub fn is_ccw(self) -> bool {
        self == Orientation::CounterClockwise
    }
}

/// Hull configuration (tolerances).
///
/// `eps_collinear` bounds the height of a triangle relative to its longest
/// side below which its vertices count as collinear. `0.0` restores exact
/// sign tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    pub eps_collinear: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps_collinear: 1e-10,
        }
    }
}

impl HullCfg {
    /// Exact predicates: a triple is collinear only when the cross product is zero.
    #[inline]
    pub const fn exact() -> Self {
        Self { eps_collinear: 0.0 }
    }

    #[inline]
    pub fn with_eps(eps_collinear: f64) -> Self {
        Self {
            eps_collinear: eps_collinear.max(0.0),
        }
    }
}
