//! 2D point geometry shared by both hull builders.
//!
//! Purpose
//! - One point type (`Point`, an `f64` column vector) and one tolerance
//!   struct (`HullCfg`) used by every predicate.
//! - Pure functions only: orientation, polar angle, squared distance,
//!   polar ordering around a pivot, pivot selection, input preparation,
//!   ring reduction.
//!
//! Numerics
//! - Collinearity is tolerance-aware, scale-invariant, and depends only on the
//!   triangle, not on which vertex the triple starts at (see `orientation`).
//! - Builders sweep with exact sign tests, then `drop_flat_vertices` applies
//!   the tolerance to the finished ring.
//! - Sorting keys use `f64::total_cmp`, so every ordering is total and the
//!   stable sort in Graham scan is deterministic.
//!
//! Code cross-refs: `graham::graham_scan_with`, `jarvis::jarvis_march_with`

pub mod check;
mod primitives;
mod types;
mod util;

pub use primitives::{
    cmp_yx, distance_squared, orientation, polar_angle, polar_order, same_ray, select_pivot,
};
pub use types::{point, HullCfg, Orientation, Point};
pub use util::{drop_flat_vertices, prepare_points};
