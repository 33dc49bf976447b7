use std::collections::HashSet;

use super::primitives::{cmp_yx, distance_squared, orientation};
use super::types::{HullCfg, Point};

/// Drop non-finite points and exact duplicates, keeping first occurrences in input order.
///
/// `-0.0` and `0.0` are the same coordinate, matching `Point` equality.
pub fn prepare_points(points: &[Point]) -> Vec<Point> {
    let mut seen: HashSet<(u64, u64)> = HashSet::with_capacity(points.len());
    let mut out = Vec::with_capacity(points.len());
    for p in points {
        if !(p.x.is_finite() && p.y.is_finite()) {
            continue;
        }
        if seen.insert(bits_key(p)) {
            out.push(*p);
        }
    }
    out
}

#[inline]
fn bits_key(p: &Point) -> (u64, u64) {
    // Adding +0.0 maps -0.0 to +0.0.
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}

/// Remove vertices from the CCW ring until every cyclic triple turns strictly left under `cfg`.
///
/// A flat corner loses its middle vertex (the one opposite the triangle's
/// longest side), so the ring keeps its extent. The survivors are rotated to
/// start at their lowest vertex; that is the input pivot unless the pivot
/// itself sat within tolerance of an edge. Fewer than three survivors empties
/// the ring.
pub fn drop_flat_vertices(ring: &mut Vec<Point>, cfg: HullCfg) {
    let mut i = 0;
    // Consecutive corners found convex since the last removal.
    let mut clean = 0;
    while ring.len() >= 3 && clean < ring.len() {
        let n = ring.len();
        let (prev, next) = ((i + n - 1) % n, (i + 1) % n);
        let (a, b, c) = (ring[prev], ring[i], ring[next]);
        if orientation(a, b, c, cfg).is_ccw() {
            clean += 1;
            i = next;
            continue;
        }
        let (opp_a, opp_b, opp_c) = (
            distance_squared(b, c),
            distance_squared(a, c),
            distance_squared(a, b),
        );
        let middle = if opp_b >= opp_a && opp_b >= opp_c {
            i
        } else if opp_a >= opp_c {
            prev
        } else {
            next
        };
        ring.remove(middle);
        clean = 0;
        // Resume at the corner before the removed vertex.
        i = (middle + ring.len() - 1) % ring.len();
    }
    if ring.len() < 3 {
        ring.clear();
        return;
    }
    let start = ring
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| cmp_yx(a, b))
        .map_or(0, |(k, _)| k);
    ring.rotate_left(start);
}
