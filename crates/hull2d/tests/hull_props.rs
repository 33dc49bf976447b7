//! Property tests: both builders against the hull contract on random inputs.

use hull2d::geom2::check::vertices_in_input;
use hull2d::prelude::*;
use nalgebra::Vector2;
use proptest::prelude::*;

fn grid_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-40i32..=40, -40i32..=40), 0..max_len).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| Vector2::new(f64::from(x), f64::from(y)))
            .collect()
    })
}

fn float_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 3..max_len)
        .prop_map(|v| v.into_iter().map(|(x, y)| Vector2::new(x, y)).collect())
}

/// Points within 1e-9 of a random line through the `[-100, 100]` window.
fn near_line_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    (
        -3.0f64..3.0,
        -50.0f64..50.0,
        prop::collection::vec((-100.0f64..100.0, -1e-9f64..1e-9), 3..max_len),
    )
        .prop_map(|(slope, offset, v)| {
            v.into_iter()
                .map(|(x, dy)| Vector2::new(x, slope * x + offset + dy))
                .collect()
        })
}

/// A wide triangle plus points bulging off its long edge by less than the tolerance.
fn sliver_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    (
        1.0f64..50.0,
        prop::collection::vec((-0.99f64..0.99, 0.0f64..1e-11), 0..max_len),
    )
        .prop_map(|(apex, bulges)| {
            let mut pts = vec![
                Vector2::new(-100.0, 0.0),
                Vector2::new(100.0, 0.0),
                Vector2::new(0.0, apex),
            ];
            pts.extend(
                bulges
                    .into_iter()
                    .map(|(t, h)| Vector2::new(100.0 * t, -h * 100.0)),
            );
            pts
        })
}

fn assert_convex_and_agree(points: &[Point], cfg: HullCfg) -> Result<(), TestCaseError> {
    let g = graham_scan_with(points, cfg);
    let j = jarvis_march_with(points, cfg);
    prop_assert!(same_polygon(&g, &j), "graham {:?} vs jarvis {:?}", g, j);
    prop_assert!(vertices_in_input(&g, points));
    if !g.is_empty() {
        prop_assert!(is_strictly_convex_ccw(&g, cfg), "not convex: {:?}", g);
        prop_assert_eq!(Some(g[0]), select_pivot(&g));
    }
    Ok(())
}

/// Every point lies inside the hull or within `slack` of its boundary.
fn within_slack(hull: &[Point], points: &[Point], slack: f64) -> bool {
    let n = hull.len();
    points.iter().all(|&p| {
        (0..n).all(|i| {
            let e = hull[(i + 1) % n] - hull[i];
            e.perp(&(p - hull[i])) >= -slack * e.norm()
        })
    })
}

fn assert_hull_contract(points: &[Point], hull: &[Point]) -> Result<(), TestCaseError> {
    let cfg = HullCfg::default();
    prop_assert!(vertices_in_input(hull, points));
    if hull.is_empty() {
        return Ok(());
    }
    prop_assert!(hull.len() >= 3);
    prop_assert_eq!(Some(hull[0]), select_pivot(points));
    prop_assert!(is_strictly_convex_ccw(hull, cfg));
    prop_assert!(encloses_all(hull, points, 1e-9));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn grid_hulls_satisfy_contract(points in grid_points(80)) {
        let g = graham_scan(&points);
        let j = jarvis_march(&points);
        assert_hull_contract(&points, &g)?;
        assert_hull_contract(&points, &j)?;
        if points.len() < 3 {
            prop_assert!(g.is_empty() && j.is_empty());
        }
    }

    #[test]
    fn grid_hulls_agree(points in grid_points(80)) {
        let g = graham_scan(&points);
        let j = jarvis_march(&points);
        prop_assert!(same_polygon(&g, &j), "graham {:?} vs jarvis {:?}", g, j);
    }

    #[test]
    fn float_hulls_satisfy_contract(points in float_points(60)) {
        let g = graham_scan(&points);
        let j = jarvis_march(&points);
        assert_hull_contract(&points, &g)?;
        assert_hull_contract(&points, &j)?;
        prop_assert_eq!(g.len(), j.len());
    }

    #[test]
    fn collinear_sets_give_empty_hulls(
        xs in prop::collection::vec(-50i32..=50, 3..30),
        slope in -3i32..=3,
        offset in -10i32..=10,
    ) {
        let points: Vec<Point> = xs
            .iter()
            .map(|&x| Vector2::new(f64::from(x), f64::from(slope * x + offset)))
            .collect();
        prop_assert!(graham_scan(&points).is_empty());
        prop_assert!(jarvis_march(&points).is_empty());
    }

    #[test]
    fn duplicates_and_order_do_not_change_the_hull(points in grid_points(40)) {
        let mut doubled = points.clone();
        doubled.extend(points.iter().rev().copied());
        let base = graham_scan(&points);
        prop_assert_eq!(&graham_scan(&doubled), &base);
        prop_assert!(same_polygon(&jarvis_march(&doubled), &base));
    }

    #[test]
    fn near_collinear_hulls_are_convex_and_agree(points in near_line_points(8)) {
        for cfg in [HullCfg::default(), HullCfg::with_eps(1e-12), HullCfg::exact()] {
            assert_convex_and_agree(&points, cfg)?;
        }
    }

    #[test]
    fn slivers_under_tolerance_fold_into_the_edge(points in sliver_points(12)) {
        let cfg = HullCfg::default();
        assert_convex_and_agree(&points, cfg)?;
        assert_convex_and_agree(&points, HullCfg::exact())?;
        let hull = graham_scan_with(&points, cfg);
        prop_assert!(hull.contains(&Vector2::new(-100.0, 0.0)));
        prop_assert!(hull.contains(&Vector2::new(100.0, 0.0)));
        prop_assert!(within_slack(&hull, &points, 1e-7));
    }

    #[test]
    fn non_finite_points_are_ignored(points in grid_points(40)) {
        let mut noisy = points.clone();
        noisy.push(Vector2::new(f64::NAN, 1.0));
        noisy.push(Vector2::new(0.0, f64::NEG_INFINITY));
        let finite_g = graham_scan(&points);
        prop_assert_eq!(&graham_scan(&noisy), &finite_g);
        prop_assert!(same_polygon(&jarvis_march(&noisy), &finite_g));
    }
}

#[test]
fn both_builders_are_deterministic() {
    let points = hull2d::sample::random_grid_points(500, 99, 1000, 1000);
    for algo in Algorithm::ALL {
        let first = algo.build(&points, HullCfg::default());
        for _ in 0..3 {
            let again = algo.build(&points, HullCfg::default());
            assert_eq!(first.len(), again.len());
            assert!(first
                .iter()
                .zip(&again)
                .all(|(a, b)| a.x.to_bits() == b.x.to_bits() && a.y.to_bits() == b.y.to_bits()));
        }
    }
}

#[test]
fn best_case_hull_is_the_square() {
    let points = hull2d::sample::square_with_interior(356, 10);
    let expected: Vec<Point> = hull2d::sample::SQUARE_CORNERS
        .iter()
        .map(|&[x, y]| Vector2::new(x, y))
        .collect();
    assert_eq!(graham_scan(&points), expected);
    assert_eq!(jarvis_march(&points), expected);
}

#[test]
fn signed_zero_does_not_change_the_pivot() {
    let points = vec![
        Vector2::new(0.0, -0.0),
        Vector2::new(-1.0, 0.0),
        Vector2::new(0.0, 5.0),
    ];
    for algo in Algorithm::ALL {
        let hull = algo.build(&points, HullCfg::default());
        assert_eq!(hull.len(), 3, "{algo}");
        assert_eq!(hull[0], Vector2::new(-1.0, 0.0), "{algo}");
        assert_eq!(hull[1], Vector2::new(0.0, 0.0), "{algo}");
    }
}
