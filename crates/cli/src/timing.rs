//! Timing harness: both algorithms over three input families, written as CSV.
//!
//! Cases (run = 1..=runs)
//! - Average: 100 random points on the integer grid `[0, 100]²`, seed `10·run`.
//! - Best: `40·(runs − run + 1) − 4` random points in `[0, 9]²` plus the 10×10
//!   square corners; the hull is always the square.
//! - Worst: 100 points on a circle of radius `100 + run`; every point is a vertex.
//!
//! Columns: `Algorithm,Case,Time(ms),Hull Ratio` (hull size / input size).

use std::fmt;
use std::fs::File;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use hull2d::sample::{circle_points, random_grid_points, square_with_interior};
use hull2d::{Algorithm, HullCfg, Point};
use polars::prelude::*;

pub const COL_ALGORITHM: &str = "Algorithm";
pub const COL_CASE: &str = "Case";
pub const COL_TIME: &str = "Time(ms)";
pub const COL_RATIO: &str = "Hull Ratio";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Case {
    Average,
    Best,
    Worst,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Average, Case::Best, Case::Worst];

    /// Input for one run of this case.
    pub fn points(self, run: usize, runs: usize) -> Vec<Point> {
        match self {
            Case::Average => random_grid_points(100, 10 * run as u64, 100, 100),
            Case::Best => {
                let n = (40 * (runs.saturating_sub(run) + 1)).saturating_sub(4);
                square_with_interior(n, 10 * run as u64)
            }
            Case::Worst => circle_points(100.0 + run as f64, 100),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Case::Average => "Average",
            Case::Best => "Best",
            Case::Worst => "Worst",
        };
        f.write_str(s)
    }
}

/// One timed hull construction.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingRow {
    pub algorithm: Algorithm,
    pub case: Case,
    pub millis: f64,
    pub hull_ratio: f64,
}

/// Time `runs` hull builds per (case, algorithm), Jarvis before Graham within each case.
pub fn run_timing(runs: usize, cfg: HullCfg) -> Vec<TimingRow> {
    let mut rows = Vec::with_capacity(runs * Case::ALL.len() * Algorithm::ALL.len());
    for case in Case::ALL {
        for algo in Algorithm::ALL {
            for run in 1..=runs {
                let pts = case.points(run, runs);
                let start = Instant::now();
                let hull = algo.build(&pts, cfg);
                let millis = start.elapsed().as_secs_f64() * 1e3;
                let hull_ratio = if pts.is_empty() {
                    0.0
                } else {
                    hull.len() as f64 / pts.len() as f64
                };
                tracing::debug!(%algo, %case, run, n = pts.len(), h = hull.len(), millis, "timed");
                rows.push(TimingRow {
                    algorithm: algo,
                    case,
                    millis,
                    hull_ratio,
                });
            }
        }
    }
    rows
}

pub fn to_frame(rows: &[TimingRow]) -> PolarsResult<DataFrame> {
    let algos: Vec<&str> = rows.iter().map(|r| r.algorithm.name()).collect();
    let cases: Vec<String> = rows.iter().map(|r| r.case.to_string()).collect();
    let times: Vec<f64> = rows.iter().map(|r| r.millis).collect();
    let ratios: Vec<f64> = rows.iter().map(|r| r.hull_ratio).collect();
    df!(
        COL_ALGORITHM => algos,
        COL_CASE => cases,
        COL_TIME => times,
        COL_RATIO => ratios
    )
}

/// Mean time and hull ratio per (algorithm, case), in first-seen order.
pub fn summarize(df: &DataFrame) -> PolarsResult<DataFrame> {
    df.clone()
        .lazy()
        .group_by_stable([col(COL_ALGORITHM), col(COL_CASE)])
        .agg([
            col(COL_TIME).mean().alias("Mean Time(ms)"),
            col(COL_RATIO).mean().alias("Mean Hull Ratio"),
        ])
        .collect()
}

pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn best_case_sizes_shrink_with_run() {
        assert_eq!(Case::Best.points(1, 10).len(), 400);
        assert_eq!(Case::Best.points(10, 10).len(), 40);
        assert_eq!(Case::Worst.points(3, 10).len(), 100);
        assert_eq!(Case::Average.points(1, 10), Case::Average.points(1, 10));
    }

    #[test]
    fn rows_cover_every_case_and_algorithm() {
        let rows = run_timing(2, HullCfg::default());
        assert_eq!(rows.len(), 2 * 3 * 2);
        assert_eq!(rows[0].algorithm, Algorithm::Jarvis);
        assert_eq!(rows[0].case, Case::Average);
        for r in rows.iter().filter(|r| r.case == Case::Worst) {
            assert_eq!(r.hull_ratio, 1.0);
        }
        for r in rows.iter().filter(|r| r.case == Case::Best) {
            assert!(r.hull_ratio > 0.0 && r.hull_ratio < 0.2);
        }
        assert!(rows.iter().all(|r| r.millis >= 0.0));
    }

    #[test]
    fn csv_round_trip_and_summary() {
        let rows = run_timing(1, HullCfg::default());
        let mut df = to_frame(&rows).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");
        write_csv(&mut df, &path).unwrap();

        let header = std::fs::read_to_string(&path).unwrap();
        assert!(header.starts_with("Algorithm,Case,Time(ms),Hull Ratio\n"));

        let back = LazyCsvReader::new(&path)
            .with_has_header(true)
            .finish()
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(back.shape(), (6, 4));

        let summary = summarize(&df).unwrap();
        assert_eq!(summary.height(), 6);
        assert_eq!(summary.width(), 4);
    }
}
