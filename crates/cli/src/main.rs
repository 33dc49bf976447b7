use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use hull2d::geom2::check::same_polygon;
use hull2d::{Algorithm, HullCfg};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod points;
mod provenance;
mod timing;

#[derive(Parser)]
#[command(name = "hull2d")]
#[command(about = "Planar convex hulls: Graham scan vs Jarvis march")]
struct Cmd {
    /// Collinearity tolerance (triangle height over longest side); 0 for exact predicates
    #[arg(long, global = true, default_value_t = HullCfg::default().eps_collinear)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the hull of a point file: vertex count, then `x y` per vertex
    Hull {
        /// graham | jarvis (or g | j)
        #[arg(long, short, default_value = "graham")]
        algo: Algorithm,
        input: PathBuf,
    },
    /// Run both algorithms on a point file and check they agree
    Compare {
        input: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Time both algorithms on Average/Best/Worst inputs and write a CSV
    Timing {
        #[arg(long, default_value_t = 10)]
        runs: usize,
        #[arg(long, default_value = "results.csv")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = HullCfg::with_eps(cmd.eps);
    match cmd.action {
        Action::Hull { algo, input } => hull(algo, &input, cfg),
        Action::Compare { input, json } => compare(&input, json, cfg),
        Action::Timing { runs, out } => run_timing(runs, &out, cfg),
    }
}

fn hull(algo: Algorithm, input: &Path, cfg: HullCfg) -> Result<()> {
    let pts = points::read_points(input)?;
    tracing::info!(%algo, input = %input.display(), n = pts.len(), "hull");
    let hull = algo.build(&pts, cfg);
    print!("{}", points::format_hull(&hull));
    Ok(())
}

#[derive(Debug, Serialize)]
struct CompareReport {
    points: usize,
    graham: usize,
    jarvis: usize,
    agree: bool,
}

fn compare(input: &Path, json: bool, cfg: HullCfg) -> Result<()> {
    let pts = points::read_points(input)?;
    let g = Algorithm::Graham.build(&pts, cfg);
    let j = Algorithm::Jarvis.build(&pts, cfg);
    let report = CompareReport {
        points: pts.len(),
        graham: g.len(),
        jarvis: j.len(),
        agree: same_polygon(&g, &j),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "points {}  graham {}  jarvis {}  agree {}",
            report.points, report.graham, report.jarvis, report.agree
        );
    }
    if !report.agree {
        bail!(
            "hulls differ on {}: graham {} vertices, jarvis {}",
            input.display(),
            report.graham,
            report.jarvis
        );
    }
    Ok(())
}

fn run_timing(runs: usize, out: &Path, cfg: HullCfg) -> Result<()> {
    if runs == 0 {
        bail!("--runs must be at least 1");
    }
    tracing::info!(runs, out = %out.display(), eps = cfg.eps_collinear, "timing");
    let rows = timing::run_timing(runs, cfg);
    let mut df = timing::to_frame(&rows)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    timing::write_csv(&mut df, out)?;
    let summary = timing::summarize(&df)?;
    println!("{summary}");

    let params = serde_json::json!({
        "runs": runs,
        "eps_collinear": cfg.eps_collinear,
        "cases": timing::Case::ALL.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
        "algorithms": Algorithm::ALL.iter().map(|a| a.name()).collect::<Vec<_>>(),
    });
    let sidecar = provenance::write_sidecar(out, params)?;
    tracing::info!(rows = rows.len(), sidecar = %sidecar.display(), "timing written");
    Ok(())
}
