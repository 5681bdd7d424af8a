//! Build a cubic spline through a small sample set, write the dense
//! interpolated series for plotting, and report the value at one query point.
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use splinterp::config::{BoundaryKind, ReportConfig};
use splinterp::cubic::{self, CubicSpline};
use splinterp::report::{value_line, write_series};

#[derive(Parser, Debug)]
#[command(version, about = "Cubic spline interpolation report")]
struct Args {
    /// TOML file with samples and evaluation settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the dense (x, y) series as CSV to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the samples and dense series to stdout
    #[arg(long)]
    table: bool,

    /// Query point, overriding the config
    #[arg(short, long)]
    query: Option<f64>,

    /// Boundary condition, overriding the config
    #[arg(long, value_enum)]
    boundary: Option<BoundaryKind>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => ReportConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ReportConfig::default(),
    };
    if let Some(query) = args.query {
        cfg.query = query;
    }
    if let Some(boundary) = args.boundary {
        cfg.boundary = boundary;
    }
    info!(
        "{} samples, {} boundary, {:?} extrapolation",
        cfg.x.len(),
        cfg.boundary_condition().name(),
        cfg.extrapolation
    );

    let spline = CubicSpline::with_boundary(&cfg.x, &cfg.y, cfg.boundary_condition())
        .context("building spline")?
        .with_extrapolation(cfg.extrapolation);

    let dense = cubic::evaluate_dense_grid(&spline, cfg.n_points)?;
    info!("Evaluated spline on {} dense points", dense.len());

    if let Some(path) = &args.output {
        let file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_series(BufWriter::new(file), "x,y", &dense)?;
        info!("Wrote dense series to {}", path.display());
    }

    if args.table {
        let samples: Vec<(f64, f64)> = cfg.x.iter().copied().zip(cfg.y.iter().copied()).collect();
        let stdout = io::stdout();
        write_series(stdout.lock(), "# samples\nx,y", &samples)?;
        write_series(stdout.lock(), "# cubic spline interpolation\nx,y", &dense)?;
    }

    let value = cubic::evaluate_at(&spline, cfg.query)
        .with_context(|| format!("evaluating spline at {}", cfg.query))?;
    println!("{}", value_line(cfg.query, value));

    Ok(())
}
