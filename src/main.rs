//! Batch harness: grow one cone and report its parastichy counts.

use clap::Parser;
use conestack::float_types::{Real, set_tolerance};
use conestack::{Cone, ConeConfig, OverlapScan, SvgRenderer};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "conestack")]
#[command(about = "Stack equal disks on a cone and count the parastichies of the frontier")]
#[command(version)]
struct Args {
    /// Sector angle of the unrolled cone, in degrees
    #[arg(short, long, default_value_t = 50.0)]
    angle: Real,

    /// Radius shared by every disk
    #[arg(short, long, default_value_t = 0.1)]
    radius: Real,

    /// Seed height in [0, 1]
    #[arg(long, default_value_t = 0.9)]
    height: Real,

    /// Number of disks to place after the seed
    #[arg(short, long, default_value_t = 500)]
    steps: usize,

    /// Write the packing to this SVG file
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write the parastichy chart to this SVG file
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Check candidates against every placed disk instead of the recent ones
    #[arg(long)]
    full_overlap_scan: bool,

    /// Override the overlap and tangency tolerance
    #[arg(long)]
    tolerance: Option<Real>,

    /// Print the up/down counts of every iteration
    #[arg(long)]
    history: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("conestack=info")),
        )
        .init();

    let args = Args::parse();
    if let Some(tolerance) = args.tolerance {
        set_tolerance(tolerance);
    }

    let overlap_scan = if args.full_overlap_scan {
        OverlapScan::All
    } else {
        OverlapScan::Recent
    };
    let config = ConeConfig::new(args.angle, args.radius, args.height).with_overlap_scan(overlap_scan);
    let mut cone = Cone::new(config)?;

    let started = Instant::now();
    let outcome = cone.run(args.steps);
    let elapsed = started.elapsed();
    info!(
        placed = cone.iteration(),
        seconds = elapsed.as_secs_f64(),
        "finished stacking"
    );

    if args.history {
        for (iteration, counts) in cone.history().iter().enumerate() {
            println!("{iteration}\t{}\t{}", counts.up, counts.down);
        }
    }

    let counts = cone.history().latest().unwrap_or_default();
    println!(
        "angle {} after {} steps: front {} disks, {} up, {} down",
        args.angle,
        cone.iteration(),
        cone.front().len(),
        counts.up,
        counts.down
    );

    if let Some(path) = &args.svg {
        SvgRenderer::new(&cone).save_packing(path)?;
        info!(path = %path.display(), "wrote packing");
    }
    if let Some(path) = &args.chart {
        SvgRenderer::new(&cone).save_parastichy_chart(path)?;
        info!(path = %path.display(), "wrote parastichy chart");
    }

    // report a stall only after the partial packing has been written out
    outcome?;
    Ok(())
}
