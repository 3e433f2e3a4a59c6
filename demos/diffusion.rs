//! Step Profile Diffusion
//!
//! ∂C/∂t = D·∂²C/∂x²
//!
//! Two regions at C = 500 and C = 0 relax into a smooth front:
//! - Fixed ends: C(x=0) = 500, C(x=Lx-dx) = 0
//! - Initial state: step at the midpoint
//!
//! Writes the initial and final profiles (PNG + CSV), the evolution plot and
//! the full trajectory into the system temporary directory.
//!
//! Run with `RUST_LOG=debug cargo run --example diffusion` to see the driver phases.

use diffusion_rs::{
    driver::{run_simulation_with, SimulationConfig},
    output::{
        export::{export_trajectory_csv, CsvConfig, CsvMetadata, CsvSink},
        visualization::{plot_profile_evolution, PlotConfig, PlotSink},
        ProfileSink,
    },
    physics::PhysicalQuantity,
};
use chrono::Local;
use log::LevelFilter;
use std::error::Error;
use std::io::Write;

fn init_logging() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(buf, "[{} {:5}] {}", Local::now().format("%H:%M:%S"), record.level(), record.args())
        })
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    println!("=== 1D Diffusion: Step Profile with Fixed Ends ===\n");

    let config = SimulationConfig::default().snapshot_interval(500);

    println!("Physical Parameters:");
    println!("  Domain: [{}, {})", config.origin, config.domain_length);
    println!("  Grid spacing dx: {}", config.grid_spacing);
    println!("  Diffusivity D: {}", config.diffusivity);
    println!("\nBoundary Conditions:");
    println!("  Left: C = {}", config.boundary_left);
    println!("  Right: C = {}", config.boundary_right);
    println!("  Mode: {}", config.boundary_mode);
    println!("\nSimulation:");
    println!("  Time steps: {}\n", config.time_steps);

    let out_dir = std::env::temp_dir().join("diffusion-rs");
    std::fs::create_dir_all(&out_dir)?;

    // Initial and final profiles go to both sinks
    let metadata = CsvMetadata {
        diffusivity: Some(config.diffusivity),
        grid_spacing: Some(config.grid_spacing),
        time_steps: Some(config.time_steps),
        boundary_left: Some(config.boundary_left),
        boundary_right: Some(config.boundary_right),
        ..Default::default()
    };

    let mut plots = PlotSink::new(&out_dir);
    let mut tables = CsvSink::new(&out_dir).with_config(CsvConfig::default().with_metadata(metadata));

    let run = {
        let mut sinks: Vec<Box<dyn ProfileSink + '_>> = vec![Box::new(&mut plots), Box::new(&mut tables)];
        run_simulation_with(&config, &mut sinks)?
    };

    println!("Results:");
    println!("  Points: {}", run.grid.len());
    println!("  dt: {}", run.time_step);
    println!("  Final time: {} s", run.final_time());
    println!("  Mean concentration: {:.6}", run.mean());
    println!(
        "  C at midpoint: {:.3} / {:.3}",
        run.final_profile[run.grid.midpoint_index() - 1],
        run.final_profile[run.grid.midpoint_index()]
    );

    // Evolution over the recorded snapshots
    let evolution_path = out_dir.join("concentration_evolution.png");
    plot_profile_evolution(
        &run.result,
        run.coordinates(),
        PhysicalQuantity::Concentration,
        6,
        evolution_path.to_str().ok_or("non UTF-8 output path")?,
        Some(&PlotConfig::evolution("Concentration profile evolution")),
    )?;

    let trajectory_path = out_dir.join("trajectory.csv");
    export_trajectory_csv(
        &run.result,
        run.coordinates(),
        PhysicalQuantity::Concentration,
        &trajectory_path,
        Some(&CsvConfig::default().precision(4)),
    )?;

    println!("\nFiles:");
    for path in plots.written().iter().chain(tables.written()) {
        println!("  {}", path.display());
    }
    println!("  {}", evolution_path.display());
    println!("  {}", trajectory_path.display());

    Ok(())
}
