//! Output module for simulation results
//!
//! This module provides tools to output profiles in various formats:
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! Both meet the driver at the [`ProfileSink`] seam.
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── sink.rs             ← ProfileSnapshot + ProfileSink
//! ├── visualization/      ← Plots and graphics
//! │   ├── config.rs
//! │   ├── profile.rs
//! │   └── sink.rs
//! └── export/             ← Data export
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use diffusion_rs::driver::{run_simulation_with, SimulationConfig};
//! use diffusion_rs::output::{visualization::PlotSink, export::CsvSink, ProfileSink};
//!
//! let dir = std::env::temp_dir();
//! let mut sinks: Vec<Box<dyn ProfileSink>> = vec![
//!     Box::new(PlotSink::new(&dir)),
//!     Box::new(CsvSink::new(&dir)),
//! ];
//! run_simulation_with(&SimulationConfig::default(), &mut sinks).unwrap();
//! ```

pub mod sink;
pub mod visualization;
pub mod export;

pub use sink::{ProfileSink, ProfileSnapshot};

// Re-export commonly used items for convenience
pub use visualization::{
    plot_profile,
    plot_profile_comparison,
    plot_profile_evolution,
    PlotConfig,
    PlotSink,
};

pub use export::{
    export_profile_csv,
    export_profiles_csv,
    export_trajectory_csv,
    CsvConfig,
    CsvSink,
};
