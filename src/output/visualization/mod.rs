//! Visualization module for diffusion simulation results
//!
//! This module provides tools to visualize profiles using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **profile**: Spatial plots (C against x)
//! - **sink**: `PlotSink`, the [`ProfileSink`](crate::output::ProfileSink) writing image files
//!
//! # When to Use Which Function
//!
//! | Use Case | Function |
//! |----------|----------|
//! | One profile | `plot_profile` |
//! | Compare profiles | `plot_profile_comparison` |
//! | Profile evolution over a run | `plot_profile_evolution` |
//! | Driver output | `PlotSink` |

pub mod config;
pub mod profile;
pub mod sink;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};

pub use profile::{plot_profile, plot_profile_comparison, plot_profile_evolution};

pub use sink::{ImageFormat, PlotSink};
