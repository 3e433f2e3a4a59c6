//! Spatial profile plotting
//!
//! Plots C(x) at one time, several profiles on the same axes, or the
//! evolution of a profile over the snapshots of a run.
//!
//! # Usage
//!
//! ```rust,no_run
//! use diffusion_rs::output::visualization::{plot_profile, PlotConfig};
//!
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let c = [500.0, 375.0, 125.0, 0.0];
//! plot_profile(&x, &c, "profile.png", Some(&PlotConfig::profile("Final concentration profile"))).unwrap();
//! ```

use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;

use crate::physics::PhysicalQuantity;
use crate::solver::SimulationResult;
use super::config::{PlotConfig, NO_TITLE};

// =================================================================================================
// Helpers
// =================================================================================================

fn check_series(x: &[f64], values: &[f64]) -> Result<(), Box<dyn Error>> {
    if x.is_empty() || values.is_empty() {
        return Err("Empty data: coordinates and values must not be empty".into());
    }
    if x.len() != values.len() {
        return Err(format!(
            "Data length mismatch: {} coordinates versus {} values",
            x.len(),
            values.len()
        )
        .into());
    }
    if x.iter().chain(values.iter()).any(|v| !v.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in profile".into());
    }
    Ok(())
}

/// Padded axis range, never empty
fn axis_range(min: f64, max: f64, pad: f64) -> Range<f64> {
    let span = (max - min).max(1e-10);
    (min - pad * span)..(max + pad * span)
}

fn bounds<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

fn is_svg(output_path: &str) -> bool {
    std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot a single spatial profile
///
/// # Arguments
///
/// * `x` - Grid coordinates
/// * `values` - Profile values, index-aligned with `x`
/// * `output_path` - Path to save the plot (PNG, or SVG by extension)
/// * `config` - Optional plot configuration
pub fn plot_profile(
    x: &[f64],
    values: &[f64],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    check_series(x, values)?;

    let default_config = PlotConfig::profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let (x_min, x_max) = bounds(x.iter());
    let (c_min, c_max) = bounds(values.iter());
    let x_range = axis_range(x_min, x_max, 0.0);
    let c_range = axis_range(c_min, c_max, 0.05);

    if is_svg(output_path) {
        let backend = SVGBackend::new(output_path, (config.width, config.height));
        plot_profile_impl(backend, x, values, config, x_range, c_range)
    } else {
        let backend = BitMapBackend::new(output_path, (config.width, config.height));
        plot_profile_impl(backend, x, values, config, x_range, c_range)
    }
}

/// Implementation for single-profile plotting with concrete backend
fn plot_profile_impl<DB: DrawingBackend>(
    backend: DB,
    x: &[f64],
    values: &[f64],
    config: &PlotConfig,
    x_range: Range<f64>,
    c_range: Range<f64>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, c_range)?;

    if config.show_grid {
        chart.configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.1}", x))
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;
    }

    chart.draw_series(LineSeries::new(
        x.iter().zip(values.iter()).map(|(x, c)| (*x, *c)),
        ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
    ))?;

    root.present()?;

    Ok(())
}

/// Plot multiple spatial profiles for comparison
///
/// # Arguments
///
/// * `profiles` - Vec of (label, x, values)
/// * `output_path` - Path to save the plot
/// * `config` - Optional plot configuration
pub fn plot_profile_comparison(
    profiles: Vec<(&str, &[f64], &[f64])>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if profiles.is_empty() {
        return Err("No profiles provided".into());
    }
    for (_, x, values) in &profiles {
        check_series(x, values)?;
    }

    let default_config = PlotConfig::evolution(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let (x_min, x_max) = bounds(profiles.iter().flat_map(|(_, x, _)| x.iter()));
    let (c_min, c_max) = bounds(profiles.iter().flat_map(|(_, _, c)| c.iter()));
    let x_range = axis_range(x_min, x_max, 0.0);
    let c_range = axis_range(c_min, c_max, 0.05);

    if is_svg(output_path) {
        let backend = SVGBackend::new(output_path, (config.width, config.height));
        plot_comparison_impl(backend, &profiles, config, x_range, c_range)
    } else {
        let backend = BitMapBackend::new(output_path, (config.width, config.height));
        plot_comparison_impl(backend, &profiles, config, x_range, c_range)
    }
}

/// Implementation for comparison plotting with concrete backend
fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    profiles: &[(&str, &[f64], &[f64])],
    config: &PlotConfig,
    x_range: Range<f64>,
    c_range: Range<f64>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, c_range)?;

    if config.show_grid {
        chart.configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.1}", x))
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;
    }

    for (idx, (label, x, values)) in profiles.iter().enumerate() {
        let color = config.series_color(idx);

        chart
            .draw_series(LineSeries::new(
                x.iter().zip(values.iter()).map(|(x, c)| (*x, *c)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

/// Plot the evolution of a profile over the recorded snapshots of a run
///
/// # Arguments
///
/// * `result` - Simulation result (record snapshots with a snapshot interval)
/// * `x` - Grid coordinates
/// * `quantity` - Quantity to plot
/// * `n_snapshots` - Maximum number of profiles to draw, evenly picked; the
///   final state is always included
/// * `output_path` - Path to save the plot
/// * `config` - Optional plot configuration
pub fn plot_profile_evolution(
    result: &SimulationResult,
    x: &[f64],
    quantity: PhysicalQuantity,
    n_snapshots: usize,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if result.state_trajectory.is_empty() {
        return Err("Empty trajectory".into());
    }
    if n_snapshots == 0 {
        return Err("At least one snapshot is required".into());
    }

    let total = result.state_trajectory.len();
    let picks = n_snapshots.min(total);

    // evenly spaced indices, last one on the final state
    let indices: Vec<usize> = if picks == 1 {
        vec![total - 1]
    } else {
        (0..picks).map(|i| i * (total - 1) / (picks - 1)).collect()
    };

    let mut profiles = Vec::with_capacity(indices.len());
    for idx in indices {
        let values = result.state_trajectory[idx].vector(quantity)?;
        let label = format!("t={:.3}", result.time_points[idx]);
        profiles.push((label, values.as_slice()));
    }

    let profile_refs: Vec<(&str, &[f64], &[f64])> = profiles
        .iter()
        .map(|(label, values)| (label.as_str(), x, *values))
        .collect();

    plot_profile_comparison(profile_refs, output_path, config)
}

// =================================================================================================
// Tests
// =================================================================================================
