//! Stability bound of the explicit diffusion scheme
//!
//! The forward-time centred-space scheme for ∂C/∂t = D·∂²C/∂x² is stable
//! (von Neumann analysis) when the Fourier number satisfies
//!
//! ```text
//! Fo = D·dt/dx² ≤ 1/2   ⇔   dt ≤ 0.5·dx²/D
//! ```

use crate::error::{DiffusionError, DiffusionResult};

/// Relative slack allowed when comparing a time step against the bound
const STABILITY_TOLERANCE: f64 = 1e-12;

fn check_spacing(grid_spacing: f64) -> DiffusionResult<()> {
    if !grid_spacing.is_finite() || grid_spacing <= 0.0 {
        return Err(DiffusionError::InvalidGridSpacing { spacing: grid_spacing });
    }
    Ok(())
}

fn check_diffusivity(diffusivity: f64) -> DiffusionResult<()> {
    if !diffusivity.is_finite() || diffusivity <= 0.0 {
        return Err(DiffusionError::InvalidDiffusivity { diffusivity });
    }
    Ok(())
}

/// Largest stable explicit time step, `0.5·dx²/D`
///
/// # Errors
///
/// - [`DiffusionError::InvalidGridSpacing`] when `grid_spacing <= 0`
/// - [`DiffusionError::InvalidDiffusivity`] when `diffusivity <= 0`
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::calculate_time_step;
///
/// let dt = calculate_time_step(0.5, 100.0).unwrap();
/// assert_eq!(dt, 0.00125);
/// ```
pub fn calculate_time_step(grid_spacing: f64, diffusivity: f64) -> DiffusionResult<f64> {
    check_spacing(grid_spacing)?;
    check_diffusivity(diffusivity)?;
    Ok(0.5 * grid_spacing.powi(2) / diffusivity)
}

/// Fourier number `D·dt/dx²`, the stencil coefficient of the explicit update
pub fn fourier_number(grid_spacing: f64, time_step: f64, diffusivity: f64) -> f64 {
    diffusivity * time_step / grid_spacing.powi(2)
}

/// Check that `time_step` is positive and does not exceed the stability bound
///
/// # Errors
///
/// - [`DiffusionError::InvalidTimeStep`] when `time_step <= 0` or not finite
/// - [`DiffusionError::UnstableTimeStep`] when `time_step > 0.5·dx²/D`
pub fn check_time_step(grid_spacing: f64, time_step: f64, diffusivity: f64) -> DiffusionResult<()> {
    if !time_step.is_finite() || time_step <= 0.0 {
        return Err(DiffusionError::InvalidTimeStep { time_step });
    }

    let limit = calculate_time_step(grid_spacing, diffusivity)?;
    if time_step > limit * (1.0 + STABILITY_TOLERANCE) {
        return Err(DiffusionError::UnstableTimeStep { time_step, limit });
    }

    Ok(())
}
