//! Explicit diffusion stencil
//!
//! # Mathematical Background
//!
//! The second derivative is approximated with the centred difference
//!
//! ```text
//! ∂²C/∂x² ≈ (C[i-1] - 2·C[i] + C[i+1]) / dx²
//! ```
//!
//! and one forward Euler step of ∂C/∂t = D·∂²C/∂x² becomes
//!
//! ```text
//! C[i] ← C[i] + Fo · (C[i-1] - 2·C[i] + C[i+1]),   Fo = D·dt/dx²
//! ```
//!
//! Neighbours are looked up circularly (`(i ± 1) mod n`). With the default
//! [`Stencil::Interior`] only cells `1..=n-2` are written, and for those the
//! lookup never wraps, so the ends act as fixed ghost values. With
//! [`Stencil::Periodic`] every cell is written and the ends see each other.
//!
//! The whole Laplacian is evaluated from the old values before any cell is
//! written (Jacobi form), using a scratch buffer; the caller's array is
//! updated in place and never reallocated.

use nalgebra::DVector;

use crate::error::DiffusionResult;
use crate::solver::stability::{check_time_step, fourier_number};

/// Which cells the stencil updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stencil {
    /// Update cells `1..=n-2`; cells 0 and n-1 are left untouched
    #[default]
    Interior,

    /// Update every cell, treating the array as a ring
    Periodic,
}

impl Stencil {
    /// Name used in logs and exported metadata
    pub fn name(&self) -> &'static str {
        match self {
            Stencil::Interior => "interior",
            Stencil::Periodic => "periodic",
        }
    }
}

/// Smallest array with at least one interior point
pub const MIN_STENCIL_POINTS: usize = 3;

/// Apply one explicit step to `values` in place
///
/// `scratch` is resized to `values.len()` and overwritten. Arrays shorter
/// than [`MIN_STENCIL_POINTS`] are left unchanged.
pub fn apply_stencil(values: &mut [f64], scratch: &mut Vec<f64>, coefficient: f64, stencil: Stencil) {
    let n = values.len();
    if n < MIN_STENCIL_POINTS {
        return;
    }

    scratch.clear();
    scratch.resize(n, 0.0);

    // interior Laplacian: lap[i] = C[i-1] - 2C[i] + C[i+1]
    for (lap, w) in scratch[1..n - 1].iter_mut().zip(values.windows(3)) {
        *lap = w[0] - 2.0 * w[1] + w[2];
    }

    match stencil {
        Stencil::Interior => {
            for (c, lap) in values[1..n - 1].iter_mut().zip(&scratch[1..n - 1]) {
                *c += coefficient * lap;
            }
        }
        Stencil::Periodic => {
            scratch[0] = values[n - 1] - 2.0 * values[0] + values[1];
            scratch[n - 1] = values[n - 2] - 2.0 * values[n - 1] + values[0];
            for (c, lap) in values.iter_mut().zip(scratch.iter()) {
                *c += coefficient * lap;
            }
        }
    }
}

/// Reusable diffusion stepper
///
/// Holds the Fourier number and a scratch buffer so that stepping the same
/// array many times performs no allocation after the first step.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::{calculate_time_step, DiffusionStepper, Stencil};
/// use nalgebra::DVector;
///
/// let dt = calculate_time_step(1.0, 1.0).unwrap();
/// let mut stepper = DiffusionStepper::new(1.0, dt, 1.0, Stencil::Interior).unwrap();
///
/// let mut c = DVector::from_vec(vec![500.0, 500.0, 0.0, 0.0]);
/// stepper.step(&mut c);
/// assert_eq!(c.as_slice(), &[500.0, 250.0, 250.0, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct DiffusionStepper {
    coefficient: f64,
    stencil: Stencil,
    scratch: Vec<f64>,
}

impl DiffusionStepper {
    /// Create a stepper for the given spacing, time step and diffusivity
    ///
    /// # Errors
    ///
    /// Invalid spacing, diffusivity or time step, or a time step above the
    /// stability bound.
    pub fn new(
        grid_spacing: f64,
        time_step: f64,
        diffusivity: f64,
        stencil: Stencil,
    ) -> DiffusionResult<Self> {
        check_time_step(grid_spacing, time_step, diffusivity)?;
        Ok(Self {
            coefficient: fourier_number(grid_spacing, time_step, diffusivity),
            stencil,
            scratch: Vec::new(),
        })
    }

    /// Fourier number D·dt/dx² applied to the Laplacian
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Stencil variant
    pub fn stencil(&self) -> Stencil {
        self.stencil
    }

    /// Advance `concentration` by one time step, in place
    pub fn step(&mut self, concentration: &mut DVector<f64>) {
        self.step_slice(concentration.as_mut_slice());
    }

    /// Slice form of [`DiffusionStepper::step`]
    pub fn step_slice(&mut self, values: &mut [f64]) {
        apply_stencil(values, &mut self.scratch, self.coefficient, self.stencil);
    }
}

/// Advance `concentration` by one explicit step with the interior stencil
///
/// Convenience wrapper over [`DiffusionStepper`]. Every call builds a new
/// stepper and allocates a scratch buffer of `concentration.len()` values,
/// so time loops should build one [`DiffusionStepper`] and call
/// [`DiffusionStepper::step`] instead.
///
/// # Errors
///
/// Invalid spacing, time step or diffusivity, or a time step above
/// `0.5·dx²/D`. Arrays with fewer than 3 points are left unchanged.
pub fn solve_1d_diffusion(
    concentration: &mut DVector<f64>,
    grid_spacing: f64,
    time_step: f64,
    diffusivity: f64,
) -> DiffusionResult<()> {
    let mut stepper = DiffusionStepper::new(grid_spacing, time_step, diffusivity, Stencil::Interior)?;
    stepper.step(concentration);
    Ok(())
}
