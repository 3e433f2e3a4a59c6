//! Linear 1D diffusion model
//!
//! # Mathematical Background
//!
//! ```text
//! ∂C/∂t = D · ∂²C/∂x²
//! ```
//!
//! with constant diffusivity D on a uniform grid of spacing dx. One explicit
//! step is the centred-difference update of [`crate::solver::stencil`],
//! applied in place.
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::models::LinearDiffusion1D;
//! use diffusion_rs::physics::{PhysicalModel, PhysicalQuantity};
//!
//! let model = LinearDiffusion1D::new(600, 0.5, 100.0, 500.0, 0.0).unwrap();
//! let initial = model.setup_initial_state();
//!
//! let c = initial.vector(PhysicalQuantity::Concentration).unwrap();
//! assert_eq!(c[0], 500.0);
//! assert_eq!(c[599], 0.0);
//! assert_eq!(model.max_stable_time_step(), Some(0.00125));
//! ```

use nalgebra::DVector;

use crate::error::{DiffusionError, DiffusionResult};
use crate::models::InitialProfile;
use crate::physics::{PhysicalModel, PhysicalQuantity, PhysicalState};
use crate::solver::{apply_stencil, calculate_time_step, fourier_number, Grid, Stencil};

/// Constant-diffusivity diffusion on a uniform 1D grid
#[derive(Clone, Debug)]
pub struct LinearDiffusion1D {
    // ==================== Physics Parameters ====================
    /// Diffusivity D
    diffusivity: f64,
    /// Value seeding the left half of the initial profile
    boundary_left: f64,
    /// Value seeding the right half of the initial profile
    boundary_right: f64,
    /// Quantity being diffused
    quantity: PhysicalQuantity,

    // ==================== Discretisation ====================
    /// Number of grid points
    nx: usize,
    /// Grid spacing dx
    dx: f64,
    /// Coordinate of the first point
    origin: f64,
    /// Which cells the update touches
    stencil: Stencil,
    /// Shape of C(x, 0)
    profile: InitialProfile,
}

impl LinearDiffusion1D {
    /// Create a new model
    ///
    /// # Arguments
    ///
    /// * `points` - Number of grid points
    /// * `grid_spacing` - dx
    /// * `diffusivity` - D
    /// * `boundary_left` - value of the left region and left end
    /// * `boundary_right` - value of the right region and right end
    ///
    /// # Errors
    ///
    /// `InvalidGridSpacing` or `InvalidDiffusivity` for non-positive values.
    pub fn new(
        points: usize,
        grid_spacing: f64,
        diffusivity: f64,
        boundary_left: f64,
        boundary_right: f64,
    ) -> DiffusionResult<Self> {
        calculate_time_step(grid_spacing, diffusivity)?;

        Ok(Self {
            diffusivity,
            boundary_left,
            boundary_right,
            quantity: PhysicalQuantity::Concentration,
            nx: points,
            dx: grid_spacing,
            origin: 0.0,
            stencil: Stencil::default(),
            profile: InitialProfile::default(),
        })
    }

    /// Create a model sized and positioned on `grid`
    pub fn from_grid(
        grid: &Grid,
        diffusivity: f64,
        boundary_left: f64,
        boundary_right: f64,
    ) -> DiffusionResult<Self> {
        Ok(Self::new(grid.len(), grid.spacing(), diffusivity, boundary_left, boundary_right)?
            .with_origin(grid.origin()))
    }

    // ===================================== Builder methods =======================================

    /// Select the stencil variant
    pub fn with_stencil(mut self, stencil: Stencil) -> Self {
        self.stencil = stencil;
        self
    }

    /// Select the initial profile shape
    pub fn with_profile(mut self, profile: InitialProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Coordinate of the first grid point (used by threshold profiles)
    pub fn with_origin(mut self, origin: f64) -> Self {
        self.origin = origin;
        self
    }

    /// Diffuse another quantity (temperature for heat conduction)
    pub fn with_quantity(mut self, quantity: PhysicalQuantity) -> Self {
        self.quantity = quantity;
        self
    }

    // ====================================== Accessors ============================================

    /// Diffusivity D
    pub fn diffusivity(&self) -> f64 {
        self.diffusivity
    }

    /// Grid spacing dx
    pub fn grid_spacing(&self) -> f64 {
        self.dx
    }

    /// Stencil variant
    pub fn stencil(&self) -> Stencil {
        self.stencil
    }

    /// Diffused quantity
    pub fn quantity(&self) -> PhysicalQuantity {
        self.quantity
    }

    /// Grid coordinates `origin + i·dx`
    pub fn coordinates(&self) -> Vec<f64> {
        (0..self.nx).map(|i| self.origin + i as f64 * self.dx).collect()
    }

    fn profile_of<'a>(&self, state: &'a PhysicalState) -> DiffusionResult<&'a DVector<f64>> {
        let values = state.vector(self.quantity)?;
        if values.len() != self.nx {
            return Err(DiffusionError::LengthMismatch {
                expected: self.nx,
                found: values.len(),
            });
        }
        Ok(values)
    }
}

impl PhysicalModel for LinearDiffusion1D {

    fn points(&self) -> usize {
        self.nx
    }

    fn advance(&self, state: &mut PhysicalState, dt: f64, workspace: &mut Vec<f64>) -> DiffusionResult<()> {
        self.profile_of(state)?;

        let coefficient = fourier_number(self.dx, dt, self.diffusivity);
        let values = state.vector_mut(self.quantity)?;
        apply_stencil(values.as_mut_slice(), workspace, coefficient, self.stencil);

        Ok(())
    }

    fn max_stable_time_step(&self) -> Option<f64> {
        calculate_time_step(self.dx, self.diffusivity).ok()
    }

    fn setup_initial_state(&self) -> PhysicalState {
        let profile = self
            .profile
            .evaluate(&self.coordinates(), self.boundary_left, self.boundary_right);

        PhysicalState::new(self.quantity, profile)
    }

    fn name(&self) -> &str {
        "Linear diffusion 1D"
    }

    fn description(&self) -> Option<&str> {
        Some("Constant diffusivity, centred second difference in space.")
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::make_grid;

    fn model() -> LinearDiffusion1D {
        LinearDiffusion1D::new(10, 1.0, 1.0, 500.0, 0.0).unwrap()
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            LinearDiffusion1D::new(10, 0.0, 1.0, 1.0, 0.0),
            Err(DiffusionError::InvalidGridSpacing { .. })
        ));
        assert!(matches!(
            LinearDiffusion1D::new(10, 1.0, -1.0, 1.0, 0.0),
            Err(DiffusionError::InvalidDiffusivity { .. })
        ));
    }

    #[test]
    fn test_initial_state_is_step() {
        let state = model().setup_initial_state();
        let c = state.vector(PhysicalQuantity::Concentration).unwrap();
        assert_eq!(c.as_slice(), &[500.0, 500.0, 500.0, 500.0, 500.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_threshold_profile_uses_coordinates() {
        let grid = make_grid(0.0, 10.0, 1.0).unwrap();
        let model = LinearDiffusion1D::from_grid(&grid, 1.0, 1.0, 0.0)
            .unwrap()
            .with_profile(InitialProfile::Threshold { split: 2.0 });
        let c = model.setup_initial_state();
        let c = c.vector(PhysicalQuantity::Concentration).unwrap();
        assert_eq!(c.iter().filter(|&&v| v == 1.0).count(), 3);
    }

    #[test]
    fn test_advance_matches_stencil() {
        let m = model();
        let mut state = m.setup_initial_state();
        let mut workspace = Vec::new();
        m.advance(&mut state, 0.5, &mut workspace).unwrap();

        let c = state.vector(PhysicalQuantity::Concentration).unwrap();
        assert_eq!(c.as_slice(), &[500.0, 500.0, 500.0, 500.0, 250.0, 250.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_length_mismatch() {
        let m = model();
        let mut state = PhysicalState::new(PhysicalQuantity::Concentration, DVector::zeros(3));
        assert!(matches!(
            m.advance(&mut state, 0.1, &mut Vec::new()),
            Err(DiffusionError::LengthMismatch { expected: 10, found: 3 })
        ));
    }

    #[test]
    fn test_temperature_quantity() {
        let m = model().with_quantity(PhysicalQuantity::Temperature);
        let state = m.setup_initial_state();
        assert!(state.get(PhysicalQuantity::Temperature).is_some());
        assert!(state.get(PhysicalQuantity::Concentration).is_none());
    }

    #[test]
    fn test_stability_limit() {
        assert_eq!(model().max_stable_time_step(), Some(0.5));
    }
}
