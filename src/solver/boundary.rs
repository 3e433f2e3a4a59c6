//! Domain boundaries of a 1D diffusion problem
//!
//! # Design
//!
//! The boundaries carry the two spatial end values, the policy that says
//! whether they are enforced, and the temporal boundary (initial state).
//!
//! - `BoundaryMode::Fixed`: Dirichlet. After every step the first and last
//!   cells are reset to the left and right values.
//! - `BoundaryMode::Free`: nothing is reset. What the ends do is then up to
//!   the model's stencil (held by an interior stencil, coupled by a periodic one).

use std::fmt;

use crate::error::{DiffusionError, DiffusionResult};
use crate::physics::{PhysicalQuantity, PhysicalState};

// =================================================================================================
// Boundary Mode
// =================================================================================================

/// Whether the end values are enforced after each step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryMode {
    /// Ends are never reset
    Free,

    /// Ends are reset to their Dirichlet values every step
    #[default]
    Fixed,
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryMode::Free => write!(f, "free"),
            BoundaryMode::Fixed => write!(f, "fixed"),
        }
    }
}

// =================================================================================================
// Domain Boundaries
// =================================================================================================

/// Spatial and temporal boundaries of a 1D domain
///
/// # Examples
///
/// ```rust
/// use diffusion_rs::physics::{PhysicalQuantity, PhysicalState};
/// use diffusion_rs::solver::{BoundaryMode, DomainBoundaries};
///
/// let initial = PhysicalState::from_vec(PhysicalQuantity::Concentration, vec![500.0, 500.0, 0.0, 0.0]);
///
/// let boundaries = DomainBoundaries::fixed(500.0, 0.0, initial);
/// assert_eq!(boundaries.mode, BoundaryMode::Fixed);
/// assert!(boundaries.initial_condition().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct DomainBoundaries {
    /// Enforcement policy for the spatial ends
    pub mode: BoundaryMode,

    /// Value at x = origin
    pub left: f64,

    /// Value at the last grid point
    pub right: f64,

    /// Quantity the end values apply to
    pub quantity: PhysicalQuantity,

    /// State at t = 0
    initial: Option<PhysicalState>,
}

impl DomainBoundaries {
    /// Generic constructor (quantity defaults to concentration)
    pub fn new(mode: BoundaryMode, left: f64, right: f64, initial: PhysicalState) -> Self {
        Self {
            mode,
            left,
            right,
            quantity: PhysicalQuantity::Concentration,
            initial: Some(initial),
        }
    }

    // ====================================== Factory methods ======================================

    /// Dirichlet ends, reset after every step
    pub fn fixed(left: f64, right: f64, initial: PhysicalState) -> Self {
        Self::new(BoundaryMode::Fixed, left, right, initial)
    }

    /// Ends left to the stencil
    ///
    /// `left` and `right` are still recorded (they seed the initial profile
    /// and show up in exported metadata) but never enforced.
    pub fn free(left: f64, right: f64, initial: PhysicalState) -> Self {
        Self::new(BoundaryMode::Free, left, right, initial)
    }

    /// Apply the boundaries to another quantity (e.g. temperature)
    pub fn with_quantity(mut self, quantity: PhysicalQuantity) -> Self {
        self.quantity = quantity;
        self
    }

    // ===================================== Query methods =========================================

    /// Initial condition (temporal boundary at t = 0)
    pub fn initial_condition(&self) -> Option<&PhysicalState> {
        self.initial.as_ref()
    }

    /// True when ends are reset every step
    pub fn is_fixed(&self) -> bool {
        self.mode == BoundaryMode::Fixed
    }

    /// Validate the object contents
    pub fn validate(&self) -> DiffusionResult<()> {
        if !self.left.is_finite() || !self.right.is_finite() {
            return Err(DiffusionError::InvalidConfiguration(format!(
                "boundary values must be finite (left = {}, right = {})",
                self.left, self.right
            )));
        }

        let initial = self.initial.as_ref().ok_or_else(|| {
            DiffusionError::InvalidConfiguration("no initial condition in domain boundaries".into())
        })?;

        initial.vector(self.quantity)?;

        Ok(())
    }

    /// Reset the ends of `state` when the mode is [`BoundaryMode::Fixed`]
    ///
    /// States with fewer than two points are left alone.
    pub fn enforce(&self, state: &mut PhysicalState) -> DiffusionResult<()> {
        if self.mode == BoundaryMode::Free {
            return Ok(());
        }

        let values = state.vector_mut(self.quantity)?;
        let n = values.len();
        if n >= 2 {
            values[0] = self.left;
            values[n - 1] = self.right;
        }

        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
