//! Numerical solvers
//!
//! This module provides the numerics of the crate: the grid, the stability
//! bound, the diffusion stencil and the time-stepping solver.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Physical model (equations)
//!    - Domain boundaries (end values, boundary mode, initial state)
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW to solve
//!    - Time step and number of steps
//!    - Snapshot policy
//!
//! 3. **Solver** (`Solver` trait) - The numerical method
//!    - Applies the numerical scheme
//!    - Returns the recorded trajectory
//!
//! # Module Organization
//!
//! - **`grid`**: uniform 1D grid (`make_grid`, `Grid`)
//! - **`stability`**: explicit time-step bound (`calculate_time_step`)
//! - **`stencil`**: in-place FTCS update (`solve_1d_diffusion`, `DiffusionStepper`)
//! - **`traits`**: `Solver`, `SolverConfiguration`, `SimulationResult`
//! - **`boundary`**: `DomainBoundaries`, `BoundaryMode`
//! - **`scenario`**: `Scenario`
//! - **`methods`**: `ExplicitSolver`
//!
//! # Quick Start Example
//!
//! ```rust
//! use diffusion_rs::solver::{calculate_time_step, make_grid, solve_1d_diffusion};
//! use diffusion_rs::models::set_initial_profile;
//!
//! let grid = make_grid(0.0, 100.0, 1.0).unwrap();
//! let dt = calculate_time_step(grid.spacing(), 1.0).unwrap();
//!
//! let mut c = set_initial_profile(grid.len(), 500.0, 0.0);
//! for _ in 0..10 {
//!     solve_1d_diffusion(&mut c, grid.spacing(), dt, 1.0).unwrap();
//! }
//!
//! assert_eq!(c[0], 500.0);
//! assert_eq!(c[99], 0.0);
//! ```
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐
//! │  Physical Model │  (equations + stencil)
//! └────────┬────────┘
//!          │
//!          ├──────────────┐
//!          │              │
//! ┌────────▼────────┐ ┌──▼──────────────┐
//! │ Domain          │ │ Scenario        │ ← WHAT to solve
//! │ Boundaries      │ │ (model + bounds)│
//! └─────────────────┘ └────────┬────────┘
//!                              │
//!                     ┌────────▼─────────────┐
//!                     │ Solver Configuration │ ← HOW to solve
//!                     │ (dt + steps)         │
//!                     └────────┬─────────────┘
//!                              │
//!                     ┌────────▼────────┐
//!                     │ Explicit Solver │ ← The method
//!                     └────────┬────────┘
//!                              │
//!                     ┌────────▼────────────┐
//!                     │ Simulation Result   │ ← The solution
//!                     │ (trajectory + meta) │
//!                     └─────────────────────┘
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod boundary;
mod scenario;
mod methods;
pub mod grid;
pub mod stability;
pub mod stencil;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{
    SimulationResult,
    Solver,
    SolverConfiguration,
};

pub use boundary::{BoundaryMode, DomainBoundaries};
pub use scenario::Scenario;

pub use methods::ExplicitSolver;

pub use grid::{make_grid, Grid, MAX_GRID_POINTS};
pub use stability::{calculate_time_step, check_time_step, fourier_number};
pub use stencil::{apply_stencil, solve_1d_diffusion, DiffusionStepper, Stencil, MIN_STENCIL_POINTS};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::error::{DiffusionError, DiffusionResult};
use crate::physics::PhysicalState;

/// Validate physical state for numerical issues
///
/// Checks that no quantity of the state holds NaN or infinite values, which
/// would mean the scheme went unstable.
///
/// # Arguments
///
/// * `state` - Physical state to validate
/// * `step` - Current time step (for error reporting)
pub(crate) fn validate_state(state: &PhysicalState, step: usize) -> DiffusionResult<()> {
    for (quantity, values) in &state.quantities {
        if values.iter().any(|v| !v.is_finite()) {
            return Err(DiffusionError::NumericalInstability {
                quantity: *quantity,
                step,
            });
        }
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::PhysicalQuantity;

    #[test]
    fn test_validate_finite_state() {
        let state = PhysicalState::from_vec(PhysicalQuantity::Concentration, vec![500.0, 250.0, 0.0]);
        assert!(validate_state(&state, 1).is_ok());
    }

    #[test]
    fn test_validate_nan_state() {
        let state = PhysicalState::from_vec(PhysicalQuantity::Temperature, vec![500.0, f64::NAN, 0.0]);
        match validate_state(&state, 7) {
            Err(DiffusionError::NumericalInstability { quantity, step }) => {
                assert_eq!(quantity, PhysicalQuantity::Temperature);
                assert_eq!(step, 7);
            }
            other => panic!("expected NumericalInstability, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_infinite_value() {
        let state = PhysicalState::from_vec(PhysicalQuantity::Concentration, vec![0.0, f64::INFINITY]);
        assert!(validate_state(&state, 0).is_err());
    }
}
