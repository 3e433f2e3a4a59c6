//! diffusion-rs: 1D Diffusion Simulation
//!
//! Solves the one-dimensional diffusion equation
//!
//! ```text
//! ∂C/∂t = D · ∂²C/∂x²
//! ```
//!
//! with explicit finite differences (forward Euler in time, centred second
//! difference in space), then plots or exports the initial and final
//! profiles.
//!
//! # Architecture
//!
//! 1. **Separation of Physics and Numerics**
//!    - Physical models define equations (what to solve)
//!    - Numerical solvers provide methods (how to solve)
//!
//! 2. **Thin driver on top**
//!    - [`driver::run_simulation`] builds the grid, the stable time step and
//!      the initial profile, steps `nt` times and returns both profiles
//!
//! # Quick Start
//!
//! ```rust
//! use diffusion_rs::prelude::*;
//!
//! # fn main() -> DiffusionResult<()> {
//! let config = SimulationConfig::default().time_steps(100);
//! let run = run_simulation(&config)?;
//!
//! assert_eq!(run.grid.len(), 600);
//! assert_eq!(run.final_profile[0], 500.0);
//! println!("mean after {} s: {}", run.final_time(), run.mean());
//! # Ok(())
//! # }
//! ```
//!
//! Lower level, the stepper works on any `DVector<f64>`:
//!
//! ```rust
//! use diffusion_rs::prelude::*;
//!
//! # fn main() -> DiffusionResult<()> {
//! let grid = make_grid(0.0, 100.0, 1.0)?;
//! let dt = calculate_time_step(grid.spacing(), 1.0)?;
//! let mut c = set_initial_profile(grid.len(), 500.0, 0.0);
//!
//! let mut stepper = DiffusionStepper::new(grid.spacing(), dt, 1.0, Stencil::Interior)?;
//! for _ in 0..1000 {
//!     stepper.step(&mut c);
//! }
//! assert!(c.iter().all(|&v| (-1e-9..=500.0 + 1e-9).contains(&v)));
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error type shared by the crate
//! - [`physics`]: Physical models (equations)
//! - [`models`]: The diffusion model and initial profiles
//! - [`solver`]: Grid, stability bound, stencil and time stepping
//! - [`driver`]: End-to-end run
//! - [`output`]: Plots and CSV export

// Core modules
pub mod error;
pub mod physics;

pub mod models;
pub mod solver;

pub mod driver;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use diffusion_rs::prelude::*;
    //! ```
    pub use crate::error::{DiffusionError, DiffusionResult};
    pub use crate::physics::{PhysicalQuantity,
                             PhysicalState,
                             PhysicalModel};
    pub use crate::models::{set_initial_profile, InitialProfile, LinearDiffusion1D};
    pub use crate::solver::{calculate_time_step,
                            make_grid,
                            solve_1d_diffusion,
                            BoundaryMode,
                            DiffusionStepper,
                            DomainBoundaries,
                            ExplicitSolver,
                            Grid,
                            Scenario,
                            SimulationResult,
                            Solver,
                            SolverConfiguration,
                            Stencil};
    pub use crate::driver::{run_simulation, run_simulation_with, SimulationConfig, SimulationRun};
    pub use crate::output::{ProfileSink, ProfileSnapshot};
}
