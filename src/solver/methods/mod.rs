//! Numerical methods for time integration
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Available Methods
//!
//! - **[`ExplicitSolver`]**: forward-time stepping, in place
//!   - Order: first order in time
//!   - Cost: one model update per step, no allocation inside the loop
//!   - Use: diffusion with the FTCS stencil under `dt ≤ 0.5·dx²/D`

mod explicit;

pub use explicit::ExplicitSolver;
