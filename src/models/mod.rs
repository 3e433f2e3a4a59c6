//! Physical models for diffusion simulation
//!
//! All models implement the [`PhysicalModel`](crate::physics::PhysicalModel) trait.
//! Models are responsible for the physics (the diffusion rate and its stencil),
//! the solver for the time loop.
//!
//! # Available Models
//!
//! ## [`LinearDiffusion1D`]: constant diffusivity
//!
//! Mass or heat diffusion on a uniform 1D grid with the explicit FTCS update.
//!
//! # Initial profiles
//!
//! [`set_initial_profile`] and [`InitialProfile`] define C(x, t=0): a step
//! between the left and right boundary values.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod diffusion;
pub mod profile;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use diffusion::LinearDiffusion1D;
pub use profile::{set_initial_profile, InitialProfile};
