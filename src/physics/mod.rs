//! Physical models
//!
//! This module provides traits and types for physical models.
//! A physical model encapsulates the equations of a system; for this crate
//! that is the 1D diffusion equation ∂C/∂t = D·∂²C/∂x², which covers both
//! mass (concentration) and heat (temperature) diffusion.
//!
//! # Core Concepts
//!
//! - **Physical Model**: Advances a state by one explicit step
//! - **Physical State**: One profile per physical quantity
//! - **Physical Quantity**: Type-safe identifier for physical variables
//!
//! # Architecture
//!
//! Physical models are **separate from numerical solvers**:
//! - The model provides the **equations** (physics)
//! - The solver provides the **method** to solve them (numerics)
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::error::DiffusionResult;
//! use diffusion_rs::physics::{PhysicalModel, PhysicalState, PhysicalQuantity};
//!
//! struct Relax;
//!
//! impl PhysicalModel for Relax {
//!     fn points(&self) -> usize { 3 }
//!
//!     fn advance(&self, state: &mut PhysicalState, dt: f64, _workspace: &mut Vec<f64>) -> DiffusionResult<()> {
//!         let c = state.vector_mut(PhysicalQuantity::Concentration)?;
//!         *c *= 1.0 - dt;
//!         Ok(())
//!     }
//!
//!     fn setup_initial_state(&self) -> PhysicalState {
//!         PhysicalState::from_vec(PhysicalQuantity::Concentration, vec![1.0; 3])
//!     }
//!
//!     fn name(&self) -> &str { "Relax" }
//! }
//!
//! let model = Relax;
//! let mut state = model.setup_initial_state();
//! model.advance(&mut state, 0.5, &mut Vec::new()).unwrap();
//! assert_eq!(state.get(PhysicalQuantity::Concentration).unwrap()[0], 0.5);
//! ```
//!
//! # Available Models
//!
//! - **Linear diffusion 1D** ([`crate::models::LinearDiffusion1D`]): explicit
//!   centred-difference diffusion with constant diffusivity

pub mod traits;

pub use traits::{
    PhysicalModel,
    PhysicalQuantity,
    PhysicalState, };
