//! Physical models traits and types
//!
//! This module defines the core API for physical models:
//! - `PhysicalModel`: trait for all physical models
//! - `PhysicalState`: flexible state container
//! - `PhysicalQuantity`: type-safe quantity identifiers

use std::collections::HashMap;
use std::fmt;

use nalgebra::DVector;

use crate::error::{DiffusionError, DiffusionResult};

// =================================================================================================
// Physical quantities (Type-safe Identifiers)
// =================================================================================================

/// Known physical quantities (type-safe enum)
///
/// The diffusion equation is the same for mass and heat, so the solver only
/// cares about the quantity as a key; `Custom` covers anything else.
///
/// # Example
/// ```
/// use diffusion_rs::physics::{PhysicalQuantity, PhysicalState};
/// use nalgebra::DVector;
///
/// let tracer = PhysicalQuantity::Custom("Tracer");
/// let mut state = PhysicalState::empty();
/// state.set(tracer, DVector::zeros(100));
/// assert!(state.get(tracer).is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalQuantity {
    /// Concentration (mass diffusion)
    Concentration,

    /// Temperature (heat diffusion)
    Temperature,

    /// Custom quantity (for use extension)
    Custom(&'static str),
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicalQuantity::Concentration => write!(f, "Concentration"),
            PhysicalQuantity::Temperature => write!(f, "Temperature"),
            PhysicalQuantity::Custom(name) => write!(f, "{}", name),
        }
    }
}

// =================================================================================================
// Physical State (Flexible State Container)
// =================================================================================================

/// Physical state of the system
///
/// One profile per physical quantity, each index-aligned with the grid.
///
/// # Example
/// ```
/// use diffusion_rs::physics::{PhysicalState, PhysicalQuantity};
///
/// let state = PhysicalState::from_vec(PhysicalQuantity::Concentration, vec![500.0, 500.0, 0.0, 0.0]);
/// assert_eq!(state.get(PhysicalQuantity::Concentration).unwrap().len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhysicalState {
    /// Profiles stored in a dictionary
    pub(crate) quantities: HashMap<PhysicalQuantity, DVector<f64>>,
}

impl PhysicalState {
    /// Create a new state with primary quantity
    pub fn new(quantity: PhysicalQuantity, values: DVector<f64>) -> Self {
        let mut quantities = HashMap::new();
        quantities.insert(quantity, values);
        Self { quantities }
    }

    /// Create a state from plain values
    pub fn from_vec(quantity: PhysicalQuantity, values: Vec<f64>) -> Self {
        Self::new(quantity, DVector::from_vec(values))
    }

    /// Create an empty state
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get a profile by quantity
    pub fn get(&self, quantity: PhysicalQuantity) -> Option<&DVector<f64>> {
        self.quantities.get(&quantity)
    }

    /// Get mutable reference to a profile
    pub fn get_mut(&mut self, quantity: PhysicalQuantity) -> Option<&mut DVector<f64>> {
        self.quantities.get_mut(&quantity)
    }

    /// Get a profile, or an error naming what is missing
    pub fn vector(&self, quantity: PhysicalQuantity) -> DiffusionResult<&DVector<f64>> {
        self.get(quantity).ok_or(DiffusionError::MissingQuantity(quantity))
    }

    /// Mutable counterpart of [`PhysicalState::vector`]
    pub fn vector_mut(&mut self, quantity: PhysicalQuantity) -> DiffusionResult<&mut DVector<f64>> {
        self.get_mut(quantity).ok_or(DiffusionError::MissingQuantity(quantity))
    }

    /// Set a profile
    pub fn set(&mut self, quantity: PhysicalQuantity, values: DVector<f64>) {
        self.quantities.insert(quantity, values);
    }
}

// =================================================================================================
// Physical Model Trait
// =================================================================================================

/// Trait for physical models
///
/// # Responsibility
/// Knows the equations of a system and how one explicit step of them moves
/// a state. Does NOT decide how many steps to take or how long (that's the
/// Solver's job).
///
/// The model provides the "physics" (the update), the Solver provides
/// the "numerics" (the time loop, validation, bookkeeping).
pub trait PhysicalModel {

    /// Number of spatial points
    ///
    /// Used by the solver to check state lengths
    fn points(&self) -> usize;

    /// Advance `state` by one explicit step of length `dt`, in place
    ///
    /// `workspace` is scratch storage kept alive by the solver across steps,
    /// so stencil kernels do not allocate per step.
    ///
    /// # Errors
    /// Returns an error when the state lacks a quantity the model needs or
    /// has the wrong length.
    fn advance(&self, state: &mut PhysicalState, dt: f64, workspace: &mut Vec<f64>) -> DiffusionResult<()>;

    /// Largest time step the explicit update tolerates, if the model has one
    fn max_stable_time_step(&self) -> Option<f64> {
        None
    }

    /// Creates the initial state for this physical model
    fn setup_initial_state(&self) -> PhysicalState;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }
}
