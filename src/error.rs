//! Error types shared by the whole crate
//!
//! Every fallible operation returns [`DiffusionResult`]. Numeric preconditions
//! (spacing, diffusivity, time step) are checked up front instead of letting a
//! division by zero leak infinities into the concentration array.

use thiserror::Error;

use crate::physics::PhysicalQuantity;

/// Crate-wide result alias
pub type DiffusionResult<T> = Result<T, DiffusionError>;

/// Errors raised while building, running or exporting a diffusion simulation
#[derive(Debug, Error)]
pub enum DiffusionError {
    /// Grid spacing must be strictly positive and finite
    #[error("invalid grid spacing {spacing}: must be > 0, finite and resolvable over the domain")]
    InvalidGridSpacing { spacing: f64 },

    /// Diffusivity must be strictly positive and finite
    #[error("invalid diffusivity {diffusivity}: must be > 0 and finite")]
    InvalidDiffusivity { diffusivity: f64 },

    /// Time step must be strictly positive and finite
    #[error("invalid time step {time_step}: must be > 0 and finite")]
    InvalidTimeStep { time_step: f64 },

    /// Time step exceeds the explicit-scheme stability bound 0.5·dx²/D
    #[error("time step {time_step} exceeds the stability limit {limit}")]
    UnstableTimeStep { time_step: f64, limit: f64 },

    /// Upper bound of the domain is not above its origin
    #[error("invalid domain [{origin}, {domain_size}): upper bound must exceed origin")]
    InvalidDomain { origin: f64, domain_size: f64 },

    /// Configuration rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Array too short to contain an interior point
    #[error("array of length {len} has no interior point, diffusion step is a no-op")]
    DegenerateArray { len: usize },

    /// Concentration and grid lengths disagree
    #[error("length mismatch: expected {expected} points, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// NaN or infinity appeared during stepping
    #[error("non-finite value in {quantity} at step {step}; reduce the time step")]
    NumericalInstability {
        quantity: PhysicalQuantity,
        step: usize,
    },

    /// A state did not carry the quantity the caller asked for
    #[error("quantity {0} not found in state")]
    MissingQuantity(PhysicalQuantity),

    /// Plotting or export backend failure
    #[error("output failed: {0}")]
    Output(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DiffusionError {
    /// Wrap a boxed backend error (plotters, csv writer) into [`DiffusionError::Output`]
    pub fn output(err: impl std::fmt::Display) -> Self {
        Self::Output(err.to_string())
    }
}
