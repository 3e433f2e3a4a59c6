//! Simulation scenario definition
//!
//! A scenario combines a physical model with boundary conditions.
use crate::error::{DiffusionError, DiffusionResult};
use crate::physics::traits::PhysicalModel;
use crate::solver::boundary::DomainBoundaries;

/// Simulation scenario
///
/// Defines a specific case to simulate:
/// - Physical model (equations)
/// - Boundary conditions (domain boundaries)
///
/// This is the "WHAT to solve" (not "HOW to solve").
pub struct Scenario {
    /// Physical model (equations)
    pub model: Box<dyn PhysicalModel>,

    /// Conditions and boundaries
    pub conditions: DomainBoundaries,
}

impl Scenario {

    /// Create a scenario
    pub fn new(model: Box<dyn PhysicalModel>, conditions: DomainBoundaries) -> Self {
        Self { model, conditions }
    }

    /// Check boundaries and that the initial state matches the model size
    pub fn validate(&self) -> DiffusionResult<()> {
        self.conditions.validate()?;

        let expected = self.model.points();
        if let Some(initial) = self.conditions.initial_condition() {
            let found = initial.vector(self.conditions.quantity)?.len();
            if found != expected {
                return Err(DiffusionError::LengthMismatch { expected, found });
            }
        }

        Ok(())
    }

    /// Get model name
    pub fn get_model_name(&self) -> &str {
        self.model.name()
    }

    /// Number of spatial points of the model
    pub fn points(&self) -> usize {
        self.model.points()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
        .field("name", &self.get_model_name())
        .field("points", &self.points())
        .field("Boundaries / conditions", &self.conditions)
        .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
