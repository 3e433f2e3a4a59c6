//! Numerical solver traits and types
//!
//! # Design
//!
//! - `Solver` trait: the numerical method, independent of the physics
//! - `SolverConfiguration`: how long to integrate and how often to record
//! - `SimulationResult`: recorded trajectory plus string metadata

use std::collections::HashMap;

use crate::error::{DiffusionError, DiffusionResult};
use crate::physics::PhysicalState;
use crate::solver::Scenario;

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration for a time-stepping solver
///
/// # Examples
///
/// ```rust
/// use diffusion_rs::solver::SolverConfiguration;
///
/// let config = SolverConfiguration::time_evolution(0.00125, 5000)
///     .with_snapshot_interval(500);
///
/// assert!(config.validate().is_ok());
/// assert!((config.total_time() - 6.25).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfiguration {
    /// Time step dt
    pub time_step: f64,

    /// Number of steps to take
    pub time_steps: usize,

    /// Record the state every `n` steps (initial and final are always recorded)
    pub snapshot_interval: Option<usize>,
}

impl SolverConfiguration {
    /// Fixed step integration over `time_steps` steps of length `time_step`
    pub fn time_evolution(time_step: f64, time_steps: usize) -> Self {
        Self {
            time_step,
            time_steps,
            snapshot_interval: None,
        }
    }

    /// Record intermediate states every `interval` steps
    pub fn with_snapshot_interval(mut self, interval: usize) -> Self {
        self.snapshot_interval = Some(interval);
        self
    }

    /// Physical time reached at the end of the run
    pub fn total_time(&self) -> f64 {
        self.time_step * self.time_steps as f64
    }

    /// Validate configuration
    ///
    /// Zero steps is valid (the result holds only the initial state).
    pub fn validate(&self) -> DiffusionResult<()> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(DiffusionError::InvalidTimeStep { time_step: self.time_step });
        }

        if let Some(interval) = self.snapshot_interval
            && interval == 0 {
                return Err(DiffusionError::InvalidConfiguration(
                    "snapshot interval must be greater than 0".to_string(),
                ));
            }

        Ok(())
    }

    /// True when the state after `step` steps has to be recorded
    pub(crate) fn records(&self, step: usize) -> bool {
        step == self.time_steps
            || self.snapshot_interval.is_some_and(|interval| step % interval == 0)
    }
}

// =================================================================================================
// Simulation result
// =================================================================================================

/// Output of a solver run
///
/// `time_points[k]` is the physical time of `state_trajectory[k]`. The first
/// entry is always the initial state at t = 0, the last one the final state.
#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// Times of the recorded states
    pub time_points: Vec<f64>,

    /// Recorded states
    pub state_trajectory: Vec<PhysicalState>,

    /// State after the last step
    pub final_state: PhysicalState,

    /// Free-form diagnostics (solver name, dt, ...)
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Create a new result
    pub fn new(
        time_points: Vec<f64>,
        state_trajectory: Vec<PhysicalState>,
        final_state: PhysicalState,
    ) -> Self {
        Self {
            time_points,
            state_trajectory,
            final_state,
            metadata: HashMap::new(),
        }
    }

    /// Add one metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Metadata lookup
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Number of recorded states
    pub fn len(&self) -> usize {
        self.state_trajectory.len()
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.state_trajectory.is_empty()
    }

    /// State at t = 0
    pub fn initial_state(&self) -> Option<&PhysicalState> {
        self.state_trajectory.first()
    }

    /// Time of the final state
    pub fn final_time(&self) -> f64 {
        self.time_points.last().copied().unwrap_or(0.0)
    }

    /// Iterate over `(time, state)` pairs
    pub fn snapshots(&self) -> impl Iterator<Item = (f64, &PhysicalState)> {
        self.time_points.iter().copied().zip(self.state_trajectory.iter())
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// A numerical method applied to a [`Scenario`]
pub trait Solver {
    /// Integrate the scenario according to `config`
    fn solve(&self, scenario: &Scenario, config: &SolverConfiguration) -> DiffusionResult<SimulationResult>;

    /// Human readable solver name
    fn name(&self) -> &'static str;
}
