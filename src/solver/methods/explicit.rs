//! Explicit forward-time solver
//!
//! # Mathematical Background
//!
//! For dy/dt = f(y) the state at t_{n+1} = t_n + dt is advanced with
//!
//! ```text
//! y_{n+1} = y_n + dt * f(y_n)
//! ```
//!
//! Models override [`PhysicalModel::advance`](crate::physics::PhysicalModel::advance)
//! to apply the step in place; for the diffusion model that is the
//! forward-time centred-space (FTCS) stencil.
//!
//! # Characteristics
//!
//! - **Order**: first order in time, second order in space (FTCS)
//! - **Stability**: conditional, `dt ≤ 0.5·dx²/D` for diffusion
//! - **Memory**: one state plus one scratch buffer, reused every step
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::models::LinearDiffusion1D;
//! use diffusion_rs::physics::PhysicalModel;
//! use diffusion_rs::solver::{DomainBoundaries, ExplicitSolver, Scenario, Solver, SolverConfiguration};
//!
//! let model = LinearDiffusion1D::new(10, 1.0, 1.0, 500.0, 0.0).unwrap();
//! let initial = model.setup_initial_state();
//! let scenario = Scenario::new(Box::new(model), DomainBoundaries::fixed(500.0, 0.0, initial));
//!
//! let config = SolverConfiguration::time_evolution(0.5, 100);
//! let result = ExplicitSolver::new().solve(&scenario, &config).unwrap();
//! assert_eq!(result.len(), 2);
//! ```

use log::trace;

use crate::error::{DiffusionError, DiffusionResult};
use crate::physics::PhysicalState;
use crate::solver;
use crate::solver::{Scenario, SimulationResult, Solver, SolverConfiguration};

// =================================================================================================
// Explicit Solver
// =================================================================================================

/// Forward-time explicit solver
///
/// # Algorithm
///
/// 1. Start with the initial state of the scenario boundaries
/// 2. For each step n = 0, 1, ..., N-1:
///    - advance the state in place through the model
///    - re-apply fixed boundaries
///    - reject NaN or infinite values
///    - record the state when the snapshot policy asks for it
/// 3. Return the recorded trajectory
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitSolver;

impl ExplicitSolver {
    /// Create a new explicit solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use diffusion_rs::solver::{ExplicitSolver, Solver};
    ///
    /// let solver = ExplicitSolver::new();
    /// assert_eq!(solver.name(), "Explicit FTCS");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for ExplicitSolver {

    fn solve(&self, scenario: &Scenario, config: &SolverConfiguration) -> DiffusionResult<SimulationResult> {

        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        let dt = config.time_step;
        let time_steps = config.time_steps;

        if let Some(limit) = scenario.model.max_stable_time_step()
            && dt > limit * (1.0 + 1e-12) {
                return Err(DiffusionError::UnstableTimeStep { time_step: dt, limit });
            }

        // ====== Step 2: Setup ======

        let mut state: PhysicalState = scenario
            .conditions
            .initial_condition()
            .cloned()
            .ok_or_else(|| {
                DiffusionError::InvalidConfiguration("no initial condition in domain boundaries".into())
            })?;

        let recorded = 2 + config.snapshot_interval.map_or(0, |interval| time_steps / interval);
        let mut time_points = Vec::with_capacity(recorded);
        let mut state_trajectory = Vec::with_capacity(recorded);

        time_points.push(0.0);
        state_trajectory.push(state.clone());

        // scratch buffer shared by every step
        let mut workspace: Vec<f64> = Vec::with_capacity(scenario.points());

        // ====== Step 3: Time Integration ======

        for step in 0..time_steps {
            scenario.model.advance(&mut state, dt, &mut workspace)?;
            scenario.conditions.enforce(&mut state)?;

            solver::validate_state(&state, step + 1)?;

            if config.records(step + 1) {
                // t_{n+1} from the index, not by accumulating dt
                time_points.push((step as f64 + 1.0) * dt);
                state_trajectory.push(state.clone());
            }

            trace!("step {}/{} done", step + 1, time_steps);
        }

        // ====== Step 4: Build Result ======

        let mut result = SimulationResult::new(time_points, state_trajectory, state);

        result.add_metadata("solver", self.name());
        result.add_metadata("model", scenario.get_model_name());
        result.add_metadata("boundary mode", &scenario.conditions.mode.to_string());
        result.add_metadata("time steps", &time_steps.to_string());
        result.add_metadata("dt", &dt.to_string());
        result.add_metadata("total time", &config.total_time().to_string());

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Explicit FTCS"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{PhysicalModel, PhysicalQuantity};
    use crate::solver::boundary::DomainBoundaries;
    use nalgebra::DVector;

    // ====== Mock Models for Testing ======

    /// dy/dt = c, exact solution y(t) = y_0 + c·t
    struct ConstantGrowth {
        points: usize,
        growth_rate: f64,
    }

    impl PhysicalModel for ConstantGrowth {
        fn points(&self) -> usize {
            self.points
        }

        fn advance(&self, state: &mut PhysicalState, dt: f64, _workspace: &mut Vec<f64>) -> DiffusionResult<()> {
            let values = state.vector_mut(PhysicalQuantity::Concentration)?;
            values.add_scalar_mut(self.growth_rate * dt);
            Ok(())
        }

        fn setup_initial_state(&self) -> PhysicalState {
            PhysicalState::new(PhysicalQuantity::Concentration, DVector::zeros(self.points))
        }

        fn name(&self) -> &str {
            "Constant Growth"
        }
    }

    /// Explodes after the first step
    struct Blowup;

    impl PhysicalModel for Blowup {
        fn points(&self) -> usize {
            3
        }

        fn advance(&self, state: &mut PhysicalState, _dt: f64, _workspace: &mut Vec<f64>) -> DiffusionResult<()> {
            state.vector_mut(PhysicalQuantity::Concentration)?.fill(f64::INFINITY);
            Ok(())
        }

        fn max_stable_time_step(&self) -> Option<f64> {
            Some(1.0)
        }

        fn setup_initial_state(&self) -> PhysicalState {
            PhysicalState::new(PhysicalQuantity::Concentration, DVector::zeros(3))
        }

        fn name(&self) -> &str {
            "Blowup"
        }
    }

    fn growth_scenario(mode_fixed: bool) -> Scenario {
        let model = Box::new(ConstantGrowth { points: 4, growth_rate: 2.0 });
        let initial = model.setup_initial_state();
        let boundaries = if mode_fixed {
            DomainBoundaries::fixed(-1.0, -2.0, initial)
        } else {
            DomainBoundaries::free(0.0, 0.0, initial)
        };
        Scenario::new(model, boundaries)
    }

    #[test]
    fn test_solver_name() {
        assert_eq!(ExplicitSolver::default().name(), "Explicit FTCS");
    }

    #[test]
    fn test_constant_growth_is_exact() {
        let config = SolverConfiguration::time_evolution(0.1, 10);
        let result = ExplicitSolver::new().solve(&growth_scenario(false), &config).unwrap();

        let values = result.final_state.vector(PhysicalQuantity::Concentration).unwrap();
        for v in values.iter() {
            assert!((v - 2.0).abs() < 1e-12);
        }
        assert!((result.final_time() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fixed_boundaries_are_enforced() {
        let config = SolverConfiguration::time_evolution(0.1, 10);
        let result = ExplicitSolver::new().solve(&growth_scenario(true), &config).unwrap();

        let values = result.final_state.vector(PhysicalQuantity::Concentration).unwrap();
        assert_eq!(values[0], -1.0);
        assert_eq!(values[3], -2.0);
        assert!((values[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_only_initial_and_final_recorded_by_default() {
        let config = SolverConfiguration::time_evolution(0.1, 10);
        let result = ExplicitSolver::new().solve(&growth_scenario(false), &config).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.time_points[0], 0.0);
    }

    #[test]
    fn test_snapshot_interval() {
        let config = SolverConfiguration::time_evolution(0.1, 10).with_snapshot_interval(3);
        let result = ExplicitSolver::new().solve(&growth_scenario(false), &config).unwrap();

        // 0, 3, 6, 9, 10
        assert_eq!(result.len(), 5);
        assert!((result.time_points[1] - 0.3).abs() < 1e-12);
        assert!((result.time_points[4] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_steps_returns_initial_state() {
        let config = SolverConfiguration::time_evolution(0.1, 0);
        let result = ExplicitSolver::new().solve(&growth_scenario(false), &config).unwrap();
        assert_eq!(result.len(), 1);
        let values = result.final_state.vector(PhysicalQuantity::Concentration).unwrap();
        assert!(values.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_unstable_time_step_is_rejected() {
        let model = Box::new(Blowup);
        let initial = model.setup_initial_state();
        let scenario = Scenario::new(model, DomainBoundaries::free(0.0, 0.0, initial));

        let config = SolverConfiguration::time_evolution(2.0, 1);
        assert!(matches!(
            ExplicitSolver::new().solve(&scenario, &config),
            Err(DiffusionError::UnstableTimeStep { .. })
        ));
    }

    #[test]
    fn test_non_finite_state_is_reported() {
        let model = Box::new(Blowup);
        let initial = model.setup_initial_state();
        let scenario = Scenario::new(model, DomainBoundaries::free(0.0, 0.0, initial));

        let config = SolverConfiguration::time_evolution(0.5, 5);
        match ExplicitSolver::new().solve(&scenario, &config) {
            Err(DiffusionError::NumericalInstability { step, .. }) => assert_eq!(step, 1),
            other => panic!("expected NumericalInstability, got {:?}", other),
        }
    }

    #[test]
    fn test_metadata() {
        let config = SolverConfiguration::time_evolution(0.1, 10);
        let result = ExplicitSolver::new().solve(&growth_scenario(true), &config).unwrap();
        assert_eq!(result.get_metadata("solver"), Some("Explicit FTCS"));
        assert_eq!(result.get_metadata("model"), Some("Constant Growth"));
        assert_eq!(result.get_metadata("boundary mode"), Some("fixed"));
        assert_eq!(result.get_metadata("time steps"), Some("10"));
    }
}
