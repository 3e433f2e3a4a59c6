//! Simulation driver
//!
//! Wires the pieces together for one run:
//!
//! ```text
//! Init ──► GridBuilt ──► ProfileSet ──► Stepping ──► Done
//!  │          │              │              │
//!  │          make_grid      initial        nt explicit steps
//!  validate   + dt           profile        (solver)
//! ```
//!
//! The initial and final profiles are handed to an optional
//! [`ProfileSink`] (plots, CSV). The first error aborts the run.
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::driver::{run_simulation, SimulationConfig};
//!
//! let config = SimulationConfig::default()
//!     .domain_length(50.0)
//!     .time_steps(200);
//!
//! let run = run_simulation(&config).unwrap();
//! assert_eq!(run.grid.len(), 100);
//! assert_eq!(run.final_profile[0], 500.0);
//! assert_eq!(run.final_profile[99], 0.0);
//! ```

use std::fmt;

use log::{debug, info, warn};
use nalgebra::DVector;
use plotters::style::{BLUE, RED};

use crate::error::{DiffusionError, DiffusionResult};
use crate::models::{InitialProfile, LinearDiffusion1D};
use crate::output::{ProfileSink, ProfileSnapshot};
use crate::physics::{PhysicalModel, PhysicalQuantity};
use crate::solver::{
    calculate_time_step, make_grid, BoundaryMode, DomainBoundaries, ExplicitSolver, Grid, Scenario,
    SimulationResult, Solver, SolverConfiguration, Stencil, MIN_STENCIL_POINTS,
};

/// Title of the profile handed to the sink before stepping
pub const INITIAL_TITLE: &str = "Initial concentration profile";

/// Title of the profile handed to the sink after stepping
pub const FINAL_TITLE: &str = "Final concentration profile";

// =================================================================================================
// Configuration
// =================================================================================================

/// Inputs of one run
///
/// # Example
///
/// ```rust
/// use diffusion_rs::driver::SimulationConfig;
/// use diffusion_rs::solver::{BoundaryMode, Stencil};
///
/// let config = SimulationConfig::default();
/// assert_eq!(config.diffusivity, 100.0);
/// assert_eq!(config.domain_length, 300.0);
/// assert_eq!(config.grid_spacing, 0.5);
/// assert_eq!(config.time_steps, 5000);
/// assert_eq!(config.boundary_mode, BoundaryMode::Fixed);
/// assert_eq!(config.stencil, Stencil::Interior);
///
/// let periodic = config.stencil(Stencil::Periodic).boundary_mode(BoundaryMode::Free);
/// assert!(periodic.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Diffusivity D (default: 100)
    pub diffusivity: f64,

    /// Upper, exclusive bound of the domain Lx (default: 300)
    pub domain_length: f64,

    /// Grid spacing dx (default: 0.5)
    pub grid_spacing: f64,

    /// Lower bound of the domain (default: 0)
    pub origin: f64,

    /// Left value C_left (default: 500)
    pub boundary_left: f64,

    /// Right value C_right (default: 0)
    pub boundary_right: f64,

    /// Number of steps nt (default: 5000)
    pub time_steps: usize,

    /// End enforcement (default: Fixed)
    pub boundary_mode: BoundaryMode,

    /// Stencil variant (default: Interior)
    pub stencil: Stencil,

    /// Shape of the initial profile (default: Step)
    pub initial_profile: InitialProfile,

    /// dt as a fraction of the stability bound, in (0, 1] (default: 1)
    pub stability_factor: f64,

    /// Keep every n-th intermediate profile (default: None)
    pub snapshot_interval: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            diffusivity: 100.0,
            domain_length: 300.0,
            grid_spacing: 0.5,
            origin: 0.0,
            boundary_left: 500.0,
            boundary_right: 0.0,
            time_steps: 5000,
            boundary_mode: BoundaryMode::Fixed,
            stencil: Stencil::Interior,
            initial_profile: InitialProfile::Step,
            stability_factor: 1.0,
            snapshot_interval: None,
        }
    }
}

impl SimulationConfig {
    /// Builder pattern: set diffusivity
    pub fn diffusivity(mut self, diffusivity: f64) -> Self {
        self.diffusivity = diffusivity;
        self
    }

    /// Builder pattern: set domain length
    pub fn domain_length(mut self, domain_length: f64) -> Self {
        self.domain_length = domain_length;
        self
    }

    /// Builder pattern: set grid spacing
    pub fn grid_spacing(mut self, grid_spacing: f64) -> Self {
        self.grid_spacing = grid_spacing;
        self
    }

    /// Builder pattern: set origin
    pub fn origin(mut self, origin: f64) -> Self {
        self.origin = origin;
        self
    }

    /// Builder pattern: set both boundary values
    pub fn boundaries(mut self, left: f64, right: f64) -> Self {
        self.boundary_left = left;
        self.boundary_right = right;
        self
    }

    /// Builder pattern: set number of steps
    pub fn time_steps(mut self, time_steps: usize) -> Self {
        self.time_steps = time_steps;
        self
    }

    /// Builder pattern: set boundary mode
    pub fn boundary_mode(mut self, mode: BoundaryMode) -> Self {
        self.boundary_mode = mode;
        self
    }

    /// Builder pattern: set stencil
    pub fn stencil(mut self, stencil: Stencil) -> Self {
        self.stencil = stencil;
        self
    }

    /// Builder pattern: set initial profile shape
    pub fn initial_profile(mut self, profile: InitialProfile) -> Self {
        self.initial_profile = profile;
        self
    }

    /// Builder pattern: set stability factor
    pub fn stability_factor(mut self, factor: f64) -> Self {
        self.stability_factor = factor;
        self
    }

    /// Builder pattern: keep every `interval`-th profile
    pub fn snapshot_interval(mut self, interval: usize) -> Self {
        self.snapshot_interval = Some(interval);
        self
    }

    /// Check every input before anything is allocated
    pub fn validate(&self) -> DiffusionResult<()> {
        if !self.grid_spacing.is_finite() || self.grid_spacing <= 0.0 {
            return Err(DiffusionError::InvalidGridSpacing { spacing: self.grid_spacing });
        }

        if !self.diffusivity.is_finite() || self.diffusivity <= 0.0 {
            return Err(DiffusionError::InvalidDiffusivity { diffusivity: self.diffusivity });
        }

        if !self.origin.is_finite() || !self.domain_length.is_finite() || self.domain_length <= self.origin {
            return Err(DiffusionError::InvalidDomain {
                origin: self.origin,
                domain_size: self.domain_length,
            });
        }

        if !self.boundary_left.is_finite() || !self.boundary_right.is_finite() {
            return Err(DiffusionError::InvalidConfiguration(format!(
                "boundary values must be finite (left = {}, right = {})",
                self.boundary_left, self.boundary_right
            )));
        }

        if !(self.stability_factor > 0.0 && self.stability_factor <= 1.0) {
            return Err(DiffusionError::InvalidConfiguration(format!(
                "stability factor {} must lie in (0, 1]",
                self.stability_factor
            )));
        }

        if let InitialProfile::Threshold { split } = self.initial_profile {
            if !split.is_finite() {
                return Err(DiffusionError::InvalidConfiguration(format!(
                    "threshold split {} must be finite",
                    split
                )));
            }
        }

        if self.snapshot_interval == Some(0) {
            return Err(DiffusionError::InvalidConfiguration(
                "snapshot interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

// =================================================================================================
// Driver
// =================================================================================================

/// Progress of a [`Driver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverPhase {
    #[default]
    Init,
    GridBuilt,
    ProfileSet,
    Stepping,
    Done,
}

impl fmt::Display for DriverPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DriverPhase::Init => "init",
            DriverPhase::GridBuilt => "grid built",
            DriverPhase::ProfileSet => "profile set",
            DriverPhase::Stepping => "stepping",
            DriverPhase::Done => "done",
        };
        f.write_str(name)
    }
}

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct SimulationRun {
    /// Grid the run was computed on
    pub grid: Grid,

    /// Time step used
    pub time_step: f64,

    /// Profile before the first step
    pub initial_profile: DVector<f64>,

    /// Profile after the last step
    pub final_profile: DVector<f64>,

    /// Solver output (snapshots, metadata)
    pub result: SimulationResult,
}

impl SimulationRun {
    /// Grid coordinates
    pub fn coordinates(&self) -> &[f64] {
        self.grid.coordinates()
    }

    /// Physical time reached
    pub fn final_time(&self) -> f64 {
        self.result.final_time()
    }

    /// Mean of the final profile (0 for an empty grid)
    pub fn mean(&self) -> f64 {
        if self.final_profile.is_empty() {
            0.0
        } else {
            self.final_profile.mean()
        }
    }

    /// Integral of the final profile, `Σ C·dx`
    pub fn total_mass(&self) -> f64 {
        self.final_profile.sum() * self.grid.spacing()
    }
}

/// Runs one configuration through the phases of [`DriverPhase`]
#[derive(Debug, Clone)]
pub struct Driver {
    config: SimulationConfig,
    phase: DriverPhase,
}

impl Driver {
    /// Driver in the `Init` phase
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            phase: DriverPhase::Init,
        }
    }

    /// Current phase (`Done` after a successful run)
    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    /// Configuration of this driver
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    fn enter(&mut self, phase: DriverPhase) {
        debug!("driver: {} -> {}", self.phase, phase);
        self.phase = phase;
    }

    /// Execute the run, handing the initial and final profiles to `sink`
    ///
    /// # Errors
    ///
    /// Invalid configuration, solver failures (instability, NaN) and sink
    /// failures. No recovery is attempted.
    pub fn run(&mut self, mut sink: Option<&mut dyn ProfileSink>) -> DiffusionResult<SimulationRun> {
        let config = self.config.clone();

        // ====== Step 1: Validation ======

        config.validate()?;

        // ====== Step 2: Grid and time step ======

        let grid = make_grid(config.origin, config.domain_length, config.grid_spacing)?;
        let time_step = calculate_time_step(config.grid_spacing, config.diffusivity)? * config.stability_factor;

        if grid.len() < MIN_STENCIL_POINTS {
            warn!("{}", DiffusionError::DegenerateArray { len: grid.len() });
        }

        self.enter(DriverPhase::GridBuilt);
        debug!("grid: {} points, dx = {}, dt = {}", grid.len(), grid.spacing(), time_step);

        // ====== Step 3: Initial profile ======

        let model = LinearDiffusion1D::from_grid(&grid, config.diffusivity, config.boundary_left, config.boundary_right)?
            .with_stencil(config.stencil)
            .with_profile(config.initial_profile);

        let initial_state = model.setup_initial_state();
        let initial_profile = initial_state.vector(PhysicalQuantity::Concentration)?.clone();

        self.enter(DriverPhase::ProfileSet);

        if let Some(sink) = sink.as_deref_mut() {
            sink.receive(&ProfileSnapshot::new(
                grid.coordinates(),
                initial_profile.as_slice(),
                0.0,
                INITIAL_TITLE,
                RED,
            ))?;
        }

        // ====== Step 4: Stepping ======

        let boundaries = DomainBoundaries::new(
            config.boundary_mode,
            config.boundary_left,
            config.boundary_right,
            initial_state,
        );
        let scenario = Scenario::new(Box::new(model), boundaries);

        let mut solver_config = SolverConfiguration::time_evolution(time_step, config.time_steps);
        solver_config.snapshot_interval = config.snapshot_interval;

        self.enter(DriverPhase::Stepping);
        let result = ExplicitSolver::new().solve(&scenario, &solver_config)?;

        let final_profile = result.final_state.vector(PhysicalQuantity::Concentration)?.clone();

        // ====== Step 5: Final profile ======

        if let Some(sink) = sink.as_deref_mut() {
            sink.receive(&ProfileSnapshot::new(
                grid.coordinates(),
                final_profile.as_slice(),
                result.final_time(),
                FINAL_TITLE,
                BLUE,
            ))?;
        }

        self.enter(DriverPhase::Done);

        let run = SimulationRun {
            grid,
            time_step,
            initial_profile,
            final_profile,
            result,
        };

        info!(
            "diffusion run done: {} points, {} steps of dt = {}, t = {}, mean = {:.6}",
            run.grid.len(),
            config.time_steps,
            run.time_step,
            run.final_time(),
            run.mean()
        );

        Ok(run)
    }
}

// =================================================================================================
// Entry points
// =================================================================================================

/// Run `config` without any output
pub fn run_simulation(config: &SimulationConfig) -> DiffusionResult<SimulationRun> {
    Driver::new(config.clone()).run(None)
}

/// Run `config`, handing the initial and final profiles to `sink`
pub fn run_simulation_with(config: &SimulationConfig, sink: &mut dyn ProfileSink) -> DiffusionResult<SimulationRun> {
    Driver::new(config.clone()).run(Some(sink))
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        snapshots: Vec<(String, f64, Vec<f64>)>,
    }

    impl ProfileSink for Recorder {
        fn receive(&mut self, snapshot: &ProfileSnapshot<'_>) -> DiffusionResult<()> {
            self.snapshots.push((snapshot.title.to_string(), snapshot.time, snapshot.values.to_vec()));
            Ok(())
        }
    }

    struct Failing;

    impl ProfileSink for Failing {
        fn receive(&mut self, _snapshot: &ProfileSnapshot<'_>) -> DiffusionResult<()> {
            Err(DiffusionError::Output("disk full".to_string()))
        }
    }

    fn small() -> SimulationConfig {
        SimulationConfig::default()
            .diffusivity(1.0)
            .domain_length(10.0)
            .grid_spacing(1.0)
            .time_steps(1)
    }

    #[test]
    fn test_validation() {
        assert!(SimulationConfig::default().validate().is_ok());
        assert!(matches!(
            SimulationConfig::default().grid_spacing(0.0).validate(),
            Err(DiffusionError::InvalidGridSpacing { .. })
        ));
        assert!(matches!(
            SimulationConfig::default().diffusivity(-1.0).validate(),
            Err(DiffusionError::InvalidDiffusivity { .. })
        ));
        assert!(matches!(
            SimulationConfig::default().origin(300.0).validate(),
            Err(DiffusionError::InvalidDomain { .. })
        ));
        assert!(SimulationConfig::default().stability_factor(0.0).validate().is_err());
        assert!(SimulationConfig::default().stability_factor(1.5).validate().is_err());
        assert!(SimulationConfig::default().snapshot_interval(0).validate().is_err());
        assert!(SimulationConfig::default().boundaries(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn test_threshold_split_must_be_finite() {
        for split in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let config = SimulationConfig::default().initial_profile(InitialProfile::Threshold { split });
            assert!(matches!(config.validate(), Err(DiffusionError::InvalidConfiguration(_))));
        }

        // Any finite split is accepted, even outside the domain
        let config = SimulationConfig::default().initial_profile(InitialProfile::Threshold { split: -1e6 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_one_step_matches_stencil() {
        let run = run_simulation(&small()).unwrap();
        assert_eq!(run.time_step, 0.5);
        assert_eq!(
            run.final_profile.as_slice(),
            &[500.0, 500.0, 500.0, 500.0, 250.0, 250.0, 0.0, 0.0, 0.0, 0.0]
        );
        assert_eq!(run.initial_profile[4], 500.0);
    }

    #[test]
    fn test_phases() {
        let mut driver = Driver::new(small());
        assert_eq!(driver.phase(), DriverPhase::Init);
        driver.run(None).unwrap();
        assert_eq!(driver.phase(), DriverPhase::Done);

        let mut driver = Driver::new(small().grid_spacing(-1.0));
        assert!(driver.run(None).is_err());
        assert_eq!(driver.phase(), DriverPhase::Init);
    }

    #[test]
    fn test_sink_receives_initial_then_final() {
        let mut recorder = Recorder::default();
        run_simulation_with(&small().time_steps(4), &mut recorder).unwrap();

        assert_eq!(recorder.snapshots.len(), 2);
        assert_eq!(recorder.snapshots[0].0, INITIAL_TITLE);
        assert_eq!(recorder.snapshots[0].1, 0.0);
        assert_eq!(recorder.snapshots[1].0, FINAL_TITLE);
        assert!((recorder.snapshots[1].1 - 2.0).abs() < 1e-12);
        assert_eq!(recorder.snapshots[0].2[4], 500.0);
        assert!(recorder.snapshots[1].2[4] < 500.0);
    }

    #[test]
    fn test_sink_failure_aborts() {
        let mut driver = Driver::new(small());
        let mut sink = Failing;
        assert!(matches!(driver.run(Some(&mut sink)), Err(DiffusionError::Output(_))));
        assert_eq!(driver.phase(), DriverPhase::ProfileSet);
    }

    #[test]
    fn test_stability_factor_scales_time_step() {
        let run = run_simulation(&small().stability_factor(0.5)).unwrap();
        assert_eq!(run.time_step, 0.25);
    }

    #[test]
    fn test_zero_steps_keeps_initial_profile() {
        let run = run_simulation(&small().time_steps(0)).unwrap();
        assert_eq!(run.initial_profile, run.final_profile);
        assert_eq!(run.final_time(), 0.0);
    }

    #[test]
    fn test_degenerate_grid_is_not_an_error() {
        let run = run_simulation(&small().domain_length(2.0)).unwrap();
        assert_eq!(run.grid.len(), 2);
        assert_eq!(run.final_profile.as_slice(), &[500.0, 0.0]);
    }

    #[test]
    fn test_snapshots_are_kept() {
        let run = run_simulation(&small().time_steps(10).snapshot_interval(5)).unwrap();
        // 0, 5, 10
        assert_eq!(run.result.len(), 3);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(DriverPhase::GridBuilt.to_string(), "grid built");
    }
}
