//! Helper functions for integration tests

use diffusion_rs::driver::SimulationConfig;
use diffusion_rs::error::DiffusionResult;
use diffusion_rs::output::{ProfileSink, ProfileSnapshot};

/// Assert that two profiles are close (within tolerance), element by element
pub fn assert_profiles_close(actual: &[f64], expected: &[f64], tolerance: f64, message: &str) {
    assert_eq!(actual.len(), expected.len(), "{}: Dimension mismatch", message);

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff < tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}

/// Relative error |a - b| / |b|, absolute when `b` is zero
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-300 {
        actual.abs()
    } else {
        ((actual - expected) / expected).abs()
    }
}

/// True when every value is below its predecessor plus `tolerance`
pub fn is_monotone_non_increasing(values: &[f64], tolerance: f64) -> bool {
    values.windows(2).all(|w| w[1] <= w[0] + tolerance)
}

/// 20 points, D = 1, dx = 1, dt = 0.5
pub fn small_config() -> SimulationConfig {
    SimulationConfig::default()
        .diffusivity(1.0)
        .domain_length(20.0)
        .grid_spacing(1.0)
        .time_steps(50)
}

/// Sink keeping a copy of everything it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub titles: Vec<String>,
    pub times: Vec<f64>,
    pub profiles: Vec<Vec<f64>>,
}

impl ProfileSink for RecordingSink {
    fn receive(&mut self, snapshot: &ProfileSnapshot<'_>) -> DiffusionResult<()> {
        self.titles.push(snapshot.title.to_string());
        self.times.push(snapshot.time);
        self.profiles.push(snapshot.values.to_vec());
        Ok(())
    }
}
