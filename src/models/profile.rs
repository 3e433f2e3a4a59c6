//! Initial concentration profiles
//!
//! Defines C(x, t=0) over the grid.
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::models::set_initial_profile;
//!
//! let c = set_initial_profile(100, 500.0, 0.0);
//! assert_eq!(c.len(), 100);
//! assert_eq!(c[0], 500.0);
//! assert_eq!(c[49], 500.0);
//! assert_eq!(c[50], 0.0);
//! ```

use nalgebra::DVector;

/// Two-region step profile
///
/// Indices `[0, grid_size/2)` hold `boundary_left`, indices
/// `[grid_size/2, grid_size)` hold `boundary_right`. With an odd size the
/// extra point goes to the right half. `grid_size == 0` gives an empty vector.
pub fn set_initial_profile(grid_size: usize, boundary_left: f64, boundary_right: f64) -> DVector<f64> {
    let split = grid_size / 2;
    DVector::from_fn(grid_size, |i, _| {
        if i < split { boundary_left } else { boundary_right }
    })
}

/// Shape of the initial profile
///
/// # Types
///
/// - **Step**: index split at `n/2` (see [`set_initial_profile`])
/// - **Threshold**: coordinate split, `x ≤ split` is left, `x > split` is right
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InitialProfile {
    /// Index based split at the midpoint
    #[default]
    Step,

    /// Coordinate based split
    ///
    /// # Example
    ///
    /// ```rust
    /// use diffusion_rs::models::InitialProfile;
    ///
    /// let profile = InitialProfile::Threshold { split: 1.0 };
    /// let c = profile.evaluate(&[0.0, 0.5, 1.0, 1.5], 500.0, 0.0);
    /// assert_eq!(c.as_slice(), &[500.0, 500.0, 500.0, 0.0]);
    /// ```
    Threshold {
        split: f64,
    },
}

impl InitialProfile {
    /// Build the profile over the given grid coordinates
    pub fn evaluate(&self, coordinates: &[f64], boundary_left: f64, boundary_right: f64) -> DVector<f64> {
        match self {
            InitialProfile::Step => set_initial_profile(coordinates.len(), boundary_left, boundary_right),
            InitialProfile::Threshold { split } => DVector::from_iterator(
                coordinates.len(),
                coordinates
                    .iter()
                    .map(|&x| if x <= *split { boundary_left } else { boundary_right }),
            ),
        }
    }

    /// Profile name (for logs and metadata)
    pub fn name(&self) -> &'static str {
        match self {
            InitialProfile::Step => "step",
            InitialProfile::Threshold { .. } => "threshold",
        }
    }
}
