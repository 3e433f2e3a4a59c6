//! Uniform 1D grid
//!
//! A grid is the evenly spaced set of coordinates `origin, origin + dx, ...`
//! over the half-open interval `[origin, domain_size)`.

use crate::error::{DiffusionError, DiffusionResult};

/// Largest number of points [`make_grid`] will allocate
pub const MAX_GRID_POINTS: usize = 1 << 28;

/// Immutable, evenly spaced 1D grid
///
/// # Invariants
///
/// - coordinates are strictly increasing with constant spacing `dx`
/// - every coordinate is strictly less than `domain_size`
/// - `len() == ceil((domain_size - origin) / dx)` (less one point if rounding
///   would put the last coordinate on the upper bound)
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    coordinates: Vec<f64>,
    origin: f64,
    domain_size: f64,
    spacing: f64,
}

/// Build a uniform grid over `[origin, domain_size)` with spacing `grid_spacing`
///
/// Coordinates are computed from their index (`origin + i·dx`) so rounding
/// errors do not accumulate along the grid.
///
/// # Errors
///
/// - [`DiffusionError::InvalidGridSpacing`] when `grid_spacing <= 0` or not finite,
///   when it would need more than [`MAX_GRID_POINTS`] points, or when it is
///   below the f64 resolution at the domain's magnitude (coordinates would repeat)
/// - [`DiffusionError::InvalidDomain`] when `domain_size <= origin` or a bound is not finite
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::make_grid;
///
/// let grid = make_grid(0.0, 100.0, 1.0).unwrap();
/// assert_eq!(grid.len(), 100);
/// assert_eq!(grid.first(), Some(0.0));
/// assert_eq!(grid.last(), Some(99.0));
/// ```
pub fn make_grid(origin: f64, domain_size: f64, grid_spacing: f64) -> DiffusionResult<Grid> {
    if !grid_spacing.is_finite() || grid_spacing <= 0.0 {
        return Err(DiffusionError::InvalidGridSpacing { spacing: grid_spacing });
    }

    if !origin.is_finite() || !domain_size.is_finite() || domain_size <= origin {
        return Err(DiffusionError::InvalidDomain { origin, domain_size });
    }

    let ratio = ((domain_size - origin) / grid_spacing).ceil();
    if !(ratio <= MAX_GRID_POINTS as f64) {
        return Err(DiffusionError::InvalidGridSpacing { spacing: grid_spacing });
    }

    let mut points = ratio as usize;

    // ceil() can overshoot by one when the ratio carries rounding noise
    while points > 0 && origin + (points - 1) as f64 * grid_spacing >= domain_size {
        points -= 1;
    }

    let coordinates: Vec<f64> = (0..points)
        .map(|i| origin + i as f64 * grid_spacing)
        .collect();

    if coordinates.windows(2).any(|w| w[1] <= w[0]) {
        return Err(DiffusionError::InvalidGridSpacing { spacing: grid_spacing });
    }

    Ok(Grid {
        coordinates,
        origin,
        domain_size,
        spacing: grid_spacing,
    })
}

impl Grid {
    /// Grid coordinates, in increasing order
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Number of grid points (nx)
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Grid spacing dx
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Lower (inclusive) bound
    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// Upper (exclusive) bound
    pub fn domain_size(&self) -> f64 {
        self.domain_size
    }

    /// First coordinate
    pub fn first(&self) -> Option<f64> {
        self.coordinates.first().copied()
    }

    /// Last coordinate
    pub fn last(&self) -> Option<f64> {
        self.coordinates.last().copied()
    }

    /// Index where the right half of the domain starts (`len / 2`)
    pub fn midpoint_index(&self) -> usize {
        self.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_grid() {
        let grid = make_grid(0.0, 100.0, 1.0).unwrap();
        assert_eq!(grid.len(), 100);
        assert_eq!(grid.first(), Some(0.0));
        assert_eq!(grid.last(), Some(99.0));
        assert_eq!(grid.midpoint_index(), 50);
    }

    #[test]
    fn test_default_domain() {
        let grid = make_grid(0.0, 300.0, 0.5).unwrap();
        assert_eq!(grid.len(), 600);
        assert_eq!(grid.last(), Some(299.5));
        assert_eq!(grid.spacing(), 0.5);
    }

    #[test]
    fn test_non_divisible_domain_rounds_up() {
        // 0, 0.3, 0.6, 0.9 -> ceil(1.0 / 0.3) = 4
        let grid = make_grid(0.0, 1.0, 0.3).unwrap();
        assert_eq!(grid.len(), 4);
        assert!(grid.last().unwrap() < 1.0);
    }

    #[test]
    fn test_every_coordinate_below_upper_bound() {
        let grid = make_grid(0.0, 1.0, 0.1).unwrap();
        assert_eq!(grid.len(), 10);
        assert!(grid.coordinates().iter().all(|&x| x < 1.0));
    }

    #[test]
    fn test_strictly_increasing_with_offset_origin() {
        let grid = make_grid(-2.0, 3.0, 0.25).unwrap();
        assert_eq!(grid.len(), 20);
        assert_eq!(grid.first(), Some(-2.0));
        assert!(grid.coordinates().windows(2).all(|w| w[1] > w[0]));
        for (i, x) in grid.coordinates().iter().enumerate() {
            assert!((x - (-2.0 + 0.25 * i as f64)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_invalid_spacing() {
        for spacing in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = make_grid(0.0, 10.0, spacing).unwrap_err();
            assert!(matches!(err, DiffusionError::InvalidGridSpacing { .. }));
        }
    }

    #[test]
    fn test_spacing_below_resolution_is_rejected() {
        // ulp(1e16) = 2, so 1e16 + 0.5 rounds back to 1e16
        let err = make_grid(1e16, 1e16 + 8.0, 0.5).unwrap_err();
        assert!(matches!(err, DiffusionError::InvalidGridSpacing { spacing } if spacing == 0.5));

        // same domain, resolvable spacing
        let grid = make_grid(1e16, 1e16 + 8.0, 2.0).unwrap();
        assert_eq!(grid.len(), 4);
        assert!(grid.coordinates().windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_too_many_points_is_rejected() {
        let err = make_grid(0.0, 1e12, 1e-3).unwrap_err();
        assert!(matches!(err, DiffusionError::InvalidGridSpacing { .. }));

        // ratio overflows to infinity
        let err = make_grid(-1e308, 1e308, 1e-300).unwrap_err();
        assert!(matches!(err, DiffusionError::InvalidGridSpacing { .. }));
    }

    #[test]
    fn test_invalid_domain() {
        let err = make_grid(10.0, 10.0, 1.0).unwrap_err();
        assert!(matches!(err, DiffusionError::InvalidDomain { .. }));

        let err = make_grid(10.0, 5.0, 1.0).unwrap_err();
        assert!(matches!(err, DiffusionError::InvalidDomain { .. }));
    }
}
