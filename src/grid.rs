use crate::error::{Result, SimError};
use crate::model::round_to;

/// Goal mouth half-width, meters from the center line.
pub const X_MIN: f64 = -3.66;
pub const X_MAX: f64 = 3.66;
/// Shot height band in meters.
pub const Z_MIN: f64 = 0.5;
pub const Z_MAX: f64 = 2.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub xs: Vec<f64>,
    pub zs: Vec<f64>,
    pub distances: Vec<u32>,
}

impl Grid {
    pub fn build(nx: usize, nz: usize, distances: Vec<u32>) -> Result<Self> {
        if nx < 2 {
            return Err(SimError::invalid("nx", format!("must be >= 2, got {nx}")));
        }
        if nz < 2 {
            return Err(SimError::invalid("nz", format!("must be >= 2, got {nz}")));
        }
        if distances.is_empty() {
            return Err(SimError::invalid("dist", "at least one distance is required"));
        }
        if distances.iter().any(|d| *d == 0) {
            return Err(SimError::invalid("dist", "must be > 0"));
        }
        Ok(Self {
            xs: linspace(X_MIN, X_MAX, nx),
            zs: linspace(Z_MIN, Z_MAX, nz),
            distances,
        })
    }

    pub fn cells_per_distance(&self) -> usize {
        self.xs.len() * self.zs.len()
    }

    pub fn total_cells(&self) -> usize {
        self.distances.len() * self.cells_per_distance()
    }
}

fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let step = (hi - lo) / (n - 1) as f64;
    (0..n).map(|i| round_to(lo + i as f64 * step, 2)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two_hits_bounds_exactly() {
        let grid = Grid::build(2, 2, vec![11]).unwrap();
        assert_eq!(grid.xs, vec![-3.66, 3.66]);
        assert_eq!(grid.zs, vec![0.5, 2.5]);
        assert_eq!(grid.total_cells(), 4);
    }

    #[test]
    fn default_grid_values() {
        let grid = Grid::build(5, 3, vec![11]).unwrap();
        assert_eq!(grid.xs, vec![-3.66, -1.83, 0.0, 1.83, 3.66]);
        assert_eq!(grid.zs, vec![0.5, 1.5, 2.5]);
        assert!(grid.xs[2].is_sign_positive());
        assert_eq!(grid.cells_per_distance(), 15);
    }

    #[test]
    fn eighth_steps_round_ties_to_even() {
        let grid = Grid::build(5, 17, vec![11]).unwrap();
        assert_eq!(grid.zs.len(), 17);
        assert_eq!(grid.zs[1], 0.62);
        assert_eq!(grid.zs[3], 0.88);
        assert_eq!(grid.zs[5], 1.12);
        assert_eq!(grid.zs[16], 2.5);
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        for (nx, nz, param) in [(1, 3, "nx"), (0, 3, "nx"), (5, 1, "nz")] {
            match Grid::build(nx, nz, vec![11]) {
                Err(SimError::InvalidConfiguration { parameter, .. }) => assert_eq!(parameter, param),
                other => panic!("expected InvalidConfiguration, got {other:?}"),
            }
        }
        assert!(Grid::build(5, 3, vec![]).is_err());
        assert!(Grid::build(5, 3, vec![0]).is_err());
    }
}
