//! Algorithm enum for selecting the step implementation.

use super::Grid;

/// Available step implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell, single thread
    #[default]
    Serial,
    /// Row-parallel with rayon
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for logs and the info panel
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Compute the next generation of `grid` with this algorithm
    pub fn step(&self, grid: &Grid) -> Grid {
        match self {
            Algorithm::Serial => grid.step(),
            Algorithm::Parallel => grid.step_parallel(),
        }
    }
}
