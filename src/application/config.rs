use std::time::Duration;

use crate::domain::Algorithm;
use crate::error::{Error, Result};

pub const DEFAULT_ROWS: usize = 25;
pub const DEFAULT_COLS: usize = 25;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(500);
pub const DEFAULT_SEED_PROBABILITY: f64 = 0.3;

/// How the grid looks when the engine is created
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InitialGrid {
    #[default]
    Empty,
    Random,
}

/// Engine settings. Fixed for the lifetime of an engine.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    pub tick_interval: Duration,
    /// Chance that a cell starts alive when seeding
    pub seed_probability: f64,
    pub initial: InitialGrid,
    pub algorithm: Algorithm,
    /// Fixed RNG seed for reproducible seeding; OS entropy when `None`
    pub rng_seed: Option<u64>,
}

impl EngineConfig {
    /// Set grid dimensions (builder pattern)
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn with_seed_probability(mut self, probability: f64) -> Self {
        self.seed_probability = probability;
        self
    }

    pub fn with_initial(mut self, initial: InitialGrid) -> Self {
        self.initial = initial;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(0.0..=1.0).contains(&self.seed_probability) {
            return Err(Error::InvalidProbability(self.seed_probability));
        }
        if self.tick_interval.is_zero() {
            return Err(Error::ZeroTickInterval);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_interval: DEFAULT_TICK_INTERVAL,
            seed_probability: DEFAULT_SEED_PROBABILITY,
            initial: InitialGrid::default(),
            algorithm: Algorithm::default(),
            rng_seed: None,
        }
    }
}
