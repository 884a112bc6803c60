// Domain layer - grid model and the B3/S23 rule
pub mod domain;

// Application layer - engine, clock, run state, configuration
pub mod application;

pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Grid};
pub use application::{Clock, EngineConfig, InitialGrid, IntervalClock, LifeEngine, RunState};
pub use error::{Error, Result};
pub use ui::Button;
