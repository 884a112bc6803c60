mod clock;
mod config;
mod engine;
mod state;

pub use clock::{Clock, IntervalClock};
pub use config::{
    DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SEED_PROBABILITY, DEFAULT_TICK_INTERVAL, EngineConfig,
    InitialGrid,
};
pub use engine::LifeEngine;
pub use state::{RunState, Transition};
