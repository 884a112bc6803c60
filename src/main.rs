use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use macroquad::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use life_engine::{
    Algorithm, EngineConfig, InitialGrid, LifeEngine,
    application::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SEED_PROBABILITY, DEFAULT_TICK_INTERVAL},
    input, rendering,
    ui::{self, BUTTON_RUN, GridLayout},
};

/// Conway's Game of Life on a wrapping grid
#[derive(Parser, Debug)]
#[command(name = "life", version, about)]
struct Cli {
    /// Number of grid rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Milliseconds between generations
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL.as_millis() as u64)]
    interval_ms: u64,

    /// Chance that a cell is alive after seeding
    #[arg(long, default_value_t = DEFAULT_SEED_PROBABILITY)]
    seed_probability: f64,

    /// Start from a random grid instead of an empty one
    #[arg(long)]
    random_start: bool,

    /// Step rows in parallel
    #[arg(long)]
    parallel: bool,

    /// Fixed seed for reproducible random grids
    #[arg(long)]
    rng_seed: Option<u64>,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        let config = EngineConfig::default()
            .with_dimensions(self.rows, self.cols)
            .with_tick_interval(Duration::from_millis(self.interval_ms))
            .with_seed_probability(self.seed_probability)
            .with_initial(if self.random_start {
                InitialGrid::Random
            } else {
                InitialGrid::Empty
            })
            .with_algorithm(if self.parallel {
                Algorithm::Parallel
            } else {
                Algorithm::Serial
            });

        match self.rng_seed {
            Some(seed) => config.with_rng_seed(seed),
            None => config,
        }
    }
}

fn window_conf(layout: &GridLayout) -> Conf {
    let (width, height) = ui::window_size(layout);
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: width,
        window_height: height,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.engine_config();
    let layout = GridLayout::new(config.rows, config.cols);
    let engine = LifeEngine::new(config).context("invalid engine settings")?;

    info!(rows = layout.rows, cols = layout.cols, "opening window");
    macroquad::Window::from_config(window_conf(&layout), run(engine, layout));
    Ok(())
}

async fn run(mut engine: LifeEngine, layout: GridLayout) {
    let mut buttons = ui::create_buttons();

    loop {
        let mouse_pos = mouse_position();

        for intent in input::collect_intents(&buttons, &layout, mouse_pos) {
            debug!(?intent, "user intent");
            input::dispatch(&mut engine, intent);
        }

        engine.advance(Duration::from_secs_f32(get_frame_time()));
        buttons[BUTTON_RUN].set_text(rendering::run_label(engine.is_running()));

        clear_background(WHITE);
        rendering::draw_controls(&buttons, engine.generation(), mouse_pos);
        rendering::draw_grid(engine.grid(), engine.generation(), &layout);

        next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_engine_defaults() {
        let cli = Cli::parse_from(["life"]);
        assert_eq!(cli.engine_config(), EngineConfig::default());
    }

    #[test]
    fn test_flags_map_to_config() {
        let cli = Cli::parse_from([
            "life",
            "--rows",
            "10",
            "--cols",
            "40",
            "--interval-ms",
            "100",
            "--seed-probability",
            "0.5",
            "--random-start",
            "--parallel",
            "--rng-seed",
            "42",
        ]);
        let config = cli.engine_config();

        assert_eq!((config.rows, config.cols), (10, 40));
        assert_eq!(config.tick_interval, Duration::from_millis(100));
        assert_eq!(config.seed_probability, 0.5);
        assert_eq!(config.initial, InitialGrid::Random);
        assert_eq!(config.algorithm, Algorithm::Parallel);
        assert_eq!(config.rng_seed, Some(42));
    }

    #[test]
    fn test_zero_rows_is_rejected_before_window_opens() {
        let cli = Cli::parse_from(["life", "--rows", "0"]);
        assert!(LifeEngine::new(cli.engine_config()).is_err());
    }
}
