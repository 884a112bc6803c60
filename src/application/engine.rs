use std::sync::Arc;
use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, trace};

use super::clock::{Clock, IntervalClock};
use super::config::{EngineConfig, InitialGrid};
use super::state::{RunState, Transition};
use crate::domain::Grid;
use crate::error::Result;

/// LifeEngine owns the simulation: the current grid, the run state, the
/// generation counter and the clock that drives stepping.
///
/// The UI only reads through the accessors and acts through the controller
/// methods (`toggle_running`, `edit_cell`, `clear`, `seed`). Every change
/// replaces the grid wholesale, so a [`LifeEngine::snapshot`] taken by a
/// renderer never changes under it.
pub struct LifeEngine<C: Clock = IntervalClock> {
    config: EngineConfig,
    grid: Arc<Grid>,
    state: RunState,
    generation: u64,
    clock: C,
    rng: StdRng,
}

impl LifeEngine<IntervalClock> {
    /// Create an engine driven by frame time
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_clock(config, IntervalClock::new())
    }
}

impl<C: Clock> LifeEngine<C> {
    /// Create an engine with a caller-supplied clock
    pub fn with_clock(config: EngineConfig, clock: C) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let grid = match config.initial {
            InitialGrid::Empty => Grid::empty(config.rows, config.cols),
            InitialGrid::Random => {
                Grid::random(config.rows, config.cols, config.seed_probability, &mut rng)
            }
        };

        info!(
            rows = config.rows,
            cols = config.cols,
            initial = ?config.initial,
            algorithm = config.algorithm.name(),
            "engine created"
        );

        Ok(Self {
            config,
            grid: Arc::new(grid),
            state: RunState::Stopped,
            generation: 0,
            clock,
            rng,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Shared handle to the current generation's grid
    pub fn snapshot(&self) -> Arc<Grid> {
        Arc::clone(&self.grid)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn start(&mut self) {
        self.transition(Transition::Start);
    }

    pub fn stop(&mut self) {
        self.transition(Transition::Stop);
    }

    /// Toggle play/pause state
    pub fn toggle_running(&mut self) {
        self.transition(Transition::Toggle);
    }

    fn transition(&mut self, transition: Transition) {
        let next = self.state.next(transition);
        match (self.state, next) {
            (RunState::Stopped, RunState::Running) => {
                self.ensure_clock_armed();
                info!(generation = self.generation, "simulation started");
            }
            (RunState::Running, RunState::Stopped) => {
                info!(generation = self.generation, "simulation stopped");
            }
            _ => {}
        }
        self.state = next;
    }

    /// Arm the clock on first activation only. A second armed timer would
    /// step the grid twice per interval.
    fn ensure_clock_armed(&mut self) {
        if self.clock.is_armed() {
            return;
        }
        self.clock.arm(self.config.tick_interval);
        info!(interval_ms = self.config.tick_interval.as_millis() as u64, "clock armed");
    }

    /// Flip a single cell. Works while running; the change is picked up by
    /// the next tick.
    ///
    /// Panics if the position is outside the grid.
    pub fn edit_cell(&mut self, row: usize, col: usize) {
        self.grid = Arc::new(self.grid.toggle_cell(row, col));
        debug!(row, col, alive = self.grid.is_alive(row, col), "cell edited");
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.grid = Arc::new(Grid::empty(self.config.rows, self.config.cols));
        self.generation = 0;
        debug!("grid cleared");
    }

    /// Replace the grid with a random one. Generation is kept.
    pub fn seed(&mut self) {
        let grid = Grid::random(
            self.config.rows,
            self.config.cols,
            self.config.seed_probability,
            &mut self.rng,
        );
        debug!(population = grid.population(), "grid seeded");
        self.grid = Arc::new(grid);
    }

    /// One clock firing. Steps the grid if running; returns whether it did.
    pub fn tick(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }

        self.grid = Arc::new(self.config.algorithm.step(&self.grid));
        self.generation += 1;
        trace!(
            generation = self.generation,
            population = self.grid.population(),
            "generation applied"
        );
        true
    }

    /// Feed elapsed time to the clock and apply every tick it fired, in
    /// order. Returns the number of generations applied.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let fired = self.clock.advance(elapsed);
        (0..fired).filter(|_| self.tick()).count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Algorithm;
    use crate::error::Error;

    /// Test clock: fires exactly as many ticks as queued with `fire`
    #[derive(Default)]
    struct CountingClock {
        interval: Option<Duration>,
        arm_calls: u32,
        queued: u32,
    }

    impl CountingClock {
        fn fire(&mut self, ticks: u32) {
            self.queued += ticks;
        }
    }

    impl Clock for CountingClock {
        fn arm(&mut self, interval: Duration) {
            self.arm_calls += 1;
            self.interval.get_or_insert(interval);
        }

        fn is_armed(&self) -> bool {
            self.interval.is_some()
        }

        fn advance(&mut self, _elapsed: Duration) -> u32 {
            if !self.is_armed() {
                return 0;
            }
            std::mem::take(&mut self.queued)
        }
    }

    fn small_config() -> EngineConfig {
        EngineConfig::default().with_dimensions(5, 5).with_rng_seed(3)
    }

    fn engine() -> LifeEngine<CountingClock> {
        LifeEngine::with_clock(small_config(), CountingClock::default()).unwrap()
    }

    /// Fire `ticks` on the test clock and let the engine consume them
    fn run_ticks(engine: &mut LifeEngine<CountingClock>, ticks: u32) -> u32 {
        engine.clock.fire(ticks);
        engine.advance(Duration::ZERO)
    }

    fn place_blinker(engine: &mut LifeEngine<CountingClock>) {
        for col in 1..=3 {
            engine.edit_cell(2, col);
        }
    }

    #[test]
    fn test_new_engine_is_stopped_and_empty() {
        let engine = engine();
        assert!(!engine.is_running());
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.grid(), &Grid::empty(5, 5));
        assert!(!engine.clock().is_armed());
    }

    #[test]
    fn test_default_engine_uses_default_dimensions() {
        let engine = LifeEngine::new(EngineConfig::default()).unwrap();
        assert_eq!(engine.grid().dimensions(), (25, 25));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EngineConfig::default().with_dimensions(0, 0);
        assert!(matches!(
            LifeEngine::new(config),
            Err(Error::EmptyGrid { rows: 0, cols: 0 })
        ));
    }

    #[test]
    fn test_random_initial_grid() {
        let config = small_config()
            .with_initial(InitialGrid::Random)
            .with_seed_probability(1.0);
        let engine = LifeEngine::new(config).unwrap();
        assert_eq!(engine.grid().population(), 25);
    }

    #[test]
    fn test_toggle_running_twice_restores_state() {
        let mut engine = engine();
        engine.toggle_running();
        assert!(engine.is_running());
        engine.toggle_running();
        assert!(!engine.is_running());
    }

    #[test]
    fn test_clock_armed_exactly_once_across_toggles() {
        let mut engine = engine();
        for _ in 0..10 {
            engine.toggle_running();
        }
        engine.start();
        engine.start();
        engine.stop();
        engine.start();

        assert_eq!(engine.clock().arm_calls, 1);
        assert_eq!(engine.clock().interval, Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_stop_does_not_arm_clock() {
        let mut engine = engine();
        engine.stop();
        assert_eq!(engine.clock().arm_calls, 0);
    }

    #[test]
    fn test_one_generation_per_tick_after_restart() {
        let mut engine = engine();
        place_blinker(&mut engine);
        engine.start();
        engine.stop();
        engine.start();

        assert_eq!(run_ticks(&mut engine, 1), 1);
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_ticks_while_stopped_are_noops() {
        let mut engine = engine();
        place_blinker(&mut engine);
        engine.start();
        engine.stop();
        let before = engine.snapshot();

        assert_eq!(run_ticks(&mut engine, 3), 0);
        assert_eq!(engine.generation(), 0);
        assert_eq!(*engine.grid(), *before);
        assert!(!engine.tick());
    }

    #[test]
    fn test_blinker_end_to_end() {
        let mut engine = engine();
        place_blinker(&mut engine);
        let original = engine.grid().clone();
        assert_eq!(original, Grid::with_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]));

        engine.toggle_running();
        assert_eq!(run_ticks(&mut engine, 1), 1);
        assert_ne!(*engine.grid(), original);
        assert_eq!(run_ticks(&mut engine, 1), 1);

        assert_eq!(*engine.grid(), original);
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_interval_clock_drives_generations() {
        let config = small_config().with_tick_interval(Duration::from_millis(500));
        let mut engine = LifeEngine::new(config).unwrap();
        for col in 1..=3 {
            engine.edit_cell(2, col);
        }
        let original = engine.grid().clone();

        // Clock is not armed before the first start
        assert_eq!(engine.advance(Duration::from_secs(10)), 0);

        engine.start();
        assert_eq!(engine.advance(Duration::from_millis(499)), 0);
        assert_eq!(engine.advance(Duration::from_millis(501)), 2);
        assert_eq!(engine.generation(), 2);
        assert_eq!(*engine.grid(), original);
    }

    #[test]
    fn test_edit_while_running_is_seen_by_next_tick() {
        let mut engine = engine();
        engine.start();

        // Lone cell dies on the next step
        engine.edit_cell(0, 0);
        assert!(engine.is_running());
        assert_eq!(engine.generation(), 0);
        assert!(engine.grid().is_alive(0, 0));

        run_ticks(&mut engine, 1);
        assert_eq!(engine.grid().population(), 0);
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_clear_resets_grid_and_generation_but_not_running() {
        let mut engine = engine();
        engine.seed();
        engine.start();
        run_ticks(&mut engine, 4);
        assert_eq!(engine.generation(), 4);

        engine.clear();
        assert_eq!(engine.grid(), &Grid::empty(5, 5));
        assert_eq!(engine.generation(), 0);
        assert!(engine.is_running());
    }

    #[test]
    fn test_seed_keeps_running_and_generation() {
        let config = small_config().with_seed_probability(1.0);
        let mut engine = LifeEngine::with_clock(config, CountingClock::default()).unwrap();
        engine.start();
        run_ticks(&mut engine, 2);

        engine.seed();
        assert_eq!(engine.grid().population(), 25);
        assert_eq!(engine.generation(), 2);
        assert!(engine.is_running());
    }

    #[test]
    fn test_seed_is_reproducible_with_fixed_rng_seed() {
        let mut a = engine();
        let mut b = engine();
        a.seed();
        b.seed();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_snapshot_survives_later_steps() {
        let mut engine = engine();
        place_blinker(&mut engine);
        let snapshot = engine.snapshot();

        engine.start();
        run_ticks(&mut engine, 1);

        assert_eq!(*snapshot, Grid::with_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]));
        assert_ne!(*engine.grid(), *snapshot);
    }

    #[test]
    fn test_parallel_algorithm_matches_serial_engine() {
        let config = EngineConfig::default()
            .with_dimensions(20, 30)
            .with_initial(InitialGrid::Random)
            .with_rng_seed(11);
        let mut serial =
            LifeEngine::with_clock(config.clone(), CountingClock::default()).unwrap();
        let mut parallel = LifeEngine::with_clock(
            config.with_algorithm(Algorithm::Parallel),
            CountingClock::default(),
        )
        .unwrap();

        for engine in [&mut serial, &mut parallel] {
            engine.start();
            run_ticks(engine, 5);
        }
        assert_eq!(serial.grid(), parallel.grid());
    }
}
