//! Periodic tick source driving the simulation.
//!
//! The engine never sleeps or spawns timers itself. It asks a [`Clock`] how
//! many ticks fired since the last frame and applies them one after another.
//! This keeps the engine deterministic under test: a test clock can fire
//! ticks on demand and count how often it was armed.

use std::time::Duration;

/// A repeating timer that is armed once and then runs for the lifetime of
/// its owner. There is no way to disarm it.
pub trait Clock {
    /// Arm the timer with the given interval. Calls after the first are
    /// ignored.
    fn arm(&mut self, interval: Duration);

    /// Whether [`Clock::arm`] has taken effect
    fn is_armed(&self) -> bool;

    /// Feed elapsed time and return how many ticks fired in it.
    /// An unarmed clock never fires.
    fn advance(&mut self, elapsed: Duration) -> u32;
}

/// Frame-driven clock: accumulates frame time and fires once per whole
/// interval. Leftover time carries over to the next call.
#[derive(Debug, Default)]
pub struct IntervalClock {
    interval: Option<Duration>,
    accumulated: Duration,
}

impl IntervalClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }
}

impl Clock for IntervalClock {
    fn arm(&mut self, interval: Duration) {
        if self.interval.is_none() {
            self.interval = Some(interval);
        }
    }

    fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    fn advance(&mut self, elapsed: Duration) -> u32 {
        let Some(interval) = self.interval else {
            return 0;
        };

        self.accumulated += elapsed;
        let mut fired = 0;
        while self.accumulated >= interval {
            self.accumulated -= interval;
            fired += 1;
        }
        fired
    }
}
