//! Time sources for the search deadline
//!
//! The planner only ever asks "how much time has passed"; tests substitute a
//! [`ManualClock`] to make the number of completed plies deterministic.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source with an arbitrary epoch
pub trait Clock {
    /// Time since the clock's epoch; never decreases
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock for tests.
///
/// Every call to [`Clock::now`] returns the current reading and then moves it
/// forward by `tick`. Clones share the same reading.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    elapsed: Rc<Cell<Duration>>,
    tick: Duration,
}

impl ManualClock {
    /// Clock frozen at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock that advances by `tick` on every query
    pub fn ticking(tick: Duration) -> Self {
        Self {
            elapsed: Rc::default(),
            tick,
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    /// Current reading, without ticking
    pub fn peek(&self) -> Duration {
        self.elapsed.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        let now = self.elapsed.get();
        self.elapsed.set(now + self.tick);
        now
    }
}
