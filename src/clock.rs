//! Monotonic time sources for the scheduler.
//!
//! The clock is a shared read-only resource: all task instances read it, none
//! mutate it. [`Clock::wait_until`] doubles as the cooperative suspension
//! point, called exactly once per scheduler pass.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Monotonic elapsed-time source consulted once per scheduler pass.
pub trait Clock: Send {
    /// Elapsed milliseconds since the clock's origin.
    fn now(&self) -> u64;

    /// Suspends the execution context until `deadline_ms`.
    ///
    /// Returns immediately if the deadline has already elapsed. This is the
    /// single point where other cooperative activity sharing the execution
    /// context may run.
    fn wait_until(&self, deadline_ms: u64);
}

/// Wall-clock [`Clock`] backed by [`Instant`], for hosts with an OS.
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
    fn now(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn wait_until(&self, deadline_ms: u64) {
        let now = self.now();
        if deadline_ms > now {
            thread::sleep(Duration::from_millis(deadline_ms - now));
        }
    }
}

/// Manually advanced [`Clock`] for deterministic runs.
///
/// Handles clone cheaply and observe the same time, so a test can read or
/// advance the clock while the scheduler owns another handle. `wait_until`
/// jumps time forward instead of sleeping, which makes an entire run a pure
/// function of the registered tasks.
#[derive(Clone, Default)]
pub struct SimulatedClock {
    now_ms: Arc<Mutex<u64>>,
}

impl SimulatedClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward by `delta_ms`.
    pub fn advance(&self, delta_ms: u64) {
        *self.now_ms.lock() += delta_ms;
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> u64 {
        *self.now_ms.lock()
    }

    fn wait_until(&self, deadline_ms: u64) {
        let mut now = self.now_ms.lock();
        if deadline_ms > *now {
            *now = deadline_ms;
        }
    }
}
