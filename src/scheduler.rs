//! Registration and the cooperative pass loop.

use core::convert::Infallible;
use core::fmt;

use log::{debug, info};
use thiserror::Error;

use crate::clock::Clock;
use crate::pin::{PinDriver, PinError, PinId};
use crate::task::{TaskId, TaskInstance};

/// Errors surfaced by the scheduler.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// `register` called twice with the same id; registrations are never
    /// silently overwritten.
    #[error("task {0:?} already registered")]
    DuplicateTask(TaskId),
    /// `run_forever` called with nothing registered.
    #[error("no tasks registered")]
    NoTasks,
    /// Fatal collaborator fault; the run loop does not retry.
    #[error(transparent)]
    Pin(#[from] PinError),
}

/// Cooperative timed-task scheduler.
///
/// Owns a fixed set of [`TaskInstance`]s, a single monotonic clock, and the
/// pin-write collaborator. Single-threaded and non-preemptive: instances
/// interleave because each pass touches every due instance exactly once and
/// then yields, never mid-instance.
pub struct Scheduler {
    tasks: Vec<TaskInstance>,
    clock: Box<dyn Clock>,
    driver: Box<dyn PinDriver>,
}

impl Scheduler {
    pub fn new(clock: impl Clock + 'static, driver: impl PinDriver + 'static) -> Self {
        Self {
            tasks: Vec::new(),
            clock: Box::new(clock),
            driver: Box::new(driver),
        }
    }

    /// Registers a task instance flashing `pin` for `active_ms` on and
    /// `inactive_ms` off.
    ///
    /// The instance is added `Inactive` with an immediate deadline, so it
    /// begins its first `Active` phase on the first scheduling pass.
    /// Duplicate ids are rejected.
    pub fn register(
        &mut self,
        id: TaskId,
        pin: PinId,
        active_ms: u64,
        inactive_ms: u64,
    ) -> Result<(), SchedulerError> {
        match self.tasks.binary_search_by_key(&id, TaskInstance::id) {
            Ok(_) => Err(SchedulerError::DuplicateTask(id)),
            Err(slot) => {
                let now = self.clock.now();
                self.tasks
                    .insert(slot, TaskInstance::new(id, pin, active_ms, inactive_ms, now));
                Ok(())
            }
        }
    }

    /// Runs one scheduling pass at the current clock reading.
    ///
    /// Every instance whose deadline has elapsed gets exactly one phase
    /// transition, in ascending [`TaskId`] order: the pin write first, then
    /// the phase flip, then the deadline recomputation. The next deadline is
    /// computed from the scheduled one rather than from the wake time, so a
    /// late pass does not accumulate drift across cycles.
    ///
    /// Returns whether any instance transitioned. Exposed so embedders and
    /// tests can drive passes from their own loop against their own clock.
    pub fn run_pass(&mut self) -> Result<bool, SchedulerError> {
        let now = self.clock.now();
        let mut fired = false;
        for task in &mut self.tasks {
            if !task.due(now) {
                continue;
            }
            let level = task.next_level();
            self.driver.set_pin(task.pin(), level)?;
            let phase = task.transition();
            debug!(
                "t={}ms {:?}: {} -> {:?}, next deadline {}ms",
                now,
                task.id(),
                task.pin(),
                phase,
                task.deadline_ms()
            );
            fired = true;
        }
        Ok(fired)
    }

    /// Earliest pending deadline across all instances, in clock milliseconds.
    pub fn next_deadline(&self) -> Option<u64> {
        self.tasks.iter().map(TaskInstance::deadline_ms).min()
    }

    /// The embedded main loop: never returns under normal operation.
    ///
    /// Each iteration runs one pass, then suspends until the nearest
    /// deadline. The suspension happens exactly once per iteration, after
    /// all due instances were processed. The only
    /// exits are a fatal pin fault and the fail-fast case of an empty task
    /// set.
    pub fn run_forever(&mut self) -> Result<Infallible, SchedulerError> {
        if self.tasks.is_empty() {
            return Err(SchedulerError::NoTasks);
        }
        info!("scheduler starting with {} task(s)", self.tasks.len());
        loop {
            self.run_pass()?;
            if let Some(deadline) = self.next_deadline() {
                self.clock.wait_until(deadline);
            }
        }
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("tasks", &self.tasks.len())
            .finish()
    }
}
