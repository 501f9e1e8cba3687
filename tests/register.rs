//! Tests for the registration contract and scheduler construction.

use cosched::{
    Level, PinDriver, PinError, PinId, Scheduler, SchedulerError, SimulatedClock, TaskId,
};

struct NullDriver;

impl PinDriver for NullDriver {
    fn set_pin(&self, _pin: PinId, _level: Level) -> Result<(), PinError> {
        Ok(())
    }
}

#[test]
fn register_rejects_duplicate_ids() {
    let mut scheduler = Scheduler::new(SimulatedClock::new(), NullDriver);

    scheduler.register(TaskId(0), PinId(2), 50, 50).unwrap();
    let err = scheduler.register(TaskId(0), PinId(3), 500, 100).unwrap_err();

    assert!(matches!(err, SchedulerError::DuplicateTask(TaskId(0))));
    assert_eq!(scheduler.task_count(), 1);
}

#[test]
fn register_accepts_distinct_ids() {
    let mut scheduler = Scheduler::new(SimulatedClock::new(), NullDriver);

    scheduler.register(TaskId(0), PinId(2), 50, 50).unwrap();
    scheduler.register(TaskId(1), PinId(3), 500, 100).unwrap();

    assert_eq!(scheduler.task_count(), 2);
}

#[test]
fn duplicate_pins_are_allowed_across_tasks() {
    // Identity is the task id; two instances may drive the same pin.
    let mut scheduler = Scheduler::new(SimulatedClock::new(), NullDriver);

    scheduler.register(TaskId(0), PinId(2), 50, 50).unwrap();
    scheduler.register(TaskId(1), PinId(2), 500, 100).unwrap();

    assert_eq!(scheduler.task_count(), 2);
}

#[test]
fn run_forever_fails_fast_on_empty_scheduler() {
    let mut scheduler = Scheduler::new(SimulatedClock::new(), NullDriver);

    let err = scheduler.run_forever().unwrap_err();
    assert!(matches!(err, SchedulerError::NoTasks));
}

#[test]
fn next_deadline_is_none_before_registration() {
    let scheduler = Scheduler::new(SimulatedClock::new(), NullDriver);
    assert_eq!(scheduler.next_deadline(), None);
}

#[test]
fn registration_deadline_is_immediate() {
    let clock = SimulatedClock::new();
    clock.advance(250);
    let mut scheduler = Scheduler::new(clock, NullDriver);

    scheduler.register(TaskId(0), PinId(2), 50, 50).unwrap();

    // Pending-start instances become due on the first pass.
    assert_eq!(scheduler.next_deadline(), Some(250));
}
