use crate::clock::{Clock, MonotonicClock, SimulatedClock};

#[test]
fn simulated_clock_starts_at_zero() {
    let clock = SimulatedClock::new();
    assert_eq!(clock.now(), 0);
}

#[test]
fn simulated_clock_handles_share_time() {
    let clock = SimulatedClock::new();
    let handle = clock.clone();

    clock.advance(75);
    assert_eq!(handle.now(), 75);

    handle.wait_until(200);
    assert_eq!(clock.now(), 200);
}

#[test]
fn simulated_wait_until_past_deadline_is_noop() {
    let clock = SimulatedClock::new();
    clock.advance(100);

    clock.wait_until(40);
    assert_eq!(clock.now(), 100);
}

#[test]
fn monotonic_clock_never_goes_backwards() {
    let clock = MonotonicClock::new();
    let first = clock.now();
    let second = clock.now();
    assert!(second >= first);
}

#[test]
fn monotonic_wait_until_elapsed_deadline_returns() {
    let clock = MonotonicClock::new();
    // Deadline 0 already elapsed; must not sleep.
    clock.wait_until(0);
}
