//! # cosched
//!
//! A cooperative timed-task scheduler: a fixed set of task instances, each
//! repeatedly executing a two-phase (active/inactive) cycle with per-instance
//! durations, interleaved on a single execution context. The scheduler makes
//! one pass over all instances, transitions every instance whose deadline has
//! elapsed, then suspends until the nearest deadline. This is the classic
//! embedded main loop, with the suspension point made explicit.
//!
//! ## Module Overview
//! - [`pin`]       – The digital-output collaborator boundary.
//! - [`clock`]     – Monotonic time sources, real and simulated.
//! - [`task`]      – Per-instance phase state and deadline arithmetic.
//! - [`scheduler`] – Registration and the cooperative pass loop.
//!
//! The crate keeps the hardware behind a single object-safe trait so the same
//! scheduler runs against real pins, a console, or a recording test double.

pub mod clock;
pub mod pin;
pub mod scheduler;
pub mod task;

pub use clock::{Clock, MonotonicClock, SimulatedClock};
pub use pin::{Level, PinDriver, PinError, PinId};
pub use scheduler::{Scheduler, SchedulerError};
pub use task::TaskId;

#[cfg(test)]
mod tests;
