//! Digital-output collaborator boundary.
//!
//! The scheduler never touches registers or port shadows; it depends on one
//! external capability: "set digital output pin P to level L". Implementations
//! own the translation from logical [`Level`] to a physical line state.

use core::fmt;

use thiserror::Error;

/// Identifier for an abstract output pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinId(pub u8);

impl PinId {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Logical output level.
///
/// On the reference prototyping board the wiring is inverted: `On` drives the
/// physical line LOW (the LED sinks current) and `Off` drives it HIGH. That
/// inversion is a wiring fact owned by [`PinDriver`] implementations; the
/// scheduler deals only in logical levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    On,
    Off,
}

/// Hardware fault reported by a pin driver.
///
/// There is no degraded mode for an output-toggle loop; the scheduler treats
/// any write failure as fatal and propagates it out of the run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PinError {
    #[error("write to {0} failed")]
    WriteFailed(PinId),
}

/// Object-safe pin-write capability, the scheduler's one collaborator.
pub trait PinDriver: Send + Sync {
    /// Drives `pin` to the logical `level`.
    fn set_pin(&self, pin: PinId, level: Level) -> Result<(), PinError>;
}
