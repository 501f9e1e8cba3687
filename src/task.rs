//! Per-instance phase state and deadline arithmetic.

use crate::pin::{Level, PinId};

/// One of the two states a task instance cycles between.
///
/// Owned exclusively by the instance; observable from outside only through
/// the levels driven on the pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Active,
    Inactive,
}

impl Phase {
    fn flipped(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    /// The level a transition *into* this phase drives on the pin.
    fn level(self) -> Level {
        match self {
            Self::Active => Level::On,
            Self::Inactive => Level::Off,
        }
    }
}

/// Unique identifier for a task instance within one scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u8);

impl TaskId {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }
}

/// State of one registered on/off cycle.
///
/// Phase and deadline are owned exclusively by the instance; the scheduler
/// touches them only during the instance's own turn within a pass.
pub(crate) struct TaskInstance {
    id: TaskId,
    pin: PinId,
    active_ms: u64,
    inactive_ms: u64,
    phase: Phase,
    deadline_ms: u64,
}

impl TaskInstance {
    /// Starts `Inactive` with an immediate deadline so the first pass
    /// transitions the instance into `Active`.
    pub(crate) fn new(
        id: TaskId,
        pin: PinId,
        active_ms: u64,
        inactive_ms: u64,
        now_ms: u64,
    ) -> Self {
        Self {
            id,
            pin,
            active_ms,
            inactive_ms,
            phase: Phase::Inactive,
            deadline_ms: now_ms,
        }
    }

    pub(crate) fn id(&self) -> TaskId {
        self.id
    }

    pub(crate) fn pin(&self) -> PinId {
        self.pin
    }

    pub(crate) fn deadline_ms(&self) -> u64 {
        self.deadline_ms
    }

    pub(crate) fn due(&self, now_ms: u64) -> bool {
        now_ms >= self.deadline_ms
    }

    /// The level the next transition must drive, without committing it.
    ///
    /// The pin write happens between this call and [`Self::transition`], so
    /// the side effect lands before the deadline moves.
    pub(crate) fn next_level(&self) -> Level {
        self.phase.flipped().level()
    }

    /// Flips into the next phase and pushes the deadline forward from the
    /// *scheduled* instant, not the wake instant, so phases never drift.
    pub(crate) fn transition(&mut self) -> Phase {
        self.phase = self.phase.flipped();
        self.deadline_ms += self.duration_ms(self.phase);
        self.phase
    }

    fn duration_ms(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Active => self.active_ms,
            Phase::Inactive => self.inactive_ms,
        }
    }
}
