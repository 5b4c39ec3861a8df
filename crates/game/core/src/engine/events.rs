//! Results reported by controller steps.
use crate::error::IgnoreReason;
use crate::state::SpinOutcome;

/// Something observable that happened during a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MachineEvent {
    /// All reels started randomizing; the result was cleared.
    SpinStarted,
    /// The staggered halt sequence was scheduled.
    StopRequested,
    /// A spinning reel redrew its slots.
    ReelsRandomized { reel: usize },
    /// A reel stopped randomizing during the staggered stop.
    ReelStopped { reel: usize },
    /// The cheat forced the jackpot symbol onto the middle row.
    CheatApplied,
    /// The spin settled with this outcome.
    Settled { outcome: SpinOutcome },
    /// The middle-row highlight switched on or off.
    HighlightChanged { active: bool },
}

impl MachineEvent {
    /// True when hosts need to redraw after this event.
    pub const fn changes_display(&self) -> bool {
        !matches!(self, Self::StopRequested)
    }
}

/// Whether a command changed the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandOutcome {
    Applied,
    Ignored { reason: IgnoreReason },
}

impl CommandOutcome {
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Everything one command step produced, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub outcome: CommandOutcome,
    pub events: Vec<MachineEvent>,
}
