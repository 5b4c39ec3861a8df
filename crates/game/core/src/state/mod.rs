//! Slot machine state representation.
//!
//! This module owns the symbol alphabet, the reels, the machine state enum and
//! the read-only snapshot handed to hosts. Everything here is mutated
//! exclusively through [`crate::engine::ReelSetController`].
mod machine;
mod reel;
mod snapshot;
mod symbol;

pub use machine::{ControlLabel, MachineState, SpinOutcome};
pub use reel::{MIDDLE_SLOT, REEL_COUNT, Reel, ReelSet, SLOTS_PER_REEL};
pub use snapshot::MachineSnapshot;
pub use symbol::Symbol;

/// Controller time in milliseconds since an arbitrary host-defined origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Self = Self(0);

    /// Returns this instant shifted forward by `delta_ms`, saturating at the end of time.
    #[must_use]
    pub const fn after(self, delta_ms: u64) -> Self {
        Self(self.0.saturating_add(delta_ms))
    }
}

impl core::fmt::Display for Millis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
