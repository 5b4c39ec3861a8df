use super::{
    ControlLabel, MIDDLE_SLOT, MachineState, REEL_COUNT, ReelSet, SLOTS_PER_REEL, SpinOutcome,
    Symbol,
};

/// Copyable read model of everything a host displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MachineSnapshot {
    /// `symbols[reel][slot]`.
    pub symbols: [[Symbol; SLOTS_PER_REEL]; REEL_COUNT],
    pub randomizing: [bool; REEL_COUNT],
    /// Highlight flag of each reel's middle slot.
    pub highlighted: [bool; REEL_COUNT],
    pub state: MachineState,
    pub outcome: Option<SpinOutcome>,
}

impl MachineSnapshot {
    pub(crate) fn capture(
        reels: &ReelSet,
        state: MachineState,
        outcome: Option<SpinOutcome>,
    ) -> Self {
        let mut symbols = [[Symbol::Seven; SLOTS_PER_REEL]; REEL_COUNT];
        let mut randomizing = [false; REEL_COUNT];
        let mut highlighted = [false; REEL_COUNT];
        for (index, reel) in reels.iter().enumerate() {
            symbols[index] = *reel.slots();
            randomizing[index] = reel.is_randomizing();
            highlighted[index] = reel.is_highlighted();
        }
        Self {
            symbols,
            randomizing,
            highlighted,
            state,
            outcome,
        }
    }

    pub fn symbol(&self, reel: usize, slot: usize) -> Option<Symbol> {
        self.symbols.get(reel)?.get(slot).copied()
    }

    pub fn middle_row(&self) -> [Symbol; REEL_COUNT] {
        core::array::from_fn(|reel| self.symbols[reel][MIDDLE_SLOT])
    }

    pub fn control_label(&self) -> ControlLabel {
        self.state.control_label()
    }

    /// Result banner text; empty while no outcome is present.
    pub fn result_message(&self) -> &'static str {
        self.outcome.map_or("", |outcome| outcome.message())
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_symbol_and_state_names() {
        let snapshot = MachineSnapshot {
            symbols: [[Symbol::Seven, Symbol::Bell, Symbol::Lemon]; REEL_COUNT],
            randomizing: [false; REEL_COUNT],
            highlighted: [true; REEL_COUNT],
            state: MachineState::Idle,
            outcome: Some(SpinOutcome::ForcedJackpot),
        };

        let json = serde_json::to_value(snapshot).unwrap();
        assert_eq!(json["state"], "Idle");
        assert_eq!(json["outcome"], "ForcedJackpot");
        assert_eq!(json["symbols"][0][1], "Bell");

        let back: MachineSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snapshot);
    }
}
