use super::{REEL_COUNT, Symbol};

/// Lifecycle of the reel set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MachineState {
    /// Ready to spin.
    #[default]
    Idle,
    /// All reels randomizing, waiting for a stop command.
    Spinning,
    /// Halt sequence running; some reels may still be randomizing.
    Stopping,
    /// Every reel halted, outcome being computed. Never observable between steps.
    ResolvingWin,
}

impl MachineState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Spinning => "spinning",
            Self::Stopping => "stopping",
            Self::ResolvingWin => "resolving_win",
        }
    }

    /// True from the spin command until settlement.
    pub const fn is_spin_in_progress(&self) -> bool {
        matches!(self, Self::Spinning | Self::Stopping)
    }

    /// Label the spin/stop control shows in this state.
    pub const fn control_label(&self) -> ControlLabel {
        match self {
            Self::Spinning | Self::Stopping => ControlLabel::Stop,
            Self::Idle | Self::ResolvingWin => ControlLabel::Spin,
        }
    }
}

/// Text on the spin/stop control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlLabel {
    Spin,
    Stop,
}

impl ControlLabel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spin => "SPIN",
            Self::Stop => "STOP",
        }
    }
}

impl core::fmt::Display for ControlLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a settled spin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpinOutcome {
    /// All three middle symbols matched after a natural stop.
    Jackpot,
    /// The middle row did not match.
    TryAgain,
    /// The cheat command forced the jackpot symbol onto the middle row.
    ForcedJackpot,
}

impl SpinOutcome {
    /// Evaluates a naturally settled middle row.
    pub fn evaluate(middle_row: [Symbol; REEL_COUNT]) -> Self {
        let [first, rest @ ..] = middle_row;
        if rest.iter().all(|symbol| *symbol == first) {
            Self::Jackpot
        } else {
            Self::TryAgain
        }
    }

    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Jackpot | Self::ForcedJackpot)
    }

    /// Result banner text.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Jackpot => "JACKPOT!",
            Self::TryAgain => "Try Again!",
            Self::ForcedJackpot => "Test 777 JACKPOT!",
        }
    }
}

impl core::fmt::Display for SpinOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_middle_row_is_a_jackpot() {
        assert_eq!(
            SpinOutcome::evaluate([Symbol::Cherry, Symbol::Cherry, Symbol::Cherry]),
            SpinOutcome::Jackpot
        );
    }

    #[test]
    fn any_mismatch_is_try_again() {
        assert_eq!(
            SpinOutcome::evaluate([Symbol::Cherry, Symbol::Lemon, Symbol::Cherry]),
            SpinOutcome::TryAgain
        );
        assert_eq!(
            SpinOutcome::evaluate([Symbol::Seven, Symbol::Seven, Symbol::Bell]),
            SpinOutcome::TryAgain
        );
    }

    #[test]
    fn forced_win_message_is_distinct() {
        assert!(SpinOutcome::ForcedJackpot.is_win());
        assert_ne!(
            SpinOutcome::ForcedJackpot.message(),
            SpinOutcome::Jackpot.message()
        );
        assert!(!SpinOutcome::TryAgain.is_win());
    }

    #[test]
    fn labels_follow_state() {
        assert_eq!(MachineState::Idle.control_label(), ControlLabel::Spin);
        assert_eq!(MachineState::Spinning.control_label(), ControlLabel::Stop);
        assert_eq!(MachineState::Stopping.control_label(), ControlLabel::Stop);
        assert_eq!(ControlLabel::Stop.to_string(), "STOP");
    }
}
