//! Machine timing constants and tunable parameters.
use crate::error::ConfigError;
use crate::state::Symbol;

/// Tunable cadence and jackpot settings for a [`crate::ReelSetController`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MachineConfig {
    /// Interval between two randomization ticks of a spinning reel.
    pub spin_interval_ms: u64,
    /// Delay between consecutive reel halts after a stop command.
    /// Reel `i` halts `i * stop_stagger_ms` after the command.
    pub stop_stagger_ms: u64,
    /// How long the middle row stays highlighted after a win.
    pub highlight_ms: u64,
    /// Symbol forced onto the middle row by the cheat command.
    pub jackpot_symbol: Symbol,
}

impl MachineConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SPIN_INTERVAL_MS: u64 = 50;
    pub const DEFAULT_STOP_STAGGER_MS: u64 = 500;
    pub const DEFAULT_HIGHLIGHT_MS: u64 = 500;
    pub const DEFAULT_JACKPOT_SYMBOL: Symbol = Symbol::Seven;

    pub const fn new() -> Self {
        Self {
            spin_interval_ms: Self::DEFAULT_SPIN_INTERVAL_MS,
            stop_stagger_ms: Self::DEFAULT_STOP_STAGGER_MS,
            highlight_ms: Self::DEFAULT_HIGHLIGHT_MS,
            jackpot_symbol: Self::DEFAULT_JACKPOT_SYMBOL,
        }
    }

    #[must_use]
    pub const fn with_spin_interval(mut self, spin_interval_ms: u64) -> Self {
        self.spin_interval_ms = spin_interval_ms;
        self
    }

    #[must_use]
    pub const fn with_stop_stagger(mut self, stop_stagger_ms: u64) -> Self {
        self.stop_stagger_ms = stop_stagger_ms;
        self
    }

    #[must_use]
    pub const fn with_highlight(mut self, highlight_ms: u64) -> Self {
        self.highlight_ms = highlight_ms;
        self
    }

    #[must_use]
    pub const fn with_jackpot_symbol(mut self, jackpot_symbol: Symbol) -> Self {
        self.jackpot_symbol = jackpot_symbol;
        self
    }

    /// Checks that the configuration can drive a controller.
    ///
    /// A zero spin interval would reschedule a randomization tick at the same
    /// instant forever.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spin_interval_ms == 0 {
            return Err(ConfigError::ZeroSpinInterval);
        }
        Ok(())
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::new()
    }
}
