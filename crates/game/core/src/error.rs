//! Error and rejection types for slot-core.
//!
//! The controller itself never fails: commands issued in the wrong state are
//! ignored and reported through [`IgnoreReason`]. The only hard error is an
//! unusable [`crate::MachineConfig`].

/// Invalid machine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("spin interval must be greater than zero")]
    ZeroSpinInterval,
}

/// Why a command was ignored in the current machine state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IgnoreReason {
    /// A spin was requested while the previous one has not settled.
    SpinInProgress,
    /// A stop was requested while the halt sequence is already running.
    StopPending,
    /// Stop or cheat was requested while the machine is idle.
    NotSpinning,
}

impl IgnoreReason {
    /// Returns a short identifier, handy for logs and metrics.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SpinInProgress => "spin_in_progress",
            Self::StopPending => "stop_pending",
            Self::NotSpinning => "not_spinning",
        }
    }
}

impl core::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
