//! Deterministic slot machine logic shared by every host.
//!
//! `slot-core` defines the reel data model and the [`engine::ReelSetController`]
//! state machine that drives spins, staggered stops, win evaluation and the
//! highlight effect. The controller owns no clock: hosts pass monotonic
//! millisecond timestamps into every call, and pending work lives in an ordered
//! [`engine::Timeline`] of cancellable tasks.
pub mod config;
pub mod engine;
pub mod error;
pub mod rng;
pub mod state;

pub use config::MachineConfig;
pub use engine::{
    CommandOutcome, MachineEvent, ReelSetController, Step, TimerHandle, TimerKind, Timeline,
};
pub use error::{ConfigError, IgnoreReason};
pub use rng::{PcgRng, SymbolRng};
pub use state::{
    ControlLabel, MIDDLE_SLOT, MachineSnapshot, MachineState, Millis, REEL_COUNT, Reel, ReelSet,
    SLOTS_PER_REEL, SpinOutcome, Symbol,
};
