//! Reel state machine and its timer-driven animation sequence.
//!
//! The [`ReelSetController`] is the only writer of the [`ReelSet`]. Each public
//! call is one step: tasks due at or before `now` fire in [`Timeline`] order,
//! the command (if any) applies, then tasks that became due at `now` fire.
//! Steps return the [`MachineEvent`]s they produced so hosts can publish them
//! without diffing state.

mod events;
mod timeline;
mod transition;


pub use events::{CommandOutcome, MachineEvent, Step};
pub use timeline::{TimerHandle, TimerKind, Timeline};

use arrayvec::ArrayVec;
use tracing::debug;

use crate::config::MachineConfig;
use crate::error::{ConfigError, IgnoreReason};
use crate::rng::SymbolRng;
use crate::state::{
    ControlLabel, MachineSnapshot, MachineState, Millis, REEL_COUNT, ReelSet, SpinOutcome, Symbol,
};

/// Owns the spin/stop lifecycle of the three reels.
///
/// State transitions:
///
/// ```text
/// Idle --spin--> Spinning --stop--> Stopping --last halt--> ResolvingWin --> Idle
///                   |                   |
///                   +------cheat--------+--------------------------------> Idle
/// ```
///
/// Commands issued in any other state are ignored and reported as
/// [`CommandOutcome::Ignored`].
pub struct ReelSetController<R: SymbolRng> {
    config: MachineConfig,
    rng: R,
    reels: ReelSet,
    state: MachineState,
    outcome: Option<SpinOutcome>,
    timeline: Timeline,
    /// Pending staggered-stop tasks, in reel order.
    halt_tasks: ArrayVec<TimerHandle, REEL_COUNT>,
    highlight_task: Option<TimerHandle>,
    now: Millis,
}

impl<R: SymbolRng> ReelSetController<R> {
    /// Creates an idle controller with every slot drawn from `rng`.
    pub fn new(config: MachineConfig, mut rng: R) -> Result<Self, ConfigError> {
        let reels = ReelSet::random(&mut rng);
        Self::with_reels(config, rng, reels)
    }

    /// Creates an idle controller showing the given reels.
    pub fn with_reels(config: MachineConfig, rng: R, reels: ReelSet) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            reels,
            state: MachineState::Idle,
            outcome: None,
            timeline: Timeline::new(),
            halt_tasks: ArrayVec::new(),
            highlight_task: None,
            now: Millis::ZERO,
        })
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    pub fn reels(&self) -> &ReelSet {
        &self.reels
    }

    /// Symbol at `(reel, slot)`, or `None` outside the 3×3 grid.
    pub fn symbol(&self, reel: usize, slot: usize) -> Option<Symbol> {
        self.reels.get(reel)?.symbol(slot)
    }

    /// Whether the middle slot of `reel` currently carries the win accent.
    pub fn is_highlighted(&self, reel: usize) -> bool {
        self.reels.get(reel).is_some_and(|reel| reel.is_highlighted())
    }

    pub fn control_label(&self) -> ControlLabel {
        self.state.control_label()
    }

    pub fn outcome(&self) -> Option<SpinOutcome> {
        self.outcome
    }

    pub fn result_message(&self) -> &'static str {
        self.outcome.map_or("", |outcome| outcome.message())
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot::capture(&self.reels, self.state, self.outcome)
    }

    /// Latest timestamp the controller has observed.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// When the host should call [`Self::advance_to`] next, if anything is pending.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timeline.next_deadline()
    }

    pub fn pending_tasks(&self) -> usize {
        self.timeline.len()
    }

    /// The single spin/stop control: spins when idle, stops while spinning.
    pub fn spin_or_stop(&mut self, now: Millis) -> Step {
        self.step(now, |this, now, events| match this.state {
            MachineState::Idle => this.start_spin(now, events),
            MachineState::Spinning => this.request_stop(now, events),
            MachineState::Stopping => CommandOutcome::Ignored {
                reason: IgnoreReason::StopPending,
            },
            MachineState::ResolvingWin => CommandOutcome::Ignored {
                reason: IgnoreReason::SpinInProgress,
            },
        })
    }

    pub fn spin(&mut self, now: Millis) -> Step {
        self.step(now, |this, now, events| match this.state {
            MachineState::Idle => this.start_spin(now, events),
            MachineState::Spinning | MachineState::Stopping | MachineState::ResolvingWin => {
                CommandOutcome::Ignored {
                    reason: IgnoreReason::SpinInProgress,
                }
            }
        })
    }

    pub fn stop(&mut self, now: Millis) -> Step {
        self.step(now, |this, now, events| match this.state {
            MachineState::Spinning => this.request_stop(now, events),
            MachineState::Stopping | MachineState::ResolvingWin => CommandOutcome::Ignored {
                reason: IgnoreReason::StopPending,
            },
            MachineState::Idle => CommandOutcome::Ignored {
                reason: IgnoreReason::NotSpinning,
            },
        })
    }

    /// Forces a jackpot while a spin is in progress.
    pub fn cheat(&mut self, now: Millis) -> Step {
        self.step(now, |this, now, events| match this.state {
            MachineState::Spinning | MachineState::Stopping => this.apply_cheat(now, events),
            MachineState::Idle | MachineState::ResolvingWin => CommandOutcome::Ignored {
                reason: IgnoreReason::NotSpinning,
            },
        })
    }

    /// Fires every task due at or before `now`.
    pub fn advance_to(&mut self, now: Millis) -> Vec<MachineEvent> {
        let now = self.observe(now);
        let mut events = Vec::new();
        self.fire_due(now, &mut events);
        events
    }

    fn step<F>(&mut self, now: Millis, command: F) -> Step
    where
        F: FnOnce(&mut Self, Millis, &mut Vec<MachineEvent>) -> CommandOutcome,
    {
        let now = self.observe(now);
        let mut events = Vec::new();

        self.fire_due(now, &mut events);
        let outcome = command(self, now, &mut events);
        if let CommandOutcome::Ignored { reason } = outcome {
            debug!(state = self.state.as_str(), %reason, "command ignored");
        }
        self.fire_due(now, &mut events);

        Step { outcome, events }
    }

    /// Records `now`, clamping timestamps that run backwards.
    fn observe(&mut self, now: Millis) -> Millis {
        if now < self.now {
            debug!(%now, last = %self.now, "clamping non-monotonic timestamp");
            return self.now;
        }
        self.now = now;
        now
    }

    fn fire_due(&mut self, now: Millis, events: &mut Vec<MachineEvent>) {
        while let Some((handle, kind)) = self.timeline.pop_due(now) {
            self.fire(handle, kind, events);
        }
    }
}
