//! State transitions and timer handlers of the reel controller.

use tracing::{debug, info, trace};

use crate::rng::SymbolRng;
use crate::state::{MachineState, Millis, REEL_COUNT, SpinOutcome};

use super::{CommandOutcome, MachineEvent, ReelSetController, TimerHandle, TimerKind};

impl<R: SymbolRng> ReelSetController<R> {
    /// Idle → Spinning.
    pub(super) fn start_spin(
        &mut self,
        now: Millis,
        events: &mut Vec<MachineEvent>,
    ) -> CommandOutcome {
        let interval = self.config.spin_interval_ms;

        self.outcome = None;
        self.state = MachineState::Spinning;
        for (index, reel) in self.reels.iter_mut().enumerate() {
            let task = self
                .timeline
                .schedule(now.after(interval), TimerKind::Randomize { reel: index });
            reel.begin_spin(task);
        }

        debug!(%now, "spin started");
        events.push(MachineEvent::SpinStarted);
        CommandOutcome::Applied
    }

    /// Spinning → Stopping. Reel `i` halts `i * stop_stagger_ms` from now.
    pub(super) fn request_stop(
        &mut self,
        now: Millis,
        events: &mut Vec<MachineEvent>,
    ) -> CommandOutcome {
        let stagger = self.config.stop_stagger_ms;

        self.state = MachineState::Stopping;
        self.halt_tasks.clear();
        for index in 0..REEL_COUNT {
            let delay = stagger.saturating_mul(index as u64);
            let task = self
                .timeline
                .schedule(now.after(delay), TimerKind::HaltReel { reel: index });
            self.halt_tasks.push(task);
        }

        debug!(%now, stagger, "stop requested");
        events.push(MachineEvent::StopRequested);
        CommandOutcome::Applied
    }

    /// Spinning/Stopping → Idle with the jackpot symbol on the middle row.
    ///
    /// Pending halts and ticks are cancelled before the override so none of
    /// them can land on the forced result.
    pub(super) fn apply_cheat(
        &mut self,
        now: Millis,
        events: &mut Vec<MachineEvent>,
    ) -> CommandOutcome {
        for task in self.halt_tasks.drain(..) {
            self.timeline.cancel(task);
        }

        let jackpot = self.config.jackpot_symbol;
        for reel in self.reels.iter_mut() {
            if let Some(task) = reel.halt() {
                self.timeline.cancel(task);
            }
            reel.force_middle(jackpot);
        }

        let outcome = SpinOutcome::ForcedJackpot;
        self.state = MachineState::Idle;
        self.outcome = Some(outcome);

        info!(%now, symbol = %jackpot, "cheat forced a jackpot");
        events.push(MachineEvent::CheatApplied);
        events.push(MachineEvent::Settled { outcome });
        self.start_highlight(now, events);
        CommandOutcome::Applied
    }

    pub(super) fn fire(
        &mut self,
        handle: TimerHandle,
        kind: TimerKind,
        events: &mut Vec<MachineEvent>,
    ) {
        trace!(deadline = %handle.deadline(), ?kind, "timer fired");
        match kind {
            TimerKind::Randomize { reel } => self.randomize_tick(handle, reel, events),
            TimerKind::HaltReel { reel } => self.halt_reel(handle, reel, events),
            TimerKind::RevertHighlight => self.revert_highlight(handle, events),
        }
    }

    fn randomize_tick(
        &mut self,
        handle: TimerHandle,
        index: usize,
        events: &mut Vec<MachineEvent>,
    ) {
        let interval = self.config.spin_interval_ms;
        let Some(reel) = self.reels.get_mut(index) else {
            return;
        };
        if reel.spin_task() != Some(handle) || !reel.reroll(&mut self.rng) {
            debug!(reel = index, "dropping stale randomize tick");
            return;
        }

        // Reschedule from the deadline, not from `now`, so the cadence never drifts.
        let next = self.timeline.schedule(
            handle.deadline().after(interval),
            TimerKind::Randomize { reel: index },
        );
        reel.replace_spin_task(next);
        events.push(MachineEvent::ReelsRandomized { reel: index });
    }

    fn halt_reel(&mut self, handle: TimerHandle, index: usize, events: &mut Vec<MachineEvent>) {
        self.halt_tasks.retain(|task| *task != handle);

        if let Some(reel) = self.reels.get_mut(index)
            && let Some(task) = reel.halt()
        {
            self.timeline.cancel(task);
        }
        debug!(reel = index, at = %handle.deadline(), "reel stopped");
        events.push(MachineEvent::ReelStopped { reel: index });

        if self.halt_tasks.is_empty() {
            self.settle(handle.deadline(), events);
        }
    }

    /// Stopping → ResolvingWin → Idle.
    fn settle(&mut self, at: Millis, events: &mut Vec<MachineEvent>) {
        self.state = MachineState::ResolvingWin;
        let middle_row = self.reels.middle_row();
        let outcome = SpinOutcome::evaluate(middle_row);

        self.outcome = Some(outcome);
        self.state = MachineState::Idle;

        info!(%at, ?middle_row, result = outcome.message(), "spin settled");
        events.push(MachineEvent::Settled { outcome });
        if outcome.is_win() {
            self.start_highlight(at, events);
        }
    }

    /// Accents the middle row and schedules the revert, replacing any revert
    /// still pending from an earlier win.
    fn start_highlight(&mut self, at: Millis, events: &mut Vec<MachineEvent>) {
        if let Some(task) = self.highlight_task.take() {
            self.timeline.cancel(task);
        }
        for reel in self.reels.iter_mut() {
            reel.set_highlighted(true);
        }
        self.highlight_task = Some(
            self.timeline
                .schedule(at.after(self.config.highlight_ms), TimerKind::RevertHighlight),
        );
        events.push(MachineEvent::HighlightChanged { active: true });
    }

    fn revert_highlight(&mut self, handle: TimerHandle, events: &mut Vec<MachineEvent>) {
        if self.highlight_task != Some(handle) {
            return;
        }
        self.highlight_task = None;
        for reel in self.reels.iter_mut() {
            reel.set_highlighted(false);
        }
        events.push(MachineEvent::HighlightChanged { active: false });
    }
}
