//! Maintains the CLI result history in response to runtime events.
use runtime::{DisplayEvent, Event};
use slot_core::{MachineEvent, MachineSnapshot, SpinOutcome};

use client_frontend_core::{
    event::{EventConsumer, EventImpact},
    message::{MessageEntry, MessageLevel, MessageLog},
};

pub struct CliEventConsumer {
    log: MessageLog,
    show_misses: bool,
    spins: u64,
    /// Outcome of the last display snapshot seen.
    shown_outcome: Option<SpinOutcome>,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog, show_misses: bool) -> Self {
        Self {
            log,
            show_misses,
            spins: 0,
            shown_outcome: None,
        }
    }

    pub fn spins(&self) -> u64 {
        self.spins
    }

    /// Records a result the first time a snapshot shows it.
    ///
    /// Keyed on display snapshots rather than `Settled` so the entry always
    /// carries the middle row the player actually sees.
    fn observe_snapshot(&mut self, snapshot: &MachineSnapshot) {
        let previous = std::mem::replace(&mut self.shown_outcome, snapshot.outcome);
        let Some(outcome) = snapshot.outcome else {
            return;
        };
        if previous.is_some() {
            return;
        }
        if outcome == SpinOutcome::TryAgain && !self.show_misses {
            return;
        }

        let row: Vec<&str> = snapshot
            .middle_row()
            .iter()
            .map(|symbol| symbol.glyph())
            .collect();
        let text = format!("{} {}", row.join(" "), outcome.message());

        self.log.push(MessageEntry::new(
            text,
            Some(self.spins),
            MessageLevel::for_outcome(outcome),
        ));
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        match event {
            Event::Machine(MachineEvent::SpinStarted) => {
                self.spins += 1;
                EventImpact::none()
            }
            Event::Machine(event) => {
                tracing::trace!(?event, "machine event");
                EventImpact::none()
            }
            Event::Display(DisplayEvent::Updated(snapshot)) => {
                self.observe_snapshot(snapshot);
                EventImpact::redraw()
            }
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}
