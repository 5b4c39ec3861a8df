//! Machine worker that owns the authoritative [`ReelSetController`].
//!
//! Receives commands from [`crate::RuntimeHandle`], wakes up for the
//! controller's next deadline, and publishes every resulting
//! [`MachineEvent`] plus one display snapshot per visible change.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, Instant};
use tracing::{debug, info};

use slot_core::{
    CommandOutcome, MachineEvent, MachineSnapshot, Millis, ReelSetController, SymbolRng,
};

use crate::events::{DisplayEvent, Event, EventBus};

pub type BoxedRng = Box<dyn SymbolRng + Send>;

/// Commands that can be sent to the machine worker
pub enum Command {
    /// The single spin/stop control.
    SpinOrStop {
        reply: oneshot::Sender<CommandOutcome>,
    },
    /// Force the jackpot symbol onto the middle row.
    Cheat {
        reply: oneshot::Sender<CommandOutcome>,
    },
    /// Query the current machine state (read-only).
    QuerySnapshot {
        reply: oneshot::Sender<MachineSnapshot>,
    },
}

/// Background task that drives the controller in wall-clock time.
pub struct MachineWorker {
    controller: ReelSetController<BoxedRng>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    /// Controller time zero.
    started: Instant,
}

impl MachineWorker {
    pub fn new(
        controller: ReelSetController<BoxedRng>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            controller,
            command_rx,
            event_bus,
            started: Instant::now(),
        }
    }

    /// Main worker loop. Exits once every command sender is dropped.
    pub async fn run(mut self) {
        info!(target: "runtime::worker", "machine worker started");
        loop {
            let wake_at = self
                .controller
                .next_deadline()
                .map(|deadline| self.instant_of(deadline));

            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                _ = sleep_until(wake_at) => {
                    let now = self.now();
                    let events = self.controller.advance_to(now);
                    self.publish(events);
                }
            }
        }
        info!(target: "runtime::worker", "machine worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::SpinOrStop { reply } => {
                let now = self.now();
                let step = self.controller.spin_or_stop(now);
                self.publish(step.events);
                let _ = reply.send(step.outcome);
            }
            Command::Cheat { reply } => {
                let now = self.now();
                let step = self.controller.cheat(now);
                self.publish(step.events);
                let _ = reply.send(step.outcome);
            }
            Command::QuerySnapshot { reply } => {
                let _ = reply.send(self.controller.snapshot());
            }
        }
    }

    fn publish(&self, events: Vec<MachineEvent>) {
        if events.is_empty() {
            return;
        }

        let redraw = events.iter().any(MachineEvent::changes_display);
        for event in events {
            debug!(target: "runtime::worker", ?event, "machine event");
            self.event_bus.publish(Event::Machine(event));
        }
        if redraw {
            self.event_bus
                .publish(Event::Display(DisplayEvent::Updated(self.controller.snapshot())));
        }
    }

    /// Elapsed wall time since start, in controller milliseconds.
    fn now(&self) -> Millis {
        let elapsed = self.started.elapsed().as_millis();
        Millis(u64::try_from(elapsed).unwrap_or(u64::MAX))
    }

    fn instant_of(&self, at: Millis) -> Instant {
        self.started + Duration::from_millis(at.0)
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
