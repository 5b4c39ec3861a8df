//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! driving the machine or streaming events from specific topics.
use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot};

use slot_core::{CommandOutcome, MachineSnapshot};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Press the spin/stop control.
    ///
    /// Resolves once the command has been applied (or ignored) by the worker.
    pub async fn spin_or_stop(&self) -> Result<CommandOutcome> {
        self.request(|reply| Command::SpinOrStop { reply }).await
    }

    /// Force a jackpot on the spin in progress.
    pub async fn cheat(&self) -> Result<CommandOutcome> {
        self.request(|reply| Command::Cheat { reply }).await
    }

    /// Query the current machine state (read-only copy)
    pub async fn snapshot(&self) -> Result<MachineSnapshot> {
        self.request(|reply| Command::QuerySnapshot { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Machine` - Raw controller events (spin, halts, settlement)
    /// - `Topic::Display` - One snapshot per step that changed what is shown
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::{DisplayEvent, Event, Topic};
    ///
    /// let mut display_rx = handle.subscribe(Topic::Display);
    /// while let Ok(Event::Display(DisplayEvent::Updated(snapshot))) = display_rx.recv().await {
    ///     // redraw from snapshot
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}
