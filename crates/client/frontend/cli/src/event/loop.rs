//! Event loop orchestrating runtime events, user input, and rendering.
//!
//! This module coordinates three concerns:
//! - Runtime event consumption and ViewModel updates (via ViewModelUpdater)
//! - Keyboard and mouse input forwarded to the runtime handle
//! - Rendering the ViewModel

use std::collections::HashMap;

use anyhow::Result;
use runtime::{Event as RuntimeEvent, RuntimeHandle, Topic};
use slot_core::MachineSnapshot;
use tokio::{
    sync::{broadcast, broadcast::error::RecvError},
    time::{self, Duration},
};

use crate::{
    config::CliConfig, event::CliEventConsumer, input::InputHandler, presentation::terminal::Tui,
    state::AppState,
};
use client_frontend_core::{EventConsumer, services::ViewModelUpdater, view_model::ViewModel};

/// Event loop managing ViewModel state and coordinating UI updates.
///
/// Owns the ViewModel (single source of truth for presentation state) and
/// the result history consumer; commands go straight to the runtime handle.
pub struct EventLoop {
    pub(crate) subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
    pub(crate) handle: RuntimeHandle,
    pub(crate) input: InputHandler,
    pub(crate) consumer: CliEventConsumer,
    pub(crate) app_state: AppState,
    pub(crate) view_model: ViewModel,
    pub(crate) cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(
        subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
        handle: RuntimeHandle,
        consumer: CliEventConsumer,
        initial: &MachineSnapshot,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            subscriptions,
            handle,
            input: InputHandler::new(),
            consumer,
            app_state: AppState::new(),
            view_model: ViewModel::from_snapshot(initial),
            cli_config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<CliEventConsumer> {
        self.render(terminal)?;

        let mut wakeups = Wakeups::new(
            &mut self.subscriptions,
            Duration::from_millis(self.cli_config.ui.input_poll_ms),
        );

        loop {
            let done = match wakeups.next().await {
                Wakeup::Runtime(result) => self.handle_runtime_event(result, terminal)?,
                Wakeup::Input => self.handle_input_tick(terminal).await?,
            };
            if done {
                break;
            }
        }

        Ok(self.consumer)
    }

    /// Handle runtime event and update ViewModel incrementally.
    fn handle_runtime_event(
        &mut self,
        result: Result<RuntimeEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                let impact = self.consumer.on_event(&event);

                if impact.requires_redraw {
                    let scope = ViewModelUpdater::update(&mut self.view_model, &event);

                    // Only render if something actually changed
                    if !scope.is_empty() {
                        self.render(terminal)?;
                    }
                }
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events", skipped);
                Ok(false)
            }
        }
    }
}

/// What woke the event loop.
#[derive(Debug)]
pub(crate) enum Wakeup {
    Runtime(Result<RuntimeEvent, RecvError>),
    /// Time to poll the terminal for input.
    Input,
}

/// Runtime subscriptions plus a fixed-rate input tick.
///
/// The tick is one `Interval`, so a busy event stream cannot keep pushing the
/// next input poll back.
pub(crate) struct Wakeups {
    machine_rx: Option<broadcast::Receiver<RuntimeEvent>>,
    display_rx: Option<broadcast::Receiver<RuntimeEvent>>,
    input_tick: time::Interval,
}

impl Wakeups {
    pub(crate) fn new(
        subscriptions: &mut HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
        poll_interval: Duration,
    ) -> Self {
        let mut input_tick = time::interval(poll_interval);
        input_tick.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        Self {
            machine_rx: subscriptions.remove(&Topic::Machine),
            display_rx: subscriptions.remove(&Topic::Display),
            input_tick,
        }
    }

    pub(crate) async fn next(&mut self) -> Wakeup {
        tokio::select! {
            Some(result) = recv(&mut self.machine_rx) => Wakeup::Runtime(result),
            Some(result) = recv(&mut self.display_rx) => Wakeup::Runtime(result),
            _ = self.input_tick.tick() => Wakeup::Input,
        }
    }
}

/// Receive from an optional subscription; a missing topic never resolves.
async fn recv(
    rx: &mut Option<broadcast::Receiver<RuntimeEvent>>,
) -> Option<Result<RuntimeEvent, RecvError>> {
    match rx {
        Some(rx) => Some(rx.recv().await),
        None => std::future::pending().await,
    }
}
