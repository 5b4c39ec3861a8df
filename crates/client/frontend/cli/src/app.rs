//! Glue code tying the runtime handle and terminal UI together.
use anyhow::{Context, Result};
use async_trait::async_trait;

use runtime::{RuntimeHandle, Topic};

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal;
use client_frontend_core::{EventConsumer, FrontendConfig, frontend::Frontend, message::MessageLog};

/// Terminal frontend.
///
/// Holds only configuration; the runtime arrives as a handle in [`Frontend::run`].
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        // Subscribe before the first query so no step falls between the two.
        let subscriptions = handle.subscribe_multiple(&[Topic::Machine, Topic::Display]);
        let initial = handle
            .snapshot()
            .await
            .context("failed to query initial machine state")?;

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push_text("Press Enter to spin.");
        let consumer = CliEventConsumer::new(messages, self.frontend_config.messages.show_misses);

        let event_loop = EventLoop::new(
            subscriptions,
            handle,
            consumer,
            &initial,
            self.cli_config.clone(),
        );

        let _guard = terminal::TerminalGuard;
        let mut terminal = terminal::init()?;

        let consumer = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!(
            spins = consumer.spins(),
            history = consumer.message_log().len(),
            "CLI frontend exiting"
        );

        Ok(())
    }
}
