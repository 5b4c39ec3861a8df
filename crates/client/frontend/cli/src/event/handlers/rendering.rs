//! Rendering handlers.

use anyhow::Result;
use client_frontend_core::EventConsumer;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Render current state using ViewModel.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            view_model: &self.view_model,
            messages: self.consumer.message_log(),
            app_state: &self.app_state,
            spins: self.consumer.spins(),
            history_panel_height: self.cli_config.ui.history_panel_height,
        };

        let layout = ui::render(terminal, &ctx)?;
        self.app_state.layout = layout;
        Ok(())
    }
}
