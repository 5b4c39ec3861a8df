//! Input handling (keyboard, mouse and resize).

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent};
use slot_core::CommandOutcome;
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl EventLoop {
    /// Poll for terminal input without blocking the runtime event branches.
    pub(in crate::event) async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        let action = match term_event::read()? {
            TermEvent::Key(key) => self.input.handle_key(key),
            TermEvent::Mouse(mouse) => {
                let control = self.app_state.control_area();
                self.input.handle_mouse(mouse, control)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                return Ok(false);
            }
            _ => KeyAction::None,
        };

        self.handle_action(action, terminal).await
    }

    /// Forward a decoded action to the runtime. Returns `true` to exit.
    pub(in crate::event) async fn handle_action(
        &mut self,
        action: KeyAction,
        terminal: &mut Tui,
    ) -> Result<bool> {
        let result = match action {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                return Ok(true);
            }
            KeyAction::SpinOrStop => self.handle.spin_or_stop().await,
            KeyAction::Cheat => self.handle.cheat().await,
            KeyAction::None => return Ok(false),
        };

        match result {
            Ok(outcome) => {
                self.note_outcome(outcome, terminal)?;
                Ok(false)
            }
            Err(e) => {
                tracing::error!("Runtime rejected command: {}", e);
                Ok(true)
            }
        }
    }

    fn note_outcome(&mut self, outcome: CommandOutcome, terminal: &mut Tui) -> Result<()> {
        let before = self.app_state.status();
        self.app_state.record_outcome(outcome);

        if let CommandOutcome::Ignored { reason } = outcome {
            tracing::debug!(%reason, "command ignored");
        }
        // Applied commands redraw through the display topic.
        if before != self.app_state.status() {
            self.render(terminal)?;
        }
        Ok(())
    }
}
