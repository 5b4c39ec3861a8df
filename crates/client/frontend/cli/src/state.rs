//! Application state that lives outside the machine snapshot.

use ratatui::layout::Rect;
use slot_core::{CommandOutcome, IgnoreReason};

use crate::presentation::ui::ScreenLayout;

/// Mutable UI state owned by the event loop.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Layout of the last drawn frame.
    pub layout: ScreenLayout,
    status: Option<&'static str>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            layout: ScreenLayout::new(Rect::default(), 0),
            status: None,
        }
    }

    pub fn control_area(&self) -> Rect {
        self.layout.control
    }

    /// Note why the last command did nothing; applied commands clear it.
    pub fn record_outcome(&mut self, outcome: CommandOutcome) {
        self.status = match outcome {
            CommandOutcome::Applied => None,
            CommandOutcome::Ignored { reason } => Some(ignored_text(reason)),
        };
    }

    pub fn status(&self) -> Option<&'static str> {
        self.status
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn ignored_text(reason: IgnoreReason) -> &'static str {
    match reason {
        IgnoreReason::SpinInProgress => "spin already running",
        IgnoreReason::StopPending => "reels are already stopping",
        IgnoreReason::NotSpinning => "reels are not spinning",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignored_commands_leave_a_note_until_the_next_applied_one() {
        let mut state = AppState::new();
        assert_eq!(state.status(), None);

        state.record_outcome(CommandOutcome::Ignored {
            reason: IgnoreReason::NotSpinning,
        });
        assert_eq!(state.status(), Some("reels are not spinning"));

        state.record_outcome(CommandOutcome::Applied);
        assert_eq!(state.status(), None);
    }
}
