//! Input processing for the CLI client.
//!
//! This module owns the keyboard/mouse-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// High-level outcome of processing an input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Press the SPIN/STOP control.
    SpinOrStop,
    /// Press the test-only cheat control.
    Cheat,
    /// No meaningful command was produced.
    None,
}

/// Translates terminal events into machine commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    ///
    /// Only presses count; release and repeat events map to [`KeyAction::None`]
    /// so holding a key cannot queue extra spins.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Enter => KeyAction::SpinOrStop,
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            's' => KeyAction::SpinOrStop,
            ' ' => KeyAction::Cheat,
            _ => KeyAction::None,
        }
    }

    /// A left click inside the control button spins or stops.
    pub fn handle_mouse(&self, mouse: MouseEvent, control_area: Rect) -> KeyAction {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left)
                if control_area.contains(Position::new(mouse.column, mouse.row)) =>
            {
                KeyAction::SpinOrStop
            }
            _ => KeyAction::None,
        }
    }
}
