//! Ratatui theme implementation of PresentationMapper.
//!
//! This module provides concrete styling for the terminal UI, implementing
//! the framework-agnostic PresentationMapper trait from frontend-core.

use client_frontend_core::{
    message::MessageLevel,
    view_model::{CellView, PresentationMapper},
};
use ratatui::style::{Color, Modifier, Style};
use slot_core::{ControlLabel, MachineState, SpinOutcome};

/// Ratatui-specific theme implementing PresentationMapper.
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn border(&self, active: bool) -> Style {
        if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_cell(&self, cell: &CellView, reel_randomizing: bool) -> Self::Style {
        if cell.highlighted {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }

        let style = Style::default().fg(Color::White);
        if reel_randomizing {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }

    fn style_control(&self, label: ControlLabel, state: MachineState) -> Self::Style {
        let color = match label {
            ControlLabel::Spin => Color::Green,
            ControlLabel::Stop => Color::LightRed,
        };
        let style = Style::default().fg(color).add_modifier(Modifier::BOLD);

        // The halt sequence is already running; further presses are ignored.
        if state == MachineState::Stopping {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }

    fn style_result(&self, outcome: Option<SpinOutcome>) -> Self::Style {
        match outcome {
            Some(outcome) if outcome.is_win() => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Some(_) => Style::default().fg(Color::Yellow),
            None => Style::default().fg(Color::DarkGray),
        }
    }

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Win => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}
