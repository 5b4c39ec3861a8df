//! Header widget displaying the machine state and spin counter.

use client_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the header panel.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, spins: u64) {
    let text = vec![Line::from(vec![
        Span::raw("State: "),
        Span::styled(
            view_model.state.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Spins: "),
        Span::styled(spins.to_string(), Style::default().fg(Color::LightGreen)),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Slot Machine"));

    frame.render_widget(paragraph, area);
}
