//! Result banner shown after a spin settles.

use client_frontend_core::view_model::{PresentationMapper, ViewModel};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let paragraph = Paragraph::new(view_model.result_message)
        .style(theme.style_result(view_model.outcome))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Result"));

    frame.render_widget(paragraph, area);
}
