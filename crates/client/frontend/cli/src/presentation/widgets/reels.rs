//! Reel columns, three slots each, with the middle row as the pay line.

use client_frontend_core::view_model::{PresentationMapper, ReelView, ViewModel};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, areas: &[Rect], view_model: &ViewModel, theme: &RatatuiTheme) {
    for (index, (reel, area)) in view_model.reels.iter().zip(areas).enumerate() {
        render_reel(frame, *area, index, reel, theme);
    }
}

fn render_reel(frame: &mut Frame, area: Rect, index: usize, reel: &ReelView, theme: &RatatuiTheme) {
    let lines: Vec<Line> = reel
        .cells
        .iter()
        .map(|cell| {
            Line::from(Span::styled(
                format!(" {} ", cell.glyph),
                theme.style_cell(cell, reel.randomizing),
            ))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(reel.middle().highlighted))
        .title(format!("{}", index + 1));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
