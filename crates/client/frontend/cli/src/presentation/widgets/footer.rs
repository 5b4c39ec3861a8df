//! Footer with key bindings and the latest status note.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const KEY_HINTS: &str = "[Enter/s] spin/stop  [Space] test 777  [q] quit";

pub fn render(frame: &mut Frame, area: Rect, status: Option<&str>) {
    let mut spans = vec![Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))];
    if let Some(status) = status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(status, Style::default().fg(Color::LightRed)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
