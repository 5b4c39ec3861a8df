//! Result history panel.

use client_frontend_core::{
    message::{MessageEntry, MessageLog},
    view_model::PresentationMapper,
};
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the newest entries that fit, newest on top.
pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog, theme: &RatatuiTheme) {
    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = messages
        .recent(visible)
        .map(|entry| ListItem::new(format_entry(entry)).style(theme.style_message(entry.level)))
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("History"));

    frame.render_widget(list, area);
}

fn format_entry(entry: &MessageEntry) -> String {
    match entry.spin {
        Some(spin) => format!("#{spin} {}", entry.text),
        None => entry.text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::message::MessageLevel;

    #[test]
    fn prefixes_spin_number() {
        let entry = MessageEntry::new("JACKPOT!", Some(4), MessageLevel::Win);
        assert_eq!(format_entry(&entry), "#4 JACKPOT!");

        let plain = MessageEntry::new("ready", None, MessageLevel::Info);
        assert_eq!(format_entry(&plain), "ready");
    }
}
