//! Screen layout and the main render entry point composing all widgets.
use anyhow::Result;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use slot_core::REEL_COUNT;

use crate::{
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::AppState,
};
use client_frontend_core::{message::MessageLog, view_model::ViewModel};

const HEADER_HEIGHT: u16 = 3;
/// Three slots plus borders.
const REEL_HEIGHT: u16 = 5;
const REEL_WIDTH: u16 = 10;
const RESULT_HEIGHT: u16 = 3;
const CONTROL_HEIGHT: u16 = 3;
const CONTROL_WIDTH: u16 = 14;
const FOOTER_HEIGHT: u16 = 1;

/// Everything the UI needs for one frame.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub spins: u64,
    pub history_panel_height: u16,
}

/// Screen regions, recomputed every frame so resizes take effect immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub reels: [Rect; REEL_COUNT],
    pub result: Rect,
    pub control: Rect,
    pub history: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect, history_panel_height: u16) -> Self {
        let [header, reel_row, result, control_row, history, footer, _] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(REEL_HEIGHT),
            Constraint::Length(RESULT_HEIGHT),
            Constraint::Length(CONTROL_HEIGHT),
            Constraint::Length(history_panel_height),
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(area);

        let reels: [Rect; REEL_COUNT] =
            Layout::horizontal([Constraint::Length(REEL_WIDTH); REEL_COUNT])
                .flex(Flex::Center)
                .areas(reel_row);
        let [control] = Layout::horizontal([Constraint::Length(CONTROL_WIDTH)])
            .flex(Flex::Center)
            .areas(control_row);

        Self {
            header,
            reels,
            result,
            control,
            history,
            footer,
        }
    }
}

/// Draw one frame and return the layout that was used, so mouse clicks can be
/// hit-tested against the control that is actually on screen.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<ScreenLayout> {
    let theme = RatatuiTheme;
    let mut drawn = None;

    terminal.draw(|frame| {
        let layout = ScreenLayout::new(frame.area(), ctx.history_panel_height);

        widgets::header::render(frame, layout.header, ctx.view_model, ctx.spins);
        widgets::reels::render(frame, &layout.reels, ctx.view_model, &theme);
        widgets::result::render(frame, layout.result, ctx.view_model, &theme);
        widgets::control::render(frame, layout.control, ctx.view_model, &theme);
        widgets::history::render(frame, layout.history, ctx.messages, &theme);
        widgets::footer::render(frame, layout.footer, ctx.app_state.status());

        drawn = Some(layout);
    })?;

    Ok(drawn.unwrap_or(ctx.app_state.layout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacks_sections_top_to_bottom() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 40), 8);

        assert_eq!(layout.header.y, 0);
        assert_eq!(layout.reels[0].y, HEADER_HEIGHT);
        assert_eq!(layout.result.y, HEADER_HEIGHT + REEL_HEIGHT);
        assert_eq!(layout.control.y, layout.result.y + RESULT_HEIGHT);
        assert_eq!(layout.history.height, 8);
        assert_eq!(layout.footer.y, layout.history.y + 8);
    }

    #[test]
    fn centers_reels_and_control() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 40), 8);

        assert_eq!(layout.control.width, CONTROL_WIDTH);
        assert_eq!(layout.control.x, (80 - CONTROL_WIDTH) / 2);

        for pair in layout.reels.windows(2) {
            assert_eq!(pair[0].right(), pair[1].x);
        }
        let left = layout.reels[0].x;
        let right = 80 - layout.reels[REEL_COUNT - 1].right();
        assert!(left.abs_diff(right) <= 1);
    }

    #[test]
    fn history_height_follows_config() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 40), 12);
        assert_eq!(layout.history.height, 12);
    }
}
