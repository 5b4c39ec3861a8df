//! View-model derived from [`slot_core::MachineSnapshot`].
use slot_core::{
    ControlLabel, MIDDLE_SLOT, MachineSnapshot, MachineState, REEL_COUNT, SLOTS_PER_REEL,
    SpinOutcome, Symbol,
};

use crate::message::MessageLevel;

/// One slot as it should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    pub symbol: Symbol,
    pub glyph: &'static str,
    /// Only ever true for the middle slot.
    pub highlighted: bool,
}

/// One reel column, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReelView {
    pub cells: [CellView; SLOTS_PER_REEL],
    pub randomizing: bool,
}

impl ReelView {
    pub fn middle(&self) -> &CellView {
        &self.cells[MIDDLE_SLOT]
    }
}

/// Presentation-ready machine state owned by the event loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    pub reels: [ReelView; REEL_COUNT],
    pub state: MachineState,
    pub control_label: ControlLabel,
    pub outcome: Option<SpinOutcome>,
    /// Result banner text; empty while no outcome is shown.
    pub result_message: &'static str,
}

impl ViewModel {
    pub fn from_snapshot(snapshot: &MachineSnapshot) -> Self {
        let reels = core::array::from_fn(|reel| ReelView {
            cells: core::array::from_fn(|slot| {
                let symbol = snapshot.symbols[reel][slot];
                CellView {
                    symbol,
                    glyph: symbol.glyph(),
                    highlighted: slot == MIDDLE_SLOT && snapshot.highlighted[reel],
                }
            }),
            randomizing: snapshot.randomizing[reel],
        });

        Self {
            reels,
            state: snapshot.state,
            control_label: snapshot.control_label(),
            outcome: snapshot.outcome,
            result_message: snapshot.result_message(),
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.state.is_spin_in_progress()
    }

    pub fn any_highlighted(&self) -> bool {
        self.reels.iter().any(|reel| reel.middle().highlighted)
    }

    pub fn middle_row(&self) -> [Symbol; REEL_COUNT] {
        core::array::from_fn(|reel| self.reels[reel].middle().symbol)
    }
}

/// Framework-agnostic styling rules for presenting a [`ViewModel`].
///
/// Each frontend supplies its own `Style` type (ratatui styles, CSS classes,
/// ...) while the rules about *what* gets emphasized stay shared.
pub trait PresentationMapper {
    type Style;

    /// Style of one slot. Highlighted middle cells get the win accent.
    fn style_cell(&self, cell: &CellView, reel_randomizing: bool) -> Self::Style;

    fn style_control(&self, label: ControlLabel, state: MachineState) -> Self::Style;

    fn style_result(&self, outcome: Option<SpinOutcome>) -> Self::Style;

    fn style_message(&self, level: MessageLevel) -> Self::Style;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> MachineSnapshot {
        MachineSnapshot {
            symbols: [
                [Symbol::Lemon, Symbol::Seven, Symbol::Bell],
                [Symbol::Star, Symbol::Seven, Symbol::Cherry],
                [Symbol::Watermelon, Symbol::Seven, Symbol::Lemon],
            ],
            randomizing: [false; REEL_COUNT],
            highlighted: [true; REEL_COUNT],
            state: MachineState::Idle,
            outcome: Some(SpinOutcome::Jackpot),
        }
    }

    #[test]
    fn only_middle_cells_carry_the_highlight() {
        let view = ViewModel::from_snapshot(&snapshot());

        for reel in &view.reels {
            assert!(!reel.cells[0].highlighted);
            assert!(reel.middle().highlighted);
            assert!(!reel.cells[2].highlighted);
        }
        assert!(view.any_highlighted());
    }

    #[test]
    fn copies_labels_and_glyphs() {
        let view = ViewModel::from_snapshot(&snapshot());

        assert_eq!(view.control_label, ControlLabel::Spin);
        assert_eq!(view.result_message, "JACKPOT!");
        assert_eq!(view.reels[0].cells[0].glyph, "🍋");
        assert_eq!(view.middle_row(), [Symbol::Seven; REEL_COUNT]);
        assert!(!view.is_spinning());
    }
}
