//! ViewModelUpdater service layer for snapshot-driven updates.
//!
//! This service interprets Events from the runtime and refreshes the
//! ViewModel, reporting which sections actually changed so renderers can skip
//! untouched widgets.

use bitflags::bitflags;
use runtime::{DisplayEvent, Event};

use crate::view_model::ViewModel;

bitflags! {
    /// Tracks which parts of ViewModel have been updated.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct UpdateScope: u32 {
        /// Symbols or randomizing flags changed.
        const REELS     = 0b0001;

        /// Middle-row highlight toggled.
        const HIGHLIGHT = 0b0010;

        /// SPIN/STOP label changed.
        const CONTROL   = 0b0100;

        /// Result banner changed.
        const RESULT    = 0b1000;
    }
}

impl Default for UpdateScope {
    fn default() -> Self {
        Self::empty()
    }
}

/// Applies runtime events to a [`ViewModel`].
///
/// Only `Topic::Display` events carry state; machine events are
/// notifications and leave the ViewModel untouched.
pub struct ViewModelUpdater;

impl ViewModelUpdater {
    /// Update ViewModel based on runtime Event.
    ///
    /// Returns UpdateScope indicating which parts of ViewModel changed.
    pub fn update(view_model: &mut ViewModel, event: &Event) -> UpdateScope {
        match event {
            Event::Display(DisplayEvent::Updated(snapshot)) => {
                let next = ViewModel::from_snapshot(snapshot);
                let scope = Self::diff(view_model, &next);
                *view_model = next;
                scope
            }
            Event::Machine(_) => UpdateScope::empty(),
        }
    }

    fn diff(before: &ViewModel, after: &ViewModel) -> UpdateScope {
        let mut scope = UpdateScope::empty();

        let symbols_or_flags_changed = before.reels.iter().zip(&after.reels).any(|(a, b)| {
            a.randomizing != b.randomizing
                || a.cells.iter().zip(&b.cells).any(|(x, y)| x.symbol != y.symbol)
        });
        if symbols_or_flags_changed {
            scope |= UpdateScope::REELS;
        }

        let highlight_changed = before
            .reels
            .iter()
            .zip(&after.reels)
            .any(|(a, b)| a.middle().highlighted != b.middle().highlighted);
        if highlight_changed {
            scope |= UpdateScope::HIGHLIGHT;
        }

        if before.control_label != after.control_label {
            scope |= UpdateScope::CONTROL;
        }
        if before.outcome != after.outcome {
            scope |= UpdateScope::RESULT;
        }

        scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slot_core::{
        MachineEvent, MachineSnapshot, MachineState, REEL_COUNT, SpinOutcome, Symbol,
    };

    fn idle() -> MachineSnapshot {
        MachineSnapshot {
            symbols: [[Symbol::Cherry; 3]; REEL_COUNT],
            randomizing: [false; REEL_COUNT],
            highlighted: [false; REEL_COUNT],
            state: MachineState::Idle,
            outcome: None,
        }
    }

    #[test]
    fn spin_start_changes_reels_and_control() {
        let mut view = ViewModel::from_snapshot(&idle());
        let spinning = MachineSnapshot {
            randomizing: [true; REEL_COUNT],
            state: MachineState::Spinning,
            ..idle()
        };

        let scope = ViewModelUpdater::update(
            &mut view,
            &Event::Display(DisplayEvent::Updated(spinning)),
        );

        assert_eq!(scope, UpdateScope::REELS | UpdateScope::CONTROL);
        assert!(view.is_spinning());
    }

    #[test]
    fn highlight_revert_touches_only_highlight() {
        let won = MachineSnapshot {
            highlighted: [true; REEL_COUNT],
            outcome: Some(SpinOutcome::Jackpot),
            ..idle()
        };
        let reverted = MachineSnapshot {
            highlighted: [false; REEL_COUNT],
            ..won
        };
        let mut view = ViewModel::from_snapshot(&won);

        let scope = ViewModelUpdater::update(
            &mut view,
            &Event::Display(DisplayEvent::Updated(reverted)),
        );

        assert_eq!(scope, UpdateScope::HIGHLIGHT);
        assert!(!view.any_highlighted());
    }

    #[test]
    fn machine_events_leave_view_untouched() {
        let mut view = ViewModel::from_snapshot(&idle());
        let before = view.clone();

        let scope = ViewModelUpdater::update(&mut view, &Event::Machine(MachineEvent::SpinStarted));

        assert!(scope.is_empty());
        assert_eq!(view, before);
    }
}
