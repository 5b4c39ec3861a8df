//! Event types for different topics.

use serde::{Deserialize, Serialize};

use slot_core::MachineSnapshot;

/// Events carrying what a front-end should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayEvent {
    /// The machine changed; this is its state after the step.
    Updated(MachineSnapshot),
}

impl DisplayEvent {
    pub fn snapshot(&self) -> &MachineSnapshot {
        match self {
            DisplayEvent::Updated(snapshot) => snapshot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Event;
    use slot_core::{MachineEvent, MachineState, REEL_COUNT, SpinOutcome, Symbol};

    #[test]
    fn events_survive_a_json_hop() {
        let snapshot = MachineSnapshot {
            symbols: [[Symbol::Cherry; 3]; REEL_COUNT],
            randomizing: [false; REEL_COUNT],
            highlighted: [false; REEL_COUNT],
            state: MachineState::Idle,
            outcome: Some(SpinOutcome::TryAgain),
        };
        let events = [
            Event::Display(DisplayEvent::Updated(snapshot)),
            Event::Machine(MachineEvent::Settled {
                outcome: SpinOutcome::TryAgain,
            }),
        ];

        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let back: Event = serde_json::from_str(&json).unwrap();
            assert_eq!(back, event);
        }
    }
}
