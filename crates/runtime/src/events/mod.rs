//! Topic-based event bus for runtime events.
//!
//! Controller events go to [`Topic::Machine`]; redraw snapshots go to
//! [`Topic::Display`]. Consumers subscribe only to the topics they need.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::DisplayEvent;
