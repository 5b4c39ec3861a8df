//! Stateless services that keep view-layer state in sync with the runtime.

mod updater;

pub use updater::{UpdateScope, ViewModelUpdater};
