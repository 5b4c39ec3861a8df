//! Cross-frontend primitives for presenting the machine.
//!
//! Houses the result history log, event handling, and view-model types that
//! the terminal client and any future graphical client can reuse.
pub mod config;
pub mod event;
pub mod frontend;
pub mod message;
pub mod services;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use event::{EventConsumer, EventImpact};
pub use frontend::Frontend;
pub use services::{UpdateScope, ViewModelUpdater};
pub use view_model::{CellView, PresentationMapper, ReelView, ViewModel};
