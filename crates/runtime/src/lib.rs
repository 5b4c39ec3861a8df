//! Tokio host for the slot machine controller.
//!
//! This crate owns a [`slot_core::ReelSetController`] inside a background
//! worker, maps wall-clock time onto controller milliseconds, and exposes the
//! machine to front-ends through a cloneable [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`rng`] adapts `rand` generators to the controller's symbol source
//! - `workers` keeps the machine task internal to the crate
pub mod api;
pub mod events;
pub mod rng;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{DisplayEvent, Event, EventBus, Topic};
pub use rng::StdSymbolRng;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
