//! Worker tasks that back the runtime orchestration.
//!
//! The machine worker is the only owner of the controller; everything else
//! talks to it through commands and the event bus.

mod machine;

pub use machine::{Command, MachineWorker};
