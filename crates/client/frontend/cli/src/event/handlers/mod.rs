//! Event handler implementations for EventLoop.
//!
//! - `input`: keyboard, mouse and resize handling
//! - `rendering`: terminal rendering
//!
//! Both are `impl EventLoop` blocks in separate files.

mod input;
mod rendering;
