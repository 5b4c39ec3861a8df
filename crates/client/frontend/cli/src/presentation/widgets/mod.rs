//! Widget components for the terminal UI.
//!
//! Each widget renders one region of the [`super::ui::ScreenLayout`] from the
//! shared ViewModel.

pub mod control;
pub mod footer;
pub mod header;
pub mod history;
pub mod reels;
pub mod result;
