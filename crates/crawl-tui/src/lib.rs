//! crawl-tui: Terminal UI layer using ratatui
//!
//! Turns key presses into calls on the game state and draws its getters.

pub mod app;
pub mod input;
pub mod widgets;

pub use app::{App, UiMode};
pub use input::UiAction;
