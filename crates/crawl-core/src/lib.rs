//! crawl-core: Core game logic for the crawl dungeon explorer
//!
//! This crate contains all game logic with no I/O dependencies.
//! A front end drives it through [`GameState`] and re-reads the getters
//! after every call.

pub mod action;
pub mod dungeon;
pub mod monster;
pub mod world;

mod consts;
mod gameloop;

pub use consts::*;
pub use gameloop::{GameState, StateError};
