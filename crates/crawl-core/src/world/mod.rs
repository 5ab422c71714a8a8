//! Game world bookkeeping: quest log, undo history and options

pub mod options;
pub mod quest_log;
pub mod undo;

pub use options::{GameOptions, OptionsError};
pub use quest_log::QuestLog;
pub use undo::UndoHistory;
