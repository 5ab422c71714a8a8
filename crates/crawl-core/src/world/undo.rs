//! Undo history of player positions

use serde::{Deserialize, Serialize};

use crate::dungeon::Position;

/// Stack of positions the player stood on before each move
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoHistory {
    stack: Vec<Position>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember where the player was before a move
    pub fn record(&mut self, pos: Position) {
        self.stack.push(pos);
    }

    pub fn pop(&mut self) -> Option<Position> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Recorded positions, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.stack.iter()
    }
}
