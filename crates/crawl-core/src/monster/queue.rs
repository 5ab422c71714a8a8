//! Round-robin monster turn order

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::dungeon::{DungeonMap, Position, Tile};

/// Monster positions in turn order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterQueue {
    queue: VecDeque<Position>,
}

impl MonsterQueue {
    /// Seed with every monster tile of `map`, row-major
    pub fn from_map(map: &DungeonMap) -> Self {
        Self {
            queue: map.positions_of(Tile::Monster).into(),
        }
    }

    /// Give the front monster its turn and send it to the back of the queue.
    ///
    /// Returns the monster that acted, or `None` when there are no monsters.
    pub fn advance(&mut self) -> Option<Position> {
        let pos = self.queue.pop_front()?;
        self.queue.push_back(pos);
        Some(pos)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.queue.iter()
    }
}
