//! Fog-of-war visibility
//!
//! Cells start hidden and are uncovered by a flood fill from the player.
//! Once visible a cell stays visible until the game is re-initialised.

use log::trace;
use serde::{Deserialize, Serialize};

use super::map::{DungeonMap, Position};

/// Per-cell visibility, same shape as the map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FogOfWar {
    visible: Vec<Vec<bool>>,
}

impl FogOfWar {
    /// All cells hidden
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            visible: vec![vec![false; cols]; rows],
        }
    }

    pub fn is_visible(&self, pos: Position) -> bool {
        self.visible
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .unwrap_or(false)
    }

    /// Read-only view of the visibility grid, row by row
    pub fn grid(&self) -> &[Vec<bool>] {
        &self.visible
    }

    /// Whether the grid is `rows` by `cols`
    pub fn has_shape(&self, rows: usize, cols: usize) -> bool {
        self.visible.len() == rows && self.visible.iter().all(|line| line.len() == cols)
    }

    /// Number of visible cells
    pub fn revealed_count(&self) -> usize {
        self.visible.iter().flatten().filter(|&&v| v).count()
    }

    /// Flood-fill reveal over 4-connected neighbours starting at `seed`.
    ///
    /// Walls are revealed when reached but do not spread the reveal further.
    /// An already-visible cell is never expanded again, which keeps the fill
    /// finite on cyclic grids and makes repeated calls no-ops.
    ///
    /// Returns the number of newly revealed cells.
    pub fn reveal_from(&mut self, map: &DungeonMap, seed: Position) -> usize {
        let mut revealed = 0;
        let mut stack = vec![seed];

        while let Some(pos) = stack.pop() {
            let Some(tile) = map.tile(pos) else {
                continue;
            };
            let Some(cell) = self
                .visible
                .get_mut(pos.row)
                .and_then(|row| row.get_mut(pos.col))
            else {
                continue;
            };
            if *cell {
                continue;
            }
            *cell = true;
            revealed += 1;

            if !tile.is_wall() {
                stack.extend(map.neighbours(pos));
            }
        }

        trace!("revealed {} cells from ({}, {})", revealed, seed.row, seed.col);
        revealed
    }
}
