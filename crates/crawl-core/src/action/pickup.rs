//! Item pickup

use log::debug;

use crate::dungeon::{Position, Tile};
use crate::gameloop::GameState;

/// Quest log entry when a pickup finds nothing
pub const MSG_NOTHING_HERE: &str = "There is nothing to pick up.";

impl GameState {
    /// Pick up the item under the player, if any.
    ///
    /// Returns whether something was collected.
    pub fn pickup(&mut self) -> bool {
        let here = self.player;
        if self.map.tile(here) == Some(Tile::Item) {
            self.collect_item(here);
            true
        } else {
            self.message(MSG_NOTHING_HERE);
            false
        }
    }

    /// Move the item at `pos` into the inventory and clear the tile
    pub(crate) fn collect_item(&mut self, pos: Position) {
        debug!("collected {} at {:?}", self.item_name, pos);
        self.inventory.push(self.item_name.clone());
        self.map.set_tile(pos, Tile::Floor);
        let msg = format!("Picked up a {}.", self.item_name);
        self.message(msg);
    }
}
