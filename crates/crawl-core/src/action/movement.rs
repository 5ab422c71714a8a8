//! Movement and undo transitions

use log::{debug, info};

use super::{Direction, MoveOutcome, UndoOutcome};
use crate::dungeon::{Position, Tile};
use crate::gameloop::GameState;
use crate::{
    MSG_BUMPED, MSG_EATEN, MSG_EXIT_FOUND, MSG_MONSTER_GROWLS, MSG_NOTHING_TO_UNDO, MSG_UNDONE,
};

impl GameState {
    /// Attempt to move by (dx, dy); `dx` steps columns and `dy` steps rows.
    ///
    /// A successful step records the old position for undo, reveals fog,
    /// resolves the tile stepped on and then gives the next monster its turn.
    /// A blocked step only logs a bump.
    pub fn move_player(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::GameOver;
        }

        let from = self.player;
        let target = match self.map.offset(from, dx, dy) {
            Some(target) if self.map.is_walkable(target) => target,
            _ => {
                debug!("blocked moving ({}, {}) from {:?}", dx, dy, from);
                self.message(MSG_BUMPED);
                return MoveOutcome::Blocked;
            }
        };

        self.undo.record(from);
        self.player = target;
        self.fog.reveal_from(&self.map, target);
        debug!("moved {:?} -> {:?}", from, target);

        match self.map[target] {
            Tile::Item => self.collect_item(target),
            tile if tile.ends_game() => self.end_game(tile, target),
            _ => {}
        }

        self.monster_turn();
        MoveOutcome::Moved
    }

    /// Move one step in a cardinal direction
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        let (dx, dy) = direction.delta();
        self.move_player(dx, dy)
    }

    /// Return to the position held before the last successful move.
    ///
    /// Collected items stay collected; only the position is rolled back.
    pub fn undo_move(&mut self) -> UndoOutcome {
        if self.game_over {
            return UndoOutcome::GameOver;
        }

        let Some(prev) = self.undo.pop() else {
            self.message(MSG_NOTHING_TO_UNDO);
            return UndoOutcome::NothingToUndo;
        };

        debug!("undo {:?} -> {:?}", self.player, prev);
        self.player = prev;
        self.fog.reveal_from(&self.map, prev);
        self.message(MSG_UNDONE);
        UndoOutcome::Undone
    }

    fn end_game(&mut self, tile: Tile, at: Position) {
        info!("game over on {} at {:?}", tile, at);
        let msg = if tile == Tile::Monster {
            MSG_EATEN
        } else {
            MSG_EXIT_FOUND
        };
        self.message(msg);
        self.game_over = true;
    }

    fn monster_turn(&mut self) {
        if let Some(monster) = self.monsters.advance() {
            debug!("monster at {:?} takes its turn", monster);
            self.message(MSG_MONSTER_GROWLS);
        }
    }
}
