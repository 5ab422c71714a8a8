//! Game state lifecycle and queries
//!
//! [`GameState`] owns one complete game. Front ends hold it, call the
//! transitions in [`crate::action`], and re-read the getters below to
//! refresh their view.

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dungeon::{DungeonMap, FogOfWar, MapError, Position, Tile};
use crate::monster::MonsterQueue;
use crate::world::{GameOptions, OptionsError, QuestLog, UndoHistory};
use crate::{DEFAULT_ITEM_NAME, DEFAULT_TEMPLATE, MSG_ENTERED, MSG_NEW_GAME};

/// Reasons a deserialized game is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("live map is {found_rows}x{found_cols}, layout is {rows}x{cols}")]
    MapSize {
        rows: usize,
        cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    #[error("fog grid does not cover the {rows}x{cols} map")]
    FogSize { rows: usize, cols: usize },

    #[error("{what} at {pos:?} is not a walkable map cell")]
    NotWalkable { what: &'static str, pos: Position },

    #[error("monster queue entry {pos:?} is not a monster tile")]
    NoMonster { pos: Position },
}

/// Main game state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SavedGame")]
pub struct GameState {
    /// Pristine layout every game starts from
    template: DungeonMap,

    /// Name given to collected items
    pub(crate) item_name: String,

    /// Live map; pickups rewrite tiles here
    pub(crate) map: DungeonMap,

    /// Player position
    pub(crate) player: Position,

    /// Fog-of-war visibility
    pub(crate) fog: FogOfWar,

    /// Collected item names, in pickup order
    pub(crate) inventory: Vec<String>,

    /// Narrative history
    pub(crate) log: QuestLog,

    /// Positions before each successful move
    pub(crate) undo: UndoHistory,

    /// Monster turn order
    pub(crate) monsters: MonsterQueue,

    /// Set on reaching a monster or the exit
    pub(crate) game_over: bool,
}

/// Serialized shape of a [`GameState`] before its positions are checked
#[derive(Deserialize)]
struct SavedGame {
    template: DungeonMap,
    item_name: String,
    map: DungeonMap,
    player: Position,
    fog: FogOfWar,
    inventory: Vec<String>,
    log: QuestLog,
    undo: UndoHistory,
    monsters: MonsterQueue,
    game_over: bool,
}

impl TryFrom<SavedGame> for GameState {
    type Error = StateError;

    fn try_from(saved: SavedGame) -> Result<Self, StateError> {
        let (rows, cols) = (saved.template.rows(), saved.template.cols());
        if (saved.map.rows(), saved.map.cols()) != (rows, cols) {
            return Err(StateError::MapSize {
                rows,
                cols,
                found_rows: saved.map.rows(),
                found_cols: saved.map.cols(),
            });
        }
        if !saved.fog.has_shape(rows, cols) {
            return Err(StateError::FogSize { rows, cols });
        }
        if !saved.map.is_walkable(saved.player) {
            return Err(StateError::NotWalkable {
                what: "player",
                pos: saved.player,
            });
        }
        if let Some(&pos) = saved.undo.iter().find(|&&pos| !saved.map.is_walkable(pos)) {
            return Err(StateError::NotWalkable {
                what: "undo entry",
                pos,
            });
        }
        if let Some(&pos) = saved
            .monsters
            .iter()
            .find(|&&pos| saved.map.tile(pos) != Some(Tile::Monster))
        {
            return Err(StateError::NoMonster { pos });
        }

        Ok(Self {
            template: saved.template,
            item_name: saved.item_name,
            map: saved.map,
            player: saved.player,
            fog: saved.fog,
            inventory: saved.inventory,
            log: saved.log,
            undo: saved.undo,
            monsters: saved.monsters,
            game_over: saved.game_over,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a new game on the reference layout
    pub fn new() -> Self {
        // the reference template is covered by tests and always parses
        let template = DungeonMap::from_template(DEFAULT_TEMPLATE)
            .expect("reference template is a valid map");
        Self::from_map(template, DEFAULT_ITEM_NAME.to_string())
    }

    /// Create a new game on a custom layout
    pub fn with_template<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        let template = DungeonMap::from_template(rows)?;
        Ok(Self::from_map(template, DEFAULT_ITEM_NAME.to_string()))
    }

    /// Create a new game from loaded options
    pub fn from_options(options: &GameOptions) -> Result<Self, OptionsError> {
        let template = match &options.map {
            Some(rows) => DungeonMap::from_template(rows.as_slice())?,
            None => DungeonMap::from_template(DEFAULT_TEMPLATE)?,
        };
        Ok(Self::from_map(template, options.item_name.clone()))
    }

    fn from_map(template: DungeonMap, item_name: String) -> Self {
        let map = template.clone();
        let player = map.find_start();
        let mut fog = FogOfWar::new(map.rows(), map.cols());
        fog.reveal_from(&map, player);

        let mut log = QuestLog::new();
        log.append(MSG_ENTERED);

        Self {
            monsters: MonsterQueue::from_map(&map),
            template,
            item_name,
            map,
            player,
            fog,
            inventory: Vec::new(),
            log,
            undo: UndoHistory::new(),
            game_over: false,
        }
    }

    /// Throw away the current game and start over on the same layout
    pub fn reset(&mut self) {
        let template = self.template.clone();
        let item_name = core::mem::take(&mut self.item_name);
        *self = Self::from_map(template, item_name);
        self.message(MSG_NEW_GAME);
        info!("new game started");
    }

    /// Append a quest log entry
    pub fn message(&mut self, msg: impl Into<String>) {
        self.log.append(msg);
    }

    pub fn player_pos(&self) -> Position {
        self.player
    }

    pub fn map(&self) -> &DungeonMap {
        &self.map
    }

    /// Tile the player is standing on
    pub fn current_tile(&self) -> Tile {
        self.map[self.player]
    }

    pub fn fog(&self) -> &FogOfWar {
        &self.fog
    }

    /// Visibility grid, row by row
    pub fn revealed(&self) -> &[Vec<bool>] {
        self.fog.grid()
    }

    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// The last `n` quest log entries, oldest first
    pub fn log_tail(&self, n: usize) -> &[String] {
        self.log.tail(n)
    }

    pub fn quest_log(&self) -> &QuestLog {
        &self.log
    }

    pub fn undo_history(&self) -> &UndoHistory {
        &self.undo
    }

    pub fn monster_queue(&self) -> &MonsterQueue {
        &self.monsters
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Direction;

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.player_pos(), Position::new(0, 0));
        assert_eq!(state.current_tile(), Tile::Start);
        assert!(state.inventory().is_empty());
        assert!(!state.is_game_over());
        assert_eq!(state.log_tail(6), ["Entered the dungeon."]);
        assert_eq!(state.monster_queue().len(), 1);
        assert!(state.fog().is_visible(Position::new(0, 0)));
        assert_eq!(state.revealed().len(), 4);
    }

    #[test]
    fn test_with_template_rejects_invalid() {
        assert_eq!(
            GameState::with_template(&["..."]).unwrap_err(),
            MapError::NoStart
        );
    }

    #[test]
    fn test_fog_starts_around_start_only() {
        // sealed room: only the start pocket and its walls are visible
        let state = GameState::with_template(&["S#.", "##E"]).unwrap();
        assert!(state.fog().is_visible(Position::new(0, 0)));
        assert!(state.fog().is_visible(Position::new(0, 1)));
        assert!(state.fog().is_visible(Position::new(1, 0)));
        assert!(!state.fog().is_visible(Position::new(0, 2)));
        assert!(!state.fog().is_visible(Position::new(1, 2)));
        // diagonal wall is not 4-adjacent to a floor cell
        assert!(!state.fog().is_visible(Position::new(1, 1)));
    }

    #[test]
    fn test_reset_restores_template() {
        let mut state = GameState::new();
        state.step(Direction::South);
        state.step(Direction::South);
        state.step(Direction::East);
        assert_eq!(state.map()[Position::new(2, 1)], Tile::Floor);

        state.reset();
        assert_eq!(state.map()[Position::new(2, 1)], Tile::Item);
        assert_eq!(state.player_pos(), Position::new(0, 0));
        assert!(state.undo_history().is_empty());
        assert!(state.inventory().is_empty());
        assert_eq!(state.monster_queue().len(), 1);
        assert_eq!(state.quest_log().last(), Some("New game started."));
    }

    #[test]
    fn test_reset_clears_game_over() {
        let mut state = GameState::with_template(&["SE"]).unwrap();
        state.step(Direction::East);
        assert!(state.is_game_over());
        state.reset();
        assert!(!state.is_game_over());
        assert_eq!(state.player_pos(), Position::new(0, 0));
    }

    #[test]
    fn test_from_options_uses_custom_map() {
        let options = GameOptions {
            map: Some(vec!["..S".to_string(), "E.M".to_string()]),
            ..Default::default()
        };
        let state = GameState::from_options(&options).unwrap();
        assert_eq!(state.player_pos(), Position::new(0, 2));
        assert_eq!(state.map().cols(), 3);
    }

    #[test]
    fn test_from_options_bad_map() {
        let options = GameOptions {
            map: Some(vec!["S..".to_string(), ".".to_string()]),
            ..Default::default()
        };
        let err = GameState::from_options(&options).unwrap_err();
        assert!(matches!(err, OptionsError::Map(MapError::Ragged { .. })));
    }
}
