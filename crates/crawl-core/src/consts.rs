//! Fixed game data

/// Reference dungeon layout, one string per row.
///
/// `S` start, `.` floor, `#` wall, `I` item, `M` monster, `E` exit.
pub const DEFAULT_TEMPLATE: &[&str] = &["S..#.", ".#I..", ".IM#.", "#...E"];

/// Name given to every collected item unless configured otherwise
pub const DEFAULT_ITEM_NAME: &str = "Mysterious Item";

/// Number of quest log lines a front end shows by default
pub const DEFAULT_LOG_TAIL: usize = 6;

/// First quest log entry of every game
pub const MSG_ENTERED: &str = "Entered the dungeon.";
pub const MSG_NEW_GAME: &str = "New game started.";
pub const MSG_BUMPED: &str = "Bumped into a wall.";
pub const MSG_EATEN: &str = "The Monster Ate you";
pub const MSG_EXIT_FOUND: &str = "You found the exit! Game over. Press Play Again.";
pub const MSG_MONSTER_GROWLS: &str = "Monster growls in the distance.";
pub const MSG_NOTHING_TO_UNDO: &str = "Nothing to undo.";
pub const MSG_UNDONE: &str = "Undid your last move.";
