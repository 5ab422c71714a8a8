//! Player action system
//!
//! Implements the state transitions a front end can trigger: moving,
//! undoing, picking up, and the text command interpreter that maps typed
//! commands onto the same transitions.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

pub mod command;
pub mod movement;
pub mod pickup;

pub use command::parse_command;

/// Movement directions
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Get the delta (dx, dy) for this direction; `dx` is the column step.
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// A parsed text command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank input
    Empty,
    /// `go <direction>`
    Go(Direction),
    /// `go` followed by something that is not a direction
    BadDirection(String),
    Pickup,
    Undo,
    Inventory,
    Look,
    Restart,
    /// Anything the parser does not recognise
    Unknown(String),
}

/// Result of a move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player stepped onto the target cell
    Moved,
    /// Target was a wall or off the map; nothing changed but the log
    Blocked,
    /// The game is over; nothing changed
    GameOver,
}

/// Result of an undo attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The previous position was restored
    Undone,
    /// History was empty
    NothingToUndo,
    /// The game is over; nothing changed
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_direction_deltas_are_unit_cardinals() {
        for dir in Direction::iter() {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{} is not a unit step", dir);
        }
        assert_eq!(Direction::North.delta(), (0, -1));
        assert_eq!(Direction::East.delta(), (1, 0));
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(Direction::from_str("west"), Ok(Direction::West));
        assert!(Direction::from_str("up").is_err());
        assert_eq!(Direction::South.to_string(), "south");
    }
}
