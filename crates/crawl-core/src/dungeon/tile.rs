//! Map tile kinds

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Kind of a single map cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Tile {
    #[default]
    Floor,
    Wall,
    Item,
    Monster,
    Start,
    Exit,
}

impl Tile {
    /// Template character for this tile
    pub const fn symbol(&self) -> char {
        match self {
            Tile::Floor => '.',
            Tile::Wall => '#',
            Tile::Item => 'I',
            Tile::Monster => 'M',
            Tile::Start => 'S',
            Tile::Exit => 'E',
        }
    }

    /// Parse a template character
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Tile::Floor),
            '#' => Some(Tile::Wall),
            'I' => Some(Tile::Item),
            'M' => Some(Tile::Monster),
            'S' => Some(Tile::Start),
            'E' => Some(Tile::Exit),
            _ => None,
        }
    }

    /// Walls block movement and stop the fog reveal
    pub const fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }

    /// Stepping here ends the game
    pub const fn ends_game(&self) -> bool {
        matches!(self, Tile::Monster | Tile::Exit)
    }
}
