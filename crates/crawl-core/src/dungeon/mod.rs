//! Dungeon map, tiles and fog-of-war

mod fog;
mod map;
mod tile;

pub use fog::FogOfWar;
pub use map::{DungeonMap, MapError, Position};
pub use tile::Tile;
