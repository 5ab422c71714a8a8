//! Dungeon map grid

use core::ops::Index;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tile::Tile;

/// A cell coordinate on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Reasons a map template is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("map template has no rows or no columns")]
    Empty,

    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile symbol '{symbol}' at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },

    #[error("map template has no start tile")]
    NoStart,

    #[error("map template has {count} start tiles, expected exactly one")]
    MultipleStarts { count: usize },

    #[error("map claims {rows}x{cols} but its cells are {found_rows}x{found_cols}")]
    SizeMismatch {
        rows: usize,
        cols: usize,
        found_rows: usize,
        found_cols: usize,
    },
}

/// Rectangular grid of tiles
///
/// Deserializing re-runs the template checks, so a loaded map holds the
/// same guarantees as one built by [`DungeonMap::from_template`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MapCells")]
pub struct DungeonMap {
    cells: Vec<Vec<Tile>>,
    rows: usize,
    cols: usize,
}

impl DungeonMap {
    /// Build a map from template rows, validating shape and start tile.
    pub fn from_template<S: AsRef<str>>(template: &[S]) -> Result<Self, MapError> {
        let mut cells = Vec::with_capacity(template.len());
        for (row, line) in template.iter().enumerate() {
            let parsed = line
                .as_ref()
                .chars()
                .enumerate()
                .map(|(col, symbol)| {
                    Tile::from_symbol(symbol).ok_or(MapError::UnknownSymbol { symbol, row, col })
                })
                .collect::<Result<Vec<_>, _>>()?;
            cells.push(parsed);
        }

        let Some(cols) = cells.first().map(Vec::len) else {
            return Err(MapError::Empty);
        };
        if let Some((row, found)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(MapError::Ragged {
                row,
                expected: cols,
                found,
            });
        }
        if cols == 0 {
            return Err(MapError::Empty);
        }

        let map = Self {
            rows: cells.len(),
            cols,
            cells,
        };
        match map.positions_of(Tile::Start).len() {
            0 => Err(MapError::NoStart),
            1 => Ok(map),
            count => Err(MapError::MultipleStarts { count }),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Read-only view of the grid, row by row
    pub fn grid(&self) -> &[Vec<Tile>] {
        &self.cells
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Tile at `pos`, or `None` outside the map
    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Apply a signed (dx, dy) delta; `dx` moves columns, `dy` moves rows.
    pub fn offset(&self, pos: Position, dx: i32, dy: i32) -> Option<Position> {
        let row = pos.row.checked_add_signed(dy as isize)?;
        let col = pos.col.checked_add_signed(dx as isize)?;
        let target = Position::new(row, col);
        self.in_bounds(target).then_some(target)
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.tile(pos).is_some_and(|tile| !tile.is_wall())
    }

    /// Overwrite a cell. Only pickup turns tiles into something else.
    pub(crate) fn set_tile(&mut self, pos: Position, tile: Tile) {
        if let Some(cell) = self
            .cells
            .get_mut(pos.row)
            .and_then(|row| row.get_mut(pos.col))
        {
            *cell = tile;
        }
    }

    /// Every position holding `tile`, in row-major order
    pub fn positions_of(&self, tile: Tile) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.iter()
                    .enumerate()
                    .filter(move |&(_, t)| *t == tile)
                    .map(move |(col, _)| Position::new(row, col))
            })
            .collect()
    }

    /// Location of the start tile
    pub fn find_start(&self) -> Position {
        // from_template guarantees exactly one start
        self.positions_of(Tile::Start)
            .first()
            .copied()
            .unwrap_or_default()
    }

    /// The 4-connected neighbours of `pos` that lie on the map
    pub fn neighbours(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        [(0, -1), (0, 1), (-1, 0), (1, 0)]
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(pos, dx, dy))
    }
}

/// Serialized shape of a [`DungeonMap`] before validation
#[derive(Deserialize)]
struct MapCells {
    cells: Vec<Vec<Tile>>,
    rows: usize,
    cols: usize,
}

impl TryFrom<MapCells> for DungeonMap {
    type Error = MapError;

    fn try_from(raw: MapCells) -> Result<Self, MapError> {
        let template: Vec<String> = raw
            .cells
            .iter()
            .map(|line| line.iter().map(Tile::symbol).collect())
            .collect();
        let map = Self::from_template(template.as_slice())?;
        if (map.rows, map.cols) != (raw.rows, raw.cols) {
            return Err(MapError::SizeMismatch {
                rows: raw.rows,
                cols: raw.cols,
                found_rows: map.rows,
                found_cols: map.cols,
            });
        }
        Ok(map)
    }
}

impl Index<Position> for DungeonMap {
    type Output = Tile;

    /// Panics when `pos` is outside the map.
    fn index(&self, pos: Position) -> &Tile {
        &self.cells[pos.row][pos.col]
    }
}
