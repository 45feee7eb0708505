//! Canonical Scrabble board types.

use super::points::tile_points;
use crate::text::Letter;
use derive_getters::Getters;
use serde::Serialize;

/// Grid side length.
pub const GRID_SIZE: usize = 15;

/// Maximum tiles on a rack.
pub const MAX_RACK: usize = 7;

/// A 15x15 grid in row-major order; `None` is an empty cell.
pub type Grid = [[Option<Letter>; GRID_SIZE]; GRID_SIZE];

/// One rack tile.
///
/// A blank never carries a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RackTile {
    letter: Option<Letter>,
    is_blank: bool,
    points: u8,
}

impl RackTile {
    /// A lettered tile, valued from the point table.
    pub fn letter(letter: Letter) -> Self {
        Self {
            letter: Some(letter),
            is_blank: false,
            points: tile_points(Some(letter), false),
        }
    }

    /// A blank tile.
    pub fn blank() -> Self {
        Self {
            letter: None,
            is_blank: true,
            points: 0,
        }
    }

    /// The tile's letter, `None` for blanks.
    pub fn face(&self) -> Option<Letter> {
        self.letter
    }

    /// Whether this is a blank.
    pub fn is_blank(&self) -> bool {
        self.is_blank
    }

    /// Point value.
    pub fn points(&self) -> u8 {
        self.points
    }

    /// Compact rendering: the letter, or `_` for a blank.
    pub fn symbol(&self) -> char {
        self.letter.map_or('_', Letter::as_char)
    }
}

/// Board section of a Scrabble extract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardGrid {
    size: usize,
    tiles: Grid,
}

impl BoardGrid {
    /// Wraps a full grid.
    pub fn new(tiles: Grid) -> Self {
        Self {
            size: GRID_SIZE,
            tiles,
        }
    }

    /// Cell at `(row, col)`, `None` when empty or out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Letter> {
        self.tiles.get(row)?.get(col).copied().flatten()
    }

    /// All cells.
    pub fn tiles(&self) -> &Grid {
        &self.tiles
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.tiles.iter().flatten().filter(|c| c.is_some()).count()
    }
}

/// Validated Scrabble board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ScrabbleBoard {
    /// Up to seven tiles, in rack order.
    pub(crate) rack: Vec<RackTile>,
    /// The 15x15 grid.
    pub(crate) board: BoardGrid,
    /// Free-text notes.
    pub(crate) notes: Vec<String>,
}

impl ScrabbleBoard {
    /// Number of blanks on the rack.
    pub fn blank_count(&self) -> usize {
        self.rack.iter().filter(|t| t.is_blank()).count()
    }

    /// Rack rendered as letters with `_` for blanks.
    pub fn rack_string(&self) -> String {
        self.rack.iter().map(RackTile::symbol).collect()
    }
}
