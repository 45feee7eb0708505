//! Scrabble racks and grids.

mod normalize;
mod points;
mod types;

pub use normalize::{SCRABBLE_KEYS, normalize_scrabble};
pub use points::{letter_points, tile_points};
pub use types::{BoardGrid, GRID_SIZE, Grid, MAX_RACK, RackTile, ScrabbleBoard};
