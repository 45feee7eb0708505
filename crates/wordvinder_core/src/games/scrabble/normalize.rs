//! Scrabble extract normalization.
//!
//! Every field except `notes` is strict: a single bad tile or cell rejects the
//! whole board.

use super::types::{BoardGrid, GRID_SIZE, Grid, MAX_RACK, RackTile, ScrabbleBoard};
use crate::decode::{JsonObject, kind_of};
use crate::error::ExtractError;
use crate::games::{normalize_notes, reject_unknown_keys, require};
use crate::policy::Field;
use crate::text::Letter;
use serde_json::Value;
use tracing::{debug, instrument};

/// Top-level keys a Scrabble extract may carry.
pub const SCRABBLE_KEYS: &[&str] = &["schema", "game", "rack", "board", "notes"];

/// Validates a routed Scrabble object into a canonical board.
#[instrument(skip(obj), fields(keys = obj.len()))]
pub fn normalize_scrabble(obj: &JsonObject) -> Result<ScrabbleBoard, ExtractError> {
    reject_unknown_keys(obj, SCRABBLE_KEYS)?;
    let rack_raw = require(obj, Field::Rack)?;
    let board_raw = require(obj, Field::Board)?;

    let mut notes = normalize_notes(obj.get(Field::Notes.key()))?;
    let rack = normalize_rack(rack_raw, &mut notes)?;
    let board = normalize_grid(board_raw, &mut notes)?;

    debug!(
        rack = rack.len(),
        occupied = board.occupied(),
        "Normalized Scrabble board"
    );

    Ok(ScrabbleBoard { rack, board, notes })
}

/// Validates the rack: at most seven tile objects.
fn normalize_rack(value: &Value, notes: &mut Vec<String>) -> Result<Vec<RackTile>, ExtractError> {
    let field = Field::Rack;
    let Some(items) = value.as_array() else {
        field.malformed(notes, &format!("expected an array, got {}", kind_of(value)))?;
        return Ok(Vec::new());
    };
    if items.len() > MAX_RACK {
        field.malformed(
            notes,
            &format!("expected at most {} tiles, got {}", MAX_RACK, items.len()),
        )?;
        return Ok(Vec::new());
    }

    let mut rack = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match read_tile(item) {
            Ok(tile) => rack.push(tile),
            Err(reason) => field.malformed_entry(index, reason)?,
        }
    }
    Ok(rack)
}

/// Reads one tile.
///
/// `isBlank` counts only as the literal `true`. A blank ignores whatever
/// letter the model assigned it; any other tile needs a single `A`-`Z`.
fn read_tile(item: &Value) -> Result<RackTile, &'static str> {
    let tile = item.as_object().ok_or("expected an object")?;
    if matches!(tile.get("isBlank"), Some(Value::Bool(true))) {
        return Ok(RackTile::blank());
    }
    match tile.get("letter") {
        None | Some(Value::Null) => Err("letter is required on a non-blank tile"),
        Some(raw) => Letter::from_value(raw)
            .map(RackTile::letter)
            .ok_or("letter must be a single letter A-Z"),
    }
}

/// Validates `{size: 15, tiles: 15 rows of 15 cells}`.
fn normalize_grid(value: &Value, notes: &mut Vec<String>) -> Result<BoardGrid, ExtractError> {
    let field = Field::Board;
    let empty = || BoardGrid::new([[None; GRID_SIZE]; GRID_SIZE]);

    let Some(board) = value.as_object() else {
        field.malformed(notes, &format!("expected an object, got {}", kind_of(value)))?;
        return Ok(empty());
    };
    if board.get("size").and_then(Value::as_u64) != Some(GRID_SIZE as u64) {
        field.malformed(notes, &format!("size must be {}", GRID_SIZE))?;
        return Ok(empty());
    }
    let rows = match board.get("tiles").and_then(Value::as_array) {
        Some(rows) if rows.len() == GRID_SIZE => rows,
        _ => {
            field.malformed(notes, &format!("tiles must be {} rows", GRID_SIZE))?;
            return Ok(empty());
        }
    };

    let mut tiles: Grid = [[None; GRID_SIZE]; GRID_SIZE];
    for (r, row) in rows.iter().enumerate() {
        let cells = match row.as_array() {
            Some(cells) if cells.len() == GRID_SIZE => cells,
            _ => {
                field.malformed_entry(r, &format!("row must have {} cells", GRID_SIZE))?;
                continue;
            }
        };
        for (c, cell) in cells.iter().enumerate() {
            tiles[r][c] = match cell {
                Value::Null => None,
                other => match Letter::from_value(other) {
                    Some(letter) => Some(letter),
                    None => {
                        field.malformed_entry(
                            r,
                            &format!("cell {} must be null or a single letter A-Z", c),
                        )?;
                        None
                    }
                },
            };
        }
    }
    Ok(BoardGrid::new(tiles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_tile_variants() {
        assert_eq!(
            read_tile(&json!({"letter": "q", "isBlank": false})),
            Ok(RackTile::letter(Letter::new('Q').unwrap()))
        );
        assert_eq!(read_tile(&json!({"letter": "Q", "isBlank": true})), Ok(RackTile::blank()));
        assert_eq!(read_tile(&json!({"isBlank": true})), Ok(RackTile::blank()));
        assert!(read_tile(&json!({"letter": "Q", "isBlank": "true"})).is_ok());
        assert!(read_tile(&json!({"isBlank": "true"})).is_err());
        assert!(read_tile(&json!({"letter": "QU"})).is_err());
        assert!(read_tile(&json!("Q")).is_err());
    }

    #[test]
    fn test_grid_rejects_bad_cell() {
        let mut rows = vec![vec![Value::Null; GRID_SIZE]; GRID_SIZE];
        rows[3][4] = json!("AB");
        let mut notes = Vec::new();
        let err = normalize_grid(&json!({"size": 15, "tiles": rows}), &mut notes).unwrap_err();
        assert!(err.message.contains("board[3]"));
    }

    #[test]
    fn test_grid_rejects_wrong_size() {
        let rows = vec![vec![Value::Null; GRID_SIZE]; GRID_SIZE];
        let mut notes = Vec::new();
        assert!(normalize_grid(&json!({"size": 11, "tiles": rows.clone()}), &mut notes).is_err());
        assert!(normalize_grid(&json!({"size": "15", "tiles": rows.clone()}), &mut notes).is_err());
        assert!(normalize_grid(&json!({"size": 15.0, "tiles": rows}), &mut notes).is_err());
    }
}
