//! Canonical boards for the supported games.

pub mod scrabble;
pub mod wordscapes;

use crate::decode::JsonObject;
use crate::error::ExtractError;
use crate::policy::Field;
use crate::router::SchemaKind;
use scrabble::ScrabbleBoard;
use serde::{Serialize, Serializer};
use serde_json::{Value, json};
use tracing::instrument;
use wordscapes::WordscapesBoard;

/// Game discriminant as it appears in the `game` field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GameKind {
    /// Letter-wheel crossword.
    Wordscapes,
    /// Tile-rack crossword.
    Scrabble,
}

/// A validated board for one supported game.
///
/// Serializes flat, with the `schema` and `game` discriminants first, so the
/// output can be fed back through the parser unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Board {
    /// Wordscapes board.
    Wordscapes(WordscapesBoard),
    /// Scrabble board.
    Scrabble(ScrabbleBoard),
}

impl Board {
    /// Schema this board was parsed under.
    pub fn schema(&self) -> SchemaKind {
        match self {
            Board::Wordscapes(_) => SchemaKind::WordscapesV4,
            Board::Scrabble(_) => SchemaKind::ScrabbleV1,
        }
    }

    /// Game of this board.
    pub fn game(&self) -> GameKind {
        self.schema().game()
    }

    /// The Wordscapes board, if this is one.
    pub fn as_wordscapes(&self) -> Option<&WordscapesBoard> {
        match self {
            Board::Wordscapes(board) => Some(board),
            Board::Scrabble(_) => None,
        }
    }

    /// The Scrabble board, if this is one.
    pub fn as_scrabble(&self) -> Option<&ScrabbleBoard> {
        match self {
            Board::Scrabble(board) => Some(board),
            Board::Wordscapes(_) => None,
        }
    }
}

#[derive(Serialize)]
struct Tagged<'a, T> {
    schema: &'static str,
    game: GameKind,
    #[serde(flatten)]
    body: &'a T,
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let schema = self.schema().schema();
        let game = self.game();
        match self {
            Board::Wordscapes(body) => Tagged { schema, game, body }.serialize(serializer),
            Board::Scrabble(body) => Tagged { schema, game, body }.serialize(serializer),
        }
    }
}

/// Rejects the object if any key falls outside `allowed`.
#[instrument(skip(obj))]
pub(crate) fn reject_unknown_keys(obj: &JsonObject, allowed: &[&str]) -> Result<(), ExtractError> {
    match obj.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(
            ExtractError::schema_invalid(format!("unexpected top-level key: {}", key))
                .with_details(json!({ "key": key })),
        ),
        None => Ok(()),
    }
}

/// Returns a required field, rejecting the board when it is absent.
pub(crate) fn require(obj: &JsonObject, field: Field) -> Result<&Value, ExtractError> {
    obj.get(field.key())
        .ok_or_else(|| ExtractError::schema_invalid(format!("missing required field: {}", field.key())))
}

/// Keeps the string entries of `notes`; anything else degrades to no notes.
pub(crate) fn normalize_notes(value: Option<&Value>) -> Result<Vec<String>, ExtractError> {
    let mut notes = Vec::new();
    match value {
        None => {}
        Some(Value::Array(items)) => {
            notes.extend(items.iter().filter_map(Value::as_str).map(str::to_string));
        }
        Some(_) => Field::Notes.malformed(&mut notes, "expected an array")?,
    }
    Ok(notes)
}
