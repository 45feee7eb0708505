//! Schema routing.
//!
//! The `(schema, game)` pair is a closed, versioned contract. Supporting a new
//! game or schema version means a new [`SchemaKind`] variant and a new row in
//! [`SCHEMA_TABLE`]; existing rows never change meaning.

use crate::decode::JsonObject;
use crate::error::ExtractError;
use crate::games::scrabble::normalize_scrabble;
use crate::games::wordscapes::normalize_wordscapes;
use crate::games::{Board, GameKind};
use crate::policy::ContentPolicy;
use serde_json::json;
use tracing::{debug, instrument};

/// A supported extract schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum SchemaKind {
    /// `WORDVINDER_BOARD_EXTRACT_V4` / `WORDSCAPES`.
    WordscapesV4,
    /// `WORDVINDER_SCRABBLE_EXTRACT_V1` / `SCRABBLE`.
    ScrabbleV1,
}

/// Exact-match dispatch table.
pub const SCHEMA_TABLE: &[(&str, GameKind, SchemaKind)] = &[
    (
        "WORDVINDER_BOARD_EXTRACT_V4",
        GameKind::Wordscapes,
        SchemaKind::WordscapesV4,
    ),
    (
        "WORDVINDER_SCRABBLE_EXTRACT_V1",
        GameKind::Scrabble,
        SchemaKind::ScrabbleV1,
    ),
];

impl SchemaKind {
    /// Value of the `schema` field.
    pub fn schema(self) -> &'static str {
        match self {
            SchemaKind::WordscapesV4 => "WORDVINDER_BOARD_EXTRACT_V4",
            SchemaKind::ScrabbleV1 => "WORDVINDER_SCRABBLE_EXTRACT_V1",
        }
    }

    /// Game this schema describes.
    pub fn game(self) -> GameKind {
        match self {
            SchemaKind::WordscapesV4 => GameKind::Wordscapes,
            SchemaKind::ScrabbleV1 => GameKind::Scrabble,
        }
    }

    /// Looks up the schema for a discriminant pair.
    pub fn lookup(schema: &str, game: &str) -> Option<Self> {
        SCHEMA_TABLE
            .iter()
            .find(|(s, g, _)| *s == schema && g.as_ref() == game)
            .map(|(_, _, kind)| *kind)
    }

    /// Runs the normalizer for this schema.
    ///
    /// `content` only affects schemas that carry solved words.
    #[instrument(skip(obj))]
    pub fn normalize(self, obj: &JsonObject, content: ContentPolicy) -> Result<Board, ExtractError> {
        match self {
            SchemaKind::WordscapesV4 => normalize_wordscapes(obj, content).map(Board::Wordscapes),
            SchemaKind::ScrabbleV1 => normalize_scrabble(obj).map(Board::Scrabble),
        }
    }
}

/// Reads the `schema`/`game` discriminants and picks a schema.
#[instrument(skip(obj))]
pub fn route(obj: &JsonObject) -> Result<SchemaKind, ExtractError> {
    let schema = obj.get("schema").and_then(|v| v.as_str());
    let game = obj.get("game").and_then(|v| v.as_str());
    let (Some(schema), Some(game)) = (schema, game) else {
        return Err(ExtractError::schema_invalid(
            "schema and game must both be strings",
        ));
    };

    let kind = SchemaKind::lookup(schema, game).ok_or_else(|| {
        ExtractError::schema_invalid(format!("unsupported schema {} for game {}", schema, game))
            .with_details(json!({ "schema": schema, "game": game }))
    })?;
    debug!(?kind, "Routed model output");
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serde_json::Value;
    use strum::IntoEnumIterator;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_table_agrees_with_kinds() {
        for kind in SchemaKind::iter() {
            assert_eq!(SchemaKind::lookup(kind.schema(), kind.game().as_ref()), Some(kind));
        }
        assert_eq!(SCHEMA_TABLE.len(), SchemaKind::iter().count());
    }

    #[test]
    fn test_routes_known_pairs() {
        let obj = object(json!({"schema": "WORDVINDER_SCRABBLE_EXTRACT_V1", "game": "SCRABBLE"}));
        assert_eq!(route(&obj).unwrap(), SchemaKind::ScrabbleV1);
    }

    #[test]
    fn test_mismatched_pair_is_unsupported() {
        let obj = object(json!({"schema": "WORDVINDER_BOARD_EXTRACT_V4", "game": "SCRABBLE"}));
        let err = route(&obj).unwrap_err();
        assert_eq!(err.code, ErrorCode::ModelOutputSchemaInvalid);
        assert!(err.message.contains("unsupported schema"));
    }

    #[test]
    fn test_discriminants_must_be_strings() {
        let obj = object(json!({"schema": 4, "game": "WORDSCAPES"}));
        assert!(route(&obj).is_err());
        let obj = object(json!({"game": "WORDSCAPES"}));
        assert!(route(&obj).is_err());
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(SchemaKind::lookup("wordvinder_board_extract_v4", "WORDSCAPES"), None);
        assert_eq!(SchemaKind::lookup("WORDVINDER_BOARD_EXTRACT_V3", "WORDSCAPES"), None);
    }
}
