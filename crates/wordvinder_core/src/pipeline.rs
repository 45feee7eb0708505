//! End-to-end parsing: text → sanitize → decode → route → normalize.

use crate::decode::decode_object;
use crate::error::{ErrorBody, ExtractError};
use crate::games::Board;
use crate::policy::ContentPolicy;
use crate::router::{SchemaKind, route};
use crate::sanitize::sanitize_model_text;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{info, instrument};

/// Parses model text into a validated board.
#[instrument(skip(raw), fields(raw_len = raw.len()))]
pub fn parse_model_output(raw: &str) -> Result<Board, ExtractError> {
    let text = sanitize_model_text(raw)?;
    let obj = decode_object(text)?;
    let kind = route(&obj)?;
    let board = kind.normalize(&obj, ContentPolicy::Drop)?;
    info!(game = %board.game(), "Parsed model output");
    Ok(board)
}

/// Parses model output held as a JSON value.
///
/// Anything other than a string fails fast with `MODEL_OUTPUT_NOT_JSON`.
#[instrument(skip(raw))]
pub fn parse_model_value(raw: &Value) -> Result<Board, ExtractError> {
    match raw {
        Value::String(text) => parse_model_output(text),
        _ => Err(ExtractError::not_json("model output is not text")),
    }
}

/// Parses under the single-schema legacy contract.
///
/// Only the Wordscapes schema is accepted, and a suspicious solved word fails
/// the parse with `MODEL_OUTPUT_SUSPICIOUS` instead of being dropped.
#[instrument(skip(raw), fields(raw_len = raw.len()))]
pub fn parse_legacy_model_output(raw: &str) -> Result<Board, ExtractError> {
    let text = sanitize_model_text(raw)?;
    let obj = decode_object(text)?;
    let kind = route(&obj)?;
    if kind != SchemaKind::WordscapesV4 {
        return Err(ExtractError::schema_invalid(format!(
            "legacy parser only accepts {}",
            SchemaKind::WordscapesV4.schema()
        ))
        .with_details(json!({ "schema": kind.schema() })));
    }
    let board = kind.normalize(&obj, ContentPolicy::Reject)?;
    info!(game = %board.game(), "Parsed legacy model output");
    Ok(board)
}

/// Wire form of a parse result: `{ok: true, board}` or `{ok: false, error}`.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    board: Option<Board>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorBody>,
}

impl Envelope {
    /// Whether the parse succeeded.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// The board on success.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// The failure on error.
    pub fn error(&self) -> Option<&ErrorBody> {
        self.error.as_ref()
    }
}

impl From<Result<Board, ExtractError>> for Envelope {
    fn from(result: Result<Board, ExtractError>) -> Self {
        match result {
            Ok(board) => Self {
                ok: true,
                board: Some(board),
                error: None,
            },
            Err(err) => Self {
                ok: false,
                board: None,
                error: Some(ErrorBody::from(&err)),
            },
        }
    }
}
