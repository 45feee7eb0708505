//! Wordvinder core - strict parsing of vision-model board extracts.
//!
//! A vision model describes a word-puzzle screenshot as free-form text. This
//! crate turns that untrusted text into a validated board, or rejects it with
//! a precise reason.
//!
//! # Pipeline
//!
//! - **Sanitize**: strip an optional code fence, check the text is object-shaped
//! - **Decode**: parse JSON, never panicking on bad input
//! - **Route**: pick a normalizer by the `(schema, game)` pair
//! - **Normalize**: validate and canonicalize (Wordscapes or Scrabble)
//! - **Summarize**: derive a small aggregate from a finished board
//!
//! # Example
//!
//! ```
//! use wordvinder_core::{parse_model_output, summarize, BoardSummary};
//!
//! let text = r#"{"schema": "WORDVINDER_BOARD_EXTRACT_V4", "game": "WORDSCAPES",
//!     "letters": ["C", "A", "T", "S", "D"],
//!     "missingByLength": [{"length": 4, "count": 2}]}"#;
//!
//! let board = parse_model_output(text).unwrap();
//! match summarize(&board) {
//!     BoardSummary::Wordscapes { letters, total_remaining, .. } => {
//!         assert_eq!(letters, "C A T S D");
//!         assert_eq!(total_remaining, Some(2));
//!     }
//!     other => panic!("unexpected summary: {:?}", other),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod decode;
mod error;
mod games;
mod pipeline;
mod policy;
mod router;
mod sanitize;
mod summary;
mod text;

// Crate-level exports - Errors
pub use error::{ErrorBody, ErrorCode, ExtractError};

// Crate-level exports - Pipeline stages
pub use decode::{JsonObject, decode_object};
pub use pipeline::{Envelope, parse_legacy_model_output, parse_model_output, parse_model_value};
pub use router::{SCHEMA_TABLE, SchemaKind, route};
pub use sanitize::{looks_like_object, sanitize_model_text, strip_code_fence};

// Crate-level exports - Policy
pub use policy::{ContentPolicy, Field, Leniency, SUSPICIOUS_TOKENS, suspicious_token};

// Crate-level exports - Boards
pub use games::scrabble::{
    BoardGrid, GRID_SIZE, Grid, MAX_RACK, RackTile, SCRABBLE_KEYS, ScrabbleBoard, letter_points,
    normalize_scrabble, tile_points,
};
pub use games::wordscapes::{
    LengthCount, SolvedWords, WORDSCAPES_KEYS, WordList, WordscapesBoard, normalize_wordscapes,
};
pub use games::{Board, GameKind};
pub use text::Letter;

// Crate-level exports - Summary
pub use summary::{BoardSummary, summarize};
