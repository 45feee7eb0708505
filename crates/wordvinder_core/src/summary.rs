//! UI-friendly aggregates derived from a board.

use crate::games::Board;
use crate::games::wordscapes::LengthCount;
use serde::Serialize;
use tracing::instrument;

/// Summary of a board, tagged by game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "game", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoardSummary {
    /// Wordscapes aggregate.
    #[serde(rename_all = "camelCase")]
    Wordscapes {
        /// Wheel letters joined by spaces.
        letters: String,
        /// Remaining counts per length, as on the board.
        remaining_by_length: Vec<LengthCount>,
        /// Total remaining, or `None` when any count is unknown.
        total_remaining: Option<u32>,
    },
    /// Scrabble aggregate.
    #[serde(rename_all = "camelCase")]
    Scrabble {
        /// Rack letters in order, `_` for blanks.
        rack: String,
        /// Tiles on the rack.
        rack_count: usize,
        /// Blanks on the rack.
        blank_count: usize,
    },
}

/// Builds the summary for a board.
#[instrument(skip(board), fields(game = %board.game()))]
pub fn summarize(board: &Board) -> BoardSummary {
    match board {
        Board::Wordscapes(b) => BoardSummary::Wordscapes {
            letters: b
                .letters()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            remaining_by_length: b.missing_by_length().clone(),
            total_remaining: b.total_remaining(),
        },
        Board::Scrabble(b) => BoardSummary::Scrabble {
            rack: b.rack_string(),
            rack_count: b.rack().len(),
            blank_count: b.blank_count(),
        },
    }
}
