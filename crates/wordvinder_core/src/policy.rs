//! Per-field leniency and content policy.
//!
//! Required and fixed-shape fields reject the whole board on the first
//! violation. Optional collections drop what is malformed and keep going.
//! Which is which lives here, not in the normalizers.

use crate::error::ExtractError;
use tracing::{instrument, warn};

/// Promotional and monetization tokens that never belong in a solved word.
pub const SUSPICIOUS_TOKENS: &[&str] = &[
    "FREE",
    "COIN",
    "BONUS",
    "REWARD",
    "PRIZE",
    "PROMO",
    "GIFT",
    "CLICK",
    "INSTALL",
    "DOWNLOAD",
    "SUBSCRIBE",
];

/// Returns the first suspicious token contained in `word`, case-insensitively.
pub fn suspicious_token(word: &str) -> Option<&'static str> {
    let upper = word.to_uppercase();
    SUSPICIOUS_TOKENS
        .iter()
        .copied()
        .find(|token| upper.contains(token))
}

/// How a field reacts to malformed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leniency {
    /// Reject the whole board.
    Strict,
    /// Drop the field (or entry) and append a diagnostic note.
    DropAndNote,
    /// Silently filter or default.
    Degrade,
}

/// What happens to a well-formed word that contains a suspicious token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentPolicy {
    /// Treat the word as unreadable: slot becomes `null`, list word is skipped.
    #[default]
    Drop,
    /// Fail the parse with `MODEL_OUTPUT_SUSPICIOUS`.
    Reject,
}

/// Top-level board fields that carry a leniency policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Field {
    /// Wordscapes letter wheel.
    Letters,
    /// Wordscapes remaining-word counts.
    MissingByLength,
    /// Wordscapes slot lists.
    WordLists,
    /// Wordscapes solved words.
    SolvedWordsByLength,
    /// Free-text notes on either game.
    Notes,
    /// Scrabble rack.
    Rack,
    /// Scrabble grid.
    Board,
}

impl Field {
    /// JSON key of the field.
    pub const fn key(self) -> &'static str {
        match self {
            Field::Letters => "letters",
            Field::MissingByLength => "missingByLength",
            Field::WordLists => "wordLists",
            Field::SolvedWordsByLength => "solvedWordsByLength",
            Field::Notes => "notes",
            Field::Rack => "rack",
            Field::Board => "board",
        }
    }

    /// Leniency applied when the field is malformed.
    pub const fn leniency(self) -> Leniency {
        match self {
            Field::Letters | Field::MissingByLength | Field::Rack | Field::Board => {
                Leniency::Strict
            }
            Field::WordLists | Field::SolvedWordsByLength => Leniency::DropAndNote,
            Field::Notes => Leniency::Degrade,
        }
    }

    /// Reports that the field as a whole is malformed.
    ///
    /// Strict fields fail; lenient fields record a note (when the policy asks
    /// for one) and tell the caller to drop the field.
    #[track_caller]
    #[instrument(skip(notes, reason), fields(field = self.key()))]
    pub fn malformed(self, notes: &mut Vec<String>, reason: &str) -> Result<(), ExtractError> {
        match self.leniency() {
            Leniency::Strict => Err(ExtractError::schema_invalid(format!(
                "{}: {}",
                self.key(),
                reason
            ))),
            Leniency::DropAndNote => {
                warn!(reason, "Dropping malformed field");
                notes.push(format!("{} dropped: {}", self.key(), reason));
                Ok(())
            }
            Leniency::Degrade => Ok(()),
        }
    }

    /// Reports that one entry of the field is malformed.
    ///
    /// Strict fields fail; lenient fields skip the entry without a note.
    #[track_caller]
    pub fn malformed_entry(self, index: usize, reason: &str) -> Result<(), ExtractError> {
        match self.leniency() {
            Leniency::Strict => Err(ExtractError::schema_invalid(format!(
                "{}[{}]: {}",
                self.key(),
                index,
                reason
            ))),
            Leniency::DropAndNote | Leniency::Degrade => {
                warn!(field = self.key(), index, reason, "Skipping malformed entry");
                Ok(())
            }
        }
    }
}
