//! Canonical Wordscapes board types.

use crate::text::Letter;
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

/// Count of words still missing for one word length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, new)]
pub struct LengthCount {
    /// Word length (3-12).
    pub length: u8,
    /// Remaining words, or `None` when the count is unknown.
    pub count: Option<u32>,
}

/// Fixed-length slots for one word length, in on-screen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct WordList {
    /// Word length shared by every slot.
    pub length: u8,
    /// Solved word or `None` for an unsolved slot.
    pub slots: Vec<Option<String>>,
}

impl WordList {
    /// Solved words in slot order.
    pub fn solved(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(|slot| slot.as_deref())
    }
}

/// Deduplicated solved words of one length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct SolvedWords {
    /// Word length.
    pub length: u8,
    /// Words in first-seen order.
    pub words: Vec<String>,
}

/// Validated Wordscapes board.
///
/// Empty `word_lists` and `solved_words_by_length` are left out of the
/// serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct WordscapesBoard {
    /// Unique wheel letters, 5-8 of them, in first-seen order.
    pub(crate) letters: Vec<Letter>,
    /// At most one entry per length, ascending.
    pub(crate) missing_by_length: Vec<LengthCount>,
    /// Slot lists sorted by length, stable within a length.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) word_lists: Vec<WordList>,
    /// Solved words grouped by length, ascending.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) solved_words_by_length: Vec<SolvedWords>,
    /// Free-text notes, including diagnostics appended during normalization.
    pub(crate) notes: Vec<String>,
}

impl WordscapesBoard {
    /// Sum of remaining counts, or `None` if any count is unknown.
    pub fn total_remaining(&self) -> Option<u32> {
        self.missing_by_length
            .iter()
            .try_fold(0u32, |total, entry| entry.count.map(|c| total + c))
    }
}
