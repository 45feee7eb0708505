//! Wordscapes letter-wheel puzzles.

mod normalize;
mod types;

pub use normalize::{WORDSCAPES_KEYS, normalize_wordscapes};
pub use types::{LengthCount, SolvedWords, WordList, WordscapesBoard};
