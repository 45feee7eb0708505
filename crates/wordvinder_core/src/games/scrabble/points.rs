//! Tile point values.

use crate::text::Letter;
use tracing::instrument;

/// Standard tile values, indexed by alphabet position.
const LETTER_POINTS: [u8; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, // A-M
    1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10, // N-Z
];

/// Points for a validated tile. Blanks are always worth 0.
pub fn tile_points(letter: Option<Letter>, is_blank: bool) -> u8 {
    match (is_blank, letter) {
        (true, _) | (false, None) => 0,
        (false, Some(letter)) => LETTER_POINTS[letter.index()],
    }
}

/// Looks up the point value of a raw letter.
///
/// Returns `None` when a non-blank letter does not reduce to `A`-`Z`. A blank
/// is worth 0 whatever letter it stands in for.
#[instrument]
pub fn letter_points(letter: &str, is_blank: bool) -> Option<u8> {
    if is_blank {
        return Some(0);
    }
    Letter::parse(letter).map(|l| LETTER_POINTS[l.index()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(letter_points("A", false), Some(1));
        assert_eq!(letter_points("d", false), Some(2));
        assert_eq!(letter_points("K", false), Some(5));
        assert_eq!(letter_points("Q", false), Some(10));
        assert_eq!(letter_points(" z ", false), Some(10));
    }

    #[test]
    fn test_blank_is_zero() {
        assert_eq!(letter_points("Q", true), Some(0));
        assert_eq!(letter_points("??", true), Some(0));
        assert_eq!(tile_points(Letter::new('Z'), true), 0);
    }

    #[test]
    fn test_invalid_letter() {
        assert_eq!(letter_points("", false), None);
        assert_eq!(letter_points("AB", false), None);
        assert_eq!(letter_points("3", false), None);
    }

    #[test]
    fn test_every_letter_within_tile_range() {
        assert!(LETTER_POINTS.iter().all(|p| (1..=10).contains(p)));
    }
}
