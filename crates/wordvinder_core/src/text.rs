//! Value coercion helpers shared by both normalizers.
//!
//! Every string the model hands us is trimmed and upper-cased before it is
//! checked against a letter or word pattern.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// A single uppercase `A`-`Z` character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    /// Builds a letter from a char, accepting only `A`-`Z`.
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_uppercase().then_some(Self(c))
    }

    /// Parses a string that reduces to exactly one `A`-`Z` after trim and upper-casing.
    pub fn parse(raw: &str) -> Option<Self> {
        let upper = raw.trim().to_uppercase();
        let mut chars = upper.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => None,
        }
    }

    /// Parses a JSON value; anything but a string is rejected.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_str().and_then(Self::parse)
    }

    /// The underlying character.
    pub fn as_char(self) -> char {
        self.0
    }

    /// Zero-based alphabet index (`A` = 0).
    pub fn index(self) -> usize {
        (self.0 as u8 - b'A') as usize
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Letter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut buf = [0u8; 4];
        serializer.serialize_str(self.0.encode_utf8(&mut buf))
    }
}

/// Trims and upper-cases a JSON string; `None` for any other value.
pub(crate) fn normalized_text(value: &Value) -> Option<String> {
    value.as_str().map(|s| s.trim().to_uppercase())
}

/// True when `s` is non-empty and made only of `A`-`Z`.
pub(crate) fn is_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_uppercase())
}

/// Coerces a JSON number or numeric string to an integer.
///
/// Fractional values, non-finite values and everything else yield `None`.
pub(crate) fn coerce_int(value: &Value) -> Option<i64> {
    let float = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            n.as_f64()?
        }
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            if let Ok(i) = s.parse::<i64>() {
                return Some(i);
            }
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };
    (float.is_finite() && float.fract() == 0.0 && float.abs() < i64::MAX as f64)
        .then_some(float as i64)
}

/// Coerces to an integer and checks it against an inclusive range.
pub(crate) fn int_in_range(value: &Value, min: i64, max: i64) -> Option<i64> {
    coerce_int(value).filter(|n| (min..=max).contains(n))
}
