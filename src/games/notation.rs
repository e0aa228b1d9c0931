//! Shared pieces of the move text formats.
//!
//! Moves are whitespace-separated tokens. Letter tokens are a single
//! character, matched case-insensitively (`h` and `H` both mean `H`, while
//! `Horizontal` is not a letter token).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Direction;
use crate::core::FormatError;

/// Edge or wall orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Parse from a letter token (`H` or `V`).
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match letter(token)? {
            'H' => Some(Orientation::Horizontal),
            'V' => Some(Orientation::Vertical),
            _ => None,
        }
    }

    /// Wire letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Split a move into tokens. Most moves have at most three.
pub(crate) fn tokenize(raw: &str) -> SmallVec<[&str; 3]> {
    raw.split_whitespace().collect()
}

/// Upper-cased letter of a one-character token.
pub(crate) fn letter(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

/// Parse an integer token; sign is kept so range checks can report it.
pub(crate) fn parse_number(token: &str) -> Result<i64, FormatError> {
    token
        .parse::<i64>()
        .map_err(|_| FormatError::NotANumber(token.to_string()))
}

/// Parse a pawn direction (`U`, `D`, `L`, `R`).
pub(crate) fn parse_direction(token: &str) -> Result<Direction, FormatError> {
    match letter(token) {
        Some('U') => Ok(Direction::Up),
        Some('D') => Ok(Direction::Down),
        Some('L') => Ok(Direction::Left),
        Some('R') => Ok(Direction::Right),
        _ => Err(FormatError::UnknownDirection(token.to_string())),
    }
}

/// Parse `<orientation> <row> <col>` with row and col as typed (1-indexed).
pub(crate) fn parse_oriented_coordinates(
    tokens: &[&str],
    what: &'static str,
    usage: &'static str,
) -> Result<(Orientation, i64, i64), FormatError> {
    if tokens.len() != 3 {
        return Err(FormatError::WrongArity { what, usage });
    }
    let orientation = Orientation::from_token(tokens[0]).ok_or_else(|| {
        FormatError::UnknownMoveType {
            found: tokens[0].to_string(),
            expected: "H or V",
        }
    })?;
    let row = parse_number(tokens[1])?;
    let col = parse_number(tokens[2])?;
    Ok((orientation, row, col))
}
