//! Error taxonomy shared by every game.
//!
//! Three kinds of move rejection are recoverable: the caller reports the
//! message and asks for the move again without consuming a turn.
//!
//! - `FormatError`: the text could not be parsed for this game.
//! - `RangeError`: parsed, but a coordinate or label lies off the board.
//! - `RuleViolation`: on the board, but illegal under the game's rules.
//!
//! `DimensionError` is raised while building a board and aborts that setup.

use thiserror::Error;

/// Input text that does not match a game's wire format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Nothing but whitespace.
    #[error("Please enter a move.")]
    Empty,

    /// A token that should be an integer was not.
    #[error("'{0}' is not a number.")]
    NotANumber(String),

    /// Wrong number of whitespace-separated tokens.
    #[error("Invalid {what} format. Use: {usage}")]
    WrongArity {
        /// Move family being parsed ("Move", "Wall", "Edge").
        what: &'static str,
        /// Expected shape of the input.
        usage: &'static str,
    },

    /// First token names no known move type.
    #[error("Invalid move type '{found}'. Use {expected}.")]
    UnknownMoveType {
        /// Offending token.
        found: String,
        /// Accepted tokens.
        expected: &'static str,
    },

    /// Pawn direction other than U, D, L, R.
    #[error("Invalid direction '{0}'. Use U, D, L, or R.")]
    UnknownDirection(String),
}

/// Coordinates or labels outside the configured board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Sliding puzzle label outside `1..rows*columns`.
    #[error("Tile {label} does not exist; pick a tile between 1 and {max}.")]
    Tile {
        /// Requested label.
        label: i64,
        /// Largest valid label.
        max: usize,
    },

    /// Edge or wall coordinates (1-indexed, as typed) off the board.
    #[error("{what} ({row}, {col}) is off the board; rows 1..={max_row}, columns 1..={max_col}.")]
    Coordinates {
        /// "Horizontal edge", "Vertical wall", ...
        what: &'static str,
        /// Row as typed.
        row: i64,
        /// Column as typed.
        col: i64,
        /// Largest valid row (1-indexed).
        max_row: usize,
        /// Largest valid column (1-indexed).
        max_col: usize,
    },

    /// Pawn step that would leave the board.
    #[error("Move is out of board bounds.")]
    OffBoard,
}

/// In-range moves the rules forbid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    /// Sliding tile not next to the blank.
    #[error("Tile {0} is not next to the empty space.")]
    NotAdjacent(u32),

    /// Dots and Boxes edge already claimed.
    #[error("Illegal move: that edge is already claimed.")]
    EdgeClaimed,

    /// Pawn step across a wall.
    #[error("Move blocked by a wall.")]
    WallBlocked,

    /// Pawn step onto the opponent.
    #[error("Space blocked by the other pawn.")]
    PawnBlocked,

    /// Wall budget exhausted.
    #[error("No walls remaining.")]
    NoWallsLeft,

    /// Wall shares a slot with an existing wall.
    #[error("Wall overlaps an existing wall.")]
    WallOverlap,

    /// Wall crosses a wall of the other orientation.
    #[error("Wall cannot cross an existing wall.")]
    WallCrossing,

    /// The game has already ended.
    #[error("The game is already over.")]
    GameOver,
}

/// Which recoverable error family a `MoveError` belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Range,
    Rule,
}

/// A rejected move. The turn is not consumed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Rule(#[from] RuleViolation),
}

impl MoveError {
    /// The error family.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            MoveError::Format(_) => ErrorKind::Format,
            MoveError::Range(_) => ErrorKind::Range,
            MoveError::Rule(_) => ErrorKind::Rule,
        }
    }
}

/// Board dimensions rejected at construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DimensionError {
    #[error("Rows and columns must be greater than 0 (got {rows}x{columns}).")]
    NotPositive { rows: i64, columns: i64 },

    #[error("Rows and columns must be at most {max} (got {rows}x{columns}).")]
    TooLarge { rows: i64, columns: i64, max: usize },

    /// A one-cell sliding puzzle is solved in every arrangement.
    #[error("A sliding puzzle needs at least two cells.")]
    TooFewCells,

    /// Quoridor pawns placed off the board or on the same cell.
    #[error("Pawns must start on two different cells of the {size}x{size} board.")]
    StartingCells { size: usize },

    /// Explicit layout does not fit the board.
    #[error("Expected {expected} labels, got {found}.")]
    LabelCount { expected: usize, found: usize },

    /// Explicit layout is not a permutation of `0..rows*columns`.
    #[error("Labels must be each of 0..{cells} exactly once.")]
    LabelSet { cells: usize },
}
