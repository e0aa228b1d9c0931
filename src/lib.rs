//! # terminal-arcade
//!
//! Turn-based board games played over a line-oriented terminal.
//!
//! ## Design Principles
//!
//! 1. **Shared Board Layer**: Every game describes its board as a grid of
//!    `CellView`s; one `Renderer` draws them all.
//!
//! 2. **Engines Own Their Rules**: A game parses its own move text and
//!    reports rejections as typed errors. The session never looks inside.
//!
//! 3. **Reproducible Shuffles**: Randomness comes from a seedable `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, error types
//! - `board`: Grid geometry, cell views, text renderer
//! - `rules`: `Game` trait and game lifecycle types
//! - `games`: Sliding Puzzle, Dots and Boxes, Quoridor
//! - `session`: Menus and the interactive move loop

pub mod core;
pub mod board;
pub mod rules;
pub mod games;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng,
    ArcadeConfig, GameKind,
    DimensionError, ErrorKind, FormatError, MoveError, RangeError, RuleViolation,
};

pub use crate::board::{CellView, Direction, Grid, Position, Renderer};

pub use crate::rules::{Game, GameResult, GameStatus, MoveOutcome};

pub use crate::games::{
    DotsAndBoxes, DotsAndBoxesBuilder, EdgeMove, Orientation,
    Quoridor, QuoridorBuilder, QuoridorMove,
    SlideMove, SlidingPuzzle, SlidingPuzzleBuilder,
};

pub use crate::session::{ArcadeGame, NextAction, Session};
