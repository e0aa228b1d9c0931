//! The `Game` trait every arcade engine implements.
//!
//! Games implement `Game` to define:
//! - How raw move text parses (`Game::Move`)
//! - How a move changes state, or why it is rejected
//! - When the game is over and who won
//! - How the board looks, cell by cell
//!
//! The session calls into `Game` but never interprets game-specific state.

use std::str::FromStr;

use crate::board::{CellView, Grid, Renderer};
use crate::core::{FormatError, MoveError, PlayerId};

/// Input that quits the current game, in any case.
pub const QUIT_SENTINEL: &str = "q";

/// True iff `raw` is the quit sentinel.
#[must_use]
pub fn is_quit(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(QUIT_SENTINEL)
}

/// Lifecycle of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Won,
    Quit,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// What an accepted input did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move applied; play continues (turn passed where applicable).
    Continue,
    /// Move applied and closed `closed` boxes; the same player goes again.
    ExtraTurn { closed: usize },
    /// The quit sentinel was entered.
    Quit,
}

/// Game trait.
///
/// ## Implementation Notes
///
/// - `apply_move` must leave state untouched when it returns `Err`
/// - `apply_move` must reject every move once the game is not active
/// - `cell_views` must match `grid()` in shape
pub trait Game {
    /// Parsed move for this game.
    type Move: FromStr<Err = FormatError>;

    /// Reset to a fresh game on the same board configuration.
    fn initialize(&mut self);

    /// Apply a parsed move for the player to act.
    fn apply_move(&mut self, mv: Self::Move) -> Result<MoveOutcome, MoveError>;

    /// Stop the game without changing board state.
    fn quit(&mut self);

    fn status(&self) -> GameStatus;

    fn is_won(&self) -> bool;

    /// Board shape.
    fn grid(&self) -> Grid;

    /// Current look of every cell, `views[row][col]`.
    fn cell_views(&self) -> Vec<Vec<CellView>>;

    /// Winner, once the game is won.
    fn result(&self) -> Option<GameResult>;

    /// Text shown when the game is won.
    fn victory_message(&self) -> String;

    /// Text shown when the game ends without a win.
    fn summary(&self) -> String;

    /// Prompt for the next move.
    fn move_prompt(&self) -> String;

    /// Lines shown above the board before each move.
    fn status_lines(&self) -> Vec<String> {
        Vec::new()
    }

    /// How-to-play banner shown once after setup.
    fn instructions(&self) -> Vec<String> {
        Vec::new()
    }

    // === Convenience Methods ===

    /// Apply raw move text.
    ///
    /// The quit sentinel is recognized before any game-specific parsing.
    fn apply_input(&mut self, raw: &str) -> Result<MoveOutcome, MoveError> {
        if is_quit(raw) {
            self.quit();
            return Ok(MoveOutcome::Quit);
        }

        let mv = raw.parse::<Self::Move>().map_err(|err| {
            tracing::trace!(input = raw, error = %err, "unparseable move");
            MoveError::from(err)
        })?;
        self.apply_move(mv)
    }

    fn is_active(&self) -> bool {
        self.status() == GameStatus::Active
    }

    /// Render the board as text lines.
    fn render(&self) -> Vec<String> {
        Renderer::new(self.grid()).render(&self.cell_views())
    }
}
