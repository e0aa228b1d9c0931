//! Game trait for engine implementations.
//!
//! Games implement `Game` to define:
//! - How move text parses and applies
//! - Win conditions and results
//! - The per-cell view fed to the shared renderer
//!
//! The session drives any engine through `Game` alone.

pub mod engine;

pub use engine::{is_quit, Game, GameResult, GameStatus, MoveOutcome, QUIT_SENTINEL};
