//! Sliding number puzzle.
//!
//! Tiles `1..rows*columns` and one blank on a player-sized board:
//! - The board is shuffled until it is solvable and not already solved
//! - On each move, name a tile next to the blank to slide it over
//! - The puzzle is solved when tiles read in order with the blank last
//!
//! Single player.

mod game;

pub use game::{is_solvable, is_solved, SlideMove, SlidingPuzzle, SlidingPuzzleBuilder, BLANK};
