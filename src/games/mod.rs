//! Game implementations.
//!
//! - `sliding`: single-player sliding number puzzle
//! - `dots`: two-player Dots and Boxes
//! - `quoridor`: two-player Quoridor, 9×9
//!
//! `notation` holds the move-text helpers the parsers share.

pub mod notation;
pub mod sliding;
pub mod dots;
pub mod quoridor;

pub use notation::Orientation;
pub use sliding::{SlideMove, SlidingPuzzle, SlidingPuzzleBuilder};
pub use dots::{DotsAndBoxes, DotsAndBoxesBuilder, EdgeMove};
pub use quoridor::{Quoridor, QuoridorBuilder, QuoridorMove};
