//! Dots and Boxes.
//!
//! Two players take turns claiming edges of a `rows × columns` grid of boxes:
//! - Claiming the fourth edge of a box gives the box to the mover
//! - A move that closes one or more boxes earns another move
//! - The game ends when every box is owned; more boxes wins
//!
//! Edges are typed as `H r c` or `V r c`, 1-indexed.

mod game;

pub use game::{DotsAndBoxes, DotsAndBoxesBuilder, EdgeMove};
