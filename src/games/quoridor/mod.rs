//! Two-player Quoridor on a fixed 9×9 board.

mod game;

pub use game::{Quoridor, QuoridorBuilder, QuoridorMove};
