//! Terminal session: menus, setup prompts, and the move loop.
//!
//! - `ArcadeGame` puts the three engines behind one value
//! - `Session` reads lines from any `BufRead` and writes to any `Write`

pub mod arcade;
pub mod runner;

pub use arcade::ArcadeGame;
pub use runner::{NextAction, Session};
