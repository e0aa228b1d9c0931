//! Shared board layer: geometry, per-cell views, and text rendering.
//!
//! Every game maps its own state onto a grid of `CellView`s; the
//! `Renderer` turns that grid into lines of text without knowing which game
//! produced it.

pub mod grid;
pub mod cell;
pub mod render;

pub use grid::{Direction, Grid, Position};
pub use cell::CellView;
pub use render::{Renderer, CELL_WIDTH, INVALID_GRID_MESSAGE};
