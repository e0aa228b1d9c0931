//! Core types: players, RNG, configuration, errors.
//!
//! Game-agnostic building blocks shared by every engine and the session.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{player_label, PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::GameRng;
pub use config::{ArcadeConfig, GameKind, MAX_DIMENSION, QUORIDOR_SIZE, QUORIDOR_WALLS};
pub use error::{DimensionError, ErrorKind, FormatError, MoveError, RangeError, RuleViolation};
