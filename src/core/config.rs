//! Arcade configuration.
//!
//! Engines are configured through their own builders; `ArcadeConfig`
//! carries the settings of the surrounding session.

use serde::{Deserialize, Serialize};

/// Largest row or column count for sliding puzzle and Dots and Boxes boards.
pub const MAX_DIMENSION: usize = 10;

/// Side length of the Quoridor board.
pub const QUORIDOR_SIZE: usize = 9;

/// Walls each Quoridor player starts with.
pub const QUORIDOR_WALLS: u32 = 10;

/// The games on offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    SlidingPuzzle,
    DotsAndBoxes,
    Quoridor,
}

impl GameKind {
    /// Every game, in menu order.
    pub const ALL: [GameKind; 3] = [
        GameKind::SlidingPuzzle,
        GameKind::DotsAndBoxes,
        GameKind::Quoridor,
    ];

    /// Menu number (0-based, as printed).
    #[must_use]
    pub fn menu_index(self) -> usize {
        match self {
            GameKind::SlidingPuzzle => 0,
            GameKind::DotsAndBoxes => 1,
            GameKind::Quoridor => 2,
        }
    }

    /// Look up a game by its menu number.
    #[must_use]
    pub fn from_menu_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(self) -> usize {
        match self {
            GameKind::SlidingPuzzle => 1,
            GameKind::DotsAndBoxes | GameKind::Quoridor => 2,
        }
    }

    /// Whether the player chooses the board size.
    #[must_use]
    pub fn asks_dimensions(self) -> bool {
        !matches!(self, GameKind::Quoridor)
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameKind::SlidingPuzzle => "Sliding Puzzle",
            GameKind::DotsAndBoxes => "Dots And Boxes",
            GameKind::Quoridor => "Quoridor",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for GameKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sliding" | "sliding-puzzle" | "0" => Ok(GameKind::SlidingPuzzle),
            "dots" | "dots-and-boxes" | "1" => Ok(GameKind::DotsAndBoxes),
            "quoridor" | "2" => Ok(GameKind::Quoridor),
            other => Err(format!("unknown game '{other}'")),
        }
    }
}

/// Session configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArcadeConfig {
    /// Seed for board shuffles. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Largest dimension accepted at the input prompt before the board
    /// itself validates against `MAX_DIMENSION`.
    pub max_input_dimension: i64,

    /// Game to start with, skipping the first menu prompt.
    pub first_game: Option<GameKind>,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_input_dimension: 100,
            first_game: None,
        }
    }
}

impl ArcadeConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_max_input_dimension(mut self, max: i64) -> Self {
        self.max_input_dimension = max;
        self
    }

    #[must_use]
    pub fn with_first_game(mut self, game: GameKind) -> Self {
        self.first_game = Some(game);
        self
    }
}
