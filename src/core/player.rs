//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. The arcade seats one player (sliding puzzle)
//! or two (Dots and Boxes, Quoridor).
//!
//! ## PlayerMap
//!
//! Per-player storage backed by a `Vec`, indexed by `PlayerId`. Used for
//! names, scores and wall budgets.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Maximum number of seats any arcade game uses.
pub const MAX_PLAYERS: usize = 2;

/// Player seat, 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(0);
    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat in a two-player game.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over all player IDs for a game with `player_count` seats.
    ///
    /// ```
    /// use terminal_arcade::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(2).collect();
    /// assert_eq!(players, vec![PlayerId::FIRST, PlayerId::SECOND]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Single-character board label for a player name.
///
/// The first ASCII letter of the name, upper-cased, or `?` if the name has
/// none.
///
/// ```
/// use terminal_arcade::core::player_label;
///
/// assert_eq!(player_label("alice"), 'A');
/// assert_eq!(player_label("  2bob"), 'B');
/// assert_eq!(player_label("42"), '?');
/// ```
#[must_use]
pub fn player_label(name: &str) -> char {
    name.chars()
        .map(|c| c.to_ascii_uppercase())
        .find(char::is_ascii_uppercase)
        .unwrap_or('?')
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use terminal_arcade::core::{PlayerId, PlayerMap};
///
/// let mut walls: PlayerMap<u32> = PlayerMap::with_value(2, 10);
/// walls[PlayerId::SECOND] -= 1;
///
/// assert_eq!(walls[PlayerId::FIRST], 10);
/// assert_eq!(walls[PlayerId::SECOND], 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(
            player_count <= MAX_PLAYERS,
            "At most {MAX_PLAYERS} players supported"
        );

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
