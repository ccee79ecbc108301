//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The game always has exactly two players. Internally they are indexed
//! from 0, but they are numbered 1 and 2 everywhere a human sees them.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of players at the table.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier: one of the two players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`, shown
/// to humans as "Player 1".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first in every game.
    pub const ONE: PlayerId = PlayerId(0);

    /// The second player.
    pub const TWO: PlayerId = PlayerId(1);

    /// Look up a player by their human-facing number (1 or 2).
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::ONE),
            2 => Some(Self::TWO),
            _ => None,
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the human-facing player number (1-based).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// The other player.
    ///
    /// ```
    /// use rust_pairs::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::ONE.other(), PlayerId::TWO);
    /// assert_eq!(PlayerId::TWO.other(), PlayerId::ONE);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Iterate over both player IDs in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::ONE, Self::TWO].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_pairs::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_value(0);
/// scores[PlayerId::TWO] += 2;
///
/// assert_eq!(scores[PlayerId::ONE], 0);
/// assert_eq!(scores[PlayerId::TWO], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
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
