//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two sides of the game. The Attacker always moves first.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Starts in the bottom-right corner and moves first.
    Attacker,
    /// Starts in the top-left corner.
    Defender,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::Attacker, Player::Defender];

    /// The other player.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Player::Attacker => Player::Defender,
            Player::Defender => Player::Attacker,
        }
    }

    /// Slot index (Attacker = 0, Defender = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Attacker => 0,
            Player::Defender => 1,
        }
    }

    /// Lowercase initial used in board rendering.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Player::Attacker => 'a',
            Player::Defender => 'd',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Attacker => write!(f, "Attacker"),
            Player::Defender => write!(f, "Defender"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use ai_wargame::core::{Player, PlayerMap};
///
/// let mut units: PlayerMap<u8> = PlayerMap::with_value(6);
/// units[Player::Defender] -= 1;
/// assert_eq!(units[Player::Attacker], 6);
/// assert_eq!(units[Player::Defender], 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::Attacker), factory(Player::Defender)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
