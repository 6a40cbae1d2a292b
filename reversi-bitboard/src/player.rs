//! The two sides of a game.

use derive_more::{Display, Error};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    Red,
    Green,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::Red, Player::Green];

    /// Numeric id shared with external collaborators: 1 for red, 2 for green.
    pub fn id(self) -> u8 {
        match self {
            Player::Red => 1,
            Player::Green => 2,
        }
    }

    /// Inverse of [`Player::id`].
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Player::Red),
            2 => Some(Player::Green),
            _ => None,
        }
    }

    /// Single-character label used in board dumps.
    pub fn to_char(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Green => 'G',
        }
    }
}

impl Default for Player {
    /// Gets the starting player (red).
    fn default() -> Self {
        Self::Red
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Red => Player::Green,
            Player::Green => Player::Red,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => f.write_str("Red"),
            Player::Green => f.write_str("Green"),
        }
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid player name")]
pub struct ParsePlayerError;

/// Parse "red"/"green" (any case) or their initials.
impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Player::Red),
            "g" | "green" => Ok(Player::Green),
            _ => Err(ParsePlayerError),
        }
    }
}
