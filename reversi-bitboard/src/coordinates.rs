//! Code for working with [`Coordinates`] on the board.

use crate::bitboard::{coordinate_to_bit, Bitboard};
use crate::import::OutOfBoundsError;
use derive_more::{Display, Error};
use std::convert::TryFrom;
use std::fmt::{self, Write};

/// A square on the board as external collaborators see it: 1-indexed
/// `row` (1 is the top) and `col` (1 is column A).
///
/// Always on the board; the engine's raw `(x, y)` API is 0-indexed instead,
/// with `x = col - 1` and `y = row - 1`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(u8, u8)", into = "(u8, u8)")
)]
pub struct Coordinates {
    row: u8,
    col: u8,
}

impl Coordinates {
    /// Construct from 1-indexed row and column.
    /// Returns None if either lies outside 1..=8.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (1..=8).contains(&row) && (1..=8).contains(&col) {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Construct from 0-indexed column `x` and row `y`.
    /// Returns None if either is above 7.
    pub fn from_xy(x: u8, y: u8) -> Option<Self> {
        Self::new(y.checked_add(1)?, x.checked_add(1)?)
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    /// The 0-indexed (x, y) pair the engine works with.
    #[inline]
    pub fn to_xy(self) -> (u8, u8) {
        (self.col - 1, self.row - 1)
    }

    /// The one-hot bitboard for this square.
    #[inline]
    pub fn to_bit(self) -> Bitboard {
        let (x, y) = self.to_xy();
        coordinate_to_bit(x, y)
    }

    /// All 64 squares in scan order: top row first, left to right.
    pub fn all() -> impl Iterator<Item = Coordinates> {
        (1..=8).flat_map(|row| (1..=8).map(move |col| Coordinates { row, col }))
    }
}

/// Build from a 1-indexed `(row, col)` pair.
impl TryFrom<(u8, u8)> for Coordinates {
    type Error = OutOfBoundsError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row, col).ok_or(OutOfBoundsError { row, col })
    }
}

impl From<Coordinates> for (u8, u8) {
    fn from(coords: Coordinates) -> Self {
        (coords.row, coords.col)
    }
}

/// Convert into string notation ("A4": column letter, then row number).
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col_str = "ABCDEFGH"
            .chars()
            .nth(self.col as usize - 1)
            .ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        write!(f, "{}", self.row)
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid coordinate string")]
pub struct ParseCoordinatesError;

/// Build [`Coordinates`] from string notation ("A4", case-insensitive).
impl std::str::FromStr for Coordinates {
    type Err = ParseCoordinatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars
            .next()
            .ok_or(ParseCoordinatesError)?
            .to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseCoordinatesError)? as u8 + 1;
        let row = chars
            .next()
            .ok_or(ParseCoordinatesError)?
            .to_digit(10)
            .ok_or(ParseCoordinatesError)? as u8;

        if chars.next().is_some() {
            return Err(ParseCoordinatesError);
        }

        Self::new(row, col).ok_or(ParseCoordinatesError)
    }
}
