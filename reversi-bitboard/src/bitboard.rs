//! Bit-plane primitives.
//!
//! Every operation here is a pure function over [`Bitboard`]s. The board engine
//! composes them per square and per direction; nothing in this module holds state.
//!
//! Squares are numbered so that the top row is in the high byte:
//!
//! ```text
//!     A  B  C  D  E  F  G  H
//! 1 | 56 57 58 59 60 61 62 63
//! 2 | 48 49 50 51 52 53 54 55
//! 3 | 40 41 42 43 44 45 46 47
//! 4 | 32 33 34 35 36 37 38 39
//! 5 | 24 25 26 27 28 29 30 31
//! 6 | 16 17 18 19 20 21 22 23
//! 7 | 08 09 10 11 12 13 14 15
//! 8 | 00 01 02 03 04 05 06 07
//! ```
//!
//! Moving north adds 8 to the bit index, moving east adds 1.

use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per square of the board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Bitboard(u64);

/// Every square except column A.
const NOT_A_FILE: u64 = 0xfefefefefefefefe;

/// Every square except column H.
const NOT_H_FILE: u64 = 0x7f7f7f7f7f7f7f7f;

/// Every square.
const FULL_MASK: u64 = 0xffffffffffffffff;

impl Bitboard {
    /// No squares set.
    pub const EMPTY: Self = Self(0);

    /// All 64 squares set.
    pub const FULL: Self = Self(FULL_MASK);

    /// Wrap a raw mask. Same as `Bitboard::from`, but usable in constants.
    #[inline]
    pub const fn from_raw(bits: u64) -> Self {
        Self(bits)
    }

    /// Count the number of set squares.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        bit_count(self)
    }

    /// Count the number of unset squares.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if no square is set.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if this bitboard shares at least one square with `other`.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

/// Map a 0-indexed (column, row) pair to its one-hot bitboard.
/// `x` and `y` must both be below 8; callers are trusted.
#[inline]
pub fn coordinate_to_bit(x: u8, y: u8) -> Bitboard {
    debug_assert!(x < 8 && y < 8, "square ({}, {}) is off the board", x, y);
    Bitboard(1u64 << ((7 - y) * 8 + x))
}

/// Count the set bits in `mask`, treating it as unsigned.
#[inline]
pub fn bit_count(mask: Bitboard) -> u8 {
    mask.0.count_ones() as u8
}

/// One of the eight compass directions a line of discs can run in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Change in bit index for one step in this direction.
    #[inline]
    pub fn offset(self) -> i8 {
        match self {
            Direction::North => 8,
            Direction::NorthEast => 9,
            Direction::East => 1,
            Direction::SouthEast => -7,
            Direction::South => -8,
            Direction::SouthWest => -9,
            Direction::West => -1,
            Direction::NorthWest => 7,
        }
    }

    /// Squares allowed to move in this direction. Anything on the edge the
    /// shift would wrap past is cleared before shifting.
    #[inline]
    pub fn edge_mask(self) -> Bitboard {
        Bitboard(match self {
            Direction::North | Direction::South => FULL_MASK,
            Direction::NorthEast | Direction::East | Direction::SouthEast => NOT_H_FILE,
            Direction::SouthWest | Direction::West | Direction::NorthWest => NOT_A_FILE,
        })
    }

    /// Move every set square of `mask` one step in this direction.
    #[inline]
    pub fn shift(self, mask: Bitboard) -> Bitboard {
        let movable = (mask & self.edge_mask()).0;
        let offset = self.offset();
        if offset > 0 {
            Bitboard(movable << offset)
        } else {
            Bitboard(movable >> -offset)
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

#[inline]
pub fn shift_n(mask: Bitboard) -> Bitboard {
    Direction::North.shift(mask)
}

#[inline]
pub fn shift_ne(mask: Bitboard) -> Bitboard {
    Direction::NorthEast.shift(mask)
}

#[inline]
pub fn shift_e(mask: Bitboard) -> Bitboard {
    Direction::East.shift(mask)
}

#[inline]
pub fn shift_se(mask: Bitboard) -> Bitboard {
    Direction::SouthEast.shift(mask)
}

#[inline]
pub fn shift_s(mask: Bitboard) -> Bitboard {
    Direction::South.shift(mask)
}

#[inline]
pub fn shift_sw(mask: Bitboard) -> Bitboard {
    Direction::SouthWest.shift(mask)
}

#[inline]
pub fn shift_w(mask: Bitboard) -> Bitboard {
    Direction::West.shift(mask)
}

#[inline]
pub fn shift_nw(mask: Bitboard) -> Bitboard {
    Direction::NorthWest.shift(mask)
}

/// Iterator over the squares of a [`Bitboard`], top row first.
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    square: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.square == NUM_SPACES {
            return None;
        }

        let x = (self.square % EDGE_LENGTH) as u8;
        let y = (self.square / EDGE_LENGTH) as u8;
        self.square += 1;

        Some(self.bitboard.intersects(coordinate_to_bit(x, y)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = NUM_SPACES - self.square;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits {}

/// Iterate over the squares in row-major order, top row first.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            square: 0,
            bitboard: self,
        }
    }
}
