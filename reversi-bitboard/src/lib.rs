//! `reversi-bitboard` is a Reversi/Othello board engine for tournament players.
//!
//! The package is split into two levels:
//!
//!  - [`bitboard`] holds the bit-plane primitives: square numbering, the eight
//!    edge-masked directional shifts, and population counts.
//!  - [`Board`] keeps one mask per player and implements legality checks, move
//!    enumeration, heuristic move ordering, and capture-and-flip on top of them.
//!
//! Collaborators that own their own board representation can seed a [`Board`]
//! through [`GameBoard`]. Raw masks are also reachable through a C FFI.

pub mod bitboard;
pub mod ffi;
pub mod import;
pub mod ordering;
pub mod test_utils;

mod board;
mod coordinates;
mod player;
mod utils;

pub use board::*;
pub use coordinates::*;
pub use import::{GameBoard, OutOfBoundsError};
pub use player::*;

/// The number of squares on one edge of the board.
pub const EDGE_LENGTH: usize = 8;

/// The number of squares on the board.
pub const NUM_SPACES: usize = 64;
