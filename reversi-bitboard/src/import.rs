//! Seeding a [`Board`] from an external board representation.
//!
//! Collaborators that keep their own board (a UI, a tournament server) expose it
//! through [`GameBoard`]. Import asks it about every square once; a square it
//! cannot answer for is logged and left empty.

use crate::{Board, Coordinates, Player};
use derive_more::{Display, Error};
use log::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "square out of bounds (row {}, column {})", row, col)]
pub struct OutOfBoundsError {
    pub row: u8,
    pub col: u8,
}

/// A board owned by someone else, read one square at a time.
pub trait GameBoard {
    /// Who owns the square at `coords`, or `None` if it is empty.
    fn occupant(&self, coords: Coordinates) -> Result<Option<Player>, OutOfBoundsError>;
}

impl GameBoard for Board {
    fn occupant(&self, coords: Coordinates) -> Result<Option<Player>, OutOfBoundsError> {
        Ok(self.occupation_at(coords))
    }
}

/// A plain grid indexed as `grid[row - 1][col - 1]`.
impl GameBoard for [[Option<Player>; 8]; 8] {
    fn occupant(&self, coords: Coordinates) -> Result<Option<Player>, OutOfBoundsError> {
        let (x, y) = coords.to_xy();
        self.get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .ok_or(OutOfBoundsError {
                row: coords.row(),
                col: coords.col(),
            })
    }
}

impl Board {
    /// Build a board holding the same discs as `game_board`.
    pub fn from_game_board<B: GameBoard + ?Sized>(game_board: &B) -> Self {
        let mut board = Self::empty();
        board.read_board(game_board);
        board
    }

    /// Replace this position with the discs of `game_board`.
    /// Squares the collaborator fails to report are logged and left empty.
    pub fn read_board<B: GameBoard + ?Sized>(&mut self, game_board: &B) {
        *self = Self::empty();

        for coords in Coordinates::all() {
            let (x, y) = coords.to_xy();
            match game_board.occupant(coords) {
                Ok(occupation) => self.set_occupation(x, y, occupation),
                Err(err) => warn!(
                    "error while copying the game board at x: {} y: {}: {}",
                    x, y, err
                ),
            }
        }
    }
}
