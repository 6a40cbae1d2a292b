//! The board engine: one mask per player, with the capture rule expressed
//! through the directional shifts in [`bitboard`](crate::bitboard).
//!
//! Raw `(x, y)` arguments are 0-indexed columns and rows and must be below 8.
//! [`Coordinates`] are the 1-indexed, always-valid alternative.

use crate::bitboard::{bit_count, coordinate_to_bit, Bitboard, Direction};
use crate::coordinates::Coordinates;
use crate::ordering;
use crate::player::Player;
use crate::utils;
use derive_more::{Display, Error};
use log::debug;
use std::convert::TryFrom;
use std::fmt;

/// A pair of disjoint bitboards storing the complete position.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[u64; 2]", into = "[u64; 2]")
)]
pub struct Board {
    red: Bitboard,
    green: Bitboard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display(fmt = "red and green masks overlap")]
    OverlappingMasks,
    #[display(fmt = "illegal move at {}", coords)]
    IllegalMove { coords: Coordinates },
}

impl Default for Board {
    /// Gets the starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    // E4 and D5.
    const RED_START: u64 = 0x0000001008000000;
    // D4 and E5.
    const GREEN_START: u64 = 0x0000000810000000;

    /// The starting position: four discs on the central diagonals, red to move.
    pub const fn new() -> Self {
        Self {
            red: Bitboard::from_raw(Self::RED_START),
            green: Bitboard::from_raw(Self::GREEN_START),
        }
    }

    /// A board with no discs at all.
    pub const fn empty() -> Self {
        Self {
            red: Bitboard::EMPTY,
            green: Bitboard::EMPTY,
        }
    }

    /// Build a board from raw masks, as produced by [`Board::mask`].
    pub fn from_masks(red: u64, green: u64) -> Result<Self, BoardError> {
        if red & green != 0 {
            return Err(BoardError::OverlappingMasks);
        }

        Ok(Self {
            red: red.into(),
            green: green.into(),
        })
    }

    /// Overwrite this board with the position of `other`.
    pub fn copy_from(&mut self, other: &Board) {
        self.red = other.red;
        self.green = other.green;
    }

    /// The squares occupied by `player`.
    #[inline]
    pub fn mask(&self, player: Player) -> Bitboard {
        match player {
            Player::Red => self.red,
            Player::Green => self.green,
        }
    }

    /// Get a mask indicating where the occupied squares are.
    #[inline]
    pub fn occupied_mask(&self) -> Bitboard {
        self.red | self.green
    }

    /// Get a mask indicating where the empty squares are.
    #[inline]
    pub fn empty_mask(&self) -> Bitboard {
        !self.occupied_mask()
    }

    /// Masks of `player`'s discs and the opponent's, in that order.
    #[inline]
    fn sides(&self, player: Player) -> (Bitboard, Bitboard) {
        (self.mask(player), self.mask(!player))
    }

    #[inline]
    pub fn is_empty(&self, x: u8, y: u8) -> bool {
        !coordinate_to_bit(x, y).intersects(self.occupied_mask())
    }

    /// Who owns the square at `(x, y)`. Squares off the board read as empty.
    pub fn occupation(&self, x: u8, y: u8) -> Option<Player> {
        if x > 7 || y > 7 {
            return None;
        }

        let bit = coordinate_to_bit(x, y);
        if bit.intersects(self.red) {
            Some(Player::Red)
        } else if bit.intersects(self.green) {
            Some(Player::Green)
        } else {
            None
        }
    }

    /// Who owns the square at `coords`.
    #[inline]
    pub fn occupation_at(&self, coords: Coordinates) -> Option<Player> {
        let (x, y) = coords.to_xy();
        self.occupation(x, y)
    }

    /// Set the owner of `(x, y)` directly, without flipping anything.
    pub fn set_occupation(&mut self, x: u8, y: u8, occupation: Option<Player>) {
        let bit = coordinate_to_bit(x, y);
        self.red &= !bit;
        self.green &= !bit;
        match occupation {
            Some(Player::Red) => self.red |= bit,
            Some(Player::Green) => self.green |= bit,
            None => {}
        }
    }

    /// Returns true if `player` may place a disc at `(x, y)`.
    pub fn check_move(&self, x: u8, y: u8, player: Player) -> bool {
        if !self.is_empty(x, y) {
            return false;
        }

        let (own, opponent) = self.sides(player);
        let start = coordinate_to_bit(x, y);
        Direction::ALL
            .iter()
            .any(|&direction| !captured_run(own, opponent, start, direction).is_empty())
    }

    /// All legal targets for `player`, top row first, left to right.
    pub fn check_moves(&self, player: Player) -> Vec<Coordinates> {
        Coordinates::all()
            .filter(|coords| {
                let (x, y) = coords.to_xy();
                self.check_move(x, y, player)
            })
            .collect()
    }

    /// All legal targets for `player`, in the order given by
    /// [`ordering::MOVE_ORDER_GROUPS`]: corners, edges, center, inner ring,
    /// C-squares, X-squares.
    pub fn sorted_moves(&self, player: Player) -> Vec<Coordinates> {
        ordering::move_order()
            .filter(|&(x, y)| self.check_move(x, y, player))
            .filter_map(|(x, y)| Coordinates::from_xy(x, y))
            .collect()
    }

    /// Mask of every legal target for `player`, computed for all squares at once.
    /// Holds the same squares as [`Board::check_moves`].
    pub fn move_mask(&self, player: Player) -> Bitboard {
        let (own, opponent) = self.sides(player);
        let empties = self.empty_mask();
        let mut moves = Bitboard::EMPTY;

        for &direction in Direction::ALL.iter() {
            // A run of opponent discs is at most 6 long.
            let mut run = direction.shift(own) & opponent;
            for _ in 0..5 {
                run |= direction.shift(run) & opponent;
            }
            moves |= direction.shift(run) & empties;
        }

        moves
    }

    /// Returns true if `player` has at least one legal move.
    #[inline]
    pub fn has_moves(&self, player: Player) -> bool {
        !self.move_mask(player).is_empty()
    }

    /// The opponent discs a disc placed by `player` at `(x, y)` would capture.
    /// Does not include `(x, y)` itself, and does not check that it is empty.
    pub fn flips(&self, x: u8, y: u8, player: Player) -> Bitboard {
        let (own, opponent) = self.sides(player);
        let start = coordinate_to_bit(x, y);
        Direction::ALL
            .iter()
            .fold(Bitboard::EMPTY, |flips, &direction| {
                flips | captured_run(own, opponent, start, direction)
            })
    }

    /// Place a disc for `player` at `(x, y)` and flip every captured line.
    ///
    /// The move is not validated: call [`Board::check_move`] first. An illegal
    /// target still gets a disc, along with whatever lines it happens to bound.
    pub fn make_move(&mut self, x: u8, y: u8, player: Player) {
        let placed = coordinate_to_bit(x, y) | self.flips(x, y, player);
        let (own, opponent) = self.sides(player);
        self.set_sides(player, own | placed, opponent & !placed);
    }

    /// Same as [`Board::make_move`], addressed by [`Coordinates`].
    #[inline]
    pub fn make_move_at(&mut self, coords: Coordinates, player: Player) {
        let (x, y) = coords.to_xy();
        self.make_move(x, y, player)
    }

    /// Checked [`Board::make_move_at`]: the board is left untouched
    /// if the move is not legal for `player`.
    pub fn play(&mut self, coords: Coordinates, player: Player) -> Result<(), BoardError> {
        let (x, y) = coords.to_xy();
        if !self.check_move(x, y, player) {
            debug!("{} cannot move at {}", player, coords);
            return Err(BoardError::IllegalMove { coords });
        }

        self.make_move(x, y, player);
        Ok(())
    }

    fn set_sides(&mut self, player: Player, own: Bitboard, opponent: Bitboard) {
        match player {
            Player::Red => {
                self.red = own;
                self.green = opponent;
            }
            Player::Green => {
                self.green = own;
                self.red = opponent;
            }
        }
    }

    /// Number of discs `player` has on the board.
    #[inline]
    pub fn count_stones(&self, player: Player) -> u8 {
        bit_count(self.mask(player))
    }

    /// `player`'s discs minus the opponent's.
    #[inline]
    pub fn diff_stones(&self, player: Player) -> i8 {
        self.count_stones(player) as i8 - self.count_stones(!player) as i8
    }

    /// Returns true once no empty square remains. A position where neither
    /// side can move but squares are still empty is not reported as over.
    #[inline]
    pub fn game_over(&self) -> bool {
        bit_count(self.empty_mask()) == 0
    }
}

/// Opponent discs bounded by `start` and an `own` disc along `direction`.
/// Empty if the run is missing, open-ended, or runs off the board.
#[inline]
fn captured_run(
    own: Bitboard,
    opponent: Bitboard,
    start: Bitboard,
    direction: Direction,
) -> Bitboard {
    let mut run = Bitboard::EMPTY;
    let mut position = direction.shift(start);
    while position.intersects(opponent) {
        run |= position;
        position = direction.shift(position);
    }

    if position.intersects(own) {
        run
    } else {
        Bitboard::EMPTY
    }
}

impl TryFrom<[u64; 2]> for Board {
    type Error = BoardError;

    fn try_from([red, green]: [u64; 2]) -> Result<Self, Self::Error> {
        Self::from_masks(red, green)
    }
}

impl From<Board> for [u64; 2] {
    fn from(board: Board) -> Self {
        [board.red.into(), board.green.into()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let squares = self.red.into_iter().zip(self.green).map(|bits| match bits {
            (true, _) => Player::Red.to_char(),
            (_, true) => Player::Green.to_char(),
            _ => '.',
        });
        utils::format_grid(squares, f)?;
        write!(
            f,
            "\nRed stones: {}  Green stones: {}",
            self.count_stones(Player::Red),
            self.count_stones(Player::Green)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn at(s: &str) -> Coordinates {
        Coordinates::from_str(s).unwrap()
    }

    fn board(red: &[&str], green: &[&str]) -> Board {
        let mask = |squares: &[&str]| {
            squares
                .iter()
                .fold(Bitboard::EMPTY, |mask, s| mask | at(s).to_bit())
        };
        Board::from_masks(mask(red).into(), mask(green).into()).unwrap()
    }

    #[test]
    fn starting_position() {
        let board = Board::new();
        assert_eq!(board.occupation_at(at("D4")), Some(Player::Green));
        assert_eq!(board.occupation_at(at("E5")), Some(Player::Green));
        assert_eq!(board.occupation_at(at("E4")), Some(Player::Red));
        assert_eq!(board.occupation_at(at("D5")), Some(Player::Red));
        assert_eq!(board.count_stones(Player::Red), 2);
        assert_eq!(board.count_stones(Player::Green), 2);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn from_masks_rejects_overlap() {
        assert_eq!(Board::from_masks(0b11, 0b10), Err(BoardError::OverlappingMasks));
        assert!(Board::from_masks(0b01, 0b10).is_ok());
    }

    #[test]
    fn starting_moves() {
        let board = Board::new();
        assert_eq!(
            board.check_moves(Player::Red),
            vec![at("D3"), at("C4"), at("F5"), at("E6")]
        );
        assert_eq!(
            board.check_moves(Player::Green),
            vec![at("E3"), at("F4"), at("C5"), at("D6")]
        );
    }

    #[test]
    fn starting_moves_sorted() {
        let board = Board::new();
        assert_eq!(
            board.sorted_moves(Player::Red),
            vec![at("C4"), at("D3"), at("E6"), at("F5")]
        );
    }

    #[test]
    fn sorted_and_scanned_agree() {
        let mut board = Board::new();
        board.make_move_at(at("D3"), Player::Red);
        board.make_move_at(at("C3"), Player::Green);
        board.make_move_at(at("C4"), Player::Red);

        for &player in Player::ALL.iter() {
            let mut scanned = board.check_moves(player);
            let mut sorted = board.sorted_moves(player);
            scanned.sort();
            sorted.sort();
            assert_eq!(scanned, sorted);
        }
    }

    #[test]
    fn first_move_flips_one() {
        let mut board = Board::new();
        let diff_before = board.diff_stones(Player::Red);
        board.make_move_at(at("D3"), Player::Red);

        assert_eq!(board.occupation_at(at("D3")), Some(Player::Red));
        assert_eq!(board.occupation_at(at("D4")), Some(Player::Red));
        assert_eq!(board.count_stones(Player::Red), 4);
        assert_eq!(board.count_stones(Player::Green), 1);
        assert_eq!(board.diff_stones(Player::Red) - diff_before, 3);
        assert_eq!(board.diff_stones(Player::Green), -3);
    }

    #[test]
    fn occupied_square_is_never_legal() {
        let board = Board::new();
        for &player in Player::ALL.iter() {
            assert!(!board.check_move(3, 3, player));
            assert!(!board.check_move(4, 3, player));
        }
    }

    #[test]
    fn check_move_is_repeatable() {
        let board = Board::new();
        assert_eq!(board.check_move(3, 2, Player::Red), board.check_move(3, 2, Player::Red));
        assert_eq!(board.check_move(0, 0, Player::Red), board.check_move(0, 0, Player::Red));
    }

    #[test]
    fn no_capture_across_the_east_edge() {
        // Without edge masking, G4 -> H4 -> A3 would bound H4.
        let board = board(&["A3"], &["H4"]);
        assert!(!board.check_move(6, 3, Player::Red));
        assert!(board.check_moves(Player::Red).is_empty());
        assert!(board.move_mask(Player::Red).is_empty());
    }

    #[test]
    fn no_capture_across_the_west_edge() {
        // Without edge masking, B5 -> A5 -> H6 would bound A5.
        let board = board(&["H6"], &["A5"]);
        assert!(!board.check_move(1, 4, Player::Red));
        assert!(board.check_moves(Player::Red).is_empty());
    }

    #[test]
    fn run_off_the_board_is_not_a_capture() {
        let board = board(&[], &["G1", "H1"]);
        assert!(!board.check_move(5, 0, Player::Red));
        assert_eq!(board.flips(5, 0, Player::Red), Bitboard::EMPTY);
    }

    #[test]
    fn capture_ending_on_top_right_corner() {
        let mut board = board(&["H1"], &["G1"]);
        assert!(board.check_move(5, 0, Player::Red));

        board.make_move(5, 0, Player::Red);
        assert_eq!(board.occupation(6, 0), Some(Player::Red));
        assert_eq!(board.count_stones(Player::Green), 0);
    }

    #[test]
    fn flips_several_lines() {
        // C3 bounds D4 (diagonal) and C4, C5 (vertical).
        let mut board = board(&["E5", "C6"], &["D4", "C4", "C5"]);
        assert!(board.check_move(2, 2, Player::Red));
        board.make_move_at(at("C3"), Player::Red);

        assert_eq!(board.count_stones(Player::Red), 6);
        assert_eq!(board.count_stones(Player::Green), 0);
    }

    #[test]
    fn long_run_is_captured() {
        let mut board = board(&["H1"], &["B1", "C1", "D1", "E1", "F1", "G1"]);
        assert_eq!(board.flips(0, 0, Player::Red).count_occupied(), 6);
        board.make_move(0, 0, Player::Red);
        assert_eq!(board.mask(Player::Red), Bitboard::from(0xffu64 << 56));
    }

    #[test]
    fn illegal_make_move_only_places() {
        let mut board = Board::new();
        board.make_move(0, 0, Player::Red);
        assert_eq!(board.occupation(0, 0), Some(Player::Red));
        assert_eq!(board.count_stones(Player::Red), 3);
        assert_eq!(board.count_stones(Player::Green), 2);
    }

    #[test]
    fn play_rejects_illegal_moves() {
        let mut board = Board::new();
        assert_eq!(
            board.play(at("A1"), Player::Red),
            Err(BoardError::IllegalMove { coords: at("A1") })
        );
        assert_eq!(board, Board::new());

        assert_eq!(board.play(at("D3"), Player::Red), Ok(()));
        assert_eq!(board.count_stones(Player::Red), 4);
    }

    #[test]
    fn move_mask_matches_check_moves() {
        let mut board = Board::new();
        let mut player = Player::Red;
        for _ in 0..20 {
            let scanned: Vec<Coordinates> = board.check_moves(player);
            let mask = board.move_mask(player);
            assert_eq!(mask.count_occupied() as usize, scanned.len());
            for coords in &scanned {
                assert!(mask.intersects(coords.to_bit()));
            }

            if let Some(&coords) = scanned.first() {
                board.make_move_at(coords, player);
            }
            player = !player;
        }
    }

    #[test]
    fn copies_are_independent() {
        let original = Board::new();
        let mut copy = original;
        copy.make_move_at(at("D3"), Player::Red);
        assert_eq!(original, Board::new());
        assert_ne!(copy, original);

        let mut target = Board::empty();
        target.copy_from(&copy);
        assert_eq!(target, copy);
    }

    #[test]
    fn occupation_off_the_board_is_empty() {
        let board = Board::from_masks(u64::MAX, 0).unwrap();
        assert_eq!(board.occupation(8, 0), None);
        assert_eq!(board.occupation(0, 8), None);
        assert_eq!(board.occupation(255, 255), None);
        assert_eq!(board.occupation(7, 7), Some(Player::Red));
    }

    #[test]
    fn game_over_only_when_full() {
        let full = Board::from_masks(0xffffffff00000000, 0x00000000ffffffff).unwrap();
        assert!(full.game_over());
        assert_eq!(full.diff_stones(Player::Red), 0);

        let one_empty = Board::from_masks(0xffffffff00000000, 0x00000000fffffffe).unwrap();
        assert!(one_empty.is_empty(0, 7));
        assert!(!one_empty.game_over());

        assert!(!Board::new().game_over());
    }

    #[test]
    fn game_over_ignores_blocked_positions() {
        let board = board(&["A1"], &[]);
        assert!(!board.has_moves(Player::Red));
        assert!(!board.has_moves(Player::Green));
        assert!(!board.game_over());
    }

    #[test]
    fn display() {
        let expected = "   A B C D E F G H\n \
                        1 . . . . . . . . \n \
                        2 . . . . . . . . \n \
                        3 . . . . . . . . \n \
                        4 . . . G R . . . \n \
                        5 . . . R G . . . \n \
                        6 . . . . . . . . \n \
                        7 . . . . . . . . \n \
                        8 . . . . . . . . \n\
                        Red stones: 2  Green stones: 2";
        assert_eq!(Board::new().to_string(), expected);
    }

    #[test]
    fn set_occupation_keeps_masks_disjoint() {
        let mut board = Board::new();
        board.set_occupation(3, 3, Some(Player::Red));
        assert_eq!(board.occupation(3, 3), Some(Player::Red));
        assert_eq!(board.count_stones(Player::Green), 1);
        assert!(!board.mask(Player::Red).intersects(board.mask(Player::Green)));

        board.set_occupation(3, 3, None);
        assert!(board.is_empty(3, 3));
        assert_eq!(board.count_stones(Player::Red), 2);
    }

    #[test]
    fn raw_mask_round_trip() {
        let board = Board::new();
        let raw: [u64; 2] = board.into();
        assert_eq!(Board::try_from(raw), Ok(board));
    }
}
