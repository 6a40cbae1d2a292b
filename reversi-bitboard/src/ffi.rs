//! C ABI over raw masks, for callers that store the two masks themselves.
//!
//! Players are passed by id (1 for red, 2 for green). Overlapping masks, unknown
//! players, and squares off the board are treated as "no move".

use crate::{Board, Player};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskPair {
    pub red_mask: u64,
    pub green_mask: u64,
}

fn decode(red_mask: u64, green_mask: u64, player: u8) -> Option<(Board, Player)> {
    let board = Board::from_masks(red_mask, green_mask).ok()?;
    let player = Player::from_id(player)?;
    Some((board, player))
}

#[no_mangle]
pub extern "C" fn reversi_check_move(
    red_mask: u64,
    green_mask: u64,
    x: u8,
    y: u8,
    player: u8,
) -> bool {
    if x > 7 || y > 7 {
        return false;
    }

    decode(red_mask, green_mask, player)
        .map(|(board, player)| board.check_move(x, y, player))
        .unwrap_or(false)
}

/// Applies the move without validating it, like [`Board::make_move`].
/// Invalid input returns the masks unchanged.
#[no_mangle]
pub extern "C" fn reversi_make_move(
    red_mask: u64,
    green_mask: u64,
    x: u8,
    y: u8,
    player: u8,
) -> MaskPair {
    let unchanged = MaskPair {
        red_mask,
        green_mask,
    };
    if x > 7 || y > 7 {
        return unchanged;
    }

    match decode(red_mask, green_mask, player) {
        Some((mut board, player)) => {
            board.make_move(x, y, player);
            MaskPair {
                red_mask: board.mask(Player::Red).into(),
                green_mask: board.mask(Player::Green).into(),
            }
        }
        None => unchanged,
    }
}

#[no_mangle]
pub extern "C" fn reversi_move_mask(red_mask: u64, green_mask: u64, player: u8) -> u64 {
    decode(red_mask, green_mask, player)
        .map(|(board, player)| u64::from(board.move_mask(player)))
        .unwrap_or(0)
}
