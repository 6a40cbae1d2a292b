//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking and tuning move generation.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Coordinates, Player};

/// How moves are enumerated at each node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveGen {
    /// [`Board::move_mask`].
    Mask,
    /// [`Board::check_moves`].
    Scan,
    /// [`Board::sorted_moves`].
    Sorted,
}

pub fn run_perft(depth: u64) -> u64 {
    run_perft_with(depth, MoveGen::Mask)
}

pub fn run_perft_with(depth: u64, movegen: MoveGen) -> u64 {
    leaves_below(Board::new(), Player::default(), depth, false, movegen)
}

fn legal_moves(board: &Board, player: Player, movegen: MoveGen) -> Vec<Coordinates> {
    match movegen {
        MoveGen::Mask => {
            let moves = board.move_mask(player);
            Coordinates::all()
                .filter(|coords| moves.intersects(coords.to_bit()))
                .collect()
        }
        MoveGen::Scan => board.check_moves(player),
        MoveGen::Sorted => board.sorted_moves(player),
    }
}

fn leaves_below(
    board: Board,
    player: Player,
    depth: u64,
    passed: bool,
    movegen: MoveGen,
) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = legal_moves(&board, player, movegen);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !player, depth - 1, true, movegen);
    }

    all_moves
        .into_iter()
        .map(|coords| {
            let mut child = board;
            child.make_move_at(coords, player);
            leaves_below(child, !player, depth - 1, false, movegen)
        })
        .sum()
}
