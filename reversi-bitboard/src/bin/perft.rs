use clap::Parser;
use log::info;
use reversi_bitboard::test_utils::perft::{run_perft_with, MoveGen};
use reversi_bitboard::{Board, Player};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Count the leaves of the game tree from the starting position", long_about = None)]
struct Args {
    /// Search depth in plies; a pass counts as a ply
    #[arg(long, default_value_t = 6)]
    depth: u64,

    /// Enumerate moves in heuristic order instead of from the bit-parallel mask
    #[arg(long)]
    sorted: bool,

    /// Print the starting position and its ordered moves first
    #[arg(long)]
    show_board: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.show_board {
        let board = Board::new();
        let moves: Vec<String> = board
            .sorted_moves(Player::default())
            .iter()
            .map(|coords| coords.to_string())
            .collect();
        println!("{}\n", board);
        println!("{} to move: [{}]\n", Player::default(), moves.join(", "));
    }

    let movegen = if args.sorted {
        MoveGen::Sorted
    } else {
        MoveGen::Mask
    };

    info!("running perft to depth {} using {:?}", args.depth, movegen);
    let start = Instant::now();
    let leaves = run_perft_with(args.depth, movegen);
    info!("finished in {:.2?}", start.elapsed());

    println!("perft({}) = {}", args.depth, leaves);
}
