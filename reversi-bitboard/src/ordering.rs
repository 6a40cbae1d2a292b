//! Static move ordering: the order in which [`Board::sorted_moves`] visits squares.
//!
//! Squares are listed as 0-indexed `(x, y)` pairs in groups, most promising first.
//! Together the groups cover each of the 64 squares exactly once.
//!
//! [`Board::sorted_moves`]: crate::Board::sorted_moves

/// The four corners: top-left, bottom-left, top-right, bottom-right.
pub const CORNERS: [(u8, u8); 4] = [(0, 0), (0, 7), (7, 0), (7, 7)];

/// Edge squares that are neither corners nor C-squares.
/// Top and bottom edges column by column, then left and right edges row by row.
#[rustfmt::skip]
pub const EDGES: [(u8, u8); 16] = [
    (2, 0), (2, 7), (3, 0), (3, 7), (4, 0), (4, 7), (5, 0), (5, 7),
    (0, 2), (7, 2), (0, 3), (7, 3), (0, 4), (7, 4), (0, 5), (7, 5),
];

/// The central 4x4 block, column by column.
#[rustfmt::skip]
pub const CENTER: [(u8, u8); 16] = [
    (2, 2), (2, 3), (2, 4), (2, 5),
    (3, 2), (3, 3), (3, 4), (3, 5),
    (4, 2), (4, 3), (4, 4), (4, 5),
    (5, 2), (5, 3), (5, 4), (5, 5),
];

/// The ring one step in from the edge, without its X-squares.
/// Visited one step at a time along all four sides together.
#[rustfmt::skip]
pub const INNER_RING: [(u8, u8); 16] = [
    (1, 2), (2, 1), (6, 2), (2, 6),
    (1, 3), (3, 1), (6, 3), (3, 6),
    (1, 4), (4, 1), (6, 4), (4, 6),
    (1, 5), (5, 1), (6, 5), (5, 6),
];

/// Edge squares next to a corner.
#[rustfmt::skip]
pub const C_SQUARES: [(u8, u8); 8] = [
    (0, 1), (1, 0), (7, 6), (6, 7),
    (0, 6), (1, 7), (6, 0), (7, 1),
];

/// Squares diagonally next to a corner.
pub const X_SQUARES: [(u8, u8); 4] = [(1, 1), (1, 6), (6, 1), (6, 6)];

/// Every group, in visiting order.
pub const MOVE_ORDER_GROUPS: [&[(u8, u8)]; 6] = [
    &CORNERS,
    &EDGES,
    &CENTER,
    &INNER_RING,
    &C_SQUARES,
    &X_SQUARES,
];

/// Iterate every square in heuristic order.
pub fn move_order() -> impl Iterator<Item = (u8, u8)> {
    MOVE_ORDER_GROUPS
        .iter()
        .flat_map(|group| group.iter().copied())
}
