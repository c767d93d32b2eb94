use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::moves::sliding::sliding_moves;

/// Rank and file directions a rook slides along.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Pseudo-legal rook destinations from `from`.
pub fn rook_moves(board: &Board, from: BoardLocation) -> Vec<BoardLocation> {
    sliding_moves(board, from, &ROOK_DIRECTIONS)
}
