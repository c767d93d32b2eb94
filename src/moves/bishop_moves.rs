use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::moves::sliding::sliding_moves;

/// Diagonal directions a bishop slides along.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Pseudo-legal bishop destinations from `from`.
pub fn bishop_moves(board: &Board, from: BoardLocation) -> Vec<BoardLocation> {
    sliding_moves(board, from, &BISHOP_DIRECTIONS)
}
