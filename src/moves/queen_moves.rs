use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;

/// Pseudo-legal queen destinations from `from`: the union of the rook and
/// bishop rays.
pub fn queen_moves(board: &Board, from: BoardLocation) -> Vec<BoardLocation> {
    let mut moves = rook_moves(board, from);
    moves.extend(bishop_moves(board, from));
    moves
}
