//! Checkmate and stalemate detection.

use crate::board::Board;
use crate::move_generation::attack_detection::is_in_check;
use crate::move_generation::move_generator::legal_moves;
use crate::piece_color::PieceColor;

/// True iff this side is in check and has no legal move anywhere.
pub fn is_checkmate(board: &Board, color: PieceColor) -> bool {
    if !is_in_check(board, color) {
        return false;
    }
    !has_any_legal_move(board, color)
}

/// True iff this side is NOT in check and has no legal move anywhere.
///
/// Mutually exclusive with [`is_checkmate`] by construction: the two differ
/// exactly in the check predicate.
pub fn is_stalemate(board: &Board, color: PieceColor) -> bool {
    if is_in_check(board, color) {
        return false;
    }
    !has_any_legal_move(board, color)
}

fn has_any_legal_move(board: &Board, color: PieceColor) -> bool {
    for row in 0..8 {
        for col in 0..8 {
            if let Some(piece) = board.piece_at((row, col)) {
                if piece.color == color && !legal_moves(board, (row, col)).is_empty() {
                    return true;
                }
            }
        }
    }
    false
}
