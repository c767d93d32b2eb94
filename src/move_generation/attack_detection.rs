//! Attack and check probes.
//!
//! Both queries scan every square and test membership in the opposing
//! pieces' pseudo-legal sets. That is O(64 × branching) per call and it is
//! invoked repeatedly by castling generation and legality filtering, so it
//! dominates the engine's runtime; it is kept simple and obviously correct
//! instead of maintaining incremental attack maps.

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::move_generation::move_generator::pseudo_legal_moves;
use crate::piece_color::PieceColor;

/// True iff any piece opposing `defender` has `square` in its pseudo-legal
/// move set.
pub fn is_square_attacked(board: &Board, square: BoardLocation, defender: PieceColor) -> bool {
    for row in 0..8 {
        for col in 0..8 {
            let from: BoardLocation = (row, col);
            if let Some(piece) = board.piece_at(from) {
                if piece.color != defender && pseudo_legal_moves(board, from).contains(&square) {
                    return true;
                }
            }
        }
    }
    false
}

/// True iff this side's king square is attacked by the opponent.
pub fn is_in_check(board: &Board, color: PieceColor) -> bool {
    is_square_attacked(board, board.king_location(color), color)
}
