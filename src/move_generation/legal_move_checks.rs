//! Simulate-and-undo legality probe.
//!
//! The probe mutates the live board in place rather than cloning it per
//! candidate, so the restore must be exact on every path: grid cells, any
//! captured piece, and the king-location caches all return bit-for-bit to
//! their prior state regardless of the probe's outcome.

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::move_generation::attack_detection::is_in_check;
use crate::piece_class::PieceClass;

/// Plays `from` → `to` on the board, asks whether the mover's own king is
/// then attacked, and restores the board exactly. Returns the answer.
///
/// An empty `from` square reports `false` without touching the board.
pub fn move_causes_check(board: &mut Board, from: BoardLocation, to: BoardLocation) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    let captured = board.piece_at(to);

    board.set_piece(to, Some(piece));
    board.set_piece(from, None);

    let saved_king_location = if piece.class == PieceClass::King {
        let previous = board.king_location(piece.color);
        board.set_king_location(piece.color, to);
        Some(previous)
    } else {
        None
    };

    let in_check = is_in_check(board, piece.color);

    board.set_piece(from, Some(piece));
    board.set_piece(to, captured);
    if let Some(previous) = saved_king_location {
        board.set_king_location(piece.color, previous);
    }

    in_check
}
