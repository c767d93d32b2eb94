//! Move generation entry points.
//!
//! The classic recursion trap in engines of this shape is that attack
//! detection wants move generation, castling wants attack detection, and
//! legality filtering wants attack detection again. The split below removes
//! it by construction: `pseudo_legal_moves` never generates castling and
//! never filters, so attack probes built on it cannot re-enter either.

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::move_generation::legal_move_checks::move_causes_check;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::{castling_moves, king_moves};
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;
use crate::piece_class::PieceClass;

/// Destinations reachable by the piece on `from` under its movement pattern
/// and basic occupancy rules only. May leave the mover's own king in check;
/// never includes castling. Empty squares yield an empty set.
pub fn pseudo_legal_moves(board: &Board, from: BoardLocation) -> Vec<BoardLocation> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    match piece.class {
        PieceClass::Pawn => pawn_moves(board, from),
        PieceClass::Rook => rook_moves(board, from),
        PieceClass::Knight => knight_moves(board, from),
        PieceClass::Bishop => bishop_moves(board, from),
        PieceClass::Queen => queen_moves(board, from),
        PieceClass::King => king_moves(board, from),
    }
}

/// Destinations the piece on `from` may actually play: the pseudo-legal set,
/// plus castling for kings, minus every move that would leave the mover's
/// own king in check.
///
/// Pure with respect to the caller's board: the simulate-and-undo filtering
/// runs on a scratch clone, so repeated calls return identical sets and
/// leave the board untouched.
pub fn legal_moves(board: &Board, from: BoardLocation) -> Vec<BoardLocation> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut candidates = pseudo_legal_moves(board, from);
    if piece.class == PieceClass::King {
        candidates.extend(castling_moves(board, from));
    }

    let mut scratch = board.clone();
    candidates.retain(|&to| !move_causes_check(&mut scratch, from, to));
    candidates
}
