use crate::board::Board;
use crate::board_location::{offset_location, BoardLocation};
use crate::piece_class::PieceClass;

/// Pseudo-legal pawn destinations from `from`.
///
/// Covers the single push onto an empty square, the double push from the
/// starting row when both squares are empty, diagonal captures onto
/// enemy-occupied squares, and the en passant destination behind an enemy
/// pawn that just double-advanced alongside (read from the board's last-move
/// record). Removing the passed pawn is a move-execution effect, not a
/// generation effect.
pub fn pawn_moves(board: &Board, from: BoardLocation) -> Vec<BoardLocation> {
    let mut moves = Vec::new();
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };
    let dir = piece.color.pawn_direction();

    // Pushes.
    if let Ok(forward) = offset_location(from, dir, 0) {
        if board.piece_at(forward).is_none() {
            moves.push(forward);
            if from.0 == piece.color.pawn_start_row() {
                let jump = (from.0 + 2 * dir, from.1);
                if board.piece_at(jump).is_none() {
                    moves.push(jump);
                }
            }
        }
    }

    // Diagonal captures.
    for d_col in [-1, 1] {
        if let Ok(diagonal) = offset_location(from, dir, d_col) {
            if let Some(target) = board.piece_at(diagonal) {
                if target.color != piece.color {
                    moves.push(diagonal);
                }
            }
        }
    }

    // En passant: the last move was an enemy pawn double-advancing to the
    // square right beside this pawn.
    if let Some(last) = board.last_move {
        if let Some(last_piece) = board.piece_at(last.end) {
            if last_piece.class == PieceClass::Pawn
                && (last.start.0 - last.end.0).abs() == 2
                && from.0 == last.end.0
                && (from.1 - last.end.1).abs() == 1
            {
                moves.push((from.0 + dir, last.end.1));
            }
        }
    }

    moves
}
