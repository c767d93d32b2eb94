use crate::board::Board;
use crate::board_location::{offset_location, BoardLocation};
use crate::move_generation::attack_detection::{is_in_check, is_square_attacked};
use crate::piece_class::PieceClass;

/// Pseudo-legal king destinations from `from`: the eight adjacent squares,
/// filtered to the board and to squares not holding an own piece. Castling
/// is deliberately absent here; it is generated only on the legal-move path
/// by [`castling_moves`], which keeps attack probes free of recursion.
pub fn king_moves(board: &Board, from: BoardLocation) -> Vec<BoardLocation> {
    let mut moves = Vec::new();
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };

    for d_row in -1..=1 {
        for d_col in -1..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            if let Ok(next) = offset_location(from, d_row, d_col) {
                match board.piece_at(next) {
                    None => moves.push(next),
                    Some(target) if target.color != piece.color => moves.push(next),
                    Some(_) => {}
                }
            }
        }
    }

    moves
}

/// Castling destinations for the king on `from`, kingside and queenside.
///
/// Each side requires: the king never moved, the corresponding rook present
/// and unmoved, every square between them empty, the king not currently in
/// check, and neither square the king transits (destination included)
/// attacked by the opponent. The rook relocation itself is a move-execution
/// effect.
pub fn castling_moves(board: &Board, from: BoardLocation) -> Vec<BoardLocation> {
    let mut moves = Vec::new();
    let Some(king) = board.piece_at(from) else {
        return moves;
    };
    if king.has_moved {
        return moves;
    }
    let row = from.0;

    // Kingside: rook on column 7, columns 5-6 clear and safe.
    if let Some(rook) = board.piece_at((row, 7)) {
        if rook.class == PieceClass::Rook
            && rook.color == king.color
            && !rook.has_moved
            && (5..7).all(|col| board.piece_at((row, col)).is_none())
            && !is_in_check(board, king.color)
            && (5..7).all(|col| !is_square_attacked(board, (row, col), king.color))
        {
            moves.push((row, 6));
        }
    }

    // Queenside: rook on column 0, columns 1-3 clear, columns 2-3 safe.
    if let Some(rook) = board.piece_at((row, 0)) {
        if rook.class == PieceClass::Rook
            && rook.color == king.color
            && !rook.has_moved
            && (1..4).all(|col| board.piece_at((row, col)).is_none())
            && !is_in_check(board, king.color)
            && (2..4).all(|col| !is_square_attacked(board, (row, col), king.color))
        {
            moves.push((row, 2));
        }
    }

    moves
}
