use crate::board::Board;
use crate::board_location::{offset_location, BoardLocation};

/// The eight fixed knight jump offsets.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Pseudo-legal knight destinations from `from`: the eight jumps, filtered
/// to the board and to squares not holding an own piece.
pub fn knight_moves(board: &Board, from: BoardLocation) -> Vec<BoardLocation> {
    let mut moves = Vec::new();
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };

    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        if let Ok(next) = offset_location(from, d_row, d_col) {
            match board.piece_at(next) {
                None => moves.push(next),
                Some(target) if target.color != piece.color => moves.push(next),
                Some(_) => {}
            }
        }
    }

    moves
}
