use crate::board::Board;
use crate::board_location::{offset_location, BoardLocation};

/// Walks rays from `from` in each given direction, collecting empty squares
/// and stopping at the first occupied one (included when it holds an enemy
/// piece). Shared by the rook, bishop, and queen generators.
pub fn sliding_moves(
    board: &Board,
    from: BoardLocation,
    directions: &[(i8, i8)],
) -> Vec<BoardLocation> {
    let mut moves = Vec::new();
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };

    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Ok(next) = offset_location(current, d_row, d_col) {
            match board.piece_at(next) {
                None => moves.push(next),
                Some(target) => {
                    if target.color != piece.color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }

    moves
}
