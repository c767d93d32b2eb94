//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the mailbox grid for debugging,
//! tests, and diagnostics in text environments. Not a game-export format.

use crate::board::Board;
use crate::piece_class::PieceClass;
use crate::piece_color::PieceColor;
use crate::piece_record::PieceRecord;

/// Render the board to a Unicode string for terminal output.
///
/// Ranks are printed from 8 down to 1 so the board appears from White's
/// point of view, matching the internal row order.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8 {
        let rank_char = char::from(b'8' - row as u8);
        out.push(rank_char);
        out.push(' ');

        for col in 0..8 {
            match board.piece_at((row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: PieceRecord) -> char {
    match (piece.color, piece.class) {
        (PieceColor::White, PieceClass::Pawn) => '♙',
        (PieceColor::White, PieceClass::Knight) => '♘',
        (PieceColor::White, PieceClass::Bishop) => '♗',
        (PieceColor::White, PieceClass::Rook) => '♖',
        (PieceColor::White, PieceClass::Queen) => '♕',
        (PieceColor::White, PieceClass::King) => '♔',
        (PieceColor::Black, PieceClass::Pawn) => '♟',
        (PieceColor::Black, PieceClass::Knight) => '♞',
        (PieceColor::Black, PieceClass::Bishop) => '♝',
        (PieceColor::Black, PieceClass::Rook) => '♜',
        (PieceColor::Black, PieceClass::Queen) => '♛',
        (PieceColor::Black, PieceClass::King) => '♚',
    }
}
