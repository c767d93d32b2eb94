//! The sole externally reachable mutator of game state.
//!
//! `try_apply_move` validates a move given in algebraic coordinates and, if
//! it is legal, plays it with all of its special-move side effects. Every
//! failure point precedes the first mutation, so from the caller's view the
//! call is atomic: either the whole move lands and the turn passes, or
//! nothing changed.

use crate::board::{Board, LastMoveRecord};
use crate::chess_errors::ChessErrors;
use crate::move_generation::move_generator::legal_moves;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::utils::algebraic::algebraic_to_location;

/// Applies a move and reports only whether it was played.
///
/// Malformed coordinates, an empty or wrong-color source square, and an
/// illegal destination all surface uniformly as `false`; callers that need
/// the reason can use [`try_apply_move`] or re-derive it from
/// [`legal_moves`].
pub fn apply_move(board: &mut Board, start: &str, end: &str) -> bool {
    try_apply_move(board, start, end).is_ok()
}

/// Applies a move, reporting the specific failure on rejection.
///
/// On success: special effects (en passant removal, auto-queen promotion,
/// castling rook shift) are applied, the piece is relocated and marked
/// moved, the king cache and last-move record are updated, the notation
/// pair is appended to the history, and the turn toggles.
pub fn try_apply_move(board: &mut Board, start: &str, end: &str) -> Result<(), ChessErrors> {
    let from = algebraic_to_location(start)?;
    let to = algebraic_to_location(end)?;

    let mut piece = board
        .piece_at(from)
        .ok_or(ChessErrors::EmptySourceSquare(from))?;
    if piece.color != board.current_player {
        return Err(ChessErrors::NotSideToMove(from));
    }
    if !legal_moves(board, from).contains(&to) {
        return Err(ChessErrors::IllegalDestination(from, to));
    }

    // All validation passed; mutations start here.

    if piece.class == PieceClass::Pawn {
        // A diagonal pawn move onto an empty square is en passant; the
        // passed pawn sits beside the start square, not on the destination.
        if to.1 != from.1 && board.piece_at(to).is_none() {
            board.set_piece((from.0, to.1), None);
        }

        // Auto-queen on the last rank.
        if to.0 == 0 || to.0 == 7 {
            piece = PieceRecord {
                color: piece.color,
                class: PieceClass::Queen,
                has_moved: piece.has_moved,
            };
        }
    }

    // Castling relocates the corresponding rook as well.
    if piece.class == PieceClass::King && (to.1 - from.1).abs() == 2 {
        let (rook_from, rook_to) = if to.1 == 6 {
            ((from.0, 7), (from.0, 5))
        } else {
            ((from.0, 0), (from.0, 3))
        };
        if let Some(mut rook) = board.piece_at(rook_from) {
            rook.has_moved = true;
            board.set_piece(rook_from, None);
            board.set_piece(rook_to, Some(rook));
        }
    }

    piece.has_moved = true;
    board.set_piece(to, Some(piece));
    board.set_piece(from, None);

    if piece.class == PieceClass::King {
        board.set_king_location(piece.color, to);
    }

    board.last_move = Some(LastMoveRecord { start: from, end: to });
    board.move_history.push((start.to_string(), end.to_string()));
    board.current_player = board.current_player.opponent();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::attack_detection::is_in_check;
    use crate::move_generation::terminal_state::{is_checkmate, is_stalemate};
    use crate::piece_color::PieceColor;

    fn play(board: &mut Board, moves: &[(&str, &str)]) {
        for (start, end) in moves {
            assert!(
                apply_move(board, start, end),
                "move {start}{end} should be legal"
            );
        }
    }

    #[test]
    fn opening_pawn_push_relocates_and_passes_the_turn() {
        let mut board = Board::new_game();
        assert!(apply_move(&mut board, "e2", "e4"));

        let pawn = board.piece_at((4, 4)).expect("pawn should be on e4");
        assert_eq!(pawn.class, PieceClass::Pawn);
        assert_eq!(pawn.color, PieceColor::White);
        assert!(pawn.has_moved);
        assert!(board.piece_at((6, 4)).is_none());
        assert_eq!(board.current_player, PieceColor::Black);
        assert_eq!(board.move_history(), &[("e2".to_string(), "e4".to_string())]);
    }

    #[test]
    fn illegal_pawn_jump_is_rejected_without_mutation() {
        let mut board = Board::new_game();
        let snapshot = board.clone();

        assert!(!apply_move(&mut board, "e2", "e5"));
        assert_eq!(board, snapshot);
        assert_eq!(
            try_apply_move(&mut board, "e2", "e5"),
            Err(ChessErrors::IllegalDestination((6, 4), (3, 4)))
        );
        assert_eq!(board, snapshot);
    }

    #[test]
    fn malformed_and_wrong_color_inputs_fail_cleanly() {
        let mut board = Board::new_game();
        let snapshot = board.clone();

        assert!(!apply_move(&mut board, "e9", "e4"));
        assert!(!apply_move(&mut board, "", "e4"));
        assert!(!apply_move(&mut board, "e2", "x1"));
        // Empty source and opponent's piece.
        assert!(!apply_move(&mut board, "e4", "e5"));
        assert!(!apply_move(&mut board, "e7", "e5"));
        assert_eq!(board, snapshot);

        assert_eq!(
            try_apply_move(&mut board, "e4", "e5"),
            Err(ChessErrors::EmptySourceSquare((4, 4)))
        );
        assert_eq!(
            try_apply_move(&mut board, "e7", "e5"),
            Err(ChessErrors::NotSideToMove((1, 4)))
        );
    }

    #[test]
    fn fools_mate_ends_in_checkmate_for_white() {
        let mut board = Board::new_game();
        play(
            &mut board,
            &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
        );

        assert!(is_in_check(&board, PieceColor::White));
        assert!(is_checkmate(&board, PieceColor::White));
        assert!(!is_stalemate(&board, PieceColor::White));
        assert_eq!(board.current_player, PieceColor::White);
    }

    #[test]
    fn en_passant_capture_removes_the_passed_pawn() {
        let mut board = Board::new_game();
        play(
            &mut board,
            &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")],
        );

        assert!(apply_move(&mut board, "e5", "d6"));

        let pawn = board.piece_at((2, 3)).expect("capturing pawn should be on d6");
        assert_eq!(pawn.class, PieceClass::Pawn);
        assert_eq!(pawn.color, PieceColor::White);
        assert!(board.piece_at((3, 3)).is_none(), "the d5 pawn vanishes");
        assert!(board.piece_at((3, 4)).is_none(), "e5 was vacated");
    }

    #[test]
    fn en_passant_expires_after_one_reply() {
        let mut board = Board::new_game();
        play(
            &mut board,
            &[
                ("e2", "e4"),
                ("a7", "a6"),
                ("e4", "e5"),
                ("d7", "d5"),
                ("b1", "c3"),
                ("a6", "a5"),
            ],
        );

        // The double advance is two plies old now.
        assert!(!apply_move(&mut board, "e5", "d6"));
    }

    #[test]
    fn kingside_castling_relocates_both_king_and_rook() {
        let mut board = Board::new_game();
        // Vacate f1 and g1.
        board.set_piece((7, 5), None);
        board.set_piece((7, 6), None);

        assert!(legal_moves(&board, (7, 4)).contains(&(7, 6)));
        assert!(apply_move(&mut board, "e1", "g1"));

        let king = board.piece_at((7, 6)).expect("king should be on g1");
        assert_eq!(king.class, PieceClass::King);
        assert!(king.has_moved);
        let rook = board.piece_at((7, 5)).expect("rook should be on f1");
        assert_eq!(rook.class, PieceClass::Rook);
        assert!(rook.has_moved);
        assert!(board.piece_at((7, 4)).is_none());
        assert!(board.piece_at((7, 7)).is_none());
        assert_eq!(board.white_king_location, (7, 6));
    }

    #[test]
    fn queenside_castling_relocates_both_king_and_rook() {
        let mut board = Board::new_game();
        board.set_piece((7, 1), None);
        board.set_piece((7, 2), None);
        board.set_piece((7, 3), None);

        assert!(apply_move(&mut board, "e1", "c1"));
        assert_eq!(
            board.piece_at((7, 2)).expect("king on c1").class,
            PieceClass::King
        );
        assert_eq!(
            board.piece_at((7, 3)).expect("rook on d1").class,
            PieceClass::Rook
        );
        assert!(board.piece_at((7, 0)).is_none());
        assert_eq!(board.white_king_location, (7, 2));
    }

    #[test]
    fn pawn_reaching_the_last_rank_becomes_a_queen() {
        let mut board = Board::new_game();
        board.grid = [[None; 8]; 8];
        board.set_piece((7, 4), Some(PieceRecord::new(PieceColor::White, PieceClass::King)));
        board.set_piece((0, 4), Some(PieceRecord::new(PieceColor::Black, PieceClass::King)));
        let mut pawn = PieceRecord::new(PieceColor::White, PieceClass::Pawn);
        pawn.has_moved = true;
        board.set_piece((1, 0), Some(pawn));

        assert!(apply_move(&mut board, "a7", "a8"));
        let queen = board.piece_at((0, 0)).expect("promoted piece on a8");
        assert_eq!(queen.class, PieceClass::Queen);
        assert_eq!(queen.color, PieceColor::White);
        assert!(queen.has_moved);
    }

    #[test]
    fn after_every_applied_move_the_new_side_has_an_outcome() {
        let mut board = Board::new_game();
        play(&mut board, &[("e2", "e4"), ("e7", "e5"), ("g1", "f3")]);

        let color = board.current_player;
        let any_move = (0..8).any(|row| {
            (0..8).any(|col| {
                board
                    .piece_at((row, col))
                    .map(|piece| piece.color == color)
                    .unwrap_or(false)
                    && !legal_moves(&board, (row, col)).is_empty()
            })
        });
        assert!(any_move || is_checkmate(&board, color) || is_stalemate(&board, color));
        assert!(any_move);
    }

    #[test]
    fn current_player_toggles_only_on_success() {
        let mut board = Board::new_game();
        assert!(!apply_move(&mut board, "e2", "d3"));
        assert_eq!(board.current_player, PieceColor::White);
        assert!(apply_move(&mut board, "e2", "e3"));
        assert_eq!(board.current_player, PieceColor::Black);
    }
}
