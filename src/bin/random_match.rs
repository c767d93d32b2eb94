//! Random self-play driver.
//!
//! Plays uniformly random legal moves for both sides until checkmate,
//! stalemate, or a ply cap, printing the moves and the final position.
//! Useful as a smoke exercise of the full rules engine and as a reference
//! consumer of its API.

use rand::seq::IteratorRandom;

use quince_chess::apply_move_to_board::apply_move;
use quince_chess::board::Board;
use quince_chess::board_location::BoardLocation;
use quince_chess::chess_errors::ChessErrors;
use quince_chess::move_generation::move_generator::legal_moves;
use quince_chess::move_generation::terminal_state::{is_checkmate, is_stalemate};
use quince_chess::utils::algebraic::location_to_algebraic;
use quince_chess::utils::render_board::render_board;

const MAX_PLIES: usize = 300;

fn all_legal_moves(board: &Board) -> Vec<(BoardLocation, BoardLocation)> {
    let mut moves = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let from: BoardLocation = (row, col);
            if let Some(piece) = board.piece_at(from) {
                if piece.color == board.current_player {
                    for to in legal_moves(board, from) {
                        moves.push((from, to));
                    }
                }
            }
        }
    }
    moves
}

fn main() -> Result<(), ChessErrors> {
    let mut board = Board::new_game();
    let mut rng = rand::rng();

    for ply in 0..MAX_PLIES {
        let color = board.current_player;
        if is_checkmate(&board, color) {
            println!("checkmate: {:?} loses after {ply} plies", color);
            break;
        }
        if is_stalemate(&board, color) {
            println!("stalemate after {ply} plies");
            break;
        }

        let moves = all_legal_moves(&board);
        let &(from, to) = moves
            .iter()
            .choose(&mut rng)
            .ok_or(ChessErrors::NoLegalMoves)?;

        let start = location_to_algebraic(from)?;
        let end = location_to_algebraic(to)?;
        if !apply_move(&mut board, &start, &end) {
            // legal_moves and apply_move disagree; this is a bug.
            return Err(ChessErrors::IllegalDestination(from, to));
        }
        println!("{:>3}. {:?} {start}{end}", ply + 1, color);
    }

    println!("{}", render_board(&board));
    let history: Vec<String> = board
        .move_history()
        .iter()
        .map(|(start, end)| format!("{start}{end}"))
        .collect();
    println!("history: {}", history.join(" "));

    Ok(())
}
