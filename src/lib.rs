//! Crate root module declarations for the Quince Chess rules engine.
//!
//! This file exposes all top-level subsystems (board state, per-piece move
//! generation, legality filtering, terminal-state detection, and utility
//! helpers) so binaries, tests, and external tooling can import stable
//! module paths.

pub mod apply_move_to_board;
pub mod board;
pub mod board_location;
pub mod chess_errors;
pub mod piece_class;
pub mod piece_color;
pub mod piece_record;

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding;
}

pub mod move_generation {
    pub mod attack_detection;
    pub mod legal_move_checks;
    pub mod move_generator;
    pub mod terminal_state;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_board;
}
