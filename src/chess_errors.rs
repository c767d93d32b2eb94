//! Errors used throughout the rules engine.
//!
//! This module defines the canonical error type returned by game logic,
//! coordinate parsing, and move application. The enum `ChessErrors` is used
//! as the single error type across the crate to simplify propagation and
//! matching. Variants carry contextual payloads where useful so callers can
//! log or display precise diagnostics.
//!
//! All variants are recoverable input or rules failures; the boolean
//! `apply_move` surface collapses them to `false`. Structurally impossible
//! board states (for example a desynchronized king cache) are programming
//! errors and are not represented here.

use thiserror::Error;

use crate::board_location::BoardLocation;

/// Unified error type for the rules engine.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChessErrors {
    /// Offsetting `BoardLocation` by the delta `(d_row, d_col)` would place
    /// it off the board.
    #[error("offsetting {0:?} by ({1}, {2}) leaves the board")]
    TriedToMoveOutOfBounds(BoardLocation, i8, i8),

    /// An algebraic square string failed to parse (wrong length, file
    /// outside 'a'..='h', or rank outside '1'..='8').
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraicString(String),

    /// A `(row, col)` pair outside the 8×8 grid was used where a valid
    /// square was required.
    #[error("location {0:?} is outside the board")]
    LocationOutOfBounds(BoardLocation),

    /// A move was requested from a square that holds no piece.
    #[error("no piece on source square {0:?}")]
    EmptySourceSquare(BoardLocation),

    /// A move was requested for a piece that does not belong to the side
    /// to move.
    #[error("piece on {0:?} does not belong to the side to move")]
    NotSideToMove(BoardLocation),

    /// The requested destination is not in the legal move set of the piece
    /// on the source square.
    #[error("{1:?} is not a legal destination for the piece on {0:?}")]
    IllegalDestination(BoardLocation, BoardLocation),

    /// No legal moves are available for the side to move (checkmate or
    /// stalemate at higher-level logic).
    #[error("no legal moves available for the side to move")]
    NoLegalMoves,
}
