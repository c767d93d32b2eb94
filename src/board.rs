use crate::board_location::{location_in_bounds, BoardLocation};
use crate::piece_class::PieceClass;
use crate::piece_color::PieceColor;
use crate::piece_record::PieceRecord;

/// Start and end of the most recently applied move.
///
/// Consulted only to detect en passant eligibility: a pawn is capturable en
/// passant exactly when this record shows it just advanced two rows. The
/// record is overwritten on every successful move, so eligibility expires
/// after one reply.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LastMoveRecord {
    pub start: BoardLocation,
    pub end: BoardLocation,
}

/// Complete game state: the 8×8 grid plus the bookkeeping the rules need.
///
/// The king locations are cached redundantly and kept in sync with the grid
/// on every move and undo; desynchronizing them is a programming error, not
/// a recoverable condition. `current_player` toggles exactly once per
/// successfully applied move and never on a rejected one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// `grid[row][col]`, row 0 being Black's back rank (rank 8).
    pub grid: [[Option<PieceRecord>; 8]; 8],
    pub current_player: PieceColor,
    pub white_king_location: BoardLocation,
    pub black_king_location: BoardLocation,
    pub last_move: Option<LastMoveRecord>,
    /// Append-only `(start, end)` notation pairs, a replay record only;
    /// legality never consults it.
    pub move_history: Vec<(String, String)>,
}

impl Board {
    /// The standard initial layout, White to move.
    pub fn new_game() -> Self {
        let mut grid: [[Option<PieceRecord>; 8]; 8] = [[None; 8]; 8];

        for col in 0..8 {
            grid[1][col] = Some(PieceRecord::new(PieceColor::Black, PieceClass::Pawn));
            grid[6][col] = Some(PieceRecord::new(PieceColor::White, PieceClass::Pawn));
        }

        let back_rank = [
            PieceClass::Rook,
            PieceClass::Knight,
            PieceClass::Bishop,
            PieceClass::Queen,
            PieceClass::King,
            PieceClass::Bishop,
            PieceClass::Knight,
            PieceClass::Rook,
        ];
        for (col, class) in back_rank.into_iter().enumerate() {
            grid[0][col] = Some(PieceRecord::new(PieceColor::Black, class));
            grid[7][col] = Some(PieceRecord::new(PieceColor::White, class));
        }

        Board {
            grid,
            current_player: PieceColor::White,
            white_king_location: (7, 4),
            black_king_location: (0, 4),
            last_move: None,
            move_history: Vec::new(),
        }
    }

    /// The piece on a square, or `None` for an empty square or an
    /// out-of-bounds location.
    pub fn piece_at(&self, x: BoardLocation) -> Option<PieceRecord> {
        if !location_in_bounds(x) {
            return None;
        }
        self.grid[x.0 as usize][x.1 as usize]
    }

    /// Overwrites a cell. The location must be on the board.
    pub fn set_piece(&mut self, x: BoardLocation, piece: Option<PieceRecord>) {
        self.grid[x.0 as usize][x.1 as usize] = piece;
    }

    /// Cached location of this side's king.
    pub fn king_location(&self, color: PieceColor) -> BoardLocation {
        match color {
            PieceColor::White => self.white_king_location,
            PieceColor::Black => self.black_king_location,
        }
    }

    /// Updates the cached king location after a king relocation.
    pub fn set_king_location(&mut self, color: PieceColor, x: BoardLocation) {
        match color {
            PieceColor::White => self.white_king_location = x,
            PieceColor::Black => self.black_king_location = x,
        }
    }

    /// Read-only view of the ordered `(start, end)` notation pairs applied
    /// so far, for external replay or export.
    pub fn move_history(&self) -> &[(String, String)] {
        &self.move_history
    }
}
