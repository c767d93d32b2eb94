/// Represents the side a chess piece belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceColor {
    /// The white side, which moves first.
    White,
    /// The black side.
    Black,
}

impl PieceColor {
    /// The opposing side.
    pub fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row delta of a single pawn step for this side.
    ///
    /// White pawns move toward row 0, Black pawns toward row 7.
    pub fn pawn_direction(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// Row on which this side's pawns start, from which the double step is
    /// allowed.
    pub fn pawn_start_row(self) -> i8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }
}
