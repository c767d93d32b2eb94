use crate::piece_class::PieceClass;
use crate::piece_color::PieceColor;

/// A piece occupying a board cell.
///
/// The color and class are fixed at creation (promotion replaces the whole
/// record with a queen record). `has_moved` starts false and is set when the
/// piece first relocates; it exists only to gate castling eligibility.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    pub color: PieceColor,
    pub class: PieceClass,
    pub has_moved: bool,
}

impl PieceRecord {
    /// A freshly placed piece that has not moved yet.
    pub fn new(color: PieceColor, class: PieceClass) -> Self {
        PieceRecord {
            color,
            class,
            has_moved: false,
        }
    }
}
