use crate::chess_errors::ChessErrors;

/// Zero-based `(row, col)` grid coordinates.
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's back rank
/// (rank 1), matching the standard board orientation seen from White.
pub type BoardLocation = (i8, i8);

/// Returns true when the location lies on the 8×8 grid.
pub fn location_in_bounds(x: BoardLocation) -> bool {
    (0..8).contains(&x.0) && (0..8).contains(&x.1)
}

/// Offsets a board location by a row and column delta.
///
/// # Arguments
///
/// * `x` - The current board location.
/// * `d_row` - The row offset.
/// * `d_col` - The column offset.
///
/// # Returns
///
/// * `Result<BoardLocation, ChessErrors>` - The new location if it stays
///   within bounds, otherwise an error.
pub fn offset_location(
    x: BoardLocation,
    d_row: i8,
    d_col: i8,
) -> Result<BoardLocation, ChessErrors> {
    let y: BoardLocation = (x.0 + d_row, x.1 + d_col);
    if location_in_bounds(y) {
        Ok(y)
    } else {
        Err(ChessErrors::TriedToMoveOutOfBounds(x, d_row, d_col))
    }
}
