//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! `(row, col)` representation, where rank 8 maps to row 0 (Black's back
//! rank) and rank 1 to row 7.

use crate::board_location::{location_in_bounds, BoardLocation};
use crate::chess_errors::ChessErrors;

/// Convert algebraic notation (for example: "e4") to a board location.
pub fn algebraic_to_location(square: &str) -> Result<BoardLocation, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_string()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_string()));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_string()));
    }

    let col = (file - b'a') as i8;
    let row = (b'8' - rank) as i8;
    Ok((row, col))
}

/// Convert a board location to algebraic notation (for example: "e4").
pub fn location_to_algebraic(x: BoardLocation) -> Result<String, ChessErrors> {
    if !location_in_bounds(x) {
        return Err(ChessErrors::LocationOutOfBounds(x));
    }

    let file_char = char::from(b'a' + x.1 as u8);
    let rank_char = char::from(b'8' - x.0 as u8);
    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_location, location_to_algebraic};

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_location("a8").expect("a8 should parse"), (0, 0));
        assert_eq!(algebraic_to_location("h1").expect("h1 should parse"), (7, 7));
        assert_eq!(algebraic_to_location("e2").expect("e2 should parse"), (6, 4));
        assert_eq!(location_to_algebraic((0, 0)).expect("(0,0) should convert"), "a8");
        assert_eq!(location_to_algebraic((6, 4)).expect("(6,4) should convert"), "e2");
    }

    #[test]
    fn uppercase_files_are_accepted() {
        assert_eq!(algebraic_to_location("E4").expect("E4 should parse"), (4, 4));
    }

    #[test]
    fn malformed_squares_are_rejected() {
        assert!(algebraic_to_location("").is_err());
        assert!(algebraic_to_location("e").is_err());
        assert!(algebraic_to_location("e44").is_err());
        assert!(algebraic_to_location("i4").is_err());
        assert!(algebraic_to_location("e9").is_err());
        assert!(algebraic_to_location("4e").is_err());
    }

    #[test]
    fn off_board_locations_do_not_convert() {
        assert!(location_to_algebraic((-1, 0)).is_err());
        assert!(location_to_algebraic((0, 8)).is_err());
    }
}
