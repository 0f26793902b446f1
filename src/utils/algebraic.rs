//! Square conversions for long algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! board locations, reused by the console player, the renderer, and game
//! records. Rank 8 maps to internal row 0 (the dark home rank) and rank 1
//! maps to row 7 (the light home rank).

use crate::chess_errors::ChessErrors;
use crate::game_state::board_location::BoardLocation;

/// Convert long algebraic notation (for example: "e4") to a board location.
#[inline]
pub fn long_algebraic_to_location(square: &str) -> Result<BoardLocation, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    let col = (file - b'a') as i8;
    let row = 8 - (rank - b'0') as i8;
    BoardLocation::from_row_col(row, col)
}

/// Convert a board location to long algebraic notation (for example: "e4").
#[inline]
pub fn location_to_long_algebraic(location: BoardLocation) -> String {
    let file_char = char::from(b'a' + location.col() as u8);
    let rank_char = char::from(b'0' + (8 - location.row()) as u8);
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn corners_and_home_squares_convert_both_ways() -> Result<(), ChessErrors> {
        assert_eq!(
            long_algebraic_to_location("a8")?,
            BoardLocation::from_row_col(0, 0)?
        );
        assert_eq!(
            long_algebraic_to_location("h1")?,
            BoardLocation::from_row_col(7, 7)?
        );
        assert_eq!(
            long_algebraic_to_location("e2")?,
            BoardLocation::from_row_col(6, 4)?
        );

        assert_eq!(
            location_to_long_algebraic(BoardLocation::from_row_col(0, 0)?),
            "a8"
        );
        assert_eq!(
            location_to_long_algebraic(BoardLocation::from_row_col(6, 4)?),
            "e2"
        );
        assert_eq!(
            location_to_long_algebraic(BoardLocation::from_row_col(4, 4)?),
            "e4"
        );
        Ok(())
    }

    #[test]
    fn malformed_text_is_rejected_by_the_translator() {
        assert_eq!(
            long_algebraic_to_location("i4"),
            Err(ChessErrors::InvalidAlgebraicChar('i'))
        );
        assert_eq!(
            long_algebraic_to_location("e9"),
            Err(ChessErrors::InvalidAlgebraicChar('9'))
        );
        assert_eq!(
            long_algebraic_to_location(""),
            Err(ChessErrors::InvalidAlgebraicString(String::new()))
        );
        assert_eq!(
            long_algebraic_to_location("e44"),
            Err(ChessErrors::InvalidAlgebraicString("e44".to_owned()))
        );
    }
}
