//! Validated board coordinates.
//!
//! `BoardLocation` is the only coordinate type accepted by the board and the
//! move generators. Values are checked at construction, so the rest of the
//! engine can index the grid without re-validating bounds. Out-of-bounds
//! coordinates are never stored, only rejected.

use crate::chess_errors::ChessErrors;

/// Width and height of the board.
pub const BOARD_DIMENSION: i8 = 8;

/// A (row, column) coordinate on the 8x8 grid.
///
/// Row 0 is the dark home rank (rank 8 in algebraic terms) and row 7 is the
/// light home rank (rank 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLocation {
    row: i8,
    col: i8,
}

impl BoardLocation {
    /// Builds a location from row and column indices, rejecting anything
    /// outside `0..=7`.
    pub fn from_row_col(row: i8, col: i8) -> Result<Self, ChessErrors> {
        if (row < 0) | (row >= BOARD_DIMENSION) | (col < 0) | (col >= BOARD_DIMENSION) {
            Err(ChessErrors::InvalidRowOrColumn((row, col)))
        } else {
            Ok(BoardLocation { row, col })
        }
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Offsets this location by `(d_row, d_col)`.
    ///
    /// # Returns
    ///
    /// * `Result<BoardLocation, ChessErrors>` - the new board location if
    ///   within bounds, otherwise an error.
    pub fn generate_moved_location_checked(
        self,
        d_row: i8,
        d_col: i8,
    ) -> Result<Self, ChessErrors> {
        let row = self.row + d_row;
        let col = self.col + d_col;
        if (row < 0) | (row >= BOARD_DIMENSION) | (col < 0) | (col >= BOARD_DIMENSION) {
            Err(ChessErrors::TriedToMoveOutOfBounds((self, d_row, d_col)))
        } else {
            Ok(BoardLocation { row, col })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_out_of_range_rows_and_columns() {
        assert!(BoardLocation::from_row_col(0, 0).is_ok());
        assert!(BoardLocation::from_row_col(7, 7).is_ok());
        assert!(BoardLocation::from_row_col(-1, 0).is_err());
        assert!(BoardLocation::from_row_col(0, 8).is_err());
        assert!(BoardLocation::from_row_col(8, 8).is_err());
    }

    #[test]
    fn checked_offsets_stay_on_the_board() -> Result<(), ChessErrors> {
        let dut = BoardLocation::from_row_col(6, 4)?;
        let moved = dut.generate_moved_location_checked(-2, 0)?;
        assert_eq!(moved.row(), 4);
        assert_eq!(moved.col(), 4);

        let edge = BoardLocation::from_row_col(0, 0)?;
        assert!(edge.generate_moved_location_checked(-1, 0).is_err());
        assert!(edge.generate_moved_location_checked(0, -1).is_err());
        assert!(edge.generate_moved_location_checked(7, 7).is_ok());
        Ok(())
    }
}
