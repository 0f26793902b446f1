//! 8x8 mailbox board owning at most one piece per square.
//!
//! `Board` is the single mutable model of the live game plus an append-only
//! list of captured pieces. It performs no legality checking of its own:
//! `apply_move` relocates whatever sits on the origin square and records any
//! destination occupant as captured. Legality is enforced upstream by the
//! move-generation layer before `apply_move` is invoked.
//!
//! Boards are also duplicated transiently to probe hypothetical moves. A
//! duplicate is fully independent: squares hold piece values, not references,
//! so simulated moves can never mutate the live game.

use crate::chess_errors::ChessErrors;
use crate::game_state::board_location::{BoardLocation, BOARD_DIMENSION};
use crate::game_state::chess_rules::{
    BACK_RANK_LAYOUT, DARK_BACK_ROW, DARK_PAWN_ROW, LIGHT_BACK_ROW, LIGHT_PAWN_ROW,
};
use crate::game_state::chess_types::{Color, PieceKind, PieceRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<PieceRecord>; 8]; 8],
    captured: Vec<PieceRecord>,
}

impl Board {
    /// A board with no pieces on it. Used by tests and position builders.
    pub fn new_empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            captured: Vec::new(),
        }
    }

    /// The standard game setup.
    ///
    /// Rooks on columns {0,7}, knights on {1,6}, bishops on {2,5}, the king
    /// on column 3 and the queen on column 4, with pawns filling the two
    /// middle home rows. Rows 0-1 are dark, rows 6-7 are light.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            let col = col as i8;
            board.place_new_piece(*kind, Color::Dark, DARK_BACK_ROW, col);
            board.place_new_piece(*kind, Color::Light, LIGHT_BACK_ROW, col);
        }
        for col in 0..BOARD_DIMENSION {
            board.place_new_piece(PieceKind::Pawn, Color::Dark, DARK_PAWN_ROW, col);
            board.place_new_piece(PieceKind::Pawn, Color::Light, LIGHT_PAWN_ROW, col);
        }
        board
    }

    fn place_new_piece(&mut self, kind: PieceKind, color: Color, row: i8, col: i8) {
        let location = BoardLocation::from_row_col(row, col)
            .expect("standard setup coordinates are always on the board");
        self.add_piece_record_no_rule_checking(PieceRecord::new(kind, color), location);
    }

    /// Places a piece without any rule checking, overwriting whatever was on
    /// the square. Used by the standard setup and by test position builders.
    pub fn add_piece_record_no_rule_checking(&mut self, piece: PieceRecord, x: BoardLocation) {
        self.squares[x.row() as usize][x.col() as usize] = Some(piece);
    }

    #[inline]
    pub fn view_piece_at(&self, x: BoardLocation) -> &Option<PieceRecord> {
        &self.squares[x.row() as usize][x.col() as usize]
    }

    #[inline]
    pub fn is_occupied(&self, x: BoardLocation) -> bool {
        self.view_piece_at(x).is_some()
    }

    #[inline]
    pub fn color_at(&self, x: BoardLocation) -> Option<Color> {
        self.view_piece_at(x).map(|piece| piece.color)
    }

    /// Relocates the piece on `origin` to `destination` with no legality
    /// checking, recording any destination occupant as captured and marking
    /// the moved piece as having moved.
    ///
    /// # Returns
    ///
    /// * `Err(EmptyOriginSquare)` if `origin` holds no piece; the board is
    ///   left untouched in that case.
    pub fn apply_move(
        &mut self,
        origin: BoardLocation,
        destination: BoardLocation,
    ) -> Result<(), ChessErrors> {
        let mut piece = self.squares[origin.row() as usize][origin.col() as usize]
            .take()
            .ok_or(ChessErrors::EmptyOriginSquare(origin))?;
        piece.has_moved = true;
        if let Some(victim) =
            self.squares[destination.row() as usize][destination.col() as usize].take()
        {
            self.captured.push(victim);
        }
        self.squares[destination.row() as usize][destination.col() as usize] = Some(piece);
        Ok(())
    }

    /// A fully independent copy used to probe hypothetical moves.
    ///
    /// Every occupied square holds its own piece value, so mutating the
    /// duplicate cannot leak back into this board.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Scans the grid for the king of `color`.
    ///
    /// Absence is only expected in hand-built test positions, never during a
    /// legally-progressing game.
    pub fn find_king(&self, color: Color) -> Option<BoardLocation> {
        self.occupied_locations()
            .into_iter()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(location, _)| location)
    }

    /// Every occupied square paired with a copy of its piece, scanned in
    /// row-major order.
    pub fn occupied_locations(&self) -> Vec<(BoardLocation, PieceRecord)> {
        let mut result = Vec::new();
        for row in 0..BOARD_DIMENSION {
            for col in 0..BOARD_DIMENSION {
                let location = BoardLocation::from_row_col(row, col)
                    .expect("board scan coordinates are always on the board");
                if let Some(piece) = self.view_piece_at(location) {
                    result.push((location, *piece));
                }
            }
        }
        result
    }

    /// Occupied squares restricted to one color.
    pub fn pieces_of_color(&self, color: Color) -> Vec<(BoardLocation, PieceRecord)> {
        self.occupied_locations()
            .into_iter()
            .filter(|(_, piece)| piece.color == color)
            .collect()
    }

    /// Pieces removed from play, in capture order.
    #[inline]
    pub fn captured_pieces(&self) -> &[PieceRecord] {
        &self.captured
    }
}
