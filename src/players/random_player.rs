//! Uniform random automated player.
//!
//! Selects uniformly from the pieces that have at least one legal move, then
//! from that piece's legal destinations. Primarily used for diagnostics,
//! integration testing, and low-strength gameplay; it satisfies the same
//! capability as the console player and drops into the controller unchanged.

use rand::prelude::IndexedRandom;

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_location::BoardLocation;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_generator::generate_legal_moves_for_piece;
use crate::players::player_trait::Player;

pub struct RandomPlayer {
    name: String,
}

impl RandomPlayer {
    pub fn new(name: &str) -> Self {
        RandomPlayer {
            name: name.to_owned(),
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_origin(
        &mut self,
        board: &Board,
        color: Color,
    ) -> Result<BoardLocation, ChessErrors> {
        let mut movable_origins = Vec::new();
        for (origin, _) in board.pieces_of_color(color) {
            if !generate_legal_moves_for_piece(board, origin)?.is_empty() {
                movable_origins.push(origin);
            }
        }

        let mut rng = rand::rng();
        movable_origins
            .as_slice()
            .choose(&mut rng)
            .copied()
            .ok_or(ChessErrors::OriginReselected)
    }

    fn choose_destination(
        &mut self,
        board: &Board,
        _color: Color,
        origin: BoardLocation,
    ) -> Result<BoardLocation, ChessErrors> {
        let legal_moves = generate_legal_moves_for_piece(board, origin)?;
        let mut rng = rand::rng();
        legal_moves
            .as_slice()
            .choose(&mut rng)
            .copied()
            .ok_or(ChessErrors::OriginReselected)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, PieceRecord};

    fn location(row: i8, col: i8) -> BoardLocation {
        BoardLocation::from_row_col(row, col).unwrap()
    }

    #[test]
    fn picks_the_only_available_move() -> Result<(), ChessErrors> {
        // A lone cornered king with a single safe square.
        let mut board = Board::new_empty();
        board.add_piece_record_no_rule_checking(
            PieceRecord::new(PieceKind::King, Color::Light),
            location(7, 0),
        );
        board.add_piece_record_no_rule_checking(
            PieceRecord::new(PieceKind::Rook, Color::Dark),
            location(6, 7),
        );
        board.add_piece_record_no_rule_checking(
            PieceRecord::new(PieceKind::King, Color::Dark),
            location(0, 7),
        );

        let mut dut = RandomPlayer::new("random");
        let origin = dut.choose_origin(&board, Color::Light)?;
        assert_eq!(origin, location(7, 0));
        // The rook covers all of row 6, leaving only the adjacent square on
        // the home row.
        let destination = dut.choose_destination(&board, Color::Light, origin)?;
        assert_eq!(destination, location(7, 1));
        Ok(())
    }

    #[test]
    fn selections_are_always_legal() -> Result<(), ChessErrors> {
        let board = Board::new_game();
        let mut dut = RandomPlayer::new("random");
        for _ in 0..20 {
            let origin = dut.choose_origin(&board, Color::Dark)?;
            let destination = dut.choose_destination(&board, Color::Dark, origin)?;
            assert!(generate_legal_moves_for_piece(&board, origin)?.contains(&destination));
        }
        Ok(())
    }
}
