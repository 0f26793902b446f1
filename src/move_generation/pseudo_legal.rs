//! Pseudo-legal move generation by movement-vector walking.
//!
//! Walks each descriptor vector step by step up to the step limit or the
//! board edge, stopping a ray at the first occupied square: enemy occupants
//! are included as captures, friendly occupants are excluded, and no square
//! beyond a blocker is ever reachable. Results ignore whether the mover's
//! own king would be exposed; the legal layer filters for that.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_location::BoardLocation;
use crate::game_state::chess_types::{PieceKind, PieceRecord};
use crate::moves::move_descriptions::{
    movement_descriptor, pawn_advance_vector, pawn_capture_vectors,
};

/// Generates every pseudo-legal destination for the piece on `origin`.
///
/// # Returns
///
/// * `Err(EmptyOriginSquare)` if `origin` holds no piece.
pub fn generate_pseudo_legal_moves(
    board: &Board,
    origin: BoardLocation,
) -> Result<Vec<BoardLocation>, ChessErrors> {
    let piece = board
        .view_piece_at(origin)
        .ok_or(ChessErrors::EmptyOriginSquare(origin))?;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, origin, piece),
        _ => generate_vector_moves(board, origin, piece),
    }
}

fn generate_vector_moves(
    board: &Board,
    origin: BoardLocation,
    piece: PieceRecord,
) -> Result<Vec<BoardLocation>, ChessErrors> {
    let descriptor = movement_descriptor(piece.kind)?;
    let mut destinations = Vec::new();
    for &(d_row, d_col) in descriptor.vectors {
        let mut current = origin;
        for _ in 0..descriptor.step_limit {
            let Ok(next) = current.generate_moved_location_checked(d_row, d_col) else {
                break;
            };
            match board.color_at(next) {
                None => {
                    destinations.push(next);
                    current = next;
                }
                Some(occupant) if occupant != piece.color => {
                    destinations.push(next);
                    break;
                }
                Some(_) => break,
            }
        }
    }
    Ok(destinations)
}

/// Pawn generation keeps the quiet-advance and capture descriptors strictly
/// apart: an occupant of either color blocks the advance outright, and an
/// empty diagonal is never a destination.
fn generate_pawn_moves(
    board: &Board,
    origin: BoardLocation,
    piece: PieceRecord,
) -> Result<Vec<BoardLocation>, ChessErrors> {
    let mut destinations = Vec::new();

    let (d_row, _) = pawn_advance_vector(piece.color);
    if let Ok(single) = origin.generate_moved_location_checked(d_row, 0) {
        if !board.is_occupied(single) {
            destinations.push(single);
            // Double step only off the starting square, through two empty squares.
            if !piece.has_moved {
                if let Ok(double) = single.generate_moved_location_checked(d_row, 0) {
                    if !board.is_occupied(double) {
                        destinations.push(double);
                    }
                }
            }
        }
    }

    for (d_row, d_col) in pawn_capture_vectors(piece.color) {
        if let Ok(target) = origin.generate_moved_location_checked(d_row, d_col) {
            if matches!(board.color_at(target), Some(occupant) if occupant != piece.color) {
                destinations.push(target);
            }
        }
    }

    Ok(destinations)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game_state::chess_types::Color;

    fn location(row: i8, col: i8) -> BoardLocation {
        BoardLocation::from_row_col(row, col).unwrap()
    }

    #[test]
    fn empty_origin_is_a_contract_violation() {
        let dut = Board::new_empty();
        assert_eq!(
            generate_pseudo_legal_moves(&dut, location(4, 4)),
            Err(ChessErrors::EmptyOriginSquare(location(4, 4)))
        );
    }

    #[test]
    fn knight_on_its_start_square_has_two_moves() -> Result<(), ChessErrors> {
        let dut = Board::new_game();
        let moves = generate_pseudo_legal_moves(&dut, location(7, 1))?;
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&location(5, 0)));
        assert!(moves.contains(&location(5, 2)));
        Ok(())
    }

    #[test]
    fn slider_rays_stop_at_the_first_occupant() -> Result<(), ChessErrors> {
        let mut dut = Board::new_empty();
        dut.add_piece_record_no_rule_checking(
            PieceRecord::new(PieceKind::Rook, Color::Light),
            location(4, 0),
        );
        dut.add_piece_record_no_rule_checking(
            PieceRecord::new(PieceKind::Pawn, Color::Dark),
            location(4, 3),
        );
        dut.add_piece_record_no_rule_checking(
            PieceRecord::new(PieceKind::Pawn, Color::Light),
            location(6, 0),
        );

        let moves = generate_pseudo_legal_moves(&dut, location(4, 0))?;

        // Enemy blocker is included, nothing beyond it.
        assert!(moves.contains(&location(4, 1)));
        assert!(moves.contains(&location(4, 2)));
        assert!(moves.contains(&location(4, 3)));
        assert!(!moves.contains(&location(4, 4)));
        // Friendly blocker is excluded, nothing beyond it.
        assert!(moves.contains(&location(5, 0)));
        assert!(!moves.contains(&location(6, 0)));
        assert!(!moves.contains(&location(7, 0)));
        Ok(())
    }

    #[test]
    fn pawn_advances_are_blocked_by_any_occupant() -> Result<(), ChessErrors> {
        let mut dut = Board::new_empty();
        dut.add_piece_record_no_rule_checking(
            PieceRecord::new(PieceKind::Pawn, Color::Light),
            location(6, 4),
        );
        dut.add_piece_record_no_rule_checking(
            PieceRecord::new(PieceKind::Knight, Color::Dark),
            location(5, 4),
        );

        let moves = generate_pseudo_legal_moves(&dut, location(6, 4))?;
        // A blocked pawn is not redirected to capture forward.
        assert!(moves.is_empty());
        Ok(())
    }

    #[test]
    fn pawn_double_step_requires_first_move_and_two_empty_squares() -> Result<(), ChessErrors> {
        let dut = Board::new_game();
        let moves = generate_pseudo_legal_moves(&dut, location(6, 4))?;
        assert!(moves.contains(&location(5, 4)));
        assert!(moves.contains(&location(4, 4)));
        assert!(!moves.contains(&location(3, 4)));

        let mut moved = Board::new_empty();
        let mut pawn = PieceRecord::new(PieceKind::Pawn, Color::Light);
        pawn.has_moved = true;
        moved.add_piece_record_no_rule_checking(pawn, location(5, 4));
        let moves = generate_pseudo_legal_moves(&moved, location(5, 4))?;
        assert_eq!(moves, vec![location(4, 4)]);
        Ok(())
    }

    #[test]
    fn pawn_diagonals_require_an_enemy_occupant() -> Result<(), ChessErrors> {
        let mut dut = Board::new_empty();
        dut.add_piece_record_no_rule_checking(
            PieceRecord::new(PieceKind::Pawn, Color::Light),
            location(4, 3),
        );
        dut.add_piece_record_no_rule_checking(
            PieceRecord::new(PieceKind::Pawn, Color::Dark),
            location(3, 4),
        );
        dut.add_piece_record_no_rule_checking(
            PieceRecord::new(PieceKind::Pawn, Color::Light),
            location(3, 2),
        );

        let moves = generate_pseudo_legal_moves(&dut, location(4, 3))?;
        // Enemy diagonal is a capture; friendly and empty diagonals are not.
        assert!(moves.contains(&location(3, 4)));
        assert!(!moves.contains(&location(3, 2)));
        assert!(moves.contains(&location(3, 3)));
        Ok(())
    }

    #[test]
    fn no_destination_is_ever_off_the_grid() -> Result<(), ChessErrors> {
        // Corner placements exercise every edge of the walk.
        let kinds = [
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ];
        for kind in kinds {
            for corner in [location(0, 0), location(0, 7), location(7, 0), location(7, 7)] {
                let mut dut = Board::new_empty();
                dut.add_piece_record_no_rule_checking(
                    PieceRecord::new(kind, Color::Light),
                    corner,
                );
                for destination in generate_pseudo_legal_moves(&dut, corner)? {
                    assert!((0..8).contains(&destination.row()));
                    assert!((0..8).contains(&destination.col()));
                }
            }
        }
        Ok(())
    }
}
