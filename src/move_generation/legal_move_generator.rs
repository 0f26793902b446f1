//! Legal move filtering and terminal-state detection.
//!
//! A pseudo-legal candidate is legal iff applying it on a duplicate board
//! leaves the mover's own king out of check. Each candidate gets its own
//! duplicate, which is discarded after the probe, so evaluation never
//! mutates the live board and repeated evaluation yields identical results.
//! This per-candidate simulation is the dominant cost of the engine; it is
//! bounded by a few dozen candidates times one attack scan each.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_location::BoardLocation;
use crate::game_state::chess_types::{Color, GameStatus};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::pseudo_legal::generate_pseudo_legal_moves;

/// Generates the self-check-safe destinations for the piece on `origin`.
///
/// # Returns
///
/// * `Err(EmptyOriginSquare)` if `origin` holds no piece.
/// * `Err(BoardDoesNotContainAKing)` if the mover's side has no king.
pub fn generate_legal_moves_for_piece(
    board: &Board,
    origin: BoardLocation,
) -> Result<Vec<BoardLocation>, ChessErrors> {
    let piece = board
        .view_piece_at(origin)
        .ok_or(ChessErrors::EmptyOriginSquare(origin))?;
    let mut legal = Vec::new();
    for destination in generate_pseudo_legal_moves(board, origin)? {
        let mut hypothetical = board.duplicate();
        hypothetical.apply_move(origin, destination)?;
        if !is_king_in_check(&hypothetical, piece.color)? {
            legal.push(destination);
        }
    }
    Ok(legal)
}

/// Every legal `(origin, destination)` pair available to `color`.
pub fn generate_all_legal_moves(
    board: &Board,
    color: Color,
) -> Result<Vec<(BoardLocation, BoardLocation)>, ChessErrors> {
    let mut all = Vec::new();
    for (origin, _) in board.pieces_of_color(color) {
        for destination in generate_legal_moves_for_piece(board, origin)? {
            all.push((origin, destination));
        }
    }
    Ok(all)
}

/// Whether `color` is in check with no legal reply.
pub fn is_checkmate(board: &Board, color: Color) -> Result<bool, ChessErrors> {
    if !is_king_in_check(board, color)? {
        return Ok(false);
    }
    Ok(generate_all_legal_moves(board, color)?.is_empty())
}

/// Combined check/checkmate probe for `color`.
///
/// A side with no legal moves that is not in check reports `InProgress`;
/// stalemate resolution is out of scope for this engine.
pub fn game_status(board: &Board, color: Color) -> Result<GameStatus, ChessErrors> {
    if !is_king_in_check(board, color)? {
        return Ok(GameStatus::InProgress);
    }
    if generate_all_legal_moves(board, color)?.is_empty() {
        Ok(GameStatus::Checkmate(color))
    } else {
        Ok(GameStatus::Check(color))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, PieceRecord};

    fn location(row: i8, col: i8) -> BoardLocation {
        BoardLocation::from_row_col(row, col).unwrap()
    }

    fn place(board: &mut Board, kind: PieceKind, color: Color, row: i8, col: i8) {
        board.add_piece_record_no_rule_checking(PieceRecord::new(kind, color), location(row, col));
    }

    #[test]
    fn opening_pawn_push_is_legal_but_triple_step_is_not() -> Result<(), ChessErrors> {
        let dut = Board::new_game();
        let moves = generate_legal_moves_for_piece(&dut, location(6, 4))?;
        assert!(moves.contains(&location(4, 4)));
        assert!(!moves.contains(&location(3, 4)));
        Ok(())
    }

    #[test]
    fn a_pinned_piece_has_no_legal_moves() -> Result<(), ChessErrors> {
        let mut dut = Board::new_empty();
        place(&mut dut, PieceKind::King, Color::Light, 7, 4);
        place(&mut dut, PieceKind::Bishop, Color::Light, 5, 4);
        place(&mut dut, PieceKind::Rook, Color::Dark, 0, 4);
        place(&mut dut, PieceKind::King, Color::Dark, 0, 0);

        // The bishop moves diagonally, so every move exposes the king.
        assert!(generate_legal_moves_for_piece(&dut, location(5, 4))?.is_empty());
        // The pin does not paralyze the rest of the side.
        assert!(!generate_all_legal_moves(&dut, Color::Light)?.is_empty());
        Ok(())
    }

    #[test]
    fn legal_moves_never_leave_the_mover_in_check() -> Result<(), ChessErrors> {
        let mut dut = Board::new_empty();
        place(&mut dut, PieceKind::King, Color::Light, 7, 4);
        place(&mut dut, PieceKind::Rook, Color::Light, 6, 3);
        place(&mut dut, PieceKind::Queen, Color::Dark, 4, 4);
        place(&mut dut, PieceKind::King, Color::Dark, 0, 0);

        for (origin, destination) in generate_all_legal_moves(&dut, Color::Light)? {
            let mut probe = dut.duplicate();
            probe.apply_move(origin, destination)?;
            assert!(!is_king_in_check(&probe, Color::Light)?);
        }
        Ok(())
    }

    #[test]
    fn evaluation_is_idempotent_and_leaves_the_board_unchanged() -> Result<(), ChessErrors> {
        let dut = Board::new_game();
        let before = dut.clone();
        let first = generate_legal_moves_for_piece(&dut, location(7, 1))?;
        let second = generate_legal_moves_for_piece(&dut, location(7, 1))?;
        assert_eq!(first, second);
        assert_eq!(dut, before);
        Ok(())
    }

    #[test]
    fn back_rank_mate_is_detected() -> Result<(), ChessErrors> {
        let mut dut = Board::new_empty();
        place(&mut dut, PieceKind::King, Color::Light, 7, 0);
        place(&mut dut, PieceKind::Rook, Color::Dark, 7, 7);
        place(&mut dut, PieceKind::Rook, Color::Dark, 6, 7);
        place(&mut dut, PieceKind::King, Color::Dark, 0, 4);

        assert!(is_checkmate(&dut, Color::Light)?);
        assert_eq!(
            game_status(&dut, Color::Light)?,
            GameStatus::Checkmate(Color::Light)
        );
        Ok(())
    }

    #[test]
    fn check_with_an_escape_is_not_mate() -> Result<(), ChessErrors> {
        let mut dut = Board::new_empty();
        place(&mut dut, PieceKind::King, Color::Light, 7, 0);
        place(&mut dut, PieceKind::Rook, Color::Dark, 7, 7);
        place(&mut dut, PieceKind::King, Color::Dark, 0, 4);

        assert!(is_king_in_check(&dut, Color::Light)?);
        assert!(!is_checkmate(&dut, Color::Light)?);
        assert_eq!(
            game_status(&dut, Color::Light)?,
            GameStatus::Check(Color::Light)
        );
        Ok(())
    }

    #[test]
    fn quiet_position_reports_in_progress() -> Result<(), ChessErrors> {
        let dut = Board::new_game();
        assert_eq!(game_status(&dut, Color::Light)?, GameStatus::InProgress);
        assert_eq!(game_status(&dut, Color::Dark)?, GameStatus::InProgress);
        Ok(())
    }
}
