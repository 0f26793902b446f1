//! Attack-set and check probes.
//!
//! The attack set of a color is the union of pseudo-legal destinations of
//! every piece of that color. It is deliberately not filtered for self-check
//! safety: whether an attacker is itself pinned has no bearing on the squares
//! it attacks, and filtering here would recurse without bound.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_location::BoardLocation;
use crate::game_state::chess_types::Color;
use crate::move_generation::pseudo_legal::generate_pseudo_legal_moves;

/// Every square some piece of `color` could move to, pseudo-legally.
///
/// Pawn quiet advances are members of the result but can never coincide with
/// an occupied square, so the set is safe to use for check detection.
pub fn attack_set(board: &Board, color: Color) -> Result<Vec<BoardLocation>, ChessErrors> {
    let mut attacked = Vec::new();
    for (location, _) in board.pieces_of_color(color) {
        attacked.extend(generate_pseudo_legal_moves(board, location)?);
    }
    Ok(attacked)
}

/// Whether any piece of `attacker_color` pseudo-legally reaches `target`.
pub fn is_square_attacked(
    board: &Board,
    target: BoardLocation,
    attacker_color: Color,
) -> Result<bool, ChessErrors> {
    for (location, _) in board.pieces_of_color(attacker_color) {
        if generate_pseudo_legal_moves(board, location)?.contains(&target) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Whether the king of `color` stands on a square attacked by the opponent.
///
/// # Returns
///
/// * `Err(BoardDoesNotContainAKing)` if the king is absent, which indicates
///   a corrupted or hand-built invalid position rather than a game result.
pub fn is_king_in_check(board: &Board, color: Color) -> Result<bool, ChessErrors> {
    let king = board
        .find_king(color)
        .ok_or(ChessErrors::BoardDoesNotContainAKing(color))?;
    is_square_attacked(board, king, color.opposite())
}
