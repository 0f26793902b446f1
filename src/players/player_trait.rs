//! Player abstraction consumed by the game controller.
//!
//! Defines the two coordinate-producing operations so console humans and
//! automated players can be selected at runtime behind a single trait
//! interface. Implementations may loop internally on malformed input before
//! returning; the controller judges legality, not the player.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_location::BoardLocation;
use crate::game_state::chess_types::Color;

pub trait Player {
    /// Display name used in prompts and game records.
    fn name(&self) -> &str;

    /// Produces the square of the piece this player wants to move.
    fn choose_origin(&mut self, board: &Board, color: Color)
        -> Result<BoardLocation, ChessErrors>;

    /// Produces the destination square for the piece on `origin`.
    ///
    /// Returning `Err(OriginReselected)` asks the controller to fall back to
    /// origin selection instead of treating the turn as failed.
    fn choose_destination(
        &mut self,
        board: &Board,
        color: Color,
        origin: BoardLocation,
    ) -> Result<BoardLocation, ChessErrors>;
}
