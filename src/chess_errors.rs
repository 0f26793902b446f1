//! Errors used throughout the chess rules engine.
//!
//! This module defines the canonical error type returned by game logic,
//! parsing utilities, move generation and the turn controller. The enum
//! `ChessErrors` is used as the single error type across the crate to
//! simplify propagation and matching.
//!
//! Usage guidelines:
//! - Functions in the engine should return `Result<..., ChessErrors>` for
//!   recoverable or expected failure modes (invalid input, illegal
//!   selections, etc).
//! - Parsing and turn-validation variants are recoverable by reprompting the
//!   offending player; they never corrupt board state.
//! - Contract-violation variants (`EmptyOriginSquare`,
//!   `BoardDoesNotContainAKing`) indicate a bug in the caller rather than a
//!   reachable game situation and are not intended to be recovered from by
//!   normal library users.

use std::fmt;

use crate::game_state::board_location::BoardLocation;
use crate::game_state::chess_types::{Color, PieceKind};

/// Unified error type for the chess rules engine.
///
/// Each variant corresponds to a specific, identifiable failure mode that can
/// occur while manipulating the game state, parsing algebraic coordinates, or
/// validating player selections. Variants include contextual payloads where
/// useful so that callers can log or display precise diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Generic failure used in unit tests when no more specific variant
    /// applies.
    FailedTest,

    /// Attempted to offset a location by the delta `(d_row, d_col)` which
    /// would place it off the board.
    ///
    /// Payload: (origin_location, d_row, d_col)
    TriedToMoveOutOfBounds((BoardLocation, i8, i8)),

    /// Row or column indices outside `0..=7` were provided.
    ///
    /// Payload: (row, col) as given by the caller.
    InvalidRowOrColumn((i8, i8)),

    /// A single character used during algebraic parsing was invalid.
    ///
    /// Payload: the offending character (for example a file outside 'a'..'h'
    /// or a rank outside '1'..'8').
    InvalidAlgebraicChar(char),

    /// An algebraic string (multi-character) failed to parse as a square.
    ///
    /// Payload: the original string that could not be interpreted.
    InvalidAlgebraicString(String),

    /// The selected origin square is empty or holds a piece of the wrong
    /// color for the side to move.
    ///
    /// Payload: the rejected origin square.
    IllegalOriginSquare(BoardLocation),

    /// The selected destination is not in the legal-move set of the piece on
    /// the chosen origin square.
    ///
    /// Payload: the rejected destination square.
    IllegalDestinationSquare(BoardLocation),

    /// The player abandoned destination selection to pick a new origin.
    ///
    /// This is a control-flow signal rather than a failure; the controller
    /// falls back to origin selection when it sees this variant.
    OriginReselected,

    /// Attempted to move a piece from a square that holds none.
    ///
    /// Payload: the empty square. The board is left untouched when this is
    /// raised.
    EmptyOriginSquare(BoardLocation),

    /// A movement-descriptor lookup was invoked for a piece kind the shared
    /// table does not cover (pawns use dedicated dual descriptors).
    ///
    /// Payload: the offending piece kind.
    GeneratingWrongMovementForPieceType(PieceKind),

    /// The board does not contain a king for one side.
    ///
    /// This represents a corrupted or hand-built invalid game state; callers
    /// should treat this as a logic error in game construction, not as a
    /// recoverable game result.
    BoardDoesNotContainAKing(Color),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::FailedTest => write!(f, "test assertion failed"),
            ChessErrors::TriedToMoveOutOfBounds((x, d_row, d_col)) => write!(
                f,
                "moving from row {} column {} by ({}, {}) leaves the board",
                x.row(),
                x.col(),
                d_row,
                d_col
            ),
            ChessErrors::InvalidRowOrColumn((row, col)) => {
                write!(f, "row {row} column {col} is not on the board")
            }
            ChessErrors::InvalidAlgebraicChar(c) => {
                write!(f, "invalid algebraic character: {c}")
            }
            ChessErrors::InvalidAlgebraicString(s) => {
                write!(f, "invalid algebraic square: {s}")
            }
            ChessErrors::IllegalOriginSquare(x) => write!(
                f,
                "no piece of yours on row {} column {}",
                x.row(),
                x.col()
            ),
            ChessErrors::IllegalDestinationSquare(x) => write!(
                f,
                "row {} column {} is not a legal destination",
                x.row(),
                x.col()
            ),
            ChessErrors::OriginReselected => write!(f, "origin selection restarted"),
            ChessErrors::EmptyOriginSquare(x) => write!(
                f,
                "no piece to move on row {} column {}",
                x.row(),
                x.col()
            ),
            ChessErrors::GeneratingWrongMovementForPieceType(kind) => {
                write!(f, "no shared movement descriptor for {kind:?}")
            }
            ChessErrors::BoardDoesNotContainAKing(color) => {
                write!(f, "board does not contain a {color} king")
            }
        }
    }
}
