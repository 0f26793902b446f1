//! Data-driven movement descriptors.
//!
//! Each piece kind maps to an ordered set of `(d_row, d_col)` unit vectors
//! and a step limit: one step for the leaping kinds (knight, king), the full
//! board extent for the sliding kinds (bishop, rook, queen). Pawns do not
//! appear in the shared table because their rules split in two: a
//! color-signed quiet-advance vector that is only playable onto empty
//! squares, and two color-signed capture diagonals that are only playable
//! onto enemy-occupied squares. The generator selects between the two by
//! destination occupancy.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, PieceKind};

/// Ordered direction vectors plus the number of steps to probe along each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementDescriptor {
    pub vectors: &'static [(i8, i8)],
    pub step_limit: u8,
}

/// Sliders may travel up to the board extent along one vector.
pub const SLIDER_STEP_LIMIT: u8 = 7;
/// Leapers probe each vector exactly once.
pub const SINGLE_STEP_LIMIT: u8 = 1;

const STRAIGHT_VECTORS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL_VECTORS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROYAL_VECTORS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
const KNIGHT_VECTORS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Looks up the shared movement descriptor for a non-pawn kind.
///
/// # Returns
///
/// * `Err(GeneratingWrongMovementForPieceType)` for `Pawn`, whose dual
///   descriptors live in the dedicated pawn lookups below.
pub fn movement_descriptor(kind: PieceKind) -> Result<MovementDescriptor, ChessErrors> {
    match kind {
        PieceKind::Knight => Ok(MovementDescriptor {
            vectors: &KNIGHT_VECTORS,
            step_limit: SINGLE_STEP_LIMIT,
        }),
        PieceKind::Bishop => Ok(MovementDescriptor {
            vectors: &DIAGONAL_VECTORS,
            step_limit: SLIDER_STEP_LIMIT,
        }),
        PieceKind::Rook => Ok(MovementDescriptor {
            vectors: &STRAIGHT_VECTORS,
            step_limit: SLIDER_STEP_LIMIT,
        }),
        PieceKind::Queen => Ok(MovementDescriptor {
            vectors: &ROYAL_VECTORS,
            step_limit: SLIDER_STEP_LIMIT,
        }),
        PieceKind::King => Ok(MovementDescriptor {
            vectors: &ROYAL_VECTORS,
            step_limit: SINGLE_STEP_LIMIT,
        }),
        PieceKind::Pawn => Err(ChessErrors::GeneratingWrongMovementForPieceType(kind)),
    }
}

/// Row direction a pawn of `color` advances in. Dark pawns start on row 1
/// and advance toward higher rows; light pawns start on row 6 and advance
/// toward lower rows.
#[inline]
pub const fn pawn_advance_direction(color: Color) -> i8 {
    match color {
        Color::Dark => 1,
        Color::Light => -1,
    }
}

/// The pawn's quiet-advance vector. Only playable onto empty squares.
#[inline]
pub const fn pawn_advance_vector(color: Color) -> (i8, i8) {
    (pawn_advance_direction(color), 0)
}

/// The pawn's capture diagonals. Only playable onto enemy-occupied squares,
/// never onto empty ones.
#[inline]
pub const fn pawn_capture_vectors(color: Color) -> [(i8, i8); 2] {
    let d_row = pawn_advance_direction(color);
    [(d_row, -1), (d_row, 1)]
}
