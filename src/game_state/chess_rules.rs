//! Fixed data for the standard game setup.

use crate::game_state::chess_types::PieceKind;

/// Back-rank layout by column, identical for both home rows. The king sits
/// on column 3 and the queen on column 4.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const DARK_BACK_ROW: i8 = 0;
pub const DARK_PAWN_ROW: i8 = 1;
pub const LIGHT_PAWN_ROW: i8 = 6;
pub const LIGHT_BACK_ROW: i8 = 7;
