//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the console front end, tests, and
//! diagnostics. The only board surface it reads is `view_piece_at`.

use crate::game_state::board::Board;
use crate::game_state::board_location::{BoardLocation, BOARD_DIMENSION};
use crate::game_state::chess_types::{Color, PieceKind, PieceRecord};

/// Render the board to a Unicode string for terminal output.
///
/// Row 0 (rank 8) is drawn at the top, matching the dark side's home rank.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..BOARD_DIMENSION {
        let rank_char = char::from(b'0' + (8 - row) as u8);
        out.push(rank_char);
        out.push(' ');

        for col in 0..BOARD_DIMENSION {
            let location = BoardLocation::from_row_col(row, col)
                .expect("render coordinates are always on the board");
            match *board.view_piece_at(location) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < BOARD_DIMENSION - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: PieceRecord) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
