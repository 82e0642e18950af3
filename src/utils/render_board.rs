//! Terminal-oriented Unicode board renderer.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square, BOARD_SIZE};

/// Render the board with rank 8 at the top, as it is stored.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..BOARD_SIZE {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_SIZE {
            let piece = Square::new(row, col).ok().and_then(|sq| board.piece_at(sq));
            match piece {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::King) => '♔',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Dark, PieceKind::King) => '♚',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Pawn) => '♟',
    }
}
