//! Parser for whitespace-separated piece tokens such as `Na6 Rb6 Bc5`.

use crate::game_state::board::Board;
use crate::game_state::chess_errors::{ChessRangerError, RangerResult};
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::utils::algebraic::algebraic_to_square;

/// Build a board from `<Letter><file><rank>` tokens. Empty input yields an
/// empty board.
pub fn parse_piece_list(text: &str) -> RangerResult<Board> {
    let mut board = Board::new_empty();
    for token in text.split_whitespace() {
        let (kind, square) = parse_piece_token(token)?;
        board.place(algebraic_to_square(square)?, Piece::from(kind))?;
    }
    Ok(board)
}

fn parse_piece_token(token: &str) -> RangerResult<(PieceKind, &str)> {
    let mut chars = token.chars();
    let letter = chars
        .next()
        .ok_or_else(|| ChessRangerError::InvalidPieceToken(token.to_owned()))?;
    let square = chars.as_str();
    if square.is_empty() {
        return Err(ChessRangerError::InvalidPieceToken(token.to_owned()));
    }
    Ok((PieceKind::from_letter(letter)?, square))
}

/// Inverse of [`parse_piece_list`], listing pieces row-major.
pub fn format_piece_list(board: &Board) -> String {
    board
        .pieces()
        .map(|(square, piece)| format!("{}{square}", piece.kind.letter()))
        .collect::<Vec<_>>()
        .join(" ")
}
