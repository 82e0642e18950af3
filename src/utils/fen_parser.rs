//! FEN-to-Board parser.
//!
//! Only the piece-placement field is meaningful for the puzzle. A full FEN
//! record is accepted and the trailing fields are ignored.

use crate::game_state::board::Board;
use crate::game_state::chess_errors::{ChessRangerError, RangerResult};
use crate::game_state::chess_types::{Piece, Square};

pub fn parse_fen(fen: &str) -> RangerResult<Board> {
    let board_part = fen
        .split_whitespace()
        .next()
        .ok_or_else(|| ChessRangerError::InvalidFen("missing board layout".to_owned()))?;

    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessRangerError::InvalidFen(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::new_empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        parse_rank(row as u8, rank_str, &mut board)?;
    }

    Ok(board)
}

fn parse_rank(row: u8, rank_str: &str, board: &mut Board) -> RangerResult<()> {
    let mut col = 0u8;

    for ch in rank_str.chars() {
        if let Some(empty_count) = ch.to_digit(10) {
            if !(1..=8).contains(&empty_count) {
                return Err(ChessRangerError::InvalidFen(format!(
                    "invalid empty-square count '{ch}'"
                )));
            }
            col += empty_count as u8;
            if col > 8 {
                return Err(overfull_rank(rank_str));
            }
            continue;
        }

        let piece = Piece::from_fen_char(ch)?;
        if col >= 8 {
            return Err(overfull_rank(rank_str));
        }
        board.place(Square::new(row, col)?, piece)?;
        col += 1;
    }

    if col != 8 {
        return Err(ChessRangerError::InvalidFen(format!(
            "rank '{rank_str}' does not sum to 8 files"
        )));
    }

    Ok(())
}

fn overfull_rank(rank_str: &str) -> ChessRangerError {
    ChessRangerError::InvalidFen(format!("rank '{rank_str}' has too many files"))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_errors::ChessRangerError;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn parses_board_field_with_mixed_case() {
        let board = parse_fen("8/8/Nr6/2b5/8/8/8/8").expect("fen should parse");
        assert_eq!(board.piece_count(), 3);

        let b6 = board
            .piece_at(algebraic_to_square("b6").expect("b6"))
            .expect("rook on b6");
        assert_eq!(b6.kind, PieceKind::Rook);
        assert_eq!(b6.color, Color::Dark);
    }

    #[test]
    fn accepts_full_fen_record() {
        let board = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect("starting position should parse");
        assert_eq!(board.piece_count(), 32);
    }

    #[test]
    fn rejects_structural_errors() {
        assert!(matches!(parse_fen(""), Err(ChessRangerError::InvalidFen(_))));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8"),
            Err(ChessRangerError::InvalidFen(_))
        ));
        assert!(matches!(
            parse_fen("9/8/8/8/8/8/8/8"),
            Err(ChessRangerError::InvalidFen(_))
        ));
        assert!(matches!(
            parse_fen("7/8/8/8/8/8/8/8"),
            Err(ChessRangerError::InvalidFen(_))
        ));
        assert!(matches!(
            parse_fen("4N4/8/8/8/8/8/8/8"),
            Err(ChessRangerError::InvalidFen(_))
        ));
    }

    #[test]
    fn rejects_unknown_piece_letters() {
        assert_eq!(
            parse_fen("8/8/8/8/3X4/8/8/8"),
            Err(ChessRangerError::UnknownPieceKind('X'))
        );
    }
}
