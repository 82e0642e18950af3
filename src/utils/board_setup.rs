//! Single entry point for turning user text into a `Board`.

use crate::game_state::board::Board;
use crate::game_state::chess_errors::RangerResult;
use crate::utils::fen_parser::parse_fen;
use crate::utils::piece_list::parse_piece_list;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSetup {
    /// Tokens such as `Na6 Rb6 Bc5`.
    PieceList(String),
    /// FEN piece placement, optionally followed by the other FEN fields.
    Fen(String),
}

impl BoardSetup {
    /// FEN when the text contains a rank separator, piece list otherwise.
    pub fn detect(text: &str) -> Self {
        let text = text.trim();
        if text.contains('/') {
            BoardSetup::Fen(text.to_owned())
        } else {
            BoardSetup::PieceList(text.to_owned())
        }
    }

    pub fn to_board(&self) -> RangerResult<Board> {
        match self {
            BoardSetup::PieceList(text) => parse_piece_list(text),
            BoardSetup::Fen(text) => parse_fen(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BoardSetup;

    #[test]
    fn detects_format_from_text() {
        assert_eq!(
            BoardSetup::detect(" Na6 Rb6 "),
            BoardSetup::PieceList("Na6 Rb6".to_owned())
        );
        assert_eq!(
            BoardSetup::detect("8/8/NR6/2B5/8/8/8/8"),
            BoardSetup::Fen("8/8/NR6/2B5/8/8/8/8".to_owned())
        );
    }

    #[test]
    fn both_formats_build_the_same_board() {
        let from_list = BoardSetup::detect("Na6 Rb6 Bc5")
            .to_board()
            .expect("piece list should parse");
        let from_fen = BoardSetup::detect("8/8/NR6/2B5/8/8/8/8 w - - 0 1")
            .to_board()
            .expect("fen should parse");
        assert_eq!(from_list, from_fen);
    }
}
