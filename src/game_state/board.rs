//! Mailbox board used by the search.
//!
//! `Board` is a small `Copy` value. Search nodes never mutate a board they
//! were handed; every capture produces a fresh board through
//! [`Board::after_capture`], so sibling branches cannot see each other.

use crate::game_state::chess_errors::{ChessRangerError, RangerResult};
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::piece_list::parse_piece_list;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_fen(fen: &str) -> RangerResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn from_piece_list(text: &str) -> RangerResult<Self> {
        parse_piece_list(text)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Put a piece on an empty square.
    pub fn place(&mut self, square: Square, piece: Piece) -> RangerResult<()> {
        let cell = &mut self.cells[square.row() as usize][square.col() as usize];
        if cell.is_some() {
            return Err(ChessRangerError::SquareOccupied(square.to_string()));
        }
        *cell = Some(piece);
        Ok(())
    }

    /// Overwrite a cell, replacing any piece already there.
    #[inline]
    pub(crate) fn put(&mut self, square: Square, piece: Piece) {
        self.cells[square.row() as usize][square.col() as usize] = Some(piece);
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize].take()
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Occupied squares in row-major order (rank 8 first, file a first).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Board after the piece on `from` captures whatever stands on `to`.
    ///
    /// Returns `None` when `from` is empty. The caller is responsible for
    /// `to` being a generated capture target.
    pub fn after_capture(&self, from: Square, to: Square) -> Option<Self> {
        let mut next = *self;
        let mover = next.remove(from)?;
        next.put(to, mover);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_errors::ChessRangerError;
    use crate::game_state::chess_types::{Piece, PieceKind, Square};

    fn sq(name: &str) -> Square {
        crate::utils::algebraic::algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn place_rejects_second_piece_on_same_square() {
        let mut board = Board::new_empty();
        board
            .place(sq("d4"), Piece::from(PieceKind::Rook))
            .expect("empty square accepts a piece");
        let err = board
            .place(sq("d4"), Piece::from(PieceKind::Knight))
            .expect_err("occupied square must be rejected");
        assert_eq!(err, ChessRangerError::SquareOccupied("d4".to_owned()));
    }

    #[test]
    fn after_capture_leaves_parent_untouched() {
        let parent = Board::from_piece_list("Ra6 Rb6").expect("setup should parse");
        let child = parent
            .after_capture(sq("a6"), sq("b6"))
            .expect("a6 holds a piece");

        assert_eq!(parent.piece_count(), 2);
        assert_eq!(child.piece_count(), 1);
        assert_eq!(child.piece_at(sq("a6")), None);
        assert_eq!(
            child.piece_at(sq("b6")).map(|p| p.kind),
            Some(PieceKind::Rook)
        );
        assert!(parent.is_occupied(sq("a6")));
    }

    #[test]
    fn put_overwrites_without_error() {
        let mut board = Board::new_empty();
        board.put(sq("e4"), Piece::from(PieceKind::Pawn));
        board.put(sq("e4"), Piece::from(PieceKind::Queen));
        assert_eq!(board.piece_count(), 1);
        assert_eq!(
            board.piece_at(sq("e4")).map(|p| p.kind),
            Some(PieceKind::Queen)
        );
    }

    #[test]
    fn after_capture_from_empty_square_is_none() {
        let board = Board::from_piece_list("Ra6").expect("setup should parse");
        assert!(board.after_capture(sq("h1"), sq("a6")).is_none());
    }

    #[test]
    fn pieces_iterate_row_major() {
        let board = Board::from_piece_list("Kh1 Qa8 Nb6 Pa6").expect("setup should parse");
        let order: Vec<String> = board.pieces().map(|(s, _)| s.to_string()).collect();
        assert_eq!(order, vec!["a8", "a6", "b6", "h1"]);
    }
}
