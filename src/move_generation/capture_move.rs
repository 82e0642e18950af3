//! The single move type of the puzzle: one piece capturing another.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaptureMove {
    pub piece: PieceKind,
    pub from: Square,
    pub to: Square,
}

impl CaptureMove {
    #[inline]
    pub const fn new(piece: PieceKind, from: Square, to: Square) -> Self {
        Self { piece, from, to }
    }
}

/// `<Letter><from>x<to>`, for example `Na6xb6`.
impl fmt::Display for CaptureMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}x{}", self.piece.letter(), self.from, self.to)
    }
}
