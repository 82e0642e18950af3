//! Random puzzle boards for stress tests and benchmarks.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square};

/// A board with `piece_count` pieces (capped at 64) of random kinds on
/// distinct random squares. Deterministic for a seeded `rng`.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, piece_count: usize) -> Board {
    let mut squares: Vec<Square> = Square::all().collect();
    squares.shuffle(rng);

    let mut board = Board::new_empty();
    for square in squares.into_iter().take(piece_count) {
        let kind = PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())];
        board.put(square, Piece::from(kind));
    }
    board
}
