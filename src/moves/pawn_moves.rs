use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::move_patterns::step_captures;

/// Pawns capture toward decreasing row (toward rank 8) whatever their color.
pub const PAWN_CAPTURE_OFFSETS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];

#[inline]
pub fn pawn_captures(square: Square, board: &Board, out: &mut Vec<Square>) {
    step_captures(square, board, &PAWN_CAPTURE_OFFSETS, out);
}
