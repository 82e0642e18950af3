use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::move_patterns::slide_captures;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

#[inline]
pub fn rook_captures(square: Square, board: &Board, out: &mut Vec<Square>) {
    slide_captures(square, board, &ROOK_DIRECTIONS, out);
}
