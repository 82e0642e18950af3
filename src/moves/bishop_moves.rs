use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::move_patterns::slide_captures;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn bishop_captures(square: Square, board: &Board, out: &mut Vec<Square>) {
    slide_captures(square, board, &BISHOP_DIRECTIONS, out);
}
