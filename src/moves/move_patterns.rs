//! Shared stepping and sliding helpers for the per-piece capture tables.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

/// Single-step pieces: each offset that lands on an occupied square.
#[inline]
pub fn step_captures(square: Square, board: &Board, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(d_row, d_col) in offsets {
        if let Some(target) = square.offset(d_row, d_col) {
            if board.is_occupied(target) {
                out.push(target);
            }
        }
    }
}

/// Sliding pieces: the first occupied square along each direction.
#[inline]
pub fn slide_captures(
    square: Square,
    board: &Board,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        if let Some(target) = first_blocker(square, board, d_row, d_col) {
            out.push(target);
        }
    }
}

fn first_blocker(square: Square, board: &Board, d_row: i8, d_col: i8) -> Option<Square> {
    let mut current = square.offset(d_row, d_col);
    while let Some(sq) = current {
        if board.is_occupied(sq) {
            return Some(sq);
        }
        current = sq.offset(d_row, d_col);
    }
    None
}
