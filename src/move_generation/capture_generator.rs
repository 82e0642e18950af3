//! Capture-only move generation.
//!
//! `capture_targets` dispatches on the piece kind to the static offset and
//! direction tables in `crate::moves`. Output order follows those tables, and
//! `generate_captures` walks the board row-major, so the full move list for a
//! board is identical on every call.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::move_generation::capture_move::CaptureMove;
use crate::moves::bishop_moves::bishop_captures;
use crate::moves::king_moves::king_captures;
use crate::moves::knight_moves::knight_captures;
use crate::moves::pawn_moves::pawn_captures;
use crate::moves::queen_moves::queen_captures;
use crate::moves::rook_moves::rook_captures;

/// Squares the `kind` piece standing on `square` can capture on.
///
/// Every returned square holds some piece other than the one on `square`.
pub fn capture_targets(kind: PieceKind, square: Square, board: &Board) -> Vec<Square> {
    let mut out = Vec::with_capacity(8);
    push_capture_targets(kind, square, board, &mut out);
    out
}

#[inline]
fn push_capture_targets(kind: PieceKind, square: Square, board: &Board, out: &mut Vec<Square>) {
    match kind {
        PieceKind::Pawn => pawn_captures(square, board, out),
        PieceKind::Knight => knight_captures(square, board, out),
        PieceKind::Bishop => bishop_captures(square, board, out),
        PieceKind::Rook => rook_captures(square, board, out),
        PieceKind::Queen => queen_captures(square, board, out),
        PieceKind::King => king_captures(square, board, out),
    }
}

/// Source of capture moves for the search.
pub trait CaptureGenerator {
    fn generate_captures(&self, board: &Board) -> Vec<CaptureMove>;
}

/// Standard chess movement patterns, restricted to captures.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangerCaptureGenerator;

impl CaptureGenerator for RangerCaptureGenerator {
    fn generate_captures(&self, board: &Board) -> Vec<CaptureMove> {
        generate_captures(board)
    }
}

/// All captures on the board: pieces row-major, targets in table order.
pub fn generate_captures(board: &Board) -> Vec<CaptureMove> {
    let mut moves = Vec::with_capacity(32);
    let mut targets = Vec::with_capacity(8);

    for (from, piece) in board.pieces() {
        targets.clear();
        push_capture_targets(piece.kind, from, board, &mut targets);
        moves.extend(
            targets
                .iter()
                .map(|&to| CaptureMove::new(piece.kind, from, to)),
        );
    }

    moves
}
