//! Solved capture sequences and their verification.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::chess_errors::{ChessRangerError, RangerResult};
use crate::move_generation::capture_generator::generate_captures;
use crate::move_generation::capture_move::CaptureMove;

/// Ordered captures taking a board down to a single piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    moves: Vec<CaptureMove>,
}

impl Solution {
    pub fn new(moves: Vec<CaptureMove>) -> Self {
        Self { moves }
    }

    #[inline]
    pub fn moves(&self) -> &[CaptureMove] {
        &self.moves
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves in notation form, e.g. `["Ra6xb6", "Bc5xb6"]`.
    pub fn notation(&self) -> Vec<String> {
        self.moves.iter().map(ToString::to_string).collect()
    }
}

/// One `Step N: <move>` line per capture.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, mv) in self.moves.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "Step {}: {mv}", idx + 1)?;
        }
        Ok(())
    }
}

/// Re-play `moves` from `board`, returning the final board.
///
/// Each move must be one of the captures generated on the board it is played
/// on; anything else is rejected with `IllegalCapture`.
pub fn replay_solution(board: &Board, moves: &[CaptureMove]) -> RangerResult<Board> {
    let mut current = *board;
    for mv in moves {
        if !generate_captures(&current).contains(mv) {
            return Err(ChessRangerError::IllegalCapture(mv.to_string()));
        }
        current = current
            .after_capture(mv.from, mv.to)
            .ok_or_else(|| ChessRangerError::IllegalCapture(mv.to_string()))?;
    }
    Ok(current)
}
