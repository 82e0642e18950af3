//! Conversions between file-rank notation (e.g. `a6`) and board squares.

use crate::game_state::chess_errors::{ChessRangerError, RangerResult};
use crate::game_state::chess_types::Square;

/// Convert notation such as "e4" to a square (row 0 is rank 8).
pub fn algebraic_to_square(square: &str) -> RangerResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessRangerError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessRangerError::InvalidSquare(square.to_owned()));
    }

    Square::new(b'8' - rank, file - b'a')
}
