//! Board-to-FEN serializer (piece-placement field only).

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Square, BOARD_SIZE};

pub fn generate_fen(board: &Board) -> String {
    let mut ranks = Vec::with_capacity(BOARD_SIZE as usize);

    for row in 0..BOARD_SIZE {
        let mut rank = String::new();
        let mut empty = 0u8;

        for col in 0..BOARD_SIZE {
            let piece = Square::new(row, col).ok().and_then(|sq| board.piece_at(sq));
            match piece {
                Some(piece) => {
                    if empty > 0 {
                        rank.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    rank.push(piece.fen_char());
                }
                None => empty += 1,
            }
        }

        if empty > 0 {
            rank.push(char::from(b'0' + empty));
        }
        ranks.push(rank);
    }

    ranks.join("/")
}
