use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::move_patterns::step_captures;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

#[inline]
pub fn knight_captures(square: Square, board: &Board, out: &mut Vec<Square>) {
    step_captures(square, board, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::knight_captures;
    use crate::game_state::board::Board;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn knight_on_d4_reaches_all_eight_occupied_targets() {
        let board = Board::from_piece_list("Nd4 Pe6 Pf5 Pf3 Pe2 Pc2 Pb3 Pb5 Pc6")
            .expect("setup should parse");
        let mut out = Vec::new();
        knight_captures(algebraic_to_square("d4").expect("d4"), &board, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn knight_ignores_adjacent_pieces() {
        let board = Board::from_piece_list("Nd4 Pd5 Pe5 Pe4").expect("setup should parse");
        let mut out = Vec::new();
        knight_captures(algebraic_to_square("d4").expect("d4"), &board, &mut out);
        assert!(out.is_empty());
    }
}
