use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::move_patterns::step_captures;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
    (1, -1),
];

#[inline]
pub fn king_captures(square: Square, board: &Board, out: &mut Vec<Square>) {
    step_captures(square, board, &KING_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::king_captures;
    use crate::game_state::board::Board;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn king_in_corner_captures_adjacent_only() {
        let board = Board::from_piece_list("Ka1 Pa2 Pb1 Pb2 Pc3").expect("setup should parse");
        let mut out = Vec::new();
        king_captures(algebraic_to_square("a1").expect("a1"), &board, &mut out);
        let names: Vec<String> = out.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["b1", "a2", "b2"]);
    }
}
