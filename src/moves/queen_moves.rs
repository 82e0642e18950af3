use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::move_patterns::slide_captures;

/// Diagonals first, then orthogonals.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
];

#[inline]
pub fn queen_captures(square: Square, board: &Board, out: &mut Vec<Square>) {
    slide_captures(square, board, &QUEEN_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::queen_captures;
    use crate::game_state::board::Board;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn queen_combines_diagonal_and_orthogonal_rays() {
        let board = Board::from_piece_list("Qd4 Pg7 Pd1 Pa4 Pb2").expect("setup should parse");
        let mut out = Vec::new();
        queen_captures(algebraic_to_square("d4").expect("d4"), &board, &mut out);
        let names: Vec<String> = out.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["b2", "g7", "d1", "a4"]);
    }
}
