//! Capture-tree enumeration.
//!
//! Walks every capture line from a board to a fixed depth. Used to size
//! puzzles and as a move-generation regression oracle; the solver itself stops
//! at the first solution and does not use this.

use crate::game_state::board::Board;
use crate::move_generation::capture_generator::CaptureGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    /// Leaf nodes at the requested depth.
    pub nodes: usize,
    /// Captures played on the way to the leaves.
    pub captures: usize,
    /// Lines that reached a single piece, at any depth up to the limit.
    pub solutions: usize,
    /// Lines that stopped with several pieces and no capture available.
    pub dead_ends: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.solutions += rhs.solutions;
        self.dead_ends += rhs.dead_ends;
    }
}

pub fn perft<G: CaptureGenerator>(generator: &G, board: &Board, depth: u8) -> PerftCounts {
    if board.piece_count() <= 1 {
        return PerftCounts {
            solutions: 1,
            ..PerftCounts::default()
        };
    }

    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let moves = generator.generate_captures(board);
    if moves.is_empty() {
        return PerftCounts {
            dead_ends: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in moves {
        let Some(next) = board.after_capture(mv.from, mv.to) else {
            continue;
        };
        total.captures += 1;
        total.merge(perft(generator, &next, depth - 1));
    }

    total
}

/// Number of distinct capture sequences that solve `board`.
pub fn count_solutions<G: CaptureGenerator>(generator: &G, board: &Board) -> usize {
    let depth = board.piece_count().saturating_sub(1);
    perft(generator, board, u8::try_from(depth).unwrap_or(u8::MAX)).solutions
}
