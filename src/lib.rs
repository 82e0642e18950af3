//! Crate root module declarations for the Chess Ranger solver.
//!
//! Chess Ranger is a solitaire puzzle: every move must be a capture, and the
//! puzzle is solved when a single piece remains. This file exposes the board
//! model, the capture-only move generator, the backtracking search and the
//! text input/output helpers under stable module paths for the binary,
//! benches and tests.

pub mod game_state {
    pub mod board;
    pub mod chess_errors;
    pub mod chess_types;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_patterns;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod capture_generator;
    pub mod capture_move;
    pub mod perft;
}

pub mod search {
    pub mod solution;
    pub mod solver;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_setup;
    pub mod cli_args;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod piece_list;
    pub mod random_setup;
    pub mod render_board;
}
