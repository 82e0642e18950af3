//! Errors raised while building a board from external input.
//!
//! Search itself never fails: a missing solution is reported through
//! `SolveOutcome::NoSolution`, not through this type. Every variant here is a
//! rejected input and is produced before any `Board` exists.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessRangerError {
    /// Square notation or coordinates outside the 8x8 board, or malformed.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// Piece letter outside P, N, B, R, Q, K.
    #[error("unknown piece kind '{0}'")]
    UnknownPieceKind(char),

    /// A piece-list token that is not `<Letter><file><rank>`.
    #[error("invalid piece token: {0}")]
    InvalidPieceToken(String),

    /// Two pieces placed on the same square.
    #[error("square {0} is already occupied")]
    SquareOccupied(String),

    /// Structural problem in a FEN board field.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Command-line flag without a value, or with an unparsable one.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A replayed move is not a capture available on the current board.
    #[error("illegal capture: {0}")]
    IllegalCapture(String),
}

pub type RangerResult<T> = Result<T, ChessRangerError>;
