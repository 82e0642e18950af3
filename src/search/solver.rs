//! Depth-first backtracking solver for Chess Ranger boards.
//!
//! Each node receives its board by value and expands captures in generator
//! order (pieces row-major, targets in table order). The first line that ends
//! with a single piece is returned; remaining siblings are never visited.
//!
//! There is no memoization: a position reachable through different capture
//! orders is searched again. Depth is bounded by the piece count because every
//! move removes one piece, so the search always terminates. `SolverConfig`
//! adds optional node, time and stop-flag limits on top of that.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::game_state::board::Board;
use crate::move_generation::capture_generator::{CaptureGenerator, RangerCaptureGenerator};
use crate::move_generation::capture_move::CaptureMove;
use crate::search::solution::Solution;

/// Deadline and stop flag are polled on the first node and then once per
/// 1024 nodes.
const POLL_INTERVAL_MASK: u64 = 1023;

#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    pub max_nodes: Option<u64>,
    pub movetime_ms: Option<u64>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    NodeLimit,
    TimeLimit,
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved(Solution),
    /// The whole capture tree was searched without reaching one piece.
    NoSolution,
    /// A configured limit ended the search before it was exhaustive.
    BudgetExhausted(StopReason),
}

impl SolveOutcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolveOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub outcome: SolveOutcome,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

/// Solve with the standard capture rules and no limits.
pub fn solve(board: &Board) -> SolveOutcome {
    solve_with_config(board, &RangerCaptureGenerator, &SolverConfig::default()).outcome
}

pub fn solve_with_config<G: CaptureGenerator>(
    board: &Board,
    generator: &G,
    config: &SolverConfig,
) -> SolveReport {
    let started_at = Instant::now();
    let mut search = Search {
        generator,
        nodes: 0,
        max_nodes: config.max_nodes.filter(|n| *n > 0),
        deadline: config
            .movetime_ms
            .map(|ms| started_at + Duration::from_millis(ms.max(1))),
        stop_flag: config.stop_flag.as_deref(),
    };

    debug!(
        pieces = board.piece_count(),
        fen = %board.get_fen(),
        "starting chess ranger search"
    );

    let mut path = Vec::with_capacity(board.piece_count().saturating_sub(1));
    let outcome = match search.visit(*board, &mut path) {
        Ok(true) => SolveOutcome::Solved(Solution::new(path)),
        Ok(false) => SolveOutcome::NoSolution,
        Err(reason) => {
            warn!(?reason, nodes = search.nodes, "search stopped before completion");
            SolveOutcome::BudgetExhausted(reason)
        }
    };

    let elapsed_ms = started_at.elapsed().as_millis() as u64;
    debug!(
        nodes = search.nodes,
        elapsed_ms,
        solved = outcome.is_solved(),
        "chess ranger search finished"
    );

    SolveReport {
        outcome,
        nodes: search.nodes,
        elapsed_ms,
    }
}

struct Search<'a, G: CaptureGenerator> {
    generator: &'a G,
    nodes: u64,
    max_nodes: Option<u64>,
    deadline: Option<Instant>,
    stop_flag: Option<&'a AtomicBool>,
}

impl<G: CaptureGenerator> Search<'_, G> {
    /// `Ok(true)` leaves the winning line in `path`; otherwise `path` is
    /// restored to its length on entry.
    fn visit(&mut self, board: Board, path: &mut Vec<CaptureMove>) -> Result<bool, StopReason> {
        self.nodes += 1;
        self.check_limits()?;

        let remaining = board.piece_count();
        trace!(depth = path.len(), remaining, "expanding node");
        if remaining <= 1 {
            return Ok(true);
        }

        for mv in self.generator.generate_captures(&board) {
            let Some(next) = board.after_capture(mv.from, mv.to) else {
                continue;
            };
            path.push(mv);
            if self.visit(next, path)? {
                return Ok(true);
            }
            path.pop();
        }

        Ok(false)
    }

    #[inline]
    fn check_limits(&self) -> Result<(), StopReason> {
        if let Some(cap) = self.max_nodes {
            if self.nodes > cap {
                return Err(StopReason::NodeLimit);
            }
        }
        if self.nodes & POLL_INTERVAL_MASK != 1 {
            return Ok(());
        }
        if let Some(limit) = self.deadline {
            if Instant::now() >= limit {
                return Err(StopReason::TimeLimit);
            }
        }
        if let Some(flag) = self.stop_flag {
            if flag.load(Ordering::Relaxed) {
                return Err(StopReason::Stopped);
            }
        }
        Ok(())
    }
}
