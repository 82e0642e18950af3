//! Command-line Chess Ranger solver.
//!
//! Usage:
//! `cargo run --release -- Na6 Rb6 Bc5`
//! `cargo run --release -- --fen 8/8/NR6/2B5/8/8/8/8 --render`
//! `cargo run --release -- --max-nodes 1000000 --movetime-ms 5000`
//!
//! With no setup on the command line, one line is read from stdin.
//! `CHESS_RANGER_MAX_NODES` and `CHESS_RANGER_MOVETIME_MS` act as defaults for
//! the matching flags. Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use tracing::info;

use chess_ranger::move_generation::capture_generator::RangerCaptureGenerator;
use chess_ranger::search::solution::replay_solution;
use chess_ranger::search::solver::{solve_with_config, SolveOutcome, SolverConfig};
use chess_ranger::utils::board_setup::BoardSetup;
use chess_ranger::utils::cli_args::parse_cli_args;
use chess_ranger::utils::piece_list::format_piece_list;
use chess_ranger::utils::render_board::render_board;

fn prompt_for_setup() -> anyhow::Result<BoardSetup> {
    println!("Separate multiple pieces with spaces (e.g., 'Na6 Rb6 Bc5').");
    println!("Press Enter when done.");
    print!("Enter your chessboard setup: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(BoardSetup::detect(&line))
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_args(&args, |key| std::env::var(key).ok())?;
    let config = SolverConfig {
        max_nodes: options.max_nodes,
        movetime_ms: options.movetime_ms,
        ..SolverConfig::default()
    };

    let setup = match options.setup {
        Some(setup) => setup,
        None => prompt_for_setup()?,
    };
    let board = setup
        .to_board()
        .context("could not build board from setup")?;
    info!(
        pieces = %format_piece_list(&board),
        fen = %board.get_fen(),
        "board loaded"
    );

    if options.render {
        println!("{}", render_board(&board));
    }

    let report = solve_with_config(&board, &RangerCaptureGenerator, &config);
    info!(nodes = report.nodes, elapsed_ms = report.elapsed_ms, "search complete");

    match report.outcome {
        SolveOutcome::Solved(solution) => {
            replay_solution(&board, solution.moves())
                .context("solver produced an inconsistent line")?;
            println!("Solution Found!");
            if !solution.is_empty() {
                println!("{solution}");
            }
            Ok(ExitCode::SUCCESS)
        }
        SolveOutcome::NoSolution => {
            println!("No solution exists.");
            Ok(ExitCode::SUCCESS)
        }
        SolveOutcome::BudgetExhausted(reason) => {
            println!("Search stopped before completion ({reason:?}).");
            Ok(ExitCode::from(2))
        }
    }
}
