use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_ranger::game_state::board::Board;
use chess_ranger::move_generation::capture_generator::RangerCaptureGenerator;
use chess_ranger::move_generation::perft::count_solutions;
use chess_ranger::search::solver::{solve, SolveOutcome};
use chess_ranger::utils::random_setup::random_board;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    solvable: bool,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "three_piece",
        fen: "8/8/RR6/2B5/8/8/8/8",
        solvable: true,
    },
    BenchCase {
        name: "corner_rooks",
        fen: "R6R/8/8/8/8/8/8/R6R",
        solvable: true,
    },
    BenchCase {
        name: "knight_cluster",
        fen: "8/8/NR6/2B5/8/8/8/8",
        solvable: false,
    },
];

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CASES {
        let board = Board::from_fen(case.fen).expect("benchmark FEN should parse");

        // Correctness guard before benchmarking.
        assert_eq!(
            solve(&board).is_solved(),
            case.solvable,
            "unexpected outcome for {}",
            case.name
        );

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| black_box(solve(black_box(board))));
        });
    }

    group.finish();
}

fn bench_random_boards(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_boards");
    group.sample_size(20);

    for piece_count in [6usize, 8] {
        let mut rng = StdRng::seed_from_u64(piece_count as u64);
        let boards: Vec<Board> = (0..16).map(|_| random_board(&mut rng, piece_count)).collect();

        group.bench_with_input(
            BenchmarkId::new("solve", piece_count),
            &boards,
            |b, boards| {
                b.iter(|| {
                    boards
                        .iter()
                        .filter(|board| matches!(solve(board), SolveOutcome::Solved(_)))
                        .count()
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("count_solutions", piece_count),
            &boards,
            |b, boards| {
                b.iter(|| {
                    boards
                        .iter()
                        .map(|board| count_solutions(&RangerCaptureGenerator, black_box(board)))
                        .sum::<usize>()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(solver_benches, bench_solve, bench_random_boards);
criterion_main!(solver_benches);
