//! Benchmarks for board filling and strategy-classified solving.
//!
//! Seeded generators keep runs reproducible while covering the full range of
//! playable board sizes.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use latinlace_core::Board;
use latinlace_solver::{StrategySet, fill_board, solve_with_strategies};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

fn bench_fill_board(c: &mut Criterion) {
    for size in [4, 6, 9] {
        c.bench_with_input(BenchmarkId::new("fill_board", size), &size, |b, &size| {
            let mut rng = Pcg64::seed_from_u64(size as u64);
            b.iter(|| {
                let mut board = Board::empty(size);
                let filled = fill_board(&mut board, &mut rng);
                hint::black_box((filled, board))
            });
        });
    }
}

fn bench_solve_with_strategies(c: &mut Criterion) {
    for size in [4, 6, 9] {
        // Solve a board whose first two rows have been cleared
        let mut rng = Pcg64::seed_from_u64(1000 + size as u64);
        let mut solution = Board::empty(size);
        assert!(fill_board(&mut solution, &mut rng));
        let mut puzzle = solution.clone();
        for cell in solution.cells().take(2 * size) {
            puzzle.clear(cell);
        }

        c.bench_with_input(
            BenchmarkId::new("solve_with_strategies", size),
            &puzzle,
            |b, puzzle| {
                b.iter(|| {
                    let mut board = puzzle.clone();
                    let mut used = StrategySet::empty();
                    let solved = solve_with_strategies(&mut board, &mut used);
                    hint::black_box((solved, used))
                });
            },
        );
    }
}

criterion_group!(benches, bench_fill_board, bench_solve_with_strategies);
criterion_main!(benches);
