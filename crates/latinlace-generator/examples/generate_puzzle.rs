//! Example demonstrating puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a board size and difficulty
//! - Generate a random puzzle (or replay one from a seed)
//! - Display the puzzle, solution, seed, and strategies used
//! - Sample for puzzles matching a required strategy
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a size and difficulty:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 9 --difficulty hard
//! ```
//!
//! Replay a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```
//!
//! Use strategy-bounded removal, or sample for a puzzle that exercises a
//! specific strategy within a budget:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --strategy-bounded
//! cargo run --example generate_puzzle -- --require-strategy backtracking --max-tries 1000
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use latinlace_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use latinlace_solver::{Strategy, StrategySet, solve_with_strategies};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    NakedSingle,
    Backtracking,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::NakedSingle => Strategy::NakedSingle,
            StrategyArg::Backtracking => Strategy::Backtracking,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length.
    #[arg(long, value_name = "N", default_value_t = 6)]
    size: usize,

    /// Difficulty level.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Use the strategy-bounded removal path.
    #[arg(long)]
    strategy_bounded: bool,

    /// Replay a specific seed instead of drawing a fresh one.
    #[arg(long, value_name = "HEX")]
    seed: Option<PuzzleSeed>,

    /// Sample until a puzzle whose solve uses this strategy is found.
    #[arg(long, value_name = "STRATEGY")]
    require_strategy: Option<StrategyArg>,

    /// Maximum puzzles to sample when filtering.
    #[arg(long, value_name = "COUNT", default_value_t = 1_000)]
    max_tries: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut generator = PuzzleGenerator::new(args.size, args.difficulty.into());
    if args.strategy_bounded {
        generator = generator.strategy_bounded();
    }

    if let Some(seed) = args.seed {
        let puzzle = generator.generate_with_seed(seed);
        print_puzzle(&puzzle);
        return;
    }

    let Some(required) = args.require_strategy else {
        let puzzle = generator.generate();
        print_puzzle(&puzzle);
        return;
    };

    if args.max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let required: Strategy = required.into();
    let found = (0..args.max_tries)
        .into_par_iter()
        .map(|_| generator.generate())
        .find_any(|puzzle| strategies_used(puzzle).contains(required.as_set()));

    match found {
        Some(puzzle) => print_puzzle(&puzzle),
        None => {
            eprintln!(
                "No puzzle requiring \"{required}\" found in {} tries.",
                args.max_tries
            );
            process::exit(1);
        }
    }
}

fn strategies_used(puzzle: &GeneratedPuzzle) -> StrategySet {
    let mut scratch = puzzle.problem.clone();
    let mut used = StrategySet::empty();
    let solved = solve_with_strategies(&mut scratch, &mut used);
    assert!(solved, "generated puzzles are always solvable");
    used
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem ({} empty cells):", puzzle.problem.count_empty());
    println!("{}", indent(&puzzle.problem.to_string()));
    println!();
    println!("Solution:");
    println!("{}", indent(&puzzle.solution.to_string()));
    println!();
    println!("Strategies used: {}", strategies_used(puzzle));
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
