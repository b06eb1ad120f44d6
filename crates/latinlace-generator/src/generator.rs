//! Full-board generation and the seeded puzzle pipeline.

use latinlace_core::Board;
use latinlace_solver::fill_board;
use log::debug;
use rand::Rng;

use crate::{
    difficulty::Difficulty,
    removal::{remove_numbers, remove_numbers_strategically},
    seed::PuzzleSeed,
};

/// Generates a fully solved board of the given side length.
///
/// Runs the solver's randomized exhaustive filler on an empty board. A
/// complete assignment exists for every size (a latin square), so the fill
/// always succeeds; the shuffled candidate order is what varies the result
/// between calls with different random streams.
///
/// # Examples
///
/// ```
/// use latinlace_generator::generate_board;
///
/// let board = generate_board(7, &mut rand::rng());
/// assert!(board.is_filled());
/// assert!(board.is_valid());
/// ```
pub fn generate_board<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Board {
    let mut board = Board::empty(size);
    let filled = fill_board(&mut board, rng);
    debug_assert!(filled, "an empty board always has a complete assignment");
    board
}

/// A generated puzzle together with its solution and seed.
///
/// The solution is the full board the puzzle was carved from; callers keep it
/// as the initial/solution reference for hinting and completion checks. The
/// seed replays the exact generation through
/// [`PuzzleGenerator::generate_with_seed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle board, with cells removed.
    pub problem: Board,
    /// The fully solved board the problem was derived from.
    pub solution: Board,
    /// The seed that produced this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates puzzles of a fixed size and difficulty.
///
/// Bundles the full pipeline: fill an empty board, then remove cells per the
/// difficulty's target fraction. By default the removal path only checks that
/// a solution survives; [`strategy_bounded`](Self::strategy_bounded) switches
/// to the removal path that also keeps the puzzle within the difficulty's
/// allowed strategy set.
///
/// # Examples
///
/// ```
/// use latinlace_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(6, Difficulty::Medium);
///
/// // Fresh randomness per call...
/// let puzzle = generator.generate();
/// assert!(puzzle.problem.is_valid());
///
/// // ...but replayable from the recorded seed
/// let replay = generator.generate_with_seed(puzzle.seed);
/// assert_eq!(replay, puzzle);
///
/// // Or pinned up front
/// let pinned = generator.generate_with_seed(PuzzleSeed::from_phrase("doc"));
/// assert_eq!(pinned.problem, generator.generate_with_seed(PuzzleSeed::from_phrase("doc")).problem);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    size: usize,
    difficulty: Difficulty,
    strategy_bounded: bool,
}

impl PuzzleGenerator {
    /// Creates a generator for boards of side length `size` at `difficulty`,
    /// using the unconstrained-strategy removal path.
    #[must_use]
    pub const fn new(size: usize, difficulty: Difficulty) -> Self {
        Self {
            size,
            difficulty,
            strategy_bounded: false,
        }
    }

    /// Switches removal to the strategy-bounded path.
    ///
    /// Generated puzzles will then never require a solving strategy outside
    /// `difficulty.allowed_strategies()`, at the cost of typically removing
    /// fewer cells (the strategic path runs under a much smaller attempt
    /// budget).
    #[must_use]
    pub const fn strategy_bounded(mut self) -> Self {
        self.strategy_bounded = true;
        self
    }

    /// Returns the configured board side length.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the configured difficulty.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::fresh())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same generator configuration and seed always produce the same
    /// puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solution = generate_board(self.size, &mut rng);
        let problem = if self.strategy_bounded {
            remove_numbers_strategically(
                &solution,
                self.difficulty.allowed_strategies(),
                self.difficulty,
                &mut rng,
            )
        } else {
            remove_numbers(&solution, self.difficulty, &mut rng)
        };
        debug!(
            "generated size-{} {} puzzle with {} empty cells (seed {seed})",
            self.size,
            self.difficulty,
            problem.count_empty(),
        );
        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}
