//! Puzzle generation for latinlace boards.
//!
//! Generation is a two-step pipeline: produce a fully solved board with the
//! solver's randomized filler, then remove cells one at a time, re-checking
//! after each removal that the remaining puzzle is still solvable and rolling
//! back removals that are not.
//!
//! Two removal paths exist. [`remove_numbers`] only cares that *a* solution
//! survives; [`remove_numbers_strategically`] additionally requires that
//! solving never needs a technique outside the difficulty's allowed strategy
//! set, trading removal depth for that stronger guarantee.
//!
//! All randomness is drawn from a caller-supplied source. The convenience
//! surface, [`PuzzleGenerator`], derives that source from a [`PuzzleSeed`]:
//! fresh entropy per call by default, or an explicit seed for reproducible
//! puzzles.
//!
//! # Examples
//!
//! ```
//! use latinlace_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new(6, Difficulty::Medium);
//! let puzzle = generator.generate();
//!
//! assert!(puzzle.problem.is_valid());
//! assert!(puzzle.solution.is_filled());
//!
//! // The same seed reproduces the same puzzle
//! let again = generator.generate_with_seed(puzzle.seed);
//! assert_eq!(again.problem, puzzle.problem);
//! ```

pub mod difficulty;
pub mod generator;
pub mod removal;
pub mod seed;

pub use self::{
    difficulty::Difficulty,
    generator::{GeneratedPuzzle, PuzzleGenerator, generate_board},
    removal::{
        DEFAULT_STRATEGIC_ATTEMPTS, remove_numbers, remove_numbers_strategically,
        remove_numbers_strategically_with_budget,
    },
    seed::{ParseSeedError, PuzzleSeed},
};
