//! Backtracking filler and strategy-classifying solver for latinlace boards.
//!
//! Three operations share one recursive depth-first search over empty cells
//! in row-major order:
//!
//! - [`fill_board`]: randomized exhaustive backtracking that completes a board
//!   (or fills an empty one); candidate order is shuffled, which is where
//!   board-generation variety comes from
//! - [`solve_with_strategies`]: the same search with ascending candidate order
//!   and per-cell strategy classification, used by the generator to check that
//!   a puzzle stays solvable within a difficulty's technique budget
//! - [`complete_board`]: bounded backtracking completion of a partial board
//!   with an explicit node budget and an explicit "could not complete" error
//!
//! Absence of a solution is never an error: the search functions return
//! `false` and guarantee the board is restored to its pre-call layout.
//!
//! # Examples
//!
//! ```
//! use latinlace_core::Board;
//! use latinlace_solver::{StrategySet, fill_board, solve_with_strategies};
//!
//! let mut board = Board::empty(6);
//! assert!(fill_board(&mut board, &mut rand::rng()));
//! assert!(board.is_filled() && board.is_valid());
//!
//! let mut used = StrategySet::empty();
//! let mut copy = board.clone();
//! assert!(solve_with_strategies(&mut copy, &mut used));
//! ```

pub mod backtrack;
pub mod complete;
pub mod strategy;

pub use self::{
    backtrack::{fill_board, is_solvable, solve_with_strategies},
    complete::{CompleteError, DEFAULT_NODE_BUDGET, complete_board, complete_board_with_budget},
    strategy::{Strategy, StrategySet},
};
