//! Bounded completion of a partial board.

use derive_more::{Display, Error};
use latinlace_core::Board;
use rand::{Rng, seq::SliceRandom};

use crate::backtrack::CandidateBuf;

/// Default node budget for [`complete_board`].
///
/// One node is spent per cell visit during the search. The budget is far
/// above what any board reachable from a valid full board by removals needs,
/// while still terminating promptly on adversarial inputs.
pub const DEFAULT_NODE_BUDGET: usize = 100_000;

/// An error completing a partial board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CompleteError {
    /// The board has no completion: some arrangement of the given values
    /// blocks every assignment, regardless of fill order.
    #[display("board cannot be completed")]
    Unsolvable,
    /// The search exceeded its node budget before finding a completion or
    /// proving none exists.
    #[display("completion search exhausted its budget of {budget} nodes")]
    BudgetExhausted {
        /// The node budget that was exhausted.
        budget: usize,
    },
}

/// Completes every empty cell of `board`, returning the filled board.
///
/// This is the "solve the rest for me" entry point. The input is never
/// mutated; the completion is searched on a copy with randomized backtracking
/// (shuffled candidate order at every cell, placements retracted on dead
/// ends) under [`DEFAULT_NODE_BUDGET`].
///
/// Unlike a restart-from-scratch strategy, the bounded search always
/// terminates: an unsatisfiable input yields [`CompleteError::Unsolvable`]
/// once the search space is exhausted, and a pathologically expensive one
/// yields [`CompleteError::BudgetExhausted`] instead of running forever.
///
/// # Errors
///
/// Returns [`CompleteError::Unsolvable`] if the board has no completion, or
/// [`CompleteError::BudgetExhausted`] if the search ran out of budget first.
///
/// # Examples
///
/// ```
/// use latinlace_core::Board;
/// use latinlace_solver::complete_board;
///
/// let board: Board = "
///     1 2 3 4
///     _ _ _ _
///     _ _ _ _
///     _ _ _ _
/// "
/// .parse()?;
///
/// let completed = complete_board(&board, &mut rand::rng())?;
/// assert!(completed.is_filled());
/// assert!(completed.is_valid());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn complete_board<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Board, CompleteError> {
    complete_board_with_budget(board, rng, DEFAULT_NODE_BUDGET)
}

/// [`complete_board`] with an explicit node budget.
///
/// # Errors
///
/// Returns [`CompleteError::Unsolvable`] if the board has no completion, or
/// [`CompleteError::BudgetExhausted`] if the search ran out of budget first.
pub fn complete_board_with_budget<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
    budget: usize,
) -> Result<Board, CompleteError> {
    let mut work = board.clone();
    let mut nodes = budget;
    match search(&mut work, rng, &mut nodes) {
        Search::Filled => Ok(work),
        Search::Exhausted => Err(CompleteError::Unsolvable),
        Search::OutOfBudget => Err(CompleteError::BudgetExhausted { budget }),
    }
}

enum Search {
    Filled,
    Exhausted,
    OutOfBudget,
}

fn search<R: Rng + ?Sized>(board: &mut Board, rng: &mut R, nodes: &mut usize) -> Search {
    let Some(cell) = board.first_empty_cell() else {
        return Search::Filled;
    };
    if *nodes == 0 {
        return Search::OutOfBudget;
    }
    *nodes -= 1;

    let mut candidates: CandidateBuf = board.candidates_at(cell).iter().collect();
    candidates.shuffle(rng);
    for value in candidates {
        board.set(cell, value);
        match search(board, rng, nodes) {
            Search::Filled => return Search::Filled,
            Search::Exhausted => board.clear(cell),
            Search::OutOfBudget => {
                board.clear(cell);
                return Search::OutOfBudget;
            }
        }
    }
    Search::Exhausted
}
