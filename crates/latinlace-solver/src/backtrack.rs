//! Recursive depth-first search over empty cells.

use latinlace_core::Board;
use rand::{Rng, seq::SliceRandom};
use tinyvec::ArrayVec;

use crate::strategy::StrategySet;

/// Candidate buffer sized for the largest representable board.
pub(crate) type CandidateBuf = ArrayVec<[u8; 16]>;

/// Fills every empty cell of `board` with a randomly chosen complete
/// assignment, returning `true` on success.
///
/// At each empty cell (row-major order) the legal candidates are shuffled and
/// tried in turn; a placement that leads nowhere is retracted and the next
/// candidate is tried. The shuffled order is what gives generation variety
/// across calls — this is "first complete assignment found under random
/// ordering", not a uniqueness-seeking search.
///
/// On `false` the board is restored to exactly its pre-call layout: every
/// placement attempted during the failed search has been undone. A board with
/// no empty cells trivially succeeds.
///
/// # Examples
///
/// ```
/// use latinlace_core::Board;
/// use latinlace_solver::fill_board;
///
/// let mut board = Board::empty(5);
/// assert!(fill_board(&mut board, &mut rand::rng()));
/// assert!(board.is_filled());
/// assert!(board.is_valid());
/// ```
pub fn fill_board<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> bool {
    let Some(cell) = board.first_empty_cell() else {
        return true;
    };
    let mut candidates: CandidateBuf = board.candidates_at(cell).iter().collect();
    candidates.shuffle(rng);
    for value in candidates {
        board.set(cell, value);
        if fill_board(board, rng) {
            return true;
        }
        board.clear(cell);
    }
    false
}

/// Solves `board` in place, recording which strategies the search exercised.
///
/// The search is identical to [`fill_board`] except that candidates are tried
/// in ascending numeric order (determinism is irrelevant here, only
/// termination) and each visited cell is classified before recursing: exactly
/// one candidate inserts [`StrategySet::NAKED_SINGLE`], more than one inserts
/// [`StrategySet::BACKTRACKING`] into `used`.
///
/// Tags accumulate across the whole attempt and are never cleared when a
/// branch is backtracked, so `used` is an upper bound on the techniques a
/// solution requires — it characterizes how hard solving could get, not the
/// minimal technique sequence of the solution found. The strategy-bounded
/// removal path depends on this upper-bound reading.
///
/// Returns `false` if no solution exists; the board is then restored to its
/// pre-call layout (`used` keeps whatever tags the failed search inserted).
///
/// # Examples
///
/// ```
/// use latinlace_core::Board;
/// use latinlace_solver::{StrategySet, solve_with_strategies};
///
/// let mut board: Board = "
///     1 2 3 _
///     2 3 4 1
///     3 4 1 2
///     4 1 2 3
/// "
/// .parse()?;
///
/// let mut used = StrategySet::empty();
/// assert!(solve_with_strategies(&mut board, &mut used));
/// assert_eq!(used, StrategySet::NAKED_SINGLE);
/// # Ok::<(), latinlace_core::ParseBoardError>(())
/// ```
pub fn solve_with_strategies(board: &mut Board, used: &mut StrategySet) -> bool {
    let Some(cell) = board.first_empty_cell() else {
        return true;
    };
    let candidates = board.candidates_at(cell);
    match candidates.len() {
        0 => return false,
        1 => used.insert(StrategySet::NAKED_SINGLE),
        _ => used.insert(StrategySet::BACKTRACKING),
    }
    for value in candidates {
        board.set(cell, value);
        if solve_with_strategies(board, used) {
            return true;
        }
        board.clear(cell);
    }
    false
}

/// Returns `true` if `board` has at least one solution.
///
/// Runs [`solve_with_strategies`] on a scratch copy with a fresh accumulator;
/// the accumulated strategies are discarded. `board` itself is never touched.
#[must_use]
pub fn is_solvable(board: &Board) -> bool {
    let mut scratch = board.clone();
    let mut used = StrategySet::empty();
    solve_with_strategies(&mut scratch, &mut used)
}
