//! Cell removal with solvability re-checking.

use latinlace_core::{Board, Cell};
use latinlace_solver::{StrategySet, solve_with_strategies};
use log::{debug, trace};
use rand::{Rng, seq::SliceRandom};

use crate::difficulty::Difficulty;

/// Default global attempt cap for the strategy-bounded removal path.
///
/// Deliberately much lower than the `2·N²` budget of [`remove_numbers`]:
/// every strategy-bounded attempt runs a classifying solve, and the path
/// trades removal depth for its technique guarantee.
pub const DEFAULT_STRATEGIC_ATTEMPTS: usize = 60;

/// Removal attempts allowed per cell in the strategy-bounded path.
const MAX_ATTEMPTS_PER_CELL: usize = 3;

/// Produces a puzzle by removing cells from `board` while it stays solvable.
///
/// Coordinates are shuffled and tried one at a time: zero the cell, re-check
/// solvability on a scratch copy with a fresh strategy accumulator (the
/// accumulated strategies are not inspected here; only existence of a
/// solution matters), and restore the value if the puzzle died. The loop
/// stops once `⌊N² · fraction⌋` cells are empty, the coordinates are
/// exhausted, or `2·N²` solvability checks have been spent — bounding
/// worst-case work to a linear number of solver invocations.
///
/// The removal target can be under-shot when the budget runs out first, but
/// is never overshot. Cells that are already empty are skipped without
/// counting as removals or attempts.
///
/// # Examples
///
/// ```
/// use latinlace_generator::{Difficulty, generate_board, remove_numbers};
/// use latinlace_solver::is_solvable;
///
/// let mut rng = rand::rng();
/// let solution = generate_board(6, &mut rng);
/// let puzzle = remove_numbers(&solution, Difficulty::Easy, &mut rng);
///
/// assert!(puzzle.is_valid());
/// assert!(is_solvable(&puzzle));
/// assert!(puzzle.count_empty() <= Difficulty::Easy.target_empty(6));
/// ```
pub fn remove_numbers<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Board {
    let size = board.size();
    let target = difficulty.target_empty(size);
    let max_attempts = 2 * size * size;

    let mut puzzle = board.clone();
    let mut coords: Vec<Cell> = puzzle.cells().collect();
    coords.shuffle(rng);

    let mut removed = 0;
    let mut attempts = 0;
    while removed < target && attempts < max_attempts {
        let Some(cell) = coords.pop() else { break };
        let value = puzzle.get(cell);
        if value == 0 {
            continue;
        }
        attempts += 1;
        puzzle.clear(cell);
        if is_still_solvable(&puzzle) {
            removed += 1;
            trace!("removed {value} at {cell} ({removed}/{target})");
        } else {
            puzzle.set(cell, value);
            trace!("kept {value} at {cell}: removal breaks solvability");
        }
    }
    debug!(
        "removal done: {removed}/{target} cells emptied in {attempts} attempts ({difficulty}, size {size})"
    );
    puzzle
}

/// Produces a puzzle whose solve never requires a strategy outside `allowed`.
///
/// Same shuffle-and-trial structure as [`remove_numbers`], but each tentative
/// removal must leave the puzzle both solvable *and* classified entirely
/// within `allowed` — the puzzle must not require a harder technique than the
/// difficulty permits. Since the accumulated strategy set is an upper bound,
/// the guarantee errs on the conservative side.
///
/// Each cell is retried up to 3 times before being given up on, and a global
/// cap of [`DEFAULT_STRATEGIC_ATTEMPTS`] attempts bounds total work
/// independent of board size.
pub fn remove_numbers_strategically<R: Rng + ?Sized>(
    board: &Board,
    allowed: StrategySet,
    difficulty: Difficulty,
    rng: &mut R,
) -> Board {
    remove_numbers_strategically_with_budget(
        board,
        allowed,
        difficulty,
        DEFAULT_STRATEGIC_ATTEMPTS,
        rng,
    )
}

/// [`remove_numbers_strategically`] with an explicit global attempt cap.
pub fn remove_numbers_strategically_with_budget<R: Rng + ?Sized>(
    board: &Board,
    allowed: StrategySet,
    difficulty: Difficulty,
    max_attempts: usize,
    rng: &mut R,
) -> Board {
    let size = board.size();
    let target = difficulty.target_empty(size);

    let mut puzzle = board.clone();
    let mut coords: Vec<Cell> = puzzle.cells().collect();
    coords.shuffle(rng);

    let mut removed = 0;
    let mut attempts = 0;
    'cells: while removed < target && attempts < max_attempts {
        let Some(cell) = coords.pop() else { break };
        let value = puzzle.get(cell);
        if value == 0 {
            continue;
        }
        for _ in 0..MAX_ATTEMPTS_PER_CELL {
            if attempts >= max_attempts {
                break 'cells;
            }
            attempts += 1;
            puzzle.clear(cell);
            let mut scratch = puzzle.clone();
            let mut used = StrategySet::empty();
            let solvable = solve_with_strategies(&mut scratch, &mut used);
            if solvable && allowed.contains(used) {
                removed += 1;
                trace!("removed {value} at {cell} using {used} ({removed}/{target})");
                continue 'cells;
            }
            puzzle.set(cell, value);
            trace!("kept {value} at {cell}: solve needs {used}, allowed {allowed}");
        }
    }
    debug!(
        "strategic removal done: {removed}/{target} cells emptied in {attempts} attempts (allowed {allowed}, size {size})"
    );
    puzzle
}

fn is_still_solvable(puzzle: &Board) -> bool {
    let mut scratch = puzzle.clone();
    let mut used = StrategySet::empty();
    solve_with_strategies(&mut scratch, &mut used)
}
