//! The game session.

use derive_more::{Display, Error};
use latinlace_core::{Board, Cell};
use latinlace_generator::GeneratedPuzzle;
use latinlace_solver::{StrategySet, solve_with_strategies};

/// The state of one cell during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// No value present.
    #[default]
    Empty,
    /// Part of the initial puzzle; cannot be modified by the player.
    Given(u8),
    /// Entered by the player; can be changed or cleared.
    Filled(u8),
}

impl CellState {
    /// Returns the cell's value, with `0` meaning empty.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Given(value) | Self::Filled(value) => value,
        }
    }

    /// Returns `true` for cells fixed by the puzzle.
    #[must_use]
    pub const fn is_given(self) -> bool {
        matches!(self, Self::Given(_))
    }
}

/// An error applying a player edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The targeted cell is part of the initial puzzle.
    #[display("cell {cell} is a given and cannot be modified")]
    CannotModifyGivenCell {
        /// The targeted cell.
        cell: Cell,
    },
    /// The value is outside the board's `1..=N` range.
    #[display("value {value} is out of range for a board of size {size}")]
    ValueOutOfRange {
        /// The offending value.
        value: u8,
        /// The board side length.
        size: usize,
    },
}

/// A single puzzle play-through.
///
/// Holds the puzzle's given cells, the player's entries, and the solution
/// board kept as the completion reference. Player edits are validated: given
/// cells are immutable, and every placement can be checked for row/column
/// conflicts before or after committing it.
///
/// The session is transient: a new game replaces the whole `Game` value.
///
/// # Examples
///
/// ```
/// use latinlace_core::Cell;
/// use latinlace_game::{Game, GameError};
/// use latinlace_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new(6, Difficulty::Medium).generate();
/// let mut game = Game::new(puzzle);
///
/// let open = game.board().first_empty_cell().unwrap();
/// game.set_value(open, game.solution_value(open))?;
///
/// // Givens are protected
/// let given = game.cells().find(|&cell| game.is_given(cell)).unwrap();
/// assert!(matches!(
///     game.set_value(given, 1),
///     Err(GameError::CannotModifyGivenCell { .. })
/// ));
/// # Ok::<(), latinlace_game::GameError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    size: usize,
    grid: Vec<CellState>,
    solution: Board,
}

impl Game {
    /// Creates a new game from a generated puzzle.
    ///
    /// Every non-empty cell of the problem board becomes a given; the rest
    /// start empty.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            seed: _,
        } = puzzle;
        let size = problem.size();
        let grid = problem
            .cells()
            .map(|cell| match problem.get(cell) {
                0 => CellState::Empty,
                value => CellState::Given(value),
            })
            .collect();
        Self {
            size,
            grid,
            solution,
        }
    }

    /// Returns the board side length.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns an iterator over all cell coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let size = self.size;
        (0..size * size).map(move |index| Cell::new(index / size, index % size))
    }

    /// Returns the state of `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the board.
    #[must_use]
    pub fn cell_state(&self, cell: Cell) -> CellState {
        self.grid[self.index(cell)]
    }

    /// Returns `true` if `cell` is a given.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the board.
    #[must_use]
    pub fn is_given(&self, cell: Cell) -> bool {
        self.cell_state(cell).is_given()
    }

    /// Returns the solution's value at `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the board.
    #[must_use]
    pub fn solution_value(&self, cell: Cell) -> u8 {
        self.solution.get(cell)
    }

    /// Materializes the current play state as a [`Board`].
    ///
    /// Givens and player entries are indistinguishable in the result; use
    /// [`cell_state`](Self::cell_state) when the distinction matters.
    #[must_use]
    pub fn board(&self) -> Board {
        let mut board = Board::empty(self.size);
        for (cell, state) in self.cells().zip(&self.grid) {
            if state.value() != 0 {
                board.set(cell, state.value());
            }
        }
        board
    }

    /// Returns `true` if placing `value` at `cell` would conflict with a
    /// value already on the board.
    ///
    /// Consulted on every player edit; a conflicting placement is still
    /// accepted by [`set_value`](Self::set_value) so the player can see and
    /// fix the mistake, the way the presentation layer expects.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the board.
    #[must_use]
    pub fn placement_conflicts(&self, cell: Cell, value: u8) -> bool {
        !self.board().is_valid_placement(cell, value)
    }

    /// Enters `value` at `cell` as player input.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if `cell` is a given, or
    /// [`GameError::ValueOutOfRange`] if `value` is not in `1..=N`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the board.
    pub fn set_value(&mut self, cell: Cell, value: u8) -> Result<(), GameError> {
        if !(1..=self.size).contains(&usize::from(value)) {
            return Err(GameError::ValueOutOfRange {
                value,
                size: self.size,
            });
        }
        let index = self.checked_index(cell)?;
        self.grid[index] = CellState::Filled(value);
        Ok(())
    }

    /// Clears the player's entry at `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if `cell` is a given.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the board.
    pub fn clear_value(&mut self, cell: Cell) -> Result<(), GameError> {
        let index = self.checked_index(cell)?;
        self.grid[index] = CellState::Empty;
        Ok(())
    }

    /// Returns `true` once every cell is filled and the board is valid.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let board = self.board();
        board.is_filled() && board.is_valid()
    }

    /// Classifies what solving the rest of the puzzle would take from the
    /// current position.
    ///
    /// Returns `None` when the player's entries have made the puzzle
    /// unsolvable (a conflict on the board, or no completion exists) —
    /// the signal a presentation layer uses to offer an undo. The returned
    /// set is an upper bound, like everything produced by
    /// [`solve_with_strategies`].
    #[must_use]
    pub fn remaining_strategies(&self) -> Option<StrategySet> {
        let mut scratch = self.board();
        if !scratch.is_valid() {
            return None;
        }
        let mut used = StrategySet::empty();
        solve_with_strategies(&mut scratch, &mut used).then_some(used)
    }

    fn checked_index(&self, cell: Cell) -> Result<usize, GameError> {
        let index = self.index(cell);
        if self.grid[index].is_given() {
            return Err(GameError::CannotModifyGivenCell { cell });
        }
        Ok(index)
    }

    fn index(&self, cell: Cell) -> usize {
        let (row, col) = (cell.row(), cell.col());
        assert!(
            row < self.size && col < self.size,
            "cell {cell} is outside the board"
        );
        row * self.size + col
    }
}
