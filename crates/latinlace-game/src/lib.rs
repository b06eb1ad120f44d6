//! Game-session layer for latinlace puzzles.
//!
//! Tracks given (initial) cells separately from player input and runs the
//! core validity predicates on every edit. This is the engine-facing slice of
//! a game: rendering, highlighting, timers, and input routing live elsewhere
//! and call into this crate.
//!
//! # Examples
//!
//! ```
//! use latinlace_core::Cell;
//! use latinlace_game::Game;
//! use latinlace_generator::{Difficulty, PuzzleGenerator};
//!
//! let puzzle = PuzzleGenerator::new(6, Difficulty::Easy).generate();
//! let mut game = Game::new(puzzle);
//!
//! // Fill the first open cell with its solution value
//! let cell = game.board().first_empty_cell().unwrap();
//! let value = game.solution_value(cell);
//! game.set_value(cell, value)?;
//! assert_eq!(game.board().get(cell), value);
//! # Ok::<(), latinlace_game::GameError>(())
//! ```

pub mod game;

pub use self::game::{CellState, Game, GameError};
