//! Core data structures for the latinlace puzzle engine.
//!
//! This crate provides the board primitive shared by the solving, generation,
//! and game-session components. Boards are square grids of small integers where
//! `0` marks an empty cell and `1..=N` mark placed values. The only constraint
//! is uniqueness within each row and each column; there is no box/region
//! concept.
//!
//! # Overview
//!
//! - [`board`]: the [`Board`] grid with validity predicates, candidate lookup,
//!   and a whitespace text format for parsing and display
//! - [`cell`]: the [`Cell`] (row, column) coordinate pair
//! - [`value_set`]: the [`ValueSet`] bitmask set of placeable values
//!
//! # Examples
//!
//! ```
//! use latinlace_core::{Board, Cell};
//!
//! let mut board = Board::empty(6);
//! board.set(Cell::new(0, 0), 3);
//!
//! // 3 now conflicts along row 0 and column 0
//! assert!(!board.is_valid_placement(Cell::new(0, 5), 3));
//! assert!(!board.is_valid_placement(Cell::new(5, 0), 3));
//! assert!(board.is_valid_placement(Cell::new(1, 1), 3));
//! ```

pub mod board;
pub mod cell;
pub mod value_set;

pub use self::{
    board::{Board, ParseBoardError},
    cell::Cell,
    value_set::ValueSet,
};
