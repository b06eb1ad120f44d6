//! Board coordinates.

use std::fmt::{self, Display};

/// A (row, column) coordinate on a [`Board`](crate::Board).
///
/// Rows and columns are zero-based. Ordering is row-major: all of row 0 comes
/// before row 1, and so on. This is the scan order used by the solver when it
/// looks for the next empty cell.
///
/// # Examples
///
/// ```
/// use latinlace_core::Cell;
///
/// let cell = Cell::new(2, 5);
/// assert_eq!(cell.row(), 2);
/// assert_eq!(cell.col(), 5);
/// assert!(Cell::new(0, 8) < Cell::new(1, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// Creates a cell coordinate from a row and column index.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the zero-based row index.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the zero-based column index.
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
