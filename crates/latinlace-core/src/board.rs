//! The square board grid and its validity predicates.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{
    Cell,
    value_set::{MAX_VALUE, ValueSet},
};

/// A square grid of cell values with row/column uniqueness semantics.
///
/// A board of side length `N` holds `N²` cells. A cell value of `0` means the
/// cell is empty; non-zero values are placed. Play uses `1..=N`, but values
/// are stored opaquely: nothing above the side length is rejected, and the
/// uniqueness predicates compare values without interpreting them. The board
/// is *valid* when no non-zero value repeats within any row or any column.
/// There is no box/region constraint.
///
/// The primitive is size-agnostic: any side length is accepted, including
/// degenerate sizes below the 4–9 range the engine targets and oversized
/// boards above it. Validity is vacuously true for an empty (zero-size)
/// board.
///
/// Cloning produces a deep, independent copy; the solver mutates boards in
/// place and snapshots are taken by cloning.
///
/// # Text format
///
/// Boards parse from and display as whitespace-separated rows, with `_` (or
/// `0`) marking empty cells:
///
/// ```
/// use latinlace_core::Board;
///
/// let board: Board = "
///     1 2 3 4
///     _ _ _ _
///     _ _ _ _
///     _ _ _ _
/// "
/// .parse()?;
///
/// assert_eq!(board.size(), 4);
/// assert!(board.is_valid());
/// # Ok::<(), latinlace_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<u8>,
}

impl Board {
    /// Creates an empty board of the given side length.
    ///
    /// Every cell starts at `0`. No size validation is applied; callers
    /// wanting the playable 4–9 range enforce it themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// use latinlace_core::Board;
    ///
    /// let board = Board::empty(6);
    /// assert_eq!(board.size(), 6);
    /// assert_eq!(board.count_empty(), 36);
    /// ```
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Returns the side length of the board.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the value at `cell`, with `0` meaning empty.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the board.
    #[must_use]
    pub fn get(&self, cell: Cell) -> u8 {
        self.cells[self.index(cell)]
    }

    /// Places `value` at `cell`, overwriting any previous value.
    ///
    /// The value is stored as-is; values above the board size are accepted
    /// and treated opaquely by the uniqueness predicates.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the board.
    pub fn set(&mut self, cell: Cell, value: u8) {
        let index = self.index(cell);
        self.cells[index] = value;
    }

    /// Resets `cell` to empty.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the board.
    pub fn clear(&mut self, cell: Cell) {
        let index = self.index(cell);
        self.cells[index] = 0;
    }

    /// Returns `true` if placing `value` at `cell` would not duplicate a
    /// value already present in that row or column.
    ///
    /// The whole row and column are scanned, including `cell` itself: if the
    /// target cell already holds `value`, the placement is rejected. The
    /// predicate does not check whether the target cell is empty; that is the
    /// caller's concern.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use latinlace_core::{Board, Cell};
    ///
    /// let board: Board = "
    ///     1 2 3 4 5 6
    ///     _ _ _ _ _ _
    ///     _ _ _ _ _ _
    ///     _ _ _ _ _ _
    ///     _ _ _ _ _ _
    ///     _ _ _ _ _ _
    /// "
    /// .parse()?;
    ///
    /// // Column 0 has no 2 yet
    /// assert!(board.is_valid_placement(Cell::new(1, 0), 2));
    /// // Row 0 already has a 1
    /// assert!(!board.is_valid_placement(Cell::new(0, 0), 1));
    /// // Column 0 already has a 1, placed at row 0
    /// assert!(!board.is_valid_placement(Cell::new(1, 0), 1));
    /// # Ok::<(), latinlace_core::ParseBoardError>(())
    /// ```
    #[must_use]
    pub fn is_valid_placement(&self, cell: Cell, value: u8) -> bool {
        let (row, col) = (cell.row(), cell.col());
        assert!(row < self.size && col < self.size, "cell {cell} is outside the board");
        for i in 0..self.size {
            if self.cells[row * self.size + i] == value {
                return false;
            }
            if self.cells[i * self.size + col] == value {
                return false;
            }
        }
        true
    }

    /// Returns `true` if no non-zero value repeats within any row or column.
    ///
    /// Empty cells never conflict, so a fully or partially empty board is
    /// valid. A zero-size board is vacuously valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use latinlace_core::Board;
    ///
    /// let board: Board = "
    ///     1 2
    ///     2 1
    /// "
    /// .parse()?;
    /// assert!(board.is_valid());
    ///
    /// let duplicate: Board = "
    ///     1 1
    ///     _ _
    /// "
    /// .parse()?;
    /// assert!(!duplicate.is_valid());
    /// # Ok::<(), latinlace_core::ParseBoardError>(())
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        // Indexed by raw cell value; values are opaque and may exceed the
        // board size, so a fixed u8-wide table is used instead of ValueSet.
        for i in 0..self.size {
            let mut row_seen = [false; 1 + u8::MAX as usize];
            let mut col_seen = [false; 1 + u8::MAX as usize];
            for j in 0..self.size {
                let row_value = self.cells[i * self.size + j];
                if row_value != 0 {
                    if row_seen[usize::from(row_value)] {
                        return false;
                    }
                    row_seen[usize::from(row_value)] = true;
                }
                let col_value = self.cells[j * self.size + i];
                if col_value != 0 {
                    if col_seen[usize::from(col_value)] {
                        return false;
                    }
                    col_seen[usize::from(col_value)] = true;
                }
            }
        }
        true
    }

    /// Returns the first empty cell in row-major scan order, or `None` if the
    /// board is completely filled.
    #[must_use]
    pub fn first_empty_cell(&self) -> Option<Cell> {
        self.cells
            .iter()
            .position(|&value| value == 0)
            .map(|index| Cell::new(index / self.size, index % self.size))
    }

    /// Returns the set of values currently legal for `cell` under
    /// row/column uniqueness.
    ///
    /// The set is recomputed on every call; candidate state changes as the
    /// solver places and retracts values, so nothing is cached. The cell's
    /// own value does not exclude itself from conflicting, matching
    /// [`is_valid_placement`](Self::is_valid_placement).
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the board, or if the board side length
    /// exceeds [`MAX_VALUE`](crate::value_set::MAX_VALUE) (the candidate set
    /// cannot represent values beyond it; the playable 4–9 range is well
    /// within the limit).
    #[must_use]
    pub fn candidates_at(&self, cell: Cell) -> ValueSet {
        let (row, col) = (cell.row(), cell.col());
        assert!(row < self.size && col < self.size, "cell {cell} is outside the board");
        let mut candidates = ValueSet::full(self.size);
        for i in 0..self.size {
            // Values above MAX_VALUE cannot be candidates, so they never
            // need removing
            let row_value = self.cells[row * self.size + i];
            if row_value != 0 && row_value <= MAX_VALUE {
                candidates.remove(row_value);
            }
            let col_value = self.cells[i * self.size + col];
            if col_value != 0 && col_value <= MAX_VALUE {
                candidates.remove(col_value);
            }
        }
        candidates
    }

    /// Returns an iterator over all cell coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let size = self.size;
        (0..size * size).map(move |index| Cell::new(index / size, index % size))
    }

    /// Returns an iterator over the coordinates of all empty cells in
    /// row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + use<'_> {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value == 0)
            .map(move |(index, _)| Cell::new(index / size, index % size))
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&value| value == 0).count()
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    fn index(&self, cell: Cell) -> usize {
        let (row, col) = (cell.row(), cell.col());
        assert!(row < self.size && col < self.size, "cell {cell} is outside the board");
        row * self.size + col
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.cells[row * self.size + col] {
                    0 => write!(f, "_")?,
                    value => write!(f, "{value}")?,
                }
            }
        }
        Ok(())
    }
}

/// An error parsing a [`Board`] from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// A cell token was neither `_` nor an integer.
    #[display("invalid cell token: {token:?}")]
    InvalidToken {
        /// The offending token.
        token: String,
    },
    /// The grid was not square.
    #[display("board is not square: {rows} rows but row {row} has {cols} cells")]
    NotSquare {
        /// Total number of rows.
        rows: usize,
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of cells in the offending row.
        cols: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, ParseBoardError> {
        let rows: Vec<Vec<u8>> = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|token| match token {
                        "_" => Ok(0),
                        _ => token.parse::<u8>().map_err(|_| ParseBoardError::InvalidToken {
                            token: token.to_owned(),
                        }),
                    })
                    .collect()
            })
            .collect::<Result<_, _>>()?;

        let size = rows.len();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(ParseBoardError::NotSquare {
                    rows: size,
                    row,
                    cols: values.len(),
                });
            }
        }

        let mut board = Self::empty(size);
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                board.set(Cell::new(row, col), value);
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_is_all_zeros() {
        for size in 4..=9 {
            let board = Board::empty(size);
            assert_eq!(board.size(), size);
            assert_eq!(board.count_empty(), size * size);
            assert!(board.cells().all(|cell| board.get(cell) == 0));
        }
    }

    #[test]
    fn test_zero_size_board_is_vacuously_valid() {
        let board = Board::empty(0);
        assert!(board.is_valid());
        assert!(board.is_filled());
        assert_eq!(board.first_empty_cell(), None);
    }

    #[test]
    fn test_degenerate_two_by_two_is_valid() {
        // Sizes below the playable 4-9 range are accepted as-is
        let board: Board = "
            1 2
            _ 1
        "
        .parse()
        .unwrap();
        assert!(board.is_valid());
    }

    #[test]
    fn test_set_get_clear() {
        let mut board = Board::empty(4);
        let cell = Cell::new(2, 3);
        board.set(cell, 4);
        assert_eq!(board.get(cell), 4);
        board.clear(cell);
        assert_eq!(board.get(cell), 0);
    }

    #[test]
    fn test_oversized_board_is_accepted() {
        // No size validation: side lengths above the playable range work
        let mut board = Board::empty(17);
        assert_eq!(board.size(), 17);
        assert_eq!(board.count_empty(), 17 * 17);

        board.set(Cell::new(0, 0), 17);
        assert!(board.is_valid());
        assert!(!board.is_valid_placement(Cell::new(0, 16), 17));
        assert_eq!(board.first_empty_cell(), Some(Cell::new(0, 1)));
    }

    #[test]
    fn test_values_above_board_size_are_opaque() {
        // A 2x2 grid holding 3 and 4 is a legal, valid board
        let board: Board = "
            1 2
            3 4
        "
        .parse()
        .unwrap();
        assert!(board.is_valid());
        assert!(board.is_filled());

        // Uniqueness still applies to oversized values
        let mut dup = Board::empty(2);
        dup.set(Cell::new(0, 0), 9);
        dup.set(Cell::new(0, 1), 9);
        assert!(!dup.is_valid());
    }

    #[test]
    fn test_placement_scenario_from_partial_row() {
        // Row 0 fully placed, rest empty
        let board: Board = "
            1 2 3 4 5 6
            _ _ _ _ _ _
            _ _ _ _ _ _
            _ _ _ _ _ _
            _ _ _ _ _ _
            _ _ _ _ _ _
        "
        .parse()
        .unwrap();

        // Column 0 has no 2 yet
        assert!(board.is_valid_placement(Cell::new(1, 0), 2));
        // Row 0 already contains a 1 (at the target cell itself)
        assert!(!board.is_valid_placement(Cell::new(0, 0), 1));
        // Column 0 already contains a 1, placed at row 0
        assert!(!board.is_valid_placement(Cell::new(1, 0), 1));
    }

    #[test]
    fn test_is_valid_detects_row_and_column_duplicates() {
        let row_dup: Board = "
            1 _ 1 _
            _ _ _ _
            _ _ _ _
            _ _ _ _
        "
        .parse()
        .unwrap();
        assert!(!row_dup.is_valid());

        let col_dup: Board = "
            2 _ _ _
            _ _ _ _
            2 _ _ _
            _ _ _ _
        "
        .parse()
        .unwrap();
        assert!(!col_dup.is_valid());

        // A complete latin square is valid without any box constraint
        let latin: Board = "
            1 2 3 4
            2 3 4 1
            3 4 1 2
            4 1 2 3
        "
        .parse()
        .unwrap();
        assert!(latin.is_valid());
    }

    #[test]
    fn test_first_empty_cell_row_major() {
        let board: Board = "
            1 2 3 4
            4 3 _ 1
            _ _ _ _
            _ _ _ _
        "
        .parse()
        .unwrap();
        assert_eq!(board.first_empty_cell(), Some(Cell::new(1, 2)));

        let full: Board = "
            1 2
            2 1
        "
        .parse()
        .unwrap();
        assert_eq!(full.first_empty_cell(), None);
    }

    #[test]
    fn test_candidates_at() {
        let board: Board = "
            1 2 3 4 5 6
            2 _ _ _ _ _
            _ _ _ _ _ _
            _ _ _ _ _ _
            _ _ _ _ _ _
            _ _ _ _ _ _
        "
        .parse()
        .unwrap();

        // Row 1 holds 2; column 1 holds 2 (row 0)
        let candidates = board.candidates_at(Cell::new(1, 1));
        assert_eq!(candidates, ValueSet::from_iter([1, 3, 4, 5, 6]));

        // Column 5 holds 6 (row 0); row 5 is empty
        let open = board.candidates_at(Cell::new(5, 5));
        assert_eq!(open, ValueSet::from_iter([1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_empty_cells_iteration() {
        let board: Board = "
            1 2 3 4
            _ 3 _ 1
            _ _ _ _
            4 1 2 3
        "
        .parse()
        .unwrap();
        let empties: Vec<Cell> = board.empty_cells().collect();
        assert_eq!(empties.len(), board.count_empty());
        assert_eq!(empties[0], Cell::new(1, 0));
        assert!(empties.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = Board::empty(4);
        let snapshot = original.clone();
        original.set(Cell::new(0, 0), 1);
        assert_eq!(snapshot.get(Cell::new(0, 0)), 0);
    }

    #[test]
    fn test_display_round_trip() {
        let board: Board = "
            1 _ 3 4
            _ _ _ _
            3 4 1 2
            _ 1 _ _
        "
        .parse()
        .unwrap();
        let reparsed: Board = board.to_string().parse().unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "x".parse::<Board>(),
            Err(ParseBoardError::InvalidToken {
                token: "x".to_owned()
            })
        );
        assert_eq!(
            "1 2\n1".parse::<Board>(),
            Err(ParseBoardError::NotSquare {
                rows: 2,
                row: 1,
                cols: 1
            })
        );
        // Tokens that overflow a cell value are invalid, but values above
        // the board size are not
        assert_eq!(
            "300".parse::<Board>(),
            Err(ParseBoardError::InvalidToken {
                token: "300".to_owned()
            })
        );
        assert!("3 _\n_ _".parse::<Board>().is_ok());
        // Empty input parses as the zero-size board
        assert_eq!("".parse::<Board>(), Ok(Board::empty(0)));
    }

    proptest! {
        #[test]
        fn prop_validity_is_idempotent_and_pure(size in 4usize..=9, seed_values in prop::collection::vec(0u8..=9, 81)) {
            let mut board = Board::empty(size);
            for (index, cell) in board.cells().collect::<Vec<_>>().into_iter().enumerate() {
                let value = seed_values[index % seed_values.len()] % u8::try_from(size + 1).unwrap();
                board.set(cell, value);
            }
            let snapshot = board.clone();
            let first = board.is_valid();
            let second = board.is_valid();
            // Deterministic and side-effect-free
            prop_assert_eq!(first, second);
            prop_assert_eq!(board, snapshot);
        }

        #[test]
        fn prop_candidates_match_placement_predicate(size in 4usize..=9, row in 0usize..9, col in 0usize..9, value in 1u8..=9) {
            let row = row % size;
            let col = col % size;
            let value = (value - 1) % u8::try_from(size).unwrap() + 1;
            let mut board = Board::empty(size);
            // Scatter a couple of fixed placements
            board.set(Cell::new(0, 0), 1);
            if size > 1 {
                board.set(Cell::new(1, 1), 2);
            }
            let candidates = board.candidates_at(Cell::new(row, col));
            prop_assert_eq!(
                candidates.contains(value),
                board.is_valid_placement(Cell::new(row, col), value)
            );
        }
    }
}
