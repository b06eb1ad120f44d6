//! A bitmask set of placeable cell values.

use std::{
    fmt::{self, Display},
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

/// The largest value a [`ValueSet`] can hold.
///
/// The engine targets board sizes 4 through 9, so the 16-bit mask leaves
/// ample headroom for oversized boards the primitives still accept.
pub const MAX_VALUE: u8 = 16;

/// A set of cell values in the range `1..=16`, represented as a bitmask.
///
/// Bit `i` represents the value `i + 1`. This is the type returned by
/// [`Board::candidates_at`](crate::Board::candidates_at): the values still
/// legal for an empty cell under row/column uniqueness.
///
/// # Examples
///
/// ```
/// use latinlace_core::ValueSet;
///
/// let mut set = ValueSet::new();
/// set.insert(1);
/// set.insert(5);
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(5));
/// assert!(!set.contains(2));
///
/// // Iteration is in ascending value order
/// let values: Vec<u8> = set.iter().collect();
/// assert_eq!(values, [1, 5]);
/// ```
///
/// # Set operations
///
/// ```
/// use latinlace_core::ValueSet;
///
/// let a = ValueSet::from_iter([1, 2, 3]);
/// let b = ValueSet::from_iter([2, 3, 4]);
///
/// assert_eq!(a | b, ValueSet::from_iter([1, 2, 3, 4]));
/// assert_eq!(a & b, ValueSet::from_iter([2, 3]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValueSet(u16);

impl ValueSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates the set of all values `1..=size`.
    ///
    /// This is the full candidate set for an unconstrained cell on a board of
    /// side length `size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds [`MAX_VALUE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use latinlace_core::ValueSet;
    ///
    /// let set = ValueSet::full(6);
    /// assert_eq!(set.len(), 6);
    /// assert!(set.contains(6));
    /// assert!(!set.contains(7));
    /// ```
    #[must_use]
    pub fn full(size: usize) -> Self {
        assert!(
            size <= MAX_VALUE as usize,
            "board size {size} exceeds the maximum supported value {MAX_VALUE}"
        );
        #[allow(clippy::cast_possible_truncation)]
        Self(((1u32 << size) - 1) as u16)
    }

    /// Inserts a value into the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range `1..=16`.
    pub fn insert(&mut self, value: u8) {
        self.0 |= Self::bit(value);
    }

    /// Removes a value from the set.
    ///
    /// Removing an absent value is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range `1..=16`.
    pub fn remove(&mut self, value: u8) {
        self.0 &= !Self::bit(value);
    }

    /// Returns `true` if the set contains `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range `1..=16`.
    #[must_use]
    pub fn contains(&self, value: u8) -> bool {
        self.0 & Self::bit(value) != 0
    }

    /// Returns the number of values in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns the single value in the set, or `None` if the set does not
    /// contain exactly one value.
    ///
    /// # Examples
    ///
    /// ```
    /// use latinlace_core::ValueSet;
    ///
    /// assert_eq!(ValueSet::from_iter([4]).as_single(), Some(4));
    /// assert_eq!(ValueSet::from_iter([4, 7]).as_single(), None);
    /// assert_eq!(ValueSet::new().as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(&self) -> Option<u8> {
        if self.len() == 1 {
            #[allow(clippy::cast_possible_truncation)]
            Some(self.0.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Returns an iterator over the values in ascending order.
    pub fn iter(&self) -> Iter {
        Iter(self.0)
    }

    fn bit(value: u8) -> u16 {
        assert!(
            (1..=MAX_VALUE).contains(&value),
            "value must be between 1 and {MAX_VALUE}, got {value}"
        );
        1 << (value - 1)
    }
}

impl BitOr for ValueSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ValueSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ValueSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for ValueSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl FromIterator<u8> for ValueSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl IntoIterator for ValueSet {
    type Item = u8;
    type IntoIter = Iter;
    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &ValueSet {
    type Item = u8;
    type IntoIter = Iter;
    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the values of a [`ValueSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let value = self.0.trailing_zeros() as u8 + 1;
        self.0 &= self.0 - 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl Display for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = ValueSet::new();
        assert!(set.is_empty());

        set.insert(1);
        set.insert(9);
        assert!(set.contains(1));
        assert!(set.contains(9));
        assert!(!set.contains(5));
        assert_eq!(set.len(), 2);

        set.remove(1);
        assert!(!set.contains(1));
        assert_eq!(set.len(), 1);

        // Removing an absent value changes nothing
        set.remove(1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_full() {
        for size in 1..=16 {
            let set = ValueSet::full(size);
            assert_eq!(set.len(), size);
            for value in 1..=16u8 {
                assert_eq!(set.contains(value), usize::from(value) <= size);
            }
        }
        assert!(ValueSet::full(0).is_empty());
    }

    #[test]
    #[should_panic(expected = "exceeds the maximum supported value")]
    fn test_full_oversized_panics() {
        let _ = ValueSet::full(17);
    }

    #[test]
    #[should_panic(expected = "value must be between 1 and")]
    fn test_rejects_zero() {
        let mut set = ValueSet::new();
        set.insert(0);
    }

    #[test]
    fn test_iter_ascending() {
        let set = ValueSet::from_iter([7, 2, 16, 4]);
        let values: Vec<u8> = set.iter().collect();
        assert_eq!(values, [2, 4, 7, 16]);
        assert_eq!(set.iter().len(), 4);
    }

    #[test]
    fn test_as_single() {
        assert_eq!(ValueSet::new().as_single(), None);
        assert_eq!(ValueSet::from_iter([3]).as_single(), Some(3));
        assert_eq!(ValueSet::from_iter([3, 4]).as_single(), None);
    }

    #[test]
    fn test_set_operations() {
        let a = ValueSet::from_iter([1, 2, 3]);
        let b = ValueSet::from_iter([2, 3, 4]);
        assert_eq!(a | b, ValueSet::from_iter([1, 2, 3, 4]));
        assert_eq!(a & b, ValueSet::from_iter([2, 3]));
    }

    #[test]
    fn test_display() {
        assert_eq!(ValueSet::new().to_string(), "{}");
        assert_eq!(ValueSet::from_iter([2, 5]).to_string(), "{2, 5}");
    }
}
