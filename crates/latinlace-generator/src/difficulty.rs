//! Difficulty levels and their removal parameters.

use std::fmt::{self, Display};

use latinlace_solver::StrategySet;

/// A puzzle difficulty level.
///
/// Each level maps to two removal parameters: the target fraction of cells to
/// leave empty, and the set of solving strategies a puzzle of this difficulty
/// is allowed to require (used only by the strategy-bounded removal path).
///
/// # Examples
///
/// ```
/// use latinlace_generator::Difficulty;
/// use latinlace_solver::StrategySet;
///
/// assert_eq!(Difficulty::Easy.empty_fraction(), 0.40);
/// assert_eq!(Difficulty::Easy.allowed_strategies(), StrategySet::NAKED_SINGLE);
/// assert_eq!(Difficulty::Hard.allowed_strategies(), StrategySet::all());
///
/// // Targets floor to whole cells: 60% of a 6×6 board
/// assert_eq!(Difficulty::Medium.target_empty(6), 21);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// 40% of cells removed; only forced placements required.
    #[default]
    Easy,
    /// 60% of cells removed; search may be required.
    Medium,
    /// 75% of cells removed; every strategy is allowed.
    Hard,
}

impl Difficulty {
    /// All difficulty levels, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the target fraction of cells to leave empty.
    #[must_use]
    pub const fn empty_fraction(self) -> f64 {
        match self {
            Self::Easy => 0.40,
            Self::Medium => 0.60,
            Self::Hard => 0.75,
        }
    }

    /// Returns the strategies a puzzle of this difficulty may require.
    ///
    /// Hard admits [`StrategySet::ADVANCED`] even though no solver path emits
    /// it yet; the tag is reserved for future techniques.
    #[must_use]
    pub const fn allowed_strategies(self) -> StrategySet {
        match self {
            Self::Easy => StrategySet::NAKED_SINGLE,
            Self::Medium => StrategySet::NAKED_SINGLE.union(StrategySet::BACKTRACKING),
            Self::Hard => StrategySet::all(),
        }
    }

    /// Returns the number of cells to empty on a board of side length `size`,
    /// `⌊size² · fraction⌋`.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn target_empty(self, size: usize) -> usize {
        ((size * size) as f64 * self.empty_fraction()).floor() as usize
    }

    /// Parses a difficulty from its name, case-insensitively.
    ///
    /// Unrecognized names fall back to [`Difficulty::Easy`] rather than
    /// failing; difficulty selection is never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use latinlace_generator::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_name("HARD"), Difficulty::Hard);
    /// assert_eq!(Difficulty::from_name("nightmare"), Difficulty::Easy);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    /// Returns the lowercase level name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractions() {
        assert_eq!(Difficulty::Easy.empty_fraction(), 0.40);
        assert_eq!(Difficulty::Medium.empty_fraction(), 0.60);
        assert_eq!(Difficulty::Hard.empty_fraction(), 0.75);
    }

    #[test]
    fn test_target_empty_floors() {
        // 36 cells: 14.4 / 21.6 / 27.0
        assert_eq!(Difficulty::Easy.target_empty(6), 14);
        assert_eq!(Difficulty::Medium.target_empty(6), 21);
        assert_eq!(Difficulty::Hard.target_empty(6), 27);
        // 81 cells: 32.4 / 48.6 / 60.75
        assert_eq!(Difficulty::Easy.target_empty(9), 32);
        assert_eq!(Difficulty::Medium.target_empty(9), 48);
        assert_eq!(Difficulty::Hard.target_empty(9), 60);
    }

    #[test]
    fn test_allowed_strategies_are_nested() {
        assert!(
            Difficulty::Medium
                .allowed_strategies()
                .contains(Difficulty::Easy.allowed_strategies())
        );
        assert!(
            Difficulty::Hard
                .allowed_strategies()
                .contains(Difficulty::Medium.allowed_strategies())
        );
        assert!(
            Difficulty::Hard
                .allowed_strategies()
                .contains(StrategySet::ADVANCED)
        );
    }

    #[test]
    fn test_from_name_falls_back_to_easy() {
        assert_eq!(Difficulty::from_name("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("Medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name("HARD"), Difficulty::Hard);
        assert_eq!(Difficulty::from_name(""), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("impossible"), Difficulty::Easy);
    }
}
