//! Solving-strategy classification.

use std::fmt::{self, Display};

use bitflags::bitflags;

/// A solving technique exercised while searching for a solution.
///
/// Strategies classify how hard a solve attempt could get: a cell with exactly
/// one candidate is a forced placement, a cell with several candidates needs
/// search. The tags feed the generator's strategy-bounded removal path, which
/// refuses removals that would push a puzzle past its difficulty's allowed
/// set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// A cell with exactly one remaining candidate; placement is forced.
    NakedSingle,
    /// A cell with multiple candidates, requiring trial and backtracking.
    Backtracking,
    /// Reserved for techniques beyond the two above.
    ///
    /// No solver path emits this tag; it exists so hard-difficulty strategy
    /// sets can admit it once such techniques are implemented.
    Advanced,
}

impl Strategy {
    /// All strategies, in ascending order of difficulty.
    pub const ALL: [Self; 3] = [Self::NakedSingle, Self::Backtracking, Self::Advanced];

    /// Returns the human-readable strategy name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NakedSingle => "naked single",
            Self::Backtracking => "backtracking",
            Self::Advanced => "advanced",
        }
    }

    /// Returns the single-strategy [`StrategySet`] for this tag.
    #[must_use]
    pub const fn as_set(self) -> StrategySet {
        match self {
            Self::NakedSingle => StrategySet::NAKED_SINGLE,
            Self::Backtracking => StrategySet::BACKTRACKING,
            Self::Advanced => StrategySet::ADVANCED,
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of [`Strategy`] tags.
    ///
    /// Accumulated by [`solve_with_strategies`](crate::solve_with_strategies)
    /// across a whole solve attempt: once a tag is inserted for any visited
    /// cell it stays in the set even if that cell's placement is later
    /// backtracked. The set is therefore an upper bound on the techniques a
    /// solution requires, not the minimal sequence of the solution found.
    ///
    /// # Examples
    ///
    /// ```
    /// use latinlace_solver::{Strategy, StrategySet};
    ///
    /// let allowed = StrategySet::NAKED_SINGLE | StrategySet::BACKTRACKING;
    /// assert!(allowed.contains(Strategy::NakedSingle.as_set()));
    /// assert!(!allowed.contains(StrategySet::ADVANCED));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StrategySet: u8 {
        /// See [`Strategy::NakedSingle`].
        const NAKED_SINGLE = 1;
        /// See [`Strategy::Backtracking`].
        const BACKTRACKING = 1 << 1;
        /// See [`Strategy::Advanced`].
        const ADVANCED = 1 << 2;
    }
}

impl StrategySet {
    /// Returns an iterator over the individual strategies in the set, in
    /// ascending order of difficulty.
    pub fn strategies(self) -> impl Iterator<Item = Strategy> {
        Strategy::ALL
            .into_iter()
            .filter(move |strategy| self.contains(strategy.as_set()))
    }
}

impl Display for StrategySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, strategy) in self.strategies().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{strategy}")?;
        }
        write!(f, "}}")
    }
}

impl From<Strategy> for StrategySet {
    fn from(strategy: Strategy) -> Self {
        strategy.as_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_set_round_trip() {
        for strategy in Strategy::ALL {
            let set = strategy.as_set();
            assert_eq!(set.strategies().collect::<Vec<_>>(), [strategy]);
        }
    }

    #[test]
    fn test_subset_check() {
        let allowed = StrategySet::NAKED_SINGLE | StrategySet::BACKTRACKING;
        assert!(allowed.contains(StrategySet::NAKED_SINGLE));
        assert!(allowed.contains(StrategySet::NAKED_SINGLE | StrategySet::BACKTRACKING));
        assert!(!allowed.contains(StrategySet::ADVANCED));
        assert!(StrategySet::all().contains(allowed));
    }

    #[test]
    fn test_display() {
        assert_eq!(StrategySet::empty().to_string(), "{}");
        assert_eq!(
            (StrategySet::NAKED_SINGLE | StrategySet::BACKTRACKING).to_string(),
            "{naked single, backtracking}"
        );
        assert_eq!(Strategy::Advanced.to_string(), "advanced");
    }
}
