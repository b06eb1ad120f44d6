//! Reproducible generation seeds.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed identifying one generated puzzle.
///
/// Every generator entry point draws all of its randomness from a PCG stream
/// derived from a seed, so a seed fully determines the solved board, the
/// removal order, and therefore the puzzle. Seeds display as (and parse from)
/// 64 hexadecimal characters, which makes puzzles shareable and benchmark
/// inputs fixed.
///
/// # Examples
///
/// ```
/// use latinlace_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1".parse()?;
/// assert_eq!(
///     seed.to_string(),
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
/// );
///
/// // Or derive one from a phrase
/// let daily = PuzzleSeed::from_phrase("2026-08-29");
/// assert_eq!(daily, PuzzleSeed::from_phrase("2026-08-29"));
/// # Ok::<(), latinlace_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from `rng`.
    pub fn from_entropy<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0; 32];
        rng.fill(&mut bytes);
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local generator.
    ///
    /// This is the default-randomness boundary: callers that do not care
    /// about reproducibility get a new puzzle every call, yet the seed kept
    /// in the result can replay it.
    #[must_use]
    pub fn fresh() -> Self {
        Self::from_entropy(&mut rand::rng())
    }

    /// Derives a seed from an arbitrary phrase via SHA-256.
    ///
    /// The same phrase always yields the same seed, which is convenient for
    /// date-based daily puzzles and for tests.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the deterministic random stream for this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// An error parsing a [`PuzzleSeed`] from hex.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The input was not exactly 64 characters.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the offending input.
        len: usize,
    },
    /// The input contained a non-hexadecimal character.
    #[display("seed contains a non-hex character")]
    InvalidHexDigit,
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, ParseSeedError> {
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let pair = std::str::from_utf8(pair).map_err(|_| ParseSeedError::InvalidHexDigit)?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| ParseSeedError::InvalidHexDigit)?;
        }
        Ok(Self(bytes))
    }
}
