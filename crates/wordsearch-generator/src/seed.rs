use std::{
    fmt::{self, Display},
    str::FromStr,
};

use sha2::{Digest as _, Sha256};

/// Errors returned when parsing a [`GridSeed`] from hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Number of characters supplied.
        len: usize,
    },
    /// The input contains a non-hex character.
    #[display("invalid hex character {ch:?} at offset {offset}")]
    InvalidHexDigit {
        /// The rejected character.
        ch: char,
        /// Character offset of the rejected character.
        offset: usize,
    },
}

/// A 256-bit seed that deterministically reproduces a generated grid.
///
/// Seeds are written as 64 lowercase hex characters. A seed can also be derived
/// from any phrase, which is handy for naming levels ("level-3") instead of
/// copying hex around.
///
/// # Examples
///
/// ```
/// use wordsearch_generator::GridSeed;
///
/// let seed: GridSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()
///     .unwrap();
/// assert_eq!(seed.to_string().parse::<GridSeed>().unwrap(), seed);
///
/// assert_eq!(GridSeed::from_phrase("level-3"), GridSeed::from_phrase("level-3"));
/// assert_ne!(GridSeed::from_phrase("level-3"), GridSeed::from_phrase("level-4"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSeed([u8; 32]);

impl GridSeed {
    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from the SHA-256 digest of `phrase`.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for GridSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Display for GridSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for GridSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::InvalidLength { len });
        }

        let nibbles = s
            .chars()
            .enumerate()
            .map(|(offset, ch)| {
                ch.to_digit(16)
                    .and_then(|digit| u8::try_from(digit).ok())
                    .ok_or(SeedParseError::InvalidHexDigit { ch, offset })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(nibbles.chunks_exact(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self(bytes))
    }
}
