//! Grid letter representation.

use std::fmt::{self, Display};

/// Errors returned when converting a character into a [`Letter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LetterError {
    /// The character is not an uppercase ASCII letter.
    #[display("invalid letter: {ch:?}")]
    InvalidLetter {
        /// The rejected character.
        ch: char,
    },
}

/// An uppercase letter in the range A-Z.
///
/// Every grid cell holds exactly one `Letter`. Lowercase input is rejected rather
/// than folded, since placement and matching on the grid are case-sensitive;
/// callers normalize casing before converting.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Letter;
///
/// let letter = Letter::try_from('Q').unwrap();
/// assert_eq!(letter.as_char(), 'Q');
/// assert_eq!(letter.index(), 16);
///
/// assert!(Letter::try_from('q').is_err());
/// assert_eq!(Letter::ALL.len(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Number of letters in the alphabet.
    pub const COUNT: usize = 26;

    /// Array containing all letters from A to Z.
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self(b'A'); Self::COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < Self::COUNT {
            all[i] = Self(b'A' + i as u8);
            i += 1;
        }
        all
    };

    /// Creates a letter from its alphabet index (0 for A, 25 for Z).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-25.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 26, "letter index out of range");
        Self(b'A' + index)
    }

    /// Returns the alphabet index of this letter (0 for A, 25 for Z).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0 - b'A'
    }

    /// Returns this letter as a `char`.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        u8::try_from(ch)
            .ok()
            .filter(u8::is_ascii_uppercase)
            .map(Self)
            .ok_or(LetterError::InvalidLetter { ch })
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}
