//! Target words.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::Letter;

/// Errors returned when parsing a [`Word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordParseError {
    /// The input contained no letters.
    #[display("word is empty")]
    Empty,
    /// The input contained a character that is not an uppercase letter.
    #[display("invalid character {ch:?} at offset {offset}")]
    InvalidLetter {
        /// The rejected character.
        ch: char,
        /// Character offset of the rejected character.
        offset: usize,
    },
}

/// A non-empty sequence of [`Letter`]s.
///
/// Parsing is strict: `"cat"` is rejected. Use [`Word::normalized`] to accept
/// mixed-case input and surrounding whitespace.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Word;
///
/// let word: Word = "HARP".parse().unwrap();
/// assert_eq!(word.len(), 4);
/// assert_eq!(word.reversed().to_string(), "PRAH");
///
/// assert!("harp".parse::<Word>().is_err());
/// assert_eq!(Word::normalized(" harp ").unwrap(), word);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    /// Creates a word from its letters.
    ///
    /// # Errors
    ///
    /// Returns [`WordParseError::Empty`] if `letters` is empty.
    pub fn from_letters(letters: Vec<Letter>) -> Result<Self, WordParseError> {
        if letters.is_empty() {
            return Err(WordParseError::Empty);
        }
        Ok(Self { letters })
    }

    /// Parses a word after trimming whitespace and converting to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`WordParseError`] if the normalized text is empty or contains
    /// anything but the letters A-Z.
    pub fn normalized(s: &str) -> Result<Self, WordParseError> {
        s.trim().to_ascii_uppercase().parse()
    }

    /// Returns the letters of this word.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Returns the number of letters in this word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`; a word holds at least one letter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns this word spelled backwards.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            letters: self.letters.iter().rev().copied().collect(),
        }
    }

    /// Returns `true` if `letters` spell this word forwards or backwards.
    #[must_use]
    pub fn matches_either_way(&self, letters: &[Letter]) -> bool {
        letters.len() == self.letters.len()
            && (letters == self.letters.as_slice()
                || letters.iter().eq(self.letters.iter().rev()))
    }
}

impl FromStr for Word {
    type Err = WordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters = s
            .chars()
            .enumerate()
            .map(|(offset, ch)| {
                Letter::try_from(ch).map_err(|_| WordParseError::InvalidLetter { ch, offset })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_letters(letters)
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            Display::fmt(letter, f)?;
        }
        Ok(())
    }
}
