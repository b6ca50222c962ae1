use wordsearch_core::WordParseError;
use wordsearch_generator::SeedParseError;

/// Errors that can occur while setting up or playing a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// A level word is not made of letters only.
    #[display("invalid level word {word:?}: {source}")]
    InvalidWord {
        /// The offending word as written in the level.
        word: String,
        /// Why the word was rejected.
        source: WordParseError,
    },
    /// The level has no words to find.
    #[display("level has no words")]
    NoWords,
    /// A saved snapshot belongs to a different level.
    #[display("saved progress is for level {actual}, not level {expected}")]
    LevelMismatch {
        /// The level being resumed.
        expected: u32,
        /// The level recorded in the snapshot.
        actual: u32,
    },
    /// A saved snapshot does not carry a usable grid seed.
    #[display("saved progress has no usable grid seed: {source}")]
    InvalidSeed {
        /// Why the seed was rejected.
        source: SeedParseError,
    },
    /// The supplied grid does not have the level's size.
    #[display("grid is {actual}x{actual}, level expects {expected}x{expected}")]
    GridSizeMismatch {
        /// Grid size configured by the level.
        expected: usize,
        /// Size of the supplied grid.
        actual: usize,
    },
    /// The attempt already ended, by completion or by running out of time.
    #[display("the level attempt is over")]
    AttemptOver,
}
