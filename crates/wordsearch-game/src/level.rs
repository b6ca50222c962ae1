use serde::{Deserialize, Serialize};

/// How generously a level's score is multiplied in the summary.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Score multiplied by 1.
    #[default]
    #[display("easy")]
    Easy,
    /// Score multiplied by 1.5.
    #[display("medium")]
    Medium,
    /// Score multiplied by 2.
    #[display("hard")]
    Hard,
}

impl Difficulty {
    /// Applies this difficulty's multiplier to `score`, rounding down.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_game::Difficulty;
    ///
    /// assert_eq!(Difficulty::Easy.apply(45), 45);
    /// assert_eq!(Difficulty::Medium.apply(45), 67);
    /// assert_eq!(Difficulty::Hard.apply(45), 90);
    /// ```
    #[must_use]
    pub fn apply(self, score: u32) -> u32 {
        match self {
            Self::Easy => score,
            Self::Medium => score.saturating_mul(3) / 2,
            Self::Hard => score.saturating_mul(2),
        }
    }
}

/// The configuration of one level: what to hide, where, and for how long.
///
/// Words are kept as written; [`Game`](crate::Game) normalizes them to
/// uppercase when an attempt starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    /// Level number, also the key for high scores.
    pub id: u32,
    /// Grid width and height.
    pub grid_size: usize,
    /// Words to hide.
    pub words: Vec<String>,
    /// Seconds available to find every word.
    pub time_limit: u32,
    /// Score multiplier applied in the summary.
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl Level {
    /// Creates a level configuration.
    #[must_use]
    pub fn new<I, S>(
        id: u32,
        grid_size: usize,
        words: I,
        time_limit: u32,
        difficulty: Difficulty,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            grid_size,
            words: words.into_iter().map(Into::into).collect(),
            time_limit,
            difficulty,
        }
    }
}
