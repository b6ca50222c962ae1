//! Scoring rules and end-of-level summaries.

use serde::{Deserialize, Serialize};

use crate::Difficulty;

/// Returns the points for finding a word of `word_len` letters with
/// `time_remaining` seconds left: ten per letter plus one per ten seconds left.
///
/// # Examples
///
/// ```
/// use wordsearch_game::score::word_score;
///
/// assert_eq!(word_score(4, 0), 40);
/// assert_eq!(word_score(4, 119), 51);
/// ```
#[must_use]
pub fn word_score(word_len: usize, time_remaining: u32) -> u32 {
    let base = u32::try_from(word_len)
        .unwrap_or(u32::MAX)
        .saturating_mul(10);
    base.saturating_add(time_remaining / 10)
}

/// Formats seconds as `M:SS`.
///
/// # Examples
///
/// ```
/// use wordsearch_game::score::format_time;
///
/// assert_eq!(format_time(0), "0:00");
/// assert_eq!(format_time(65), "1:05");
/// assert_eq!(format_time(600), "10:00");
/// ```
#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// The result of one level attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSummary {
    /// Accumulated word score with the difficulty multiplier applied.
    pub score: u32,
    /// Number of distinct target words found.
    pub words_found: usize,
    /// Time spent, formatted as `M:SS`.
    pub time_spent: String,
    /// The level's difficulty.
    pub difficulty: Difficulty,
    /// `true` if every target word was found.
    pub perfect: bool,
}

impl LevelSummary {
    /// Builds a summary from the raw score of an attempt.
    #[must_use]
    pub fn new(
        score: u32,
        words_found: usize,
        total_words: usize,
        seconds_spent: u32,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            score: difficulty.apply(score),
            words_found,
            time_spent: format_time(seconds_spent),
            difficulty,
            perfect: total_words > 0 && words_found == total_words,
        }
    }
}
