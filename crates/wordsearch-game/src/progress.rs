//! Saved progress and high scores.
//!
//! Storage itself is out of this crate's hands: a [`ProgressStore`] only needs
//! to keep opaque string blobs under a few keys. The blobs are JSON documents
//! produced with `serde_json`.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Key under which [`ProgressSnapshot`] blobs are stored.
pub const PROGRESS_KEY: &str = "wordsearch.progress";

/// Key under which [`HighScores`] blobs are stored.
pub const HIGH_SCORES_KEY: &str = "wordsearch.high-scores";

/// Errors that can occur while encoding or decoding progress blobs.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ProgressError {
    /// The blob could not be encoded.
    #[display("failed to encode progress: {source}")]
    Encode {
        /// The underlying JSON error.
        source: serde_json::Error,
    },
    /// The blob is not a valid document of the expected shape.
    #[display("malformed progress blob: {source}")]
    Malformed {
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

/// A key-value store for opaque blobs.
pub trait ProgressStore {
    /// Stores `blob` under `key`, replacing any previous blob.
    fn save(&mut self, key: &str, blob: String);

    /// Returns the blob stored under `key`.
    fn load(&self, key: &str) -> Option<String>;

    /// Removes the blob stored under `key`.
    fn remove(&mut self, key: &str);
}

/// An in-process [`ProgressStore`].
#[derive(Debug, Default, Clone)]
pub struct MemoryProgressStore {
    blobs: HashMap<String, String>,
}

impl MemoryProgressStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryProgressStore {
    fn save(&mut self, key: &str, blob: String) {
        self.blobs.insert(key.to_owned(), blob);
    }

    fn load(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn remove(&mut self, key: &str) {
        self.blobs.remove(key);
    }
}

/// The resumable state of a level attempt.
///
/// Pass it to [`Game::resume`](crate::Game::resume) to continue on the same
/// grid. Blobs written without a seed still load, but cannot be resumed.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    /// The level being played.
    pub level: u32,
    /// Accumulated score.
    pub score: u32,
    /// Words found so far.
    #[serde(default)]
    pub found_words: Vec<String>,
    /// Hex seed of the grid being played.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    /// Seconds left on the countdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_remaining: Option<u32>,
}

impl ProgressSnapshot {
    /// Encodes this snapshot as a blob.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::Encode`] if serialization fails.
    pub fn to_blob(&self) -> Result<String, ProgressError> {
        serde_json::to_string(self).map_err(|source| ProgressError::Encode { source })
    }

    /// Decodes a snapshot from a blob.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::Malformed`] if the blob is not a snapshot.
    pub fn from_blob(blob: &str) -> Result<Self, ProgressError> {
        serde_json::from_str(blob).map_err(|source| ProgressError::Malformed { source })
    }
}

/// Best score per level id.
///
/// # Examples
///
/// ```
/// use wordsearch_game::progress::HighScores;
///
/// let mut scores = HighScores::default();
/// assert!(scores.record(1, 80));
/// assert!(!scores.record(1, 60));
/// assert!(scores.record(1, 95));
/// assert_eq!(scores.best(1), Some(95));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScores {
    best: BTreeMap<u32, u32>,
}

impl HighScores {
    /// Returns the best score recorded for `level`.
    #[must_use]
    pub fn best(&self, level: u32) -> Option<u32> {
        self.best.get(&level).copied()
    }

    /// Records `score` for `level`, returning `true` if it beats the previous
    /// best (or is the first score for that level).
    pub fn record(&mut self, level: u32, score: u32) -> bool {
        match self.best.get(&level) {
            Some(&best) if best >= score => false,
            _ => {
                self.best.insert(level, score);
                true
            }
        }
    }

    /// Encodes these high scores as a blob.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::Encode`] if serialization fails.
    pub fn to_blob(&self) -> Result<String, ProgressError> {
        serde_json::to_string(self).map_err(|source| ProgressError::Encode { source })
    }

    /// Decodes high scores from a blob.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::Malformed`] if the blob is not a high score table.
    pub fn from_blob(blob: &str) -> Result<Self, ProgressError> {
        serde_json::from_str(blob).map_err(|source| ProgressError::Malformed { source })
    }
}

/// Saves `snapshot` into `store`.
///
/// # Errors
///
/// Returns [`ProgressError::Encode`] if the snapshot cannot be encoded.
pub fn save_progress<S>(store: &mut S, snapshot: &ProgressSnapshot) -> Result<(), ProgressError>
where
    S: ProgressStore + ?Sized,
{
    store.save(PROGRESS_KEY, snapshot.to_blob()?);
    Ok(())
}

/// Loads the saved snapshot from `store`.
///
/// A missing or malformed blob yields `None`; a malformed blob is logged.
#[must_use]
pub fn load_progress<S>(store: &S) -> Option<ProgressSnapshot>
where
    S: ProgressStore + ?Sized,
{
    let blob = store.load(PROGRESS_KEY)?;
    ProgressSnapshot::from_blob(&blob)
        .inspect_err(|e| log::warn!("ignoring saved progress: {e}"))
        .ok()
}

/// Removes any saved snapshot from `store`.
pub fn clear_progress<S>(store: &mut S)
where
    S: ProgressStore + ?Sized,
{
    store.remove(PROGRESS_KEY);
}

/// Loads the high score table from `store`, starting empty if none is saved
/// or the saved one is malformed.
#[must_use]
pub fn load_high_scores<S>(store: &S) -> HighScores
where
    S: ProgressStore + ?Sized,
{
    store
        .load(HIGH_SCORES_KEY)
        .and_then(|blob| {
            HighScores::from_blob(&blob)
                .inspect_err(|e| log::warn!("ignoring saved high scores: {e}"))
                .ok()
        })
        .unwrap_or_default()
}

/// Records `score` for `level` in the high score table kept in `store`.
///
/// Returns `true` if the score is a new best and was saved.
///
/// # Errors
///
/// Returns [`ProgressError::Encode`] if the updated table cannot be encoded.
pub fn record_high_score<S>(store: &mut S, level: u32, score: u32) -> Result<bool, ProgressError>
where
    S: ProgressStore + ?Sized,
{
    let mut scores = load_high_scores(store);
    if !scores.record(level, score) {
        return Ok(false);
    }
    store.save(HIGH_SCORES_KEY, scores.to_blob()?);
    Ok(true)
}
