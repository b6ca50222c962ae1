use std::collections::HashMap;

use wordsearch_core::{LetterGrid, Word, locate, selection};
use wordsearch_generator::{GeneratedGrid, GridGenerator, GridSeed, PlacedWord};

use crate::{
    Countdown, GameError, Level, Tick,
    progress::ProgressSnapshot,
    score::{self, LevelSummary},
};

/// Where a level attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// Selections are accepted.
    Playing,
    /// Every target word was found.
    Completed,
    /// The countdown expired first.
    TimeUp,
}

/// What a finished drag selection amounted to.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionOutcome {
    /// The selection spelled a target word, forwards or backwards, that had
    /// not been found yet.
    Found {
        /// The target word.
        word: Word,
        /// Points awarded for it.
        points: u32,
    },
    /// The selection spelled a target word that was already found.
    AlreadyFound(Word),
    /// The selection is straight but spells no target word.
    NotAWord(String),
    /// The selection is not a straight line of at least two cells.
    Invalid,
}

/// One attempt at a word-search level.
///
/// Holds the generated grid, the target words, the words found so far, the
/// score, and the countdown. A restart regenerates the grid and clears
/// everything else.
///
/// Target words are the level's words in uppercase, without duplicates. All of
/// them count toward completion, including any the generator failed to place;
/// such a word can still be found if its letters happen to line up.
///
/// # Example
///
/// ```
/// use wordsearch_game::{Difficulty, Game, Level};
///
/// let level = Level::new(1, 10, ["harp", "doctor"], 120, Difficulty::Easy);
/// let game = Game::start(level).unwrap();
///
/// assert_eq!(game.grid().size(), 10);
/// assert_eq!(game.targets().len(), 2);
/// assert!(game.found_words().is_empty());
/// assert!(game.status().is_playing());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    level: Level,
    seed: GridSeed,
    grid: LetterGrid,
    targets: Vec<Word>,
    placements: HashMap<Word, PlacedWord>,
    found: Vec<Word>,
    score: u32,
    countdown: Countdown,
    status: GameStatus,
}

impl Game {
    /// Starts an attempt on a freshly generated grid.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidWord`] if a level word contains anything but
    /// letters, or [`GameError::NoWords`] if the level has no words.
    pub fn start(level: Level) -> Result<Self, GameError> {
        Self::start_with_seed(level, GridSeed::random())
    }

    /// Starts an attempt on the grid determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidWord`] if a level word contains anything but
    /// letters, or [`GameError::NoWords`] if the level has no words.
    pub fn start_with_seed(level: Level, seed: GridSeed) -> Result<Self, GameError> {
        let targets = normalize_targets(&level)?;
        let generated = generate(&level, &targets, seed);
        Self::with_targets(level, targets, generated)
    }

    /// Starts an attempt on an already generated grid.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidWord`] if a level word contains anything but
    /// letters, [`GameError::NoWords`] if the level has no words, or
    /// [`GameError::GridSizeMismatch`] if the grid size differs from the
    /// level's.
    pub fn new(level: Level, generated: GeneratedGrid) -> Result<Self, GameError> {
        let targets = normalize_targets(&level)?;
        Self::with_targets(level, targets, generated)
    }

    /// Resumes an attempt from a saved snapshot.
    ///
    /// The grid is regenerated from the snapshot's seed, so the found words
    /// land on the cells they were found on. Saved words that are not targets
    /// of `level` are dropped. A snapshot without a remaining time starts a
    /// full countdown.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::LevelMismatch`] if the snapshot is for another
    /// level, [`GameError::InvalidSeed`] if it has no valid seed, or any error
    /// [`Game::start_with_seed`] returns.
    pub fn resume(level: Level, snapshot: &ProgressSnapshot) -> Result<Self, GameError> {
        if snapshot.level != level.id {
            return Err(GameError::LevelMismatch {
                expected: level.id,
                actual: snapshot.level,
            });
        }
        let seed = snapshot
            .seed
            .as_deref()
            .unwrap_or_default()
            .parse::<GridSeed>()
            .map_err(|source| GameError::InvalidSeed { source })?;

        let mut game = Self::start_with_seed(level, seed)?;
        for text in &snapshot.found_words {
            match Word::normalized(text) {
                Ok(word) if game.targets.contains(&word) && !game.is_found(&word) => {
                    game.found.push(word);
                }
                _ => log::warn!("level {}: dropping saved word {text:?}", game.level.id),
            }
        }
        game.score = snapshot.score;
        if let Some(remaining) = snapshot.time_remaining {
            game.countdown = Countdown::new(remaining.min(game.level.time_limit));
        }
        if game.is_complete() {
            game.complete();
        }
        log::info!(
            "level {} resumed with {} of {} words found",
            game.level.id,
            game.found.len(),
            game.targets.len()
        );
        Ok(game)
    }

    fn with_targets(
        level: Level,
        targets: Vec<Word>,
        generated: GeneratedGrid,
    ) -> Result<Self, GameError> {
        if generated.grid.size() != level.grid_size {
            return Err(GameError::GridSizeMismatch {
                expected: level.grid_size,
                actual: generated.grid.size(),
            });
        }

        let GeneratedGrid {
            seed,
            grid,
            placements,
        } = generated;
        let placement_map = index_placements(placements);
        for target in &targets {
            if !placement_map.contains_key(target) {
                log::debug!("level {}: {target} was not placed in the grid", level.id);
            }
        }

        let countdown = Countdown::new(level.time_limit);
        log::info!(
            "level {} started: {} words on a {}x{} grid, seed {seed}",
            level.id,
            targets.len(),
            grid.size(),
            grid.size()
        );
        Ok(Self {
            level,
            seed,
            grid,
            targets,
            placements: placement_map,
            found: Vec::new(),
            score: 0,
            countdown,
            status: GameStatus::Playing,
        })
    }

    /// Regenerates the grid and clears found words, score, and countdown.
    pub fn restart(&mut self) {
        self.restart_with_seed(GridSeed::random());
    }

    /// Regenerates the grid from `seed` and clears found words, score, and
    /// countdown.
    pub fn restart_with_seed(&mut self, seed: GridSeed) {
        let generated = generate(&self.level, &self.targets, seed);
        self.seed = generated.seed;
        self.grid = generated.grid;
        self.placements = index_placements(generated.placements);
        self.found.clear();
        self.score = 0;
        self.countdown = Countdown::new(self.level.time_limit);
        self.status = GameStatus::Playing;
        log::info!("level {} restarted with seed {}", self.level.id, self.seed);
    }

    /// Returns the level being played.
    #[must_use]
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Returns the seed of the current grid.
    #[must_use]
    pub fn seed(&self) -> GridSeed {
        self.seed
    }

    /// Returns the letter grid.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Returns the distinct target words, in level order.
    #[must_use]
    pub fn targets(&self) -> &[Word] {
        &self.targets
    }

    /// Returns the found words, in the order they were found.
    #[must_use]
    pub fn found_words(&self) -> &[Word] {
        &self.found
    }

    /// Returns `true` if `word` has been found.
    #[must_use]
    pub fn is_found(&self, word: &Word) -> bool {
        self.found.contains(word)
    }

    /// Returns the target words not found yet, in level order.
    pub fn remaining_words(&self) -> impl Iterator<Item = &Word> {
        self.targets.iter().filter(|word| !self.is_found(word))
    }

    /// Returns the generator's placement records, sorted by target order.
    #[must_use]
    pub fn placements(&self) -> Vec<&PlacedWord> {
        self.targets
            .iter()
            .filter_map(|word| self.placements.get(word))
            .collect()
    }

    /// Returns the accumulated score, before the difficulty multiplier.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the seconds left on the countdown.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Returns the seconds elapsed since the attempt started.
    #[must_use]
    pub fn time_spent(&self) -> u32 {
        self.level.time_limit.saturating_sub(self.countdown.remaining())
    }

    /// Returns where the attempt stands.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns `true` if every target word has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.targets.iter().all(|word| self.is_found(word))
    }

    /// Advances the countdown by one second.
    ///
    /// When the countdown expires the attempt ends with [`GameStatus::TimeUp`].
    pub fn tick(&mut self) -> Tick {
        let tick = self.countdown.tick();
        if tick.is_expired() {
            self.status = GameStatus::TimeUp;
            log::info!(
                "level {}: time up with {} of {} words found",
                self.level.id,
                self.found.len(),
                self.targets.len()
            );
        }
        tick
    }

    /// Returns the target word spelled by `text` forwards or backwards,
    /// ignoring case.
    ///
    /// Words not found yet take precedence over already found ones, so a level
    /// holding both a word and its reversal can have both found.
    #[must_use]
    pub fn match_word(&self, text: &str) -> Option<&Word> {
        let word = Word::normalized(text).ok()?;
        let matches = |target: &&Word| target.matches_either_way(word.letters());
        self.remaining_words()
            .find(matches)
            .or_else(|| self.targets.iter().find(matches))
    }

    /// Resolves a finished drag selection against the target words.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AttemptOver`] if the level was already completed or
    /// the time ran out.
    pub fn submit_selection(&mut self, path: &[usize]) -> Result<SelectionOutcome, GameError> {
        if !self.status.is_playing() {
            return Err(GameError::AttemptOver);
        }
        if !selection::is_valid_selection(path, self.grid.size()) {
            return Ok(SelectionOutcome::Invalid);
        }

        let text = locate::resolve_selection(path, &self.grid);
        let Some(word) = self.match_word(&text).cloned() else {
            return Ok(SelectionOutcome::NotAWord(text));
        };
        if self.is_found(&word) {
            return Ok(SelectionOutcome::AlreadyFound(word));
        }

        let points = score::word_score(word.len(), self.countdown.remaining());
        self.score = self.score.saturating_add(points);
        self.found.push(word.clone());
        log::info!(
            "level {}: found {word} for {points} points ({} of {})",
            self.level.id,
            self.found.len(),
            self.targets.len()
        );

        if self.is_complete() {
            self.complete();
        }
        Ok(SelectionOutcome::Found { word, points })
    }

    fn complete(&mut self) {
        self.status = GameStatus::Completed;
        self.countdown.cancel();
        log::info!("level {} completed with score {}", self.level.id, self.score);
    }

    /// Returns the cells to highlight for `word`.
    ///
    /// Uses the generator's placement record when there is one, and otherwise
    /// searches the grid. `None` means the word occurs nowhere in the grid.
    #[must_use]
    pub fn word_path(&self, word: &Word) -> Option<Vec<usize>> {
        if let Some(placed) = self.placements.get(word) {
            return Some(placed.path().to_vec());
        }
        let path = locate::locate_word_path(&self.grid, word);
        if path.is_none() {
            log::warn!("level {}: {word} does not occur in the grid", self.level.id);
        }
        path
    }

    /// Returns each found word with the cells to highlight for it, in the
    /// order the words were found.
    #[must_use]
    pub fn highlights(&self) -> Vec<(&Word, Vec<usize>)> {
        self.found
            .iter()
            .filter_map(|word| self.word_path(word).map(|path| (word, path)))
            .collect()
    }

    /// Summarizes the attempt, applying the difficulty multiplier.
    #[must_use]
    pub fn summary(&self) -> LevelSummary {
        LevelSummary::new(
            self.score,
            self.found.len(),
            self.targets.len(),
            self.time_spent(),
            self.level.difficulty,
        )
    }

    /// Captures the attempt's progress for saving.
    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            level: self.level.id,
            score: self.score,
            found_words: self.found.iter().map(ToString::to_string).collect(),
            seed: Some(self.seed.to_string()),
            time_remaining: Some(self.countdown.remaining()),
        }
    }
}

fn normalize_targets(level: &Level) -> Result<Vec<Word>, GameError> {
    let mut targets: Vec<Word> = Vec::with_capacity(level.words.len());
    for text in &level.words {
        let word = Word::normalized(text).map_err(|source| GameError::InvalidWord {
            word: text.clone(),
            source,
        })?;
        if !targets.contains(&word) {
            targets.push(word);
        }
    }
    if targets.is_empty() {
        return Err(GameError::NoWords);
    }
    Ok(targets)
}

fn index_placements(placements: Vec<PlacedWord>) -> HashMap<Word, PlacedWord> {
    let mut map = HashMap::new();
    for placed in placements {
        map.entry(placed.word().clone()).or_insert(placed);
    }
    map
}

fn generate(level: &Level, targets: &[Word], seed: GridSeed) -> GeneratedGrid {
    let words: Vec<String> = targets.iter().map(ToString::to_string).collect();
    GridGenerator::new(level.grid_size).generate_with_seed(seed, &words)
}
