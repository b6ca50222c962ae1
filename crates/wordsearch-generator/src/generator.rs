use std::cmp::Reverse;

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use wordsearch_core::{Direction, Letter, LetterGrid, Position, Word, locate};

use crate::GridSeed;

/// A word written into the grid, together with where it was written.
///
/// Carrying placements forward from generation lets callers highlight a found
/// word without searching the grid for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    word: Word,
    start: Position,
    direction: Direction,
    path: Vec<usize>,
}

impl PlacedWord {
    /// Returns the placed word.
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the cell holding the first letter.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the direction the word reads in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the row-major indices of the word's cells, first letter first.
    #[must_use]
    pub fn path(&self) -> &[usize] {
        &self.path
    }
}

/// A generated grid together with the words that were placed into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGrid {
    /// The seed that reproduces this grid.
    pub seed: GridSeed,
    /// The filled letter grid.
    pub grid: LetterGrid,
    /// Successfully placed words, longest first.
    ///
    /// Words that could not be placed are absent, so this may be shorter than
    /// the requested word list.
    pub placements: Vec<PlacedWord>,
}

impl GeneratedGrid {
    /// Returns the placed words, longest first.
    pub fn placed_words(&self) -> impl Iterator<Item = &Word> {
        self.placements.iter().map(PlacedWord::word)
    }

    /// Returns the first placement of `word`, if it was placed.
    #[must_use]
    pub fn placement(&self, word: &Word) -> Option<&PlacedWord> {
        self.placements.iter().find(|placed| placed.word == *word)
    }
}

/// Generates word-search grids of a fixed size.
///
/// Words are placed longest first, since long words are the hardest to fit and
/// have the best chance while the grid is still empty. Each word gets
/// `size * size` random trials of start cell and direction; a trial succeeds if
/// every letter lands inside the grid on a blank cell or on a cell already
/// holding the same letter. A word that exhausts its trials is left out.
///
/// Words must consist of uppercase letters A-Z. Anything else (including
/// lowercase text) is skipped, as is any word longer than the grid.
#[derive(Debug, Clone, Copy)]
pub struct GridGenerator {
    size: usize,
}

impl GridGenerator {
    /// Creates a generator for `size`×`size` grids.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Returns the grid size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Generates a grid from a freshly drawn random seed.
    #[must_use]
    pub fn generate<S>(&self, words: &[S]) -> GeneratedGrid
    where
        S: AsRef<str>,
    {
        self.generate_with_seed(GridSeed::random(), words)
    }

    /// Generates the grid determined by `seed`.
    #[must_use]
    pub fn generate_with_seed<S>(&self, seed: GridSeed, words: &[S]) -> GeneratedGrid
    where
        S: AsRef<str>,
    {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let mut cells = vec![None; self.size * self.size];
        let mut placements = Vec::new();

        for word in self.placement_order(words) {
            match self.try_place(&mut cells, &word, &mut rng) {
                Some(placed) => {
                    log::debug!(
                        "placed {} at {} going {}",
                        placed.word,
                        placed.start,
                        placed.direction
                    );
                    placements.push(placed);
                }
                None => log::warn!("gave up placing {word} after {} trials", self.trials()),
            }
        }

        let grid = LetterGrid::from_fn(self.size, |pos| {
            cells[pos.to_index(self.size)]
                .unwrap_or_else(|| Letter::ALL[rng.random_range(0..Letter::COUNT)])
        });

        GeneratedGrid {
            seed,
            grid,
            placements,
        }
    }

    fn trials(&self) -> usize {
        self.size * self.size
    }

    /// Parses the placeable words and sorts them longest first, keeping input
    /// order among words of equal length.
    fn placement_order<S>(&self, words: &[S]) -> Vec<Word>
    where
        S: AsRef<str>,
    {
        let mut order = words
            .iter()
            .filter_map(|text| {
                let text = text.as_ref();
                match text.parse::<Word>() {
                    Ok(word) if word.len() > self.size => {
                        log::warn!(
                            "skipping {word}: {} letters do not fit a {}x{} grid",
                            word.len(),
                            self.size,
                            self.size
                        );
                        None
                    }
                    Ok(word) => Some(word),
                    Err(e) => {
                        log::warn!("skipping {text:?}: {e}");
                        None
                    }
                }
            })
            .collect::<Vec<_>>();
        order.sort_by_key(|word| Reverse(word.len()));
        order
    }

    fn try_place(
        &self,
        cells: &mut [Option<Letter>],
        word: &Word,
        rng: &mut Pcg64,
    ) -> Option<PlacedWord> {
        for _ in 0..self.trials() {
            let start = Position::new(
                rng.random_range(0..self.size),
                rng.random_range(0..self.size),
            );
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];

            let Some(path) = locate::trace_path(start, direction, word.len(), self.size) else {
                continue;
            };
            let fits = path
                .iter()
                .zip(word.letters())
                .all(|(&index, &letter)| cells[index].is_none_or(|cell| cell == letter));
            if !fits {
                continue;
            }

            for (&index, &letter) in path.iter().zip(word.letters()) {
                cells[index] = Some(letter);
            }
            return Some(PlacedWord {
                word: word.clone(),
                start,
                direction,
                path,
            });
        }
        None
    }
}
