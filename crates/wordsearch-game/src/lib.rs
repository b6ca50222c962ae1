//! Word-search game session management.
//!
//! This crate ties a generated grid to a [`Level`] and tracks one attempt at
//! solving it: which target words have been found, the running score, and the
//! countdown.
//!
//! # Overview
//!
//! - [`Game`]: A level attempt. It turns finished drag selections into found
//!   words and reports the cells to highlight for each found word.
//! - [`Level`]: Level configuration (grid size, words, time limit, difficulty).
//! - [`Countdown`]: A cancellable one-second tick counter that expires once.
//! - [`score`]: Word scores, difficulty multipliers, and level summaries.
//! - [`progress`]: Progress snapshots and high scores stored as opaque blobs.
//!
//! # Examples
//!
//! ```
//! use wordsearch_game::{Difficulty, Game, Level, SelectionOutcome};
//! use wordsearch_generator::GridSeed;
//!
//! let level = Level::new(1, 10, ["HARP", "DOCTOR", "CHIP", "THINK"], 120, Difficulty::Easy);
//! let mut game = Game::start_with_seed(level, GridSeed::from_phrase("level-1")).unwrap();
//!
//! // Drag across the cells of a placed word
//! let path = game.placements()[0].path().to_vec();
//! let outcome = game.submit_selection(&path).unwrap();
//! assert!(matches!(outcome, SelectionOutcome::Found { .. }));
//! assert_eq!(game.found_words().len(), 1);
//! ```

pub use self::{countdown::*, error::*, game::*, level::*};

mod countdown;
mod error;
mod game;
mod level;
pub mod progress;
pub mod score;
