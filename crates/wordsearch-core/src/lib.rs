//! Core data structures and algorithms for word-search puzzles.
//!
//! This crate provides the types shared by grid generation, selection handling,
//! and game management components.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Core types** - Fundamental puzzle types
//!    - [`letter`]: Type-safe representation of grid letters A-Z
//!    - [`word`]: Target words made of [`Letter`]s
//!    - [`position`]: Grid coordinates and their row-major index mapping
//!    - [`direction`]: The eight compass directions used for placement and matching
//!
//! 2. **Grid** - [`grid`]: The square [`LetterGrid`] forming the puzzle surface
//!
//! 3. **Selection engine** - Pure functions operating on cell index paths
//!    - [`selection`]: Straight-line validation of dragged cell paths
//!    - [`locate`]: Resolving a path into its spelled string, and searching the grid
//!      for the path of a word
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::{LetterGrid, Word, locate, selection};
//!
//! let grid: LetterGrid = "CAT/XXX/XXX".parse().unwrap();
//!
//! // The first row, dragged left to right
//! let path = [0, 1, 2];
//! assert!(selection::is_valid_selection(&path, grid.size()));
//! assert_eq!(locate::resolve_selection(&path, &grid), "CAT");
//!
//! // Highlight recovery for a found word
//! let word: Word = "TAC".parse().unwrap();
//! assert_eq!(locate::locate_word_path(&grid, &word), Some(vec![0, 1, 2]));
//! ```

pub mod direction;
pub mod grid;
pub mod letter;
pub mod locate;
pub mod position;
pub mod selection;
pub mod word;

// Re-export commonly used types
pub use self::{
    direction::Direction,
    grid::{GridParseError, LetterGrid},
    letter::{Letter, LetterError},
    position::{Position, to_coord, to_index},
    selection::Selection,
    word::{Word, WordParseError},
};
