//! Word-search grid generation.
//!
//! [`GridGenerator`] packs target words into a square grid along the eight
//! compass directions and fills every remaining cell with a random letter.
//!
//! Generation is randomized but reproducible: every grid is produced from a
//! [`GridSeed`], and generating again with the same seed, size, and word list
//! yields the same grid.
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::locate;
//! use wordsearch_generator::GridGenerator;
//!
//! let generator = GridGenerator::new(10);
//! let generated = generator.generate(&["HARP", "DOCTOR", "CHIP", "THINK"]);
//!
//! assert_eq!(generated.grid.size(), 10);
//! for placed in &generated.placements {
//!     assert!(locate::spells(&generated.grid, placed.path(), placed.word()));
//! }
//!
//! // The same seed reproduces the grid
//! let again = generator.generate_with_seed(generated.seed, &["HARP", "DOCTOR", "CHIP", "THINK"]);
//! assert_eq!(again.grid, generated.grid);
//! ```

pub use self::{generator::*, seed::*};

mod generator;
mod seed;
