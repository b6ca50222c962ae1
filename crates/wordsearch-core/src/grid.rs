//! The square letter grid forming the puzzle surface.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Letter, Position};

/// Errors returned when building or parsing a [`LetterGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The number of cells does not equal `size * size`.
    #[display("expected {expected} cells for the grid, got {actual}")]
    CellCountMismatch {
        /// Required number of cells.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
    /// A row has a different length than the number of rows.
    #[display("row {row} has {len} letters, expected {expected}")]
    NotSquare {
        /// Zero-based row number.
        row: usize,
        /// Number of letters in the row.
        len: usize,
        /// Number of rows, which every row length must equal.
        expected: usize,
    },
    /// A cell holds something other than an uppercase letter.
    #[display("invalid letter {ch:?} at {pos}")]
    InvalidLetter {
        /// The rejected character.
        ch: char,
        /// Where the character was found.
        pos: Position,
    },
}

/// A `size`×`size` grid in which every cell holds one [`Letter`].
///
/// Grids are built once per level and never mutated afterwards; cells are stored
/// in row-major order so a flat index addresses a cell directly.
///
/// # Text format
///
/// [`Display`] writes one row per line. [`FromStr`] accepts rows separated by
/// newlines or `/`, ignoring any other whitespace:
///
/// ```
/// use wordsearch_core::{LetterGrid, Position};
///
/// let grid: LetterGrid = "
///     ABC
///     DEF
///     GHI
/// ".parse().unwrap();
///
/// assert_eq!(grid.size(), 3);
/// assert_eq!(grid[Position::new(2, 1)].as_char(), 'F');
/// assert_eq!(grid.to_string(), "ABC\nDEF\nGHI");
/// assert_eq!("ABC/DEF/GHI".parse::<LetterGrid>().unwrap(), grid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterGrid {
    size: usize,
    cells: Vec<Letter>,
}

impl LetterGrid {
    /// Creates a grid from its cells in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`GridParseError::CellCountMismatch`] if `cells` does not hold
    /// exactly `size * size` letters.
    pub fn from_cells(size: usize, cells: Vec<Letter>) -> Result<Self, GridParseError> {
        let expected = size * size;
        if cells.len() != expected {
            return Err(GridParseError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Creates a grid by calling `f` for every position in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_core::{Letter, LetterGrid};
    ///
    /// let grid = LetterGrid::from_fn(2, |pos| Letter::ALL[pos.x() + pos.y()]);
    /// assert_eq!(grid.to_string(), "AB\nBC");
    /// ```
    pub fn from_fn<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(Position) -> Letter,
    {
        let cells = (0..size * size)
            .map(|index| f(Position::from_index(index, size)))
            .collect();
        Self { size, cells }
    }

    /// Returns the width (and height) of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Letter] {
        &self.cells
    }

    /// Returns the letter at `pos`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Letter> {
        pos.is_within(self.size)
            .then(|| self.cells[pos.to_index(self.size)])
    }

    /// Returns the letter at a row-major `index`, or `None` if it is out of range.
    #[must_use]
    pub fn letter_at(&self, index: usize) -> Option<Letter> {
        self.cells.get(index).copied()
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Letter]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Returns an iterator over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size * size).map(move |index| Position::from_index(index, size))
    }
}

impl Index<Position> for LetterGrid {
    type Output = Letter;

    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    fn index(&self, pos: Position) -> &Letter {
        assert!(
            pos.is_within(self.size),
            "position {pos} is outside a {size}x{size} grid",
            size = self.size
        );
        &self.cells[pos.to_index(self.size)]
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for letter in row {
                Display::fmt(letter, f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for LetterGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(['\n', '/'])
            .map(|row| row.chars().filter(|ch| !ch.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect::<Vec<_>>();

        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GridParseError::NotSquare {
                    row: y,
                    len: row.len(),
                    expected: size,
                });
            }
            for (x, ch) in row.into_iter().enumerate() {
                let letter = Letter::try_from(ch).map_err(|_| GridParseError::InvalidLetter {
                    ch,
                    pos: Position::new(x, y),
                })?;
                cells.push(letter);
            }
        }
        Self::from_cells(size, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiline() {
        let grid: LetterGrid = "
            CATS
            XXXX
            YYYY
            ZZZZ
        "
        .parse()
        .unwrap();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.letter_at(0).unwrap().as_char(), 'C');
        assert_eq!(grid.letter_at(15).unwrap().as_char(), 'Z');
        assert_eq!(grid.letter_at(16), None);
        assert_eq!(grid.get(Position::new(1, 0)).unwrap().as_char(), 'A');
        assert_eq!(grid.get(Position::new(4, 0)), None);
    }

    #[test]
    fn test_display_round_trip() {
        let text = "ABC\nDEF\nGHI";
        let grid: LetterGrid = text.parse().unwrap();
        assert_eq!(grid.to_string(), text);
        assert_eq!(grid.to_string().parse::<LetterGrid>().unwrap(), grid);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "AB/CD/EF".parse::<LetterGrid>(),
            Err(GridParseError::NotSquare {
                row: 0,
                len: 2,
                expected: 3
            })
        );
        assert_eq!(
            "AB/C".parse::<LetterGrid>(),
            Err(GridParseError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            "AB/c.".parse::<LetterGrid>(),
            Err(GridParseError::InvalidLetter {
                ch: 'c',
                pos: Position::new(0, 1)
            })
        );
    }

    #[test]
    fn test_from_cells_checks_count() {
        let cells = vec![Letter::from_index(0); 5];
        assert_eq!(
            LetterGrid::from_cells(2, cells),
            Err(GridParseError::CellCountMismatch {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn test_positions_are_row_major() {
        let grid: LetterGrid = "AB/CD".parse().unwrap();
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            [
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
        let rows: Vec<String> = grid
            .rows()
            .map(|row| row.iter().map(|l| l.as_char()).collect())
            .collect();
        assert_eq!(rows, ["AB", "CD"]);
    }

    #[test]
    fn test_empty_grid() {
        let grid: LetterGrid = "".parse().unwrap();
        assert_eq!(grid.size(), 0);
        assert_eq!(grid.positions().count(), 0);
        assert_eq!(grid.to_string(), "");
    }

    #[test]
    #[should_panic(expected = "outside a 2x2 grid")]
    fn test_index_out_of_bounds_panics() {
        let grid: LetterGrid = "AB/CD".parse().unwrap();
        let _ = grid[Position::new(2, 0)];
    }
}
