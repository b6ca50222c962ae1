//! Grid coordinates and their flat index mapping.
//!
//! Cells are addressed either by a [`Position`] `(x, y)` or by a flat row-major
//! index `y * size + x`. Both representations are interchangeable: generation
//! works in positions, while selections and highlight paths are lists of indices.
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::{Position, to_coord, to_index};
//!
//! assert_eq!(to_index(2, 1, 4), 6);
//! assert_eq!(to_coord(6, 4), (2, 1));
//!
//! let pos = Position::from_index(6, 4);
//! assert_eq!(pos, Position::new(2, 1));
//! assert_eq!(pos.to_index(4), 6);
//! ```

use std::fmt::{self, Display};

use crate::Direction;

/// Converts `(x, y)` into a row-major index for a grid of width `size`.
#[must_use]
#[inline]
pub const fn to_index(x: usize, y: usize, size: usize) -> usize {
    y * size + x
}

/// Converts a row-major index into `(x, y)` for a grid of width `size`.
///
/// # Panics
///
/// Panics if `size` is zero.
#[must_use]
#[inline]
pub const fn to_coord(index: usize, size: usize) -> (usize, usize) {
    (index % size, index / size)
}

/// A cell coordinate, `x` being the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// Creates a position from its column and row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Creates a position from a row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        let (x, y) = to_coord(index, size);
        Self { x, y }
    }

    /// Returns the column.
    #[must_use]
    pub const fn x(self) -> usize {
        self.x
    }

    /// Returns the row.
    #[must_use]
    pub const fn y(self) -> usize {
        self.y
    }

    /// Returns the row-major index of this position.
    #[must_use]
    pub const fn to_index(self, size: usize) -> usize {
        to_index(self.x, self.y, size)
    }

    /// Returns `true` if this position lies inside a `size`×`size` grid.
    #[must_use]
    pub const fn is_within(self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    /// Returns the position `steps` cells away along `direction`, or `None` if it
    /// falls outside a `size`×`size` grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_core::{Direction, Position};
    ///
    /// let pos = Position::new(1, 1);
    /// assert_eq!(pos.step(Direction::DownRight, 2, 4), Some(Position::new(3, 3)));
    /// assert_eq!(pos.step(Direction::UpLeft, 2, 4), None);
    /// assert_eq!(pos.step(Direction::Right, 3, 4), None);
    /// ```
    #[must_use]
    pub fn step(self, direction: Direction, steps: usize, size: usize) -> Option<Self> {
        let steps = isize::try_from(steps).ok()?;
        let x = self
            .x
            .checked_add_signed(isize::from(direction.dx()).checked_mul(steps)?)?;
        let y = self
            .y
            .checked_add_signed(isize::from(direction.dy()).checked_mul(steps)?)?;
        Some(Self { x, y }).filter(|pos| pos.is_within(size))
    }

    /// Returns the signed offset `(dx, dy)` from this position to `other`.
    #[must_use]
    #[expect(clippy::cast_possible_wrap)]
    pub const fn delta_to(self, other: Self) -> (isize, isize) {
        (
            other.x as isize - self.x as isize,
            other.y as isize - self.y as isize,
        )
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
