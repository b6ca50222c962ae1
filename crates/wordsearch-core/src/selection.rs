//! Straight-line validation of dragged cell paths.
//!
//! A selection is the ordered list of cell indices a player drags across. It is
//! legal when it contains at least two cells and every consecutive pair of cells
//! points in the same [`Direction`].
//!
//! Segments are compared after normalizing by Chebyshev distance, so a segment
//! that skips cells along the line (`(0, 0)` to `(2, 0)`) is accepted as long as
//! it keeps the direction. Drag input only ever appends the cell under the
//! pointer, which is adjacent to the previous one. Segments of zero length
//! (a repeated cell) and off-line jumps such as `(0, 0)` to `(2, 1)` are
//! rejected.

use crate::{Direction, Position};

/// Returns the direction shared by every segment of `path`, or `None` if the
/// path is not a legal straight selection on a `size`×`size` grid.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Direction, selection::selection_direction};
///
/// assert_eq!(selection_direction(&[0, 5, 10], 4), Some(Direction::DownRight));
/// assert_eq!(selection_direction(&[0, 1, 6], 4), None);
/// assert_eq!(selection_direction(&[0], 4), None);
/// ```
#[must_use]
pub fn selection_direction(path: &[usize], size: usize) -> Option<Direction> {
    let cell_count = size.checked_mul(size)?;
    if path.iter().any(|&index| index >= cell_count) {
        return None;
    }

    let mut segments = path.windows(2).map(|pair| {
        Direction::between(
            Position::from_index(pair[0], size),
            Position::from_index(pair[1], size),
        )
    });

    let direction = segments.next()??;
    segments
        .all(|segment| segment == Some(direction))
        .then_some(direction)
}

/// Returns `true` if `path` forms a straight line of at least two cells on a
/// `size`×`size` grid.
///
/// # Examples
///
/// ```
/// use wordsearch_core::selection::is_valid_selection;
///
/// // (0,0) (1,0) (2,0): horizontal
/// assert!(is_valid_selection(&[0, 1, 2], 4));
/// // (0,0) (1,0) (2,1): bends from right to down-right
/// assert!(!is_valid_selection(&[0, 1, 6], 4));
/// ```
#[must_use]
pub fn is_valid_selection(path: &[usize], size: usize) -> bool {
    selection_direction(path, size).is_some()
}

/// The cells of an in-progress drag gesture.
///
/// A selection only grows in ways that keep it a straight line: the first two
/// cells fix the direction, and later cells that would bend the line are
/// refused without disturbing what has been selected so far.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Selection;
///
/// let size = 4;
/// let mut selection = Selection::start(0);
/// assert!(selection.try_push(1, size));
/// assert!(!selection.try_push(1, size)); // pointer still on the same cell
/// assert!(!selection.try_push(6, size)); // would bend the line
/// assert!(selection.try_push(2, size));
///
/// assert_eq!(selection.finish(), vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    cells: Vec<usize>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selection starting at the pressed cell.
    #[must_use]
    pub fn start(index: usize) -> Self {
        Self { cells: vec![index] }
    }

    /// Returns the selected cells in drag order.
    #[must_use]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Returns the number of selected cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the most recently selected cell.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.cells.last().copied()
    }

    /// Appends `index` if the selection stays a straight line.
    ///
    /// Returns `false`, leaving the selection unchanged, if `index` is outside
    /// the grid, repeats the last cell, or would make the path invalid.
    pub fn try_push(&mut self, index: usize, size: usize) -> bool {
        let in_grid = size.checked_mul(size).is_some_and(|cells| index < cells);
        if !in_grid || self.last() == Some(index) {
            return false;
        }
        self.cells.push(index);
        if self.cells.len() >= 2 && !is_valid_selection(&self.cells, size) {
            self.cells.pop();
            return false;
        }
        true
    }

    /// Returns `true` if the selection is a legal straight line.
    #[must_use]
    pub fn is_valid(&self, size: usize) -> bool {
        is_valid_selection(&self.cells, size)
    }

    /// Returns the direction of the selection, if it is legal.
    #[must_use]
    pub fn direction(&self, size: usize) -> Option<Direction> {
        selection_direction(&self.cells, size)
    }

    /// Discards every selected cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Ends the gesture, returning the selected path.
    #[must_use]
    pub fn finish(self) -> Vec<usize> {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_too_short_is_invalid() {
        assert!(!is_valid_selection(&[], 4));
        assert!(!is_valid_selection(&[5], 4));
    }

    #[test]
    fn test_horizontal_run() {
        assert!(is_valid_selection(&[0, 1, 2], 4));
        assert_eq!(selection_direction(&[0, 1, 2], 4), Some(Direction::Right));
        assert_eq!(selection_direction(&[3, 2, 1, 0], 4), Some(Direction::Left));
    }

    #[test]
    fn test_bend_is_invalid() {
        // (0,0) (1,0) (2,1): right then down-right
        assert!(!is_valid_selection(&[0, 1, 6], 4));
        // L shape: (0,0) (0,1) (0,2) (1,2)
        assert!(!is_valid_selection(&[0, 4, 8, 9], 4));
    }

    #[test]
    fn test_reversal_is_invalid() {
        assert!(!is_valid_selection(&[0, 1, 0], 4));
        assert!(!is_valid_selection(&[1, 2, 1], 4));
    }

    #[test]
    fn test_repeated_cell_is_invalid() {
        assert!(!is_valid_selection(&[5, 5], 4));
        assert!(!is_valid_selection(&[4, 5, 5], 4));
    }

    #[test]
    fn test_out_of_range_index_is_invalid() {
        assert!(!is_valid_selection(&[14, 15, 16], 4));
        assert!(!is_valid_selection(&[0, 1], 0));
    }

    #[test]
    fn test_oversized_grid_is_invalid() {
        assert!(!is_valid_selection(&[0, 1], usize::MAX));
        assert_eq!(selection_direction(&[0, 1, 2], usize::MAX), None);

        let mut selection = Selection::new();
        assert!(!selection.try_push(0, usize::MAX));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_off_line_jump_is_invalid() {
        // (0,0) -> (2,1) is not on any of the eight lines
        assert!(!is_valid_selection(&[0, 6], 4));
    }

    #[test]
    fn test_non_adjacent_jump_along_direction_is_accepted() {
        // (0,0) (1,0) (3,0): skips (2,0) but keeps the direction
        assert!(is_valid_selection(&[0, 1, 3], 4));
        // (0,0) (2,2): a two-cell diagonal jump
        assert_eq!(selection_direction(&[0, 10], 4), Some(Direction::DownRight));
    }

    #[test]
    fn test_wrapping_across_rows_is_not_straight() {
        // (3,0) -> (0,1) is index 3 -> 4, adjacent in memory but not on the grid
        assert!(!is_valid_selection(&[2, 3, 4], 4));
    }

    #[test]
    fn test_selection_builder() {
        let size = 5;
        let mut selection = Selection::new();
        assert!(selection.is_empty());
        assert!(selection.try_push(12, size));
        assert!(!selection.is_valid(size));
        assert!(selection.try_push(8, size)); // up-right from (2,2) to (3,1)
        assert_eq!(selection.direction(size), Some(Direction::UpRight));
        assert!(!selection.try_push(9, size));
        assert!(!selection.try_push(25, size));
        assert!(selection.try_push(4, size));
        assert_eq!(selection.cells(), [12, 8, 4]);
        assert_eq!(selection.len(), 3);

        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.direction(size), None);
    }

    proptest! {
        #[test]
        fn test_straight_runs_are_valid(
            size in 2usize..12,
            x in 0usize..12,
            y in 0usize..12,
            dir_index in 0usize..8,
            len in 2usize..12,
        ) {
            let start = Position::new(x % size, y % size);
            let direction = Direction::ALL[dir_index];
            let path: Vec<usize> = (0..len)
                .map_while(|i| start.step(direction, i, size).map(|pos| pos.to_index(size)))
                .collect();
            prop_assume!(path.len() >= 2);

            prop_assert_eq!(selection_direction(&path, size), Some(direction));

            let mut reversed = path.clone();
            reversed.reverse();
            prop_assert_eq!(selection_direction(&reversed, size), Some(direction.reversed()));
        }

        #[test]
        fn test_builder_only_holds_valid_paths(
            size in 2usize..8,
            pushes in proptest::collection::vec(0usize..64, 0..20),
        ) {
            let mut selection = Selection::new();
            for index in pushes {
                selection.try_push(index % (size * size), size);
                prop_assert!(selection.len() < 2 || selection.is_valid(size));
            }
        }
    }
}
