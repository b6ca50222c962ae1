//! Resolving selections and recovering word paths.
//!
//! Two related operations share one walking primitive, [`trace_path`]:
//!
//! - [`resolve_selection`] reads the letters under an already validated path.
//! - [`locate_word_path`] searches the whole grid for a word, forwards or
//!   backwards, and returns the cells it occupies.

use crate::{Direction, Letter, LetterGrid, Position, Word};

/// Returns the row-major indices of `len` cells starting at `start` and walking
/// along `direction`, or `None` if the walk leaves a `size`×`size` grid.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Direction, Position, locate::trace_path};
///
/// let path = trace_path(Position::new(0, 3), Direction::UpRight, 4, 4);
/// assert_eq!(path, Some(vec![12, 9, 6, 3]));
/// assert_eq!(trace_path(Position::new(1, 3), Direction::UpRight, 4, 4), None);
/// ```
#[must_use]
pub fn trace_path(
    start: Position,
    direction: Direction,
    len: usize,
    size: usize,
) -> Option<Vec<usize>> {
    (0..len)
        .map(|i| start.step(direction, i, size).map(|pos| pos.to_index(size)))
        .collect()
}

/// Returns the string spelled by the cells of `path`, in path order.
///
/// The path is assumed to be validated already; indices outside the grid
/// contribute nothing. The caller compares the result, and its reversal, with
/// the words still to be found.
#[must_use]
pub fn resolve_selection(path: &[usize], grid: &LetterGrid) -> String {
    path.iter()
        .filter_map(|&index| grid.letter_at(index))
        .map(Letter::as_char)
        .collect()
}

/// Searches `grid` for `word`, spelled forwards or backwards along any of the
/// eight directions, and returns the indices of its cells.
///
/// Start cells are tried in row-major order and, from each start cell, the
/// directions in [`Direction::SCAN_ORDER`]. The first match wins, so when the
/// same letters occur in more than one place only the first is reported. The
/// returned path runs from the first matched cell, so a backwards occurrence
/// yields the cells from the word's last letter to its first.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{LetterGrid, Word, locate::locate_word_path};
///
/// let grid: LetterGrid = "
///     XTXX
///     XAXX
///     XCXX
///     XXXX
/// ".parse().unwrap();
/// let word: Word = "CAT".parse().unwrap();
///
/// assert_eq!(locate_word_path(&grid, &word), Some(vec![1, 5, 9]));
/// assert_eq!(locate_word_path(&grid, &"DOG".parse().unwrap()), None);
/// ```
#[must_use]
pub fn locate_word_path(grid: &LetterGrid, word: &Word) -> Option<Vec<usize>> {
    let size = grid.size();
    grid.positions().find_map(|start| {
        Direction::SCAN_ORDER.into_iter().find_map(|direction| {
            let path = trace_path(start, direction, word.len(), size)?;
            spells(grid, &path, word).then_some(path)
        })
    })
}

/// Returns `true` if the cells of `path` spell `word` forwards or backwards.
#[must_use]
pub fn spells(grid: &LetterGrid, path: &[usize], word: &Word) -> bool {
    let letters: Option<Vec<Letter>> = path.iter().map(|&index| grid.letter_at(index)).collect();
    letters.is_some_and(|letters| word.matches_either_way(&letters))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn grid(text: &str) -> LetterGrid {
        text.parse().expect("valid grid")
    }

    fn word(text: &str) -> Word {
        text.parse().expect("valid word")
    }

    #[test]
    fn test_resolve_selection_reads_in_path_order() {
        let grid = grid("CATX/XXXX/XXXX/XXXX");
        assert_eq!(resolve_selection(&[0, 1, 2], &grid), "CAT");
        assert_eq!(resolve_selection(&[2, 1, 0], &grid), "TAC");
        assert_eq!(resolve_selection(&[], &grid), "");
        assert_eq!(resolve_selection(&[0, 99], &grid), "C");
    }

    #[test]
    fn test_locate_each_direction() {
        let cases = [
            ("CATX/XXXX/XXXX/XXXX", vec![0, 1, 2]),
            ("TACX/XXXX/XXXX/XXXX", vec![0, 1, 2]),
            ("CXXX/AXXX/TXXX/XXXX", vec![0, 4, 8]),
            ("CXXX/XAXX/XXTX/XXXX", vec![0, 5, 10]),
            ("XXXC/XXAX/XTXX/XXXX", vec![3, 6, 9]),
            ("XXXX/XXXT/XXAX/XCXX", vec![7, 10, 13]),
        ];
        for (text, expected) in cases {
            let grid = grid(text);
            let path = locate_word_path(&grid, &word("CAT"));
            assert_eq!(path, Some(expected), "grid {text}");
        }
    }

    #[test]
    fn test_locate_prefers_first_start_cell() {
        // Two occurrences: row 0 and row 2.
        let grid = grid("XXXX/XXXX/CATX/CATX");
        assert_eq!(locate_word_path(&grid, &word("CAT")), Some(vec![8, 9, 10]));
    }

    #[test]
    fn test_locate_direction_priority() {
        // From (0,0) both right and down spell "CA"; right is tried first.
        let grid = grid("CA/AX");
        assert_eq!(locate_word_path(&grid, &word("CA")), Some(vec![0, 1]));
    }

    #[test]
    fn test_locate_does_not_wrap_rows() {
        // "CAT" would appear across the row boundary in flat order.
        let grid = grid("XXC/ATX/XXX");
        assert_eq!(locate_word_path(&grid, &word("CAT")), None);
    }

    #[test]
    fn test_locate_word_longer_than_grid() {
        let grid = grid("AB/CD");
        assert_eq!(locate_word_path(&grid, &word("ABC")), None);
    }

    #[test]
    fn test_spells() {
        let grid = grid("CATX/XXXX/XXXX/XXXX");
        assert!(spells(&grid, &[0, 1, 2], &word("CAT")));
        assert!(spells(&grid, &[2, 1, 0], &word("CAT")));
        assert!(!spells(&grid, &[0, 1], &word("CAT")));
        assert!(!spells(&grid, &[0, 1, 20], &word("CAT")));
    }

    proptest! {
        #[test]
        fn test_traced_path_resolves_to_written_word(
            x in 0usize..6,
            y in 0usize..6,
            dir_index in 0usize..8,
            text in "[A-Z]{2,4}",
        ) {
            let size = 6;
            let direction = Direction::ALL[dir_index];
            let target = word(&text);
            let path = trace_path(Position::new(x, y), direction, target.len(), size);
            prop_assume!(path.is_some());
            let path = path.unwrap();

            let mut cells = vec![Letter::from_index(0); size * size];
            for (&index, &letter) in path.iter().zip(target.letters()) {
                cells[index] = letter;
            }
            let grid = LetterGrid::from_cells(size, cells).unwrap();

            prop_assert_eq!(resolve_selection(&path, &grid), text.clone());
            let backwards: Vec<usize> = path.iter().rev().copied().collect();
            prop_assert_eq!(resolve_selection(&backwards, &grid), target.reversed().to_string());

            let located = locate_word_path(&grid, &target).unwrap();
            prop_assert!(spells(&grid, &located, &target));
        }
    }
}
