//! Terminal rendering of grids.

use std::{collections::HashSet, fmt::Write as _};

use wordsearch_core::LetterGrid;

/// Renders `grid` with row and column numbers.
///
/// Cells in `highlighted` are shown in lowercase.
pub(crate) fn render_grid(grid: &LetterGrid, highlighted: &HashSet<usize>) -> String {
    let size = grid.size();
    let width = size.saturating_sub(1).to_string().len();

    let mut out = String::new();
    let _ = write!(out, "{:width$} ", "");
    for x in 0..size {
        let _ = write!(out, " {x:>width$}");
    }
    out.push('\n');

    for (y, row) in grid.rows().enumerate() {
        let _ = write!(out, "{y:>width$} ");
        for (x, letter) in row.iter().enumerate() {
            let ch = if highlighted.contains(&(y * size + x)) {
                letter.as_char().to_ascii_lowercase()
            } else {
                letter.as_char()
            };
            let _ = write!(out, " {ch:>width$}");
        }
        out.push('\n');
    }
    out
}
