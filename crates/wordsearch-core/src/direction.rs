//! The eight compass directions.

use crate::Position;

/// A unit step along a row, a column, or a diagonal.
///
/// Used both for placing words into the grid and for validating and matching
/// selections, so placement and lookup always agree on what a straight line is.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Direction, Position};
///
/// assert_eq!(Direction::UpRight.dx(), 1);
/// assert_eq!(Direction::UpRight.dy(), -1);
/// assert_eq!(Direction::UpRight.reversed(), Direction::DownLeft);
///
/// // Non-adjacent cells on the same diagonal normalize to a unit step
/// let dir = Direction::between(Position::new(0, 0), Position::new(3, 3));
/// assert_eq!(dir, Some(Direction::DownRight));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Direction {
    /// `(1, 0)`
    #[display("right")]
    Right,
    /// `(0, 1)`
    #[display("down")]
    Down,
    /// `(1, 1)`
    #[display("down-right")]
    DownRight,
    /// `(-1, 0)`
    #[display("left")]
    Left,
    /// `(0, -1)`
    #[display("up")]
    Up,
    /// `(-1, -1)`
    #[display("up-left")]
    UpLeft,
    /// `(1, -1)`
    #[display("up-right")]
    UpRight,
    /// `(-1, 1)`
    #[display("down-left")]
    DownLeft,
}

impl Direction {
    /// All directions, in the order random placement draws from.
    pub const ALL: [Self; 8] = [
        Self::Right,
        Self::Down,
        Self::DownRight,
        Self::Left,
        Self::Up,
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
    ];

    /// All directions, in the order a word search tries them from each start cell.
    ///
    /// Each direction is immediately followed by its reverse.
    pub const SCAN_ORDER: [Self; 8] = [
        Self::Right,
        Self::Left,
        Self::Down,
        Self::Up,
        Self::DownRight,
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
    ];

    /// Returns the horizontal component (-1, 0 or 1).
    #[must_use]
    pub const fn dx(self) -> i8 {
        match self {
            Self::Right | Self::DownRight | Self::UpRight => 1,
            Self::Down | Self::Up => 0,
            Self::Left | Self::UpLeft | Self::DownLeft => -1,
        }
    }

    /// Returns the vertical component (-1, 0 or 1).
    #[must_use]
    pub const fn dy(self) -> i8 {
        match self {
            Self::Down | Self::DownRight | Self::DownLeft => 1,
            Self::Right | Self::Left => 0,
            Self::Up | Self::UpLeft | Self::UpRight => -1,
        }
    }

    /// Returns the direction with the given components, if it is one of the eight.
    #[must_use]
    pub const fn from_unit(dx: isize, dy: isize) -> Option<Self> {
        match (dx, dy) {
            (1, 0) => Some(Self::Right),
            (0, 1) => Some(Self::Down),
            (1, 1) => Some(Self::DownRight),
            (-1, 0) => Some(Self::Left),
            (0, -1) => Some(Self::Up),
            (-1, -1) => Some(Self::UpLeft),
            (1, -1) => Some(Self::UpRight),
            (-1, 1) => Some(Self::DownLeft),
            _ => None,
        }
    }

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::DownRight => Self::UpLeft,
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::UpLeft => Self::DownRight,
            Self::UpRight => Self::DownLeft,
            Self::DownLeft => Self::UpRight,
        }
    }

    /// Returns the direction from `from` to `to`, normalized by the Chebyshev
    /// distance `max(|dx|, |dy|)`.
    ///
    /// Returns `None` when the positions coincide, or when the offset does not lie
    /// on a row, column or diagonal (a knight-like jump such as `(2, 1)`).
    /// Distance itself is not checked: `(0, 0)` to `(3, 0)` yields [`Direction::Right`].
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<Self> {
        let (dx, dy) = from.delta_to(to);
        let length = dx.abs().max(dy.abs());
        if length == 0 || dx % length != 0 || dy % length != 0 {
            return None;
        }
        Self::from_unit(dx / length, dy / length)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_display_names() {
        let names: Vec<String> = Direction::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            ["right", "down", "down-right", "left", "up", "up-left", "up-right", "down-left"]
        );
    }

    #[test]
    fn test_all_directions_are_distinct_units() {
        let vectors: HashSet<_> = Direction::ALL.iter().map(|d| (d.dx(), d.dy())).collect();
        assert_eq!(vectors.len(), 8);
        assert!(!vectors.contains(&(0, 0)));

        let scan: HashSet<_> = Direction::SCAN_ORDER.into_iter().collect();
        assert_eq!(scan, Direction::ALL.into_iter().collect());
    }

    #[test]
    fn test_from_unit_round_trip() {
        for dir in Direction::ALL {
            let found = Direction::from_unit(isize::from(dir.dx()), isize::from(dir.dy()));
            assert_eq!(found, Some(dir));
        }
        assert_eq!(Direction::from_unit(0, 0), None);
        assert_eq!(Direction::from_unit(2, 0), None);
    }

    #[test]
    fn test_reversed_negates() {
        for dir in Direction::ALL {
            let rev = dir.reversed();
            assert_eq!((rev.dx(), rev.dy()), (-dir.dx(), -dir.dy()));
            assert_eq!(rev.reversed(), dir);
        }
    }

    #[test]
    fn test_scan_order_pairs_reverses() {
        for pair in Direction::SCAN_ORDER.chunks(2) {
            assert_eq!(pair[0].reversed(), pair[1]);
        }
    }

    #[test]
    fn test_between() {
        let origin = Position::new(2, 2);
        assert_eq!(Direction::between(origin, origin), None);
        assert_eq!(
            Direction::between(origin, Position::new(3, 2)),
            Some(Direction::Right)
        );
        assert_eq!(
            Direction::between(origin, Position::new(0, 0)),
            Some(Direction::UpLeft)
        );
        assert_eq!(
            Direction::between(origin, Position::new(4, 0)),
            Some(Direction::UpRight)
        );
        assert_eq!(Direction::between(origin, Position::new(4, 3)), None);
        assert_eq!(Direction::between(origin, Position::new(3, 4)), None);
    }

    proptest! {
        #[test]
        fn test_between_recovers_step_direction(
            dir_index in 0usize..8,
            steps in 1usize..10,
        ) {
            let dir = Direction::ALL[dir_index];
            let start = Position::new(10, 10);
            let end = start.step(dir, steps, 21).unwrap();
            prop_assert_eq!(Direction::between(start, end), Some(dir));
            prop_assert_eq!(Direction::between(end, start), Some(dir.reversed()));
        }
    }
}
