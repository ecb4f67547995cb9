//! Board position representation.

use std::fmt::{self, Display};

/// A board cell identified by zero-based `(row, column)` coordinates.
///
/// Positions are immutable `Copy` values with a row-major total order
/// (row first, then column), which keeps solver output and conflict
/// reporting deterministic.
///
/// # Examples
///
/// ```
/// use nqueens_core::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 5);
///
/// // Queens on the same diagonal attack each other
/// assert!(pos.attacks(Position::new(4, 7)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from zero-based row and column coordinates.
    #[must_use]
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the zero-based row.
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the zero-based column.
    #[must_use]
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns `true` if queens at `self` and `other` would attack each
    /// other: same row, same column, or same diagonal (either direction).
    ///
    /// A position never attacks itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_core::Position;
    ///
    /// assert!(Position::new(0, 0).attacks(Position::new(0, 3))); // row
    /// assert!(Position::new(0, 0).attacks(Position::new(3, 0))); // column
    /// assert!(Position::new(0, 0).attacks(Position::new(2, 2))); // diagonal
    /// assert!(!Position::new(0, 0).attacks(Position::new(1, 2)));
    /// assert!(!Position::new(0, 0).attacks(Position::new(0, 0)));
    /// ```
    #[must_use]
    pub const fn attacks(self, other: Self) -> bool {
        if self.row == other.row && self.col == other.col {
            return false;
        }
        self.row == other.row
            || self.col == other.col
            || self.row.abs_diff(other.row) == self.col.abs_diff(other.col)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
