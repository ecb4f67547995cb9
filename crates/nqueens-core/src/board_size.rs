//! Validated board size.

use std::fmt::{self, Display};

use crate::Position;

/// A board size (and queen-count target) in the supported range 4-12.
///
/// The puzzle is always "full N-Queens": an N×N board must receive exactly
/// N queens, so a single value determines both the board dimensions and the
/// target queen count. Sizes outside 4-12 are unrepresentable; boards of
/// size 2 and 3 have no solution and larger boards are out of scope.
///
/// # Examples
///
/// ```
/// use nqueens_core::BoardSize;
///
/// let size = BoardSize::new(8);
/// assert_eq!(size.get(), 8);
/// assert_eq!(size.queen_count(), 8);
///
/// assert!(BoardSize::try_new(3).is_err());
/// assert!(BoardSize::try_new(13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardSize(u8);

impl BoardSize {
    /// The smallest supported board size.
    pub const MIN: Self = Self(4);
    /// The largest supported board size.
    pub const MAX: Self = Self(12);

    /// Creates a board size, rejecting values outside the supported range.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSizeError`] if `size` is not in the range 4-12.
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_core::BoardSize;
    ///
    /// assert_eq!(BoardSize::try_new(4), Ok(BoardSize::MIN));
    /// assert!(BoardSize::try_new(0).is_err());
    /// ```
    pub const fn try_new(size: u8) -> Result<Self, BoardSizeError> {
        if size >= Self::MIN.0 && size <= Self::MAX.0 {
            Ok(Self(size))
        } else {
            Err(BoardSizeError { size })
        }
    }

    /// Creates a board size from a value in the range 4-12.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not in the range 4-12.
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_core::BoardSize;
    ///
    /// let size = BoardSize::new(12);
    /// assert_eq!(size, BoardSize::MAX);
    /// ```
    ///
    /// ```should_panic
    /// use nqueens_core::BoardSize;
    ///
    /// // This will panic
    /// let _ = BoardSize::new(3);
    /// ```
    #[must_use]
    pub fn new(size: u8) -> Self {
        match Self::try_new(size) {
            Ok(board_size) => board_size,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the numeric size (4-12).
    #[must_use]
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the number of queens a full placement must hold.
    ///
    /// Always equal to the board size.
    #[must_use]
    #[inline]
    pub const fn queen_count(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` if `pos` lies within an N×N board of this size.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row() < self.0 && pos.col() < self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(8)
    }
}

impl Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> u8 {
        size.get()
    }
}

/// Error returned when constructing a [`BoardSize`] outside the supported
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("board size {size} is out of range (supported: 4-12)")]
pub struct BoardSizeError {
    /// The rejected size value.
    pub size: u8,
}
