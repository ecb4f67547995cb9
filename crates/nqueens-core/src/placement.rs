//! Queen placements.

use std::slice;

use crate::Position;

/// An insertion-ordered, duplicate-free set of queen positions.
///
/// A placement never holds the same position twice: [`Placement::insert`]
/// refuses duplicates, so toggling an occupied cell removes the queen
/// instead of doubling it. Callers that need change tracking clone the
/// placement, mutate the clone, and archive the original; the type itself
/// carries no history.
///
/// # Examples
///
/// ```
/// use nqueens_core::{Placement, Position};
///
/// let mut placement = Placement::new();
/// assert!(placement.insert(Position::new(0, 1)));
/// assert!(!placement.insert(Position::new(0, 1))); // duplicate rejected
/// assert_eq!(placement.len(), 1);
///
/// assert!(placement.remove(Position::new(0, 1)));
/// assert!(placement.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    positions: Vec<Position>,
}

impl Placement {
    /// Creates an empty placement.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    /// Returns the number of queens placed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if no queens are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns `true` if a queen occupies `pos`.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Adds a queen at `pos`.
    ///
    /// Returns `false` (and changes nothing) if the position is already
    /// occupied.
    pub fn insert(&mut self, pos: Position) -> bool {
        if self.contains(pos) {
            return false;
        }
        self.positions.push(pos);
        true
    }

    /// Removes the queen at `pos`, preserving the order of the rest.
    ///
    /// Returns `false` if the position was empty.
    pub fn remove(&mut self, pos: Position) -> bool {
        match self.positions.iter().position(|&p| p == pos) {
            Some(index) => {
                self.positions.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the positions in insertion order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns an iterator over the positions in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Position> {
        self.positions.iter()
    }
}

impl FromIterator<Position> for Placement {
    /// Collects positions into a placement, ignoring duplicates.
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut placement = Self::new();
        for pos in iter {
            placement.insert(pos);
        }
        placement
    }
}

impl<'a> IntoIterator for &'a Placement {
    type Item = &'a Position;
    type IntoIter = slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_remove_round_trip() {
        let mut placement = Placement::new();
        let pos = Position::new(2, 3);

        assert!(placement.insert(pos));
        assert!(placement.contains(pos));
        assert_eq!(placement.len(), 1);

        assert!(placement.remove(pos));
        assert!(!placement.contains(pos));
        assert!(placement.is_empty());
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let mut placement = Placement::new();
        assert!(placement.insert(Position::new(1, 1)));
        assert!(!placement.insert(Position::new(1, 1)));
        assert_eq!(placement.len(), 1);
    }

    #[test]
    fn test_remove_absent_position_is_noop() {
        let mut placement = Placement::new();
        placement.insert(Position::new(0, 0));
        assert!(!placement.remove(Position::new(5, 5)));
        assert_eq!(placement.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved_across_removal() {
        let a = Position::new(0, 0);
        let b = Position::new(1, 2);
        let c = Position::new(2, 4);
        let mut placement: Placement = [a, b, c].into_iter().collect();

        placement.remove(b);
        assert_eq!(placement.positions(), &[a, c]);
    }

    #[test]
    fn test_from_iterator_deduplicates() {
        let pos = Position::new(3, 3);
        let placement: Placement = [pos, pos, Position::new(0, 0)].into_iter().collect();
        assert_eq!(placement.len(), 2);
    }
}
