//! Mutual-attack detection for placements.

use crate::{BoardSize, Placement, Position};

/// Tri-state verdict for a placement.
///
/// A verdict is only meaningful once the placement is full-size: a partial
/// placement can always still become a solution, so it reports
/// [`Validity::Unknown`] and no conflicts are surfaced for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Validity {
    /// Fewer queens than the board size; no verdict yet.
    Unknown,
    /// A full placement with no mutual attacks.
    Valid,
    /// A full placement with at least one attacking pair.
    Invalid,
}

/// The queens of a placement that participate in at least one attacking
/// pair.
///
/// Positions are kept row-major sorted and deduplicated, so a queen that
/// attacks several others still appears once and rendering order is
/// deterministic. A conflict set is always a subset of the placement it
/// was computed from; it is derived state and never stored across
/// placement changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictSet {
    positions: Vec<Position>,
}

impl ConflictSet {
    fn insert(&mut self, pos: Position) {
        if let Err(index) = self.positions.binary_search(&pos) {
            self.positions.insert(index, pos);
        }
    }

    /// Returns the number of conflicting queens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if no queen attacks another.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns `true` if the queen at `pos` attacks another queen.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.binary_search(&pos).is_ok()
    }

    /// Returns the conflicting positions in row-major order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns an iterator over the conflicting positions in row-major
    /// order.
    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.positions.iter()
    }
}

/// Outcome of a conflict check: the conflict set plus the validity verdict
/// derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictReport {
    conflicts: ConflictSet,
    validity: Validity,
}

impl ConflictReport {
    /// Returns the set of mutually attacking queens.
    #[must_use]
    pub fn conflicts(&self) -> &ConflictSet {
        &self.conflicts
    }

    /// Returns the validity verdict.
    #[must_use]
    pub fn validity(&self) -> Validity {
        self.validity
    }
}

/// Reports every queen in `placement` that attacks another.
///
/// A placement with fewer than `size` queens yields an empty conflict set
/// and [`Validity::Unknown`]. Once the placement is full, every unordered
/// pair of positions is checked (same row, same column, or same diagonal)
/// and both members of each attacking pair are reported. An empty set for
/// a full placement means the placement is a valid solution.
///
/// The check is pure and idempotent: the same placement always yields the
/// same report.
///
/// # Examples
///
/// ```
/// use nqueens_core::{BoardSize, Placement, Position, Validity, find_conflicts};
///
/// let size = BoardSize::new(4);
/// let placement: Placement = [
///     Position::new(0, 1),
///     Position::new(1, 3),
///     Position::new(2, 0),
///     Position::new(3, 2),
/// ]
/// .into_iter()
/// .collect();
///
/// let report = find_conflicts(&placement, size);
/// assert_eq!(report.validity(), Validity::Valid);
/// ```
#[must_use]
pub fn find_conflicts(placement: &Placement, size: BoardSize) -> ConflictReport {
    if placement.len() < size.queen_count() {
        return ConflictReport {
            conflicts: ConflictSet::default(),
            validity: Validity::Unknown,
        };
    }

    let mut conflicts = ConflictSet::default();
    let positions = placement.positions();
    for (i, &a) in positions.iter().enumerate() {
        for &b in &positions[i + 1..] {
            if a.attacks(b) {
                conflicts.insert(a);
                conflicts.insert(b);
            }
        }
    }

    let validity = if conflicts.is_empty() {
        Validity::Valid
    } else {
        Validity::Invalid
    };
    ConflictReport {
        conflicts,
        validity,
    }
}
