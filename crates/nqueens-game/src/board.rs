//! The board controller.

use std::mem;

use nqueens_core::{BoardSize, ConflictReport, Placement, Position, Validity, find_conflicts};
use nqueens_solver::SolverError;

use crate::history::HistoryStack;

/// Error returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The addressed cell lies outside the current board.
    #[display("position {position} is outside the {size}x{size} board")]
    OutOfBounds {
        /// The rejected position.
        position: Position,
        /// The current board size.
        size: u8,
    },
}

/// What a [`Board::toggle`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ToggleOutcome {
    /// A queen was added at the cell.
    Placed,
    /// The queen occupying the cell was removed.
    Removed,
    /// The board already holds N queens; nothing changed.
    AtCapacity,
}

/// The board controller: owns the current placement and its undo history.
///
/// Every placement change reads the current placement, computes a new one,
/// and swaps it in while archiving the previous value, so a single
/// [`Board::undo`] reverts a single user-visible action — including
/// [`Board::solve`], which replaces the whole placement at once.
///
/// Conflict information is recomputed from the current placement on every
/// [`Board::conflicts`] call; no derived state is cached, so rendering can
/// never observe a stale report.
///
/// # Examples
///
/// ```
/// use nqueens_core::{BoardSize, Position};
/// use nqueens_game::{Board, ToggleOutcome};
///
/// let mut board = Board::new(BoardSize::new(4));
/// let outcome = board.toggle(Position::new(0, 1))?;
/// assert_eq!(outcome, ToggleOutcome::Placed);
///
/// // Toggling the same cell removes the queen again
/// let outcome = board.toggle(Position::new(0, 1))?;
/// assert_eq!(outcome, ToggleOutcome::Removed);
/// # Ok::<(), nqueens_game::BoardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    size: BoardSize,
    placement: Placement,
    history: HistoryStack<Placement>,
}

impl Board {
    /// Creates an empty board of the given size.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            placement: Placement::new(),
            history: HistoryStack::new(),
        }
    }

    /// Returns the current board size.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the current placement.
    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Recomputes the conflict report for the current placement.
    #[must_use]
    pub fn conflicts(&self) -> ConflictReport {
        find_conflicts(&self.placement, self.size)
    }

    /// Returns the validity verdict for the current placement.
    #[must_use]
    pub fn validity(&self) -> Validity {
        self.conflicts().validity()
    }

    /// Returns `true` if a [`Board::undo`] would change anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Adds or removes a queen at `position`.
    ///
    /// Removal is always allowed. Adding requires a free queen slot: once
    /// the board holds N queens, toggling an empty cell is a no-op that
    /// reports [`ToggleOutcome::AtCapacity`] and records no history entry.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `position` does not fit the
    /// current board.
    pub fn toggle(&mut self, position: Position) -> Result<ToggleOutcome, BoardError> {
        if !self.size.contains(position) {
            return Err(BoardError::OutOfBounds {
                position,
                size: self.size.get(),
            });
        }

        if self.placement.contains(position) {
            let mut next = self.placement.clone();
            next.remove(position);
            self.commit(next);
            return Ok(ToggleOutcome::Removed);
        }

        if self.placement.len() == self.size.queen_count() {
            return Ok(ToggleOutcome::AtCapacity);
        }

        let mut next = self.placement.clone();
        next.insert(position);
        self.commit(next);
        Ok(ToggleOutcome::Placed)
    }

    /// Replaces the placement with a freshly computed full solution.
    ///
    /// Queens already on the board are ignored: the solver restarts from
    /// an empty board, and the previous placement becomes a single
    /// history entry, so one undo restores it.
    ///
    /// # Errors
    ///
    /// Forwards [`SolverError::NoSolution`] from the solver; on error the
    /// board is left untouched. Cannot happen for the supported sizes.
    pub fn solve(&mut self) -> Result<(), SolverError> {
        let solution = nqueens_solver::solve(self.size)?;
        self.commit(solution);
        Ok(())
    }

    /// Clears the placement and the undo history.
    ///
    /// Reset itself is not undoable.
    pub fn reset(&mut self) {
        self.placement = Placement::new();
        self.history.clear();
    }

    /// Restores the placement that preceded the last change.
    ///
    /// Returns `false` (leaving the board untouched) when the history is
    /// empty; check [`Board::can_undo`] to disable the affected control.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.placement = previous;
                true
            }
            None => false,
        }
    }

    /// Switches to a new board size, clearing the placement and history.
    ///
    /// A size change invalidates every stored coordinate, so this always
    /// behaves like [`Board::reset`] regardless of prior state.
    pub fn set_size(&mut self, size: BoardSize) {
        self.size = size;
        self.reset();
    }

    fn commit(&mut self, next: Placement) {
        let previous = mem::replace(&mut self.placement, next);
        self.history.push(previous);
    }
}

#[cfg(test)]
mod tests {
    use nqueens_core::Validity;

    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_toggle_round_trip_restores_placement() {
        let mut board = Board::new(BoardSize::new(4));
        board.toggle(pos(1, 1)).unwrap();
        let before = board.placement().clone();

        assert_eq!(board.toggle(pos(2, 3)), Ok(ToggleOutcome::Placed));
        assert_eq!(board.toggle(pos(2, 3)), Ok(ToggleOutcome::Removed));
        assert_eq!(board.placement(), &before);

        // The round trip produced two history entries; two undos walk
        // back through both intermediate states
        assert!(board.undo());
        assert!(board.placement().contains(pos(2, 3)));
        assert!(board.undo());
        assert_eq!(board.placement(), &before);
    }

    #[test]
    fn test_toggle_at_capacity_is_noop() {
        let mut board = Board::new(BoardSize::new(4));
        for col in 0..4 {
            board.toggle(pos(0, col)).unwrap();
        }
        assert_eq!(board.placement().len(), 4);

        assert_eq!(board.toggle(pos(3, 3)), Ok(ToggleOutcome::AtCapacity));
        assert_eq!(board.placement().len(), 4);
        assert!(!board.placement().contains(pos(3, 3)));

        // Exactly the four placing toggles are undoable; the rejected
        // toggle recorded no history entry
        for _ in 0..4 {
            assert!(board.undo());
        }
        assert!(!board.undo());
    }

    #[test]
    fn test_toggle_out_of_bounds_is_rejected() {
        let mut board = Board::new(BoardSize::new(4));
        let result = board.toggle(pos(4, 0));
        assert_eq!(
            result,
            Err(BoardError::OutOfBounds {
                position: pos(4, 0),
                size: 4,
            })
        );
        assert!(board.placement().is_empty());
        assert!(!board.can_undo());
    }

    #[test]
    fn test_solve_is_undoable_in_one_step() {
        let mut board = Board::new(BoardSize::new(6));
        board.toggle(pos(0, 0)).unwrap();
        board.toggle(pos(5, 5)).unwrap();
        let before = board.placement().clone();

        board.solve().unwrap();
        assert_eq!(board.placement().len(), 6);
        assert_eq!(board.validity(), Validity::Valid);

        assert!(board.undo());
        assert_eq!(board.placement(), &before);
    }

    #[test]
    fn test_solve_ignores_existing_queens() {
        // A conflicting pair on the board does not influence the solution
        let mut board = Board::new(BoardSize::new(4));
        board.toggle(pos(0, 0)).unwrap();
        board.toggle(pos(0, 1)).unwrap();

        board.solve().unwrap();
        assert!(!board.placement().contains(pos(0, 0)));
        assert_eq!(board.validity(), Validity::Valid);
    }

    #[test]
    fn test_undo_walks_back_every_change() {
        let mut board = Board::new(BoardSize::new(5));
        let actions = [pos(0, 0), pos(1, 2), pos(2, 4), pos(3, 1)];
        for &p in &actions {
            board.toggle(p).unwrap();
        }
        board.solve().unwrap();

        // Five placement-changing operations, five undos back to empty
        for _ in 0..actions.len() + 1 {
            assert!(board.undo());
        }
        assert!(board.placement().is_empty());
        assert!(!board.can_undo());
        assert!(!board.undo());
    }

    #[test]
    fn test_reset_clears_placement_and_history() {
        let mut board = Board::new(BoardSize::new(4));
        board.toggle(pos(0, 0)).unwrap();
        board.toggle(pos(1, 2)).unwrap();

        board.reset();

        assert!(board.placement().is_empty());
        assert!(!board.can_undo());
    }

    #[test]
    fn test_set_size_clears_placement_and_history() {
        let mut board = Board::new(BoardSize::new(8));
        board.toggle(pos(7, 7)).unwrap();
        assert!(board.can_undo());

        board.set_size(BoardSize::new(4));

        assert_eq!(board.size(), BoardSize::new(4));
        assert!(board.placement().is_empty());
        assert!(!board.can_undo());
    }

    #[test]
    fn test_validity_tracks_completion() {
        let mut board = Board::new(BoardSize::new(4));
        assert_eq!(board.validity(), Validity::Unknown);

        // A valid 4-queens solution, placed by hand
        for (row, col) in [(0, 1), (1, 3), (2, 0), (3, 2)] {
            board.toggle(pos(row, col)).unwrap();
        }
        assert_eq!(board.validity(), Validity::Valid);

        // Swap one queen onto an attacked cell
        board.toggle(pos(3, 2)).unwrap();
        board.toggle(pos(3, 3)).unwrap();
        assert_eq!(board.validity(), Validity::Invalid);
        // (1,3) and (3,3) now share a column
        assert!(board.conflicts().conflicts().contains(pos(1, 3)));
        assert!(board.conflicts().conflicts().contains(pos(3, 3)));
    }
}
