//! Backtracking solver for the N-Queens puzzle.
//!
//! The solver fills the board row by row, trying columns in ascending
//! order and tracking occupied columns and diagonals so each candidate
//! cell is checked in constant time. The first full placement found is
//! returned, which makes the output the lexicographically-first solution
//! under (row, column) ordering and therefore fully deterministic.
//!
//! # Examples
//!
//! ```
//! use nqueens_core::{BoardSize, Validity, find_conflicts};
//! use nqueens_solver::solve;
//!
//! let size = BoardSize::new(8);
//! let solution = solve(size)?;
//!
//! assert_eq!(solution.len(), 8);
//! assert_eq!(find_conflicts(&solution, size).validity(), Validity::Valid);
//! # Ok::<(), nqueens_solver::SolverError>(())
//! ```

use nqueens_core::{BoardSize, Placement, Position};

/// Error produced when the search space is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// No arrangement of N non-attacking queens exists on the N×N board.
    #[display("no non-attacking arrangement of {size} queens exists on a {size}x{size} board")]
    NoSolution {
        /// The board size the search ran on.
        size: u8,
    },
}

/// Finds one full placement of non-attacking queens for the given board
/// size.
///
/// Rows are processed in ascending order and columns tried in ascending
/// order within each row, so the result is always the lexicographically
/// smallest solution; repeated calls yield identical placements. The
/// returned placement holds exactly N positions, one per row, with an
/// empty conflict set.
///
/// Any existing board state is irrelevant here: the search always starts
/// from an empty board.
///
/// # Errors
///
/// Returns [`SolverError::NoSolution`] when the search exhausts every
/// branch. Every size in the supported 4-12 range has a solution, so for
/// a [`BoardSize`] this cannot happen in practice; the explicit error
/// guards the contract should the range ever grow.
pub fn solve(size: BoardSize) -> Result<Placement, SolverError> {
    let mut search = Search::new(size.get());
    if search.place_from(0) {
        Ok(search.into_placement())
    } else {
        Err(SolverError::NoSolution { size: size.get() })
    }
}

/// Occupancy tracking for the backtracking search.
///
/// Columns are indexed directly; down diagonals ("\\", constant
/// `row + col`) and up diagonals ("/", constant `row - col`, shifted by
/// `n - 1` to stay non-negative) each get `2n - 1` slots.
struct Search {
    n: u8,
    columns: Vec<bool>,
    down_diagonals: Vec<bool>,
    up_diagonals: Vec<bool>,
    queen_columns: Vec<u8>,
}

impl Search {
    fn new(n: u8) -> Self {
        let n_usize = usize::from(n);
        Self {
            n,
            columns: vec![false; n_usize],
            down_diagonals: vec![false; 2 * n_usize - 1],
            up_diagonals: vec![false; 2 * n_usize - 1],
            queen_columns: Vec::with_capacity(n_usize),
        }
    }

    fn is_open(&self, row: u8, col: u8) -> bool {
        !self.columns[usize::from(col)]
            && !self.down_diagonals[usize::from(row) + usize::from(col)]
            && !self.up_diagonals[usize::from(row + self.n - 1 - col)]
    }

    fn set_occupied(&mut self, row: u8, col: u8, occupied: bool) {
        self.columns[usize::from(col)] = occupied;
        self.down_diagonals[usize::from(row) + usize::from(col)] = occupied;
        self.up_diagonals[usize::from(row + self.n - 1 - col)] = occupied;
    }

    /// Places queens on `row` and every row below it.
    ///
    /// Returns `true` as soon as one assignment works out; on failure the
    /// tentative queen for this row has already been unwound.
    fn place_from(&mut self, row: u8) -> bool {
        if row == self.n {
            return true;
        }
        for col in 0..self.n {
            if !self.is_open(row, col) {
                continue;
            }
            self.set_occupied(row, col, true);
            self.queen_columns.push(col);
            if self.place_from(row + 1) {
                return true;
            }
            self.queen_columns.pop();
            self.set_occupied(row, col, false);
        }
        false
    }

    fn into_placement(self) -> Placement {
        self.queen_columns
            .into_iter()
            .zip(0..self.n)
            .map(|(col, row)| Position::new(row, col))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use nqueens_core::{Validity, find_conflicts};

    use super::*;

    fn columns_of(placement: &Placement) -> Vec<u8> {
        placement.iter().map(|pos| pos.col()).collect()
    }

    #[test]
    fn test_all_supported_sizes_solve_cleanly() {
        for n in 4..=12 {
            let size = BoardSize::new(n);
            let solution = solve(size).expect("supported sizes are solvable");

            // Exactly N queens, one per row, in row order
            assert_eq!(solution.len(), usize::from(n));
            for (row, pos) in (0..n).zip(solution.iter()) {
                assert_eq!(pos.row(), row);
            }

            let report = find_conflicts(&solution, size);
            assert_eq!(report.validity(), Validity::Valid);
            assert!(report.conflicts().is_empty());
        }
    }

    #[test]
    fn test_four_queens_first_solution() {
        let solution = solve(BoardSize::new(4)).unwrap();
        assert_eq!(
            solution.positions(),
            &[
                Position::new(0, 1),
                Position::new(1, 3),
                Position::new(2, 0),
                Position::new(3, 2),
            ]
        );
    }

    #[test]
    fn test_lexicographically_first_solutions() {
        // Known first solutions under (row asc, column asc) search order,
        // expressed as the column chosen for each row
        assert_eq!(columns_of(&solve(BoardSize::new(5)).unwrap()), [0, 2, 4, 1, 3]);
        assert_eq!(
            columns_of(&solve(BoardSize::new(6)).unwrap()),
            [1, 3, 5, 0, 2, 4]
        );
        assert_eq!(
            columns_of(&solve(BoardSize::new(8)).unwrap()),
            [0, 4, 7, 5, 2, 6, 1, 3]
        );
    }

    #[test]
    fn test_solver_is_deterministic() {
        for n in [4, 7, 12] {
            let size = BoardSize::new(n);
            assert_eq!(solve(size).unwrap(), solve(size).unwrap());
        }
    }
}
