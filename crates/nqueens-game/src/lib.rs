//! Game state management for the N-Queens puzzle.
//!
//! This crate ties the core types and the solver together behind a single
//! [`Board`] controller. The board owns the current placement and a
//! bounded [`HistoryStack`] of pre-change snapshots, and exposes the
//! operations a UI needs: toggling cells, auto-solving, resetting,
//! undoing, and changing the board size.
//!
//! # Examples
//!
//! ```
//! use nqueens_core::{BoardSize, Position, Validity};
//! use nqueens_game::Board;
//!
//! let mut board = Board::new(BoardSize::new(4));
//! board.toggle(Position::new(0, 0))?;
//! assert_eq!(board.validity(), Validity::Unknown);
//!
//! board.solve()?;
//! assert_eq!(board.validity(), Validity::Valid);
//!
//! // One undo reverts the whole solve
//! assert!(board.undo());
//! assert_eq!(board.placement().len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    board::{Board, BoardError, ToggleOutcome},
    history::HistoryStack,
};

mod board;
mod history;
