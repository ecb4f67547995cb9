//! Core data structures for the N-Queens puzzle.
//!
//! This crate provides the value types shared by the solver, the game
//! controller, and the UI:
//!
//! 1. **Board geometry**
//!    - [`position`]: board cell coordinates and the queen attack predicate
//!    - [`board_size`]: validated board size in the supported 4-12 range
//!
//! 2. **Placements and their evaluation**
//!    - [`placement`]: duplicate-free sets of queen positions
//!    - [`conflict`]: mutual-attack detection and the tri-state validity
//!      verdict derived from it
//!
//! # Examples
//!
//! ```
//! use nqueens_core::{BoardSize, Placement, Position, Validity, find_conflicts};
//!
//! let size = BoardSize::new(4);
//! let mut placement = Placement::new();
//! placement.insert(Position::new(0, 0));
//! placement.insert(Position::new(1, 1));
//!
//! // Partial placements are never flagged
//! let report = find_conflicts(&placement, size);
//! assert_eq!(report.validity(), Validity::Unknown);
//! assert!(report.conflicts().is_empty());
//! ```

pub mod board_size;
pub mod conflict;
pub mod placement;
pub mod position;

// Re-export commonly used types
pub use self::{
    board_size::{BoardSize, BoardSizeError},
    conflict::{ConflictReport, ConflictSet, Validity, find_conflicts},
    placement::Placement,
    position::Position,
};
