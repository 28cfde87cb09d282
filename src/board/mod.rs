//! The playing surface: hex-lattice topology and the occupancy board.
//!
//! `NeighborTable` is a pure function of board size, computed once and
//! immutable afterwards. `Board` owns the occupancy grid, the turn counter,
//! and the move history; it applies moves but never decides game over.

pub mod grid;
pub mod topology;

pub use grid::{Board, MoveError, MoveRecord, Occupancy};
pub use topology::NeighborTable;
