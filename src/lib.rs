//! # hexgame
//!
//! A Hex (connection game) engine with pluggable move sources.
//!
//! Two players place stones on a rhombic grid of side N. The first player
//! connects the top row to the bottom row; the second player connects the
//! left column to the right column. The first unbroken same-owner chain
//! between a player's two sides wins.
//!
//! ## Design Principles
//!
//! 1. **No I/O in the core**: the library sequences board mutation,
//!    connectivity queries, and move-source calls. Rendering and console
//!    input live in the binary shell.
//!
//! 2. **Derived state**: `GameState` is recomputed from occupancy and the
//!    turn counter on demand, never cached across moves.
//!
//! 3. **Composition over inheritance**: sources that track the game keep
//!    their own shadow `Board`; the engine owns exactly one `Board` and one
//!    `NeighborTable`.
//!
//! ## Modules
//!
//! - `core`: player IDs, per-player pairs, cells, deterministic RNG
//! - `board`: grid topology (hex adjacency) and the occupancy board
//! - `analysis`: edge-to-edge connectivity, connected-component tracking
//! - `engine`: the turn state machine
//! - `players`: the `MoveSource` trait and concrete sources

pub mod core;
pub mod board;
pub mod analysis;
pub mod engine;
pub mod players;

// Re-export commonly used types
pub use crate::core::{Cell, GameRng, PlayerId, PlayerPair};

pub use crate::board::{Board, MoveError, MoveRecord, NeighborTable, Occupancy};

pub use crate::analysis::{has_won, ComponentTracker};

pub use crate::engine::{Game, GameState};

pub use crate::players::{MoveSource, RandomSource, ScriptedSource};
