//! Move sources: where the next move comes from.
//!
//! Dispatch is via the `MoveSource` trait object, not inheritance; an
//! interactive console source lives in the binary shell and implements the
//! same trait there.

pub mod random;
pub mod scripted;

pub use random::RandomSource;
pub use scripted::ScriptedSource;

use crate::core::Cell;

/// Supplies the next move for one player.
///
/// The engine calls `propose_move` with the opponent's most recent move
/// (`None` on the game's first turn) and applies the returned cell. If the
/// cell is rejected (`OutOfRange`, `CellTaken`) the engine calls again on
/// the same source with the same argument — sources must tolerate
/// re-solicitation.
///
/// Exactly one call is outstanding at a time, and a call may block
/// indefinitely (interactive input); that is by design, not an error.
pub trait MoveSource {
    /// Propose the next move for the player this source plays.
    fn propose_move(&mut self, last_opponent_move: Option<Cell>) -> Cell;
}
