//! A queue-backed move source for tests and programmatic play.

use std::collections::VecDeque;

use crate::core::Cell;

use super::MoveSource;

/// Plays a predetermined sequence of cells.
///
/// Running out of moves is a test-contract violation and panics; real
/// games use sources that can always produce another proposal.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    moves: VecDeque<Cell>,
}

impl ScriptedSource {
    /// Create a source that proposes `moves` in order.
    #[must_use]
    pub fn new(moves: impl IntoIterator<Item = Cell>) -> Self {
        Self { moves: moves.into_iter().collect() }
    }

    /// Whether every scripted move has been proposed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.moves.is_empty()
    }
}

impl MoveSource for ScriptedSource {
    fn propose_move(&mut self, _last_opponent_move: Option<Cell>) -> Cell {
        self.moves
            .pop_front()
            .expect("scripted source ran out of moves")
    }
}
