//! The game engine: turn sequencing, move legality, termination.
//!
//! `Game` owns one `Board` and one `NeighborTable` and drives the loop:
//! solicit a move from the current player's source, apply it, re-solicit on
//! rejection, then query connectivity for the player who just moved. The
//! engine performs no I/O; callers render from the read-only accessors.

use tracing::{debug, info};

use crate::analysis::has_won;
use crate::board::{Board, NeighborTable};
use crate::core::PlayerId;
use crate::players::MoveSource;

/// Where the game stands.
///
/// Derived from occupancy and the turn counter on demand; never cached
/// across moves. `Won` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    InProgress { next: PlayerId },
    Won { winner: PlayerId },
}

impl GameState {
    /// The winner, if the game is over.
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameState::InProgress { .. } => None,
            GameState::Won { winner } => Some(winner),
        }
    }
}

/// One game: a board, its topology, and the turn loop.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    table: NeighborTable,
}

impl Game {
    /// Create a fresh game on an empty board of side `size`.
    #[must_use]
    pub fn new(size: u16) -> Self {
        Self {
            board: Board::new(size),
            table: NeighborTable::new(size),
        }
    }

    /// Read-only view of the board, for rendering and inspection.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The shared neighbor table.
    #[must_use]
    pub fn table(&self) -> &NeighborTable {
        &self.table
    }

    /// Derive the current state from occupancy and turn counter.
    #[must_use]
    pub fn state(&self) -> GameState {
        for player in PlayerId::both() {
            if has_won(&self.board, &self.table, player) {
                return GameState::Won { winner: player };
            }
        }
        GameState::InProgress { next: self.board.to_move() }
    }

    /// Play one turn with the current player's move source.
    ///
    /// Solicits a move (handing over the opponent's last move, `None` on
    /// the first turn), applies it, and re-solicits from the same source on
    /// `OutOfRange` or `CellTaken` — unbounded, by design: termination is
    /// the source's responsibility. Returns the state after the move.
    ///
    /// Calling this on a finished game returns the terminal state without
    /// soliciting anything.
    pub fn play_turn(&mut self, source: &mut dyn MoveSource) -> GameState {
        let state = self.state();
        if state.winner().is_some() {
            return state;
        }

        let player = self.board.to_move();
        let last = self.board.last_move().map(|m| m.cell);

        let cell = loop {
            let proposed = source.propose_move(last);
            match self.board.apply_move(proposed, player) {
                Ok(()) => break proposed,
                Err(err) => debug!(%player, %err, "move rejected, re-soliciting"),
            }
        };
        debug!(%player, %cell, turn = self.board.turn(), "move applied");

        if has_won(&self.board, &self.table, player) {
            info!(winner = %player, turns = self.board.turn(), "game over");
            return GameState::Won { winner: player };
        }

        // Hex has no draws: a completely occupied board always contains a
        // winning chain for exactly one player.
        debug_assert!(
            !self.board.is_full(),
            "completely occupied board must have a winner"
        );

        GameState::InProgress { next: player.opponent() }
    }

    /// Drive alternating turns to completion and return the winner.
    pub fn run(
        &mut self,
        first: &mut dyn MoveSource,
        second: &mut dyn MoveSource,
    ) -> PlayerId {
        loop {
            let source: &mut dyn MoveSource = match self.board.to_move() {
                PlayerId::First => first,
                PlayerId::Second => second,
            };
            if let GameState::Won { winner } = self.play_turn(source) {
                return winner;
            }
        }
    }
}
