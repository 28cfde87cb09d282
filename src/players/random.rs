//! The automated opponent.
//!
//! `RandomSource` keeps its own shadow `Board` of everything it has
//! observed (composition, not a shared board) plus a `ComponentTracker`
//! over both players' stones. The tracker is the groundwork for a
//! bridging-distance heuristic — estimate the cost of connecting one's own
//! components versus the opponent's components reaching their edges — but
//! move selection itself is uniformly random over the legal cells, which
//! is a conformant policy.

use tracing::trace;

use crate::analysis::ComponentTracker;
use crate::board::{Board, NeighborTable};
use crate::core::{Cell, GameRng, PlayerId};

use super::MoveSource;

/// Automated move source: uniform-random legal moves over tracked state.
#[derive(Clone, Debug)]
pub struct RandomSource {
    player: PlayerId,
    shadow: Board,
    table: NeighborTable,
    tracker: ComponentTracker,
    rng: GameRng,
}

impl RandomSource {
    /// Create a source playing `player` on a board of side `size`.
    #[must_use]
    pub fn new(size: u16, player: PlayerId, rng: GameRng) -> Self {
        Self {
            player,
            shadow: Board::new(size),
            table: NeighborTable::new(size),
            tracker: ComponentTracker::new(),
            rng,
        }
    }

    /// The component bookkeeping accumulated so far, read-only.
    #[must_use]
    pub fn tracker(&self) -> &ComponentTracker {
        &self.tracker
    }

    fn record(&mut self, cell: Cell, player: PlayerId) {
        self.shadow
            .apply_move(cell, player)
            .expect("observed move must be legal on the shadow board");
        self.tracker.observe(&self.table, cell, player);
    }
}

impl MoveSource for RandomSource {
    fn propose_move(&mut self, last_opponent_move: Option<Cell>) -> Cell {
        // Fold in the opponent's move. On re-solicitation the same cell
        // comes back; skip it once the shadow board already holds it.
        if let Some(cell) = last_opponent_move {
            if self.shadow.occupancy(cell).is_empty() {
                self.record(cell, self.player.opponent());
            }
        }

        // Proposals are drawn from the shadow board's empty cells, which
        // mirror the real board exactly, so the engine never rejects them.
        let candidates: Vec<Cell> = self.shadow.empty_cells().collect();
        let cell = *self
            .rng
            .choose(&candidates)
            .expect("source solicited with no legal moves left");
        self.record(cell, self.player);

        trace!(
            player = %self.player,
            %cell,
            own_components = self.tracker.components(self.player).len(),
            opponent_components = self.tracker.components(self.player.opponent()).len(),
            "automated move"
        );
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_move_is_legal() {
        let mut source = RandomSource::new(5, PlayerId::First, GameRng::new(42));
        let cell = source.propose_move(None);

        assert!(cell.row < 5 && cell.col < 5);
        assert_eq!(source.tracker().stone_count(PlayerId::First), 1);
    }

    #[test]
    fn test_tracks_opponent_moves() {
        let mut source = RandomSource::new(5, PlayerId::Second, GameRng::new(42));
        let own = source.propose_move(Some(Cell::new(2, 2)));

        assert_ne!(own, Cell::new(2, 2));
        assert_eq!(source.tracker().stone_count(PlayerId::First), 1);
        assert_eq!(source.tracker().stone_count(PlayerId::Second), 1);
    }

    #[test]
    fn test_never_proposes_taken_cell() {
        let mut first = RandomSource::new(3, PlayerId::First, GameRng::new(7));
        let mut second = RandomSource::new(3, PlayerId::Second, GameRng::new(8));

        let mut board = Board::new(3);
        let mut last: Option<Cell> = None;
        for turn in 0..9u32 {
            let player = PlayerId::on_turn(turn);
            let source: &mut RandomSource = match player {
                PlayerId::First => &mut first,
                PlayerId::Second => &mut second,
            };
            let cell = source.propose_move(last);
            board.apply_move(cell, player).expect("proposal must be legal");
            last = Some(cell);
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_deterministic_for_seed() {
        let mut a = RandomSource::new(5, PlayerId::First, GameRng::new(99));
        let mut b = RandomSource::new(5, PlayerId::First, GameRng::new(99));

        assert_eq!(a.propose_move(None), b.propose_move(None));
        assert_eq!(
            a.propose_move(Some(Cell::new(0, 0))),
            b.propose_move(Some(Cell::new(0, 0)))
        );
    }
}
