//! Incremental connected-component tracking for automated play.
//!
//! A player's stones are kept partitioned into disjoint components of
//! mutually reachable cells. Each observed stone merges with every existing
//! component that lists one of the stone's neighbors; zero matches start a
//! new singleton. The intended use is estimating bridging distance between
//! a player's own components (attack) and between the opponent's
//! components and their edges (defense); the partition itself is the
//! load-bearing contract.

use rustc_hash::FxHashSet;

use crate::board::NeighborTable;
use crate::core::{Cell, PlayerId, PlayerPair};

/// Disjoint same-owner components for both players.
///
/// The tracker does not own a `NeighborTable`; callers pass the table each
/// observation so one immutable table can serve every tracker in a game.
#[derive(Clone, Debug, Default)]
pub struct ComponentTracker {
    components: PlayerPair<Vec<FxHashSet<Cell>>>,
}

impl ComponentTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a newly observed stone into `player`'s partition.
    ///
    /// Every component containing a neighbor of `cell` collapses together
    /// with the new cell into a single component; if none match, the cell
    /// becomes a new singleton component. Observing the same cell twice is
    /// a caller error and will simply re-merge it harmlessly.
    pub fn observe(&mut self, table: &NeighborTable, cell: Cell, player: PlayerId) {
        let mut merged: FxHashSet<Cell> = FxHashSet::default();
        merged.insert(cell);

        let components = &mut self.components[player];
        let mut i = 0;
        while i < components.len() {
            let touches = table
                .neighbors(cell)
                .iter()
                .any(|n| components[i].contains(n));
            if touches {
                merged.extend(components.swap_remove(i));
            } else {
                i += 1;
            }
        }
        components.push(merged);
    }

    /// The current components of `player`, in no particular order.
    #[must_use]
    pub fn components(&self, player: PlayerId) -> &[FxHashSet<Cell>] {
        &self.components[player]
    }

    /// The component containing `cell`, if the cell has been observed.
    #[must_use]
    pub fn component_of(&self, player: PlayerId, cell: Cell) -> Option<&FxHashSet<Cell>> {
        self.components[player].iter().find(|c| c.contains(&cell))
    }

    /// Total number of stones observed for `player`.
    #[must_use]
    pub fn stone_count(&self, player: PlayerId) -> usize {
        self.components[player].iter().map(FxHashSet::len).sum()
    }
}
