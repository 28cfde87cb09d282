//! Edge-to-edge connectivity: the win condition.
//!
//! `First` wins by connecting row 0 to row N-1; `Second` by connecting
//! column 0 to column N-1. The check is a full traversal seeded from the
//! player's start edge — an explicit worklist with a visited bitmap, no
//! recursion, O(N²) per call. It runs once per completed move, so repeated
//! full traversals are simpler than incremental bookkeeping and fast
//! enough.

use crate::board::{Board, NeighborTable, Occupancy};
use crate::core::{Cell, PlayerId};

/// Whether `player`'s stones form an unbroken chain between their two sides.
///
/// Result is independent of traversal order. A size-1 board is won by
/// whoever owns its single cell, since both edges coincide there.
#[must_use]
pub fn has_won(board: &Board, table: &NeighborTable, player: PlayerId) -> bool {
    debug_assert_eq!(board.size(), table.size());

    let size = board.size();
    let mut visited = vec![false; size as usize * size as usize];
    let mut worklist: Vec<Cell> = Vec::new();

    for cell in start_edge(size, player) {
        if board.occupancy(cell) == Occupancy::Owned(player) {
            visited[cell.index(size)] = true;
            worklist.push(cell);
        }
    }

    while let Some(cell) = worklist.pop() {
        if on_terminal_edge(cell, size, player) {
            return true;
        }
        for &next in table.neighbors(cell) {
            if !visited[next.index(size)] && board.occupancy(next) == Occupancy::Owned(player) {
                visited[next.index(size)] = true;
                worklist.push(next);
            }
        }
    }

    false
}

/// The cells of `player`'s starting edge: row 0 for First, column 0 for
/// Second.
fn start_edge(size: u16, player: PlayerId) -> impl Iterator<Item = Cell> {
    (0..size).map(move |i| match player {
        PlayerId::First => Cell::new(0, i),
        PlayerId::Second => Cell::new(i, 0),
    })
}

/// Whether `cell` lies on `player`'s terminal edge: row N-1 for First,
/// column N-1 for Second.
fn on_terminal_edge(cell: Cell, size: u16, player: PlayerId) -> bool {
    match player {
        PlayerId::First => cell.row == size - 1,
        PlayerId::Second => cell.col == size - 1,
    }
}
