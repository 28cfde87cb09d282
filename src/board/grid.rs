//! The occupancy board.
//!
//! `Board` owns the N×N occupancy grid, the turn counter, and the move
//! history. Cells transition `Empty -> Owned(player)` exactly once; moves
//! are never retracted or overwritten. Win detection is not the board's
//! job — see `analysis::connectivity`.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, PlayerId};

/// What occupies one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupancy {
    Empty,
    Owned(PlayerId),
}

impl Occupancy {
    /// Whether the cell is unoccupied.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Occupancy::Empty
    }

    /// The owner, if any.
    #[must_use]
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Occupancy::Empty => None,
            Occupancy::Owned(player) => Some(player),
        }
    }
}

/// Why a proposed move was rejected.
///
/// Both kinds are recoverable: the engine re-solicits a move from the same
/// source. They never propagate past the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell {cell} is outside the size-{size} board")]
    OutOfRange { cell: Cell, size: u16 },

    #[error("cell {cell} is already taken")]
    CellTaken { cell: Cell },
}

/// One applied move, in chronological order in the history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub cell: Cell,
    pub player: PlayerId,
}

/// The N×N occupancy grid plus turn counter and move history.
#[derive(Clone, Debug)]
pub struct Board {
    size: u16,
    cells: Vec<Occupancy>,
    turn: u32,
    history: Vec<MoveRecord>,
}

impl Board {
    /// Create an empty board of side `size` with turn counter 0.
    #[must_use]
    pub fn new(size: u16) -> Self {
        assert!(size >= 1, "board size must be at least 1");
        Self {
            size,
            cells: vec![Occupancy::Empty; size as usize * size as usize],
            turn: 0,
            history: Vec::new(),
        }
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Number of completed moves.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The player whose move it is: `First` on even turns, `Second` on odd.
    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        PlayerId::on_turn(self.turn)
    }

    /// Whether `cell` lies on the board.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Occupancy of `cell`. Panics if `cell` is off the board.
    #[must_use]
    pub fn occupancy(&self, cell: Cell) -> Occupancy {
        assert!(self.contains(cell), "cell {cell} outside size-{} board", self.size);
        self.cells[cell.index(self.size)]
    }

    /// Apply `player`'s move at `cell`.
    ///
    /// Fails with `OutOfRange` or `CellTaken` without mutating anything.
    /// On success the cell becomes owned, the turn counter increments, and
    /// the move is appended to the history.
    ///
    /// The supplied player must match the turn parity; that is a caller
    /// contract, checked with a debug assertion.
    pub fn apply_move(&mut self, cell: Cell, player: PlayerId) -> Result<(), MoveError> {
        debug_assert_eq!(
            player,
            self.to_move(),
            "move by {player} applied on {}'s turn",
            self.to_move()
        );

        if !self.contains(cell) {
            return Err(MoveError::OutOfRange { cell, size: self.size });
        }
        let slot = &mut self.cells[cell.index(self.size)];
        if !slot.is_empty() {
            return Err(MoveError::CellTaken { cell });
        }

        *slot = Occupancy::Owned(player);
        self.turn += 1;
        self.history.push(MoveRecord { cell, player });
        Ok(())
    }

    /// The most recently applied move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }

    /// All applied moves in chronological order.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Iterate over the currently empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(i, occ)| {
            occ.is_empty()
                .then(|| Cell::new((i / size as usize) as u16, (i % size as usize) as u16))
        })
    }

    /// Whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.turn as usize == self.cells.len()
    }
}
