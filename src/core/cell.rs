//! Grid coordinates.

use serde::{Deserialize, Serialize};

/// One grid position, identified by `(row, col)`.
///
/// Both coordinates are 0-based and must lie in `[0, size)` for the board
/// they are used with; `Cell` itself carries no size and performs no range
/// check. Identity is value-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: u16,
    pub col: u16,
}

impl Cell {
    /// Create a cell at `(row, col)`.
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Row-major index of this cell on a board of side `size`.
    #[must_use]
    pub const fn index(self, size: u16) -> usize {
        self.row as usize * size as usize + self.col as usize
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_index() {
        assert_eq!(Cell::new(0, 0).index(5), 0);
        assert_eq!(Cell::new(0, 4).index(5), 4);
        assert_eq!(Cell::new(1, 0).index(5), 5);
        assert_eq!(Cell::new(4, 4).index(5), 24);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Cell::new(3, 11)), "(3, 11)");
    }

    #[test]
    fn test_serialization() {
        let cell = Cell::new(7, 2);
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, back);
    }
}
