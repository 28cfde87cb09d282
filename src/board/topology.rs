//! Hex adjacency on a rhombic grid stored as a square index grid.
//!
//! Each cell has up to 6 neighbors, drawn from the 8 orthogonal + diagonal
//! offsets with two diagonals excluded depending on row parity:
//!
//! - even rows exclude `(-1,+1)` and `(+1,+1)`
//! - odd rows exclude `(-1,-1)` and `(+1,-1)`
//!
//! Out-of-range candidates are clipped, never wrapped. The resulting
//! relation is symmetric, which the connectivity traversal relies on.

use smallvec::SmallVec;

use crate::core::Cell;

/// Offsets kept for even rows (the two `(dr, +1)` diagonals are dropped).
const EVEN_ROW_OFFSETS: [(i32, i32); 6] = [(-1, -1), (-1, 0), (0, -1), (0, 1), (1, -1), (1, 0)];

/// Offsets kept for odd rows (the two `(dr, -1)` diagonals are dropped).
const ODD_ROW_OFFSETS: [(i32, i32); 6] = [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, 0), (1, 1)];

/// Precomputed per-cell neighbor lists for one board size.
///
/// Computed once at game creation and shared read-only by the board,
/// the connectivity analyzer, and any component trackers.
#[derive(Clone, Debug)]
pub struct NeighborTable {
    size: u16,
    neighbors: Vec<SmallVec<[Cell; 6]>>,
}

impl NeighborTable {
    /// Compute the table for a board of side `size`.
    #[must_use]
    pub fn new(size: u16) -> Self {
        assert!(size >= 1, "board size must be at least 1");

        let mut neighbors = Vec::with_capacity(size as usize * size as usize);
        for row in 0..size {
            for col in 0..size {
                neighbors.push(Self::compute(size, Cell::new(row, col)));
            }
        }

        Self { size, neighbors }
    }

    fn compute(size: u16, cell: Cell) -> SmallVec<[Cell; 6]> {
        let offsets = if cell.row % 2 == 0 {
            &EVEN_ROW_OFFSETS
        } else {
            &ODD_ROW_OFFSETS
        };

        let mut out = SmallVec::new();
        for &(dr, dc) in offsets {
            let row = cell.row as i32 + dr;
            let col = cell.col as i32 + dc;
            if (0..size as i32).contains(&row) && (0..size as i32).contains(&col) {
                out.push(Cell::new(row as u16, col as u16));
            }
        }
        out
    }

    /// Board side length this table was computed for.
    #[must_use]
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Whether `cell` lies on the board.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// The neighbors of `cell`, in a fixed order.
    ///
    /// Panics if `cell` is off the board.
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> &[Cell] {
        assert!(self.contains(cell), "cell {cell} outside size-{} board", self.size);
        &self.neighbors[cell.index(self.size)]
    }

    /// Iterate over every cell of the board in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Cell::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_cells_have_six_neighbors() {
        let table = NeighborTable::new(5);
        for cell in table.cells() {
            if (1..4).contains(&cell.row) && (1..4).contains(&cell.col) {
                assert_eq!(table.neighbors(cell).len(), 6, "interior cell {cell}");
            }
        }
    }

    #[test]
    fn test_corner_neighbor_counts() {
        let table = NeighborTable::new(5);

        // Even-row corners: (0,0) keeps (0,1) and (1,0); (1,-1) clips.
        assert_eq!(table.neighbors(Cell::new(0, 0)).len(), 2);
        // (0,4) keeps (0,3), (1,3), (1,4).
        assert_eq!(table.neighbors(Cell::new(0, 4)).len(), 3);
        // Row 4 is even too: (4,0) keeps (3,0) and (4,1).
        assert_eq!(table.neighbors(Cell::new(4, 0)).len(), 2);
        // (4,4) keeps (3,3), (3,4), (4,3).
        assert_eq!(table.neighbors(Cell::new(4, 4)).len(), 3);
    }

    #[test]
    fn test_even_row_exclusions() {
        let table = NeighborTable::new(5);
        let neighbors = table.neighbors(Cell::new(2, 2));

        assert!(!neighbors.contains(&Cell::new(1, 3)), "(-1,+1) excluded on even rows");
        assert!(!neighbors.contains(&Cell::new(3, 3)), "(+1,+1) excluded on even rows");
        assert!(neighbors.contains(&Cell::new(1, 1)));
        assert!(neighbors.contains(&Cell::new(3, 1)));
    }

    #[test]
    fn test_odd_row_exclusions() {
        let table = NeighborTable::new(5);
        let neighbors = table.neighbors(Cell::new(1, 2));

        assert!(!neighbors.contains(&Cell::new(0, 1)), "(-1,-1) excluded on odd rows");
        assert!(!neighbors.contains(&Cell::new(2, 1)), "(+1,-1) excluded on odd rows");
        assert!(neighbors.contains(&Cell::new(0, 3)));
        assert!(neighbors.contains(&Cell::new(2, 3)));
    }

    #[test]
    fn test_symmetry_exhaustive_small_sizes() {
        for size in 1..=6u16 {
            let table = NeighborTable::new(size);
            for a in table.cells() {
                for &b in table.neighbors(a) {
                    assert!(
                        table.neighbors(b).contains(&a),
                        "size {size}: {b} lists {a}? (reverse of {a} -> {b})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_all_neighbors_in_range() {
        let table = NeighborTable::new(4);
        for cell in table.cells() {
            for &n in table.neighbors(cell) {
                assert!(table.contains(n));
            }
        }
    }

    #[test]
    fn test_size_one_board_has_no_neighbors() {
        let table = NeighborTable::new(1);
        assert!(table.neighbors(Cell::new(0, 0)).is_empty());
    }
}
