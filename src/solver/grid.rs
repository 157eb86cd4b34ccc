use std::ops::Range;

use super::error::SolverError;

/// Row/column coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Converts the row/col to a 1d index
    pub fn as_index(&self, side: usize) -> usize {
        self.row * side + self.col
    }
}

/// A single board square. Neighbors are flat indices into the owning grid's
/// cell arena, fixed once at construction.
#[derive(Debug, Clone)]
pub struct Cell {
    letter: char,
    neighbors: Vec<usize>,
}

/// Square board of letters with precomputed 8-directional adjacency.
/// Cells live in one row-major arena so the search can address them by index
/// and keep its own visited marks outside the cells.
#[derive(Debug, Clone)]
pub struct Grid {
    side: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a `side` x `side` board from row-major letters. Letters are
    /// lowercased so comparisons line up with the dictionary's normalization.
    pub fn new(letters: Vec<char>, side: usize) -> Result<Self, SolverError> {
        let expected = side * side;
        if side == 0 || letters.len() != expected {
            return Err(SolverError::InvalidInput {
                side,
                expected,
                actual: letters.len(),
            });
        }

        // Two passes: the arena has to be complete before any cell can point
        // at a neighbor that comes later in row-major order.
        let cells = letters
            .into_iter()
            .map(|letter| Cell {
                letter: letter.to_ascii_lowercase(),
                neighbors: Vec::new(),
            })
            .collect();
        let mut grid = Self { side, cells };
        grid.link_neighbors();
        Ok(grid)
    }

    /// Builds a board from one `Vec<char>` per row, as read from a board file.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, SolverError> {
        let side = rows.len();
        if rows.iter().any(|row| row.len() != side) {
            return Err(SolverError::InvalidInput {
                side,
                expected: side * side,
                actual: rows.iter().map(|row| row.len()).sum(),
            });
        }
        Self::new(rows.into_iter().flatten().collect(), side)
    }

    fn link_neighbors(&mut self) {
        let side = self.side as isize;
        for idx in 0..self.cells.len() {
            let pos = self.position(idx);
            let mut neighbors = Vec::with_capacity(8);
            for dr in -1..=1isize {
                for dc in -1..=1isize {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let row = pos.row as isize + dr;
                    let col = pos.col as isize + dc;
                    if row < 0 || row >= side || col < 0 || col >= side {
                        continue;
                    }
                    let neighbor = Position {
                        row: row as usize,
                        col: col as usize,
                    };
                    neighbors.push(neighbor.as_index(self.side));
                }
            }
            self.cells[idx].neighbors = neighbors;
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cell indices in row-major order. Search strategies start from each
    /// of these in turn, so enumeration order is reproducible across runs.
    pub fn cell_indices(&self) -> Range<usize> {
        0..self.cells.len()
    }

    pub fn letter(&self, idx: usize) -> char {
        self.cells[idx].letter
    }

    pub fn neighbors(&self, idx: usize) -> &[usize] {
        &self.cells[idx].neighbors
    }

    pub fn position(&self, idx: usize) -> Position {
        Position {
            row: idx / self.side,
            col: idx % self.side,
        }
    }

    /// The board's letters as one row-major string.
    pub fn letters(&self) -> String {
        self.cells.iter().map(|cell| cell.letter).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn grid_4x4() -> Grid {
        Grid::new("abcdefghijklmnop".chars().collect(), 4).unwrap()
    }

    #[test]
    fn rejects_wrong_letter_count() {
        let err = Grid::new(vec!['a'; 5], 2).unwrap_err();
        match err {
            SolverError::InvalidInput {
                side,
                expected,
                actual,
            } => {
                assert_eq!(side, 2);
                assert_eq!(expected, 4);
                assert_eq!(actual, 5);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn rejects_zero_side() {
        assert!(Grid::new(Vec::new(), 0).is_err());
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows = vec![vec!['a', 'b'], vec!['c']];
        assert!(Grid::from_rows(rows).is_err());
    }

    #[test]
    fn keeps_row_major_order_and_lowercases() {
        let grid = Grid::new("CaTs".chars().collect(), 2).unwrap();
        assert_eq!(grid.letters(), "cats");
        assert_eq!(grid.letter(0), 'c');
        assert_eq!(grid.letter(3), 's');
    }

    #[test]
    fn neighbor_counts_by_location() {
        let grid = grid_4x4();
        // corner, edge, interior
        assert_eq!(grid.neighbors(Position { row: 0, col: 0 }.as_index(4)).len(), 3);
        assert_eq!(grid.neighbors(Position { row: 0, col: 1 }.as_index(4)).len(), 5);
        assert_eq!(grid.neighbors(Position { row: 1, col: 1 }.as_index(4)).len(), 8);
    }

    #[test]
    fn adjacency_is_symmetric_without_self_or_duplicates() {
        let grid = grid_4x4();
        for idx in grid.cell_indices() {
            let neighbors = grid.neighbors(idx);
            let unique: HashSet<_> = neighbors.iter().collect();
            assert_eq!(unique.len(), neighbors.len());
            assert!(!neighbors.contains(&idx));
            for &n in neighbors {
                assert!(grid.neighbors(n).contains(&idx));
            }
        }
    }

    #[test]
    fn one_by_one_has_no_neighbors() {
        let grid = Grid::new(vec!['x'], 1).unwrap();
        assert!(grid.neighbors(0).is_empty());
    }
}
