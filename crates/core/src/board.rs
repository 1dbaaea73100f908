//! Board module - manages the game grid
//!
//! The board is a square N x N grid where each cell is empty or holds a symbol.
//! Uses flat row-major storage for better cache locality.
//! Coordinates: (row, col), both zero-based; row 0 is the top, row N-1 the bottom.
//!
//! Boards have value semantics: every transformation (`swapped`, `apply_gravity`)
//! returns a new board and leaves the input untouched.

use std::fmt;

use tui_match3_types::{Cell, CoreError, EMPTY_GLYPH};

/// The game board - square grid with flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new all-empty board of the given dimension
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Board dimension (width and height are always equal)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position holds a symbol (within bounds and non-empty)
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// New board with the contents of two cells exchanged.
    ///
    /// No match heuristics and no cascade are triggered; this is the raw
    /// swap mechanic. Out-of-range coordinates fail loudly instead of
    /// corrupting the grid.
    pub fn swapped(
        &self,
        a: (usize, usize),
        b: (usize, usize),
    ) -> Result<Board, CoreError> {
        let ia = self.index(a.0, a.1).ok_or(CoreError::InvalidCoordinate {
            row: a.0,
            col: a.1,
            size: self.size,
        })?;
        let ib = self.index(b.0, b.1).ok_or(CoreError::InvalidCoordinate {
            row: b.0,
            col: b.1,
            size: self.size,
        })?;

        let mut next = self.clone();
        next.cells.swap(ia, ib);
        Ok(next)
    }

    /// New board with every column compacted toward the bottom.
    ///
    /// Per column, non-empty tiles are written bottom-up into the next free
    /// slot counting from the bottom; vacated cells end up empty at the top.
    /// This is a stable partition - relative vertical order is preserved and
    /// symbol values are never compared.
    pub fn apply_gravity(&self) -> Board {
        let mut next = Board::new(self.size);

        for col in 0..self.size {
            let mut write_row = self.size;
            for row in (0..self.size).rev() {
                if let Some(Some(sym)) = self.get(row, col) {
                    write_row -= 1;
                    next.set(write_row, col, Some(sym));
                }
            }
        }

        next
    }

    /// Get a reference to the internal cells slice (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Create from rows of cells for testing
    #[cfg(test)]
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let size = rows.len();
        assert!(rows.iter().all(|row| row.len() == size));

        let mut board = Board::new(size);
        for (row, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                board.set(row, col, *cell);
            }
        }
        board
    }
}

/// Text serialization: symbol char or `.` per cell, columns space-separated,
/// rows newline-separated. The engine defines no other format.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let glyph = match self.get(row, col) {
                    Some(Some(sym)) => sym.as_char(),
                    _ => EMPTY_GLYPH,
                };
                write!(f, "{}", glyph)?;
            }
            if row + 1 < self.size {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_match3_types::Symbol;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(8);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 7), Some(7));
        assert_eq!(board.index(1, 0), Some(8));
        assert_eq!(board.index(7, 7), Some(63));
        assert_eq!(board.index(8, 0), None);
        assert_eq!(board.index(0, 8), None);
    }

    #[test]
    fn test_board_new_all_empty() {
        let board = Board::new(4);
        assert_eq!(board.size(), 4);
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(board.get(row, col), Some(None));
            }
        }
    }

    #[test]
    fn test_swapped_leaves_original_untouched() {
        let mut board = Board::new(4);
        board.set(0, 0, Some(Symbol::A));
        board.set(3, 3, Some(Symbol::B));

        let swapped = board.swapped((0, 0), (3, 3)).unwrap();
        assert_eq!(swapped.get(0, 0), Some(Some(Symbol::B)));
        assert_eq!(swapped.get(3, 3), Some(Some(Symbol::A)));

        // Value semantics: the input board is unchanged.
        assert_eq!(board.get(0, 0), Some(Some(Symbol::A)));
        assert_eq!(board.get(3, 3), Some(Some(Symbol::B)));
    }

    #[test]
    fn test_swapped_out_of_range() {
        let board = Board::new(4);
        assert_eq!(
            board.swapped((0, 0), (4, 0)),
            Err(CoreError::InvalidCoordinate {
                row: 4,
                col: 0,
                size: 4
            })
        );
        assert_eq!(
            board.swapped((0, 9), (0, 0)),
            Err(CoreError::InvalidCoordinate {
                row: 0,
                col: 9,
                size: 4
            })
        );
    }

    #[test]
    fn test_gravity_compacts_column_preserving_order() {
        // Column 1 top to bottom: A, empty, B, empty.
        let mut board = Board::new(4);
        board.set(0, 1, Some(Symbol::A));
        board.set(2, 1, Some(Symbol::B));

        let fallen = board.apply_gravity();
        assert_eq!(fallen.get(0, 1), Some(None));
        assert_eq!(fallen.get(1, 1), Some(None));
        assert_eq!(fallen.get(2, 1), Some(Some(Symbol::A)));
        assert_eq!(fallen.get(3, 1), Some(Some(Symbol::B)));
    }

    #[test]
    fn test_display_serialization() {
        let board = Board::from_rows(vec![
            vec![Some(Symbol::A), None],
            vec![None, Some(Symbol::B)],
        ]);
        assert_eq!(board.to_string(), "A .\n. B");
    }
}
