//! Grid module - the playing field
//!
//! The grid is a 10x20 table of occupied/empty cells stored as a flat array
//! for cache locality; cloning it is a plain copy.
//! Coordinates: (row, column) where row ranges 0..19 (top to bottom) and
//! column ranges 0..9 (left to right).

use arrayvec::ArrayVec;

use crate::shapes::Shape;
use crate::types::{Position, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = GRID_WIDTH * GRID_HEIGHT;

/// The playing field - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * WIDTH + column)
    cells: [bool; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [false; GRID_SIZE],
        }
    }

    /// Calculate flat index from (row, column) coordinates
    #[inline(always)]
    fn index(row: usize, column: usize) -> Option<usize> {
        if row >= GRID_HEIGHT || column >= GRID_WIDTH {
            return None;
        }
        Some(row * GRID_WIDTH + column)
    }

    pub fn width(&self) -> usize {
        GRID_WIDTH
    }

    pub fn height(&self) -> usize {
        GRID_HEIGHT
    }

    /// Get cell at (row, column)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, column: usize) -> Option<bool> {
        Self::index(row, column).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, column)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, column: usize, occupied: bool) -> bool {
        match Self::index(row, column) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    #[inline]
    pub fn is_occupied(&self, row: usize, column: usize) -> bool {
        matches!(self.get(row, column), Some(true))
    }

    /// One row as a slice, top row first
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * GRID_WIDTH;
        &self.cells[start..start + GRID_WIDTH]
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(GRID_WIDTH)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        row < GRID_HEIGHT && self.row(row).iter().all(|&cell| cell)
    }

    /// Check if a row has no filled cell
    pub fn is_row_empty(&self, row: usize) -> bool {
        row >= GRID_HEIGHT || self.row(row).iter().all(|&cell| !cell)
    }

    /// Number of occupied cells on the whole grid
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check whether the shape's filled cells at `position` fit inside the grid
    /// without touching an occupied cell
    pub fn fits(&self, shape: &Shape, position: Position) -> bool {
        if position.row + shape.height() > GRID_HEIGHT
            || position.column + shape.width() > GRID_WIDTH
        {
            return false;
        }
        shape
            .filled_cells()
            .all(|(dr, dc)| !self.is_occupied(position.row + dr, position.column + dc))
    }

    /// Set every filled cell of the shape at `position`; other cells are untouched.
    /// Returns false (and leaves the grid unchanged) if the shape does not fit.
    pub fn stamp(&mut self, shape: &Shape, position: Position) -> bool {
        if !self.fits(shape, position) {
            return false;
        }
        for (dr, dc) in shape.filled_cells() {
            self.set(position.row + dr, position.column + dc, true);
        }
        true
    }

    /// Clear all full rows and return the row indices that were cleared (bottom to top).
    ///
    /// Rows above a cleared row shift down and empty rows fill in at the top.
    /// Uses a two-pointer compaction with no allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, GRID_HEIGHT> {
        let mut cleared_rows = ArrayVec::new();
        let mut write_row = GRID_HEIGHT;

        // Scan from bottom to top
        for read_row in (0..GRID_HEIGHT).rev() {
            if self.is_row_full(read_row) {
                cleared_rows.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * GRID_WIDTH;
                    self.cells
                        .copy_within(src..src + GRID_WIDTH, write_row * GRID_WIDTH);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_row * GRID_WIDTH].fill(false);

        cleared_rows
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
