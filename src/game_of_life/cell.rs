//! Coordinate value type for grid cells

use serde::{Deserialize, Serialize};
use std::fmt;

/// A (row, col) position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check that both coordinates lie in `[0, size)`
    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Shift by a signed offset, wrapping around a torus of the given size.
    ///
    /// The cell itself is reduced modulo `size` as well, so this also folds
    /// out-of-range coordinates back onto the grid.
    pub fn wrapped_offset(&self, dr: isize, dc: isize, size: usize) -> Self {
        Self {
            row: wrap(self.row, dr, size),
            col: wrap(self.col, dc, size),
        }
    }
}

#[inline]
fn wrap(value: usize, delta: isize, size: usize) -> usize {
    let size = size as isize;
    ((value as isize % size + delta % size + size) % size) as usize
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
