//! Sparse toroidal grid for Game of Life

use super::{rules, Cell};
use crate::error::LifeError;
use itertools::{iproduct, Itertools};
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::trace;

/// A square grid of `size` x `size` cells whose edges wrap around.
///
/// Only the cells that are on are stored, so the cost of an update scales
/// with the population rather than with the area of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    on_cells: FxHashSet<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(size: usize) -> Result<Self, LifeError> {
        if size == 0 {
            return Err(LifeError::ZeroSize);
        }
        Ok(Self {
            size,
            on_cells: FxHashSet::default(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The set of cells that are currently on
    pub fn on_cells(&self) -> &FxHashSet<Cell> {
        &self.on_cells
    }

    pub fn population(&self) -> usize {
        self.on_cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.on_cells.is_empty()
    }

    pub fn is_on(&self, cell: &Cell) -> bool {
        self.on_cells.contains(cell)
    }

    /// Turn on the given cells. Coordinates are trusted to be in range.
    pub fn activate<I>(&mut self, cells: I)
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        self.on_cells.extend(cells.into_iter().map(Into::into));
    }

    /// Turn on the given cells, rejecting the batch if any cell is out of range
    pub fn try_activate<I>(&mut self, cells: I) -> Result<(), LifeError>
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        let cells: Vec<Cell> = cells.into_iter().map(Into::into).collect();
        if let Some(&cell) = cells.iter().find(|c| !c.in_bounds(self.size)) {
            return Err(LifeError::OutOfBounds {
                cell,
                size: self.size,
            });
        }
        self.on_cells.extend(cells);
        Ok(())
    }

    /// Turn off the given cells; cells that are already off are ignored
    pub fn deactivate<I>(&mut self, cells: I)
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        for cell in cells {
            self.on_cells.remove(&cell.into());
        }
    }

    pub fn clear(&mut self) {
        self.on_cells.clear();
    }

    /// The Moore neighborhood of a cell with wraparound at the edges.
    ///
    /// On grids of size 1 or 2 several offsets land on the same position, so
    /// fewer than 8 distinct neighbors come back. The cell itself is never
    /// its own neighbor.
    ///
    /// A cell outside `[0, size)` is folded onto the grid before the offsets
    /// are applied, so it gets the neighbors of its in-range counterpart and
    /// every returned cell is in range.
    pub fn neighbors(&self, cell: &Cell) -> FxHashSet<Cell> {
        let centre = cell.wrapped_offset(0, 0, self.size);
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&offset| offset != (0, 0))
            .map(|(dr, dc)| centre.wrapped_offset(dr, dc, self.size))
            .filter(|neighbor| *neighbor != centre)
            .collect()
    }

    /// Neighbors of a cell that are currently on
    pub fn on_neighbors(&self, cell: &Cell) -> FxHashSet<Cell> {
        self.neighbors(cell)
            .into_iter()
            .filter(|neighbor| self.on_cells.contains(neighbor))
            .collect()
    }

    /// Advance the grid by one generation.
    ///
    /// Only off cells that touch at least one on cell can be born, so those
    /// are collected while the on cells are scanned and checked afterwards
    /// against the old generation.
    pub fn update(&mut self) {
        let mut next = FxHashSet::default();
        let mut candidates = FxHashSet::default();

        for cell in &self.on_cells {
            let mut live = 0;
            for neighbor in self.neighbors(cell) {
                if self.on_cells.contains(&neighbor) {
                    live += 1;
                } else {
                    candidates.insert(neighbor);
                }
            }
            if rules::next_state(true, live) {
                next.insert(*cell);
            }
        }

        for cell in candidates {
            if rules::next_state(false, self.on_neighbors(&cell).len()) {
                next.insert(cell);
            }
        }

        trace!(
            before = self.on_cells.len(),
            after = next.len(),
            "advanced one generation"
        );
        self.on_cells = next;
    }

    /// On cells in row-major order
    pub fn sorted_cells(&self) -> Vec<Cell> {
        self.on_cells.iter().copied().sorted().collect()
    }

    /// Dense `size` x `size` matrix with 1 for on cells and 0 elsewhere.
    /// Cells outside the grid are left out.
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        let mut matrix = vec![vec![0u8; self.size]; self.size];
        for cell in self.on_cells.iter().filter(|c| c.in_bounds(self.size)) {
            matrix[cell.row][cell.col] = 1;
        }
        matrix
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_matrix() {
            for value in row {
                write!(f, "{}", if value == 1 { '█' } else { '·' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
