//! Birth and survival rule for Conway's Game of Life

use super::Grid;

/// On-neighbor counts that keep an on cell alive
pub const SURVIVAL_COUNTS: [usize; 2] = [2, 3];

/// On-neighbor counts that turn an off cell on
pub const BIRTH_COUNTS: [usize; 1] = [3];

/// Size of the Moore neighborhood
pub const MAX_NEIGHBORS: usize = 8;

/// Whether a cell is on in the next generation given its current state and
/// the number of on neighbors it has
pub fn next_state(alive: bool, on_neighbors: usize) -> bool {
    if alive {
        SURVIVAL_COUNTS.contains(&on_neighbors)
    } else {
        BIRTH_COUNTS.contains(&on_neighbors)
    }
}

/// Advance a grid by several generations
pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
    for _ in 0..generations {
        grid.update();
    }
    grid
}
