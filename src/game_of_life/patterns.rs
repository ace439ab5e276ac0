//! Library of small seed patterns

use super::Cell;
use serde::{Deserialize, Serialize};

/// Well-known starting patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Glider,
    Block,
    Blinker,
    Beacon,
    RPentomino,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Glider,
        Pattern::Block,
        Pattern::Blinker,
        Pattern::Beacon,
        Pattern::RPentomino,
    ];

    /// Cell offsets relative to the pattern's top-left corner
    pub fn cells(&self) -> &'static [(usize, usize)] {
        match self {
            // .█.
            // ..█
            // ███
            Pattern::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
            Pattern::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Pattern::Blinker => &[(0, 0), (0, 1), (0, 2)],
            Pattern::Beacon => &[
                (0, 0),
                (0, 1),
                (1, 0),
                (1, 1),
                (2, 2),
                (2, 3),
                (3, 2),
                (3, 3),
            ],
            // █..
            // ███
            // .█.
            Pattern::RPentomino => &[(0, 0), (1, 0), (1, 1), (1, 2), (2, 1)],
        }
    }

    /// Place the pattern with its corner at `origin` on a torus of the given
    /// size. Cells running past an edge wrap to the opposite side.
    pub fn placed(&self, origin: Cell, size: usize) -> Vec<Cell> {
        self.cells()
            .iter()
            .map(|&(dr, dc)| origin.wrapped_offset(dr as isize, dc as isize, size))
            .collect()
    }

    /// Generations until the pattern repeats its shape, if it ever does.
    /// The R-pentomino is a methuselah and only settles after 1103 generations.
    pub fn period(&self) -> Option<usize> {
        match self {
            Pattern::Glider => Some(4),
            Pattern::Block => Some(1),
            Pattern::Blinker | Pattern::Beacon => Some(2),
            Pattern::RPentomino => None,
        }
    }

    /// Translation (rows, cols) after one full period
    pub fn displacement(&self) -> (isize, isize) {
        match self {
            Pattern::Glider => (1, 1),
            _ => (0, 0),
        }
    }
}
