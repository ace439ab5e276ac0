//! Error types for grid construction and seeding

use crate::game_of_life::Cell;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("grid size must be at least 1")]
    ZeroSize,
    #[error("cell {cell} is outside a {size}x{size} grid")]
    OutOfBounds { cell: Cell, size: usize },
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}
