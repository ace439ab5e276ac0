//! Game of Life core functionality

pub mod cell;
pub mod grid;
pub mod patterns;
pub mod rules;

pub use cell::Cell;
pub use grid::Grid;
pub use patterns::Pattern;
