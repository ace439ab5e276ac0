//! Configuration management for Game of Life runs

pub mod settings;

pub use settings::{GridConfig, Overrides, SeedConfig, Settings, SimulationConfig};
