//! Conway's Game of Life on a toroidal grid
//!
//! Only the cells that are on are tracked, which keeps each generation cheap
//! on large, sparsely populated grids.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod simulation;

pub use config::Settings;
pub use error::LifeError;
pub use game_of_life::{Cell, Grid, Pattern};
pub use simulation::{Simulation, SimulationReport};

use anyhow::Result;

/// Seed a grid from settings and run it for the configured number of generations
pub fn run_simulation(settings: &Settings) -> Result<SimulationReport> {
    let mut simulation = Simulation::from_settings(settings)?;
    Ok(simulation.run(settings.simulation.generations))
}
