//! Headless driver that seeds a grid and advances it generation by generation

use crate::config::Settings;
use crate::game_of_life::Grid;
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

/// Population statistics for a single generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    pub generation: usize,
    pub population: usize,
    pub births: usize,
    pub deaths: usize,
}

/// Summary of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub size: usize,
    pub generations_run: usize,
    pub initial_population: usize,
    pub final_population: usize,
    pub peak_population: usize,
    /// Generation at which the grid was first seen empty. A grid that starts
    /// the run empty reports the generation the run started at.
    pub extinct_at: Option<usize>,
    pub history: Vec<GenerationStats>,
}

impl SimulationReport {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize simulation report")
    }
}

/// Owns a grid and steps it forward, keeping per-generation statistics
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    generation: usize,
    record_history: bool,
    history: Vec<GenerationStats>,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
            record_history: true,
            history: Vec::new(),
        }
    }

    /// Build a grid from settings and seed it
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate().context("Invalid simulation settings")?;

        let size = settings.grid.size;
        let mut grid = Grid::new(size)?;

        if let Some(pattern) = settings.seed.pattern {
            let origin = settings.seed.origin_cell(size);
            grid.activate(pattern.placed(origin, size));
            debug!(?pattern, %origin, "seeded pattern");
        }
        grid.try_activate(settings.seed.cells.iter().copied())
            .context("Failed to seed explicit cells")?;

        let mut simulation = Self::new(grid);
        simulation.record_history = settings.simulation.record_history;
        Ok(simulation)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Advance one generation
    pub fn step(&mut self) -> GenerationStats {
        let before = self.grid.on_cells().clone();
        self.grid.update();
        self.generation += 1;

        let after = self.grid.on_cells();
        let stats = GenerationStats {
            generation: self.generation,
            population: after.len(),
            births: after.difference(&before).count(),
            deaths: before.difference(after).count(),
        };
        debug!(
            generation = stats.generation,
            population = stats.population,
            births = stats.births,
            deaths = stats.deaths,
            "generation complete"
        );

        if self.record_history {
            self.history.push(stats);
        }
        stats
    }

    /// Advance up to `generations` steps, stopping early once the grid is empty
    pub fn run(&mut self, generations: usize) -> SimulationReport {
        let initial_population = self.grid.population();
        let mut peak_population = initial_population;
        let mut extinct_at = self.grid.is_empty().then_some(self.generation);
        let mut generations_run = 0;

        info!(
            size = self.grid.size(),
            population = initial_population,
            generations,
            "starting simulation"
        );

        for _ in 0..generations {
            if self.grid.is_empty() {
                break;
            }
            let stats = self.step();
            generations_run += 1;
            peak_population = peak_population.max(stats.population);
            if stats.population == 0 {
                extinct_at = Some(stats.generation);
            }
        }

        let report = SimulationReport {
            size: self.grid.size(),
            generations_run,
            initial_population,
            final_population: self.grid.population(),
            peak_population,
            extinct_at,
            history: self.history.clone(),
        };
        info!(
            generations_run = report.generations_run,
            population = report.final_population,
            peak = report.peak_population,
            "simulation finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::{Cell, Pattern};

    fn settings(size: usize, pattern: Option<Pattern>, cells: Vec<(usize, usize)>) -> Settings {
        let mut settings = Settings::default();
        settings.grid.size = size;
        settings.seed.pattern = pattern;
        settings.seed.cells = cells;
        settings
    }

    #[test]
    fn test_seeding_from_settings() {
        let settings = settings(20, Some(Pattern::Block), vec![(0, 0)]);
        let simulation = Simulation::from_settings(&settings).unwrap();

        let grid = simulation.grid();
        assert_eq!(grid.population(), 5);
        assert!(grid.is_on(&Cell::new(10, 10)));
        assert!(grid.is_on(&Cell::new(11, 11)));
        assert!(grid.is_on(&Cell::new(0, 0)));
        assert_eq!(simulation.generation(), 0);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = settings(8, None, vec![(8, 1)]);
        assert!(Simulation::from_settings(&settings).is_err());
    }

    #[test]
    fn test_step_statistics() {
        let settings = settings(8, Some(Pattern::Blinker), Vec::new());
        let mut simulation = Simulation::from_settings(&settings).unwrap();

        let stats = simulation.step();
        assert_eq!(
            stats,
            GenerationStats {
                generation: 1,
                population: 3,
                births: 2,
                deaths: 2,
            }
        );
        assert_eq!(simulation.history(), &[stats]);
    }

    #[test]
    fn test_run_stops_on_extinction() {
        let settings = settings(10, None, vec![(1, 1), (5, 5)]);
        let mut simulation = Simulation::from_settings(&settings).unwrap();

        let report = simulation.run(50);
        assert_eq!(report.generations_run, 1);
        assert_eq!(report.extinct_at, Some(1));
        assert_eq!(report.initial_population, 2);
        assert_eq!(report.final_population, 0);
        assert_eq!(report.peak_population, 2);
    }

    #[test]
    fn test_run_on_empty_grid() {
        let mut simulation = Simulation::new(Grid::new(6).unwrap());
        let report = simulation.run(10);
        assert_eq!(report.generations_run, 0);
        assert_eq!(report.final_population, 0);
        assert_eq!(report.extinct_at, Some(0));
        assert!(report.history.is_empty());
    }

    #[test]
    fn test_run_without_history() {
        let mut settings = settings(10, Some(Pattern::Beacon), Vec::new());
        settings.simulation.record_history = false;
        let mut simulation = Simulation::from_settings(&settings).unwrap();

        let report = simulation.run(6);
        assert_eq!(report.generations_run, 6);
        assert_eq!(report.extinct_at, None);
        assert_eq!(report.final_population, 8);
        assert!(report.history.is_empty());
    }

    #[test]
    fn test_report_json() {
        let settings = settings(10, Some(Pattern::Glider), Vec::new());
        let mut simulation = Simulation::from_settings(&settings).unwrap();
        let report = simulation.run(4);

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["size"], 10);
        assert_eq!(json["generations_run"], 4);
        assert_eq!(json["final_population"], 5);
        assert_eq!(json["history"].as_array().unwrap().len(), 4);
        assert!(json["extinct_at"].is_null());
    }
}
