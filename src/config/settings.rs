//! Configuration settings for a toroidal Game of Life run

use crate::error::LifeError;
use crate::game_of_life::{Cell, Pattern};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub seed: SeedConfig,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Pattern stamped onto the grid before any explicit cells
    #[serde(default)]
    pub pattern: Option<Pattern>,
    /// Top-left corner of the pattern; the grid centre when unset
    #[serde(default)]
    pub origin: Option<(usize, usize)>,
    /// Extra cells to turn on, each (row, col)
    #[serde(default)]
    pub cells: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub generations: usize,
    #[serde(default = "default_record_history")]
    pub record_history: bool,
}

fn default_record_history() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig { size: 200 },
            seed: SeedConfig {
                pattern: Some(Pattern::RPentomino),
                origin: None,
                cells: Vec::new(),
            },
            simulation: SimulationConfig {
                generations: 10_000,
                record_history: true,
            },
        }
    }
}

impl SeedConfig {
    /// Where the pattern's corner lands on a grid of the given size
    pub fn origin_cell(&self, size: usize) -> Cell {
        self.origin
            .map(Cell::from)
            .unwrap_or_else(|| Cell::new(size / 2, size / 2))
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), LifeError> {
        let size = self.grid.size;
        if size == 0 {
            return Err(LifeError::InvalidSettings(
                "grid size must be positive".to_string(),
            ));
        }

        if let Some(origin) = self.seed.origin.map(Cell::from) {
            if !origin.in_bounds(size) {
                return Err(LifeError::InvalidSettings(format!(
                    "seed origin {} is outside a {}x{} grid",
                    origin, size, size
                )));
            }
        }

        if let Some(cell) = self
            .seed
            .cells
            .iter()
            .copied()
            .map(Cell::from)
            .find(|cell| !cell.in_bounds(size))
        {
            return Err(LifeError::InvalidSettings(format!(
                "seed cell {} is outside a {}x{} grid",
                cell, size, size
            )));
        }

        Ok(())
    }

    /// Merge settings with command line or environment overrides
    pub fn merge_overrides(&mut self, overrides: &Overrides) {
        if let Some(size) = overrides.size {
            self.grid.size = size;
        }
        if let Some(generations) = overrides.generations {
            self.simulation.generations = generations;
        }
    }
}

/// Values that take precedence over the loaded configuration, usually taken
/// from the command line or the environment
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub size: Option<usize>,
    pub generations: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.grid.size, 200);
        assert_eq!(settings.seed.pattern, Some(Pattern::RPentomino));
        assert_eq!(settings.seed.origin_cell(200), Cell::new(100, 100));
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested/config.yaml");

        let mut settings = Settings::default();
        settings.grid.size = 32;
        settings.seed.pattern = Some(Pattern::Beacon);
        settings.seed.origin = Some((3, 4));
        settings.seed.cells = vec![(0, 0), (31, 31)];
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_minimal_yaml_uses_field_defaults() {
        let yaml = "grid:\n  size: 16\nseed: {}\nsimulation:\n  generations: 4\n";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.seed.pattern, None);
        assert!(settings.seed.cells.is_empty());
        assert!(settings.simulation.record_history);
    }

    #[test]
    fn test_validation_errors() {
        let mut settings = Settings::default();
        settings.grid.size = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.grid.size = 10;
        settings.seed.cells = vec![(3, 10)];
        assert!(matches!(
            settings.validate(),
            Err(LifeError::InvalidSettings(_))
        ));

        let mut settings = Settings::default();
        settings.seed.origin = Some((200, 0));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad.yaml");
        std::fs::write(&path, "grid:\n  size: 0\nseed: {}\nsimulation:\n  generations: 1\n").unwrap();
        assert!(Settings::from_file(&path).is_err());

        assert!(Settings::from_file(temp_dir.path().join("missing.yaml")).is_err());
    }

    #[test]
    fn test_merge_overrides() {
        let mut settings = Settings::default();
        settings.merge_overrides(&Overrides {
            size: Some(64),
            generations: None,
        });
        assert_eq!(settings.grid.size, 64);
        assert_eq!(settings.simulation.generations, 10_000);

        settings.merge_overrides(&Overrides {
            size: None,
            generations: Some(12),
        });
        assert_eq!(settings.grid.size, 64);
        assert_eq!(settings.simulation.generations, 12);

        let before = settings.clone();
        settings.merge_overrides(&Overrides::default());
        assert_eq!(settings, before);
    }
}
