//! Headless runner: loads settings, runs the simulation and prints a JSON report

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use toroidal_life::config::{Overrides, Settings};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "toroidal_life=info";

#[derive(Parser, Debug)]
#[command(name = "toroidal_life")]
#[command(about = "Conway's Game of Life on a toroidal grid")]
#[command(version = "0.1.0")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "LIFE_CONFIG")]
    config: Option<PathBuf>,

    /// Grid size (overrides config)
    #[arg(short, long, env = "LIFE_SIZE")]
    size: Option<usize>,

    /// Number of generations (overrides config)
    #[arg(short, long, env = "LIFE_GENERATIONS")]
    generations: Option<usize>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            size: self.size,
            generations: self.generations,
        }
    }
}

/// `RUST_LOG` directives when present and valid, otherwise the crate at info
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_logging() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            Settings::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?
        }
        None => {
            warn!("no config file given, using defaults");
            Settings::default()
        }
    };

    settings.merge_overrides(&cli.overrides());
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let settings = load_settings(&cli)?;
    let report = toroidal_life::run_simulation(&settings)?;
    println!("{}", report.to_json()?);

    Ok(())
}
