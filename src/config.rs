use std::time::Duration;

use clap::Parser;

use crate::domain::{Seed, presets};
use crate::error::ConfigError;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_CELL_SIZE: u32 = 10;
pub const DEFAULT_FRAME_DELAY_MS: u64 = 500;
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Simulation parameters. Any option left out falls back to its default.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "life_screen", about = "Conway's Game of Life on a pluggable display")]
pub struct Config {
    /// Window width in pixels.
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,
    /// Window height in pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,
    /// Pixels per grid cell.
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub cell_size: u32,
    /// Stop after this many generations; runs until closed when omitted.
    #[arg(long)]
    pub generations: Option<u64>,
    /// Milliseconds to pause between generations.
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub frame_delay_ms: u64,
    /// Seed for the random fill; a fresh one is drawn and logged when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Probability that a cell starts alive in the random fill.
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,
    /// Start from a named preset (e.g. glider, acorn) instead of a random fill.
    #[arg(long)]
    pub pattern: Option<String>,
    /// Compute generations on the rayon pool.
    #[arg(long)]
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            generations: None,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            seed: None,
            density: DEFAULT_DENSITY,
            pattern: None,
            parallel: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 || self.cell_size > self.width || self.cell_size > self.height {
            return Err(ConfigError::CellLargerThanWindow {
                cell_size: self.cell_size,
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::Density(self.density));
        }
        Ok(())
    }

    /// Grid `(rows, columns)` that fills the window
    pub fn grid_dimensions(&self) -> (usize, usize) {
        let cell = self.cell_size.max(1);
        ((self.height / cell) as usize, (self.width / cell) as usize)
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    /// The configured seed, or a fresh random one
    pub fn rng_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// How the first generation is populated
    pub fn seed_plan(&self, rng_seed: u64) -> Result<Seed, ConfigError> {
        match &self.pattern {
            Some(name) => presets::find(name)
                .map(Seed::Centered)
                .ok_or_else(|| ConfigError::UnknownPattern(name.clone())),
            None => Ok(Seed::Random {
                density: self.density,
                seed: rng_seed,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_parser_defaults() {
        let parsed = Config::try_parse_from(["life_screen"]).unwrap();
        assert_eq!(parsed, Config::default());
        assert_eq!(parsed.grid_dimensions(), (60, 80));
        assert_eq!(parsed.frame_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_parse_overrides() {
        let config = Config::try_parse_from([
            "life_screen",
            "--width", "400",
            "--cell-size", "20",
            "--generations", "5",
            "--pattern", "glider",
            "--parallel",
        ])
        .unwrap();
        assert_eq!(config.width, 400);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.grid_dimensions(), (30, 20));
        assert_eq!(config.generations, Some(5));
        assert!(config.parallel);
    }

    #[test]
    fn test_zero_cell_size_rejected_by_parser() {
        assert!(Config::try_parse_from(["life_screen", "--cell-size", "0"]).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let big_cells = Config { cell_size: 700, ..Config::default() };
        assert!(matches!(big_cells.validate(), Err(ConfigError::CellLargerThanWindow { .. })));

        let dense = Config { density: -0.1, ..Config::default() };
        assert!(matches!(dense.validate(), Err(ConfigError::Density(_))));
    }

    #[test]
    fn test_seed_plan() {
        let random = Config { seed: Some(9), ..Config::default() };
        assert_eq!(random.rng_seed(), 9);
        assert_eq!(
            random.seed_plan(9).unwrap(),
            Seed::Random { density: DEFAULT_DENSITY, seed: 9 }
        );

        let named = Config { pattern: Some("Acorn".into()), ..Config::default() };
        assert_eq!(named.seed_plan(0).unwrap(), Seed::Centered(presets::acorn()));

        let unknown = Config { pattern: Some("nope".into()), ..Config::default() };
        assert!(matches!(unknown.seed_plan(0), Err(ConfigError::UnknownPattern(_))));
    }
}
