mod driver;

pub use driver::{DEMO_BUTTON, RunSettings, RunSummary, StopReason, run};

use tracing::info;

use crate::config::Config;
use crate::domain::{Algorithm, ConwayLife, Seed};
use crate::error::Error;

/// Build the Conway automaton a binary will drive from its configuration
pub fn build_automaton(config: &Config, rows: usize, columns: usize) -> Result<ConwayLife, Error> {
    let rng_seed = config.rng_seed();
    let seed = config.seed_plan(rng_seed)?;
    let algorithm = if config.parallel { Algorithm::Parallel } else { Algorithm::Serial };
    let pattern = match &seed {
        Seed::Pattern { pattern, .. } | Seed::Centered(pattern) => Some(pattern),
        Seed::Empty | Seed::Random { .. } => None,
    };
    info!(
        rows,
        columns,
        rng_seed,
        pattern = pattern.map_or("random", |p| p.name.as_str()),
        pattern_description = pattern.map(|p| p.description),
        algorithm = algorithm.name(),
        algorithm_description = algorithm.description(),
        "seeding automaton"
    );
    Ok(ConwayLife::conway(rows, columns, &seed)?.with_algorithm(algorithm))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_reproducible_with_seed() {
        let config = Config { seed: Some(5), parallel: true, ..Config::default() };
        let a = build_automaton(&config, 20, 30).unwrap();
        let b = build_automaton(&config, 20, 30).unwrap();
        assert_eq!(a.current_grid(), b.current_grid());
        assert_eq!(a.algorithm(), Algorithm::Parallel);
    }

    #[test]
    fn test_oversized_pattern_is_seed_error() {
        let config = Config { pattern: Some("Gosper Glider Gun".into()), ..Config::default() };
        let err = build_automaton(&config, 5, 5).err().unwrap();
        assert!(matches!(err, Error::Seed(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
