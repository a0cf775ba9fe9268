use tracing::{debug, trace};

use super::{Algorithm, ConwayRule, Grid, Rule, Seed};
use crate::error::SeedError;

/// Automaton owns the current generation and a scratch buffer of the same size.
///
/// `step` writes the next generation into the scratch buffer and then flips
/// which buffer is current, so readers only ever see a complete generation.
pub struct Automaton<R: Rule = ConwayRule> {
    buffers: [Grid; 2],
    current: usize,
    rule: R,
    algorithm: Algorithm,
    generation: u64,
}

/// Conway's Game of Life automaton
pub type ConwayLife = Automaton<ConwayRule>;

impl<R: Rule> Automaton<R> {
    /// Create an automaton of `rows x columns` populated by `seed`
    pub fn new(rows: usize, columns: usize, rule: R, seed: &Seed) -> Result<Self, SeedError> {
        let mut grid = Grid::new(rows, columns);
        seed.apply(&mut grid)?;
        debug!(rows, columns, rule = rule.name(), live = grid.live_count(), "automaton seeded");
        Ok(Self::with_grid(grid, rule))
    }

    /// Create an automaton whose first generation is `grid`
    pub fn with_grid(grid: Grid, rule: R) -> Self {
        let (rows, columns) = grid.dimensions();
        Self {
            buffers: [grid, Grid::new(rows, columns)],
            current: 0,
            rule,
            algorithm: Algorithm::default(),
            generation: 0,
        }
    }

    /// Set evolution algorithm (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Read-only view of the current generation
    pub fn current_grid(&self) -> &Grid {
        &self.buffers[self.current]
    }

    /// `(rows, columns)` of both buffers
    pub fn dimensions(&self) -> (usize, usize) {
        self.current_grid().dimensions()
    }

    /// Number of completed steps
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance exactly one generation
    pub fn step(&mut self) {
        let (first, second) = self.buffers.split_at_mut(1);
        let (source, scratch) = if self.current == 0 {
            (&first[0], &mut second[0])
        } else {
            (&second[0], &mut first[0])
        };

        match self.algorithm {
            Algorithm::Serial => source.evolve_into(scratch, &self.rule),
            Algorithm::Parallel => source.evolve_into_parallel(scratch, &self.rule),
        }

        self.current ^= 1;
        self.generation += 1;
        trace!(generation = self.generation, "generation advanced");
    }
}

impl ConwayLife {
    /// Conway automaton of `rows x columns` populated by `seed`
    pub fn conway(rows: usize, columns: usize, seed: &Seed) -> Result<Self, SeedError> {
        Self::new(rows, columns, ConwayRule, seed)
    }
}
