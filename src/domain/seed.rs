use rand::{SeedableRng, rngs::StdRng};

use super::{Grid, Pattern};
use crate::error::SeedError;

/// How a fresh automaton's first generation is populated
#[derive(Clone, Debug, PartialEq)]
pub enum Seed {
    /// Every cell dead
    Empty,
    /// Each cell alive with probability `density`, reproducible from `seed`
    Random { density: f64, seed: u64 },
    /// Pattern with its top-left corner at `origin` (row, column)
    Pattern { pattern: Pattern, origin: (usize, usize) },
    /// Pattern centered on the grid
    Centered(Pattern),
}

impl Seed {
    /// Populate `grid`, which is cleared first
    pub fn apply(&self, grid: &mut Grid) -> Result<(), SeedError> {
        grid.clear();
        match self {
            Seed::Empty => Ok(()),
            Seed::Random { density, seed } => {
                if !(0.0..=1.0).contains(density) {
                    return Err(SeedError::Density(*density));
                }
                let mut rng = StdRng::seed_from_u64(*seed);
                grid.randomize(&mut rng, *density);
                Ok(())
            }
            Seed::Pattern { pattern, origin: (row, column) } => {
                place(pattern, grid, *row, *column)
            }
            Seed::Centered(pattern) => {
                let row = grid.rows().saturating_sub(pattern.rows) / 2;
                let column = grid.columns().saturating_sub(pattern.columns) / 2;
                place(pattern, grid, row, column)
            }
        }
    }
}

fn place(pattern: &Pattern, grid: &mut Grid, row: usize, column: usize) -> Result<(), SeedError> {
    if !pattern.fits_at(grid, row, column) {
        return Err(SeedError::PatternTooLarge {
            name: pattern.name.clone(),
            rows: pattern.rows,
            columns: pattern.columns,
            grid_rows: grid.rows(),
            grid_columns: grid.columns(),
        });
    }
    pattern.place_on(grid, row, column);
    Ok(())
}
