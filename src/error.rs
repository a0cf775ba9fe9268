//! Error types shared by the simulation, its backends and the binaries.

use std::io;

use thiserror::Error;

/// Invalid run configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cell size {cell_size}px does not fit a {width}x{height} window")]
    CellLargerThanWindow { cell_size: u32, width: u32, height: u32 },
    #[error("density must be within 0.0..=1.0, got {0}")]
    Density(f64),
    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),
}

/// Initial seeding that cannot be applied to the grid
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("pattern `{name}` ({rows}x{columns}) does not fit a {grid_rows}x{grid_columns} grid")]
    PatternTooLarge {
        name: String,
        rows: usize,
        columns: usize,
        grid_rows: usize,
        grid_columns: usize,
    },
    #[error("density must be within 0.0..=1.0, got {0}")]
    Density(f64),
}

/// Display backend failures.
///
/// `Init` is raised while acquiring a backend and is unrecoverable;
/// `Io` is a frame that could not be written once the backend was up.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{backend} backend initialization failed: {reason}")]
    Init { backend: &'static str, reason: String },
    #[error("frame output failed: {0}")]
    Io(#[from] io::Error),
}

impl RenderError {
    pub fn init(backend: &'static str, reason: impl Into<String>) -> Self {
        Self::Init { backend, reason: reason.into() }
    }

    pub const fn is_init(&self) -> bool {
        matches!(self, Self::Init { .. })
    }
}

/// Top-level error surfaced by the binaries
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl Error {
    /// Process exit status for this failure
    pub const fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) => 2,
            Error::Render(RenderError::Init { .. }) => 3,
            Error::Seed(_) | Error::Render(RenderError::Io(_)) => 1,
        }
    }
}
