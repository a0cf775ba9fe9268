// Domain layer - grid, rules, automaton
pub mod domain;

// Application layer - driver loop and wiring
pub mod application;

// Infrastructure layer - rendering, input, configuration, logging
pub mod rendering;
pub mod input;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-exports for convenience
pub use domain::{Automaton, CellState, ConwayLife, ConwayRule, Grid, Pattern, Rule, Seed, presets};
pub use application::{RunSettings, RunSummary, StopReason};
pub use config::Config;
pub use error::{Error, RenderError};
pub use input::{InputEvent, InputTracker, Rect};
pub use rendering::{EventSource, PauseOutcome, Renderer};
