mod cell;
mod grid;
mod rules;
mod patterns;
mod seed;
mod algorithm;
mod automaton;

pub use cell::CellState;
pub use grid::Grid;
pub use rules::{Rule, ConwayRule};
pub use patterns::{Pattern, presets};
pub use seed::Seed;
pub use algorithm::Algorithm;
pub use automaton::{Automaton, ConwayLife};
