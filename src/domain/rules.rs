use super::CellState;

/// Trait for cellular automaton transition rules.
/// A rule only decides one cell's next state; neighbor counting,
/// the dead boundary and double buffering belong to the automaton.
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: CellState, live_neighbors: u8) -> CellState;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn evolve(&self, current: CellState, live_neighbors: u8) -> CellState {
        match (current.is_alive(), live_neighbors) {
            (true, 2 | 3) => CellState::ALIVE,
            (false, 3) => CellState::ALIVE,
            _ => CellState::DEAD,
        }
    }
}
