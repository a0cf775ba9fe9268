/// CellState is the value stored at every grid coordinate.
/// Conway's rule only uses DEAD and ALIVE, but the byte leaves room
/// for rules with extra states (e.g. "dying" generations).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct CellState(pub u8);

impl CellState {
    pub const DEAD: CellState = CellState(0);
    pub const ALIVE: CellState = CellState(1);

    /// Check if the cell counts as a live neighbor
    pub const fn is_alive(self) -> bool {
        self.0 == Self::ALIVE.0
    }

    /// Build a two-state cell from a flag
    pub const fn from_alive(alive: bool) -> Self {
        if alive { Self::ALIVE } else { Self::DEAD }
    }

    /// Raw state value
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        Self::from_alive(alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dead() {
        assert_eq!(CellState::default(), CellState::DEAD);
        assert!(!CellState::default().is_alive());
    }

    #[test]
    fn test_only_alive_state_counts() {
        assert!(CellState::ALIVE.is_alive());
        assert!(!CellState(2).is_alive());
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(CellState::from(true), CellState::ALIVE);
        assert_eq!(CellState::from(false), CellState::DEAD);
    }
}
