//! Algorithm enum for selecting how a generation is computed.
//!
//! Both variants write into the automaton's scratch buffer and
//! produce identical grids; they only differ in scheduling.

/// Available evolution strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell by cell on the calling thread
    #[default]
    Serial,
    /// One rayon task per row
    Parallel,
}

impl Algorithm {
    /// Display name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// One-line summary logged when the automaton is built
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Cell by cell, single thread",
            Algorithm::Parallel => "Rows split across the rayon pool",
        }
    }
}
