//! Interpreter configuration

use super::constants::DEFAULT_SNAPSHOT_LIMIT;

/// Options for constructing an [`Interpreter`](super::engine::Interpreter)
/// or a [`Debugger`](super::debugger::Debugger)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Seed for the `?` instruction's RNG; `None` draws from OS entropy
    pub seed: Option<u64>,

    /// Memory budget for debugger snapshots, in bytes
    pub snapshot_memory_limit: usize,
}

impl InterpreterConfig {
    pub fn seeded(seed: u64) -> Self {
        InterpreterConfig {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            seed: None,
            snapshot_memory_limit: DEFAULT_SNAPSHOT_LIMIT,
        }
    }
}
