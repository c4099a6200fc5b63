//! Runtime error types for the Befunge interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! while a program runs or while its history is navigated.
//!
//! All runtime errors are fatal - they halt execution. Division and modulo by zero
//! are not errors; they yield `0`.

use super::state::Position;
use std::fmt;

/// Runtime errors that can occur during execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// An instruction popped an empty stack
    StackUnderflow { instruction: char, position: Position },

    /// `p`/`g` addressed a cell outside the grid, or the IP stands on a cell
    /// that does not exist (vertical wrap into a shorter row, empty row)
    OutOfRangeAddress {
        row: i64,
        col: i64,
        position: Position,
    },

    /// Snapshot history limit exceeded
    SnapshotLimitExceeded { current: usize, limit: usize },

    /// History navigation failure
    Generic { message: String, position: Position },
}

impl RuntimeError {
    pub fn position(&self) -> Option<Position> {
        match self {
            RuntimeError::StackUnderflow { position, .. } => Some(*position),
            RuntimeError::OutOfRangeAddress { position, .. } => Some(*position),
            RuntimeError::Generic { position, .. } => Some(*position),
            RuntimeError::SnapshotLimitExceeded { .. } => None,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::StackUnderflow {
                instruction,
                position,
            } => {
                write!(
                    f,
                    "Stack underflow: '{}' popped an empty stack at {}",
                    instruction, position
                )
            }
            RuntimeError::OutOfRangeAddress { row, col, position } => {
                write!(
                    f,
                    "Address out of range: ({}, {}) is outside the grid at {}",
                    row, col, position
                )
            }
            RuntimeError::SnapshotLimitExceeded { current, limit } => {
                write!(
                    f,
                    "Snapshot memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
            RuntimeError::Generic { message, position } => {
                write!(f, "{} at {}", message, position)
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
