//! Befunge execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the fetch/dispatch/move loop and the [`interpret`](engine::interpret) entry points
//! - [`instruction`]: character to [`Instruction`](instruction::Instruction) decoding
//! - [`state`]: IP position, direction and mode flags
//! - [`debugger`]: snapshot-based stepping forward and backward
//! - [`errors`]: Runtime error types
//!
//! # Execution Model
//!
//! Each step fetches the cell under the IP. The terminator `@` ends the run
//! without moving. Otherwise the cell is either skipped (after `#`) or decoded
//! and executed, and the IP moves one cell with wraparound.

pub mod config;
pub mod constants;
pub mod debugger;
pub mod engine;
pub mod errors;
pub mod instruction;
pub mod ops;
pub mod state;
