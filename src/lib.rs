//! # Introduction
//!
//! fungetty runs Befunge programs: a grid of characters walked by an
//! instruction pointer that mutates an integer stack and, through `p`, the
//! grid itself. Runs can be recorded step by step and navigated forward and
//! backward through a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Grid → Interpreter → (Snapshots → TUI)
//! ```
//!
//! 1. [`parser`]: splits the program text into jagged grid rows.
//! 2. [`memory`]: the [`memory::grid::Grid`] and the integer
//!    [`memory::stack::Stack`].
//! 3. [`interpreter`]: decodes and executes cells; [`interpret`] runs a
//!    program headlessly and returns its output.
//! 4. [`snapshot`]: output buffer and the snapshot ring used by
//!    [`interpreter::debugger::Debugger`].
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Dialect notes
//!
//! - Characters outside the instruction table push `code - '0'`.
//! - In string mode only space, `!` and unlisted characters push their code;
//!   other operators keep executing. `"` leaves string mode.
//! - `:` and `\` read missing values as `0`; every other pop on an empty
//!   stack is a [`RuntimeError::StackUnderflow`].
//! - Division and modulo by zero yield `0`.

pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod samples;
pub mod snapshot;
pub mod ui;

pub use interpreter::config::InterpreterConfig;
pub use interpreter::engine::{interpret, interpret_with, Interpreter};
pub use interpreter::errors::RuntimeError;
