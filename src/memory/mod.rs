//! Run-time storage for a Befunge program
//!
//! - [`grid`]: the mutable program text with wraparound movement
//! - [`stack`]: the integer working stack with zero-fill duplicate/swap
//!
//! Both are owned by a single [`Interpreter`](crate::interpreter::engine::Interpreter)
//! and cloned wholesale into each [`Snapshot`](crate::snapshot::Snapshot).

pub mod grid;
pub mod stack;
