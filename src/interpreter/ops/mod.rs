//! Instruction implementations split out of the engine
//!
//! - [`binary`]: two-operand arithmetic and comparison
//! - [`access`]: `p`/`g` grid reads and writes

pub mod access;
pub mod binary;
