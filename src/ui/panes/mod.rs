//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`grid`]: Program grid with instruction coloring, IP and self-modified cells
//! - [`stack`]: Integer stack, top first, with character hints
//! - [`output`]: Text produced by `.` and `,`
//! - [`status`]: Status bar with keybindings and execution state
//!
//! Each pane module exports a primary `render_*` function taking the frame,
//! its area, the data to show and its own scroll state.

pub mod grid;
pub mod output;
pub mod stack;
pub mod status;

pub use grid::{render_grid_pane, GridViewport};
pub use output::render_output_pane;
pub use stack::render_stack_pane;
pub use status::{render_status_bar, StatusInfo};
