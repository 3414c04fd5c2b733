//! Contains some utility functions and structures

mod grid_output;
pub mod unfilled_cells;

pub use grid_output::*;
