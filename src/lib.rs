//! Structured grid discretization for porous media well flow models
//!
//! The schematization (zones of the aquifer system grouped in categories) is
//! turned into a structured grid with its parameter fields, boundary
//! conditions, and well discharges, ready to be handed to a flow solver.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod grid;
pub mod prelude;
pub mod util;
