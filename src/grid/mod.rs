//! Implements the grid discretization and the parameter fields of the flow model

mod axis_discretization;
mod axisymmetric;
mod boundary_conditions;
mod boundary_indexer;
mod grid_builder;
mod model_state;
mod parameter_filler;
mod well_allocator;
pub use crate::grid::axis_discretization::*;
pub use crate::grid::axisymmetric::*;
pub use crate::grid::boundary_conditions::*;
pub use crate::grid::boundary_indexer::*;
pub use crate::grid::grid_builder::*;
pub use crate::grid::model_state::*;
pub use crate::grid::parameter_filler::*;
pub use crate::grid::well_allocator::*;
