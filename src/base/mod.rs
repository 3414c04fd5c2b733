//! Implements the base structures for building a groundwater flow grid

mod config;
mod constants;
mod enums;
mod model_extent;
mod samples;
mod schematization;
mod zone;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::enums::*;
pub use crate::base::model_extent::*;
pub use crate::base::samples::*;
pub use crate::base::schematization::*;
pub use crate::base::zone::*;
