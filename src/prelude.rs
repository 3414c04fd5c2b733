//! Makes available common structures needed to build a grid
//!
//! You may write `use pmgrid::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Axis, Config, ModelType, Schematization, Zone, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::base::{GEO_PARAMETERS, IBOUND_PARAMETERS, RECHARGE_PARAMETERS, WELL_PARAMETERS};
pub use crate::grid::{BuildReport, FillIssue, Grid, ModelState, WellAllocation};
pub use crate::util::GridOutput;
