use super::{DECIMALS_HORIZONTAL, DECIMALS_VERTICAL};
use serde::{Deserialize, Serialize};

/// Defines the geometry of the flow model
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum ModelType {
    /// Radial slice around a vertical well axis (2 rows, polar correction)
    Axisymmetric,

    /// Vertical cross-section (2 rows, no correction)
    TwoDim,

    /// Full three-dimensional block with a discretized transverse axis
    ThreeDim,
}

impl ModelType {
    /// Indicates that the grid uses the 2-row convention
    pub fn two_rows(&self) -> bool {
        match self {
            ModelType::Axisymmetric => true,
            ModelType::TwoDim => true,
            ModelType::ThreeDim => false,
        }
    }
}

/// Defines the grid axes
///
/// Each axis knows the names of the zone attributes that constrain it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum Axis {
    /// Radial (x) axis, ascending; one cell per column
    Radial,

    /// Transverse (y) axis, ascending; one cell per row
    Transverse,

    /// Vertical (z) axis, descending from the top; one cell per layer
    Vertical,
}

impl Axis {
    /// Returns the names of the (min, max) attributes
    pub fn bound_keys(&self) -> (&'static str, &'static str) {
        match self {
            Axis::Radial => ("rmin", "rmax"),
            Axis::Transverse => ("ymin", "ymax"),
            Axis::Vertical => ("bot", "top"),
        }
    }

    /// Returns the name of the explicit refinement-count attribute
    pub fn count_key(&self) -> &'static str {
        match self {
            Axis::Radial => "ncols",
            Axis::Transverse => "nrows",
            Axis::Vertical => "nlayers",
        }
    }

    /// Returns the name of the target-resolution attribute
    pub fn resolution_key(&self) -> &'static str {
        match self {
            Axis::Radial => "res_hor",
            Axis::Transverse => "res_hor",
            Axis::Vertical => "res_vert",
        }
    }

    /// Indicates that the boundaries are sorted in ascending order
    pub fn ascending(&self) -> bool {
        match self {
            Axis::Radial => true,
            Axis::Transverse => true,
            Axis::Vertical => false,
        }
    }

    /// Returns the number of decimals kept when merging boundaries
    pub fn decimals(&self) -> i32 {
        match self {
            Axis::Radial => DECIMALS_HORIZONTAL,
            Axis::Transverse => DECIMALS_HORIZONTAL,
            Axis::Vertical => DECIMALS_VERTICAL,
        }
    }

    /// Rounds a coordinate to the number of decimals of this axis
    pub fn round(&self, value: f64) -> f64 {
        let scale = f64::powi(10.0, self.decimals());
        f64::round(value * scale) / scale
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
