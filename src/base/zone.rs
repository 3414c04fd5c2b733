use super::{Axis, MAX_CELLS_PER_ZONE, VADOSE};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Holds the value of a free-form zone parameter
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean flag (e.g., `vadose`)
    Flag(bool),

    /// Numeric value (e.g., conductivity, discharge, head)
    Number(f64),

    /// Categorical value (e.g., a redox class)
    Text(String),
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Flag(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Flag(v) => write!(f, "{}", v),
            ParamValue::Number(v) => write!(f, "{:?}", v),
            ParamValue::Text(v) => write!(f, "{:?}", v),
        }
    }
}

/// Holds a region of the model domain with its extent, refinement, and parameter values
///
/// All bounds are optional: a zone may constrain only some axes. A zone without
/// bounds along an axis is skipped when that axis is discretized and spans the
/// whole axis when its values are painted onto the grid.
///
/// Note: The vertical axis is stored with `top` > `bot`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Zone {
    /// Minimum radius
    pub rmin: Option<f64>,

    /// Maximum radius
    pub rmax: Option<f64>,

    /// Minimum transverse coordinate (3D only)
    pub ymin: Option<f64>,

    /// Maximum transverse coordinate (3D only)
    pub ymax: Option<f64>,

    /// Top elevation
    pub top: Option<f64>,

    /// Bottom elevation
    pub bot: Option<f64>,

    /// Explicit number of columns in [rmin, rmax]
    pub ncols: Option<i64>,

    /// Explicit number of rows in [ymin, ymax]
    pub nrows: Option<i64>,

    /// Explicit number of layers in [bot, top]
    pub nlayers: Option<i64>,

    /// Target horizontal resolution (radial and transverse)
    pub res_hor: Option<f64>,

    /// Target vertical resolution
    pub res_vert: Option<f64>,

    /// Free-form parameters to be painted onto the grid
    #[serde(flatten)]
    pub params: HashMap<String, ParamValue>,
}

impl Zone {
    /// Allocates a new zone without bounds or parameters
    pub fn new() -> Self {
        Zone::default()
    }

    /// Sets the radial bounds
    pub fn set_radial(&mut self, rmin: f64, rmax: f64) -> Result<&mut Self, StrError> {
        if rmax <= rmin {
            return Err("rmax must be > rmin");
        }
        self.rmin = Some(rmin);
        self.rmax = Some(rmax);
        Ok(self)
    }

    /// Sets the transverse bounds
    pub fn set_transverse(&mut self, ymin: f64, ymax: f64) -> Result<&mut Self, StrError> {
        if ymax <= ymin {
            return Err("ymax must be > ymin");
        }
        self.ymin = Some(ymin);
        self.ymax = Some(ymax);
        Ok(self)
    }

    /// Sets the vertical bounds
    pub fn set_vertical(&mut self, top: f64, bot: f64) -> Result<&mut Self, StrError> {
        if top <= bot {
            return Err("top must be > bot");
        }
        self.top = Some(top);
        self.bot = Some(bot);
        Ok(self)
    }

    /// Sets the explicit number of cells along an axis
    pub fn set_count(&mut self, axis: Axis, count: i64) -> Result<&mut Self, StrError> {
        if count < 1 {
            return Err("refinement count must be ≥ 1");
        }
        if count as u64 > MAX_CELLS_PER_ZONE as u64 {
            return Err("too many cells along an axis");
        }
        match axis {
            Axis::Radial => self.ncols = Some(count),
            Axis::Transverse => self.nrows = Some(count),
            Axis::Vertical => self.nlayers = Some(count),
        }
        Ok(self)
    }

    /// Sets the target resolution along an axis
    ///
    /// **Note:** The radial and transverse axes share `res_hor`.
    pub fn set_resolution(&mut self, axis: Axis, resolution: f64) -> Result<&mut Self, StrError> {
        if resolution <= 0.0 {
            return Err("resolution must be > 0.0");
        }
        match axis {
            Axis::Radial | Axis::Transverse => self.res_hor = Some(resolution),
            Axis::Vertical => self.res_vert = Some(resolution),
        }
        Ok(self)
    }

    /// Sets a free-form parameter
    pub fn set_param<V>(&mut self, key: &str, value: V) -> Result<&mut Self, StrError>
    where
        V: Into<ParamValue>,
    {
        if is_geometry_key(key) {
            return Err("cannot use a geometry attribute as parameter");
        }
        self.params.insert(key.to_string(), value.into());
        Ok(self)
    }

    /// Returns the (min, max) bounds along an axis
    pub fn bounds(&self, axis: Axis) -> (Option<f64>, Option<f64>) {
        match axis {
            Axis::Radial => (self.rmin, self.rmax),
            Axis::Transverse => (self.ymin, self.ymax),
            Axis::Vertical => (self.bot, self.top),
        }
    }

    /// Returns the explicit number of cells along an axis, if any
    pub fn count(&self, axis: Axis) -> Option<i64> {
        match axis {
            Axis::Radial => self.ncols,
            Axis::Transverse => self.nrows,
            Axis::Vertical => self.nlayers,
        }
    }

    /// Returns the target resolution along an axis, if any
    pub fn resolution(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Radial | Axis::Transverse => self.res_hor,
            Axis::Vertical => self.res_vert,
        }
    }

    /// Returns a parameter value
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// Returns a numeric parameter value (None if missing or not a number)
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.params.get(key) {
            Some(ParamValue::Number(v)) => Some(*v),
            _ => None,
        }
    }

    /// Indicates that the zone is unsaturated and not part of the flow model
    pub fn is_vadose(&self) -> bool {
        match self.params.get(VADOSE) {
            Some(ParamValue::Flag(flag)) => *flag,
            _ => false,
        }
    }

    /// Checks the consistency of bounds, counts, and resolutions
    ///
    /// Bounds given only partially along an axis are accepted (the zone is
    /// then skipped for that axis); bounds given in full must satisfy max > min.
    pub fn validate(&self) -> Result<(), StrError> {
        for axis in [Axis::Radial, Axis::Transverse, Axis::Vertical] {
            if let (Some(min), Some(max)) = self.bounds(axis) {
                if max <= min {
                    return Err("axis bounds must satisfy max > min");
                }
            }
            if let Some(count) = self.count(axis) {
                if count < 1 {
                    return Err("refinement count must be ≥ 1");
                }
                if count as u64 > MAX_CELLS_PER_ZONE as u64 {
                    return Err("too many cells along an axis");
                }
            }
            if let Some(resolution) = self.resolution(axis) {
                if resolution <= 0.0 {
                    return Err("resolution must be > 0.0");
                }
            }
        }
        Ok(())
    }
}

/// Indicates that a key names a geometry or refinement attribute
fn is_geometry_key(key: &str) -> bool {
    match key {
        "rmin" | "rmax" | "ymin" | "ymax" | "top" | "bot" => true,
        "ncols" | "nrows" | "nlayers" | "res_hor" | "res_vert" => true,
        _ => false,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ParamValue, Zone};
    use crate::base::Axis;
    use crate::StrError;

    #[test]
    fn setters_work() -> Result<(), StrError> {
        let mut zone = Zone::new();
        zone.set_radial(0.0, 1.0)?
            .set_vertical(0.0, -10.0)?
            .set_count(Axis::Radial, 4)?
            .set_resolution(Axis::Vertical, 0.5)?
            .set_param("hk", 10.0)?
            .set_param("redox", "anoxic")?
            .set_param("vadose", false)?;
        assert_eq!(zone.bounds(Axis::Radial), (Some(0.0), Some(1.0)));
        assert_eq!(zone.bounds(Axis::Vertical), (Some(-10.0), Some(0.0)));
        assert_eq!(zone.bounds(Axis::Transverse), (None, None));
        assert_eq!(zone.count(Axis::Radial), Some(4));
        assert_eq!(zone.count(Axis::Vertical), None);
        assert_eq!(zone.resolution(Axis::Vertical), Some(0.5));
        assert_eq!(zone.resolution(Axis::Radial), None);
        assert_eq!(zone.number("hk"), Some(10.0));
        assert_eq!(zone.number("redox"), None);
        assert_eq!(zone.param("redox"), Some(&ParamValue::Text("anoxic".to_string())));
        assert_eq!(zone.is_vadose(), false);
        zone.set_param("vadose", true)?;
        assert_eq!(zone.is_vadose(), true);
        zone.validate()
    }

    #[test]
    fn setters_capture_errors() {
        let mut zone = Zone::new();
        assert_eq!(zone.set_radial(1.0, 1.0).err(), Some("rmax must be > rmin"));
        assert_eq!(zone.set_transverse(2.0, 1.0).err(), Some("ymax must be > ymin"));
        assert_eq!(zone.set_vertical(-5.0, 0.0).err(), Some("top must be > bot"));
        assert_eq!(
            zone.set_count(Axis::Vertical, 0).err(),
            Some("refinement count must be ≥ 1")
        );
        assert_eq!(
            zone.set_count(Axis::Radial, 100_001).err(),
            Some("too many cells along an axis")
        );
        assert_eq!(
            zone.set_resolution(Axis::Radial, -1.0).err(),
            Some("resolution must be > 0.0")
        );
        assert_eq!(
            zone.set_param("ncols", 3.0).err(),
            Some("cannot use a geometry attribute as parameter")
        );
    }

    #[test]
    fn validate_captures_errors() {
        let mut zone = Zone::new();
        zone.rmin = Some(5.0);
        assert_eq!(zone.validate(), Ok(())); // partial bounds are fine
        zone.rmax = Some(2.0);
        assert_eq!(zone.validate().err(), Some("axis bounds must satisfy max > min"));
        zone.rmax = Some(8.0);
        zone.nlayers = Some(-2);
        assert_eq!(zone.validate().err(), Some("refinement count must be ≥ 1"));
        zone.nlayers = Some(i64::MAX);
        assert_eq!(zone.validate().err(), Some("too many cells along an axis"));
        zone.nlayers = None;
        zone.res_hor = Some(0.0);
        assert_eq!(zone.validate().err(), Some("resolution must be > 0.0"));
    }

    #[test]
    fn deserialize_works() {
        let json = r#"{"rmin": 0, "rmax": 2.5, "ncols": 5, "hk": 12.5, "redox": "suboxic", "vadose": false}"#;
        let zone: Zone = serde_json::from_str(json).unwrap();
        assert_eq!(zone.bounds(Axis::Radial), (Some(0.0), Some(2.5)));
        assert_eq!(zone.count(Axis::Radial), Some(5));
        assert_eq!(zone.top, None);
        assert_eq!(zone.params.len(), 3);
        assert_eq!(zone.number("hk"), Some(12.5));
        assert_eq!(format!("{}", zone.param("redox").unwrap()), "\"suboxic\"");
        assert_eq!(format!("{}", zone.param("vadose").unwrap()), "false");
    }
}
