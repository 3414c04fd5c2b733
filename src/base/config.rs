use super::{ModelType, DEFAULT_STORAGE, DEFAULT_VANI, DISCHARGE, HK, RECHARGE, STORAGE};
use super::{GEO_PARAMETERS, IBOUND_PARAMETERS, RECHARGE_PARAMETERS, WELL_PARAMETERS};
use crate::StrError;
use russell_lab::math::PI;
use std::fmt;

/// Holds configuration data for building the grid and its parameter fields
pub struct Config {
    /// Geometry of the flow model
    pub model_type: ModelType,

    /// Categories whose zones define the cell boundaries
    pub categories: Vec<String>,

    /// Default maximum horizontal cell size (used when a zone gives neither count nor resolution)
    pub res_hor_max: Option<f64>,

    /// Default maximum vertical cell size (used when a zone gives neither count nor resolution)
    pub res_vert_max: Option<f64>,

    /// Polar angle of the axisymmetric correction (full circle = 2π)
    pub angle: f64,

    /// Specific storage applied where no zone overrides it
    pub storage_default: f64,

    /// Vertical anisotropy ratio applied where no zone overrides it
    pub vani_default: f64,

    /// Starting head of cells without a prescribed head
    pub initial_head: f64,

    /// Name of the well attribute holding the total discharge
    pub discharge_key: String,

    /// Parameters receiving the axisymmetric correction
    pub corrected: Vec<String>,

    /// Categories holding the aquifer parameters (hk, vani, porosity, storage)
    pub geo_categories: Vec<String>,

    /// Categories holding the recharge zones
    pub recharge_categories: Vec<String>,

    /// Category holding the well screens
    pub well_category: String,

    /// Categories holding the constant-head and inactive zones
    pub boundary_categories: Vec<String>,
}

impl Config {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Config {
            model_type: ModelType::Axisymmetric,
            categories: vec![
                GEO_PARAMETERS.to_string(),
                RECHARGE_PARAMETERS.to_string(),
                IBOUND_PARAMETERS.to_string(),
                WELL_PARAMETERS.to_string(),
            ],
            res_hor_max: None,
            res_vert_max: None,
            angle: 2.0 * PI,
            storage_default: DEFAULT_STORAGE,
            vani_default: DEFAULT_VANI,
            initial_head: 0.0,
            discharge_key: DISCHARGE.to_string(),
            corrected: vec![HK.to_string(), STORAGE.to_string(), RECHARGE.to_string()],
            geo_categories: vec![GEO_PARAMETERS.to_string()],
            recharge_categories: vec![RECHARGE_PARAMETERS.to_string()],
            well_category: WELL_PARAMETERS.to_string(),
            boundary_categories: vec![IBOUND_PARAMETERS.to_string(), WELL_PARAMETERS.to_string()],
        }
    }

    /// Sets the model type
    pub fn set_model_type(&mut self, model_type: ModelType) -> Result<&mut Self, StrError> {
        self.model_type = model_type;
        Ok(self)
    }

    /// Sets the categories whose zones define the cell boundaries
    pub fn set_categories(&mut self, categories: &[&str]) -> Result<&mut Self, StrError> {
        if categories.len() < 1 {
            return Err("at least one category is required for the discretization");
        }
        self.categories = categories.iter().map(|c| c.to_string()).collect();
        Ok(self)
    }

    /// Sets the default maximum horizontal cell size
    pub fn set_res_hor_max(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("res_hor_max must be > 0.0");
        }
        self.res_hor_max = Some(value);
        Ok(self)
    }

    /// Sets the default maximum vertical cell size
    pub fn set_res_vert_max(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("res_vert_max must be > 0.0");
        }
        self.res_vert_max = Some(value);
        Ok(self)
    }

    /// Sets the polar angle of the axisymmetric correction
    pub fn set_angle(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("angle must be > 0.0");
        }
        self.angle = value;
        Ok(self)
    }

    /// Sets the default specific storage
    pub fn set_storage_default(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value < 0.0 {
            return Err("storage_default must be ≥ 0.0");
        }
        self.storage_default = value;
        Ok(self)
    }

    /// Sets the default vertical anisotropy ratio
    pub fn set_vani_default(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("vani_default must be > 0.0");
        }
        self.vani_default = value;
        Ok(self)
    }

    /// Sets the starting head of cells without a prescribed head
    pub fn set_initial_head(&mut self, value: f64) -> Result<&mut Self, StrError> {
        self.initial_head = value;
        Ok(self)
    }

    /// Sets the name of the well attribute holding the total discharge
    pub fn set_discharge_key(&mut self, key: &str) -> Result<&mut Self, StrError> {
        if key.is_empty() {
            return Err("discharge_key must not be empty");
        }
        self.discharge_key = key.to_string();
        Ok(self)
    }

    /// Sets the parameters receiving the axisymmetric correction
    pub fn set_corrected(&mut self, parameters: &[&str]) -> Result<&mut Self, StrError> {
        self.corrected = parameters.iter().map(|p| p.to_string()).collect();
        Ok(self)
    }

    /// Sets the categories holding the constant-head and inactive zones
    pub fn set_boundary_categories(&mut self, categories: &[&str]) -> Result<&mut Self, StrError> {
        self.boundary_categories = categories.iter().map(|c| c.to_string()).collect();
        Ok(self)
    }

    /// Indicates whether a parameter receives the axisymmetric correction
    pub fn is_corrected(&self, parameter: &str) -> bool {
        self.model_type == ModelType::Axisymmetric && self.corrected.iter().any(|p| p == parameter)
    }
}

/// Returns the names as a vector of string slices
pub(crate) fn as_strs(names: &[String]) -> Vec<&str> {
    names.iter().map(|n| n.as_str()).collect()
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n").unwrap();
        write!(f, "==================\n").unwrap();
        write!(f, "model_type = {:?}\n", self.model_type).unwrap();
        write!(f, "categories = {:?}\n", self.categories).unwrap();
        write!(f, "res_hor_max = {:?}\n", self.res_hor_max).unwrap();
        write!(f, "res_vert_max = {:?}\n", self.res_vert_max).unwrap();
        write!(f, "angle = {:?}\n", self.angle).unwrap();
        write!(f, "storage_default = {:?}\n", self.storage_default).unwrap();
        write!(f, "vani_default = {:?}\n", self.vani_default).unwrap();
        write!(f, "initial_head = {:?}\n", self.initial_head).unwrap();
        write!(f, "discharge_key = {:?}\n", self.discharge_key).unwrap();
        write!(f, "corrected = {:?}\n", self.corrected).unwrap();
        write!(f, "geo_categories = {:?}\n", self.geo_categories).unwrap();
        write!(f, "recharge_categories = {:?}\n", self.recharge_categories).unwrap();
        write!(f, "well_category = {:?}\n", self.well_category).unwrap();
        write!(f, "boundary_categories = {:?}\n", self.boundary_categories).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
