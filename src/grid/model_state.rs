use super::{allocate_wells, correct_axisymmetric, fill_parameter, fill_zone_names, set_boundary_conditions};
use super::{CellValue, FillReport, Grid, WellAllocation};
use crate::base::{as_strs, Config, ModelExtent, Schematization};
use crate::base::{HK, POROSITY, RECHARGE, STORAGE, VANI};
use crate::StrError;
use ndarray::{Array2, Array3, Axis};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Describes a problem found while filling the parameter grids
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FillIssue {
    /// The parameter could not be filled at all
    Failed { parameter: String, message: String },

    /// A zone defining the parameter is not resolved by the grid
    Unresolved { parameter: String, zone: String },

    /// Some physical cells were not painted by any zone
    Unfilled { parameter: String, count: usize },
}

/// Collects the parameter-fill issues of a build
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BuildReport {
    pub issues: Vec<FillIssue>,
}

impl BuildReport {
    /// Allocates an empty report
    pub fn new() -> Self {
        BuildReport { issues: Vec::new() }
    }

    /// Indicates that all parameters were filled without issues
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Records the outcome of a fill and returns the grid (or the fallback if the fill failed)
    pub fn collect<T>(
        &mut self,
        parameter: &str,
        result: Result<(Array3<T>, FillReport), StrError>,
        fallback: Array3<T>,
    ) -> Array3<T>
    where
        T: CellValue,
    {
        match result {
            Ok((values, report)) => {
                for zone in report.unresolved {
                    self.issues.push(FillIssue::Unresolved {
                        parameter: report.parameter.clone(),
                        zone,
                    });
                }
                if report.unfilled > 0 {
                    self.issues.push(FillIssue::Unfilled {
                        parameter: report.parameter,
                        count: report.unfilled,
                    });
                }
                values
            }
            Err(message) => {
                self.issues.push(FillIssue::Failed {
                    parameter: parameter.to_string(),
                    message: message.to_string(),
                });
                fallback
            }
        }
    }
}

/// Holds the grid and every parameter field handed to the flow solver
///
/// All grids are indexed as `[layer, row, column]` and owned by this struct.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelState {
    /// Overall dimensions of the aquifer system
    pub extent: ModelExtent,

    /// The discretization
    pub grid: Grid,

    /// Horizontal hydraulic conductivity (corrected if axisymmetric)
    #[serde(with = "crate::util::unfilled_cells")]
    pub hk: Array3<f64>,

    /// Vertical anisotropy ratio hk/vk
    #[serde(with = "crate::util::unfilled_cells")]
    pub vani: Array3<f64>,

    /// Vertical hydraulic conductivity = hk / vani
    #[serde(with = "crate::util::unfilled_cells")]
    pub vk: Array3<f64>,

    /// Effective porosity
    #[serde(with = "crate::util::unfilled_cells")]
    pub porosity: Array3<f64>,

    /// Specific storage (corrected if axisymmetric)
    #[serde(with = "crate::util::unfilled_cells")]
    pub storage: Array3<f64>,

    /// Recharge (corrected if axisymmetric)
    #[serde(with = "crate::util::unfilled_cells")]
    pub recharge: Array3<f64>,

    /// Cell flags
    pub ibound: Array3<i32>,

    /// Starting heads
    #[serde(with = "crate::util::unfilled_cells")]
    pub strt: Array3<f64>,

    /// Name of the geological or well zone of each cell
    pub material: Array3<String>,

    /// Well discharges distributed over the cells
    pub wells: Vec<WellAllocation>,
}

impl ModelState {
    /// Builds the grid and all parameter fields
    ///
    /// The stages run in this order:
    ///
    /// 1. discretization
    /// 2. parameter filling (hk, vani, porosity, storage, recharge, material)
    /// 3. axisymmetric correction of `config.corrected`
    /// 4. vertical conductivity
    /// 5. boundary conditions
    /// 6. well allocation
    ///
    /// Discretization, boundary, and well errors abort the build. Parameter-fill
    /// problems do not; they are returned in the report.
    pub fn build(schematization: &Schematization, config: &Config) -> Result<(Self, BuildReport), StrError> {
        let geo = as_strs(&config.geo_categories);
        let recharge_categories = as_strs(&config.recharge_categories);
        let boundary_categories = as_strs(&config.boundary_categories);
        for category in geo
            .iter()
            .chain(recharge_categories.iter())
            .chain(boundary_categories.iter())
            .chain([config.well_category.as_str()].iter())
        {
            schematization.category(category)?;
        }

        // grid
        let extent = ModelExtent::new(schematization, &geo)?;
        let grid = Grid::new(schematization, config)?;

        // parameters
        let mut report = BuildReport::new();
        let fill = |parameter: &str, categories: &[&str], initial: Option<Array3<f64>>| {
            fill_parameter(&grid, schematization, categories, parameter, initial)
        };
        let mut hk = report.collect(HK, fill(HK, &geo, None), grid.empty());
        let vani_init = grid.alloc(config.vani_default);
        let vani = report.collect(VANI, fill(VANI, &geo, Some(vani_init.clone())), vani_init);
        let porosity = report.collect(POROSITY, fill(POROSITY, &geo, None), grid.empty());
        let storage_init = grid.alloc(config.storage_default);
        let mut storage = report.collect(STORAGE, fill(STORAGE, &geo, Some(storage_init.clone())), storage_init);
        let recharge_init = grid.alloc(0.0);
        let mut recharge = report.collect(
            RECHARGE,
            fill(RECHARGE, &recharge_categories, Some(recharge_init.clone())),
            recharge_init,
        );
        let mut material_categories = geo.clone();
        if !material_categories.contains(&config.well_category.as_str()) {
            material_categories.push(config.well_category.as_str());
        }
        let names = fill_zone_names(&grid, schematization, &material_categories);
        let material = report.collect("material", names, grid.alloc(String::new()));

        // correction
        let xmid = grid.columns.centers.as_data();
        for (parameter, values) in [(HK, &mut hk), (STORAGE, &mut storage), (RECHARGE, &mut recharge)] {
            if config.is_corrected(parameter) {
                correct_axisymmetric(values, xmid, config.angle)?;
            }
        }
        let vk = &hk / &vani;

        // boundary conditions and wells
        let bcs = set_boundary_conditions(&grid, schematization, &boundary_categories, config.initial_head)?;
        let wells = allocate_wells(&grid, schematization, &config.well_category, &config.discharge_key, &hk)?;

        for issue in &report.issues {
            log::warn!("{}", issue);
        }
        let state = ModelState {
            extent,
            grid,
            hk,
            vani,
            vk,
            porosity,
            storage,
            recharge,
            ibound: bcs.ibound,
            strt: bcs.strt,
            material,
            wells,
        };
        Ok((state, report))
    }

    /// Returns the recharge of the top layer (the solver's 2-D recharge array)
    pub fn recharge_top(&self) -> Array2<f64> {
        self.recharge.index_axis(Axis(0), 0).to_owned()
    }

    /// Fills an additional parameter grid from the geological zones (e.g., a redox class)
    pub fn fill_extra<T>(
        &self,
        schematization: &Schematization,
        config: &Config,
        parameter: &str,
    ) -> Result<(Array3<T>, FillReport), StrError>
    where
        T: CellValue,
    {
        fill_parameter(&self.grid, schematization, &as_strs(&config.geo_categories), parameter, None)
    }
}

impl fmt::Display for FillIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillIssue::Failed { parameter, message } => write!(f, "{}: {}", parameter, message),
            FillIssue::Unresolved { parameter, zone } => {
                write!(f, "{}: zone {} is not resolved by the grid", parameter, zone)
            }
            FillIssue::Unfilled { parameter, count } => write!(f, "{}: {} cells were not filled", parameter, count),
        }
    }
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Build report\n").unwrap();
        write!(f, "============\n").unwrap();
        if self.issues.is_empty() {
            write!(f, "no issues\n").unwrap();
        }
        for issue in &self.issues {
            write!(f, "{}\n", issue).unwrap();
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{BuildReport, FillIssue, ModelState};
    use crate::base::{Config, ModelType, Samples, Schematization, Zone};
    use crate::base::{GEO_PARAMETERS, IBOUND_CONSTANT_HEAD, RECHARGE_PARAMETERS, WELL_PARAMETERS};
    use crate::StrError;
    use russell_lab::approx_eq;
    use russell_lab::math::PI;

    #[test]
    fn build_works_axisymmetric() -> Result<(), StrError> {
        let sch = Samples::phreatic();
        let (state, report) = ModelState::build(&sch, &Config::new())?;
        assert!(report.is_clean());
        assert_eq!(state.grid.shape(), (8, 2, 15));
        assert_eq!(state.extent.radius, 100.0);

        // corrected conductivity: hk × 2π × xmid
        let xmid = state.grid.columns.centers.as_data();
        approx_eq(state.hk[[0, 0, 0]], 1.0 * 2.0 * PI * xmid[0], 1e-13);
        approx_eq(state.hk[[7, 0, 5]], 10.0 * 2.0 * PI * xmid[5], 1e-12);
        assert_eq!(state.hk[[7, 1, 5]], 0.0);

        // the dummy row holds finite values
        assert!(state.vani.iter().all(|v| v.is_finite() && *v > 0.0));
        assert!(state.vk.iter().all(|v| v.is_finite() && *v >= 0.0));
        assert!(state.vk.slice(ndarray::s![.., 0, ..]).iter().all(|v| *v > 0.0));
        assert!(state.storage.iter().all(|v| v.is_finite() && *v > 0.0));
        assert_eq!(state.vani[[7, 1, 5]], 1.0);
        assert_eq!(state.vk[[7, 1, 5]], 0.0);

        // vertical conductivity
        approx_eq(state.vk[[0, 0, 3]], state.hk[[0, 0, 3]] / 10.0, 1e-14);
        approx_eq(state.vk[[6, 0, 3]], state.hk[[6, 0, 3]], 1e-14);

        // porosity and vani are not corrected
        assert_eq!(state.porosity[[0, 0, 14]], 0.3);
        assert_eq!(state.porosity[[5, 0, 14]], 0.25);
        assert_eq!(state.vani[[0, 0, 0]], 10.0);
        assert_eq!(state.vani[[5, 0, 0]], 1.0);

        // storage and recharge
        approx_eq(state.storage[[3, 0, 1]], 1e-5 * 2.0 * PI * xmid[1], 1e-18);
        let top = state.recharge_top();
        assert_eq!(top.dim(), (2, 15));
        approx_eq(xmid[14], 95.5, 1e-12);
        approx_eq(top[[0, 14]], 0.001 * 2.0 * PI * xmid[14], 1e-15);
        assert_eq!(top[[1, 14]], 0.0);

        // boundary conditions
        assert_eq!(state.ibound[[4, 0, 14]], IBOUND_CONSTANT_HEAD);

        // wells
        assert_eq!(state.wells.len(), 1);
        assert_eq!(state.wells[0].cells, &[(6, 0, 0), (7, 0, 0)]);
        approx_eq(state.wells[0].stress_period_data[0].3, -50.0, 1e-12);
        approx_eq(state.wells[0].allocated(), -100.0, 1e-12);

        // material and extra parameters
        assert_eq!(state.material[[0, 0, 0]], "shallow_aquifer");
        assert_eq!(state.material[[6, 0, 1]], "target_aquifer");
        assert_eq!(state.material[[6, 0, 0]], "well1");
        let (redox, _) = state.fill_extra::<String>(&sch, &Config::new(), "redox")?;
        assert_eq!(redox[[6, 0, 0]], "anoxic");
        Ok(())
    }

    #[test]
    fn build_works_without_correction() -> Result<(), StrError> {
        let sch = Samples::phreatic();
        let mut config = Config::new();
        config.set_model_type(ModelType::TwoDim)?;
        let (state, _) = ModelState::build(&sch, &config)?;
        assert_eq!(state.grid.shape(), (8, 2, 15));
        assert_eq!(state.hk[[0, 0, 0]], 1.0);
        assert_eq!(state.storage[[0, 0, 0]], 1e-5);
        assert_eq!(state.recharge[[0, 0, 7]], 0.001);
        approx_eq(state.wells[0].stress_period_data[1].3, -50.0, 1e-12);
        Ok(())
    }

    #[test]
    fn build_collects_fill_issues() -> Result<(), StrError> {
        let mut sch = Samples::phreatic();
        let mut wrong = Zone::new();
        wrong.set_radial(0.0, 1.0)?.set_param("porosity", "high")?;
        let mut thin = Zone::new();
        thin.set_radial(0.26, 0.3)?.set_param("recharge", 0.1)?;
        sch.add(GEO_PARAMETERS, "wrong", wrong)?
            .add(RECHARGE_PARAMETERS, "thin", thin)?;
        let mut config = Config::new();
        config.set_categories(&[GEO_PARAMETERS, WELL_PARAMETERS])?;
        let (state, report) = ModelState::build(&sch, &config)?;
        assert_eq!(
            report.issues,
            &[
                FillIssue::Failed {
                    parameter: "porosity".to_string(),
                    message: "parameter value has the wrong type for this grid".to_string(),
                },
                FillIssue::Unresolved {
                    parameter: "recharge".to_string(),
                    zone: "thin".to_string(),
                },
            ]
        );
        assert!(state.porosity.iter().all(|v| v.is_nan()));
        assert_eq!(
            format!("{}", report),
            "Build report\n\
             ============\n\
             porosity: parameter value has the wrong type for this grid\n\
             recharge: zone thin is not resolved by the grid\n"
        );
        Ok(())
    }

    #[test]
    fn build_report_collect_works() {
        let mut report = BuildReport::new();
        assert_eq!(format!("{}", report), "Build report\n============\nno issues\n");
        let values = report.collect::<f64>("hk", Err("stop"), ndarray::Array3::zeros((1, 1, 1)));
        assert_eq!(values.dim(), (1, 1, 1));
        assert_eq!(
            report.issues,
            &[FillIssue::Failed {
                parameter: "hk".to_string(),
                message: "stop".to_string()
            }]
        );
        assert_eq!(
            format!("{}", FillIssue::Unfilled { parameter: "hk".to_string(), count: 3 }),
            "hk: 3 cells were not filled"
        );
    }

    #[test]
    fn build_captures_errors() -> Result<(), StrError> {
        let mut sch = Samples::phreatic();
        let mut deep = Zone::new();
        deep.set_vertical(-30.0, -40.0)?.set_radial(0.0, 0.25)?.set_param("Q", -10.0)?;
        sch.add(WELL_PARAMETERS, "deep", deep)?;
        let mut config = Config::new();
        config.set_categories(&[GEO_PARAMETERS])?;
        assert_eq!(
            ModelState::build(&sch, &config).err(),
            Some("well does not occupy any grid cell")
        );

        let mut sch = Schematization::new();
        let mut zone = Zone::new();
        zone.set_radial(0.0, 1.0)?.set_vertical(0.0, -1.0)?;
        sch.add(GEO_PARAMETERS, "only", zone)?;
        assert_eq!(
            ModelState::build(&sch, &Config::new()).err(),
            Some("required category is missing from schematization")
        );
        Ok(())
    }
}
