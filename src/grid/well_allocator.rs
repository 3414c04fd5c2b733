use super::{locate, Grid};
use crate::base::Schematization;
use crate::StrError;
use ndarray::Array3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the distribution of the discharge of one well over the cells of its screen
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WellAllocation {
    /// Name of the well zone
    pub name: String,

    /// Total discharge (negative for extraction)
    pub discharge: f64,

    /// Occupied cells as (layer, row, column)
    pub cells: Vec<(usize, usize, usize)>,

    /// Cumulative transmissivity Σ(hk × layer thickness) over the occupied cells
    pub transmissivity: f64,

    /// Solver input: (layer, row, column, discharge) for each occupied cell
    pub stress_period_data: Vec<(usize, usize, usize, f64)>,
}

impl WellAllocation {
    /// Returns the sum of the per-cell discharges
    pub fn allocated(&self) -> f64 {
        self.stress_period_data.iter().map(|(_, _, _, q)| q).sum()
    }
}

/// Distributes the discharge of each well proportionally to the local transmissivity
///
/// # Input
///
/// * `grid` -- the discretization
/// * `schematization` -- the zones
/// * `category` -- the well category
/// * `discharge_key` -- name of the attribute holding the total discharge
/// * `hk` -- the (already corrected) horizontal conductivity
///
/// # Notes
///
/// 1. Zones without the discharge attribute are skipped (e.g., fixed-head wells)
/// 2. A well not occupying any cell is a configuration error
/// 3. The cumulative transmissivity must be positive and finite
pub fn allocate_wells(
    grid: &Grid,
    schematization: &Schematization,
    category: &str,
    discharge_key: &str,
    hk: &Array3<f64>,
) -> Result<Vec<WellAllocation>, StrError> {
    if hk.dim() != grid.shape() {
        return Err("grid shape does not match the discretization");
    }
    let mut wells = Vec::new();
    for (_, name, zone) in schematization.zones(&[category])? {
        let discharge = match zone.number(discharge_key) {
            Some(q) => q,
            None => {
                log::debug!("well {} has no {}; skipped", name, discharge_key);
                continue;
            }
        };
        let ranges = match locate(grid, zone) {
            Some(r) => r,
            None => {
                log::error!("well {} does not occupy any grid cell", name);
                return Err("well does not occupy any grid cell");
            }
        };
        let cells = ranges.cells();
        let local: Vec<f64> = cells
            .iter()
            .map(|(k, i, j)| hk[[*k, *i, *j]] * grid.layers.widths[*k])
            .collect();
        let transmissivity: f64 = local.iter().sum();
        if !transmissivity.is_finite() || transmissivity <= 0.0 {
            log::error!("well {}: transmissivity = {:?}", name, transmissivity);
            return Err("well transmissivity must be finite and > 0.0");
        }
        let stress_period_data = cells
            .iter()
            .zip(&local)
            .map(|((k, i, j), t)| (*k, *i, *j, discharge * t / transmissivity))
            .collect();
        log::info!("well {}: Q = {:?} over {} cells", name, discharge, cells.len());
        wells.push(WellAllocation {
            name: name.to_string(),
            discharge,
            cells,
            transmissivity,
            stress_period_data,
        });
    }
    Ok(wells)
}

impl fmt::Display for WellAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Q = {:?}, T = {:?}\n", self.name, self.discharge, self.transmissivity).unwrap();
        for (k, i, j, q) in &self.stress_period_data {
            write!(f, "    ({}, {}, {}) : {:?}\n", k, i, j, q).unwrap();
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
