use super::{locate, Grid};
use crate::base::{ParamValue, Schematization, Zone};
use crate::StrError;
use ndarray::{s, Array3, Axis};
use serde::{Deserialize, Serialize};

/// Defines the type of values held by a parameter grid
pub trait CellValue: Clone + PartialEq {
    /// Extracts the cell value from a zone parameter (None if the type does not match)
    fn from_param(value: &ParamValue) -> Option<Self>;

    /// Returns the "uninitialized" value
    fn sentinel() -> Self;

    /// Returns the value of the dummy row (2-row convention)
    fn background() -> Self;

    /// Indicates that the cell has not been painted
    fn is_sentinel(&self) -> bool;
}

impl CellValue for f64 {
    fn from_param(value: &ParamValue) -> Option<Self> {
        match value {
            ParamValue::Number(v) => Some(*v),
            _ => None,
        }
    }
    fn sentinel() -> Self {
        f64::NAN
    }
    fn background() -> Self {
        0.0
    }
    fn is_sentinel(&self) -> bool {
        self.is_nan()
    }
}

impl CellValue for String {
    fn from_param(value: &ParamValue) -> Option<Self> {
        match value {
            ParamValue::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
    fn sentinel() -> Self {
        String::new()
    }
    fn background() -> Self {
        String::new()
    }
    fn is_sentinel(&self) -> bool {
        self.is_empty()
    }
}

/// Holds the outcome of filling one parameter grid
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FillReport {
    /// Name of the parameter
    pub parameter: String,

    /// Zones defining the parameter but not spanning a single cell center
    pub unresolved: Vec<String>,

    /// Number of physical cells still holding the sentinel value
    pub unfilled: usize,
}

/// Paints the value of a parameter onto the grid, zone by zone
///
/// # Input
///
/// * `grid` -- the discretization
/// * `schematization` -- the zones
/// * `categories` -- categories to scan, in order
/// * `parameter` -- name of the zone attribute to paint
/// * `initial` -- grid to paint over; a new grid filled with the sentinel value is allocated if None
///
/// # Notes
///
/// 1. Zones are painted in supply order, thus later zones overwrite earlier ones
/// 2. Zones not defining the parameter are ignored
/// 3. Zones not resolved by the grid are reported, not painted
/// 4. With the 2-row convention, the second row is never painted. It keeps the
///    initial value, or holds the background value if `initial` is None
pub fn fill_parameter<T>(
    grid: &Grid,
    schematization: &Schematization,
    categories: &[&str],
    parameter: &str,
    initial: Option<Array3<T>>,
) -> Result<(Array3<T>, FillReport), StrError>
where
    T: CellValue,
{
    let reset_dummy = initial.is_none();
    let mut values = match initial {
        Some(values) => {
            if values.dim() != grid.shape() {
                return Err("grid shape does not match the discretization");
            }
            values
        }
        None => grid.alloc(T::sentinel()),
    };
    let mut unresolved = Vec::new();
    for (category, name, zone) in schematization.zones(categories)? {
        let value = match zone.param(parameter) {
            Some(v) => match T::from_param(v) {
                Some(value) => value,
                None => {
                    log::error!("zone {}/{}: {} = {} has the wrong type", category, name, parameter, v);
                    return Err("parameter value has the wrong type for this grid");
                }
            },
            None => continue,
        };
        paint(grid, &mut values, category, name, zone, value, &mut unresolved);
    }
    let unfilled = finalize(grid, &mut values, reset_dummy);
    Ok((
        values,
        FillReport {
            parameter: parameter.to_string(),
            unresolved,
            unfilled,
        },
    ))
}

/// Paints the name of each zone onto the grid (material grid)
///
/// Only zones carrying a material, i.e., at least one numeric or text parameter, are
/// painted. Refinement-only zones and flag-only zones are skipped. The same override
/// rules as in [fill_parameter()] apply.
pub fn fill_zone_names(
    grid: &Grid,
    schematization: &Schematization,
    categories: &[&str],
) -> Result<(Array3<String>, FillReport), StrError> {
    let mut values = grid.alloc(String::sentinel());
    let mut unresolved = Vec::new();
    for (category, name, zone) in schematization.zones(categories)? {
        let has_material = zone.params.values().any(|v| !matches!(v, ParamValue::Flag(_)));
        if !has_material {
            log::debug!("zone {}/{} carries no material; skipped", category, name);
            continue;
        }
        paint(grid, &mut values, category, name, zone, name.to_string(), &mut unresolved);
    }
    let unfilled = finalize(grid, &mut values, true);
    Ok((
        values,
        FillReport {
            parameter: "material".to_string(),
            unresolved,
            unfilled,
        },
    ))
}

/// Overwrites the cells of one zone
fn paint<T: CellValue>(
    grid: &Grid,
    values: &mut Array3<T>,
    category: &str,
    name: &str,
    zone: &Zone,
    value: T,
    unresolved: &mut Vec<String>,
) {
    match locate(grid, zone) {
        Some(r) => values
            .slice_mut(s![r.layers.clone(), r.rows.clone(), r.columns.clone()])
            .fill(value),
        None => {
            log::warn!("zone {}/{} is not resolved by the grid", category, name);
            unresolved.push(name.to_string());
        }
    }
}

/// Resets the dummy row (if requested) and returns the number of physical cells holding the sentinel
fn finalize<T: CellValue>(grid: &Grid, values: &mut Array3<T>, reset_dummy: bool) -> usize {
    let nrow = if grid.model_type.two_rows() {
        if reset_dummy {
            values.index_axis_mut(Axis(1), 1).fill(T::background());
        }
        1
    } else {
        grid.rows.n_cell()
    };
    values.slice(s![.., ..nrow, ..]).iter().filter(|v| v.is_sentinel()).count()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
