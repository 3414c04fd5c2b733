use super::{locate, Grid};
use crate::base::{ParamValue, Schematization, HEAD, IBOUND, IBOUND_ACTIVE, IBOUND_CONSTANT_HEAD};
use crate::StrError;
use ndarray::{s, Array3};

/// Holds the cell flags and the starting heads
pub struct BoundaryConditions {
    /// Flags: active (1), inactive (0), or constant-head (-1)
    pub ibound: Array3<i32>,

    /// Starting heads
    pub strt: Array3<f64>,
}

/// Marks the constant-head and inactive cells
///
/// Every zone of the given categories carrying `head` or `ibound` is processed:
///
/// * `head` without `ibound` -- constant-head cells starting at `head`
/// * `ibound` -- the given flag; `head` (if any) sets the starting head
///
/// Cells never touched are active with the `initial_head`. Zones without
/// either attribute are ignored; a boundary zone not occupying any cell is an error.
pub fn set_boundary_conditions(
    grid: &Grid,
    schematization: &Schematization,
    categories: &[&str],
    initial_head: f64,
) -> Result<BoundaryConditions, StrError> {
    let mut ibound = grid.alloc(IBOUND_ACTIVE);
    let mut strt = grid.alloc(initial_head);
    for (category, name, zone) in schematization.zones(categories)? {
        let head = zone.number(HEAD);
        let flag = match zone.param(IBOUND) {
            Some(ParamValue::Number(v)) => {
                if v.fract() != 0.0 {
                    log::error!("zone {}/{}: ibound = {:?}", category, name, v);
                    return Err("ibound flag must be an integer");
                }
                Some(*v as i32)
            }
            Some(_) => {
                log::error!("zone {}/{}: ibound is not a number", category, name);
                return Err("ibound flag must be an integer");
            }
            None => head.map(|_| IBOUND_CONSTANT_HEAD),
        };
        let flag = match flag {
            Some(f) => f,
            None => continue,
        };
        let r = match locate(grid, zone) {
            Some(r) => r,
            None => {
                log::error!("zone {}/{} does not occupy any grid cell", category, name);
                return Err("boundary zone does not occupy any grid cell");
            }
        };
        ibound
            .slice_mut(s![r.layers.clone(), r.rows.clone(), r.columns.clone()])
            .fill(flag);
        if let Some(h) = head {
            strt.slice_mut(s![r.layers.clone(), r.rows.clone(), r.columns.clone()])
                .fill(h);
        }
        log::debug!("zone {}/{}: ibound = {} over {} cells", category, name, flag, r.len());
    }
    Ok(BoundaryConditions { ibound, strt })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
