use crate::base::{Axis, Schematization, Zone, MAX_CELLS_PER_ZONE};
use crate::StrError;
use plotpy::linspace;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};

/// Holds the cell boundaries, widths, and centers along one axis
///
/// The boundaries are strictly monotonic: ascending for the radial and transverse
/// axes and descending (from the top) for the vertical axis.
///
/// ```text
///  boundaries:  b0      b1          b2    b3
///               |-------|-----------|-----|
///  widths:         w0        w1       w2
///  centers:        c0        c1       c2
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AxisDiscretization {
    /// The axis
    pub axis: Axis,

    /// Cell edges (ncell + 1)
    pub boundaries: Vector,

    /// Cell widths (ncell); always positive
    pub widths: Vector,

    /// Cell centers (ncell)
    pub centers: Vector,

    /// Zone edges where the resolution may change (sorted like the boundaries)
    pub refinement_bounds: Vec<f64>,
}

impl AxisDiscretization {
    /// Merges the subdivisions of all zones into a single set of cell boundaries
    ///
    /// # Input
    ///
    /// * `schematization` -- the zones
    /// * `categories` -- the categories to scan, in order
    /// * `axis` -- which axis to discretize (defines the attribute names and the sort direction)
    /// * `res_max` -- default maximum cell size for zones without count or resolution
    ///
    /// # Subdivisions
    ///
    /// The number of cells `n` of a zone in `[min, max]` is:
    ///
    /// 1. the explicit count (`ncols`, `nrows`, `nlayers`), if given; otherwise
    /// 2. `ceil((max - min) / res)` with the zone resolution (`res_hor`, `res_vert`), if given; otherwise
    /// 3. `ceil((max - min) / res_max)` if `res_max` is given; otherwise
    /// 4. one
    ///
    /// Zones without both bounds along the axis are skipped. A zone may contribute at
    /// most [MAX_CELLS_PER_ZONE] cells.
    pub fn new(
        schematization: &Schematization,
        categories: &[&str],
        axis: Axis,
        res_max: Option<f64>,
    ) -> Result<Self, StrError> {
        if let Some(res) = res_max {
            if res <= 0.0 {
                return Err("default maximum resolution must be > 0.0");
            }
        }
        let mut pool = Vec::new();
        let mut edges = Vec::new();
        for (category, name, zone) in schematization.zones(categories)? {
            let (min, max) = match zone.bounds(axis) {
                (Some(min), Some(max)) => (min, max),
                _ => {
                    log::debug!("{}/{}: no {:?} bounds; zone skipped", category, name, axis);
                    continue;
                }
            };
            if max <= min {
                log::error!("{}/{}: invalid {:?} bounds [{}, {}]", category, name, axis, min, max);
                return Err("axis bounds must satisfy max > min");
            }
            let n = subdivisions(zone, axis, min, max, res_max)?;
            pool.extend(linspace(min, max, n + 1));
            edges.push(min);
            edges.push(max);
        }
        let boundaries = merge(axis, pool);
        if boundaries.len() < 2 {
            log::error!("no zone in {:?} defines the {:?} extent of the model", categories, axis);
            return Err("at least two distinct boundaries are required along each axis");
        }
        let refinement_bounds = merge(axis, edges);
        let mut discretization = AxisDiscretization::from_boundaries(axis, &boundaries)?;
        discretization.refinement_bounds = refinement_bounds;
        Ok(discretization)
    }

    /// Allocates a new instance from a sequence of cell boundaries
    ///
    /// The boundaries must be strictly monotonic in the direction of the axis.
    pub fn from_boundaries(axis: Axis, boundaries: &[f64]) -> Result<Self, StrError> {
        let nb = boundaries.len();
        if nb < 2 {
            return Err("at least two distinct boundaries are required along each axis");
        }
        let sign = if axis.ascending() { 1.0 } else { -1.0 };
        for i in 1..nb {
            if sign * (boundaries[i] - boundaries[i - 1]) <= 0.0 {
                return Err("boundaries must be strictly monotonic along the axis");
            }
        }

        // widths
        let ncell = nb - 1;
        let mut widths = Vector::new(ncell);
        for i in 0..ncell {
            widths[i] = axis.round(f64::abs(boundaries[i + 1] - boundaries[i]));
        }

        // centers: the distance between two consecutive centers is the mean of the two widths
        let mut centers = Vector::new(ncell);
        centers[0] = boundaries[0] + sign * 0.5 * widths[0];
        for i in 1..ncell {
            centers[i] = centers[i - 1] + sign * 0.5 * (widths[i - 1] + widths[i]);
        }

        Ok(AxisDiscretization {
            axis,
            boundaries: Vector::from(&boundaries.to_vec()),
            widths,
            centers,
            refinement_bounds: vec![boundaries[0], boundaries[nb - 1]],
        })
    }

    /// Returns the number of cells
    pub fn n_cell(&self) -> usize {
        self.widths.dim()
    }

    /// Returns the first boundary (model top for the vertical axis)
    pub fn top(&self) -> f64 {
        self.boundaries[0]
    }

    /// Returns all boundaries after the first (layer bottoms for the vertical axis)
    pub fn bottoms(&self) -> Vec<f64> {
        self.boundaries.as_data()[1..].to_vec()
    }

    /// Returns the (min, max) coordinates spanned by the cells
    pub fn extent(&self) -> (f64, f64) {
        let first = self.boundaries[0];
        let last = self.boundaries[self.boundaries.dim() - 1];
        (f64::min(first, last), f64::max(first, last))
    }
}

/// Returns the number of cells a zone contributes in [min, max]
fn subdivisions(zone: &Zone, axis: Axis, min: f64, max: f64, res_max: Option<f64>) -> Result<usize, StrError> {
    if let Some(count) = zone.count(axis) {
        if count < 1 {
            return Err("refinement count must be ≥ 1");
        }
        if count as u64 > MAX_CELLS_PER_ZONE as u64 {
            return Err("too many cells along an axis");
        }
        return Ok(count as usize);
    }
    let resolution = match zone.resolution(axis) {
        Some(res) => {
            if res <= 0.0 {
                return Err("resolution must be > 0.0");
            }
            res
        }
        None => match res_max {
            Some(res) => res,
            None => return Ok(1),
        },
    };
    let n = f64::ceil((max - min) / resolution);
    if !(n <= MAX_CELLS_PER_ZONE as f64) {
        return Err("too many cells along an axis");
    }
    Ok(usize::max(1, n as usize))
}

/// Rounds, sorts, and removes duplicates according to the axis
fn merge(axis: Axis, mut values: Vec<f64>) -> Vec<f64> {
    for v in values.iter_mut() {
        *v = axis.round(*v);
    }
    if axis.ascending() {
        values.sort_by(|a, b| a.total_cmp(b));
    } else {
        values.sort_by(|a, b| b.total_cmp(a));
    }
    values.dedup();
    values
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
