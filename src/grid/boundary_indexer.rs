use super::Grid;
use crate::base::{Axis, Zone, BOUND_TOLERANCE};
use std::ops::Range;

/// Holds the index ranges `[start, end)` of the cells occupied by a zone
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CellRanges {
    /// Layer indices (vertical axis, from the top)
    pub layers: Range<usize>,

    /// Row indices (transverse axis); always `0..1` with the 2-row convention
    pub rows: Range<usize>,

    /// Column indices (radial axis)
    pub columns: Range<usize>,
}

impl CellRanges {
    /// Returns the number of occupied cells
    pub fn len(&self) -> usize {
        self.layers.len() * self.rows.len() * self.columns.len()
    }

    /// Returns the (layer, row, column) triples in row-major order
    pub fn cells(&self) -> Vec<(usize, usize, usize)> {
        let mut all = Vec::with_capacity(self.len());
        for k in self.layers.clone() {
            for i in self.rows.clone() {
                for j in self.columns.clone() {
                    all.push((k, i, j));
                }
            }
        }
        all
    }
}

/// Returns the range of cells whose centers fall within [min, max]
///
/// A missing bound leaves that side open; thus a zone without bounds spans the whole axis.
/// The centers may be ascending or descending; in both cases the selected cells are contiguous.
///
/// Returns None if no center falls within the bounds (the zone is not resolved by the grid).
pub fn index_range(centers: &[f64], min: Option<f64>, max: Option<f64>) -> Option<Range<usize>> {
    let inside = |c: f64| {
        let above_min = match min {
            Some(m) => c >= m - BOUND_TOLERANCE,
            None => true,
        };
        let below_max = match max {
            Some(m) => c <= m + BOUND_TOLERANCE,
            None => true,
        };
        above_min && below_max
    };
    let start = centers.iter().position(|c| inside(*c))?;
    let count = centers[start..].iter().take_while(|c| inside(**c)).count();
    Some(start..(start + count))
}

/// Locates the cells occupied by a zone
///
/// With the 2-row convention, only the first row is occupied; the second row is a
/// numerical device of the solver and carries no physical values.
///
/// Returns None if the zone does not span a single cell center along some axis.
pub fn locate(grid: &Grid, zone: &Zone) -> Option<CellRanges> {
    let (bot, top) = zone.bounds(Axis::Vertical);
    let layers = index_range(grid.layers.centers.as_data(), bot, top)?;
    let rows = if grid.model_type.two_rows() {
        0..1
    } else {
        let (ymin, ymax) = zone.bounds(Axis::Transverse);
        index_range(grid.rows.centers.as_data(), ymin, ymax)?
    };
    let (rmin, rmax) = zone.bounds(Axis::Radial);
    let columns = index_range(grid.columns.centers.as_data(), rmin, rmax)?;
    Some(CellRanges { layers, rows, columns })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
