use super::AxisDiscretization;
use crate::base::{as_strs, Axis, Config, ModelType, Schematization};
use crate::StrError;
use ndarray::Array3;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};

/// Holds the structured grid: layers × rows × columns
///
/// Grids of parameter values are indexed as `[layer, row, column]`.
///
/// With the 2-row convention (axisymmetric and 2D models), there are exactly two
/// rows of unit width. Only the first row is physically meaningful; the second
/// allows the particle tracker to work across the symmetry axis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grid {
    /// Geometry of the flow model
    pub model_type: ModelType,

    /// Vertical discretization (descending from the top)
    pub layers: AxisDiscretization,

    /// Transverse discretization (or the two unit-width rows)
    pub rows: AxisDiscretization,

    /// Radial discretization
    pub columns: AxisDiscretization,
}

impl Grid {
    /// Builds the grid from the zones of `config.categories`
    pub fn new(schematization: &Schematization, config: &Config) -> Result<Self, StrError> {
        let categories = as_strs(&config.categories);
        let layers = AxisDiscretization::new(schematization, &categories, Axis::Vertical, config.res_vert_max)?;
        let columns = AxisDiscretization::new(schematization, &categories, Axis::Radial, config.res_hor_max)?;
        let rows = if config.model_type.two_rows() {
            AxisDiscretization::from_boundaries(Axis::Transverse, &[0.0, 1.0, 2.0])?
        } else {
            AxisDiscretization::new(schematization, &categories, Axis::Transverse, config.res_hor_max)?
        };
        let grid = Grid {
            model_type: config.model_type,
            layers,
            rows,
            columns,
        };
        let (nlay, nrow, ncol) = grid.shape();
        log::info!("grid ({:?}): {} layers × {} rows × {} columns", grid.model_type, nlay, nrow, ncol);
        Ok(grid)
    }

    /// Returns (nlay, nrow, ncol)
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.layers.n_cell(), self.rows.n_cell(), self.columns.n_cell())
    }

    /// Returns the total number of cells
    pub fn n_cell(&self) -> usize {
        let (nlay, nrow, ncol) = self.shape();
        nlay * nrow * ncol
    }

    /// Allocates a grid of values filled with `value`
    pub fn alloc<T: Clone>(&self, value: T) -> Array3<T> {
        Array3::from_elem(self.shape(), value)
    }

    /// Allocates a grid of numbers filled with the "uninitialized" sentinel (NaN)
    pub fn empty(&self) -> Array3<f64> {
        self.alloc(f64::NAN)
    }

    /// Returns the boundaries along (layers, rows, columns)
    pub fn boundaries(&self) -> (&Vector, &Vector, &Vector) {
        (&self.layers.boundaries, &self.rows.boundaries, &self.columns.boundaries)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Grid;
    use crate::base::{Config, ModelType, Samples, Schematization, Zone, GEO_PARAMETERS};
    use crate::StrError;

    #[test]
    fn new_works_axisymmetric() -> Result<(), StrError> {
        let sch = Samples::phreatic();
        let grid = Grid::new(&sch, &Config::new())?;
        assert_eq!(grid.shape(), (8, 2, 15));
        assert_eq!(grid.n_cell(), 240);
        let (layers, rows, columns) = grid.boundaries();
        assert_eq!(
            layers.as_data(),
            &[0.0, -1.0, -2.0, -3.0, -4.0, -5.0, -10.0, -15.0, -20.0]
        );
        assert_eq!(rows.as_data(), &[0.0, 1.0, 2.0]);
        assert_eq!(
            columns.as_data(),
            &[0.0, 0.25, 0.5, 0.75, 1.0, 10.0, 19.0, 28.0, 37.0, 46.0, 55.0, 64.0, 73.0, 82.0, 91.0, 100.0]
        );
        assert_eq!(grid.rows.widths.as_data(), &[1.0, 1.0]);
        assert_eq!(grid.layers.top(), 0.0);
        assert_eq!(grid.layers.bottoms().len(), 8);
        let empty = grid.empty();
        assert_eq!(empty.dim(), (8, 2, 15));
        assert!(empty.iter().all(|v| v.is_nan()));
        Ok(())
    }

    #[test]
    fn new_works_3d() -> Result<(), StrError> {
        let sch = Samples::three_dim_block();
        let mut config = Config::new();
        config.set_model_type(ModelType::ThreeDim)?;
        let grid = Grid::new(&sch, &config)?;
        assert_eq!(grid.shape(), (2, 3, 5));
        assert_eq!(grid.rows.boundaries.as_data(), &[0.0, 2.0, 4.0, 6.0]);
        assert_eq!(grid.rows.centers.as_data(), &[1.0, 3.0, 5.0]);
        let flags = grid.alloc(1_i32);
        assert_eq!(flags.sum(), 30);
        Ok(())
    }

    #[test]
    fn new_captures_errors() -> Result<(), StrError> {
        let sch = Samples::two_radial_zones();
        let mut config = Config::new();
        config.set_model_type(ModelType::ThreeDim)?.set_categories(&[GEO_PARAMETERS])?;
        assert_eq!(
            Grid::new(&sch, &config).err(),
            Some("at least two distinct boundaries are required along each axis")
        );
        let mut zone = Zone::new();
        zone.set_radial(0.0, 1.0)?.set_vertical(0.0, -1.0)?;
        let mut sch = Schematization::new();
        sch.add(GEO_PARAMETERS, "only", zone)?;
        let config = Config::new(); // requires all four categories
        assert_eq!(
            Grid::new(&sch, &config).err(),
            Some("required category is missing from schematization")
        );
        Ok(())
    }
}
