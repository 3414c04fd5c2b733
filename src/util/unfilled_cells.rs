//! Serializes real-valued grids writing unfilled (NaN) cells as `null`
//!
//! Use with `#[serde(with = "crate::util::unfilled_cells")]` on `Array3<f64>` fields.

use ndarray::Array3;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Holds the shape and the row-major data of a grid
#[derive(Serialize, Deserialize)]
struct CellData {
    dim: (usize, usize, usize),
    data: Vec<Option<f64>>,
}

/// Writes a grid with NaN cells as `null`
pub fn serialize<S>(values: &Array3<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let data = values.iter().map(|v| if v.is_nan() { None } else { Some(*v) }).collect();
    CellData {
        dim: values.dim(),
        data,
    }
    .serialize(serializer)
}

/// Reads a grid with `null` cells as NaN
pub fn deserialize<'de, D>(deserializer: D) -> Result<Array3<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let cells = CellData::deserialize(deserializer)?;
    let data = cells.data.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect();
    Array3::from_shape_vec(cells.dim, data).map_err(|_| D::Error::custom("grid data does not match its dimensions"))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
