use crate::StrError;
use ndarray::{Array3, Axis};

/// Converts a per-unit-angle property into its axisymmetric flow equivalent
///
/// Each column `j` is multiplied by `angle × xmid[j]`, where `xmid` holds the radial
/// cell centers. Use `angle = 2π` for the full circle.
pub fn correct_axisymmetric(values: &mut Array3<f64>, xmid: &[f64], angle: f64) -> Result<(), StrError> {
    if values.dim().2 != xmid.len() {
        return Err("number of columns must equal the number of radial cell centers");
    }
    for (j, mut column) in values.axis_iter_mut(Axis(2)).enumerate() {
        let factor = angle * xmid[j];
        column.mapv_inplace(|v| v * factor);
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::correct_axisymmetric;
    use ndarray::Array3;
    use russell_lab::approx_eq;
    use russell_lab::math::PI;

    #[test]
    fn correct_axisymmetric_works() {
        let mut hk = Array3::from_elem((2, 2, 3), 5.0);
        let xmid = &[0.5, 2.0, 6.0];
        correct_axisymmetric(&mut hk, xmid, 2.0 * PI).unwrap();
        approx_eq(hk[[0, 0, 1]], 62.83185307179586, 1e-13);
        approx_eq(hk[[1, 1, 1]], 62.83185307179586, 1e-13);
        approx_eq(hk[[0, 0, 0]], 5.0 * PI, 1e-13);
        approx_eq(hk[[1, 0, 2]], 60.0 * PI, 1e-13);
    }

    #[test]
    fn correct_axisymmetric_keeps_zeros_and_sentinels() {
        let mut values = Array3::zeros((1, 2, 2));
        values[[0, 0, 1]] = f64::NAN;
        correct_axisymmetric(&mut values, &[1.0, 3.0], 2.0 * PI).unwrap();
        assert_eq!(values[[0, 0, 0]], 0.0);
        assert!(values[[0, 0, 1]].is_nan());
        assert_eq!(values[[0, 1, 1]], 0.0);
    }

    #[test]
    fn correct_axisymmetric_captures_errors() {
        let mut values = Array3::zeros((1, 2, 2));
        assert_eq!(
            correct_axisymmetric(&mut values, &[1.0], 2.0 * PI).err(),
            Some("number of columns must equal the number of radial cell centers")
        );
    }
}
