use crate::errors::{AcqError, Result};
use ndarray::{ArrayBase, ArrayView2, Axis, Data, Ix1, Ix2};

/// Reshape the `(n,)` standard deviation vector returned by a surrogate
/// into a `(n, 1)` column aligned with the `(n, m)` predicted mean.
///
/// The standard deviation is one value per candidate whatever the number
/// of outputs `m`, hence the column which broadcasts along mean rows.
pub fn std_column<'a>(
    mean: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    std: &'a ArrayBase<impl Data<Elem = f64>, Ix1>,
) -> Result<ArrayView2<'a, f64>> {
    if std.len() != mean.nrows() {
        return Err(AcqError::InvalidShape(format!(
            "std length {} does not match mean rows {}",
            std.len(),
            mean.nrows()
        )));
    }
    Ok(std.view().insert_axis(Axis(1)))
}

/// Broadcast `std`, either a `(n, 1)` column or a `(n, m)` matrix, to the
/// `(n, m)` shape of `mean`.
///
/// Unlike implicit broadcasting rules, row counts must match exactly.
pub fn broadcast_std<'a>(
    mean: &ArrayView2<f64>,
    std: &'a ArrayView2<f64>,
) -> Result<ArrayView2<'a, f64>> {
    let shape_err = || {
        AcqError::InvalidShape(format!(
            "std of shape {:?} cannot be broadcast to mean of shape {:?}",
            std.shape(),
            mean.shape()
        ))
    };
    if std.nrows() != mean.nrows() || (std.ncols() != 1 && std.ncols() != mean.ncols()) {
        return Err(shape_err());
    }
    std.broadcast(mean.raw_dim()).ok_or_else(shape_err)
}

/// Check predicted means are finite values
pub fn check_mean(mean: &ArrayView2<f64>) -> Result<()> {
    if let Some(((i, j), v)) = mean.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(AcqError::InvalidValue(format!(
            "mean[{i}, {j}] = {v} is not finite"
        )));
    }
    Ok(())
}

/// Check predicted standard deviations are finite and non negative values.
/// When `strictly_positive` is set, zero is rejected as well.
pub fn check_std(std: &ArrayView2<f64>, strictly_positive: bool) -> Result<()> {
    for ((i, _), &v) in std.indexed_iter() {
        if !v.is_finite() {
            return Err(AcqError::InvalidValue(format!(
                "std = {v} for candidate {i} is not finite"
            )));
        }
        if v < 0. {
            return Err(AcqError::InvalidValue(format!(
                "std = {v} for candidate {i} is negative"
            )));
        }
        if strictly_positive && v == 0. {
            return Err(AcqError::NonPositiveStd { index: i, value: v });
        }
    }
    Ok(())
}
