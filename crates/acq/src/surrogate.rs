use ndarray::{Array1, Array2, ArrayView2};

/// A trait for a fitted surrogate model as seen by acquisition criteria:
/// a prediction with uncertainty and the best value observed so far.
///
/// Any regression backend can be used to drive candidates selection
/// as long as it implements this trait.
pub trait Surrogate: Sync + Send {
    /// Predict both output values and standard deviations at n points given as (n, xdim) matrix.
    ///
    /// Returns `(mean, std)` where `mean` is a (n, m) matrix, m being the number of outputs,
    /// and `std` a (n,) vector. Standard deviations (not variances) are expected.
    fn predict_valstd(&self, x: &ArrayView2<f64>) -> anyhow::Result<(Array2<f64>, Array1<f64>)>;

    /// Best observed value (ie the incumbent) the improvement is measured against
    fn y_max(&self) -> f64;
}

impl<T: Surrogate + ?Sized> Surrogate for &T {
    fn predict_valstd(&self, x: &ArrayView2<f64>) -> anyhow::Result<(Array2<f64>, Array1<f64>)> {
        (**self).predict_valstd(x)
    }

    fn y_max(&self) -> f64 {
        (**self).y_max()
    }
}

impl<T: Surrogate + ?Sized> Surrogate for Box<T> {
    fn predict_valstd(&self, x: &ArrayView2<f64>) -> anyhow::Result<(Array2<f64>, Array1<f64>)> {
        (**self).predict_valstd(x)
    }

    fn y_max(&self) -> f64 {
        (**self).y_max()
    }
}
