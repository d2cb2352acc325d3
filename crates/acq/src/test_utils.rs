//! Surrogate doubles for testing purpose
use crate::surrogate::Surrogate;
use crate::utils::EGOBOX_LOG;
use env_logger::{Builder, Env};
use ndarray::{Array1, Array2, ArrayView2, Axis};

/// A surrogate returning tabulated predictions, the ith candidate
/// being given the ith mean and std
pub(crate) struct TabulatedSurrogate {
    pub(crate) mean: Array2<f64>,
    pub(crate) std: Array1<f64>,
    pub(crate) y_max: f64,
}

impl TabulatedSurrogate {
    pub(crate) fn new(mean: Array1<f64>, std: Array1<f64>, y_max: f64) -> Self {
        TabulatedSurrogate {
            mean: mean.insert_axis(Axis(1)),
            std,
            y_max,
        }
    }

    /// Candidates matching tabulated predictions, one row per candidate
    pub(crate) fn candidates(&self, dim: usize) -> Array2<f64> {
        Array2::from_shape_fn((self.mean.nrows(), dim), |(i, j)| (i * dim + j) as f64)
    }
}

impl Surrogate for TabulatedSurrogate {
    fn predict_valstd(&self, x: &ArrayView2<f64>) -> anyhow::Result<(Array2<f64>, Array1<f64>)> {
        anyhow::ensure!(
            x.nrows() == self.mean.nrows(),
            "expected {} candidates, got {}",
            self.mean.nrows(),
            x.nrows()
        );
        Ok((self.mean.clone(), self.std.clone()))
    }

    fn y_max(&self) -> f64 {
        self.y_max
    }
}

/// Error raised by an unfitted surrogate
#[derive(Debug, thiserror::Error)]
#[error("surrogate not fitted")]
pub(crate) struct NotFittedError;

/// A surrogate which has not been trained yet
pub(crate) struct UnfittedSurrogate;

impl Surrogate for UnfittedSurrogate {
    fn predict_valstd(&self, _x: &ArrayView2<f64>) -> anyhow::Result<(Array2<f64>, Array1<f64>)> {
        Err(NotFittedError.into())
    }

    fn y_max(&self) -> f64 {
        f64::NEG_INFINITY
    }
}

/// Initialize logging of tests, level being set with EGOBOX_LOG env var
pub(crate) fn init_log() {
    let env = Env::new().filter_or(EGOBOX_LOG, "info");
    let mut builder = Builder::from_env(env);
    let builder = builder.is_test(true);
    builder.try_init().ok();
}
