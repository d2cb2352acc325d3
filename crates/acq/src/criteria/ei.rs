use crate::criteria::AcquisitionCriterion;
use crate::errors::Result;
use crate::utils::{norm_cdf, norm_pdf};
use ndarray::{Array2, ArrayView2};

use serde::{Deserialize, Serialize};

/// Expected improvement of a prediction `(mean, std)` over `max_val`,
/// `tradeoff` being subtracted from the improvement margin.
///
/// `std` is expected strictly positive.
pub fn ei_value(mean: f64, std: f64, max_val: f64, tradeoff: f64) -> f64 {
    let improvement = mean - max_val - tradeoff;
    let z = improvement / std;
    improvement * norm_cdf(z) + std * norm_pdf(z)
}

/// A structure for Expected Improvement implementation
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpectedImprovement {
    /// Exploration margin subtracted from the improvement
    pub tradeoff: f64,
}

impl ExpectedImprovement {
    /// Constructor given the tradeoff parameter
    pub fn new(tradeoff: f64) -> Self {
        ExpectedImprovement { tradeoff }
    }
}

impl AcquisitionCriterion for ExpectedImprovement {
    fn name(&self) -> &'static str {
        "EI"
    }

    /// Compute EI of the prediction with regards to the current maximum `y_max`
    fn value(&self, mean: f64, std: f64, y_max: f64) -> f64 {
        ei_value(mean, std, y_max, self.tradeoff)
    }
}

/// Expected Improvement criterion with no tradeoff
pub const EI: ExpectedImprovement = ExpectedImprovement { tradeoff: 0. };

/// Computes expected improvement scores over `max_val` given `(n, m)` means
/// and standard deviations as a `(n, 1)` column or a `(n, m)` matrix.
pub fn expected_improvement(
    mean: &ArrayView2<f64>,
    std: &ArrayView2<f64>,
    max_val: f64,
    tradeoff: f64,
) -> Result<Array2<f64>> {
    ExpectedImprovement::new(tradeoff).values(mean, std, max_val)
}
