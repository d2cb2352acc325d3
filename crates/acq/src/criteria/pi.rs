use crate::criteria::AcquisitionCriterion;
use crate::errors::Result;
use crate::utils::norm_cdf;
use ndarray::{Array2, ArrayView2};

use serde::{Deserialize, Serialize};

/// Probability of improvement of a prediction `(mean, std)` over `max_val`,
/// `tradeoff` being subtracted from the improvement margin.
///
/// `std` is expected strictly positive.
pub fn pi_value(mean: f64, std: f64, max_val: f64, tradeoff: f64) -> f64 {
    norm_cdf((mean - max_val - tradeoff) / std)
}

/// A structure for Probability of Improvement implementation
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityOfImprovement {
    /// Exploration margin subtracted from the improvement
    pub tradeoff: f64,
}

impl ProbabilityOfImprovement {
    /// Constructor given the tradeoff parameter
    pub fn new(tradeoff: f64) -> Self {
        ProbabilityOfImprovement { tradeoff }
    }
}

impl AcquisitionCriterion for ProbabilityOfImprovement {
    fn name(&self) -> &'static str {
        "PI"
    }

    fn value(&self, mean: f64, std: f64, y_max: f64) -> f64 {
        pi_value(mean, std, y_max, self.tradeoff)
    }
}

/// Probability of Improvement criterion with no tradeoff
pub const PI: ProbabilityOfImprovement = ProbabilityOfImprovement { tradeoff: 0. };

/// Computes probability of improvement scores over `max_val` given `(n, m)` means
/// and standard deviations as a `(n, 1)` column or a `(n, m)` matrix.
pub fn probability_of_improvement(
    mean: &ArrayView2<f64>,
    std: &ArrayView2<f64>,
    max_val: f64,
    tradeoff: f64,
) -> Result<Array2<f64>> {
    ProbabilityOfImprovement::new(tradeoff).values(mean, std, max_val)
}
