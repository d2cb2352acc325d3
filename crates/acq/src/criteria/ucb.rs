use crate::criteria::AcquisitionCriterion;
use crate::errors::Result;
use ndarray::{Array2, ArrayView2};

use serde::{Deserialize, Serialize};

/// Upper confidence bound `mean + beta * std`
pub fn ucb_value(mean: f64, std: f64, beta: f64) -> f64 {
    mean + beta * std
}

/// A structure for Upper Confidence Bound implementation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpperConfidenceBound {
    /// Weight of the standard deviation, 0. meaning pure exploitation
    pub beta: f64,
}

impl Default for UpperConfidenceBound {
    fn default() -> Self {
        UCB
    }
}

impl UpperConfidenceBound {
    /// Constructor given the beta parameter
    pub fn new(beta: f64) -> Self {
        UpperConfidenceBound { beta }
    }
}

impl AcquisitionCriterion for UpperConfidenceBound {
    fn name(&self) -> &'static str {
        "UCB"
    }

    fn value(&self, mean: f64, std: f64, _y_max: f64) -> f64 {
        ucb_value(mean, std, self.beta)
    }

    fn requires_positive_std(&self) -> bool {
        false
    }

    fn requires_incumbent(&self) -> bool {
        false
    }
}

/// Upper Confidence Bound criterion with unit beta
pub const UCB: UpperConfidenceBound = UpperConfidenceBound { beta: 1. };

/// Computes upper confidence bound scores given `(n, m)` means
/// and standard deviations as a `(n, 1)` column or a `(n, m)` matrix.
pub fn upper_confidence_bound(
    mean: &ArrayView2<f64>,
    std: &ArrayView2<f64>,
    beta: f64,
) -> Result<Array2<f64>> {
    // incumbent is not used by UCB
    UpperConfidenceBound::new(beta).values(mean, std, f64::NAN)
}
