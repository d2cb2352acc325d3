//! Available acquisition criteria used to score candidates
mod ei;
mod pi;
mod ucb;

pub use ei::{expected_improvement, ei_value, ExpectedImprovement, EI};
pub use pi::{pi_value, probability_of_improvement, ProbabilityOfImprovement, PI};
pub use ucb::{ucb_value, upper_confidence_bound, UpperConfidenceBound, UCB};

use crate::errors::{AcqError, Result};
use crate::utils::{broadcast_std, check_mean, check_std};
use ndarray::{Array2, ArrayView2, Zip};

/// A trait for acquisition criterion which maximum over candidates
/// designates the next most promising point to query, given the
/// surrogate prediction (mean, standard deviation) at that point
/// and the best value observed so far.
pub trait AcquisitionCriterion {
    /// Name of the acquisition criterion
    fn name(&self) -> &'static str;

    /// Criterion value for a single prediction `mean` with standard
    /// deviation `std` with regards to the current best value `y_max`
    fn value(&self, mean: f64, std: f64, y_max: f64) -> f64;

    /// Whether the criterion divides by the standard deviation, hence
    /// requires `std > 0` for every candidate
    fn requires_positive_std(&self) -> bool {
        true
    }

    /// Whether the criterion value depends on the best value observed so far,
    /// hence requires it to be finite
    fn requires_incumbent(&self) -> bool {
        true
    }

    /// Criterion values for `n` candidates given `(n, m)` predicted means
    /// and standard deviations given either as a `(n, 1)` column or a
    /// `(n, m)` matrix. Returns a `(n, m)` score matrix.
    ///
    /// Inputs are validated before computation: non finite means or
    /// standard deviations, negative standard deviations and zero ones
    /// for criteria requiring them positive are errors, as well as a non
    /// finite `y_max` for criteria using it. A criterion value overflowing
    /// to a non finite score is an error too.
    fn values(
        &self,
        mean: &ArrayView2<f64>,
        std: &ArrayView2<f64>,
        y_max: f64,
    ) -> Result<Array2<f64>> {
        let std = broadcast_std(mean, std)?;
        check_mean(mean)?;
        check_std(&std, self.requires_positive_std())?;
        if self.requires_incumbent() && !y_max.is_finite() {
            return Err(AcqError::InvalidValue(format!(
                "{} requires a finite best value, got y_max = {y_max}",
                self.name()
            )));
        }
        let scores = Zip::from(mean)
            .and(&std)
            .map_collect(|&m, &s| self.value(m, s, y_max));
        if let Some(((i, _), v)) = scores.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(AcqError::InvalidValue(format!(
                "{} score {v} of candidate {i} is not finite",
                self.name()
            )));
        }
        Ok(scores)
    }
}

impl std::fmt::Debug for dyn AcquisitionCriterion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}
