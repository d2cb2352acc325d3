//! Acquisition scores of candidates given a fitted surrogate model.
//!
//! Each adapter predicts mean and standard deviation at the candidates,
//! reshapes the standard deviation as a column aligned with the mean
//! and evaluates the matching criterion against the surrogate best value.
use crate::criteria::{
    AcquisitionCriterion, ExpectedImprovement, ProbabilityOfImprovement, UpperConfidenceBound,
};
use crate::errors::{AcqError, Result};
use crate::surrogate::Surrogate;
use crate::utils::std_column;
use log::debug;
use ndarray::{Array2, ArrayView2};

/// Scores `x` candidates, given as a (n, xdim) matrix, with the `criterion`
/// using predictions of the `model`.
///
/// Returns a (n, m) matrix of scores, m being the number of outputs of the model.
pub fn score_by(
    criterion: &dyn AcquisitionCriterion,
    model: &dyn Surrogate,
    x: &ArrayView2<f64>,
) -> Result<Array2<f64>> {
    let (mean, std) = model.predict_valstd(x)?;
    if mean.nrows() != x.nrows() {
        return Err(AcqError::InvalidShape(format!(
            "surrogate predicted {} values for {} candidates",
            mean.nrows(),
            x.nrows()
        )));
    }
    let std = std_column(&mean, &std)?;
    let y_max = model.y_max();
    debug!(
        "{} scores of {} candidates (y_max = {})",
        criterion.name(),
        x.nrows(),
        y_max
    );
    criterion.values(&mean.view(), &std, y_max)
}

/// Probability of improvement scores of `x` candidates
pub fn score_by_pi(
    model: &dyn Surrogate,
    x: &ArrayView2<f64>,
    tradeoff: f64,
) -> Result<Array2<f64>> {
    score_by(&ProbabilityOfImprovement::new(tradeoff), model, x)
}

/// Expected improvement scores of `x` candidates
pub fn score_by_ei(
    model: &dyn Surrogate,
    x: &ArrayView2<f64>,
    tradeoff: f64,
) -> Result<Array2<f64>> {
    score_by(&ExpectedImprovement::new(tradeoff), model, x)
}

/// Upper confidence bound scores of `x` candidates
pub fn score_by_ucb(model: &dyn Surrogate, x: &ArrayView2<f64>, beta: f64) -> Result<Array2<f64>> {
    score_by(&UpperConfidenceBound::new(beta), model, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{ei_value, pi_value};
    use crate::test_utils::{NotFittedError, TabulatedSurrogate, UnfittedSurrogate};
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1};

    #[test]
    fn test_score_by_ei() {
        let model = TabulatedSurrogate::new(array![1.0, 2.0, 0.5], array![0.1, 0.1, 0.1], 1.5);
        let x = model.candidates(2);
        let ei = score_by_ei(&model, &x.view(), 0.).expect("ei scores");
        assert_eq!(ei.shape(), &[3, 1]);
        for (i, m) in [1.0, 2.0, 0.5].iter().enumerate() {
            assert_abs_diff_eq!(ei[[i, 0]], ei_value(*m, 0.1, 1.5, 0.), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_score_by_pi() {
        let model = TabulatedSurrogate::new(array![1.0, 2.0], array![0.5, 1.0], 1.5);
        let x = model.candidates(1);
        let pi = score_by_pi(&model, &x.view(), 0.1).expect("pi scores");
        assert_abs_diff_eq!(pi[[0, 0]], pi_value(1.0, 0.5, 1.5, 0.1), epsilon = 1e-15);
        assert_abs_diff_eq!(pi[[1, 0]], pi_value(2.0, 1.0, 1.5, 0.1), epsilon = 1e-15);
    }

    #[test]
    fn test_score_by_ucb_ignores_incumbent() {
        let model = TabulatedSurrogate::new(array![0., 0.], array![1., 5.], 1e6);
        let x = model.candidates(3);
        let ucb = score_by_ucb(&model, &x.view(), 2.).expect("ucb scores");
        assert_eq!(ucb, array![[2.], [10.]]);
    }

    #[test]
    fn test_score_by_non_finite_incumbent() {
        let model = TabulatedSurrogate::new(array![1., 2.], array![0.5, 1.], f64::NAN);
        let x = model.candidates(1);
        assert!(matches!(
            score_by_pi(&model, &x.view(), 0.),
            Err(AcqError::InvalidValue(_))
        ));
        // UCB does not use the incumbent
        assert!(score_by_ucb(&model, &x.view(), 1.).is_ok());

        let model = TabulatedSurrogate::new(array![1., 2.], array![0.5, 1.], f64::NEG_INFINITY);
        assert!(matches!(
            score_by_ei(&model, &x.view(), 0.),
            Err(AcqError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_score_by_multi_output() {
        let model = TabulatedSurrogate {
            mean: array![[1., 3.], [2., 0.]],
            std: array![1., 2.],
            y_max: 0.,
        };
        let x = model.candidates(1);
        let ucb = score_by_ucb(&model, &x.view(), 1.).expect("ucb scores");
        assert_eq!(ucb, array![[2., 4.], [4., 2.]]);
    }

    #[test]
    fn test_score_by_zero_std() {
        let model = TabulatedSurrogate::new(array![1., 2.], array![0., 1.], 1.5);
        let x = model.candidates(1);
        assert!(matches!(
            score_by_ei(&model, &x.view(), 0.),
            Err(AcqError::NonPositiveStd { index: 0, .. })
        ));
        assert!(matches!(
            score_by_pi(&model, &x.view(), 0.),
            Err(AcqError::NonPositiveStd { index: 0, .. })
        ));
        assert!(score_by_ucb(&model, &x.view(), 1.).is_ok());
    }

    #[test]
    fn test_score_by_std_mismatch() {
        let model = TabulatedSurrogate {
            mean: array![[1.], [2.]],
            std: array![1., 2., 3.],
            y_max: 0.,
        };
        let x = model.candidates(1);
        assert!(matches!(
            score_by_ucb(&model, &x.view(), 1.),
            Err(AcqError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_score_by_unfitted() {
        let x = Array2::<f64>::zeros((3, 2));
        match score_by_ei(&UnfittedSurrogate, &x.view(), 0.) {
            Err(AcqError::SurrogateError(err)) => {
                assert!(err.downcast_ref::<NotFittedError>().is_some())
            }
            res => panic!("unexpected {res:?}"),
        }
    }

    #[test]
    fn test_score_by_prediction_count_mismatch() {
        let model = TabulatedSurrogate::new(Array1::zeros(4), Array1::ones(4), 0.);
        let x = Array2::<f64>::zeros((3, 2));
        // tabulated surrogate refuses to predict a batch of another size
        assert!(matches!(
            score_by_ucb(&model, &x.view(), 1.),
            Err(AcqError::SurrogateError(_))
        ));
    }
}
