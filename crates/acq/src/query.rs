//! Query strategies selecting the most promising candidates to be labelled next.
use crate::criteria::{
    AcquisitionCriterion, ExpectedImprovement, ProbabilityOfImprovement, UpperConfidenceBound,
};
use crate::errors::{AcqError, Result};
use crate::scores::score_by;
use crate::selection::{MultiArgmax, Selector};
use crate::surrogate::Surrogate;
use log::info;
use ndarray::{Array1, Array2, ArrayView2, Axis};

/// Query result
#[derive(Clone, Debug, PartialEq)]
pub struct QueryResult {
    /// Indices of the selected candidates ordered by decreasing score
    pub indices: Array1<usize>,
    /// Selected candidates, the ith row being the candidate at `indices[i]`
    pub instances: Array2<f64>,
}

/// Selects `n_instances` among `x` candidates, given as a (n, xdim) matrix,
/// with the highest `criterion` scores computed from `model` predictions.
///
/// The order and tie-break policy are the ones of the given `selector`.
/// Ranking requires a single output model.
pub fn select_by(
    criterion: &dyn AcquisitionCriterion,
    model: &dyn Surrogate,
    x: &ArrayView2<f64>,
    n_instances: usize,
    selector: &dyn Selector,
) -> Result<QueryResult> {
    let scores = score_by(criterion, model, x)?;
    if scores.ncols() != 1 {
        return Err(AcqError::InvalidShape(format!(
            "cannot rank candidates on {} outputs, single output expected",
            scores.ncols()
        )));
    }
    let indices = selector.select(&scores.column(0), n_instances)?;
    info!("{} selected candidates {}", criterion.name(), indices);
    let instances = x.select(Axis(0), &indices.to_vec());
    Ok(QueryResult { indices, instances })
}

/// Maximum probability of improvement query strategy.
/// Selects the `n_instances` candidates with the highest probability of improvement.
pub fn select_by_pi(
    model: &dyn Surrogate,
    x: &ArrayView2<f64>,
    tradeoff: f64,
    n_instances: usize,
) -> Result<QueryResult> {
    select_by(
        &ProbabilityOfImprovement::new(tradeoff),
        model,
        x,
        n_instances,
        &MultiArgmax,
    )
}

/// Maximum expected improvement query strategy.
/// Selects the `n_instances` candidates with the highest expected improvement.
pub fn select_by_ei(
    model: &dyn Surrogate,
    x: &ArrayView2<f64>,
    tradeoff: f64,
    n_instances: usize,
) -> Result<QueryResult> {
    select_by(
        &ExpectedImprovement::new(tradeoff),
        model,
        x,
        n_instances,
        &MultiArgmax,
    )
}

/// Maximum upper confidence bound query strategy.
/// Selects the `n_instances` candidates with the highest upper confidence bound.
pub fn select_by_ucb(
    model: &dyn Surrogate,
    x: &ArrayView2<f64>,
    beta: f64,
    n_instances: usize,
) -> Result<QueryResult> {
    select_by(
        &UpperConfidenceBound::new(beta),
        model,
        x,
        n_instances,
        &MultiArgmax,
    )
}
