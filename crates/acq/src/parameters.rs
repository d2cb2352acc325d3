use crate::criteria::{
    AcquisitionCriterion, ExpectedImprovement, ProbabilityOfImprovement, UpperConfidenceBound,
};
use crate::errors::{AcqError, Result};
use crate::query::{select_by, QueryResult};
use crate::scores::score_by;
use crate::selection::{MultiArgmax, Selector, ShuffledArgmax};
use crate::surrogate::Surrogate;
use crate::types::{AcqStrategy, TieBreak};
use linfa::ParamGuard;
use ndarray::{Array2, ArrayView2};

use serde::{Deserialize, Serialize};

/// Default exploration margin of PI and EI criteria
pub const DEFAULT_TRADEOFF: f64 = 0.;
/// Default standard deviation weight of UCB criterion
pub const DEFAULT_BETA: f64 = 1.;
/// Default number of candidates selected by a query
pub const DEFAULT_N_INSTANCES: usize = 1;

/// A set of validated query parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryValidParams {
    /// Acquisition criterion used to score candidates
    pub(crate) strategy: AcqStrategy,
    /// Exploration margin used by PI and EI
    pub(crate) tradeoff: f64,
    /// Standard deviation weight used by UCB
    pub(crate) beta: f64,
    /// Number of candidates to be selected
    pub(crate) n_instances: usize,
    /// Policy regarding candidates with equal scores
    pub(crate) tie_break: TieBreak,
}

impl Default for QueryValidParams {
    fn default() -> QueryValidParams {
        QueryValidParams {
            strategy: AcqStrategy::EI,
            tradeoff: DEFAULT_TRADEOFF,
            beta: DEFAULT_BETA,
            n_instances: DEFAULT_N_INSTANCES,
            tie_break: TieBreak::LowestIndex,
        }
    }
}

impl QueryValidParams {
    /// Get acquisition strategy
    pub fn strategy(&self) -> &AcqStrategy {
        &self.strategy
    }

    /// Get tradeoff of PI and EI criteria
    pub fn tradeoff(&self) -> f64 {
        self.tradeoff
    }

    /// Get beta of UCB criterion
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Get number of candidates to be selected
    pub fn n_instances(&self) -> usize {
        self.n_instances
    }

    /// Get tie-break policy
    pub fn tie_break(&self) -> &TieBreak {
        &self.tie_break
    }

    /// Acquisition criterion configured with its parameter
    pub fn criterion(&self) -> Box<dyn AcquisitionCriterion> {
        match self.strategy {
            AcqStrategy::PI => Box::new(ProbabilityOfImprovement::new(self.tradeoff)),
            AcqStrategy::EI => Box::new(ExpectedImprovement::new(self.tradeoff)),
            AcqStrategy::UCB => Box::new(UpperConfidenceBound::new(self.beta)),
        }
    }

    /// Selector implementing the tie-break policy
    pub fn selector(&self) -> Box<dyn Selector> {
        match self.tie_break {
            TieBreak::LowestIndex => Box::new(MultiArgmax),
            TieBreak::Shuffled(seed) => Box::new(ShuffledArgmax::new(seed)),
        }
    }

    /// Scores of `x` candidates using `model` predictions
    pub fn scores(&self, model: &dyn Surrogate, x: &ArrayView2<f64>) -> Result<Array2<f64>> {
        score_by(self.criterion().as_ref(), model, x)
    }

    /// Selects the `n_instances` most promising candidates among `x`
    /// using `model` predictions
    pub fn query(&self, model: &dyn Surrogate, x: &ArrayView2<f64>) -> Result<QueryResult> {
        select_by(
            self.criterion().as_ref(),
            model,
            x,
            self.n_instances,
            self.selector().as_ref(),
        )
    }
}

/// The set of parameters that can be specified to query candidates
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParams(QueryValidParams);

impl QueryParams {
    /// A constructor for query parameters given the acquisition strategy
    pub fn new(strategy: AcqStrategy) -> QueryParams {
        Self(QueryValidParams {
            strategy,
            ..Default::default()
        })
    }

    /// A constructor for query parameters from validated parameters
    pub fn new_from_valid(params: &QueryValidParams) -> Self {
        Self(params.clone())
    }

    /// Set acquisition strategy
    pub fn strategy(mut self, strategy: AcqStrategy) -> Self {
        self.0.strategy = strategy;
        self
    }

    /// Set exploration margin used by PI and EI criteria
    pub fn tradeoff(mut self, tradeoff: f64) -> Self {
        self.0.tradeoff = tradeoff;
        self
    }

    /// Set standard deviation weight used by UCB criterion
    pub fn beta(mut self, beta: f64) -> Self {
        self.0.beta = beta;
        self
    }

    /// Set the number of candidates selected by a query.
    /// Should be 0 < n <= number of candidates
    pub fn n_instances(mut self, n_instances: usize) -> Self {
        self.0.n_instances = n_instances;
        self
    }

    /// Set the tie-break policy
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.0.tie_break = tie_break;
        self
    }
}

impl ParamGuard for QueryParams {
    type Checked = QueryValidParams;
    type Error = AcqError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.n_instances == 0 {
            return Err(AcqError::InvalidConfigError(
                "`n_instances` cannot be 0!".to_string(),
            ));
        }
        if !self.0.tradeoff.is_finite() {
            return Err(AcqError::InvalidConfigError(format!(
                "`tradeoff` should be finite, got {}",
                self.0.tradeoff
            )));
        }
        if !self.0.beta.is_finite() {
            return Err(AcqError::InvalidConfigError(format!(
                "`beta` should be finite, got {}",
                self.0.beta
            )));
        }
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
