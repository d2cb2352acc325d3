//! This library implements acquisition functions and query strategies used to drive
//! [Bayesian optimization](https://en.wikipedia.org/wiki/Bayesian_optimization) or
//! active learning loops: given a fitted surrogate model predictions (mean and standard deviation)
//! at candidate points, candidates are scored by the expected value of querying them next
//! and the best ones are selected.
//!
//! Available criteria, to be maximized, are:
//! * Probability of Improvement (PI): `Φ((mean - y_max - tradeoff) / std)`
//! * Expected Improvement (EI): `(mean - y_max - tradeoff) Φ(z) + std φ(z)` with
//!   `z = (mean - y_max - tradeoff) / std`
//! * Upper Confidence Bound (UCB): `mean + beta std`
//!
//! where `y_max` is the best value observed so far by the surrogate.
//!
//! The surrogate model is accessed through the [`Surrogate`] trait, hence any regression
//! model able to predict a mean and a standard deviation can be used.
//! The library does not fit any model, it only scores and ranks candidates.
//!
//! # Example
//!
//! ```
//! use egobox_acq::{select_by_ei, select_by_ucb, Surrogate};
//! use ndarray::{array, Array1, Array2, ArrayView2, Axis};
//!
//! // A toy surrogate predicting x0 with an uncertainty growing with x1
//! struct Toy;
//!
//! impl Surrogate for Toy {
//!     fn predict_valstd(&self, x: &ArrayView2<f64>) -> anyhow::Result<(Array2<f64>, Array1<f64>)> {
//!         let mean = x.column(0).to_owned().insert_axis(Axis(1));
//!         let std = x.column(1).mapv(|v| 0.1 + v.abs());
//!         Ok((mean, std))
//!     }
//!
//!     fn y_max(&self) -> f64 {
//!         1.5
//!     }
//! }
//!
//! let candidates = array![[1.0, 0.0], [2.0, 0.0], [0.5, 0.0], [0.0, 2.0]];
//!
//! let res = select_by_ei(&Toy, &candidates.view(), 0., 1).expect("EI query");
//! assert_eq!(res.indices, array![1]);
//! assert_eq!(res.instances, array![[2.0, 0.0]]);
//!
//! let res = select_by_ucb(&Toy, &candidates.view(), 2., 2).expect("UCB query");
//! assert_eq!(res.indices, array![3, 1]);
//! ```
//!
//! # Usage
//!
//! Scores are computed by the `score_by_*` functions and candidates are selected
//! with the `select_by_*` functions. Both use the [`Surrogate`] prediction at candidates
//! `x` given as a (n, xdim) matrix.
//!
//! The standard deviation being one value per candidate, it is reshaped explicitly as
//! a column aligned with the (n, m) predicted mean before any computation.
//! PI and EI divide by the standard deviation: a zero standard deviation is reported as an
//! [`AcqError::NonPositiveStd`] error instead of leading to infinite or NaN scores.
//!
//! By default the selection is deterministic, candidates with equal scores being ordered
//! by lowest index first (see [`MultiArgmax`]). Random tie-break is available with
//! [`ShuffledArgmax`].
//!
//! Query parameters can also be handled with [`QueryParams`]:
//!
//! ```
//! use egobox_acq::{AcqStrategy, QueryParams, TieBreak};
//! use linfa::ParamGuard;
//!
//! let params = QueryParams::new(AcqStrategy::UCB)
//!     .beta(2.)
//!     .n_instances(5)
//!     .tie_break(TieBreak::Shuffled(Some(42)))
//!     .check()
//!     .expect("valid parameters");
//! assert_eq!(params.criterion().name(), "UCB");
//! ```
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod criteria;

mod errors;
mod parameters;
mod query;
mod scores;
mod selection;
mod surrogate;
mod types;
mod utils;

#[cfg(test)]
mod test_utils;

pub use crate::criteria::AcquisitionCriterion;
pub use crate::errors::*;
pub use crate::parameters::*;
pub use crate::query::*;
pub use crate::scores::*;
pub use crate::selection::*;
pub use crate::surrogate::*;
pub use crate::types::*;
pub use crate::utils::{norm_cdf, norm_pdf, std_column, EGOBOX_LOG};
