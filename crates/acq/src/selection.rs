//! Top-k selection of candidates given their acquisition scores
use crate::errors::{AcqError, Result};
use std::cmp::Ordering;

use ndarray::{Array1, ArrayView1};
use ndarray_rand::rand::{seq::SliceRandom, SeedableRng};
use ndarray_stats::QuantileExt;
use rand_xoshiro::Xoshiro256Plus;

use serde::{Deserialize, Serialize};

/// A trait for selecting the `n_instances` best candidates given their scores
pub trait Selector {
    /// Returns indices of the `n_instances` highest `scores` ordered by decreasing score.
    fn select(&self, scores: &ArrayView1<f64>, n_instances: usize) -> Result<Array1<usize>>;
}

/// Check `n_instances` can be selected among the given scores
fn check_selection(scores: &ArrayView1<f64>, n_instances: usize) -> Result<()> {
    if n_instances == 0 || n_instances > scores.len() {
        return Err(AcqError::InvalidValue(format!(
            "cannot select {} instances among {} candidates",
            n_instances,
            scores.len()
        )));
    }
    if let Some(i) = scores.iter().position(|v| v.is_nan()) {
        return Err(AcqError::InvalidValue(format!(
            "score of candidate {i} is NaN"
        )));
    }
    Ok(())
}

/// Sort given candidate indices by decreasing score, the sort being stable
/// equal scores keep their relative order in `indices`
fn sort_by_score(scores: &ArrayView1<f64>, indices: &mut [usize]) {
    indices.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
    });
}

/// Deterministic selection of the highest scores,
/// ties being broken by lowest index first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiArgmax;

impl Selector for MultiArgmax {
    fn select(&self, scores: &ArrayView1<f64>, n_instances: usize) -> Result<Array1<usize>> {
        check_selection(scores, n_instances)?;
        if n_instances == 1 {
            // argmax returns the first maximum
            let best = scores
                .argmax()
                .map_err(|err| AcqError::InvalidValue(format!("argmax: {err}")))?;
            return Ok(Array1::from_elem(1, best));
        }
        let mut indices: Vec<usize> = (0..scores.len()).collect();
        sort_by_score(scores, &mut indices);
        indices.truncate(n_instances);
        Ok(Array1::from_vec(indices))
    }
}

/// Selection of the highest scores, ties being broken randomly.
///
/// A random permutation of candidates is drawn before sorting them by score,
/// the permutation is reproducible when a seed is given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffledArgmax {
    /// A random generator seed used to get reproducible selections
    pub seed: Option<u64>,
}

impl ShuffledArgmax {
    /// Constructor given an optional seed, entropy is used when none
    pub fn new(seed: Option<u64>) -> Self {
        ShuffledArgmax { seed }
    }
}

impl Selector for ShuffledArgmax {
    fn select(&self, scores: &ArrayView1<f64>, n_instances: usize) -> Result<Array1<usize>> {
        check_selection(scores, n_instances)?;
        let mut rng = match self.seed {
            Some(seed) => Xoshiro256Plus::seed_from_u64(seed),
            None => Xoshiro256Plus::from_entropy(),
        };
        let mut indices: Vec<usize> = (0..scores.len()).collect();
        indices.shuffle(&mut rng);
        sort_by_score(scores, &mut indices);
        indices.truncate(n_instances);
        Ok(Array1::from_vec(indices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::collections::HashSet;

    #[test]
    fn test_multi_argmax() {
        let scores = array![0.1, 3., -2., 7., 3.];
        assert_eq!(MultiArgmax.select(&scores.view(), 1).unwrap(), array![3]);
        assert_eq!(MultiArgmax.select(&scores.view(), 3).unwrap(), array![3, 1, 4]);
        assert_eq!(
            MultiArgmax.select(&scores.view(), 5).unwrap(),
            array![3, 1, 4, 0, 2]
        );
    }

    #[test]
    fn test_multi_argmax_ties_lowest_index_first() {
        let scores = array![1., 2., 2., 1., 2.];
        assert_eq!(MultiArgmax.select(&scores.view(), 1).unwrap(), array![1]);
        assert_eq!(MultiArgmax.select(&scores.view(), 4).unwrap(), array![1, 2, 4, 0]);
    }

    #[test]
    fn test_selection_errors() {
        let scores = array![1., 2.];
        assert!(MultiArgmax.select(&scores.view(), 0).is_err());
        assert!(MultiArgmax.select(&scores.view(), 3).is_err());
        assert!(ShuffledArgmax::new(Some(42)).select(&scores.view(), 3).is_err());
        let scores = array![1., f64::NAN, 2.];
        assert!(matches!(
            MultiArgmax.select(&scores.view(), 1),
            Err(AcqError::InvalidValue(_))
        ));
        assert!(MultiArgmax.select(&Array1::<f64>::zeros(0).view(), 1).is_err());
    }

    #[test]
    fn test_shuffled_argmax() {
        let scores = array![0.1, 3., -2., 7., 5.];
        let selector = ShuffledArgmax::new(Some(42));
        assert_eq!(selector.select(&scores.view(), 3).unwrap(), array![3, 4, 1]);
    }

    #[test]
    fn test_shuffled_argmax_ties() {
        let scores = Array1::from_elem(20, 1.);
        let selector = ShuffledArgmax::new(Some(42));
        let first = selector.select(&scores.view(), 20).unwrap();
        // reproducible with a seed
        assert_eq!(first, selector.select(&scores.view(), 20).unwrap());
        // a permutation of candidates
        let distinct: HashSet<usize> = first.iter().cloned().collect();
        assert_eq!(distinct.len(), 20);
        assert!(first.iter().all(|&i| i < 20));
        // entropy seeded selection still picks among the best
        let scores = array![1., 5., 5., 0.];
        let picked = ShuffledArgmax::default().select(&scores.view(), 2).unwrap();
        let mut picked = picked.to_vec();
        picked.sort();
        assert_eq!(picked, vec![1, 2]);
    }
}
