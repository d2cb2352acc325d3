use serde::{Deserialize, Serialize};

/// Acquisition criterion used to select next candidates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcqStrategy {
    /// Probability of Improvement
    PI,
    /// Expected Improvement
    EI,
    /// Upper Confidence Bound
    UCB,
}

/// Policy used to order candidates having equal scores
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// Lowest candidate index first
    LowestIndex,
    /// Random order, reproducible given an optional seed
    Shuffled(Option<u64>),
}
