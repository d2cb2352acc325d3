use thiserror::Error;

/// A result type for acquisition computations
pub type Result<T> = std::result::Result<T, AcqError>;

/// An error when scoring or selecting candidates
#[derive(Error, Debug)]
pub enum AcqError {
    /// When array shapes are not consistent (mean, std, candidates)
    #[error("Invalid shape: {0}")]
    InvalidShape(String),
    /// When a zero standard deviation reaches a criterion dividing by it
    #[error("Non positive standard deviation {value} for candidate {index}")]
    NonPositiveStd {
        /// Row index of the offending candidate
        index: usize,
        /// Standard deviation value found
        value: f64,
    },
    /// When an invalid value is encountered
    #[error("Value error: {0}")]
    InvalidValue(String),
    /// When configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfigError(String),
    /// When the surrogate model prediction fails
    #[error(transparent)]
    SurrogateError(#[from] anyhow::Error),
}
