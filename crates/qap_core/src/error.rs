use thiserror::Error;

use crate::sampler::SamplerError;

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("empty input: at least one position is required")]
    EmptyInput,

    #[error("dimension mismatch: {current} current positions vs {targets} target positions")]
    DimensionMismatch { current: usize, targets: usize },

    #[error("invalid cost matrix: {0}")]
    InvalidMatrix(String),

    #[error("shot count must be at least 1, got {0}")]
    InvalidShots(usize),

    #[error("sampler error: {0}")]
    Sampler(#[from] SamplerError),

    #[error("no valid sample in batch and fallback is disabled")]
    NoValidSample,
}

impl SolveError {
    /// Whether the classical fallback is allowed to recover from this error.
    ///
    /// Malformed input is never recoverable; sampler trouble and empty valid
    /// batches are, subject to the configured policy.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SolveError::Sampler(_) | SolveError::NoValidSample)
    }
}

pub type Result<T> = std::result::Result<T, SolveError>;
